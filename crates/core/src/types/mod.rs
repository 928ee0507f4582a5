//! Core types for Tiffin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;

pub use id::ItemId;
pub use money::{CURRENCY_SYMBOL, format_price};
