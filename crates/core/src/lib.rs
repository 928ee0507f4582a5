//! Tiffin Core - Shared cart domain types.
//!
//! This crate provides the cart model used by the widget crate:
//! - [`types`] - Newtype wrappers and money formatting
//! - [`cart`] - The cart itself and its mutation operations
//! - [`order`] - The minimal payload submitted at checkout
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no storage,
//! no rendering, no host environment access. This keeps it lightweight
//! and allows the cart logic to be tested in isolation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod types;

pub use cart::{Cart, CartItem};
pub use order::OrderLine;
pub use types::*;
