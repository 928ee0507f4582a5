//! Tiffin Widget - client-side shopping cart.
//!
//! The widget keeps the cart in persistent key-value storage, renders it
//! as HTML for a modal overlay, keeps badge counts and totals in sync,
//! and serializes the order payload into a hidden form field.
//!
//! # Architecture
//!
//! The host UI environment is abstracted behind two capability traits so
//! the whole widget runs against in-memory fakes in tests:
//!
//! - [`KeyValueStore`] - persistent string storage (browser local storage
//!   in production)
//! - [`DomSink`] - the handful of document mutations the widget performs
//!
//! Control flow: a delegated click becomes a [`CartCommand`], the command
//! mutates a freshly loaded cart, the cart is saved, and the save is
//! always followed by a full re-render so displayed state never diverges
//! from storage. Carts are human-scale, so there is no diffing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod storage;
mod widget;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use events::{CartCommand, ClickTarget};
pub use render::{CartItemView, CartView, DomSink};
pub use storage::{CartStore, KeyValueStore, MemoryStore};
pub use widget::CartWidget;
