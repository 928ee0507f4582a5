//! Event wiring: delegated clicks become cart commands.
//!
//! The host page installs a single delegated click listener at a common
//! ancestor. When a click lands on (or inside) a control carrying one of
//! the [`actions`] tags, the host builds a [`ClickTarget`] from the
//! control's data attributes and hands it to the widget. The command
//! table here decouples what triggers from what happens.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tiffin_core::ItemId;

/// Action tags carried by cart controls.
pub mod actions {
    /// "Add to cart" controls on the menu page.
    pub const ADD_TO_CART: &str = "add-to-cart";
    /// "View cart" controls in the navbars.
    pub const VIEW_CART: &str = "view-cart";
    /// The close control, or a click directly on the modal's background
    /// overlay.
    pub const CLOSE_CART: &str = "close-cart";
    /// Quantity increment/decrement controls inside the modal.
    pub const QUANTITY: &str = "quantity";
}

/// Data attribute names read off cart controls.
mod data_keys {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const CHANGE: &str = "change";
}

/// A delegated click, reduced to the clicked control's action tag and
/// data attributes.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    action: String,
    dataset: HashMap<String, String>,
}

impl ClickTarget {
    /// Create a click target for an action tag.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            dataset: HashMap::new(),
        }
    }

    /// Attach a data attribute.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}

/// A cart mutation or modal transition requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of an item (from an "add to cart" control).
    Add {
        id: ItemId,
        name: String,
        price: Decimal,
    },
    /// Adjust an item's quantity by a signed delta.
    Adjust { id: ItemId, delta: i32 },
    /// Render the cart and show the modal.
    View,
    /// Hide the modal.
    Close,
}

impl CartCommand {
    /// Map a delegated click to a command.
    ///
    /// Unknown action tags and unparseable attributes yield `None`: the
    /// widget has no user-visible error states, so a broken control is
    /// logged and the click is dropped.
    #[must_use]
    pub fn from_click(target: &ClickTarget) -> Option<Self> {
        match target.action.as_str() {
            actions::ADD_TO_CART => Self::parse_add(target),
            actions::QUANTITY => Self::parse_adjust(target),
            actions::VIEW_CART => Some(Self::View),
            actions::CLOSE_CART => Some(Self::Close),
            other => {
                tracing::debug!(action = other, "ignoring click on unknown cart action");
                None
            }
        }
    }

    fn parse_add(target: &ClickTarget) -> Option<Self> {
        let id = target.data(data_keys::ID)?;
        let name = target.data(data_keys::NAME)?;
        let raw_price = target.data(data_keys::PRICE)?;

        let price = match raw_price.parse::<Decimal>() {
            Ok(price) if price >= Decimal::ZERO => price,
            Ok(_) | Err(_) => {
                tracing::warn!(id, price = raw_price, "dropping add with invalid price");
                return None;
            }
        };

        Some(Self::Add {
            id: ItemId::new(id),
            name: name.to_owned(),
            price,
        })
    }

    fn parse_adjust(target: &ClickTarget) -> Option<Self> {
        let id = target.data(data_keys::ID)?;
        let raw_delta = target.data(data_keys::CHANGE)?;

        let Ok(delta) = raw_delta.parse::<i32>() else {
            tracing::warn!(id, change = raw_delta, "dropping quantity click with invalid delta");
            return None;
        };

        Some(Self::Adjust {
            id: ItemId::new(id),
            delta,
        })
    }
}
