//! The minimal payload submitted to the order endpoint at checkout.
//!
//! Price and name are intentionally excluded: the server re-prices every
//! line from its own catalog and never trusts client-supplied amounts.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::types::ItemId;

/// One line of the outbound order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The selected item.
    pub item_id: ItemId,
    /// Units ordered.
    pub quantity: u32,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            item_id: item.id.clone(),
            quantity: item.quantity,
        }
    }
}
