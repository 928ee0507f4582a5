//! The cart model: an ordered list of selected items and quantities.
//!
//! All operations are pure data manipulation. Persistence and rendering
//! live in the widget crate; the contract there is that the cart is
//! loaded fresh at the start of every mutation and fully rewritten to
//! storage afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::OrderLine;
use crate::types::ItemId;

/// A single cart entry.
///
/// Invariant: `quantity >= 1` while the item is present. An entry whose
/// quantity would drop to zero is removed from the cart, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Externally assigned product identifier (unique key within the cart).
    pub id: ItemId,
    /// Display label.
    pub name: String,
    /// Non-negative unit price in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Number of units selected.
    pub quantity: u32,
}

impl CartItem {
    /// Line total for this entry (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The user's in-progress selection, unique by item ID.
///
/// Insertion order is preserved because it is display-relevant: rows are
/// rendered in the order items were first added. Serializes transparently
/// as a bare JSON array of entries, which is the persisted storage format.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tiffin_core::{Cart, ItemId};
///
/// let mut cart = Cart::new();
/// cart.add_item(ItemId::new("chai"), "Masala Chai", Decimal::new(550, 2));
/// cart.add_item(ItemId::new("chai"), "Masala Chai", Decimal::new(550, 2));
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.total_quantity(), 2);
/// assert_eq!(cart.subtotal(), Decimal::new(1100, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<CartItem>);

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.0
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an entry by ID.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    /// Add one unit of an item.
    ///
    /// If the ID is already present its quantity is incremented by 1 and
    /// the stored name and price are left untouched; otherwise a new entry
    /// with quantity 1 is appended.
    pub fn add_item(&mut self, id: ItemId, name: impl Into<String>, price: Decimal) {
        if let Some(item) = self.0.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }
        self.0.push(CartItem {
            id,
            name: name.into(),
            price,
            quantity: 1,
        });
    }

    /// Adjust an item's quantity by a signed delta of arbitrary magnitude.
    ///
    /// If the resulting quantity is zero or below, the entry is removed
    /// entirely; there is no separate remove operation. An unknown ID is a
    /// silent no-op.
    pub fn adjust_quantity(&mut self, id: &ItemId, delta: i32) {
        let Some(pos) = self.0.iter().position(|item| &item.id == id) else {
            return;
        };
        let current = self.0.get(pos).map_or(0_i64, |item| i64::from(item.quantity));
        let next = current.saturating_add(i64::from(delta));
        if next <= 0 {
            self.0.remove(pos);
        } else if let Some(item) = self.0.get_mut(pos) {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Grand total: sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.0.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all entries (the badge number).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.0
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Build the checkout payload: ID/quantity pairs only.
    #[must_use]
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.0.iter().map(OrderLine::from).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_add_distinct_items() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.add_item(ItemId::new("B"), "Chai", price(550));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(&ItemId::new("A")).unwrap().quantity, 1);
        assert_eq!(cart.get(&ItemId::new("B")).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_item_merges() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ItemId::new("A")).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("B"), "Chai", price(550));
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.add_item(ItemId::new("B"), "Chai", price(550));

        let ids: Vec<&str> = cart.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_adjust_quantity_increments() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 1);

        assert_eq!(cart.get(&ItemId::new("A")).unwrap().quantity, 2);
    }

    #[test]
    fn test_adjust_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), -1);

        assert!(cart.is_empty());
        assert!(cart.get(&ItemId::new("A")).is_none());
    }

    #[test]
    fn test_adjust_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 1);
        cart.adjust_quantity(&ItemId::new("A"), -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        let before = cart.clone();

        cart.adjust_quantity(&ItemId::new("X"), -1);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_adjust_quantity_bulk_delta() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 4);

        assert_eq!(cart.get(&ItemId::new("A")).unwrap().quantity, 5);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 1);
        cart.add_item(ItemId::new("B"), "Chai", price(550));

        assert_eq!(cart.subtotal(), price(2550));
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 1);
        cart.add_item(ItemId::new("B"), "Chai", price(550));

        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_serde_roundtrip_preserves_everything() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.add_item(ItemId::new("B"), "Chai", price(550));
        cart.adjust_quantity(&ItemId::new("B"), 2);

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"A","name":"Samosa","price":"10.00","quantity":1}]"#
        );
    }

    #[test]
    fn test_order_lines_drop_price_and_name() {
        let mut cart = Cart::new();
        cart.add_item(ItemId::new("A"), "Samosa", price(1000));
        cart.adjust_quantity(&ItemId::new("A"), 1);
        cart.add_item(ItemId::new("B"), "Chai", price(550));

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.first().unwrap().item_id, ItemId::new("A"));
        assert_eq!(lines.first().unwrap().quantity, 2);
    }
}
