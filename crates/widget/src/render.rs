//! Render/sync layer: regenerates everything the page shows about the cart.
//!
//! Every render rebuilds the item rows, the grand total, the hidden order
//! payload field, and all badge counts from the current cart. This is a
//! full re-render - cart sizes are human-scale shopping lists, so there
//! is nothing to gain from diffing.

use askama::Template;
use rust_decimal::Decimal;
use tiffin_core::{Cart, CartItem, format_price};

use crate::error::WidgetError;

/// Minimal capability interface over the document mutations the widget
/// performs.
///
/// Production hosts route these to the modal's item container, the total
/// element, the hidden order field, every element carrying the badge
/// marker class, and the modal's visibility toggle.
pub trait DomSink {
    /// Replace the contents of the item-list container.
    fn replace_cart_items(&mut self, html: &str);

    /// Set the displayed grand total text.
    fn set_cart_total(&mut self, text: &str);

    /// Write the serialized order payload into the hidden form field.
    fn set_order_field(&mut self, value: &str);

    /// Write the total item count into every badge element.
    fn set_badge_counts(&mut self, text: &str);

    /// Show or hide the cart modal.
    fn set_modal_visible(&mut self, visible: bool);
}

impl<D: DomSink + ?Sized> DomSink for &mut D {
    fn replace_cart_items(&mut self, html: &str) {
        (**self).replace_cart_items(html);
    }

    fn set_cart_total(&mut self, text: &str) {
        (**self).set_cart_total(text);
    }

    fn set_order_field(&mut self, value: &str) {
        (**self).set_order_field(value);
    }

    fn set_badge_counts(&mut self, text: &str) {
        (**self).set_badge_counts(text);
    }

    fn set_modal_visible(&mut self, visible: bool) {
        (**self).set_modal_visible(visible);
    }
}

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub line_price: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_price(Decimal::ZERO),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_price(cart.subtotal()),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            unit_price: format_price(item.price),
            line_price: format_price(item.line_total()),
            quantity: item.quantity,
        }
    }
}

/// Cart items fragment template (rows or the empty-state message).
#[derive(Template)]
#[template(path = "cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
}

/// Full re-render of all cart-derived page state.
///
/// # Errors
///
/// Returns an error if the items template fails to render or the order
/// payload fails to serialize.
pub fn render(cart: &Cart, sink: &mut impl DomSink) -> Result<(), WidgetError> {
    let view = CartView::from(cart);
    let html = CartItemsTemplate { cart: &view }.render()?;
    sink.replace_cart_items(&html);
    sink.set_cart_total(&view.total);

    let payload = serde_json::to_string(&cart.order_lines())?;
    sink.set_order_field(&payload);

    sink.set_badge_counts(&view.item_count.to_string());
    Ok(())
}

/// Badge-count-only refresh, used on initial load before the modal has
/// ever been opened.
pub fn refresh_badges(cart: &Cart, sink: &mut impl DomSink) {
    sink.set_badge_counts(&cart.total_quantity().to_string());
}
