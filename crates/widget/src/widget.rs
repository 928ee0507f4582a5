//! The widget itself: command dispatch over storage and the document.
//!
//! All state lives in storage plus a single modal visibility flag. Every
//! mutation loads the cart fresh, applies the change, and commits through
//! one path that saves and then fully re-renders, so displayed state
//! never diverges from storage.

use tiffin_core::Cart;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::events::{CartCommand, ClickTarget};
use crate::render::{self, DomSink};
use crate::storage::{CartStore, KeyValueStore};

/// Shopping cart widget over a storage backend and a document sink.
pub struct CartWidget<S, D> {
    store: CartStore<S>,
    sink: D,
    modal_open: bool,
}

impl<S: KeyValueStore, D: DomSink> CartWidget<S, D> {
    /// Create a widget over the given backends.
    pub fn new(config: WidgetConfig, kv: S, sink: D) -> Self {
        Self {
            store: CartStore::new(kv, config.storage_key),
            sink,
            modal_open: false,
        }
    }

    /// Initial page-load hook: populate the badge counts from whatever
    /// cart is already stored.
    ///
    /// No full render happens here - the modal content is not needed
    /// until a view command arrives.
    pub fn init(&mut self) {
        let cart = self.store.load();
        render::refresh_badges(&cart, &mut self.sink);
        tracing::debug!(count = cart.total_quantity(), "cart badges initialized");
    }

    /// Handle a delegated click from the host page.
    ///
    /// Clicks that do not map to a command are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns an error if a resulting re-render fails.
    pub fn handle_click(&mut self, target: &ClickTarget) -> Result<(), WidgetError> {
        match CartCommand::from_click(target) {
            Some(command) => self.handle(command),
            None => Ok(()),
        }
    }

    /// Execute a cart command.
    ///
    /// # Errors
    ///
    /// Returns an error if a resulting re-render fails.
    pub fn handle(&mut self, command: CartCommand) -> Result<(), WidgetError> {
        match command {
            CartCommand::Add { id, name, price } => {
                let mut cart = self.store.load();
                cart.add_item(id, name, price);
                self.commit(&cart)
            }
            CartCommand::Adjust { id, delta } => {
                let mut cart = self.store.load();
                // An unknown id leaves the cart untouched but still
                // re-persists and re-renders (idempotent).
                cart.adjust_quantity(&id, delta);
                self.commit(&cart)
            }
            CartCommand::View => {
                let cart = self.store.load();
                render::render(&cart, &mut self.sink)?;
                self.modal_open = true;
                self.sink.set_modal_visible(true);
                Ok(())
            }
            CartCommand::Close => {
                self.modal_open = false;
                self.sink.set_modal_visible(false);
                Ok(())
            }
        }
    }

    /// Whether the modal is currently shown.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The document sink, for hosts (and tests) that need to inspect it.
    #[must_use]
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Save the cart, then fully re-render. The single path through which
    /// every mutation persists, keeping the save/re-render contract in
    /// one place.
    fn commit(&mut self, cart: &Cart) -> Result<(), WidgetError> {
        self.store.save(cart)?;
        render::render(cart, &mut self.sink)
    }
}
