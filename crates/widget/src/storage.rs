//! Storage adapter: the cart's one key in persistent key-value storage.
//!
//! The backend is abstracted behind [`KeyValueStore`] so the widget can
//! run against browser local storage in production and [`MemoryStore`]
//! in tests. The stored value is the serialized JSON array of cart
//! entries; every mutation rewrites it wholesale.

use tiffin_core::Cart;

/// Minimal capability interface over persistent string storage.
///
/// Browser local storage satisfies this trivially. There is exactly one
/// logical writer (the user's own interaction stream), so no locking is
/// provided; concurrent tabs are last-writer-wins.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory [`KeyValueStore`] for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// The cart's view of its storage backend.
pub struct CartStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store reading and writing the given key.
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Load the persisted cart.
    ///
    /// Fails open: an absent or malformed stored value yields an empty
    /// cart. Malformed data is logged and discarded, never surfaced as an
    /// error - the worst outcome for the user is an empty cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        let Some(raw) = self.kv.get(&self.key) else {
            return Cart::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "stored cart is malformed, starting empty");
            Cart::new()
        })
    }

    /// Serialize the full cart and overwrite the stored value.
    ///
    /// Callers must follow every save with a full re-render; the widget
    /// funnels all mutations through one commit path to enforce this.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be serialized.
    pub fn save(&mut self, cart: &Cart) -> Result<(), serde_json::Error> {
        let raw = serde_json::to_string(cart)?;
        self.kv.set(&self.key, &raw);
        Ok(())
    }
}
