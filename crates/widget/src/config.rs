//! Widget configuration.
//!
//! The widget has no environment to read from; configuration is supplied
//! by the host page when it constructs the widget. Every field has a
//! sensible default.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Shopping cart widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Key under which the serialized cart is persisted.
    pub storage_key: String,
}

impl WidgetConfig {
    /// Create a configuration with a custom storage key.
    ///
    /// Useful when several widget instances share one storage backend,
    /// e.g. in tests or a multi-store host page.
    #[must_use]
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}
