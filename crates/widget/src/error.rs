//! Unified error handling for the widget.
//!
//! The widget has no user-visible error surface: recoverable failures
//! (malformed stored data, unparseable click attributes) degrade to an
//! empty cart or a dropped command and are logged. Only failures of the
//! widget's own machinery - template rendering and serialization -
//! propagate to the host as [`WidgetError`].

use thiserror::Error;

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Rendering the cart items template failed.
    #[error("failed to render cart items: {0}")]
    Render(#[from] askama::Error),

    /// Serializing the cart or order payload failed.
    #[error("failed to serialize cart data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for [`WidgetError`].
pub type Result<T> = std::result::Result<T, WidgetError>;
