//! Error types for canonical EDN rendering.
//!
//! Rendering is a pure transform, so the failure surface is small:
//!
//! - **Unrepresentable values**: raised only in strict mode, when a value has no
//!   explicit rendering (records, references, opaque values)
//! - **Depth limit**: the value nests deeper than the configured maximum
//! - **Configuration errors**: malformed color scheme updates; never raised while
//!   rendering
//! - **I/O errors**: writing rendered text to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::{render_with_options, Error, PrintOptions, Value};
//!
//! let value = Value::opaque("java.io.File", "/tmp/x");
//! let options = PrintOptions::new().with_strict_mode(true);
//!
//! match render_with_options(&value, &options) {
//!     Err(Error::UnrepresentableValue { type_name, .. }) => {
//!         assert_eq!(type_name, "java.io.File");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Strict mode found a value with no explicit rendering.
    #[error("Unrepresentable value of type {type_name}: {display}")]
    UnrepresentableValue { type_name: String, display: String },

    /// The value nests deeper than the configured limit.
    #[error("Value nesting depth {depth} exceeds the limit of {limit}")]
    DepthLimitExceeded { depth: usize, limit: usize },

    /// Malformed color scheme update
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unrepresentable-value error for strict mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::Error;
    ///
    /// let err = Error::unrepresentable("Thread", "main");
    /// assert!(err.to_string().contains("Thread"));
    /// ```
    pub fn unrepresentable(type_name: &str, display: &str) -> Self {
        Error::UnrepresentableValue {
            type_name: type_name.to_string(),
            display: display.to_string(),
        }
    }

    /// Creates a depth-limit error.
    pub fn depth_limit(depth: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { depth, limit }
    }

    /// Creates a configuration error for malformed scheme updates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::Error;
    ///
    /// let err = Error::configuration("unknown element `numbr`");
    /// assert!(err.to_string().contains("numbr"));
    /// ```
    pub fn configuration<T: fmt::Display>(msg: T) -> Self {
        Error::Configuration(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error came from strict mode.
    #[must_use]
    pub fn is_unrepresentable(&self) -> bool {
        matches!(self, Error::UnrepresentableValue { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
