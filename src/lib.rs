//! # serde_edn_pretty
//!
//! Canonical, optionally colored pretty-printing of structured values as EDN
//! (extensible data notation).
//!
//! ## What does it do?
//!
//! Debug dumps, test fixtures and REPL output are easier to read and diff when
//! the same data always prints the same way. This crate renders nested maps,
//! sets, vectors, seqs, scalars and user-defined tagged values into EDN text
//! whose layout and element order are deterministic: sets and map keys are
//! sorted in a canonical order that works across kinds, and long collections
//! wrap to a target width with their elements aligned.
//!
//! ## Key Features
//!
//! - **Canonical**: equal values print identically, whatever order their maps and
//!   sets were built in
//! - **Colored or plain**: one code path; color escapes never change where lines
//!   break
//! - **Extensible**: register handlers per kind of value, or tag readers that
//!   turn any value into a `#tag payload` literal
//! - **Strict mode**: refuse values that have no faithful EDN rendering
//! - **Serde Compatible**: print any `T: Serialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_edn_pretty::{render, Value};
//!
//! let value = Value::map([
//!     (Value::symbol("b"), Value::from(2)),
//!     (Value::symbol("a"), Value::from(1)),
//! ]);
//! assert_eq!(render(&value).unwrap(), "{a 1 b 2}");
//!
//! let set = Value::set([Value::from(3), Value::from(1), Value::from(2)]);
//! assert_eq!(render(&set).unwrap(), "#{1 2 3}");
//! ```
//!
//! ### Serde types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_edn_pretty::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     roles: Vec<Role>,
//! }
//!
//! #[derive(Serialize)]
//! enum Role { Admin, Ops }
//!
//! let user = User { id: 7, name: "Ada".into(), roles: vec![Role::Ops, Role::Admin] };
//! assert_eq!(
//!     to_string(&user).unwrap(),
//!     r#"#User{:id 7 :name "Ada" :roles [:Ops :Admin]}"#
//! );
//! ```
//!
//! ### Building values with the edn! macro
//!
//! ```rust
//! use serde_edn_pretty::{edn, render};
//!
//! let form = edn!((assoc {:a 1} :b #{2 3}));
//! assert_eq!(render(&form).unwrap(), "(assoc {:a 1} :b #{2 3})");
//! ```
//!
//! ### Options
//!
//! ```rust
//! use serde_edn_pretty::{render_with_options, PrintOptions, Value};
//!
//! let value = Value::vector((1..=12).map(|i| Value::from(i * 1000)));
//! let options = PrintOptions::new().with_width(30);
//! assert_eq!(
//!     render_with_options(&value, &options).unwrap(),
//!     "[1000\n 2000\n 3000\n 4000\n 5000\n 6000\n 7000\n 8000\n 9000\n 10000\n 11000\n 12000]"
//! );
//! ```
//!
//! ## Logging
//!
//! Render entry, strict-mode rejections and dispatch decisions are reported
//! through [`tracing`] at `debug` and `trace` level. The crate installs no
//! subscriber.
//!
//! ## Notation
//!
//! See [`notation`] for the printed forms, canonical order, layout rules and
//! default colors.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Rendering values and serde types
//! - **`custom_options.rs`** - Width, colors, map delimiters, strict mode and
//!   custom handlers
//!
//! Run any example with: `cargo run --example <name>`

pub mod color;
pub mod config;
pub mod dispatch;
pub mod doc;
pub mod error;
pub mod layout;
pub mod literal;
pub mod macros;
pub mod map;
pub mod notation;
pub mod options;
pub mod order;
pub mod printer;
pub mod ser;
pub mod value;

pub use color::{ColorScheme, Element, StyleAttr};
pub use dispatch::{Handler, Registry, TagReader};
pub use doc::Doc;
pub use error::{Error, Result};
pub use map::{ValueMap, ValueSet};
pub use options::{MapDelimiter, PrintOptions};
pub use printer::Canonicalizer;
pub use ser::ValueSerializer;
pub use value::{Kind, Number, Opaque, Record, Tagged, Value};

use serde::Serialize;
use std::io;

/// Renders `value` with the process-wide default options.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{render, Value};
///
/// let form = Value::seq([Value::symbol("foo"), Value::from(1), Value::from(2)]);
/// assert_eq!(render(&form).unwrap(), "(foo 1 2)");
/// ```
///
/// # Errors
///
/// Returns an error if strict mode is on and the value contains a record,
/// reference or opaque value, or if the value nests deeper than the limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render(value: &Value) -> Result<String> {
    render_with_options(value, &config::defaults())
}

/// Renders `value` with the default options and coloring switched on.
///
/// # Errors
///
/// Same as [`render`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_colored(value: &Value) -> Result<String> {
    render_with_options(value, &config::defaults().with_colors(true))
}

/// Renders `value` with explicit options.
///
/// The document is laid out at `options.width` columns and the result never
/// ends with a newline.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{render_with_options, PrintOptions, Value};
///
/// let value = Value::opaque("Socket", "127.0.0.1:80");
/// assert_eq!(
///     render_with_options(&value, &PrintOptions::new()).unwrap(),
///     "#<Socket 127.0.0.1:80>"
/// );
/// assert!(render_with_options(&value, &PrintOptions::new().with_strict_mode(true)).is_err());
/// ```
///
/// # Errors
///
/// Same as [`render`]. Nothing is laid out when canonicalization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_with_options(value: &Value, options: &PrintOptions) -> Result<String> {
    tracing::debug!(
        kind = %value.kind(),
        width = options.width,
        colored = options.colored,
        strict = options.strict,
        "rendering value"
    );
    let doc = canonicalize(value, options)?;
    let mut text = layout::layout(&Doc::Group(vec![doc]), options.width);
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Builds the document tree for `value` without laying it out.
///
/// # Errors
///
/// Same as [`render`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn canonicalize(value: &Value, options: &PrintOptions) -> Result<Doc> {
    Canonicalizer::new(options).render(value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(matches!(value, Value::Record(_)));
/// ```
///
/// # Errors
///
/// Returns an error if the type's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to EDN text with the default options.
///
/// # Errors
///
/// Returns an error if serialization or rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    render(&to_value(value)?)
}

/// Serialize any `T: Serialize` to colored EDN text.
///
/// # Errors
///
/// Returns an error if serialization or rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_colored_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    render_colored(&to_value(value)?)
}

/// Serialize any `T: Serialize` to EDN text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{to_string_with_options, PrintOptions};
/// use std::collections::HashMap;
///
/// let scores: HashMap<&str, u32> = [("bob", 3), ("amy", 5)].into_iter().collect();
/// let options = PrintOptions::new().with_map_delimiter(",");
/// assert_eq!(
///     to_string_with_options(&scores, &options).unwrap(),
///     r#"{"amy" 5, "bob" 3}"#
/// );
/// ```
///
/// # Errors
///
/// Returns an error if serialization or rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &PrintOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    render_with_options(&to_value(value)?, options)
}

/// Serialize any `T: Serialize` to a writer as EDN text.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
/// assert_eq!(buffer, b"[1 2 3]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization, rendering or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &config::defaults())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization, rendering or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &PrintOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_render_symbol_map() {
        let value = Value::map([
            (Value::symbol("b"), Value::from(2)),
            (Value::symbol("a"), Value::from(1)),
        ]);
        let text = render_with_options(&value, &PrintOptions::new()).unwrap();
        assert_eq!(text, "{a 1 b 2}");
    }

    #[test]
    fn test_struct_renders_as_record() {
        let text = to_string_with_options(&Point { x: 1, y: 2 }, &PrintOptions::new()).unwrap();
        assert_eq!(text, "#Point{:x 1 :y 2}");
    }

    #[test]
    fn test_no_trailing_newline() {
        let value = Value::vector((0..40).map(Value::from));
        let text = render_with_options(&value, &PrintOptions::new().with_width(20)).unwrap();
        assert!(text.contains('\n'));
        assert!(!text.ends_with('\n'));
        assert!(text.starts_with("[0\n 1\n"));
    }

    #[test]
    fn test_colored_render_contains_escapes() {
        let value = Value::vector([Value::from(1)]);
        let options = PrintOptions::colored();
        let text = render_with_options(&value, &options).unwrap();
        assert!(text.contains("\x1b["));
        assert_ne!(text, "[1]");
    }

    #[test]
    fn test_canonicalize_fails_before_layout() {
        let options = PrintOptions::new().with_strict_mode(true);
        let value = Value::vector([Value::reference("x")]);
        assert!(canonicalize(&value, &options).unwrap_err().is_unrepresentable());
    }

    #[test]
    fn test_writer_error_maps_to_io() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer_with_options(Broken, &1, &PrintOptions::new()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
