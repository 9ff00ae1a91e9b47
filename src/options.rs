//! Rendering options.
//!
//! - [`PrintOptions`]: width, coloring, strictness, depth limit, color scheme and
//!   dispatch registry
//! - [`MapDelimiter`]: text printed between map entries
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::{render_with_options, PrintOptions, Value};
//!
//! let value = Value::map([
//!     (Value::keyword("b"), Value::from(2)),
//!     (Value::keyword("a"), Value::from(1)),
//! ]);
//!
//! let options = PrintOptions::new().with_map_delimiter(",");
//! assert_eq!(render_with_options(&value, &options).unwrap(), "{:a 1, :b 2}");
//!
//! let narrow = PrintOptions::new().with_width(8);
//! assert_eq!(render_with_options(&value, &narrow).unwrap(), "{:a 1\n :b 2}");
//! ```

use crate::color::ColorScheme;
use crate::dispatch::Registry;
use crate::doc::Doc;
use crate::printer::Canonicalizer;
use crate::{Kind, Result, Tagged, Value};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Text printed between map entries, before the line break.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::MapDelimiter;
///
/// assert_eq!(MapDelimiter::None.as_str(), "");
/// assert_eq!(MapDelimiter::Comma.as_str(), ",");
/// assert_eq!(MapDelimiter::from(";").as_str(), ";");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum MapDelimiter {
    #[default]
    None,
    Comma,
    Custom(String),
}

impl MapDelimiter {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MapDelimiter::None => "",
            MapDelimiter::Comma => ",",
            MapDelimiter::Custom(s) => s,
        }
    }
}

impl From<&str> for MapDelimiter {
    fn from(value: &str) -> Self {
        match value {
            "" => MapDelimiter::None,
            "," => MapDelimiter::Comma,
            other => MapDelimiter::Custom(other.to_string()),
        }
    }
}

impl From<String> for MapDelimiter {
    fn from(value: String) -> Self {
        MapDelimiter::from(value.as_str())
    }
}

/// Options for one render.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{PrintOptions, Value};
///
/// // Defaults: 80 columns, no color, lenient.
/// let options = PrintOptions::new();
/// assert_eq!(options.width, 80);
/// assert!(!options.colored && !options.strict);
///
/// let options = PrintOptions::colored()
///     .with_width(100)
///     .with_strict_mode(true)
///     .with_max_depth(64);
/// assert!(options.colored);
/// ```
#[derive(Clone, Debug)]
pub struct PrintOptions {
    /// Target line width for the layout engine.
    pub width: usize,
    pub colored: bool,
    /// Reject records, references and opaque values instead of printing them.
    pub strict: bool,
    pub map_delimiter: MapDelimiter,
    /// Deepest nesting accepted before rendering fails.
    pub max_depth: usize,
    pub color_scheme: ColorScheme,
    pub registry: Registry,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            width: DEFAULT_WIDTH,
            colored: false,
            strict: false,
            map_delimiter: MapDelimiter::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            color_scheme: ColorScheme::default(),
            registry: Registry::standard(),
        }
    }
}

impl PrintOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with coloring switched on.
    #[must_use]
    pub fn colored() -> Self {
        PrintOptions {
            colored: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    #[must_use]
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_map_delimiter(mut self, delimiter: impl Into<MapDelimiter>) -> Self {
        self.map_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replaces the whole color scheme.
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Merges `updates` into the current color scheme.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::color::{ColorScheme, Element, StyleAttr};
    /// use serde_edn_pretty::PrintOptions;
    ///
    /// let updates = ColorScheme::parse_updates("number=bold,green").unwrap();
    /// let options = PrintOptions::colored().with_color_updates(&updates);
    /// assert_eq!(options.color_scheme.get(Element::Number), Some(&[StyleAttr::Bold, StyleAttr::Green][..]));
    /// assert_eq!(options.color_scheme.get(Element::Tag), Some(&[StyleAttr::Red][..]));
    /// ```
    #[must_use]
    pub fn with_color_updates(mut self, updates: &ColorScheme) -> Self {
        self.color_scheme.merge(updates);
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Registers a handler for `kind` on top of the current registry.
    #[must_use]
    pub fn with_handler<F>(mut self, kind: Kind, handler: F) -> Self
    where
        F: Fn(&Canonicalizer<'_>, &Value) -> Result<Doc> + Send + Sync + 'static,
    {
        self.registry = self.registry.register(kind, handler);
        self
    }

    /// Adds a tag reader on top of the current registry.
    #[must_use]
    pub fn with_tag_reader<F>(mut self, reader: F) -> Self
    where
        F: Fn(&Value) -> Option<Tagged> + Send + Sync + 'static,
    {
        self.registry = self.registry.with_tag_reader(reader);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Element, StyleAttr};

    #[test]
    fn test_defaults() {
        let options = PrintOptions::default();
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.map_delimiter, MapDelimiter::None);
        assert!(!options.colored);
        assert!(!options.strict);
        assert_eq!(options.color_scheme, ColorScheme::default());
    }

    #[test]
    fn test_builders_chain() {
        let options = PrintOptions::new()
            .with_width(40)
            .with_colors(true)
            .with_strict_mode(true)
            .with_map_delimiter(MapDelimiter::Comma)
            .with_max_depth(10);
        assert_eq!(options.width, 40);
        assert!(options.colored);
        assert!(options.strict);
        assert_eq!(options.map_delimiter.as_str(), ",");
        assert_eq!(options.max_depth, 10);
    }

    #[test]
    fn test_color_scheme_replace_vs_merge() {
        let mut only_numbers = ColorScheme::empty();
        only_numbers.set(Element::Number, vec![StyleAttr::Underline]);

        let replaced = PrintOptions::new().with_color_scheme(only_numbers.clone());
        assert_eq!(replaced.color_scheme.get(Element::Tag), None);

        let merged = PrintOptions::new().with_color_updates(&only_numbers);
        assert_eq!(merged.color_scheme.get(Element::Tag), Some(&[StyleAttr::Red][..]));
        assert_eq!(
            merged.color_scheme.get(Element::Number),
            Some(&[StyleAttr::Underline][..])
        );
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!(MapDelimiter::from(""), MapDelimiter::None);
        assert_eq!(MapDelimiter::from(","), MapDelimiter::Comma);
        assert_eq!(
            MapDelimiter::from(String::from(" ;")),
            MapDelimiter::Custom(" ;".to_string())
        );
    }
}
