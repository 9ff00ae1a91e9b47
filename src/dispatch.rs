//! Type dispatch for canonicalization.
//!
//! A [`Registry`] decides which transformation renders a value. Lookup happens
//! in a fixed order and exactly one transformation applies:
//!
//! 1. [`Value::Tagged`] values render as tagged literals.
//! 2. Registered tag readers are asked in registration order; the first one that
//!    recognizes the value turns it into a tagged literal, whatever its kind.
//! 3. The handler registered for the value's [`Kind`].
//! 4. The opaque fallback.
//!
//! New kinds of values plug in by registering a handler or a tag reader, without
//! touching the built-in cases.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::{render_with_options, PrintOptions, Tagged, Value};
//!
//! // Records named `Point` print as `#geo/point [x y]`.
//! let options = PrintOptions::new().with_tag_reader(|value| match value {
//!     Value::Record(r) if r.type_name == "Point" => Some(Tagged::new(
//!         "geo/point",
//!         Value::vector(r.fields.sorted_entries().into_iter().map(|(_, v)| v.clone())),
//!     )),
//!     _ => None,
//! });
//!
//! let point = Value::record(
//!     "Point",
//!     [(Value::keyword("x"), Value::from(1)), (Value::keyword("y"), Value::from(2))]
//!         .into_iter()
//!         .collect(),
//! );
//! assert_eq!(render_with_options(&point, &options).unwrap(), "#geo/point [1 2]");
//! ```

use crate::doc::Doc;
use crate::printer::{self, Canonicalizer};
use crate::{Kind, Result, Tagged, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Renders one value into a document.
///
/// Handlers recurse into children through [`Canonicalizer::canonicalize`] and
/// style text through [`Canonicalizer::annotate`].
pub type Handler = Arc<dyn Fn(&Canonicalizer<'_>, &Value) -> Result<Doc> + Send + Sync>;

/// Recognizes values that should print as tagged literals.
pub type TagReader = Arc<dyn Fn(&Value) -> Option<Tagged> + Send + Sync>;

/// The transformation chosen for a value.
pub enum Resolution<'r, 'v> {
    Tagged(Cow<'v, Tagged>),
    Handler(&'r Handler),
    Fallback,
}

/// Ordered table of transformations.
#[derive(Clone)]
pub struct Registry {
    handlers: IndexMap<Kind, Handler>,
    tag_readers: Vec<TagReader>,
}

impl Registry {
    /// A registry with no handlers: everything except tagged values falls back
    /// to the opaque rendering.
    #[must_use]
    pub fn empty() -> Self {
        Registry {
            handlers: IndexMap::new(),
            tag_readers: Vec::new(),
        }
    }

    /// The built-in handlers for every kind of value.
    #[must_use]
    pub fn standard() -> Self {
        let scalar: Handler = Arc::new(printer::scalar);
        let mut registry = Registry::empty();
        for kind in [
            Kind::Nil,
            Kind::Bool,
            Kind::Number,
            Kind::Char,
            Kind::String,
            Kind::Keyword,
            Kind::Symbol,
        ] {
            registry.handlers.insert(kind, Arc::clone(&scalar));
        }
        registry
            .register(Kind::Seq, printer::seq)
            .register(Kind::Vector, printer::vector)
            .register(Kind::Set, printer::set)
            .register(Kind::Map, printer::map)
            .register(Kind::Record, printer::record)
            .register(Kind::Reference, printer::reference)
            .register(Kind::Opaque, printer::opaque)
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    ///
    /// Tagged values always take the tagged path, so a handler for
    /// [`Kind::Tagged`] is never consulted.
    #[must_use]
    pub fn register<F>(mut self, kind: Kind, handler: F) -> Self
    where
        F: Fn(&Canonicalizer<'_>, &Value) -> Result<Doc> + Send + Sync + 'static,
    {
        self.handlers.insert(kind, Arc::new(handler));
        self
    }

    /// Removes the handler for `kind`, so values of that kind fall back to the
    /// opaque rendering.
    #[must_use]
    pub fn unregister(mut self, kind: Kind) -> Self {
        self.handlers.shift_remove(&kind);
        self
    }

    /// Adds a tag reader. Readers run before kind dispatch, in the order they
    /// were added.
    #[must_use]
    pub fn with_tag_reader<F>(mut self, reader: F) -> Self
    where
        F: Fn(&Value) -> Option<Tagged> + Send + Sync + 'static,
    {
        self.tag_readers.push(Arc::new(reader));
        self
    }

    #[must_use]
    pub fn handler(&self, kind: Kind) -> Option<&Handler> {
        self.handlers.get(&kind)
    }

    /// Returns the tagged form of `value`, if it has one.
    #[must_use]
    pub fn read_tag<'v>(&self, value: &'v Value) -> Option<Cow<'v, Tagged>> {
        if let Value::Tagged(tagged) = value {
            return Some(Cow::Borrowed(tagged));
        }
        self.tag_readers
            .iter()
            .find_map(|reader| reader(value))
            .map(Cow::Owned)
    }

    /// Chooses the transformation for `value`.
    #[must_use]
    pub fn resolve<'r, 'v>(&'r self, value: &'v Value) -> Resolution<'r, 'v> {
        if let Some(tagged) = self.read_tag(value) {
            return Resolution::Tagged(tagged);
        }
        match self.handlers.get(&value.kind()) {
            Some(handler) => Resolution::Handler(handler),
            None => Resolution::Fallback,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("tag_readers", &self.tag_readers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_kind_but_tagged() {
        let registry = Registry::standard();
        for kind in Kind::ALL {
            assert_eq!(
                registry.handler(kind).is_some(),
                kind != Kind::Tagged,
                "{}",
                kind
            );
        }
    }

    #[test]
    fn test_tagged_values_resolve_to_tagged() {
        let registry = Registry::standard();
        let value = Value::tagged("inst", Value::from("2024-01-01"));
        assert!(matches!(
            registry.resolve(&value),
            Resolution::Tagged(Cow::Borrowed(_))
        ));
    }

    #[test]
    fn test_tag_reader_preempts_kind_dispatch() {
        let registry = Registry::standard().with_tag_reader(|value| match value {
            Value::String(s) if s.starts_with("urn:") => {
                Some(Tagged::new("urn", Value::from(&s[4..])))
            }
            _ => None,
        });
        let urn = Value::from("urn:isbn:0451450523");
        match registry.resolve(&urn) {
            Resolution::Tagged(tagged) => {
                assert_eq!(tagged.tag, "urn");
                assert_eq!(tagged.payload.as_str(), Some("isbn:0451450523"));
            }
            _ => panic!("expected tagged resolution"),
        }
        assert!(matches!(
            registry.resolve(&Value::from("plain")),
            Resolution::Handler(_)
        ));
    }

    #[test]
    fn test_first_tag_reader_wins() {
        let registry = Registry::standard()
            .with_tag_reader(|v| v.as_i64().map(|_| Tagged::new("first", Value::Nil)))
            .with_tag_reader(|v| v.as_i64().map(|_| Tagged::new("second", Value::Nil)));
        match registry.resolve(&Value::from(1)) {
            Resolution::Tagged(tagged) => assert_eq!(tagged.tag, "first"),
            _ => panic!("expected tagged resolution"),
        }
    }

    #[test]
    fn test_unregistered_kind_falls_back() {
        let registry = Registry::standard().unregister(Kind::Vector);
        assert!(matches!(
            registry.resolve(&Value::vector([])),
            Resolution::Fallback
        ));
        assert!(matches!(
            Registry::empty().resolve(&Value::Nil),
            Resolution::Fallback
        ));
    }
}
