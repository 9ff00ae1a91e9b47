//! Canonicalization of values into document trees.
//!
//! [`Canonicalizer`] walks a [`Value`], asks the [`Registry`](crate::dispatch::Registry)
//! which transformation applies at each node, and assembles the resulting
//! [`Doc`]. The built-in handlers live here too; they are what
//! [`Registry::standard`](crate::dispatch::Registry::standard) installs.

use crate::color::{Element, Palette};
use crate::dispatch::Resolution;
use crate::doc::Doc;
use crate::literal::{escape_control, render_literal};
use crate::options::PrintOptions;
use crate::{Error, Kind, Result, Value, ValueMap};
use std::cell::Cell;
use std::fmt;

/// Turns values into documents under one set of options.
pub struct Canonicalizer<'a> {
    options: &'a PrintOptions,
    palette: Palette<'a>,
    depth: Cell<usize>,
}

impl<'a> Canonicalizer<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Canonicalizer {
            options,
            palette: Palette::new(&options.color_scheme, options.colored),
            depth: Cell::new(0),
        }
    }

    #[must_use]
    pub fn options(&self) -> &PrintOptions {
        self.options
    }

    #[must_use]
    pub fn palette(&self) -> Palette<'a> {
        self.palette
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Wraps `doc` in the style for `element`, if coloring is on.
    #[must_use]
    pub fn annotate(&self, element: Element, doc: Doc) -> Doc {
        self.palette.annotate(element, doc)
    }

    /// A text leaf styled as `element`.
    #[must_use]
    pub fn styled(&self, element: Element, text: impl Into<String>) -> Doc {
        self.palette.text(element, text)
    }

    /// Checks the nesting depth of `value`, then canonicalizes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] when `value` nests deeper than
    /// the configured limit, before any document is built.
    pub fn render(&self, value: &Value) -> Result<Doc> {
        let depth = value.depth();
        if depth > self.options.max_depth {
            tracing::debug!(depth, limit = self.options.max_depth, "value nests too deeply");
            return Err(Error::depth_limit(depth, self.options.max_depth));
        }
        self.canonicalize(value)
    }

    /// Builds the document for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableValue`] for records, references and
    /// opaque values in strict mode, and [`Error::DepthLimitExceeded`] when
    /// handlers recurse past the configured limit.
    pub fn canonicalize(&self, value: &Value) -> Result<Doc> {
        let _level = self.descend()?;
        match self.options.registry.resolve(value) {
            Resolution::Tagged(tagged) => {
                tracing::trace!(tag = %tagged.tag, kind = %value.kind(), "rendering tagged literal");
                self.tagged(&tagged.tag, &tagged.payload)
            }
            Resolution::Handler(handler) => {
                tracing::trace!(kind = %value.kind(), "dispatching to handler");
                handler(self, value)
            }
            Resolution::Fallback => {
                tracing::trace!(kind = %value.kind(), "no handler, using opaque fallback");
                opaque(self, value)
            }
        }
    }

    /// Renders `#tag payload`.
    pub fn tagged(&self, tag: &str, payload: &Value) -> Result<Doc> {
        let separator = if self.renders_as_collection(payload) {
            Doc::Line
        } else {
            Doc::text(" ")
        };
        Ok(Doc::Concat(vec![
            self.styled(Element::Tag, format!("#{}", tag)),
            separator,
            self.canonicalize(payload)?,
        ]))
    }

    /// Renders the entries of `map` in key order between braces.
    pub fn map_body(&self, map: &ValueMap) -> Result<Doc> {
        if map.is_empty() {
            return Ok(self.styled(Element::Delimiter, "{}"));
        }
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map.sorted_entries() {
            let separator = if self.renders_as_collection(value) {
                Doc::Line
            } else {
                Doc::text(" ")
            };
            entries.push(Doc::Concat(vec![
                self.canonicalize(key)?,
                separator,
                self.canonicalize(value)?,
            ]));
        }
        let delimiter = self.options.map_delimiter.as_str();
        let separator = if delimiter.is_empty() {
            Doc::Line
        } else {
            Doc::Concat(vec![self.styled(Element::Delimiter, delimiter), Doc::Line])
        };
        Ok(self.delimited("{", entries, &separator, "}"))
    }

    /// `Group[open, Align[items joined by separator], close]`.
    #[must_use]
    pub fn delimited(&self, open: &str, items: Vec<Doc>, separator: &Doc, close: &str) -> Doc {
        Doc::Group(vec![
            self.styled(Element::Delimiter, open),
            Doc::Align(Doc::interpose(items, separator)),
            self.styled(Element::Delimiter, close),
        ])
    }

    fn renders_as_collection(&self, value: &Value) -> bool {
        value.is_collection() && self.options.registry.read_tag(value).is_none()
    }

    fn canonicalize_all<'v>(&self, values: impl IntoIterator<Item = &'v Value>) -> Result<Vec<Doc>> {
        values.into_iter().map(|v| self.canonicalize(v)).collect()
    }

    fn reject(&self, value: &Value, display: &str) -> Error {
        tracing::debug!(
            type_name = value.type_name(),
            "rejecting unrepresentable value in strict mode"
        );
        Error::unrepresentable(value.type_name(), display)
    }

    fn descend(&self) -> Result<Level<'_>> {
        let depth = self.depth.get() + 1;
        if depth > self.options.max_depth {
            return Err(Error::depth_limit(depth, self.options.max_depth));
        }
        self.depth.set(depth);
        Ok(Level(&self.depth))
    }
}

impl fmt::Debug for Canonicalizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canonicalizer")
            .field("options", self.options)
            .field("depth", &self.depth.get())
            .finish()
    }
}

/// Leaves one nesting level when dropped.
struct Level<'c>(&'c Cell<usize>);

impl Drop for Level<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

/// Renders with the process-wide defaults. Failures print as `#<error ...>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::render(self) {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "#<error {}>", err),
        }
    }
}

pub(crate) fn scalar(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let element = match value.kind() {
        Kind::Nil => Element::Nil,
        Kind::Bool => Element::Boolean,
        Kind::Number => Element::Number,
        Kind::Char => Element::Character,
        Kind::String => Element::String,
        Kind::Keyword => Element::Keyword,
        Kind::Symbol => Element::Symbol,
        _ => return opaque(c, value),
    };
    match render_literal(value) {
        Some(text) => Ok(c.styled(element, text)),
        None => opaque(c, value),
    }
}

pub(crate) fn seq(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let Value::Seq(items) = value else {
        return opaque(c, value);
    };
    if items.is_empty() {
        return Ok(c.styled(Element::Delimiter, "()"));
    }
    let mut docs = Vec::with_capacity(items.len());
    let mut rest = items.iter();
    // A head a tag reader claims renders as its tagged form like any element.
    if let Some(head @ Value::Symbol(name)) = items.first() {
        if c.options().registry.read_tag(head).is_none() {
            docs.push(c.styled(Element::FunctionSymbol, name.clone()));
            rest.next();
        }
    }
    docs.extend(c.canonicalize_all(rest)?);
    Ok(c.delimited("(", docs, &Doc::Line, ")"))
}

pub(crate) fn vector(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let Value::Vector(items) = value else {
        return opaque(c, value);
    };
    if items.is_empty() {
        return Ok(c.styled(Element::Delimiter, "[]"));
    }
    let docs = c.canonicalize_all(items)?;
    Ok(c.delimited("[", docs, &Doc::Line, "]"))
}

pub(crate) fn set(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let Value::Set(items) = value else {
        return opaque(c, value);
    };
    if items.is_empty() {
        return Ok(c.styled(Element::Delimiter, "#{}"));
    }
    let docs = c.canonicalize_all(items.sorted())?;
    Ok(c.delimited("#{", docs, &Doc::Line, "}"))
}

pub(crate) fn map(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    match value {
        Value::Map(map) => c.map_body(map),
        other => opaque(c, other),
    }
}

pub(crate) fn record(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let Value::Record(record) = value else {
        return opaque(c, value);
    };
    if c.is_strict() {
        let display = Doc::Concat(vec![
            Doc::text(format!("#{}", record.type_name)),
            c.map_body(&record.fields)?,
        ]);
        return Err(c.reject(value, &display.flat_text()));
    }
    Ok(Doc::Concat(vec![
        c.styled(Element::ClassDelimiter, "#"),
        c.styled(Element::ClassName, record.type_name.clone()),
        c.map_body(&record.fields)?,
    ]))
}

pub(crate) fn reference(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let Value::Reference(name) = value else {
        return opaque(c, value);
    };
    if c.is_strict() {
        return Err(c.reject(value, &format!("#'{}", name)));
    }
    Ok(Doc::Concat(vec![
        c.styled(Element::Delimiter, "#'"),
        c.styled(Element::Symbol, name.clone()),
    ]))
}

/// Renders `#<TypeName display>`; also the fallback for values no handler
/// claims.
pub(crate) fn opaque(c: &Canonicalizer<'_>, value: &Value) -> Result<Doc> {
    let display = match value {
        Value::Opaque(o) => escape_control(&o.display),
        other => escape_control(&fallback_display(other)),
    };
    if c.is_strict() {
        return Err(c.reject(value, &display));
    }
    Ok(Doc::Concat(vec![
        c.styled(Element::Delimiter, "#<"),
        c.styled(Element::ClassName, value.type_name().to_string()),
        Doc::text(" "),
        Doc::text(display),
        c.styled(Element::Delimiter, ">"),
    ]))
}

/// The standard flat rendering of a value no handler claimed.
fn fallback_display(value: &Value) -> String {
    if let Some(text) = render_literal(value) {
        return text;
    }
    let standard = PrintOptions::new();
    match Canonicalizer::new(&standard).render(value) {
        Ok(doc) => doc.flat_text(),
        Err(err) => {
            tracing::debug!(kind = %value.kind(), error = %err, "no display for fallback value");
            value.kind().name().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;

    fn flat(value: &Value, options: &PrintOptions) -> String {
        Canonicalizer::new(options)
            .render(value)
            .unwrap()
            .flat_text()
    }

    fn kv(pairs: &[(&str, i64)]) -> ValueMap {
        pairs
            .iter()
            .map(|(k, v)| (Value::keyword(*k), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_scalars() {
        let options = PrintOptions::new();
        assert_eq!(flat(&Value::Nil, &options), "nil");
        assert_eq!(flat(&Value::from(true), &options), "true");
        assert_eq!(flat(&Value::from(-3), &options), "-3");
        assert_eq!(flat(&Value::from("hi"), &options), "\"hi\"");
        assert_eq!(flat(&Value::keyword("a"), &options), ":a");
        assert_eq!(flat(&Value::symbol("x"), &options), "x");
    }

    #[test]
    fn test_empty_collections() {
        let options = PrintOptions::new();
        assert_eq!(flat(&Value::seq([]), &options), "()");
        assert_eq!(flat(&Value::vector([]), &options), "[]");
        assert_eq!(flat(&Value::set([]), &options), "#{}");
        assert_eq!(flat(&Value::map([]), &options), "{}");
    }

    #[test]
    fn test_seq_head_is_function_symbol() {
        let options = PrintOptions::new().with_colors(true);
        let value = Value::seq([Value::symbol("foo"), Value::from(1), Value::symbol("bar")]);
        let doc = Canonicalizer::new(&options).render(&value).unwrap();
        assert_eq!(doc.flat_text(), "(foo 1 bar)");
        let styled = doc.styled_elements();
        assert!(styled.contains(&(Element::FunctionSymbol, "foo".to_string())));
        assert!(!styled.iter().any(|(_, text)| text == "bar"));
    }

    #[test]
    fn test_seq_head_claimed_by_tag_reader() {
        let options = PrintOptions::new()
            .with_colors(true)
            .with_tag_reader(|value| match value {
                Value::Symbol(name) if name == "foo" => {
                    Some(crate::Tagged::new("sym", Value::from(name.as_str())))
                }
                _ => None,
            });
        let value = Value::seq([Value::symbol("foo"), Value::symbol("foo"), Value::symbol("bar")]);
        let doc = Canonicalizer::new(&options).render(&value).unwrap();
        assert_eq!(doc.flat_text(), "(#sym \"foo\" #sym \"foo\" bar)");
        assert!(!doc
            .styled_elements()
            .iter()
            .any(|(element, _)| *element == Element::FunctionSymbol));
    }

    #[test]
    fn test_map_separators() {
        let options = PrintOptions::new();
        let mut map = ValueMap::new();
        map.insert(Value::keyword("b"), Value::vector([Value::from(1)]));
        map.insert(Value::keyword("a"), Value::from(1));
        let doc = Canonicalizer::new(&options).render(&Value::from(map)).unwrap();
        assert_eq!(doc.flat_text(), "{:a 1 :b [1]}");
        assert_eq!(layout(&doc, 6), "{:a 1\n :b\n [1]}");
    }

    #[test]
    fn test_map_delimiter() {
        let options = PrintOptions::new().with_map_delimiter(",");
        let value = Value::from(kv(&[("b", 2), ("a", 1)]));
        assert_eq!(flat(&value, &options), "{:a 1, :b 2}");
    }

    #[test]
    fn test_record_and_reference() {
        let options = PrintOptions::new();
        let record = Value::record("user.Account", kv(&[("id", 7)]));
        assert_eq!(flat(&record, &options), "#user.Account{:id 7}");
        assert_eq!(flat(&Value::reference("core/inc"), &options), "#'core/inc");
    }

    #[test]
    fn test_tagged_payload_separator() {
        let options = PrintOptions::new();
        let scalar = Value::tagged("uuid", Value::from("f81d4fae"));
        assert_eq!(flat(&scalar, &options), "#uuid \"f81d4fae\"");

        let nested = Value::tagged("point", Value::vector([Value::from(1), Value::from(2)]));
        let doc = Canonicalizer::new(&options).render(&nested).unwrap();
        assert_eq!(layout(&Doc::Group(vec![doc]), 80), "#point [1 2]");
    }

    #[test]
    fn test_opaque() {
        let options = PrintOptions::new();
        let value = Value::opaque("Socket", "127.0.0.1:80");
        assert_eq!(flat(&value, &options), "#<Socket 127.0.0.1:80>");
    }

    #[test]
    fn test_opaque_display_stays_on_one_line() {
        let options = PrintOptions::new();
        let value = Value::vector([Value::opaque("T", "line1\nline2"), Value::from(1)]);
        let doc = Canonicalizer::new(&options).render(&value).unwrap();
        assert_eq!(doc.flat_text(), "[#<T line1\\nline2> 1]");
        assert_eq!(layout(&doc, 80), "[#<T line1\\nline2> 1]");
    }

    #[test]
    fn test_strict_mode_rejections() {
        let options = PrintOptions::new().with_strict_mode(true);
        let canonicalizer = Canonicalizer::new(&options);

        let err = canonicalizer.render(&Value::opaque("Socket", "s")).unwrap_err();
        assert_eq!(err, Error::unrepresentable("Socket", "s"));

        let err = canonicalizer.render(&Value::reference("inc")).unwrap_err();
        assert!(err.is_unrepresentable());

        let nested = Value::vector([Value::from(1), Value::record("R", ValueMap::new())]);
        assert!(canonicalizer.render(&nested).unwrap_err().is_unrepresentable());

        assert_eq!(
            canonicalizer
                .render(&Value::tagged("inst", Value::from("2024")))
                .unwrap()
                .flat_text(),
            "#inst \"2024\""
        );
    }

    #[test]
    fn test_fallback_for_unregistered_kind() {
        let options = PrintOptions::new()
            .with_registry(crate::dispatch::Registry::standard().unregister(Kind::Number));
        assert_eq!(flat(&Value::from(5), &options), "#<number 5>");
    }

    #[test]
    fn test_fallback_displays_collections_as_edn() {
        let options = PrintOptions::new()
            .with_registry(crate::dispatch::Registry::standard().unregister(Kind::Vector));
        let value = Value::vector([Value::from(1), Value::from("a\nb")]);
        assert_eq!(flat(&value, &options), "#<vector [1 \"a\\nb\"]>");
    }

    #[test]
    fn test_custom_handler_recurses() {
        let options = PrintOptions::new().with_handler(Kind::Vector, |c, value| {
            let items = match value {
                Value::Vector(items) => items,
                _ => return Ok(Doc::Empty),
            };
            let docs = items
                .iter()
                .map(|v| c.canonicalize(v))
                .collect::<Result<Vec<_>>>()?;
            Ok(c.delimited("<", docs, &Doc::text(" | "), ">"))
        });
        let value = Value::vector([Value::from(1), Value::keyword("k")]);
        assert_eq!(flat(&value, &options), "<1 | :k>");
    }

    #[test]
    fn test_depth_limit() {
        let mut value = Value::from(0);
        for _ in 0..5 {
            value = Value::vector([value]);
        }
        assert_eq!(value.depth(), 6);

        let at_limit = PrintOptions::new().with_max_depth(6);
        assert_eq!(flat(&value, &at_limit), "[[[[[0]]]]]");

        let below = PrintOptions::new().with_max_depth(5);
        let err = Canonicalizer::new(&below).render(&value).unwrap_err();
        assert_eq!(err, Error::depth_limit(6, 5));
    }
}
