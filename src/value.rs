//! Dynamic value representation for EDN rendering.
//!
//! This module provides the [`Value`] enum, the closed set of shapes the renderer
//! understands, and the [`Kind`] discriminant used both as the dispatch key and as
//! the cross-kind precedence table for canonical ordering.
//!
//! ## Core Types
//!
//! - [`Value`]: scalars, collections, records, references, tagged values, opaque values
//! - [`Number`]: integers, big integers and floats
//! - [`Record`], [`Tagged`], [`Opaque`]: the composite non-collection payloads
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_edn_pretty::{Value, ValueMap};
//!
//! let nil = Value::Nil;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let kw = Value::keyword("status");
//!
//! let mut map = ValueMap::new();
//! map.insert(kw, Value::keyword("ok"));
//! let value = Value::Map(map);
//! assert!(value.is_collection());
//! ```
//!
//! Values own their children, so a value graph is always a finite tree.

use crate::{ValueMap, ValueSet};
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use std::fmt;

/// A dynamically-typed value that can be rendered as EDN.
///
/// Equality, ordering and hashing follow the canonical ordering in
/// [`crate::order`]: two values are equal exactly when [`crate::order::rank`]
/// returns `Equal`.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(Number),
    Char(char),
    String(String),
    Keyword(String),
    Symbol(String),
    /// An ordered sequence, usually a form headed by a symbol.
    Seq(Vec<Value>),
    Vector(Vec<Value>),
    Set(ValueSet),
    Map(ValueMap),
    Record(Record),
    /// A named binding, rendered as `#'name`.
    Reference(String),
    Tagged(Tagged),
    Opaque(Opaque),
}

/// The kind of a [`Value`].
///
/// Declaration order is the fixed precedence used when comparing values of
/// different kinds:
///
/// `Nil < Bool < Number < Char < String < Keyword < Symbol < Seq < Vector < Map
/// < Set < Record < Reference < Tagged < Opaque`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Number,
    Char,
    String,
    Keyword,
    Symbol,
    Seq,
    Vector,
    Map,
    Set,
    Record,
    Reference,
    Tagged,
    Opaque,
}

impl Kind {
    /// All kinds, in precedence order.
    pub const ALL: [Kind; 15] = [
        Kind::Nil,
        Kind::Bool,
        Kind::Number,
        Kind::Char,
        Kind::String,
        Kind::Keyword,
        Kind::Symbol,
        Kind::Seq,
        Kind::Vector,
        Kind::Map,
        Kind::Set,
        Kind::Record,
        Kind::Reference,
        Kind::Tagged,
        Kind::Opaque,
    ];

    /// Returns `true` for kinds rendered with delimiters around child values.
    ///
    /// Map entries and tagged payloads of these kinds start on their own line
    /// when the enclosing group breaks.
    #[inline]
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            Kind::Seq | Kind::Vector | Kind::Map | Kind::Set | Kind::Record
        )
    }

    /// Human-readable name used in opaque renderings and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::Char => "character",
            Kind::String => "string",
            Kind::Keyword => "keyword",
            Kind::Symbol => "symbol",
            Kind::Seq => "seq",
            Kind::Vector => "vector",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Record => "record",
            Kind::Reference => "reference",
            Kind::Tagged => "tagged",
            Kind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert!(Number::Float(f64::NAN).is_special());
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Debug)]
pub enum Number {
    Integer(i64),
    /// An integer outside the `i64` range.
    BigInt(BigInt),
    Float(f64),
}

impl Number {
    /// Returns `true` for `Integer` and `BigInt`.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` for NaN and the infinities.
    #[inline]
    #[must_use]
    pub fn is_special(&self) -> bool {
        match self {
            Number::Float(f) => !f.is_finite(),
            _ => false,
        }
    }

    /// Builds a number from a big integer, narrowing to `Integer` when it fits.
    #[must_use]
    pub fn big(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(value),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::BigInt(b) => i64::try_from(b).ok(),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to an `f64`, rounding big integers.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::BigInt(b) => b.to_string().parse().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::BigInt(b) => write!(f, "{}", b),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

number_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::big(BigInt::from(value))
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Number::big(BigInt::from(value))
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::big(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A named mapping such as a struct instance, rendered `#TypeName{...}`.
#[derive(Clone, Debug)]
pub struct Record {
    pub type_name: String,
    pub fields: ValueMap,
}

impl Record {
    pub fn new(type_name: impl Into<String>, fields: ValueMap) -> Self {
        Record {
            type_name: type_name.into(),
            fields,
        }
    }
}

/// A value carrying an extension tag, rendered `#tag payload`.
#[derive(Clone, Debug)]
pub struct Tagged {
    pub tag: String,
    pub payload: Box<Value>,
}

impl Tagged {
    pub fn new(tag: impl Into<String>, payload: Value) -> Self {
        Tagged {
            tag: tag.into(),
            payload: Box::new(payload),
        }
    }
}

/// A value the renderer knows nothing about beyond a type name and a display
/// string.
#[derive(Clone, Debug)]
pub struct Opaque {
    pub type_name: String,
    pub display: String,
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::Char(_) => Kind::Char,
            Value::String(_) => Kind::String,
            Value::Keyword(_) => Kind::Keyword,
            Value::Symbol(_) => Kind::Symbol,
            Value::Seq(_) => Kind::Seq,
            Value::Vector(_) => Kind::Vector,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
            Value::Record(_) => Kind::Record,
            Value::Reference(_) => Kind::Reference,
            Value::Tagged(_) => Kind::Tagged,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Creates a keyword. A leading `:` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::Value;
    ///
    /// assert_eq!(Value::keyword(":a"), Value::keyword("a"));
    /// ```
    pub fn keyword(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(':') {
            Some(stripped) => Value::Keyword(stripped.to_string()),
            None => Value::Keyword(name),
        }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Creates a sequence (list form).
    pub fn seq(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(elements.into_iter().collect())
    }

    pub fn vector(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Vector(elements.into_iter().collect())
    }

    /// Creates a set; duplicate elements collapse.
    pub fn set(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(elements.into_iter().collect())
    }

    /// Creates a map; later duplicate keys replace earlier ones.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    pub fn record(type_name: impl Into<String>, fields: ValueMap) -> Self {
        Value::Record(Record::new(type_name, fields))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Value::Reference(name.into())
    }

    /// Creates a tagged value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::{render_with_options, PrintOptions, Value};
    ///
    /// let value = Value::tagged("uuid", Value::from("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
    /// let text = render_with_options(&value, &PrintOptions::new()).unwrap();
    /// assert_eq!(text, "#uuid \"6ba7b810-9dad-11d1-80b4-00c04fd430c8\"");
    /// ```
    pub fn tagged(tag: impl Into<String>, payload: Value) -> Self {
        Value::Tagged(Tagged::new(tag, payload))
    }

    pub fn opaque(type_name: impl Into<String>, display: impl Into<String>) -> Self {
        Value::Opaque(Opaque {
            type_name: type_name.into(),
            display: display.into(),
        })
    }

    /// Creates an `#inst` tagged value from a UTC timestamp.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Value::tagged(
            "inst",
            Value::String(at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Nil
                | Value::Bool(_)
                | Value::Number(_)
                | Value::Char(_)
                | Value::String(_)
                | Value::Keyword(_)
                | Value::Symbol(_)
        )
    }

    /// Returns `true` if this value renders as a delimited collection.
    #[inline]
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.kind().is_collection()
    }

    #[inline]
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        matches!(self, Value::Tagged(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the name of a symbol, if this is one.
    #[inline]
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Value::Tagged(t) => Some(t),
            _ => None,
        }
    }

    /// Name of the concrete type, used by opaque renderings and strict-mode
    /// errors.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Record(r) => &r.type_name,
            Value::Opaque(o) => &o.type_name,
            Value::Tagged(t) => &t.tag,
            other => other.kind().name(),
        }
    }

    /// Immediate children, in storage order.
    pub(crate) fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Value::Seq(items) | Value::Vector(items) => Box::new(items.iter()),
            Value::Set(set) => Box::new(set.iter()),
            Value::Map(map) => Box::new(map.iter().flat_map(|(k, v)| [k, v])),
            Value::Record(record) => Box::new(record.fields.iter().flat_map(|(k, v)| [k, v])),
            Value::Tagged(tagged) => Box::new(std::iter::once(tagged.payload.as_ref())),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Maximum nesting depth of this value; scalars have depth 1.
    ///
    /// Walks the tree with an explicit stack, so arbitrarily deep values do not
    /// grow the native call stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::Value;
    ///
    /// assert_eq!(Value::from(1).depth(), 1);
    /// assert_eq!(Value::vector([Value::vector([Value::Nil])]).depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((value, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(value.children().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, i128, u128, f32, f64, BigInt);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Vector(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl From<ValueSet> for Value {
    fn from(value: ValueSet) -> Self {
        Value::Set(value)
    }
}

impl From<Tagged> for Value {
    fn from(value: Tagged) -> Self {
        Value::Tagged(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::instant(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_precedence_is_declaration_order() {
        let mut sorted = Kind::ALL;
        sorted.sort();
        assert_eq!(sorted, Kind::ALL);
        assert!(Kind::Nil < Kind::Bool);
        assert!(Kind::Map < Kind::Set);
        assert!(Kind::Tagged < Kind::Opaque);
    }

    #[test]
    fn test_collection_kinds() {
        assert!(Value::vector([]).is_collection());
        assert!(Value::record("User", ValueMap::new()).is_collection());
        assert!(!Value::tagged("inst", Value::from("x")).is_collection());
        assert!(!Value::reference("foo/bar").is_collection());
        assert!(!Value::opaque("Thread", "main").is_collection());
    }

    #[test]
    fn test_number_narrowing() {
        assert!(matches!(Number::from(7u64), Number::Integer(7)));
        assert!(matches!(Number::from(u64::MAX), Number::BigInt(_)));
        assert!(matches!(Number::from(-3i128), Number::Integer(-3)));
        assert!(matches!(Number::big(BigInt::from(5)), Number::Integer(5)));
        assert_eq!(Number::from(u64::MAX).as_i64(), None);
        assert_eq!(Number::Integer(3).as_f64(), 3.0);
    }

    #[test]
    fn test_keyword_strips_colon() {
        assert_eq!(Value::keyword(":a"), Value::Keyword("a".to_string()));
        assert_eq!(Value::keyword("b"), Value::Keyword("b".to_string()));
    }

    #[test]
    fn test_depth() {
        assert_eq!(Value::Nil.depth(), 1);
        let nested = Value::map([(
            Value::keyword("a"),
            Value::set([Value::tagged("t", Value::vector([Value::from(1)]))]),
        )]);
        assert_eq!(nested.depth(), 5);
    }

    #[test]
    fn test_instant_from_datetime() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let value = Value::from(at);
        let tagged = value.as_tagged().unwrap();
        assert_eq!(tagged.tag, "inst");
        assert_eq!(tagged.payload.as_str(), Some("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from(1).type_name(), "number");
        assert_eq!(Value::opaque("Thread", "main").type_name(), "Thread");
        assert_eq!(Value::record("User", ValueMap::new()).type_name(), "User");
    }
}
