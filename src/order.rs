//! Canonical ordering over values of any kind.
//!
//! [`rank`] is a total order used to sort set elements and map keys before
//! rendering, so collection output never depends on insertion history or hashing.
//!
//! Values of different kinds compare by the fixed [`Kind`] precedence:
//!
//! ```text
//! nil < boolean < number < character < string < keyword < symbol
//!     < seq < vector < map < set < record < reference < tagged < opaque
//! ```
//!
//! Values of the same kind use their natural order. Numbers compare by exact
//! magnitude across integer, big integer and float representations; NaN sorts
//! after every other number. Sequential collections compare element by element,
//! shorter first on a common prefix. Sets and maps compare their canonically
//! sorted contents the same way. Tagged values compare by tag, then payload.
//!
//! [`Value`]'s `Eq`, `Ord` and `Hash` implementations are defined in terms of
//! `rank`, so `a == b` exactly when `rank(a, b) == Ordering::Equal`.
//!
//! ```rust
//! use serde_edn_pretty::{order::rank, Value};
//! use std::cmp::Ordering;
//!
//! assert_eq!(rank(&Value::Nil, &Value::from(false)), Ordering::Less);
//! assert_eq!(rank(&Value::from(2), &Value::from(1.5)), Ordering::Greater);
//! assert_eq!(rank(&Value::from("b"), &Value::keyword("a")), Ordering::Less);
//! ```

use crate::{Kind, Number, Value};
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Compares two values in canonical order.
#[must_use]
pub fn rank(a: &Value, b: &Value) -> Ordering {
    let (ka, kb) = (a.kind(), b.kind());
    if ka != kb {
        return ka.cmp(&kb);
    }

    match (a, b) {
        (Value::Nil, Value::Nil) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::Char(x), Value::Char(y)) => x.cmp(y),
        (Value::String(x), Value::String(y))
        | (Value::Keyword(x), Value::Keyword(y))
        | (Value::Symbol(x), Value::Symbol(y))
        | (Value::Reference(x), Value::Reference(y)) => x.cmp(y),
        (Value::Seq(x), Value::Seq(y)) | (Value::Vector(x), Value::Vector(y)) => {
            lexicographic(x.iter(), y.iter())
        }
        (Value::Set(x), Value::Set(y)) => lexicographic(x.sorted(), y.sorted()),
        (Value::Map(x), Value::Map(y)) => compare_entries(x, y),
        (Value::Record(x), Value::Record(y)) => x
            .type_name
            .cmp(&y.type_name)
            .then_with(|| compare_entries(&x.fields, &y.fields)),
        (Value::Tagged(x), Value::Tagged(y)) => x
            .tag
            .cmp(&y.tag)
            .then_with(|| rank(&x.payload, &y.payload)),
        (Value::Opaque(x), Value::Opaque(y)) => x
            .type_name
            .cmp(&y.type_name)
            .then_with(|| x.display.cmp(&y.display)),
        _ => unreachable!("values of kind {} compared across variants", ka),
    }
}

fn lexicographic<'a>(
    a: impl IntoIterator<Item = &'a Value>,
    b: impl IntoIterator<Item = &'a Value>,
) -> Ordering {
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match rank(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn compare_entries(a: &crate::ValueMap, b: &crate::ValueMap) -> Ordering {
    let a = a.sorted_entries();
    let b = b.sorted_entries();
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        match rank(ka, kb).then_with(|| rank(va, vb)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Compares numbers by exact magnitude.
///
/// Equal magnitudes in different representations order
/// `Integer < BigInt < Float`, so the order stays antisymmetric.
#[must_use]
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    let by_value = match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x.cmp(y),
        (Number::BigInt(x), Number::BigInt(y)) => x.cmp(y),
        (Number::Integer(x), Number::BigInt(y)) => BigInt::from(*x).cmp(y),
        (Number::BigInt(x), Number::Integer(y)) => x.cmp(&BigInt::from(*y)),
        (Number::Float(x), Number::Float(y)) => compare_floats(*x, *y),
        (Number::Integer(x), Number::Float(y)) => compare_integer_float(&BigInt::from(*x), *y),
        (Number::BigInt(x), Number::Float(y)) => compare_integer_float(x, *y),
        (Number::Float(x), Number::Integer(y)) => {
            compare_integer_float(&BigInt::from(*y), *x).reverse()
        }
        (Number::Float(x), Number::BigInt(y)) => compare_integer_float(y, *x).reverse(),
    };
    by_value.then_with(|| representation(a).cmp(&representation(b)))
}

fn representation(n: &Number) -> u8 {
    match n {
        Number::Integer(_) => 0,
        Number::BigInt(_) => 1,
        Number::Float(_) => 2,
    }
}

fn compare_floats(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => x.to_bits().cmp(&y.to_bits()),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.total_cmp(&y),
    }
}

fn compare_integer_float(int: &BigInt, f: f64) -> Ordering {
    if f.is_nan() || f == f64::INFINITY {
        return Ordering::Less;
    }
    if f == f64::NEG_INFINITY {
        return Ordering::Greater;
    }

    // A finite float's floor is an integer that `{:.0}` prints exactly.
    let floor = f.floor();
    let Ok(floor_int) = format!("{:.0}", floor).parse::<BigInt>() else {
        return Ordering::Equal;
    };
    match int.cmp(&floor_int) {
        Ordering::Equal if f > floor => Ordering::Less,
        other => other,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        rank(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(self, other)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        compare_numbers(self, other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        representation(self).hash(state);
        match self {
            Number::Integer(i) => i.hash(state),
            Number::BigInt(b) => b.hash(state),
            Number::Float(f) => f.to_bits().hash(state),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let kind: Kind = self.kind();
        kind.hash(state);
        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.hash(state),
            Value::Char(c) => c.hash(state),
            Value::String(s) | Value::Keyword(s) | Value::Symbol(s) | Value::Reference(s) => {
                s.hash(state)
            }
            Value::Seq(items) | Value::Vector(items) => items.hash(state),
            Value::Set(set) => set.sorted().hash(state),
            Value::Map(map) => map.sorted_entries().hash(state),
            Value::Record(record) => {
                record.type_name.hash(state);
                record.fields.sorted_entries().hash(state);
            }
            Value::Tagged(tagged) => {
                tagged.tag.hash(state);
                tagged.payload.hash(state);
            }
            Value::Opaque(opaque) => {
                opaque.type_name.hash(state);
                opaque.display.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    fn sorted(mut values: Vec<Value>) -> Vec<Value> {
        values.sort_by(rank);
        values
    }

    #[test]
    fn test_cross_kind_precedence() {
        let values = sorted(vec![
            Value::opaque("Thread", "main"),
            Value::tagged("inst", Value::from("2024")),
            Value::set([Value::from(1)]),
            Value::map([(Value::from(1), Value::from(2))]),
            Value::vector([Value::from(1)]),
            Value::seq([Value::symbol("f")]),
            Value::symbol("s"),
            Value::keyword("k"),
            Value::from("s"),
            Value::from('c'),
            Value::from(1),
            Value::from(true),
            Value::Nil,
        ]);
        let kinds: Vec<Kind> = values.iter().map(Value::kind).collect();
        let mut expected = kinds.clone();
        expected.sort();
        assert_eq!(kinds, expected);
        assert_eq!(values[0], Value::Nil);
    }

    #[test]
    fn test_numbers_compare_by_magnitude() {
        assert_eq!(rank(&Value::from(1), &Value::from(1.5)), Ordering::Less);
        assert_eq!(rank(&Value::from(2), &Value::from(1.5)), Ordering::Greater);
        assert_eq!(rank(&Value::from(-2), &Value::from(-1.5)), Ordering::Less);
        assert_eq!(
            rank(&Value::from(u64::MAX), &Value::from(i64::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            rank(&Value::from(u64::MAX), &Value::from(1e30)),
            Ordering::Less
        );
    }

    #[test]
    fn test_exact_integer_float_comparison() {
        // 2^53 + 1 is not representable as f64; a lossy comparison would call it equal.
        let big = Value::from(9_007_199_254_740_993i64);
        let float = Value::from(9_007_199_254_740_992.0f64);
        assert_eq!(rank(&big, &float), Ordering::Greater);
    }

    #[test]
    fn test_equal_magnitude_tie_break() {
        assert_eq!(rank(&Value::from(1), &Value::from(1.0)), Ordering::Less);
        assert_eq!(rank(&Value::from(1.0), &Value::from(1)), Ordering::Greater);
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_eq!(rank(&Value::from(-0.0), &Value::from(0.0)), Ordering::Less);
    }

    #[test]
    fn test_nan_sorts_last() {
        let values = sorted(vec![
            Value::from(f64::NAN),
            Value::from(f64::INFINITY),
            Value::from(1),
            Value::from(f64::NEG_INFINITY),
        ]);
        assert_eq!(values[0], Value::from(f64::NEG_INFINITY));
        assert_eq!(values[2], Value::from(f64::INFINITY));
        assert!(matches!(&values[3], Value::Number(Number::Float(f)) if f.is_nan()));
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn test_sequences_are_lexicographic() {
        let short = Value::vector([Value::from(1), Value::from(2)]);
        let long = Value::vector([Value::from(1), Value::from(2), Value::from(0)]);
        let bigger = Value::vector([Value::from(1), Value::from(3)]);
        assert_eq!(rank(&short, &long), Ordering::Less);
        assert_eq!(rank(&long, &bigger), Ordering::Less);
    }

    #[test]
    fn test_maps_compare_sorted_entries() {
        let a = Value::map([
            (Value::keyword("b"), Value::from(2)),
            (Value::keyword("a"), Value::from(1)),
        ]);
        let b = Value::map([
            (Value::keyword("a"), Value::from(1)),
            (Value::keyword("b"), Value::from(2)),
        ]);
        let c = Value::map([(Value::keyword("a"), Value::from(2))]);
        assert_eq!(rank(&a, &b), Ordering::Equal);
        assert_eq!(rank(&a, &c), Ordering::Less);
    }

    #[test]
    fn test_tagged_compares_tag_then_payload() {
        let a = Value::tagged("a", Value::from(9));
        let b1 = Value::tagged("b", Value::from(1));
        let b2 = Value::tagged("b", Value::from(2));
        assert_eq!(rank(&a, &b1), Ordering::Less);
        assert_eq!(rank(&b1, &b2), Ordering::Less);
    }

    #[test]
    fn test_records_compare_type_then_fields() {
        let fields = |n: i32| -> ValueMap { [(Value::keyword("n"), Value::from(n))].into_iter().collect() };
        let a = Value::record("A", fields(5));
        let b1 = Value::record("B", fields(1));
        let b2 = Value::record("B", fields(2));
        assert_eq!(rank(&a, &b1), Ordering::Less);
        assert_eq!(rank(&b1, &b2), Ordering::Less);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(v: &Value) -> u64 {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        }

        let a = Value::set([Value::from(1), Value::from("x"), Value::keyword("k")]);
        let b = Value::set([Value::keyword("k"), Value::from(1), Value::from("x")]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
