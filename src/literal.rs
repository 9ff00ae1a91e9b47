//! Literal syntax for scalar values.
//!
//! [`render_literal`] turns a scalar into its EDN text: quoted and escaped
//! strings, named characters, `N`-suffixed big integers, `##Inf`-style special
//! floats and `:`-prefixed keywords.

use crate::{Number, Value};
use std::fmt::Write;

/// Returns the literal text for a scalar, or `None` for any other kind.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{literal::render_literal, Value};
///
/// assert_eq!(render_literal(&Value::from("a\"b")).as_deref(), Some(r#""a\"b""#));
/// assert_eq!(render_literal(&Value::from('\n')).as_deref(), Some("\\newline"));
/// assert_eq!(render_literal(&Value::keyword("id")).as_deref(), Some(":id"));
/// assert_eq!(render_literal(&Value::from(2.0)).as_deref(), Some("2.0"));
/// assert_eq!(render_literal(&Value::vector([])), None);
/// ```
#[must_use]
pub fn render_literal(value: &Value) -> Option<String> {
    let text = match value {
        Value::Nil => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::Char(c) => render_char(*c),
        Value::String(s) => render_string(s),
        Value::Keyword(k) => format!(":{}", k),
        Value::Symbol(s) => s.clone(),
        _ => return None,
    };
    Some(text)
}

#[must_use]
pub fn render_number(n: &Number) -> String {
    match n {
        Number::Integer(i) => i.to_string(),
        Number::BigInt(b) => format!("{}N", b),
        Number::Float(f) if f.is_nan() => "##NaN".to_string(),
        Number::Float(f) if f.is_infinite() => {
            if *f > 0.0 {
                "##Inf".to_string()
            } else {
                "##-Inf".to_string()
            }
        }
        // Debug keeps a fractional part or exponent, so floats stay floats.
        Number::Float(f) => format!("{:?}", f),
    }
}

#[must_use]
pub fn render_char(c: char) -> String {
    match c {
        '\n' => "\\newline".to_string(),
        ' ' => "\\space".to_string(),
        '\t' => "\\tab".to_string(),
        '\r' => "\\return".to_string(),
        '\u{000C}' => "\\formfeed".to_string(),
        '\u{0008}' => "\\backspace".to_string(),
        c if c.is_control() => format!("\\u{:04X}", c as u32),
        c => format!("\\{}", c),
    }
}

#[must_use]
pub fn render_string(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            ch => push_escaped(&mut output, ch),
        }
    }
    output.push('"');
    output
}

/// Escapes control characters, leaving quotes and backslashes alone.
///
/// Used for free-form text that is not a string literal but must stay on one
/// line, such as the display of an opaque value.
#[must_use]
pub fn escape_control(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for ch in s.chars() {
        push_escaped(&mut output, ch);
    }
    output
}

fn push_escaped(output: &mut String, ch: char) {
    match ch {
        '\n' => output.push_str("\\n"),
        '\r' => output.push_str("\\r"),
        '\t' => output.push_str("\\t"),
        '\u{0008}' => output.push_str("\\b"), // backspace
        '\u{000C}' => output.push_str("\\f"), // form feed
        c if c.is_control() => {
            let _ = write!(output, "\\u{:04X}", c as u32);
        }
        _ => output.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_string_escapes() {
        assert_eq!(render_string("plain"), "\"plain\"");
        assert_eq!(render_string("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(render_string("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(render_string("\u{0001}"), "\"\\u0001\"");
        assert_eq!(render_string("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_escape_control_keeps_quotes() {
        assert_eq!(escape_control("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_control("a\r\u{7}b"), "a\\r\\u0007b");
        assert_eq!(escape_control(r#"C:\tmp "x""#), r#"C:\tmp "x""#);
    }

    #[test]
    fn test_named_characters() {
        assert_eq!(render_char('a'), "\\a");
        assert_eq!(render_char(' '), "\\space");
        assert_eq!(render_char('\t'), "\\tab");
        assert_eq!(render_char('\u{0000}'), "\\u0000");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(render_number(&Number::Integer(-7)), "-7");
        assert_eq!(render_number(&Number::BigInt(BigInt::from(u64::MAX))), "18446744073709551615N");
        assert_eq!(render_number(&Number::Float(1.5)), "1.5");
        assert_eq!(render_number(&Number::Float(3.0)), "3.0");
        assert_eq!(render_number(&Number::Float(f64::NAN)), "##NaN");
        assert_eq!(render_number(&Number::Float(f64::INFINITY)), "##Inf");
        assert_eq!(render_number(&Number::Float(f64::NEG_INFINITY)), "##-Inf");
    }

    #[test]
    fn test_scalars_only() {
        assert_eq!(render_literal(&Value::Nil).as_deref(), Some("nil"));
        assert_eq!(render_literal(&Value::from(false)).as_deref(), Some("false"));
        assert_eq!(render_literal(&Value::symbol("inc")).as_deref(), Some("inc"));
        assert_eq!(render_literal(&Value::tagged("inst", Value::Nil)), None);
        assert_eq!(render_literal(&Value::opaque("T", "t")), None);
    }
}
