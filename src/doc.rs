//! Document trees handed to the layout engine.
//!
//! A [`Doc`] describes text plus the places where the layout engine may break
//! lines. It carries no width decisions of its own; [`crate::layout::layout`]
//! makes them.

use crate::color::Element;

/// A document fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Doc {
    Empty,
    /// Literal text; must not contain newlines.
    Text(String),
    /// Styled content. `open` and `close` are escape sequences that take no
    /// columns.
    Styled {
        element: Element,
        open: String,
        inner: Box<Doc>,
        close: String,
    },
    Concat(Vec<Doc>),
    /// Printed on one line if it fits, otherwise every `Line` directly inside
    /// it becomes a newline.
    Group(Vec<Doc>),
    /// Children indent to the column where the alignment starts.
    Align(Vec<Doc>),
    /// A space in a flat group, a newline in a broken one.
    Line,
    /// Always a newline.
    HardLine,
}

impl Doc {
    pub fn text(s: impl Into<String>) -> Self {
        Doc::Text(s.into())
    }

    /// Joins `docs` with `separator` between neighbours.
    #[must_use]
    pub fn interpose(docs: Vec<Doc>, separator: &Doc) -> Vec<Doc> {
        let mut out = Vec::with_capacity(docs.len() * 2);
        for (i, doc) in docs.into_iter().enumerate() {
            if i > 0 {
                out.push(separator.clone());
            }
            out.push(doc);
        }
        out
    }

    /// The text this document prints when laid out flat, without escapes.
    #[must_use]
    pub fn flat_text(&self) -> String {
        let mut out = String::new();
        self.write_flat(&mut out);
        out
    }

    fn write_flat(&self, out: &mut String) {
        match self {
            Doc::Empty => {}
            Doc::Text(s) => out.push_str(s),
            Doc::Styled { inner, .. } => inner.write_flat(out),
            Doc::Concat(children) | Doc::Group(children) | Doc::Align(children) => {
                for child in children {
                    child.write_flat(out);
                }
            }
            Doc::Line => out.push(' '),
            Doc::HardLine => out.push('\n'),
        }
    }

    /// Iterates over every styled node in document order.
    pub fn styled_elements(&self) -> Vec<(Element, String)> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(doc) = stack.pop() {
            match doc {
                Doc::Styled { element, inner, .. } => {
                    found.push((*element, inner.flat_text()));
                    stack.push(inner);
                }
                Doc::Concat(children) | Doc::Group(children) | Doc::Align(children) => {
                    stack.extend(children.iter().rev());
                }
                _ => {}
            }
        }
        found
    }
}

impl From<&str> for Doc {
    fn from(value: &str) -> Self {
        Doc::Text(value.to_string())
    }
}

impl From<String> for Doc {
    fn from(value: String) -> Self {
        Doc::Text(value)
    }
}
