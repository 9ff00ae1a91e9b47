//! Width-aware layout of document trees.
//!
//! The engine walks the document with an explicit command stack. A
//! [`Doc::Group`] is printed flat when its contents, plus whatever follows it up
//! to the next possible line break, fit in the remaining width; otherwise each
//! [`Doc::Line`] directly inside it becomes a newline indented to the column of
//! the innermost enclosing [`Doc::Align`]. Text is measured in display
//! columns, so wide glyphs count twice; style markers take no columns.

use crate::doc::Doc;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

#[derive(Clone, Copy)]
enum Item<'a> {
    Doc(&'a Doc),
    Escape(&'a str),
}

#[derive(Clone, Copy)]
struct Command<'a> {
    indent: usize,
    mode: Mode,
    item: Item<'a>,
}

/// Lays out `doc` within `width` columns.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::doc::Doc;
/// use serde_edn_pretty::layout::layout;
///
/// let doc = Doc::Group(vec![
///     Doc::text("["),
///     Doc::Align(vec![Doc::text("alpha"), Doc::Line, Doc::text("beta")]),
///     Doc::text("]"),
/// ]);
/// assert_eq!(layout(&doc, 80), "[alpha beta]");
/// assert_eq!(layout(&doc, 8), "[alpha\n beta]");
/// ```
#[must_use]
pub fn layout(doc: &Doc, width: usize) -> String {
    let mut output = String::new();
    let mut column = 0usize;
    let mut stack = vec![Command {
        indent: 0,
        mode: Mode::Break,
        item: Item::Doc(doc),
    }];

    while let Some(Command { indent, mode, item }) = stack.pop() {
        let doc = match item {
            Item::Escape(escape) => {
                output.push_str(escape);
                continue;
            }
            Item::Doc(doc) => doc,
        };

        match doc {
            Doc::Empty => {}
            Doc::Text(text) => {
                output.push_str(text);
                column += text_width(text);
            }
            Doc::Styled {
                open, inner, close, ..
            } => {
                output.push_str(open);
                stack.push(Command {
                    indent,
                    mode,
                    item: Item::Escape(close.as_str()),
                });
                stack.push(Command {
                    indent,
                    mode,
                    item: Item::Doc(inner),
                });
            }
            Doc::Concat(children) => push_children(&mut stack, children, indent, mode),
            Doc::Align(children) => push_children(&mut stack, children, column, mode),
            Doc::Group(children) => {
                let mode = if mode == Mode::Flat
                    || fits(width.saturating_sub(column), children, &stack)
                {
                    Mode::Flat
                } else {
                    Mode::Break
                };
                push_children(&mut stack, children, indent, mode);
            }
            Doc::Line if mode == Mode::Flat => {
                output.push(' ');
                column += 1;
            }
            Doc::Line | Doc::HardLine => {
                output.push('\n');
                output.extend(std::iter::repeat(' ').take(indent));
                column = indent;
            }
        }
    }

    output
}

fn push_children<'a>(stack: &mut Vec<Command<'a>>, children: &'a [Doc], indent: usize, mode: Mode) {
    stack.extend(children.iter().rev().map(|child| Command {
        indent,
        mode,
        item: Item::Doc(child),
    }));
}

/// Checks whether `children`, laid out flat, and the commands after them up to
/// the next line break fit in `remaining` columns.
fn fits(remaining: usize, children: &[Doc], rest: &[Command<'_>]) -> bool {
    let mut remaining = remaining as isize;
    let mut work: Vec<(Mode, &Doc)> = children.iter().rev().map(|c| (Mode::Flat, c)).collect();
    let mut rest_index = rest.len();

    loop {
        let (mode, doc) = match work.pop() {
            Some(next) => next,
            None => {
                // Walk the rest of the stack from the top.
                let Some(index) = rest_index.checked_sub(1) else {
                    return true;
                };
                rest_index = index;
                match rest[index].item {
                    Item::Escape(_) => continue,
                    Item::Doc(doc) => (rest[index].mode, doc),
                }
            }
        };

        match doc {
            Doc::Empty => {}
            Doc::Text(text) => {
                remaining -= text_width(text) as isize;
                if remaining < 0 {
                    return false;
                }
            }
            Doc::Styled { inner, .. } => work.push((mode, inner)),
            Doc::Concat(children) | Doc::Align(children) | Doc::Group(children) => {
                work.extend(children.iter().rev().map(|c| (mode, c)));
            }
            Doc::Line => match mode {
                Mode::Break => return true,
                Mode::Flat => {
                    remaining -= 1;
                    if remaining < 0 {
                        return false;
                    }
                }
            },
            Doc::HardLine => return mode == Mode::Break,
        }
    }
}

fn text_width(text: &str) -> usize {
    text.width()
}
