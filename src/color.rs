//! Color schemes and syntax-highlighting annotation.
//!
//! A [`ColorScheme`] maps each syntactic [`Element`] to an ordered list of
//! [`StyleAttr`]s. An element with no entry, or an empty list, is printed
//! unstyled. [`Palette::annotate`] wraps a document fragment in escape markers
//! when coloring is enabled and the element has a style; the markers take no
//! columns, so colored and uncolored output wrap identically.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::color::{ColorScheme, Element, StyleAttr};
//!
//! let mut scheme = ColorScheme::default();
//! scheme.merge(&ColorScheme::parse_updates("number=bold,bright-cyan; symbol=italic").unwrap());
//!
//! assert_eq!(
//!     scheme.get(Element::Number),
//!     Some(&[StyleAttr::Bold, StyleAttr::BrightCyan][..])
//! );
//! assert_eq!(scheme.get(Element::String), Some(&[StyleAttr::Bold, StyleAttr::Magenta][..]));
//! ```

use crate::doc::Doc;
use crate::{Error, Result};
use indexmap::IndexMap;
use owo_colors::Style;
use std::fmt;
use std::str::FromStr;

/// A syntactic element that can be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// Brackets, braces, parens and other punctuation.
    Delimiter,
    /// The `#tag` of a tagged value.
    Tag,
    Nil,
    Boolean,
    Number,
    String,
    Character,
    Keyword,
    /// A plain symbol.
    Symbol,
    /// A symbol in the head position of a seq.
    FunctionSymbol,
    /// The `#` before a record type name.
    ClassDelimiter,
    /// Record and opaque type names.
    ClassName,
}

impl Element {
    pub const ALL: [Element; 12] = [
        Element::Delimiter,
        Element::Tag,
        Element::Nil,
        Element::Boolean,
        Element::Number,
        Element::String,
        Element::Character,
        Element::Keyword,
        Element::Symbol,
        Element::FunctionSymbol,
        Element::ClassDelimiter,
        Element::ClassName,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Delimiter => "delimiter",
            Element::Tag => "tag",
            Element::Nil => "nil",
            Element::Boolean => "boolean",
            Element::Number => "number",
            Element::String => "string",
            Element::Character => "character",
            Element::Keyword => "keyword",
            Element::Symbol => "symbol",
            Element::FunctionSymbol => "function-symbol",
            Element::ClassDelimiter => "class-delimiter",
            Element::ClassName => "class-name",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches(':');
        Element::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| Error::configuration(format!("unknown element `{}`", s.trim())))
    }
}

/// A single style attribute: a text effect, a foreground color, or a
/// background color (`on-*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleAttr {
    Bold,
    Dimmed,
    Italic,
    Underline,
    Blink,
    Reversed,
    Hidden,
    Strikethrough,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    OnBlack,
    OnRed,
    OnGreen,
    OnYellow,
    OnBlue,
    OnMagenta,
    OnCyan,
    OnWhite,
}

impl StyleAttr {
    pub const ALL: [StyleAttr; 32] = [
        StyleAttr::Bold,
        StyleAttr::Dimmed,
        StyleAttr::Italic,
        StyleAttr::Underline,
        StyleAttr::Blink,
        StyleAttr::Reversed,
        StyleAttr::Hidden,
        StyleAttr::Strikethrough,
        StyleAttr::Black,
        StyleAttr::Red,
        StyleAttr::Green,
        StyleAttr::Yellow,
        StyleAttr::Blue,
        StyleAttr::Magenta,
        StyleAttr::Cyan,
        StyleAttr::White,
        StyleAttr::BrightBlack,
        StyleAttr::BrightRed,
        StyleAttr::BrightGreen,
        StyleAttr::BrightYellow,
        StyleAttr::BrightBlue,
        StyleAttr::BrightMagenta,
        StyleAttr::BrightCyan,
        StyleAttr::BrightWhite,
        StyleAttr::OnBlack,
        StyleAttr::OnRed,
        StyleAttr::OnGreen,
        StyleAttr::OnYellow,
        StyleAttr::OnBlue,
        StyleAttr::OnMagenta,
        StyleAttr::OnCyan,
        StyleAttr::OnWhite,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StyleAttr::Bold => "bold",
            StyleAttr::Dimmed => "dimmed",
            StyleAttr::Italic => "italic",
            StyleAttr::Underline => "underline",
            StyleAttr::Blink => "blink",
            StyleAttr::Reversed => "reversed",
            StyleAttr::Hidden => "hidden",
            StyleAttr::Strikethrough => "strikethrough",
            StyleAttr::Black => "black",
            StyleAttr::Red => "red",
            StyleAttr::Green => "green",
            StyleAttr::Yellow => "yellow",
            StyleAttr::Blue => "blue",
            StyleAttr::Magenta => "magenta",
            StyleAttr::Cyan => "cyan",
            StyleAttr::White => "white",
            StyleAttr::BrightBlack => "bright-black",
            StyleAttr::BrightRed => "bright-red",
            StyleAttr::BrightGreen => "bright-green",
            StyleAttr::BrightYellow => "bright-yellow",
            StyleAttr::BrightBlue => "bright-blue",
            StyleAttr::BrightMagenta => "bright-magenta",
            StyleAttr::BrightCyan => "bright-cyan",
            StyleAttr::BrightWhite => "bright-white",
            StyleAttr::OnBlack => "on-black",
            StyleAttr::OnRed => "on-red",
            StyleAttr::OnGreen => "on-green",
            StyleAttr::OnYellow => "on-yellow",
            StyleAttr::OnBlue => "on-blue",
            StyleAttr::OnMagenta => "on-magenta",
            StyleAttr::OnCyan => "on-cyan",
            StyleAttr::OnWhite => "on-white",
        }
    }

    fn apply(self, style: Style) -> Style {
        match self {
            StyleAttr::Bold => style.bold(),
            StyleAttr::Dimmed => style.dimmed(),
            StyleAttr::Italic => style.italic(),
            StyleAttr::Underline => style.underline(),
            StyleAttr::Blink => style.blink(),
            StyleAttr::Reversed => style.reversed(),
            StyleAttr::Hidden => style.hidden(),
            StyleAttr::Strikethrough => style.strikethrough(),
            StyleAttr::Black => style.black(),
            StyleAttr::Red => style.red(),
            StyleAttr::Green => style.green(),
            StyleAttr::Yellow => style.yellow(),
            StyleAttr::Blue => style.blue(),
            StyleAttr::Magenta => style.magenta(),
            StyleAttr::Cyan => style.cyan(),
            StyleAttr::White => style.white(),
            StyleAttr::BrightBlack => style.bright_black(),
            StyleAttr::BrightRed => style.bright_red(),
            StyleAttr::BrightGreen => style.bright_green(),
            StyleAttr::BrightYellow => style.bright_yellow(),
            StyleAttr::BrightBlue => style.bright_blue(),
            StyleAttr::BrightMagenta => style.bright_magenta(),
            StyleAttr::BrightCyan => style.bright_cyan(),
            StyleAttr::BrightWhite => style.bright_white(),
            StyleAttr::OnBlack => style.on_black(),
            StyleAttr::OnRed => style.on_red(),
            StyleAttr::OnGreen => style.on_green(),
            StyleAttr::OnYellow => style.on_yellow(),
            StyleAttr::OnBlue => style.on_blue(),
            StyleAttr::OnMagenta => style.on_magenta(),
            StyleAttr::OnCyan => style.on_cyan(),
            StyleAttr::OnWhite => style.on_white(),
        }
    }
}

impl fmt::Display for StyleAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleAttr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches(':').replace('_', "-");
        StyleAttr::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| Error::configuration(format!("unknown style `{}`", s.trim())))
    }
}

/// Builds the escape sequence that switches on `styles`.
///
/// Returns an empty string for an empty list.
#[must_use]
pub fn encode(styles: &[StyleAttr]) -> String {
    if styles.is_empty() {
        return String::new();
    }
    to_style(styles).prefix_formatter().to_string()
}

/// The escape sequence that clears all styling.
#[must_use]
pub fn reset() -> String {
    // A plain style has no suffix; any attribute makes owo-colors emit the
    // full reset, which also clears the colors.
    Style::new().bold().suffix_formatter().to_string()
}

fn to_style(styles: &[StyleAttr]) -> Style {
    styles
        .iter()
        .fold(Style::new(), |style, attr| attr.apply(style))
}

/// Mapping from syntactic element to style attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme(IndexMap<Element, Vec<StyleAttr>>);

impl Default for ColorScheme {
    fn default() -> Self {
        use StyleAttr::*;

        let mut scheme = ColorScheme::empty();
        scheme.set(Element::Delimiter, vec![Bold, Red]);
        scheme.set(Element::Tag, vec![Red]);
        scheme.set(Element::Nil, vec![Bold, Black]);
        scheme.set(Element::Boolean, vec![Green]);
        scheme.set(Element::Number, vec![Cyan]);
        scheme.set(Element::String, vec![Bold, Magenta]);
        scheme.set(Element::Character, vec![Bold, Magenta]);
        scheme.set(Element::Keyword, vec![Bold, Yellow]);
        scheme.set(Element::Symbol, vec![]);
        scheme.set(Element::FunctionSymbol, vec![Bold, Blue]);
        scheme.set(Element::ClassDelimiter, vec![Blue]);
        scheme.set(Element::ClassName, vec![Bold, Blue]);
        scheme
    }
}

impl ColorScheme {
    /// A scheme with no entries; everything prints unstyled.
    #[must_use]
    pub fn empty() -> Self {
        ColorScheme(IndexMap::new())
    }

    /// Style list for `element`, if it has an entry.
    #[must_use]
    pub fn get(&self, element: Element) -> Option<&[StyleAttr]> {
        self.0.get(&element).map(Vec::as_slice)
    }

    pub fn set(&mut self, element: Element, styles: Vec<StyleAttr>) {
        self.0.insert(element, styles);
    }

    pub fn remove(&mut self, element: Element) -> Option<Vec<StyleAttr>> {
        self.0.shift_remove(&element)
    }

    /// Merges `updates` into this scheme; entries in `updates` win.
    pub fn merge(&mut self, updates: &ColorScheme) {
        for (element, styles) in &updates.0 {
            self.0.insert(*element, styles.clone());
        }
    }

    /// Parses updates of the form `element=style,style; element=style`.
    ///
    /// An element with nothing after `=` gets an empty (unstyled) entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for a missing `=`, an unknown element or
    /// an unknown style.
    pub fn parse_updates(text: &str) -> Result<Self> {
        let mut scheme = ColorScheme::empty();
        for entry in text.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (element, styles) = entry.split_once('=').ok_or_else(|| {
                Error::configuration(format!("expected `element=styles`, found `{}`", entry))
            })?;
            scheme.set(element.parse()?, parse_styles(styles)?);
        }
        Ok(scheme)
    }

    /// Builds updates from an alternating element / style-list slice, e.g.
    /// `["number", "bold,cyan", "nil", ""]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the slice has odd length or names an
    /// unknown element or style.
    pub fn from_pairs(pairs: &[&str]) -> Result<Self> {
        if pairs.len() % 2 != 0 {
            return Err(Error::configuration(format!(
                "color scheme updates need element/style pairs, got {} arguments",
                pairs.len()
            )));
        }
        let mut scheme = ColorScheme::empty();
        for pair in pairs.chunks(2) {
            scheme.set(pair[0].parse()?, parse_styles(pair[1])?);
        }
        Ok(scheme)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Element, Vec<StyleAttr>> {
        self.0.iter()
    }
}

fn parse_styles(styles: &str) -> Result<Vec<StyleAttr>> {
    styles
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// A color scheme together with the coloring switch, ready to annotate.
#[derive(Clone, Copy, Debug)]
pub struct Palette<'a> {
    scheme: &'a ColorScheme,
    enabled: bool,
}

impl<'a> Palette<'a> {
    pub fn new(scheme: &'a ColorScheme, enabled: bool) -> Self {
        Palette { scheme, enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `doc` in the style for `element`.
    ///
    /// Returns `doc` unchanged when coloring is off or the element has no
    /// style.
    #[must_use]
    pub fn annotate(&self, element: Element, doc: Doc) -> Doc {
        if !self.enabled {
            return doc;
        }
        match self.scheme.get(element) {
            Some(styles) if !styles.is_empty() => Doc::Styled {
                element,
                open: encode(styles),
                inner: Box::new(doc),
                close: reset(),
            },
            _ => doc,
        }
    }

    /// Shorthand for annotating a text leaf.
    #[must_use]
    pub fn text(&self, element: Element, text: impl Into<String>) -> Doc {
        self.annotate(element, Doc::Text(text.into()))
    }
}
