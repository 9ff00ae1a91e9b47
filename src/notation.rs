//! The printed notation.
//!
//! This module documents the text this library produces. It is EDN
//! (extensible data notation) written for people: the output is deterministic
//! and readable, but it is not meant to be read back by a machine.
//!
//! # Scalars
//!
//! | Value | Printed | Example |
//! |-------|---------|---------|
//! | Nil | `nil` | `nil` |
//! | Boolean | `true` / `false` | `true` |
//! | Integer | decimal digits | `-42` |
//! | Big integer | digits with an `N` suffix | `18446744073709551616N` |
//! | Float | shortest round-trip form, always with `.` or an exponent | `1.5`, `3.0`, `1e300` |
//! | Special floats | `##NaN`, `##Inf`, `##-Inf` | `##Inf` |
//! | Character | backslash prefix, named when whitespace | `\a`, `\space`, `\newline` |
//! | String | double quoted and escaped | `"a\"b"` |
//! | Keyword | colon prefix | `:status` |
//! | Symbol | bare | `inc` |
//!
//! **String escapes**:
//! ```text
//! \"  quote
//! \\  backslash
//! \n  newline
//! \r  carriage return
//! \t  tab
//! \b  backspace
//! \f  form feed
//! \uXXXX  other control characters
//! ```
//!
//! # Collections
//!
//! | Value | Printed |
//! |-------|---------|
//! | Seq | `(foo 1 2)` |
//! | Vector | `[1 2 3]` |
//! | Set | `#{1 2 3}` |
//! | Map | `{:a 1 :b 2}` |
//!
//! Vectors and seqs keep their element order. Sets and maps print their
//! elements and keys in canonical order, so two equal collections always print
//! the same text whatever order they were built in. Map entries are separated by
//! the configured delimiter, empty by default:
//!
//! ```text
//! {:a 1 :b 2}        default
//! {:a 1, :b 2}       with_map_delimiter(",")
//! ```
//!
//! # Other values
//!
//! | Value | Printed | Strict mode |
//! |-------|---------|-------------|
//! | Record | `#user.Account{:id 7}` | error |
//! | Reference | `#'core/inc` | error |
//! | Tagged | `#inst "2024-01-01T00:00:00Z"` | printed |
//! | Opaque | `#<Socket 127.0.0.1:80>` | error |
//!
//! # Canonical order
//!
//! Values of different kinds order by kind:
//!
//! ```text
//! nil < boolean < number < character < string < keyword < symbol
//!     < seq < vector < map < set < record < reference < tagged < opaque
//! ```
//!
//! Within a kind:
//!
//! - booleans: `false` before `true`
//! - numbers: by numeric value across integers, big integers and floats;
//!   `##NaN` sorts after every other number, and `1 < 1N < 1.0`
//! - characters, strings, keywords, symbols, references: by code point
//! - seqs and vectors: element by element, shorter first on a common prefix
//! - sets: the same, over their elements in canonical order
//! - maps: the same, over their entries in key order
//! - records: by type name, then as maps
//! - tagged values: by tag, then payload
//! - opaque values: by type name, then display text
//!
//! # Layout
//!
//! Output wraps at the configured width, 80 columns by default. A collection
//! that fits on the rest of the line prints flat; otherwise every element goes
//! on its own line, aligned under the first element:
//!
//! ```text
//! {:history
//!  [{:at #inst "2024-01-01T00:00:00Z" :event :created}
//!   {:at #inst "2024-02-01T00:00:00Z" :event :promoted}]
//!  :id 7
//!  :roles
//!  #{:admin :ops}}
//! ```
//!
//! A map value or tagged payload that is itself a collection starts on its own
//! line when the enclosing collection breaks. Color escapes take no columns, so
//! colored and plain output break at the same places.
//!
//! # Colors
//!
//! Each syntactic element maps to a list of styles in the
//! [`ColorScheme`](crate::color::ColorScheme):
//!
//! | Element | Default |
//! |---------|---------|
//! | `delimiter` | bold red |
//! | `tag` | red |
//! | `nil` | bold black |
//! | `boolean` | green |
//! | `number` | cyan |
//! | `string`, `character` | bold magenta |
//! | `keyword` | bold yellow |
//! | `symbol` | none |
//! | `function-symbol` | bold blue |
//! | `class-delimiter` | blue |
//! | `class-name` | bold blue |
//!
//! # Limitations
//!
//! - There is no parser; the notation is output only.
//! - Records, references and opaque values print in forms an EDN reader would
//!   reject. Strict mode turns them into errors instead.
