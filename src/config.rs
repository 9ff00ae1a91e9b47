//! Process-wide default options.
//!
//! [`render`](crate::render), [`to_string`](crate::to_string) and the other
//! entry points without an options argument read a snapshot of these defaults
//! at the start of each call, so a render never sees a half-applied update.
//!
//! The scoped helpers install an override for the duration of a closure and put
//! the previous defaults back when the closure returns, fails or panics.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::{config, render, Value};
//!
//! let value = Value::map([
//!     (Value::keyword("a"), Value::from(1)),
//!     (Value::keyword("b"), Value::from(2)),
//! ]);
//!
//! let text = config::with_defaults(
//!     |options| options.with_map_delimiter(","),
//!     || render(&value),
//! )
//! .unwrap();
//! assert_eq!(text, "{:a 1, :b 2}");
//! ```

use crate::color::ColorScheme;
use crate::options::{MapDelimiter, PrintOptions};
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

fn cell() -> &'static RwLock<PrintOptions> {
    static DEFAULTS: OnceLock<RwLock<PrintOptions>> = OnceLock::new();
    DEFAULTS.get_or_init(|| RwLock::new(PrintOptions::default()))
}

// A panic while holding the lock cannot leave the options half-written, so a
// poisoned lock still holds a usable value.
fn read() -> RwLockReadGuard<'static, PrintOptions> {
    cell().read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, PrintOptions> {
    cell().write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A snapshot of the current defaults.
#[must_use]
pub fn defaults() -> PrintOptions {
    read().clone()
}

/// Replaces the defaults, returning the previous ones.
pub fn set_defaults(options: PrintOptions) -> PrintOptions {
    tracing::debug!(
        width = options.width,
        colored = options.colored,
        strict = options.strict,
        "replacing default print options"
    );
    std::mem::replace(&mut *write(), options)
}

/// Applies `update` to a snapshot of the defaults and installs the result.
///
/// No lock is held while `update` runs, so it may read the defaults or render.
pub fn update_defaults(update: impl FnOnce(PrintOptions) -> PrintOptions) {
    let updated = update(defaults());
    *write() = updated;
}

/// Merges `updates` into the default color scheme.
pub fn set_color_scheme(updates: &ColorScheme) {
    write().color_scheme.merge(updates);
}

pub fn set_colored(colored: bool) {
    write().colored = colored;
}

pub fn set_strict_mode(strict: bool) {
    write().strict = strict;
}

pub fn set_map_delimiter(delimiter: impl Into<MapDelimiter>) {
    write().map_delimiter = delimiter.into();
}

pub fn set_width(width: usize) {
    write().width = width;
}

/// Puts the saved defaults back on drop.
struct Restore(Option<PrintOptions>);

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(previous) = self.0.take() {
            *write() = previous;
        }
    }
}

/// Runs `body` with the defaults transformed by `update`.
pub fn with_defaults<R>(
    update: impl FnOnce(PrintOptions) -> PrintOptions,
    body: impl FnOnce() -> R,
) -> R {
    let overridden = update(defaults());
    let _restore = Restore(Some(set_defaults(overridden)));
    body()
}

/// Runs `body` with coloring switched on or off.
pub fn with_colors<R>(colored: bool, body: impl FnOnce() -> R) -> R {
    with_defaults(|options| options.with_colors(colored), body)
}

/// Runs `body` with strict mode switched on or off.
pub fn with_strict_mode<R>(strict: bool, body: impl FnOnce() -> R) -> R {
    with_defaults(|options| options.with_strict_mode(strict), body)
}
