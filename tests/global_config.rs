//! Tests for the process-wide defaults.
//!
//! Every test here touches shared state, so each one holds `LOCK` and restores
//! the defaults it found.

use serde_edn_pretty::color::{ColorScheme, Element, StyleAttr};
use serde_edn_pretty::{config, render, to_string, Error, PrintOptions, Value};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

static LOCK: Mutex<()> = Mutex::new(());

fn exclusive() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn sample() -> Value {
    Value::map([
        (Value::symbol("b"), Value::from(2)),
        (Value::symbol("a"), Value::from(1)),
    ])
}

#[test]
fn test_defaults_start_plain() {
    let _guard = exclusive();
    let defaults = config::defaults();
    assert_eq!(defaults.width, 80);
    assert!(!defaults.colored);
    assert!(!defaults.strict);
    assert_eq!(render(&sample()).unwrap(), "{a 1 b 2}");
}

#[test]
fn test_setters_change_render() {
    let _guard = exclusive();
    let saved = config::defaults();

    config::set_map_delimiter(",");
    assert_eq!(render(&sample()).unwrap(), "{a 1, b 2}");

    config::set_width(6);
    assert_eq!(render(&sample()).unwrap(), "{a 1,\n b 2}");

    config::set_strict_mode(true);
    let err = render(&Value::reference("core/inc")).unwrap_err();
    assert!(err.is_unrepresentable());

    config::set_defaults(saved);
    assert_eq!(render(&sample()).unwrap(), "{a 1 b 2}");
}

#[test]
fn test_set_defaults_returns_previous() {
    let _guard = exclusive();
    let previous = config::set_defaults(PrintOptions::new().with_width(10));
    assert_eq!(config::defaults().width, 10);
    let replaced = config::set_defaults(previous);
    assert_eq!(replaced.width, 10);
    assert_eq!(config::defaults().width, 80);
}

#[test]
fn test_update_defaults_and_color_scheme() {
    let _guard = exclusive();
    let saved = config::defaults();

    config::update_defaults(|options| options.with_colors(true));
    let updates = ColorScheme::parse_updates("symbol=underline").unwrap();
    config::set_color_scheme(&updates);

    let defaults = config::defaults();
    assert!(defaults.colored);
    assert_eq!(
        defaults.color_scheme.get(Element::Symbol),
        Some(&[StyleAttr::Underline][..])
    );
    assert_eq!(
        defaults.color_scheme.get(Element::Number),
        Some(&[StyleAttr::Cyan][..])
    );
    assert!(render(&Value::symbol("x")).unwrap().contains("\x1b[4m"));

    config::set_defaults(saved);
    assert_eq!(render(&Value::symbol("x")).unwrap(), "x");
}

#[test]
fn test_update_defaults_may_read_defaults() {
    let _guard = exclusive();
    let saved = config::defaults();
    let saved_width = saved.width;

    let (done, finished) = mpsc::channel();
    thread::spawn(move || {
        config::update_defaults(|options| {
            let current = config::defaults();
            let text = render(&Value::vector([Value::from(1)])).unwrap();
            options.with_width(current.width + text.len())
        });
        let _ = done.send(());
    });
    assert!(
        finished.recv_timeout(Duration::from_secs(5)).is_ok(),
        "update_defaults did not return"
    );
    let width = config::defaults().width;
    config::set_defaults(saved);
    assert_eq!(width, saved_width + 3);
}

#[test]
fn test_set_colored() {
    let _guard = exclusive();
    config::set_colored(true);
    let colored = to_string(&vec![1, 2]).unwrap();
    config::set_colored(false);
    assert_ne!(colored, "[1 2]");
    assert_eq!(to_string(&vec![1, 2]).unwrap(), "[1 2]");
}

#[test]
fn test_scoped_override_restores() {
    let _guard = exclusive();
    let inside = config::with_defaults(
        |options| options.with_map_delimiter(";"),
        || render(&sample()).unwrap(),
    );
    assert_eq!(inside, "{a 1; b 2}");
    assert_eq!(render(&sample()).unwrap(), "{a 1 b 2}");

    let colored = config::with_colors(true, || render(&Value::from(1)).unwrap());
    assert_eq!(colored, "\x1b[36m1\x1b[0m");
    assert_eq!(render(&Value::from(1)).unwrap(), "1");
}

#[test]
fn test_scoped_strict_mode_restores_after_error() {
    let _guard = exclusive();
    let opaque = Value::opaque("Thread", "main");

    let result = config::with_strict_mode(true, || render(&opaque));
    assert_eq!(
        result,
        Err(Error::UnrepresentableValue {
            type_name: "Thread".to_string(),
            display: "main".to_string(),
        })
    );
    assert!(!config::defaults().strict);
    assert_eq!(render(&opaque).unwrap(), "#<Thread main>");
}

#[test]
fn test_scoped_override_restores_after_panic() {
    let _guard = exclusive();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        config::with_strict_mode(true, || {
            assert!(config::defaults().strict);
            panic!("body failed");
        })
    }));
    assert!(outcome.is_err());
    assert!(!config::defaults().strict);
}

#[test]
fn test_nested_scopes_unwind_in_order() {
    let _guard = exclusive();
    config::with_colors(true, || {
        config::with_strict_mode(true, || {
            let defaults = config::defaults();
            assert!(defaults.colored);
            assert!(defaults.strict);
        });
        let defaults = config::defaults();
        assert!(defaults.colored);
        assert!(!defaults.strict);
    });
    let defaults = config::defaults();
    assert!(!defaults.colored);
    assert!(!defaults.strict);
}

#[test]
fn test_display_uses_defaults() {
    let _guard = exclusive();
    assert_eq!(sample().to_string(), "{a 1 b 2}");
    let text = config::with_strict_mode(true, || Value::opaque("Thread", "main").to_string());
    assert!(text.starts_with("#<error "));
}
