/// Builds a [`Value`](crate::Value) from EDN-like syntax.
///
/// - `nil`, `true`, `false`, `:keywords`, literals and negative literals
/// - `[a b]` vectors and `#{a b}` sets; commas between items are optional
/// - `{:key value}` maps with keyword keys and `{"key": value}` maps with
///   literal keys
/// - `(head a b)` seqs headed by the symbol `head`
/// - any other single token tree is an expression converted through
///   [`to_value`](crate::to_value); bind longer expressions to a variable first
///
/// An expression whose `Serialize` impl fails becomes `nil`. Call
/// [`to_value`](crate::to_value) directly to see the error.
///
/// # Examples
///
/// ```rust
/// use serde_edn_pretty::{edn, render};
///
/// let born = [1815, 12, 10];
/// let value = edn!({
///     :name "Ada",
///     :langs #{"en" "fr"},
///     :born born,
///     :form (inc -1),
/// });
/// assert_eq!(
///     render(&value).unwrap(),
///     r#"{:born [1815 12 10] :form (inc -1) :langs #{"en" "fr"} :name "Ada"}"#
/// );
/// ```
#[macro_export]
macro_rules! edn {
    // Sequence items, separated by commas or whitespace.
    (@items $items:ident) => {};
    (@items $items:ident , $($rest:tt)*) => {
        $crate::edn!(@items $items $($rest)*)
    };
    (@items $items:ident # { $($set:tt)* } $($rest:tt)*) => {
        $items.push($crate::edn!(#{ $($set)* }));
        $crate::edn!(@items $items $($rest)*);
    };
    (@items $items:ident : $kw:ident $($rest:tt)*) => {
        $items.push($crate::Value::keyword(stringify!($kw)));
        $crate::edn!(@items $items $($rest)*);
    };
    (@items $items:ident - $num:literal $($rest:tt)*) => {
        $items.push($crate::edn!((-$num)));
        $crate::edn!(@items $items $($rest)*);
    };
    (@items $items:ident $elem:tt $($rest:tt)*) => {
        $items.push($crate::edn!($elem));
        $crate::edn!(@items $items $($rest)*);
    };

    // Map entries.
    (@entries $map:ident) => {};
    (@entries $map:ident , $($rest:tt)*) => {
        $crate::edn!(@entries $map $($rest)*)
    };
    (@entries $map:ident : $key:ident $($rest:tt)*) => {
        $crate::edn!(@value $map ($crate::Value::keyword(stringify!($key))) $($rest)*)
    };
    (@entries $map:ident $key:literal : $($rest:tt)*) => {
        $crate::edn!(@value $map ($crate::Value::from($key)) $($rest)*)
    };
    (@value $map:ident ($key:expr) # { $($set:tt)* } $($rest:tt)*) => {
        $map.insert($key, $crate::edn!(#{ $($set)* }));
        $crate::edn!(@entries $map $($rest)*);
    };
    (@value $map:ident ($key:expr) : $kw:ident $($rest:tt)*) => {
        $map.insert($key, $crate::Value::keyword(stringify!($kw)));
        $crate::edn!(@entries $map $($rest)*);
    };
    (@value $map:ident ($key:expr) - $num:literal $($rest:tt)*) => {
        $map.insert($key, $crate::edn!((-$num)));
        $crate::edn!(@entries $map $($rest)*);
    };
    (@value $map:ident ($key:expr) $value:tt $($rest:tt)*) => {
        $map.insert($key, $crate::edn!($value));
        $crate::edn!(@entries $map $($rest)*);
    };

    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    (: $kw:ident) => {
        $crate::Value::keyword(stringify!($kw))
    };

    ([ $($tokens:tt)* ]) => {{
        #[allow(unused_mut)]
        let mut items: ::std::vec::Vec<$crate::Value> = ::std::vec::Vec::new();
        $crate::edn!(@items items $($tokens)*);
        $crate::Value::Vector(items)
    }};

    (# { $($tokens:tt)* }) => {{
        #[allow(unused_mut)]
        let mut items: ::std::vec::Vec<$crate::Value> = ::std::vec::Vec::new();
        $crate::edn!(@items items $($tokens)*);
        $crate::Value::set(items)
    }};

    ({ $($tokens:tt)* }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::ValueMap::new();
        $crate::edn!(@entries map $($tokens)*);
        $crate::Value::Map(map)
    }};

    (( $head:ident $($rest:tt)* )) => {{
        #[allow(unused_mut)]
        let mut items = vec![$crate::Value::symbol(stringify!($head))];
        $crate::edn!(@items items $($rest)*);
        $crate::Value::Seq(items)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Nil)
    };
}
