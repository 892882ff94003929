//! Constructor call arguments.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Arguments passed to [`Class::instantiate`](crate::Class::instantiate).
#[derive(Debug, Clone, PartialEq)]
pub enum Arguments<V> {
    /// Ordered values, e.g. `new(a, b, c)`.
    Positional(Vec<V>),
    /// A single mapping value, e.g. `new({"a" => a})`.
    Mapping(IndexMap<String, V>),
    /// Named arguments, e.g. `new(a: a)`.
    Named(Vec<(String, V)>),
}

impl<V> Arguments<V> {
    pub fn positional(values: impl IntoIterator<Item = V>) -> Self {
        Self::Positional(values.into_iter().collect())
    }

    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn named<K: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Named(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Describe the calling convention of these arguments.
    pub fn convention(&self) -> &'static str {
        match self {
            Self::Positional(_) => "positional arguments",
            Self::Mapping(_) => "a mapping",
            Self::Named(_) => "named arguments",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(values) => values.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Named(entries) => entries.is_empty(),
        }
    }
}

impl<V> From<Vec<V>> for Arguments<V> {
    fn from(values: Vec<V>) -> Self {
        Self::Positional(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Arguments<V> {
    fn from(values: [V; N]) -> Self {
        Self::positional(values)
    }
}

impl<V> From<IndexMap<String, V>> for Arguments<V> {
    fn from(entries: IndexMap<String, V>) -> Self {
        Self::Mapping(entries)
    }
}

impl<V> From<HashMap<String, V>> for Arguments<V> {
    fn from(entries: HashMap<String, V>) -> Self {
        Self::mapping(entries)
    }
}

/// Build positional [`Arguments`].
///
/// ```
/// use ctorgen_core::{Arguments, args};
///
/// let args: Arguments<i32> = args![1, 2, 3];
/// assert_eq!(args, Arguments::Positional(vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::Positional(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::Positional(::std::vec![$($value),+])
    };
}

/// Build named [`Arguments`].
///
/// ```
/// use ctorgen_core::{Arguments, kwargs};
///
/// let args = kwargs! { one: 1, two: 2 };
/// assert_eq!(
///     args,
///     Arguments::Named(vec![("one".to_string(), 1), ("two".to_string(), 2)])
/// );
/// ```
#[macro_export]
macro_rules! kwargs {
    () => {
        $crate::Arguments::Named(::std::vec::Vec::new())
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::Arguments::Named(::std::vec![
            $((::std::string::String::from(::std::stringify!($name)), $value)),+
        ])
    };
}
