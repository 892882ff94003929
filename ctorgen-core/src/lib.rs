//! Constructor and reader generation for plain objects.
//!
//! A [`Constructor`] bundles an ordered list of attribute names, a reader
//! [`Visibility`] and a [`Binding`] strategy. Applying it to a [`Class`]
//! installs one reader per attribute and a constructor that fills the
//! instance slots from positional, mapping or named arguments.
//!
//! ```
//! use ctorgen_core::{Class, Visibility, args, constructor};
//!
//! let mut class = Class::new("Controller");
//! constructor(["request", "response"], Visibility::Private).apply_to(&mut class);
//!
//! let controller = class.instantiate(args!["GET /", "200 OK"]).unwrap();
//! assert!(controller.public_send("request").is_err());
//! assert_eq!(controller.send("response").unwrap(), Some(&"200 OK"));
//! ```
//!
//! Binding is deliberately lenient: surplus positional values and unknown
//! keys are dropped, and attributes without a matching argument stay unset.

mod arguments;
mod attribute;
mod binding;
mod class;
mod constructor;
mod error;
mod object;
mod visibility;

pub use arguments::Arguments;
pub use attribute::AttributeSpec;
pub use binding::Binding;
pub use class::{Class, ClassId};
pub use constructor::{Constructor, hash, kwargs, splat};
pub use error::{Error, Result};
pub use object::{Object, Scope};
pub use visibility::Visibility;

/// Create the default constructor for `names`.
///
/// This is the positional constructor produced by [`splat`].
pub fn constructor<I, S>(names: I, visibility: Visibility) -> Constructor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    splat(names, visibility)
}
