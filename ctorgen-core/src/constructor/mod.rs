//! Constructor traits and their binding strategies.
//!
//! A [`Constructor`] is created once by one of the factories ([`splat`],
//! [`hash`], [`kwargs`]) and can then be applied to any number of
//! [`Class`]es. Applying it installs one reader per attribute at the
//! configured [`Visibility`] and makes the constructor the one
//! [`Class::instantiate`] runs.

mod hash;
mod kwargs;
mod splat;

pub use hash::hash;
pub use kwargs::kwargs;
pub use splat::splat;

use crate::{
    Arguments, AttributeSpec, Binding, Class, Error, Result, Visibility, object::Slots,
};

/// An immutable, reusable constructor/reader bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    attributes: AttributeSpec,
    visibility: Visibility,
    binding: Binding,
}

impl Constructor {
    pub fn new(attributes: AttributeSpec, visibility: Visibility, binding: Binding) -> Self {
        Self {
            attributes,
            visibility,
            binding,
        }
    }

    pub fn attributes(&self) -> &AttributeSpec {
        &self.attributes
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    /// Install readers and this constructor on `class`.
    ///
    /// Re-applying the same constructor is a no-op. Applying a different one
    /// replaces the installed constructor.
    pub fn apply_to(&self, class: &mut Class) {
        class.include(self);
    }

    /// Bind `args` into `slots` according to the binding strategy.
    pub(crate) fn bind<V>(
        &self,
        class: &str,
        args: Arguments<V>,
        slots: &mut Slots<V>,
    ) -> Result<()> {
        match (self.binding, args) {
            (Binding::Splat, Arguments::Positional(values)) => {
                splat::bind(&self.attributes, values, slots)
            }
            (Binding::Hash, Arguments::Mapping(entries)) => {
                hash::bind(&self.attributes, entries, slots)
            }
            (Binding::Hash, Arguments::Named(entries)) => {
                hash::bind(&self.attributes, entries, slots)
            }
            (Binding::Kwargs, Arguments::Named(entries)) => {
                kwargs::bind(&self.attributes, entries, slots)
            }
            (Binding::Kwargs, Arguments::Mapping(entries)) => {
                kwargs::bind(&self.attributes, entries, slots)
            }
            (binding, args) => {
                return Err(Error::ArgumentMismatch {
                    class: class.to_string(),
                    expected: binding.convention(),
                    given: args.convention(),
                });
            }
        }
        Ok(())
    }
}
