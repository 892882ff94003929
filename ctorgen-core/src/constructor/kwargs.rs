//! Named-argument binding.

use crate::{AttributeSpec, Binding, Constructor, Visibility, object::Slots};

/// Create a constructor that takes named arguments.
///
/// Unknown names are ignored and missing names stay unset. When a name is
/// passed twice the last value wins.
pub fn kwargs<I, S>(names: I, visibility: Visibility) -> Constructor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Constructor::new(AttributeSpec::new(names), visibility, Binding::Kwargs)
}

pub(super) fn bind<V>(
    attributes: &AttributeSpec,
    entries: impl IntoIterator<Item = (String, V)>,
    slots: &mut Slots<V>,
) {
    entries
        .into_iter()
        .filter(|(name, _)| attributes.contains(name))
        .for_each(|(name, value)| slots.assign(&name, value));
}
