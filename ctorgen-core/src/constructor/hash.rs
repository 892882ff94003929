//! Mapping binding.

use crate::{AttributeSpec, Binding, Constructor, Visibility, object::Slots};

/// Create a constructor that takes a single mapping.
///
/// Entries whose key is one of `names` are assigned, every other entry is
/// ignored, and names missing from the mapping stay unset.
pub fn hash<I, S>(names: I, visibility: Visibility) -> Constructor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Constructor::new(AttributeSpec::new(names), visibility, Binding::Hash)
}

pub(super) fn bind<V>(
    attributes: &AttributeSpec,
    entries: impl IntoIterator<Item = (String, V)>,
    slots: &mut Slots<V>,
) {
    for (key, value) in entries {
        if attributes.contains(&key) {
            slots.assign(&key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::{Arguments, Class, Error, kwargs};

    fn controller(visibility: Visibility) -> Class {
        let mut class = Class::new("Controller");
        hash(["one", "two", "three"], visibility).apply_to(&mut class);
        class
    }

    #[test]
    fn test_private_readers() {
        let instance = controller(Visibility::Private)
            .instantiate(Arguments::mapping([("one", 1), ("two", 2), ("three", 3)]))
            .unwrap();

        assert!(matches!(
            instance.public_send("one"),
            Err(Error::AccessDenied { .. })
        ));
        assert_eq!(instance.send("one").unwrap(), Some(&1));
        assert_eq!(instance.send("two").unwrap(), Some(&2));
        assert_eq!(instance.send("three").unwrap(), Some(&3));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let instance = controller(Visibility::Public)
            .instantiate(Arguments::mapping([("one", 1), ("two", 2), ("four", 4)]))
            .unwrap();

        assert_eq!(instance.public_send("one").unwrap(), Some(&1));
        assert_eq!(instance.public_send("two").unwrap(), Some(&2));
        assert_eq!(instance.public_send("three").unwrap(), None);
        assert!(matches!(
            instance.public_send("four"),
            Err(Error::UndefinedMethod { .. })
        ));
        assert_eq!(instance.slot_count(), 3);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut map = IndexMap::new();
        map.insert("three".to_string(), 3);
        map.insert("one".to_string(), 1);

        let instance = controller(Visibility::Public).instantiate(map).unwrap();

        assert_eq!(instance.public_send("one").unwrap(), Some(&1));
        assert_eq!(instance.public_send("two").unwrap(), None);
        assert_eq!(instance.public_send("three").unwrap(), Some(&3));
    }

    #[test]
    fn test_accepts_named_arguments() {
        let instance = controller(Visibility::Public)
            .instantiate(kwargs! { one: "a", three: "c" })
            .unwrap();

        assert_eq!(instance.public_send("one").unwrap(), Some(&"a"));
        assert_eq!(instance.public_send("three").unwrap(), Some(&"c"));
    }

    #[test]
    fn test_positional_is_rejected_at_the_call_boundary() {
        let err = controller(Visibility::Public)
            .instantiate(vec![1, 2, 3])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::ArgumentMismatch {
                expected: "a mapping",
                ..
            }
        ));
    }
}
