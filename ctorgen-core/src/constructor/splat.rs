//! Positional binding.

use crate::{AttributeSpec, Binding, Constructor, Visibility, object::Slots};

/// Create a constructor that takes positional arguments.
///
/// Values are zipped against `names` in order. Missing trailing values leave
/// their attributes unset and surplus values are dropped.
///
/// ```
/// use ctorgen_core::{Class, Visibility, args, splat};
///
/// let mut class = Class::new("Controller");
/// splat(["request", "response"], Visibility::Public).apply_to(&mut class);
///
/// let controller = class.instantiate(args!["GET /", "200 OK"]).unwrap();
/// assert_eq!(controller.public_send("request").unwrap(), Some(&"GET /"));
/// ```
pub fn splat<I, S>(names: I, visibility: Visibility) -> Constructor
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Constructor::new(AttributeSpec::new(names), visibility, Binding::Splat)
}

pub(super) fn bind<V>(attributes: &AttributeSpec, values: Vec<V>, slots: &mut Slots<V>) {
    for (name, value) in attributes.iter().zip(values) {
        slots.assign(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Error, Scope, args};

    fn controller(visibility: Visibility) -> Class {
        let mut class = Class::new("Controller");
        splat(["one", "two", "three"], visibility).apply_to(&mut class);
        class
    }

    #[test]
    fn test_private_readers_reject_external_calls() {
        let instance = controller(Visibility::Private)
            .instantiate(args![1, 2, 3])
            .unwrap();

        for name in ["one", "two", "three"] {
            let err = instance.public_send(name).unwrap_err();
            assert!(matches!(
                err,
                Error::AccessDenied {
                    visibility: Visibility::Private,
                    ..
                }
            ));
        }
        assert_eq!(instance.send("one").unwrap(), Some(&1));
        assert_eq!(instance.send("two").unwrap(), Some(&2));
        assert_eq!(instance.send("three").unwrap(), Some(&3));
    }

    #[test]
    fn test_protected_readers_reject_external_calls() {
        let class = controller(Visibility::Protected);
        let instance = class.instantiate(args![1, 2, 3]).unwrap();

        assert!(instance.public_send("one").unwrap_err().is_no_method());
        assert_eq!(instance.call("two", Scope::Sibling(&class)).unwrap(), Some(&2));
        assert_eq!(instance.send("three").unwrap(), Some(&3));
    }

    #[test]
    fn test_public_readers() {
        let instance = controller(Visibility::Public)
            .instantiate(args!["a", "b", "c"])
            .unwrap();

        assert_eq!(instance.public_send("one").unwrap(), Some(&"a"));
        assert_eq!(instance.public_send("two").unwrap(), Some(&"b"));
        assert_eq!(instance.public_send("three").unwrap(), Some(&"c"));
    }

    #[test]
    fn test_fewer_values_leave_trailing_attributes_unset() {
        let instance = controller(Visibility::Public)
            .instantiate(args![1])
            .unwrap();

        assert_eq!(instance.public_send("one").unwrap(), Some(&1));
        assert_eq!(instance.public_send("two").unwrap(), None);
        assert_eq!(instance.public_send("three").unwrap(), None);
    }

    #[test]
    fn test_surplus_values_are_discarded() {
        let instance = controller(Visibility::Public)
            .instantiate(args![1, 2, 3, 4, 5])
            .unwrap();

        assert_eq!(instance.public_send("three").unwrap(), Some(&3));
        assert_eq!(instance.slot_count(), 3);
    }

    #[test]
    fn test_no_values() {
        let instance = controller(Visibility::Public)
            .instantiate(Vec::<i32>::new())
            .unwrap();

        assert_eq!(instance.public_send("one").unwrap(), None);
    }

    #[test]
    fn test_mapping_is_rejected_at_the_call_boundary() {
        let class = controller(Visibility::Public);
        let err = class
            .instantiate(crate::Arguments::mapping([("one", 1)]))
            .unwrap_err();

        assert_eq!(
            err,
            Error::ArgumentMismatch {
                class: "Controller".into(),
                expected: "positional arguments",
                given: "a mapping",
            }
        );
    }
}
