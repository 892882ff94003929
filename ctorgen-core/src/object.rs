//! Instances and reader dispatch.

use indexmap::IndexMap;

use crate::{Class, Error, Result, Visibility};

/// Where a reader call originates.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// Code outside the class.
    External,
    /// An instance method of `class`, calling a reader on another instance.
    Sibling(&'a Class),
    /// The instance calling its own reader.
    Internal,
}

impl Scope<'_> {
    fn permits(&self, visibility: Visibility, owner: &Class) -> bool {
        match (visibility, self) {
            (Visibility::Public, _) | (_, Scope::Internal) => true,
            (Visibility::Protected, Scope::Sibling(class)) => class.id() == owner.id(),
            _ => false,
        }
    }
}

/// Per-instance attribute storage. `None` marks an unset slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slots<V>(IndexMap<String, Option<V>>);

impl<V> Slots<V> {
    pub(crate) fn unset<'a>(names: impl IntoIterator<Item = &'a String>) -> Self {
        Self(names.into_iter().map(|name| (name.clone(), None)).collect())
    }

    pub(crate) fn assign(&mut self, name: &str, value: V) {
        if let Some(slot) = self.0.get_mut(name) {
            *slot = Some(value);
        }
    }

    fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name).and_then(Option::as_ref)
    }
}

/// An instance produced by [`Class::instantiate`].
#[derive(Debug, Clone)]
pub struct Object<V> {
    class: Class,
    slots: Slots<V>,
}

impl<V> Object<V> {
    pub(crate) fn new(class: Class, slots: Slots<V>) -> Self {
        Self { class, slots }
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Call the reader `method` from `scope`.
    ///
    /// Returns `Ok(None)` when the attribute was never assigned.
    pub fn call(&self, method: &str, scope: Scope<'_>) -> Result<Option<&V>> {
        let Some(visibility) = self.class.reader(method) else {
            return Err(Error::UndefinedMethod {
                class: self.class.name().to_string(),
                method: method.to_string(),
            });
        };

        if !scope.permits(visibility, &self.class) {
            return Err(Error::AccessDenied {
                class: self.class.name().to_string(),
                method: method.to_string(),
                visibility,
            });
        }

        Ok(self.slots.get(method))
    }

    /// Call a reader from outside the class. Only public readers succeed.
    pub fn public_send(&self, method: &str) -> Result<Option<&V>> {
        self.call(method, Scope::External)
    }

    /// Call a reader from inside the instance, bypassing visibility.
    pub fn send(&self, method: &str) -> Result<Option<&V>> {
        self.call(method, Scope::Internal)
    }

    /// Whether `method` is a reader callable from outside the class.
    pub fn responds_to(&self, method: &str) -> bool {
        self.class.reader(method).is_some_and(|v| v.is_public())
    }

    /// Whether the attribute `name` holds a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.slots.get(name).is_some()
    }

    /// Number of attribute slots held by this instance.
    pub fn slot_count(&self) -> usize {
        self.slots.0.len()
    }
}
