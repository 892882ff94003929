//! Target types that constructors are applied to.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use indexmap::IndexMap;

use crate::{Arguments, Constructor, Error, Object, Result, Visibility, object::Slots};

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Class`], stable across clones and later compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(u64);

/// A named target type with a reader table and an optional constructor.
///
/// Cloning a class is cheap. The definition is copy-on-write: composing a new
/// constructor into a class does not affect instances created before.
#[derive(Debug, Clone)]
pub struct Class {
    id: ClassId,
    def: Arc<ClassDef>,
}

#[derive(Debug, Clone)]
struct ClassDef {
    name: String,
    readers: IndexMap<String, Visibility>,
    constructor: Option<Constructor>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClassId(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed)),
            def: Arc::new(ClassDef {
                name: name.into(),
                readers: IndexMap::new(),
                constructor: None,
            }),
        }
    }

    /// Compose `constructor` into this class.
    ///
    /// Every attribute gets a reader at the constructor's visibility, replacing
    /// a reader of the same name. The constructor replaces any previously
    /// installed one; readers from earlier compositions stay in place.
    ///
    /// Only the installed constructor is compared: composing `a`, then `b`,
    /// then `a` again reinstalls `a` and its readers. The class keeps no
    /// history of earlier compositions.
    pub fn include(&mut self, constructor: &Constructor) -> &mut Self {
        if self.def.constructor.as_ref() == Some(constructor) {
            return self;
        }

        let def = Arc::make_mut(&mut self.def);
        for name in constructor.attributes() {
            def.readers.insert(name.clone(), constructor.visibility());
        }
        def.constructor = Some(constructor.clone());
        self
    }

    /// Builder-style [`include`](Self::include).
    pub fn with(mut self, constructor: &Constructor) -> Self {
        self.include(constructor);
        self
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.def.constructor.as_ref()
    }

    /// Visibility of the reader called `name`, if one is installed.
    pub fn reader(&self, name: &str) -> Option<Visibility> {
        self.def.readers.get(name).copied()
    }

    /// Installed readers in installation order.
    pub fn readers(&self) -> impl Iterator<Item = (&str, Visibility)> {
        self.def
            .readers
            .iter()
            .map(|(name, visibility)| (name.as_str(), *visibility))
    }

    /// Create an instance by running the installed constructor.
    ///
    /// Without an installed constructor only an empty argument list is
    /// accepted.
    pub fn instantiate<V>(&self, args: impl Into<Arguments<V>>) -> Result<Object<V>> {
        let args = args.into();
        let mut slots = Slots::unset(self.def.readers.keys());

        match &self.def.constructor {
            Some(constructor) => constructor.bind(self.name(), args, &mut slots)?,
            None if args.is_empty() => {}
            None => {
                return Err(Error::ArgumentMismatch {
                    class: self.name().to_string(),
                    expected: "no arguments",
                    given: args.convention(),
                });
            }
        }

        Ok(Object::new(self.clone(), slots))
    }
}
