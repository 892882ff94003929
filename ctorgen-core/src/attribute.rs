//! Ordered attribute name lists.

/// The ordered list of attribute names a [`Constructor`](crate::Constructor) manages.
///
/// Names are unique: when a name is repeated only its first occurrence is
/// kept, so positional binding follows the order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeSpec {
    names: Vec<String>,
}

impl AttributeSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = Self::default();
        for name in names {
            let name = name.into();
            if !spec.contains(&name) {
                spec.names.push(name);
            }
        }
        spec
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSpec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a AttributeSpec {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
