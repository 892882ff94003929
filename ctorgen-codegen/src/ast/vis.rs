//! Rust item visibility.

use ctorgen_core::Visibility;

/// Visibility modifier of a generated Rust item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vis {
    /// No modifier.
    Private,
    /// `pub(crate)`.
    Crate,
    /// `pub`.
    #[default]
    Public,
}

impl Vis {
    /// The modifier followed by a space, or an empty string.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Private => "",
            Self::Crate => "pub(crate) ",
            Self::Public => "pub ",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Readers map onto Rust visibility: private stays inside the defining
/// module, protected widens to the crate, public is `pub`.
impl From<Visibility> for Vis {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Private => Self::Private,
            Visibility::Protected => Self::Crate,
            Visibility::Public => Self::Public,
        }
    }
}
