//! Access levels for generated readers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Access level applied to the readers a [`Constructor`](crate::Constructor) installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Callable only by the instance itself.
    #[default]
    Private,
    /// Callable by the instance and by other instances of the same class.
    Protected,
    /// Callable from anywhere.
    Public,
}

impl Visibility {
    /// Returns the visibility identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Public => "public",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "protected" => Ok(Visibility::Protected),
            "public" => Ok(Visibility::Public),
            _ => Err(format!(
                "unknown visibility '{}', expected 'private', 'protected' or 'public'",
                s
            )),
        }
    }
}
