//! Argument binding strategies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How constructor arguments map onto attribute slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    /// Positional values zipped against the attribute names.
    #[default]
    Splat,
    /// A single mapping whose known keys are assigned.
    Hash,
    /// Named arguments whose known names are assigned.
    Kwargs,
}

impl Binding {
    /// Returns the binding identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Binding::Splat => "splat",
            Binding::Hash => "hash",
            Binding::Kwargs => "kwargs",
        }
    }

    /// Describe the calling convention the constructor expects.
    pub fn convention(&self) -> &'static str {
        match self {
            Binding::Splat => "positional arguments",
            Binding::Hash => "a mapping",
            Binding::Kwargs => "named arguments",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Binding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "splat" | "positional" => Ok(Binding::Splat),
            "hash" | "mapping" => Ok(Binding::Hash),
            "kwargs" | "named" => Ok(Binding::Kwargs),
            _ => Err(format!(
                "unknown binding '{}', expected 'splat', 'hash' or 'kwargs'",
                s
            )),
        }
    }
}
