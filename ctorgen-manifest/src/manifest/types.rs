//! Type declarations under `[types.<Name>]`.

use std::{fmt, str::FromStr};

use ctorgen_core::{Binding, Constructor, Visibility, hash, kwargs, splat};
use serde::{Deserialize, Serialize};

/// Binding requested in the manifest.
///
/// `default` resolves through [`ctorgen_core::constructor`], the same entry
/// point library users get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingChoice {
    #[default]
    Default,
    Splat,
    Hash,
    Kwargs,
}

impl BindingChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingChoice::Default => "default",
            BindingChoice::Splat => "splat",
            BindingChoice::Hash => "hash",
            BindingChoice::Kwargs => "kwargs",
        }
    }
}

impl fmt::Display for BindingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BindingChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            return Ok(BindingChoice::Default);
        }
        Ok(match Binding::from_str(s)? {
            Binding::Splat => BindingChoice::Splat,
            Binding::Hash => BindingChoice::Hash,
            Binding::Kwargs => BindingChoice::Kwargs,
        })
    }
}

/// A single `[types.<Name>]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    /// Doc comment for the generated struct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attribute names, in constructor order
    pub attributes: Vec<String>,

    /// Reader visibility
    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub binding: BindingChoice,

    /// Concrete attribute type; a generic parameter is used when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl TypeConfig {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: None,
            attributes: attributes.into_iter().map(Into::into).collect(),
            visibility: Visibility::default(),
            binding: BindingChoice::default(),
            value_type: None,
        }
    }

    pub fn binding(mut self, binding: BindingChoice) -> Self {
        self.binding = binding;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Build the constructor this declaration describes.
    pub fn constructor(&self) -> Constructor {
        let names = &self.attributes;
        match self.binding {
            BindingChoice::Default => ctorgen_core::constructor(names, self.visibility),
            BindingChoice::Splat => splat(names, self.visibility),
            BindingChoice::Hash => hash(names, self.visibility),
            BindingChoice::Kwargs => kwargs(names, self.visibility),
        }
    }
}
