use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Facet a card envelope is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    PersonalIdentity,
    Email,
    Phone,
    Address,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PersonalIdentity => "personal_identity",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Returns whether a person may carry more than one card of this type.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        !matches!(self, Self::PersonalIdentity)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trust ranking of where a fact came from.
///
/// Declared from most to least trusted, so the derived ordering puts
/// `UserInput` first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    UserInput,
    #[default]
    Imported,
    Inferred,
    Derived,
}

impl Precedence {
    pub const ALL: [Self; 4] = [Self::UserInput, Self::Imported, Self::Inferred, Self::Derived];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserInput => "user_input",
            Self::Imported => "imported",
            Self::Inferred => "inferred",
            Self::Derived => "derived",
        }
    }
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Precedence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPrecedence(s.to_string()))
    }
}
