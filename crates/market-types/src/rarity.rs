//! Rarity codes and their display attributes.

use serde::{Deserialize, Serialize};

/// Known rarity tiers. The contract emits codes 1-4; anything else renders
/// through the [`Rarity::label`]/[`Rarity::color`] fallbacks instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    SuperRare,
}

impl Rarity {
    /// Map an on-chain rarity code to a known tier. Unknown codes return
    /// `None`; callers fall back via [`Rarity::label`]/[`Rarity::color`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Common),
            2 => Some(Self::Uncommon),
            3 => Some(Self::Rare),
            4 => Some(Self::SuperRare),
            _ => None,
        }
    }

    /// Display label for a rarity code, with a defined fallback for
    /// unknown codes.
    pub fn label(code: u8) -> &'static str {
        match Self::from_code(code) {
            Some(Self::Common) => "Common",
            Some(Self::Uncommon) => "Uncommon",
            Some(Self::Rare) => "Rare",
            Some(Self::SuperRare) => "Super Rare",
            None => "Unknown",
        }
    }

    /// Display color tag for a rarity code, with a defined fallback.
    pub fn color(code: u8) -> &'static str {
        match Self::from_code(code) {
            Some(Self::Common) => "green",
            Some(Self::Uncommon) => "blue",
            Some(Self::Rare) => "purple",
            Some(Self::SuperRare) => "orange",
            None => "default",
        }
    }

    /// The on-chain code for this tier.
    pub fn code(&self) -> u8 {
        match self {
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 3,
            Self::SuperRare => 4,
        }
    }
}
