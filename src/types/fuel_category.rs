//! The fuel categories a registered vehicle can be classified into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fuel type of a vehicle, as guessed from its trade name.
///
/// The variants are declared in the order the classifier tests them, which is
/// also the order used for columns and histogram tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelCategory {
    /// Battery electric vehicles.
    Electric,
    /// Hybrids and plug-in hybrids.
    Hybrid,
    Diesel,
    /// Fuel cell vehicles ("waterstof").
    Hydrogen,
    /// Everything no keyword matched.
    Gasoline,
}

impl FuelCategory {
    /// All categories in declaration order.
    pub const ALL: [FuelCategory; 5] = [
        FuelCategory::Electric,
        FuelCategory::Hybrid,
        FuelCategory::Diesel,
        FuelCategory::Hydrogen,
        FuelCategory::Gasoline,
    ];

    /// Stable lowercase label, used as column name in report frames.
    pub fn label(&self) -> &'static str {
        match self {
            FuelCategory::Electric => "electric",
            FuelCategory::Hybrid => "hybrid",
            FuelCategory::Diesel => "diesel",
            FuelCategory::Hydrogen => "hydrogen",
            FuelCategory::Gasoline => "gasoline",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// # Examples
///
/// ```
/// use laadpaal::FuelCategory;
///
/// assert_eq!(FuelCategory::Hydrogen.to_string(), "hydrogen");
/// ```
impl fmt::Display for FuelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown fuel category '{0}'")]
pub struct ParseFuelCategoryError(pub String);

impl FromStr for FuelCategory {
    type Err = ParseFuelCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFuelCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in FuelCategory::ALL {
            assert_eq!(category.label().parse::<FuelCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "lpg".parse::<FuelCategory>(),
            Err(ParseFuelCategoryError("lpg".to_string()))
        );
    }

    #[test]
    fn test_index_follows_declaration_order() {
        for (i, category) in FuelCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
