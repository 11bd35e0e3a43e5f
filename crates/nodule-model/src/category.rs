//! Lung-RADS v2022 assessment categories.
//!
//! Each category carries a fixed risk ordinal, probability of malignancy and
//! description. Ordering follows the risk ordinal; the S modifier sits
//! outside the numeric scale and compares as unordered.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::NoduleError;
use crate::normalize_key;

/// Lung-RADS category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LungRadsCategory {
    #[serde(rename = "0")]
    Cat0,
    #[serde(rename = "1")]
    Cat1,
    #[serde(rename = "2")]
    Cat2,
    #[serde(rename = "3")]
    Cat3,
    #[serde(rename = "4A")]
    Cat4A,
    #[serde(rename = "4B")]
    Cat4B,
    #[serde(rename = "4X")]
    Cat4X,
    #[serde(rename = "S")]
    S,
}

/// Static attributes of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    /// Risk ordinal; -1 marks a category outside the numeric scale.
    pub risk_level: i8,
    pub probability_of_malignancy: &'static str,
    pub description: &'static str,
}

const CAT0: CategoryInfo = CategoryInfo {
    label: "0",
    risk_level: 0,
    probability_of_malignancy: "N/A",
    description: "Incomplete",
};
const CAT1: CategoryInfo = CategoryInfo {
    label: "1",
    risk_level: 1,
    probability_of_malignancy: "< 1%",
    description: "Negative",
};
const CAT2: CategoryInfo = CategoryInfo {
    label: "2",
    risk_level: 2,
    probability_of_malignancy: "< 1%",
    description: "Benign Appearance or Behavior",
};
const CAT3: CategoryInfo = CategoryInfo {
    label: "3",
    risk_level: 3,
    probability_of_malignancy: "1-2%",
    description: "Probably Benign",
};
const CAT4A: CategoryInfo = CategoryInfo {
    label: "4A",
    risk_level: 4,
    probability_of_malignancy: "5-15%",
    description: "Suspicious",
};
const CAT4B: CategoryInfo = CategoryInfo {
    label: "4B",
    risk_level: 5,
    probability_of_malignancy: "> 15%",
    description: "Very Suspicious",
};
const CAT4X: CategoryInfo = CategoryInfo {
    label: "4X",
    risk_level: 6,
    probability_of_malignancy: "> 15%",
    description: "Highly Suspicious",
};
const CAT_S: CategoryInfo = CategoryInfo {
    label: "S",
    risk_level: -1,
    probability_of_malignancy: "N/A",
    description: "Other Clinically Significant Findings",
};

impl LungRadsCategory {
    pub const ALL: [LungRadsCategory; 8] = [
        LungRadsCategory::Cat0,
        LungRadsCategory::Cat1,
        LungRadsCategory::Cat2,
        LungRadsCategory::Cat3,
        LungRadsCategory::Cat4A,
        LungRadsCategory::Cat4B,
        LungRadsCategory::Cat4X,
        LungRadsCategory::S,
    ];

    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            LungRadsCategory::Cat0 => &CAT0,
            LungRadsCategory::Cat1 => &CAT1,
            LungRadsCategory::Cat2 => &CAT2,
            LungRadsCategory::Cat3 => &CAT3,
            LungRadsCategory::Cat4A => &CAT4A,
            LungRadsCategory::Cat4B => &CAT4B,
            LungRadsCategory::Cat4X => &CAT4X,
            LungRadsCategory::S => &CAT_S,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.info().label
    }

    pub fn risk_level(&self) -> i8 {
        self.info().risk_level
    }

    pub fn probability_of_malignancy(&self) -> &'static str {
        self.info().probability_of_malignancy
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    /// Returns true for categories on the ordered 0-4X scale.
    pub fn is_ordered(&self) -> bool {
        self.risk_level() >= 0
    }

    /// Categories eligible for the 4X upgrade.
    pub fn is_upgradable_to_4x(&self) -> bool {
        matches!(
            self,
            LungRadsCategory::Cat3 | LungRadsCategory::Cat4A | LungRadsCategory::Cat4B
        )
    }
}

impl PartialOrd for LungRadsCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if !self.is_ordered() || !other.is_ordered() {
            return None;
        }
        Some(self.risk_level().cmp(&other.risk_level()))
    }
}

impl fmt::Display for LungRadsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LungRadsCategory {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        let key = key.strip_prefix("CATEGORY").unwrap_or(&key);
        let key = key.strip_prefix("CAT").unwrap_or(key);
        match key {
            "0" => Ok(LungRadsCategory::Cat0),
            "1" => Ok(LungRadsCategory::Cat1),
            "2" => Ok(LungRadsCategory::Cat2),
            "3" => Ok(LungRadsCategory::Cat3),
            "4A" => Ok(LungRadsCategory::Cat4A),
            "4B" => Ok(LungRadsCategory::Cat4B),
            "4X" => Ok(LungRadsCategory::Cat4X),
            "S" => Ok(LungRadsCategory::S),
            _ => Err(NoduleError::unknown("Lung-RADS category", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_risk_level() {
        assert!(LungRadsCategory::Cat2 < LungRadsCategory::Cat3);
        assert!(LungRadsCategory::Cat4A < LungRadsCategory::Cat4B);
        assert!(LungRadsCategory::Cat4B < LungRadsCategory::Cat4X);
        assert!(LungRadsCategory::Cat0 < LungRadsCategory::Cat1);
    }

    #[test]
    fn s_is_unordered() {
        assert_eq!(
            LungRadsCategory::S.partial_cmp(&LungRadsCategory::Cat0),
            None
        );
        assert_eq!(
            LungRadsCategory::Cat4X.partial_cmp(&LungRadsCategory::S),
            None
        );
        assert_eq!(
            LungRadsCategory::S.partial_cmp(&LungRadsCategory::S),
            Some(Ordering::Equal)
        );
        assert!(!(LungRadsCategory::S < LungRadsCategory::Cat1));
        assert!(!(LungRadsCategory::S > LungRadsCategory::Cat1));
    }

    #[test]
    fn table_values() {
        assert_eq!(LungRadsCategory::Cat3.probability_of_malignancy(), "1-2%");
        assert_eq!(LungRadsCategory::Cat4A.probability_of_malignancy(), "5-15%");
        assert_eq!(LungRadsCategory::S.risk_level(), -1);
        assert_eq!(LungRadsCategory::Cat4X.risk_level(), 6);
        assert_eq!(LungRadsCategory::Cat1.description(), "Negative");
    }

    #[test]
    fn parse_labels() {
        assert_eq!("4a".parse::<LungRadsCategory>(), Ok(LungRadsCategory::Cat4A));
        assert_eq!("Category 4X".parse::<LungRadsCategory>(), Ok(LungRadsCategory::Cat4X));
        assert_eq!("cat2".parse::<LungRadsCategory>(), Ok(LungRadsCategory::Cat2));
        assert!("5".parse::<LungRadsCategory>().is_err());
    }
}
