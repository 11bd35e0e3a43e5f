//! Fleischner Society 2017 input and recommendation records.
//!
//! # Reference
//!
//! - MacMahon H et al. Guidelines for Management of Incidental Pulmonary
//!   Nodules Detected on CT Images: From the Fleischner Society 2017.
//!   Radiology 2017;284(1):228-243. Tables 1 (solid) and 2 (subsolid).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NoduleError;
use crate::normalize_key;

/// Citation attached to every Fleischner recommendation.
pub const FLEISCHNER_REFERENCE: &str = "Fleischner Society 2017 Guidelines";

/// Nodule attenuation for Fleischner management.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoduleType {
    /// Entirely soft-tissue attenuation.
    #[default]
    Solid,
    /// Ground-glass opacity with no solid component.
    PureGgo,
    /// Ground-glass opacity with a measurable solid component.
    PartSolid,
}

impl NoduleType {
    pub const ALL: [NoduleType; 3] = [NoduleType::Solid, NoduleType::PureGgo, NoduleType::PartSolid];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoduleType::Solid => "Solid",
            NoduleType::PureGgo => "Pure GGO",
            NoduleType::PartSolid => "Part-Solid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NoduleType::Solid => "Entirely soft-tissue attenuation nodule",
            NoduleType::PureGgo => "Ground-glass opacity with no solid component",
            NoduleType::PartSolid => "Ground-glass opacity with measurable solid component",
        }
    }
}

impl fmt::Display for NoduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoduleType {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "SOLID" => Ok(NoduleType::Solid),
            "PUREGGO" | "GGO" | "GROUNDGLASS" | "PUREGROUNDGLASS" => Ok(NoduleType::PureGgo),
            "PARTSOLID" => Ok(NoduleType::PartSolid),
            _ => Err(NoduleError::unknown("nodule type", s)),
        }
    }
}

/// Patient risk stratification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientRisk {
    #[default]
    Low,
    High,
}

impl PatientRisk {
    pub const ALL: [PatientRisk; 2] = [PatientRisk::Low, PatientRisk::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientRisk::Low => "Low Risk",
            PatientRisk::High => "High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatientRisk::Low => {
                "Minimal or absent history of smoking and other known risk factors."
            }
            PatientRisk::High => "History of smoking or other known risk factors.",
        }
    }

    /// Risk factors that place a patient in the high-risk group.
    pub fn risk_factors() -> &'static [&'static str] {
        &[
            "Smoking history (current or former)",
            "Asbestos/radon/uranium exposure",
            "Family history of lung cancer (first-degree relative)",
            "Personal history of lung cancer",
            "COPD or pulmonary fibrosis",
        ]
    }
}

impl fmt::Display for PatientRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatientRisk {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "LOW" | "LOWRISK" => Ok(PatientRisk::Low),
            "HIGH" | "HIGHRISK" => Ok(PatientRisk::High),
            _ => Err(NoduleError::unknown("patient risk", s)),
        }
    }
}

/// Fleischner size band, applied to a measurement rounded to the nearest mm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleischnerSize {
    /// < 6 mm
    #[default]
    LessThanSix,
    /// 6 - 8 mm (inclusive)
    SixToEight,
    /// > 8 mm
    GreaterThanEight,
}

impl FleischnerSize {
    pub const ALL: [FleischnerSize; 3] = [
        FleischnerSize::LessThanSix,
        FleischnerSize::SixToEight,
        FleischnerSize::GreaterThanEight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FleischnerSize::LessThanSix => "< 6 mm",
            FleischnerSize::SixToEight => "6 - 8 mm",
            FleischnerSize::GreaterThanEight => "> 8 mm",
        }
    }

    /// Bucket a size that has already been rounded to the nearest mm.
    pub fn from_mm(mm: f64) -> Self {
        if mm < 6.0 {
            FleischnerSize::LessThanSix
        } else if mm <= 8.0 {
            FleischnerSize::SixToEight
        } else {
            FleischnerSize::GreaterThanEight
        }
    }

    /// Returns true for the two bands at or above 6 mm.
    pub fn is_six_or_more(&self) -> bool {
        !matches!(self, FleischnerSize::LessThanSix)
    }
}

impl fmt::Display for FleischnerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FleischnerSize {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "<6MM" | "<6" | "LESSTHANSIX" => Ok(FleischnerSize::LessThanSix),
            "68MM" | "68" | "SIXTOEIGHT" => Ok(FleischnerSize::SixToEight),
            ">8MM" | ">8" | "GREATERTHANEIGHT" => Ok(FleischnerSize::GreaterThanEight),
            _ => Err(NoduleError::unknown("Fleischner size", s)),
        }
    }
}

/// Solid component band for part-solid nodules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleischnerSolidComponent {
    /// None / not applicable.
    #[default]
    None,
    /// < 6 mm
    LessThanSix,
    /// >= 6 mm
    SixOrMore,
}

impl FleischnerSolidComponent {
    pub const ALL: [FleischnerSolidComponent; 3] = [
        FleischnerSolidComponent::None,
        FleischnerSolidComponent::LessThanSix,
        FleischnerSolidComponent::SixOrMore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FleischnerSolidComponent::None => "None/Not Applicable",
            FleischnerSolidComponent::LessThanSix => "< 6 mm",
            FleischnerSolidComponent::SixOrMore => "≥ 6 mm",
        }
    }

    /// Bucket a rounded solid component size. Zero or negative means none.
    pub fn from_mm(mm: f64) -> Self {
        if mm <= 0.0 {
            FleischnerSolidComponent::None
        } else if mm < 6.0 {
            FleischnerSolidComponent::LessThanSix
        } else {
            FleischnerSolidComponent::SixOrMore
        }
    }
}

impl fmt::Display for FleischnerSolidComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FleischnerSolidComponent {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "NONE" | "N/A" | "NONE/NOTAPPLICABLE" => Ok(FleischnerSolidComponent::None),
            "<6MM" | "<6" | "LESSTHANSIX" => Ok(FleischnerSolidComponent::LessThanSix),
            "≥6MM" | ">=6MM" | "≥6" | ">=6" | "SIXORMORE" => Ok(FleischnerSolidComponent::SixOrMore),
            _ => Err(NoduleError::unknown("Fleischner solid component", s)),
        }
    }
}

/// Input to the Fleischner calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleischnerInput {
    pub nodule_type: NoduleType,
    pub size_category: FleischnerSize,
    /// Only meaningful when `nodule_type` is part-solid.
    pub solid_component: FleischnerSolidComponent,
    pub risk: PatientRisk,
    pub is_multiple: bool,
}

/// Fleischner recommendation. Built once per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleischnerRecommendation {
    pub recommendation: String,
    pub follow_up_interval: Option<String>,
    pub additional_notes: Option<String>,
    pub reference: String,
}

impl FleischnerRecommendation {
    pub fn new(
        recommendation: impl Into<String>,
        follow_up_interval: Option<&str>,
        additional_notes: Option<&str>,
    ) -> Self {
        Self {
            recommendation: recommendation.into(),
            follow_up_interval: follow_up_interval.map(str::to_string),
            additional_notes: additional_notes.map(str::to_string),
            reference: FLEISCHNER_REFERENCE.to_string(),
        }
    }
}
