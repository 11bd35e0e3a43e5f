//! ACR Lung-RADS v2022 input and result records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::LungRadsCategory;
use crate::error::NoduleError;
use crate::normalize_key;

/// Nodule type as classified by Lung-RADS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LungRadsNoduleType {
    #[default]
    Solid,
    PartSolid,
    /// Non-solid (pure ground-glass).
    GroundGlass,
    Juxtapleural,
    Perifissural,
    /// Endobronchial or airway nodule.
    Airway,
    AtypicalCyst,
}

impl LungRadsNoduleType {
    pub const ALL: [LungRadsNoduleType; 7] = [
        LungRadsNoduleType::Solid,
        LungRadsNoduleType::PartSolid,
        LungRadsNoduleType::GroundGlass,
        LungRadsNoduleType::Juxtapleural,
        LungRadsNoduleType::Perifissural,
        LungRadsNoduleType::Airway,
        LungRadsNoduleType::AtypicalCyst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LungRadsNoduleType::Solid => "Solid",
            LungRadsNoduleType::PartSolid => "Part-Solid",
            LungRadsNoduleType::GroundGlass => "Non-Solid (GGO)",
            LungRadsNoduleType::Juxtapleural => "Juxtapleural Solid",
            LungRadsNoduleType::Perifissural => "Perifissural",
            LungRadsNoduleType::Airway => "Endobronchial/Airway",
            LungRadsNoduleType::AtypicalCyst => "Atypical Pulmonary Cyst",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LungRadsNoduleType::Solid => "Entirely soft-tissue attenuation nodule",
            LungRadsNoduleType::PartSolid => "Mixed ground-glass and solid components",
            LungRadsNoduleType::GroundGlass => "Pure ground-glass opacity (non-solid)",
            LungRadsNoduleType::Juxtapleural => "Solid nodule abutting pleural surface",
            LungRadsNoduleType::Perifissural => "Triangular/lentiform nodule attached to fissure",
            LungRadsNoduleType::Airway => "Nodule within or adjacent to airway",
            LungRadsNoduleType::AtypicalCyst => "Cyst with wall thickening or nodularity",
        }
    }
}

impl fmt::Display for LungRadsNoduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LungRadsNoduleType {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "SOLID" => Ok(LungRadsNoduleType::Solid),
            "PARTSOLID" => Ok(LungRadsNoduleType::PartSolid),
            "GROUNDGLASS" | "GGO" | "GGN" | "NONSOLID" | "NONSOLID(GGO)" => {
                Ok(LungRadsNoduleType::GroundGlass)
            }
            "JUXTAPLEURAL" | "JUXTAPLEURALSOLID" => Ok(LungRadsNoduleType::Juxtapleural),
            "PERIFISSURAL" => Ok(LungRadsNoduleType::Perifissural),
            "AIRWAY" | "ENDOBRONCHIAL" | "ENDOBRONCHIAL/AIRWAY" => Ok(LungRadsNoduleType::Airway),
            "ATYPICALCYST" | "ATYPICALPULMONARYCYST" => Ok(LungRadsNoduleType::AtypicalCyst),
            _ => Err(NoduleError::unknown("Lung-RADS nodule type", s)),
        }
    }
}

/// Lung-RADS mean diameter band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LungRadsSize {
    /// < 4 mm
    #[default]
    LessThanFour,
    /// 4 - 5.9 mm
    FourToSix,
    /// 6 - 7.9 mm
    SixToEight,
    /// 8 - 14.9 mm
    EightToFifteen,
    /// 15 - 29.9 mm
    FifteenToThirty,
    /// >= 30 mm
    ThirtyPlus,
}

impl LungRadsSize {
    pub const ALL: [LungRadsSize; 6] = [
        LungRadsSize::LessThanFour,
        LungRadsSize::FourToSix,
        LungRadsSize::SixToEight,
        LungRadsSize::EightToFifteen,
        LungRadsSize::FifteenToThirty,
        LungRadsSize::ThirtyPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LungRadsSize::LessThanFour => "< 4 mm",
            LungRadsSize::FourToSix => "4-5.9 mm",
            LungRadsSize::SixToEight => "6-7.9 mm",
            LungRadsSize::EightToFifteen => "8-14.9 mm",
            LungRadsSize::FifteenToThirty => "15-29.9 mm",
            LungRadsSize::ThirtyPlus => "≥ 30 mm",
        }
    }

    /// Lower bound of the band, used for threshold comparisons.
    pub fn lower_bound(&self) -> f64 {
        match self {
            LungRadsSize::LessThanFour => 0.0,
            LungRadsSize::FourToSix => 4.0,
            LungRadsSize::SixToEight => 6.0,
            LungRadsSize::EightToFifteen => 8.0,
            LungRadsSize::FifteenToThirty => 15.0,
            LungRadsSize::ThirtyPlus => 30.0,
        }
    }

    /// Bucket a size already rounded to 0.1 mm.
    pub fn from_mm(mm: f64) -> Self {
        if mm < 4.0 {
            LungRadsSize::LessThanFour
        } else if mm < 6.0 {
            LungRadsSize::FourToSix
        } else if mm < 8.0 {
            LungRadsSize::SixToEight
        } else if mm < 15.0 {
            LungRadsSize::EightToFifteen
        } else if mm < 30.0 {
            LungRadsSize::FifteenToThirty
        } else {
            LungRadsSize::ThirtyPlus
        }
    }

    /// Returns true when the whole band lies below 10 mm.
    pub fn is_below_ten_mm(&self) -> bool {
        matches!(
            self,
            LungRadsSize::LessThanFour | LungRadsSize::FourToSix | LungRadsSize::SixToEight
        )
    }
}

impl fmt::Display for LungRadsSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LungRadsSize {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "<4MM" | "<4" | "LESSTHANFOUR" => Ok(LungRadsSize::LessThanFour),
            "45.9MM" | "45.9" | "FOURTOSIX" => Ok(LungRadsSize::FourToSix),
            "67.9MM" | "67.9" | "SIXTOEIGHT" => Ok(LungRadsSize::SixToEight),
            "814.9MM" | "814.9" | "EIGHTTOFIFTEEN" => Ok(LungRadsSize::EightToFifteen),
            "1529.9MM" | "1529.9" | "FIFTEENTOTHIRTY" => Ok(LungRadsSize::FifteenToThirty),
            "≥30MM" | ">=30MM" | "≥30" | ">=30" | "THIRTYPLUS" => Ok(LungRadsSize::ThirtyPlus),
            _ => Err(NoduleError::unknown("Lung-RADS size", s)),
        }
    }
}

/// Solid component band for part-solid nodules (wall/nodularity for cysts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LungRadsSolidComponent {
    #[default]
    None,
    /// < 4 mm
    LessThanFour,
    /// 4 - 5.9 mm
    FourToSix,
    /// 6 - 7.9 mm
    SixToEight,
    /// >= 8 mm
    EightPlus,
}

impl LungRadsSolidComponent {
    pub const ALL: [LungRadsSolidComponent; 5] = [
        LungRadsSolidComponent::None,
        LungRadsSolidComponent::LessThanFour,
        LungRadsSolidComponent::FourToSix,
        LungRadsSolidComponent::SixToEight,
        LungRadsSolidComponent::EightPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LungRadsSolidComponent::None => "None",
            LungRadsSolidComponent::LessThanFour => "< 4 mm",
            LungRadsSolidComponent::FourToSix => "4-5.9 mm",
            LungRadsSolidComponent::SixToEight => "6-7.9 mm",
            LungRadsSolidComponent::EightPlus => "≥ 8 mm",
        }
    }

    /// Value standing in for the band when no precise measurement exists.
    pub fn representative_mm(&self) -> f64 {
        match self {
            LungRadsSolidComponent::None => 0.0,
            LungRadsSolidComponent::LessThanFour => 2.0,
            LungRadsSolidComponent::FourToSix => 5.0,
            LungRadsSolidComponent::SixToEight => 7.0,
            LungRadsSolidComponent::EightPlus => 10.0,
        }
    }

    /// Bucket a solid component size. Zero or negative means none.
    pub fn from_mm(mm: f64) -> Self {
        if mm <= 0.0 {
            LungRadsSolidComponent::None
        } else if mm < 4.0 {
            LungRadsSolidComponent::LessThanFour
        } else if mm < 6.0 {
            LungRadsSolidComponent::FourToSix
        } else if mm < 8.0 {
            LungRadsSolidComponent::SixToEight
        } else {
            LungRadsSolidComponent::EightPlus
        }
    }
}

impl fmt::Display for LungRadsSolidComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LungRadsSolidComponent {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "NONE" => Ok(LungRadsSolidComponent::None),
            "<4MM" | "<4" | "LESSTHANFOUR" => Ok(LungRadsSolidComponent::LessThanFour),
            "45.9MM" | "45.9" | "FOURTOSIX" => Ok(LungRadsSolidComponent::FourToSix),
            "67.9MM" | "67.9" | "SIXTOEIGHT" => Ok(LungRadsSolidComponent::SixToEight),
            "≥8MM" | ">=8MM" | "≥8" | ">=8" | "EIGHTPLUS" => Ok(LungRadsSolidComponent::EightPlus),
            _ => Err(NoduleError::unknown("Lung-RADS solid component", s)),
        }
    }
}

/// Status of the CT examination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtStatus {
    #[default]
    Baseline,
    FollowUp,
    AwaitingComparison,
    /// Technically inadequate or partially evaluable exam.
    Incomplete,
}

impl CtStatus {
    pub const ALL: [CtStatus; 4] = [
        CtStatus::Baseline,
        CtStatus::FollowUp,
        CtStatus::AwaitingComparison,
        CtStatus::Incomplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CtStatus::Baseline => "Baseline CT",
            CtStatus::FollowUp => "Follow-Up CT",
            CtStatus::AwaitingComparison => "Awaiting Comparison CT",
            CtStatus::Incomplete => "Incomplete CT",
        }
    }
}

impl fmt::Display for CtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CtStatus {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "BASELINE" | "BASELINECT" => Ok(CtStatus::Baseline),
            "FOLLOWUP" | "FOLLOWUPCT" => Ok(CtStatus::FollowUp),
            "AWAITINGCOMPARISON" | "AWAITINGCOMPARISONCT" => Ok(CtStatus::AwaitingComparison),
            "INCOMPLETE" | "INCOMPLETECT" => Ok(CtStatus::Incomplete),
            _ => Err(NoduleError::unknown("CT status", s)),
        }
    }
}

/// Temporal status of the nodule relative to prior exams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoduleStatus {
    /// No prior exam for comparison.
    #[default]
    Baseline,
    Stable,
    New,
    /// Increase of more than 1.5 mm within 12 months.
    Growing,
    /// Slow growth below the growth threshold, typically ground glass.
    SlowGrowing,
    Resolved,
}

impl NoduleStatus {
    pub const ALL: [NoduleStatus; 6] = [
        NoduleStatus::Baseline,
        NoduleStatus::Stable,
        NoduleStatus::New,
        NoduleStatus::Growing,
        NoduleStatus::SlowGrowing,
        NoduleStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoduleStatus::Baseline => "Baseline (no prior)",
            NoduleStatus::Stable => "Stable",
            NoduleStatus::New => "New",
            NoduleStatus::Growing => "Growing (>1.5mm increase)",
            NoduleStatus::SlowGrowing => "Slow Growing (GGO)",
            NoduleStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for NoduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoduleStatus {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "BASELINE" | "BASELINE(NOPRIOR)" => Ok(NoduleStatus::Baseline),
            "STABLE" => Ok(NoduleStatus::Stable),
            "NEW" => Ok(NoduleStatus::New),
            "GROWING" => Ok(NoduleStatus::Growing),
            "SLOWGROWING" | "SLOWGROWING(GGO)" => Ok(NoduleStatus::SlowGrowing),
            "RESOLVED" => Ok(NoduleStatus::Resolved),
            _ => Err(NoduleError::unknown("nodule status", s)),
        }
    }
}

/// Anatomic level of an airway nodule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirwayLocation {
    Subsegmental,
    SegmentalOrProximal,
}

impl AirwayLocation {
    pub const ALL: [AirwayLocation; 2] = [
        AirwayLocation::Subsegmental,
        AirwayLocation::SegmentalOrProximal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AirwayLocation::Subsegmental => "Subsegmental",
            AirwayLocation::SegmentalOrProximal => "Segmental or More Proximal",
        }
    }
}

impl fmt::Display for AirwayLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AirwayLocation {
    type Err = NoduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "SUBSEGMENTAL" => Ok(AirwayLocation::Subsegmental),
            "SEGMENTAL" | "PROXIMAL" | "SEGMENTALORPROXIMAL" | "SEGMENTALORMOREPROXIMAL" => {
                Ok(AirwayLocation::SegmentalOrProximal)
            }
            _ => Err(NoduleError::unknown("airway location", s)),
        }
    }
}

/// Input to the Lung-RADS calculator.
///
/// Categorical fields are always populated. The optional millimetre fields
/// carry precise measurements produced by the normalizer; when present they
/// take precedence over the band lower bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungRadsInput {
    pub nodule_type: LungRadsNoduleType,
    pub size_category: LungRadsSize,
    pub solid_component: LungRadsSolidComponent,
    pub ct_status: CtStatus,
    pub nodule_status: NoduleStatus,
    pub has_benign_calcification: bool,
    pub has_macroscopic_fat: bool,
    pub has_inflammatory_findings: bool,
    /// Spiculation, lymphadenopathy, chest wall invasion and similar.
    pub has_additional_suspicious_features: bool,
    pub has_s_modifier_findings: bool,
    pub has_benign_juxtapleural_morphology: bool,
    pub has_atelectasis: bool,
    pub is_multiple: bool,
    pub airway_location: Option<AirwayLocation>,
    /// Mean diameter rounded to 0.1 mm.
    pub size_mm: Option<f64>,
    /// Solid component mean diameter rounded to 0.1 mm.
    pub solid_component_mm: Option<f64>,
    pub volume_mm3: Option<f64>,
    /// Derive the size from `volume_mm3` instead of the diameter.
    pub use_volume: bool,
}

impl LungRadsInput {
    pub fn is_baseline(&self) -> bool {
        self.ct_status == CtStatus::Baseline
    }

    pub fn is_new(&self) -> bool {
        self.nodule_status == NoduleStatus::New
    }

    pub fn is_growing(&self) -> bool {
        self.nodule_status == NoduleStatus::Growing
    }

    /// Stable or slow growing.
    pub fn is_stable(&self) -> bool {
        matches!(
            self.nodule_status,
            NoduleStatus::Stable | NoduleStatus::SlowGrowing
        )
    }
}

/// Lung-RADS assessment. Built once per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LungRadsResult {
    pub category: LungRadsCategory,
    /// Category before stepped-management reclassification or a 4X upgrade.
    pub base_category: Option<LungRadsCategory>,
    pub management: String,
    pub probability_of_malignancy: String,
    pub additional_notes: Option<String>,
    pub is_reclassified: bool,
    pub has_s_modifier: bool,
}

impl LungRadsResult {
    /// Result with the category's own probability of malignancy.
    pub fn new(category: LungRadsCategory, management: impl Into<String>) -> Self {
        Self {
            category,
            base_category: None,
            management: management.into(),
            probability_of_malignancy: category.probability_of_malignancy().to_string(),
            additional_notes: None,
            is_reclassified: false,
            has_s_modifier: false,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_probability(mut self, probability: impl Into<String>) -> Self {
        self.probability_of_malignancy = probability.into();
        self
    }

    /// Marks a stepped-management downgrade from `base`.
    #[must_use]
    pub fn reclassified_from(mut self, base: LungRadsCategory) -> Self {
        self.base_category = Some(base);
        self.is_reclassified = true;
        self
    }

    /// Records the category this result replaced without marking it as a
    /// stepped-management reclassification.
    #[must_use]
    pub fn with_base_category(mut self, base: LungRadsCategory) -> Self {
        self.base_category = Some(base);
        self
    }

    #[must_use]
    pub fn with_s_modifier(mut self, enable: bool) -> Self {
        self.has_s_modifier = enable;
        self
    }

    /// Append a sentence to the notes unless it is already present.
    #[must_use]
    pub fn with_appended_note(mut self, note: &str) -> Self {
        self.additional_notes = Some(match self.additional_notes.take() {
            Some(existing) if existing.contains(note) => existing,
            Some(existing) if !existing.is_empty() => format!("{existing} {note}"),
            _ => note.to_string(),
        });
        self
    }

    /// Category label with the S suffix when the modifier applies, e.g. `4A S`.
    pub fn display_category(&self) -> String {
        if self.has_s_modifier && self.category != LungRadsCategory::S {
            format!("{} S", self.category)
        } else {
            self.category.to_string()
        }
    }
}
