//! Fleischner Society 2017 recommendations.
//!
//! Dispatch is multiplicity first, then nodule type, then a lookup in
//! Table 1 (solid) or Table 2 (subsolid) by size, risk and solid component.

use tracing::debug;

use nodule_model::{
    FleischnerInput, FleischnerRecommendation, FleischnerSize, FleischnerSolidComponent,
    NoduleType, PatientRisk,
};

/// Management recommendation for an incidental pulmonary nodule.
pub fn calculate_fleischner(input: &FleischnerInput) -> FleischnerRecommendation {
    let recommendation = if input.is_multiple {
        match input.nodule_type {
            NoduleType::Solid => multiple_solid(input.size_category, input.risk),
            NoduleType::PureGgo => multiple_pure_ggo(input.size_category),
            NoduleType::PartSolid => multiple_part_solid(input.size_category),
        }
    } else {
        match input.nodule_type {
            NoduleType::Solid => single_solid(input.size_category, input.risk),
            NoduleType::PureGgo => single_pure_ggo(input.size_category),
            NoduleType::PartSolid => single_part_solid(input.size_category, input.solid_component),
        }
    };

    debug!(
        nodule_type = %input.nodule_type,
        size = %input.size_category,
        risk = %input.risk,
        multiple = input.is_multiple,
        recommendation = %recommendation.recommendation,
        "Fleischner recommendation"
    );
    recommendation
}

// Table 1, solitary solid nodules.
fn single_solid(size: FleischnerSize, risk: PatientRisk) -> FleischnerRecommendation {
    match (size, risk) {
        (FleischnerSize::LessThanSix, PatientRisk::Low) => FleischnerRecommendation::new(
            "No routine follow-up.",
            None,
            Some("Nodules < 6mm in low-risk patients have very low malignancy risk (<1%)."),
        ),
        (FleischnerSize::LessThanSix, PatientRisk::High) => FleischnerRecommendation::new(
            "Optional CT at 12 months.",
            Some("Optional CT at 12 months"),
            Some(
                "Optional follow-up may be considered in high-risk patients with suspicious \
                 morphology, upper lobe location, or both.",
            ),
        ),
        (FleischnerSize::SixToEight, PatientRisk::Low) => FleischnerRecommendation::new(
            "CT at 6-12 months, then consider CT at 18-24 months.",
            Some("6-12 months"),
            Some(
                "Follow-up at 18-24 months is optional in low-risk patients if unchanged at \
                 initial follow-up.",
            ),
        ),
        (FleischnerSize::SixToEight, PatientRisk::High) => FleischnerRecommendation::new(
            "CT at 6-12 months, then CT at 18-24 months.",
            Some("6-12 months"),
            Some("Both follow-up exams recommended for high-risk patients."),
        ),
        (FleischnerSize::GreaterThanEight, _) => FleischnerRecommendation::new(
            "Consider CT at 3 months; PET/CT or tissue sampling if growth persists.",
            Some("3 months or immediate workup"),
            Some(
                "Management depends on volume, morphology, patient preferences, and \
                 comorbidities. PET/CT may help characterize nodules ≥ 8mm.",
            ),
        ),
    }
}

// Table 2, solitary pure ground-glass nodules.
fn single_pure_ggo(size: FleischnerSize) -> FleischnerRecommendation {
    if size.is_six_or_more() {
        FleischnerRecommendation::new(
            "CT at 6-12 months to confirm persistence, then CT every 2 years until 5 years.",
            Some("6-12 months initially"),
            Some(
                "Pure GGOs ≥ 6mm may represent adenocarcinoma in situ or minimally invasive \
                 adenocarcinoma. Long-term surveillance (5 years) recommended due to slow \
                 growth pattern.",
            ),
        )
    } else {
        FleischnerRecommendation::new(
            "No routine follow-up.",
            None,
            Some(
                "Pure ground-glass nodules < 6mm have very low risk. If multiple, see multiple \
                 subsolid nodule recommendations.",
            ),
        )
    }
}

// Table 2, solitary part-solid nodules.
fn single_part_solid(
    size: FleischnerSize,
    solid: FleischnerSolidComponent,
) -> FleischnerRecommendation {
    if !size.is_six_or_more() {
        return FleischnerRecommendation::new(
            "No routine follow-up.",
            None,
            Some("Part-solid nodules < 6mm total size have very low malignancy risk."),
        );
    }

    match solid {
        FleischnerSolidComponent::None | FleischnerSolidComponent::LessThanSix => {
            FleischnerRecommendation::new(
                "CT at 3-6 months to confirm persistence. If unchanged and solid component \
                 remains < 6mm, annual CT for 5 years.",
                Some("3-6 months initially"),
                Some(
                    "Part-solid nodules with solid component < 6mm are likely preinvasive \
                     lesions. Annual surveillance for 5 years monitors for development of \
                     invasive component.",
                ),
            )
        }
        FleischnerSolidComponent::SixOrMore => FleischnerRecommendation::new(
            "CT at 3-6 months to confirm persistence. If growth occurs or solid component is \
             ≥ 6mm, consider PET/CT or tissue sampling.",
            Some("3-6 months initially"),
            Some(
                "Part-solid nodules with solid component ≥ 6mm have higher malignancy risk and \
                 may warrant PET/CT or tissue sampling. Consider biopsy or surgical resection \
                 based on clinical context.",
            ),
        ),
    }
}

// Table 1, multiple solid nodules.
fn multiple_solid(size: FleischnerSize, risk: PatientRisk) -> FleischnerRecommendation {
    match (size.is_six_or_more(), risk) {
        (false, PatientRisk::Low) => FleischnerRecommendation::new(
            "No routine follow-up.",
            None,
            Some(
                "Multiple solid nodules < 6mm in low-risk patients are typically benign \
                 (granulomas, intrapulmonary lymph nodes).",
            ),
        ),
        (false, PatientRisk::High) => FleischnerRecommendation::new(
            "Optional CT at 12 months.",
            Some("Optional CT at 12 months"),
            Some("Optional follow-up at 12 months may be considered in high-risk patients."),
        ),
        (true, PatientRisk::Low) => FleischnerRecommendation::new(
            "CT at 3-6 months, then consider CT at 18-24 months.",
            Some("3-6 months"),
            Some(
                "Use the most suspicious nodule as a guide. The dominant/most suspicious nodule \
                 may not necessarily be the largest. Second follow-up at 18-24 months is \
                 optional in low-risk if stable.",
            ),
        ),
        (true, PatientRisk::High) => FleischnerRecommendation::new(
            "CT at 3-6 months, then CT at 18-24 months.",
            Some("3-6 months"),
            Some(
                "Use the most suspicious nodule as a guide. The dominant/most suspicious nodule \
                 may not necessarily be the largest. Both follow-ups recommended for high-risk \
                 patients.",
            ),
        ),
    }
}

// Table 2, multiple pure ground-glass nodules.
fn multiple_pure_ggo(size: FleischnerSize) -> FleischnerRecommendation {
    if size.is_six_or_more() {
        FleischnerRecommendation::new(
            "CT at 3-6 months. Subsequent management based on the most suspicious nodule.",
            Some("3-6 months initially"),
            Some(
                "For dominant nodule ≥ 6mm, follow single pure GGO guidelines. Consider \
                 multifocal adenocarcinoma spectrum disease.",
            ),
        )
    } else {
        FleischnerRecommendation::new(
            "CT at 3-6 months. If stable, consider CT at 2 and 4 years.",
            Some("3-6 months initially"),
            Some(
                "Multiple pure GGOs < 6mm warrant closer initial follow-up than solitary \
                 nodules. Extended surveillance at 2 and 4 years monitors for interval change.",
            ),
        )
    }
}

// Table 2, multiple part-solid nodules. The solid component does not change
// the recommendation; it is applied to the dominant nodule instead.
fn multiple_part_solid(size: FleischnerSize) -> FleischnerRecommendation {
    if size.is_six_or_more() {
        FleischnerRecommendation::new(
            "CT at 3-6 months. Subsequent management based on the most suspicious nodule.",
            Some("3-6 months initially"),
            Some(
                "For multiple part-solid nodules, apply single part-solid nodule guidelines to \
                 the dominant/most suspicious nodule. If any nodule develops solid component \
                 ≥ 6mm, consider PET/CT or tissue sampling.",
            ),
        )
    } else {
        FleischnerRecommendation::new(
            "No routine follow-up.",
            None,
            Some(
                "Multiple part-solid nodules < 6mm total size have very low malignancy risk. \
                 Reassess if any nodule enlarges or develops a solid component.",
            ),
        )
    }
}
