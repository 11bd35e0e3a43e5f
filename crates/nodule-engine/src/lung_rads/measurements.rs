//! Effective size and solid component for a Lung-RADS calculation.

use nodule_model::{LungRadsInput, LungRadsSize, LungRadsSolidComponent};
use nodule_normalization::{round_lung_rads, volume_to_diameter};

/// Sizes the sub-routines compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Measurements {
    pub size_mm: f64,
    pub size: LungRadsSize,
    /// True when `size_mm` came from a measurement rather than a band bound.
    pub is_precise: bool,
    pub solid_mm: f64,
    pub solid: LungRadsSolidComponent,
}

impl Measurements {
    /// Resolve sizes in priority order: volume-derived diameter, measured
    /// mean diameter, then the lower bound of the selected band.
    ///
    /// Precise sizes are rounded to 0.1 mm before they are bucketed.
    pub(crate) fn resolve(input: &LungRadsInput) -> Self {
        let measured = input
            .use_volume
            .then_some(input.volume_mm3)
            .flatten()
            .and_then(volume_to_diameter)
            .or_else(|| input.size_mm.filter(|mm| *mm > 0.0).map(round_lung_rads));

        let (size_mm, size, is_precise) = match measured {
            Some(mm) => (mm, LungRadsSize::from_mm(mm), true),
            None => (input.size_category.lower_bound(), input.size_category, false),
        };

        let (solid_mm, solid) = match input.solid_component_mm.map(round_lung_rads) {
            Some(mm) => (mm, LungRadsSolidComponent::from_mm(mm)),
            None => (
                input.solid_component.representative_mm(),
                input.solid_component,
            ),
        };

        Self {
            size_mm,
            size,
            is_precise,
            solid_mm,
            solid,
        }
    }

    /// Size strictly below 10 mm, by value when measured and by band otherwise.
    pub(crate) fn is_below_ten_mm(&self) -> bool {
        if self.is_precise {
            self.size_mm < 10.0
        } else {
            self.size.is_below_ten_mm()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_lower_bound_without_measurements() {
        let input = LungRadsInput {
            size_category: LungRadsSize::EightToFifteen,
            solid_component: LungRadsSolidComponent::SixToEight,
            ..LungRadsInput::default()
        };
        let m = Measurements::resolve(&input);
        assert_eq!(m.size_mm, 8.0);
        assert_eq!(m.size, LungRadsSize::EightToFifteen);
        assert!(!m.is_precise);
        assert_eq!(m.solid_mm, 7.0);
    }

    #[test]
    fn volume_wins_over_diameter() {
        let input = LungRadsInput {
            size_mm: Some(5.0),
            volume_mm3: Some(268.0),
            use_volume: true,
            ..LungRadsInput::default()
        };
        let m = Measurements::resolve(&input);
        assert_eq!(m.size_mm, 8.0);
        assert_eq!(m.size, LungRadsSize::EightToFifteen);
    }

    #[test]
    fn volume_ignored_unless_selected() {
        let input = LungRadsInput {
            size_mm: Some(5.0),
            volume_mm3: Some(268.0),
            ..LungRadsInput::default()
        };
        assert_eq!(Measurements::resolve(&input).size_mm, 5.0);
    }

    #[test]
    fn non_positive_size_falls_back_to_band() {
        let input = LungRadsInput {
            size_category: LungRadsSize::FourToSix,
            size_mm: Some(0.0),
            ..LungRadsInput::default()
        };
        let m = Measurements::resolve(&input);
        assert_eq!(m.size_mm, 4.0);
        assert!(!m.is_precise);
    }

    #[test]
    fn precise_sizes_round_before_bucketing() {
        let input = LungRadsInput {
            size_mm: Some(7.96),
            solid_component_mm: Some(5.96),
            ..LungRadsInput::default()
        };
        let m = Measurements::resolve(&input);
        assert_eq!(m.size_mm, 8.0);
        assert_eq!(m.size, LungRadsSize::EightToFifteen);
        assert_eq!(m.solid_mm, 6.0);
        assert_eq!(m.solid, LungRadsSolidComponent::SixToEight);
    }

    #[test]
    fn precise_below_ten() {
        let input = LungRadsInput {
            size_mm: Some(9.9),
            ..LungRadsInput::default()
        };
        assert!(Measurements::resolve(&input).is_below_ten_mm());
        let input = LungRadsInput {
            size_mm: Some(10.0),
            ..LungRadsInput::default()
        };
        assert!(!Measurements::resolve(&input).is_below_ten_mm());
    }
}
