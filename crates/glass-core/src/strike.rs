use crate::config::StrikeTuning;
use crate::constants::{BUTTON_CLASSES, LOGO_CLASS};
use crate::sample::SampleName;

/// Interactive surfaces that ring when struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceCategory {
    Logo,
    Button,
}

impl SurfaceCategory {
    /// Classify an element by its class list. The logo wins when an
    /// element carries both kinds of class.
    pub fn from_classes<'a, I>(classes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = None;
        for class in classes {
            if class == LOGO_CLASS {
                return Some(SurfaceCategory::Logo);
            }
            if BUTTON_CLASSES.contains(&class) {
                found = Some(SurfaceCategory::Button);
            }
        }
        found
    }

    /// Logo is dense glass; everything else is a softer substrate.
    pub fn sample(self) -> SampleName {
        match self {
            SurfaceCategory::Logo => SampleName::Firm,
            SurfaceCategory::Button => SampleName::Soft,
        }
    }

    #[inline]
    pub fn is_button_like(self) -> bool {
        matches!(self, SurfaceCategory::Button)
    }
}

/// A resolved strike: which sample, how loud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrikeEvent {
    pub sample: SampleName,
    pub volume: f32,
}

impl StrikeEvent {
    pub fn for_surface(category: SurfaceCategory, velocity: f64, tuning: &StrikeTuning) -> Self {
        Self {
            sample: category.sample(),
            volume: volume_for_velocity(velocity, tuning),
        }
    }

    pub fn tink(tuning: &StrikeTuning) -> Self {
        Self {
            sample: SampleName::Firm,
            volume: tuning.tink_volume,
        }
    }
}

/// `clamp(velocity * scale, min, max)`. Monotonic in velocity; a NaN
/// velocity lands on the lower bound.
#[inline]
pub fn volume_for_velocity(velocity: f64, tuning: &StrikeTuning) -> f32 {
    let raw = (velocity * tuning.scale_factor) as f32;
    raw.max(tuning.min_volume).min(tuning.max_volume)
}
