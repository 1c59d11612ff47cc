use crate::constants::{DISTORTION_DURATION_MS, DISTORTION_START_FREQUENCY};

/// One-shot guard for the intro overlay. Video end, skip and the auto
/// timeout all race to dismiss it; only the first one wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntroOverlay {
    dismissed: bool,
}

impl IntroOverlay {
    /// Returns true the first time only.
    pub fn dismiss(&mut self) -> bool {
        !std::mem::replace(&mut self.dismissed, true)
    }

    #[inline]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Turbulence base frequency `elapsed_ms` into the dismiss animation and
/// whether the animation is finished.
pub fn distortion_frequency(elapsed_ms: f64) -> (f64, bool) {
    let progress = (elapsed_ms / DISTORTION_DURATION_MS).clamp(0.0, 1.0);
    if progress >= 1.0 {
        return (0.0, true);
    }
    (DISTORTION_START_FREQUENCY * (1.0 - ease_out_cubic(progress)), false)
}

/// Value for the `baseFrequency` attribute (same frequency on both axes).
#[inline]
pub fn base_frequency_attr(value: f64) -> String {
    format!("{} {}", value, value)
}
