// Slice layout, option labels and result resolution.
//
// Slice `i` is drawn rotated by `i * 360 / n` degrees, so at rotation 0
// it covers the clockwise arc `[i * a, (i + 1) * a)` measured from 12
// o'clock. The result is read at 12 o'clock, which is where the wheel's
// pointer sits (horizontally centered, near the top of the wheel).

use crate::constants::{FALLBACK_OPTIONS, OPTION_COUNT};

/// Angular width of one slice in degrees.
#[inline]
pub fn slice_angle(slice_count: usize) -> f64 {
    360.0 / slice_count as f64
}

/// Index of the slice under the reference point for a wheel rotated
/// clockwise by `rotation` degrees. `None` when there is nothing to hit.
pub fn slice_at(rotation: f64, slice_count: usize) -> Option<usize> {
    if slice_count == 0 || !rotation.is_finite() {
        return None;
    }
    let under_pointer = (-rotation).rem_euclid(360.0);
    let index = (under_pointer / slice_angle(slice_count)).floor() as usize;
    // rem_euclid may round up to exactly 360.0
    Some(index.min(slice_count - 1))
}

/// CSS transform that places slice `index` around the wheel.
#[inline]
pub fn slice_transform(index: usize, slice_count: usize) -> String {
    format!("rotate({}deg)", index as f64 * slice_angle(slice_count))
}

#[inline]
pub fn result_text(label: &str) -> String {
    format!("Result: {}", label)
}

/// The three labels the slices cycle through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    labels: [String; OPTION_COUNT],
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            labels: FALLBACK_OPTIONS.map(str::to_string),
        }
    }
}

impl OptionSet {
    /// Build from raw input values. Each value is trimmed; an empty or
    /// missing value falls back to the default label for its position.
    pub fn from_inputs<S: AsRef<str>>(inputs: &[S]) -> Self {
        let mut labels = FALLBACK_OPTIONS.map(str::to_string);
        for (label, raw) in labels.iter_mut().zip(inputs) {
            let trimmed = AsRef::<str>::as_ref(raw).trim();
            if !trimmed.is_empty() {
                *label = trimmed.to_string();
            }
        }
        Self { labels }
    }

    #[inline]
    pub fn label(&self, slice: usize) -> &str {
        &self.labels[slice % OPTION_COUNT]
    }

    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label text for every slice in draw order.
    pub fn slice_labels(&self, slice_count: usize) -> Vec<&str> {
        (0..slice_count).map(|i| self.label(i)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        slice: usize,
        label: String,
        text: String,
    },
    NoHit,
}

/// Tracks which slice carries the selected marker. At most one does, and
/// the marker is dropped before every attempt.
#[derive(Clone, Debug)]
pub struct Resolver {
    slice_count: usize,
    selected: Option<usize>,
}

impl Resolver {
    pub fn new(slice_count: usize) -> Self {
        Self {
            slice_count,
            selected: None,
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn resolve(&mut self, rotation: f64, options: &OptionSet) -> Resolution {
        self.clear();
        let Some(slice) = slice_at(rotation, self.slice_count) else {
            return Resolution::NoHit;
        };
        self.selected = Some(slice);
        let label = options.label(slice).to_string();
        let text = result_text(&label);
        Resolution::Resolved { slice, label, text }
    }
}
