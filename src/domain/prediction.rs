use std::fmt;

/// Allocation signal derived from the sign of the predicted return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Positive expected return: take the long position.
    Long,
    /// Negative expected return: avoid entry, preserve capital.
    Avoid,
    /// Exactly zero expected return.
    Neutral,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Long => write!(f, "long"),
            Signal::Avoid => write!(f, "avoid/preserve-capital"),
            Signal::Neutral => write!(f, "neutral"),
        }
    }
}

/// A single model inference result. Holds the model's native fractional
/// return; scaling to percent happens only at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    fraction: f64,
}

impl Prediction {
    pub(crate) fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// The un-scaled daily return (0.013 means 1.3%). Use this for any
    /// downstream numeric work.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// The return scaled by 100, for display.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Display rendering with 2-decimal rounding, e.g. "1.30%".
    pub fn display_percent(&self) -> String {
        format!("{:.2}%", self.percent())
    }

    /// Strict sign comparison: an exact 0.0 from the regressor maps to
    /// Neutral, matching the deployed behavior. No epsilon band.
    pub fn signal(&self) -> Signal {
        if self.fraction > 0.0 {
            Signal::Long
        } else if self.fraction < 0.0 {
            Signal::Avoid
        } else {
            Signal::Neutral
        }
    }
}
