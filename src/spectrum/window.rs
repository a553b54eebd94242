use serde::{Deserialize, Serialize};

/// Default lower display bound in cm-1 when no crop is configured.
pub const DEFAULT_LOWER_BOUND: f64 = 0.0;

/// Default upper display bound in cm-1 when no crop is configured.
pub const DEFAULT_UPPER_BOUND: f64 = 2000.0;

/// Inclusive wavenumber crop window.
///
/// A missing bound leaves that side of the spectrum untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WavenumberRange {
    /// Lowest Raman shift kept (cm-1)
    #[serde(default)]
    pub lower: Option<f64>,
    /// Highest Raman shift kept (cm-1)
    #[serde(default)]
    pub upper: Option<f64>,
}

impl WavenumberRange {
    /// Window that keeps every point.
    pub fn full() -> Self {
        Self::default()
    }

    /// Window with both bounds set.
    pub fn between(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Whether a shift lies inside the window.
    pub fn contains(&self, shift: f64) -> bool {
        self.lower.map_or(true, |lo| shift >= lo) && self.upper.map_or(true, |hi| shift <= hi)
    }

    /// Whether the window crops anything at all.
    pub fn is_full(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Bounds as reported to users, substituting the 0..2000 cm-1 defaults.
    pub fn display_bounds(&self) -> (f64, f64) {
        (
            self.lower.unwrap_or(DEFAULT_LOWER_BOUND),
            self.upper.unwrap_or(DEFAULT_UPPER_BOUND),
        )
    }
}
