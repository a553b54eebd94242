//! # Single-Well Spectra
//!
//! Loading of the per-well spectrum files produced by the demultiplexer or
//! captured individually on the instrument, plus wavenumber cropping.
//!
//! Two layouts are accepted:
//!
//! ```text
//! # tab-separated (demultiplexer output, LabSpec export)
//! 100.000000	5.000000
//!
//! # comma-separated
//! RamanShift(cm-1),Intensity
//! 100.0,5.0
//! ```
//!
//! Lines starting with `#` are comments in both layouts.

mod error;
mod loader;
mod window;


pub use error::SpectrumError;
pub use loader::{WellFileFormat, INTENSITY_COLUMN, SHIFT_COLUMN};
pub use window::{WavenumberRange, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};

/// A Raman spectrum: intensities sampled on a wavenumber axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    axis: Vec<f64>,
    intensities: Vec<f64>,
}

impl Spectrum {
    /// Create a spectrum, checking that both arrays have the same length.
    pub fn new(axis: Vec<f64>, intensities: Vec<f64>) -> Result<Self, SpectrumError> {
        if axis.len() != intensities.len() {
            return Err(SpectrumError::LengthMismatch {
                axis: axis.len(),
                intensities: intensities.len(),
            });
        }
        if axis.is_empty() {
            return Err(SpectrumError::Empty);
        }
        Ok(Self { axis, intensities })
    }

    /// Raman shift values (cm-1)
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Intensity values
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    /// Always false for a constructed spectrum
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    /// Keep only the points inside `range`.
    pub fn crop(&self, range: &WavenumberRange) -> Result<Self, SpectrumError> {
        if range.is_full() {
            return Ok(self.clone());
        }
        let (axis, intensities): (Vec<f64>, Vec<f64>) = self
            .axis
            .iter()
            .zip(&self.intensities)
            .filter(|(shift, _)| range.contains(**shift))
            .map(|(s, i)| (*s, *i))
            .unzip();
        Self::new(axis, intensities)
    }

    /// Split into `(axis, intensities)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.axis, self.intensities)
    }
}
