//! Spectral preprocessing applied to every row of the matrix.

use sci_rs::signal::filter::savgol_coeffs_dyn;
use serde::{Deserialize, Serialize};

use super::DatasetError;

/// Savitzky–Golay filter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavGol {
    /// Points on each side of the centre point (the fit spans `2 * window + 1`)
    pub window: usize,
    /// Order of the fitted polynomial
    pub polynomial: usize,
    /// Order of the derivative, 0 for smoothing
    #[serde(default)]
    pub derivative: usize,
}

impl Default for SavGol {
    fn default() -> Self {
        Self {
            window: 7,
            polynomial: 3,
            derivative: 0,
        }
    }
}

impl SavGol {
    /// Check the parameters and compute the filter weights, in window order.
    pub fn coefficients(&self) -> Result<Vec<f64>, DatasetError> {
        let points = 2 * self.window + 1;
        if self.window == 0 {
            return Err(DatasetError::Preprocessing(
                "Savitzky-Golay window must be at least 1".to_string(),
            ));
        }
        if self.polynomial >= points {
            return Err(DatasetError::Preprocessing(format!(
                "Savitzky-Golay polynomial order {} needs more than {} points",
                self.polynomial, points
            )));
        }
        if self.derivative > self.polynomial {
            return Err(DatasetError::Preprocessing(format!(
                "Savitzky-Golay derivative {} exceeds polynomial order {}",
                self.derivative, self.polynomial
            )));
        }

        // sci-rs returns convolution order; reverse for the sliding dot product
        let mut coefficients: Vec<f64> =
            savgol_coeffs_dyn(points, self.polynomial, Some(self.derivative), None);
        coefficients.reverse();
        Ok(coefficients)
    }

    /// Filter one spectrum, dropping `window` points at each end.
    pub fn apply(&self, coefficients: &[f64], values: &[f64]) -> Result<Vec<f64>, DatasetError> {
        if values.len() < coefficients.len() {
            return Err(DatasetError::Preprocessing(format!(
                "spectrum of {} points is shorter than the {}-point Savitzky-Golay window",
                values.len(),
                coefficients.len()
            )));
        }
        Ok(values
            .windows(coefficients.len())
            .map(|w| w.iter().zip(coefficients).map(|(y, c)| y * c).sum())
            .collect())
    }
}

/// Standard normal variate: centre on the mean, scale by the sample standard deviation.
pub fn snv(values: &[f64]) -> Result<Vec<f64>, DatasetError> {
    let n = values.len();
    if n < 2 {
        return Err(DatasetError::Preprocessing(
            "SNV needs at least two points".to_string(),
        ));
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();
    if std == 0.0 {
        return Err(DatasetError::Preprocessing(
            "SNV of a constant spectrum".to_string(),
        ));
    }
    Ok(values.iter().map(|v| (v - mean) / std).collect())
}

/// Preprocessing steps, applied SNV first, then Savitzky–Golay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preprocessing {
    /// Apply standard normal variate
    pub snv: bool,
    /// Apply a Savitzky–Golay filter
    pub savgol: Option<SavGol>,
}

impl Preprocessing {
    /// Whether any step is enabled.
    pub fn is_identity(&self) -> bool {
        !self.snv && self.savgol.is_none()
    }

    /// Apply the steps to a matrix in place and return the surviving axis.
    pub fn apply(&self, axis: &[f64], rows: &mut [Vec<f64>]) -> Result<Vec<f64>, DatasetError> {
        if self.snv {
            for row in rows.iter_mut() {
                *row = snv(row)?;
            }
        }

        match self.savgol {
            Some(savgol) => {
                let coefficients = savgol.coefficients()?;
                for row in rows.iter_mut() {
                    *row = savgol.apply(&coefficients, row)?;
                }
                if axis.len() < coefficients.len() {
                    return Err(DatasetError::Preprocessing(format!(
                        "axis of {} points is shorter than the Savitzky-Golay window",
                        axis.len()
                    )));
                }
                Ok(axis[savgol.window..axis.len() - savgol.window].to_vec())
            }
            None => Ok(axis.to_vec()),
        }
    }
}
