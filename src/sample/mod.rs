//! # Sample Identity
//!
//! Turns a spectrum file name into the experimental identity of the sample
//! it was captured from, using filename tokens and the plate catalog.
//!
//! ```text
//! plate2_60mgml_A12_edge.txt
//!   plate2  -> plate 2
//!   60mgml  -> 60 mg/mL
//!   A12     -> row A, column 12   -> catalog: polymer, drug loading, appearance
//!   edge    -> edge capture
//! ```
//!
//! `glass_reference.txt` is the substrate reference and skips all of this.

mod error;
mod identity;
pub mod tokens;


use std::path::Path;

use crate::spectrum::Spectrum;

pub use error::IdentityError;
pub use identity::{
    Position, SampleIdentity, SampleResolver, DRUG, GLASS_REFERENCE_STEM, GLASS_WELL,
};

/// A spectrum together with the identity of the sample it came from.
///
/// Each sample owns its spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    identity: SampleIdentity,
    spectrum: Spectrum,
}

impl Sample {
    /// Pair an identity with its spectrum.
    pub fn new(identity: SampleIdentity, spectrum: Spectrum) -> Self {
        Self { identity, spectrum }
    }

    /// Load a well file and resolve its identity.
    pub fn load<P: AsRef<Path>>(path: P, resolver: &SampleResolver<'_>) -> Result<Self, IdentityError> {
        let path = path.as_ref();
        let file = path.display().to_string();

        let identity = resolver.resolve(&file)?;
        let spectrum = Spectrum::from_file(path).map_err(|source| IdentityError::Spectrum {
            file: file.clone(),
            source,
        })?;

        Ok(Self { identity, spectrum })
    }

    /// Experimental identity
    pub fn identity(&self) -> &SampleIdentity {
        &self.identity
    }

    /// Captured spectrum
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Split into identity and spectrum.
    pub fn into_parts(self) -> (SampleIdentity, Spectrum) {
        (self.identity, self.spectrum)
    }
}
