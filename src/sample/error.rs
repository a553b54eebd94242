use crate::catalog::CatalogError;
use crate::spectrum::SpectrumError;

/// Errors that can occur while resolving a sample's identity
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The file name carries a well but no `plate<N>` token
    #[error("{file}: plate number not found in file name")]
    MissingPlate {
        /// File name that was parsed
        file: String,
    },

    /// The file name carries no well token
    #[error("{file}: well label not found in file name")]
    MissingWell {
        /// File name that was parsed
        file: String,
    },

    /// A token matched a pattern but its number does not fit
    #[error("{file}: invalid token {token:?}")]
    InvalidToken {
        /// File name that was parsed
        file: String,
        /// Offending token
        token: String,
    },

    /// Catalog lookup failed under the strict policy
    #[error("{file}: {source}")]
    Catalog {
        /// File name that was parsed
        file: String,
        /// Underlying catalog error
        #[source]
        source: CatalogError,
    },

    /// The spectrum file could not be loaded
    #[error("{file}: {source}")]
    Spectrum {
        /// File that was loaded
        file: String,
        /// Underlying spectrum error
        #[source]
        source: SpectrumError,
    },
}
