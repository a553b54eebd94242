//! # ramanplate - Raman Multiwell Plate Screening
//!
//! `ramanplate` turns the exports of a Raman multiwell stage into annotated,
//! deterministically ordered spectra ready for multivariate analysis.
//!
//! ## Key Features
//!
//! - **Demultiplexing**: Splits a combined multiwell export into one spectrum
//!   file per well, translating the stage's acquisition indices onto plate rows
//!   and columns.
//!
//! - **Sample Identity**: Derives plate, well, concentration and capture
//!   position from file names and resolves polymer, drug loading and
//!   appearance against per-plate design tables.
//!
//! - **Deterministic Ordering**: One canonical, filename-only order for the
//!   working file set, shared by the spectral matrix, the sample table and every
//!   plot legend.
//!
//! - **Tabulation**: Crops, aligns and preprocesses spectra into CSV tables
//!   with a JSON manifest for the PCA engine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ramanplate::multiwell::{MultiwellExport, PlateTag};
//! use ramanplate::writer::{WellFileWriter, WriterConfig};
//!
//! let path = std::path::Path::new("analyse/plate2_60mgml_multiwell.txt");
//! ramanplate::encoding::normalize_file(path)?;
//!
//! let export = MultiwellExport::from_file(path)?;
//! let tag = PlateTag::from_path(path)?;
//!
//! let writer = WellFileWriter::new("analyse", WriterConfig::default())?;
//! let stats = writer.write_export(&export, &tag)?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Then order, annotate and tabulate the folder:
//!
//! ```rust,no_run
//! use ramanplate::catalog::PlateCatalog;
//! use ramanplate::dataset::DatasetBuilder;
//! use ramanplate::ordering::{discover, LabelOptions};
//! use ramanplate::sample::SampleResolver;
//!
//! let catalog = PlateCatalog::builtin();
//! let resolver = SampleResolver::new(&catalog);
//!
//! let ordered = discover("analyse", LabelOptions::default())?;
//! let mut builder = DatasetBuilder::new();
//! builder.load_ordered(&ordered, &resolver)?;
//!
//! let table = builder.build()?;
//! table.write_csv("pca_output")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules, leaves first:
//!
//! - [`geometry`]: Instrument index to plate coordinate mapping and well labels
//! - [`spectrum`]: Single-well spectrum files and wavenumber cropping
//! - [`encoding`]: Latin-1 to UTF-8 normalization of exports
//! - [`multiwell`]: Multiwell export parser
//! - [`catalog`]: Per-plate experimental design tables
//! - [`sample`]: Filename tokens and sample identity
//! - [`ordering`]: Canonical file order and labels
//! - [`writer`]: One-file-per-well writer
//! - [`dataset`]: Filtering, alignment, preprocessing and CSV export
//! - [`validator`]: Folder consistency report
//!
//! ## File Conventions
//!
//! | File | Content |
//! |------|---------|
//! | `plate<N>_<C>mgml_multiwell.txt` | Combined export: axis line, then `<col> <row> <intensities...>` |
//! | `plate<N>_<C>mgml_<Well>.txt` | One well, `shift<TAB>intensity` per line |
//! | `plate<N>_<C>mgml_<Well>_edge.txt` | Edge capture of a well |
//! | `glass_reference.txt` | Substrate reference, always ordered last |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod dataset;
pub mod encoding;
pub mod geometry;
pub mod multiwell;
pub mod ordering;
pub mod sample;
pub mod spectrum;
pub mod validator;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::catalog::{Appearance, CatalogError, CatalogPolicy, PlateCatalog, PlateLayout};
    pub use crate::dataset::{
        DatasetBuilder, DatasetError, DatasetSettings, DatasetStats, Preprocessing, SampleFilter,
        SavGol, SpectralTable,
    };
    pub use crate::encoding::normalize_file;
    pub use crate::geometry::{translate, well_label, GeometryError, LabelStyle, PlateCoordinate};
    pub use crate::multiwell::{DemuxedWell, MultiwellError, MultiwellExport, PlateTag};
    pub use crate::ordering::{
        discover, order_files, FileKind, LabelOptions, OrderedFile, OrderedFiles, OrderingError,
    };
    pub use crate::sample::{IdentityError, Position, Sample, SampleIdentity, SampleResolver};
    pub use crate::spectrum::{Spectrum, SpectrumError, WavenumberRange};
    pub use crate::validator::{check_folder, ValidationReport};
    pub use crate::writer::{
        Delimiter, WellFileName, WellFileWriter, WriterConfig, WriterError, WriterStats,
    };
}
