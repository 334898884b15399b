//! Curated Material Design Icons for label decoration.
//!
//! The catalog is a fixed table. Packaging pulls each icon's SVG from an
//! [`IconSource`] (the MDI repository over HTTP, or a local checkout) and
//! zips the set as `manifest.json` plus `SVG/<id>.svg`.

pub mod catalog;
pub mod errors;
pub mod manifest;
pub mod package;
pub mod source;

pub use catalog::{catalog, find, in_category, Category, IconSpec, CATALOG};
pub use errors::{FetchError, ManifestError, PackageError};
pub use manifest::{load_manifest, save_manifest, ManifestEntry, STANDARD};
pub use package::{package, PackageReport, SkippedIcon, ARCHIVE_FILE};
pub use source::{DirectorySource, HttpSource, IconSource, MemorySource, MDI_BASE_URL};
