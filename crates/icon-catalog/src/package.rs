//! Writing an icon package archive.
//!
//! The package is a deflated zip named [`ARCHIVE_FILE`]:
//!
//! ```text
//! manifest.json
//! SVG/<id>.svg
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::catalog::{IconSpec, CATALOG};
use crate::errors::PackageError;
use crate::manifest::{save_manifest, ManifestEntry};
use crate::source::IconSource;

pub const ARCHIVE_FILE: &str = "mdi-tech-icons.zip";
pub const MANIFEST_FILE: &str = "manifest.json";

/// An icon left out of a package because its SVG could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedIcon {
    pub id: String,
    pub reason: String,
}

/// What a packaging run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    pub created: DateTime<Utc>,
    /// Path of the written zip.
    pub archive: PathBuf,
    /// Manifest entries, in catalog order. One per archived SVG.
    pub entries: Vec<ManifestEntry>,
    pub skipped: Vec<SkippedIcon>,
}

/// Package the full catalog into `out_dir/`[`ARCHIVE_FILE`].
pub fn package(source: &dyn IconSource, out_dir: &Path) -> Result<PackageReport, PackageError> {
    package_icons(source, CATALOG, out_dir)
}

/// Fetch each icon, then zip the manifest and the icons that arrived.
///
/// A failed fetch is logged and recorded in [`PackageReport::skipped`]; only
/// filesystem, archive and serialization failures abort the run. An existing
/// archive is overwritten.
#[instrument(skip(source, icons), fields(icons = icons.len()))]
pub fn package_icons(
    source: &dyn IconSource,
    icons: &[IconSpec],
    out_dir: &Path,
) -> Result<PackageReport, PackageError> {
    let mut fetched = Vec::with_capacity(icons.len());
    let mut skipped = Vec::new();

    for spec in icons {
        match source.fetch_svg(spec.id) {
            Ok(svg) => {
                debug!(id = spec.id, bytes = svg.len(), "fetched icon");
                fetched.push((ManifestEntry::from(spec), svg));
            }
            Err(err) => {
                warn!(id = spec.id, %err, "could not fetch icon, skipping");
                skipped.push(SkippedIcon {
                    id: spec.id.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let entries: Vec<ManifestEntry> = fetched.iter().map(|(entry, _)| entry.clone()).collect();
    let manifest = save_manifest(&entries).map_err(|e| PackageError::Serialize(e.to_string()))?;

    std::fs::create_dir_all(out_dir).map_err(|e| io_error(out_dir, e))?;
    let archive = out_dir.join(ARCHIVE_FILE);
    write_archive(&archive, &manifest, &fetched)?;

    info!(
        archive = %archive.display(),
        written = entries.len(),
        skipped = skipped.len(),
        "icon package written"
    );

    Ok(PackageReport {
        created: Utc::now(),
        archive,
        entries,
        skipped,
    })
}

fn write_archive(
    path: &Path,
    manifest: &str,
    icons: &[(ManifestEntry, String)],
) -> Result<(), PackageError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MANIFEST_FILE, options)
        .map_err(|e| archive_error(path, e))?;
    zip.write_all(manifest.as_bytes())
        .map_err(|e| io_error(path, e))?;

    for (entry, svg) in icons {
        zip.start_file(entry.svg_path(), options)
            .map_err(|e| archive_error(path, e))?;
        zip.write_all(svg.as_bytes()).map_err(|e| io_error(path, e))?;
    }

    zip.finish().map_err(|e| archive_error(path, e))?;
    Ok(())
}

fn io_error(path: &Path, err: std::io::Error) -> PackageError {
    PackageError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

fn archive_error(path: &Path, err: zip::result::ZipError) -> PackageError {
    PackageError::Archive {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
