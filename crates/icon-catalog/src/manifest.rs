use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, IconSpec};
use crate::errors::ManifestError;

/// Icon standard recorded for every packaged icon.
pub const STANDARD: &str = "MDI";

/// One icon as listed in `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub standard: String,
    /// File stem of the icon under `SVG/`.
    pub filename: String,
    pub tags: Vec<String>,
}

impl From<&IconSpec> for ManifestEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            category: spec.category,
            standard: STANDARD.to_string(),
            filename: spec.id.to_string(),
            tags: spec.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ManifestEntry {
    /// Name of the icon's SVG entry inside the package archive.
    pub fn svg_path(&self) -> String {
        format!("SVG/{}.svg", self.filename)
    }
}

/// Serialize a manifest as a pretty-printed JSON array.
pub fn save_manifest(entries: &[ManifestEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Parse a manifest, rejecting foreign standards and repeated ids.
pub fn load_manifest(json: &str) -> Result<Vec<ManifestEntry>, ManifestError> {
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(json).map_err(|e| ManifestError::ParseError(e.to_string()))?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if entry.standard != STANDARD {
            return Err(ManifestError::UnknownStandard {
                id: entry.id.clone(),
                standard: entry.standard.clone(),
            });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(ManifestError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_entry_from_catalog() {
        let entry = ManifestEntry::from(find("usb-c-port").unwrap());
        assert_eq!(entry.standard, "MDI");
        assert_eq!(entry.filename, "usb-c-port");
        assert_eq!(entry.svg_path(), "SVG/usb-c-port.svg");
        assert_eq!(entry.tags, vec!["usb", "usb-c", "type-c", "port"]);
    }

    #[test]
    fn test_json_field_layout() {
        let entry = ManifestEntry::from(find("battery").unwrap());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["category"], "POWER");
        assert_eq!(json["standard"], "MDI");
        assert_eq!(json["name"], "Battery");
    }

    #[test]
    fn test_load_rejects_other_standard() {
        let json = r#"[{"id":"x","name":"X","category":"POWER","standard":"FA","filename":"x","tags":[]}]"#;
        assert!(matches!(
            load_manifest(json),
            Err(ManifestError::UnknownStandard { .. })
        ));
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let entry = ManifestEntry::from(find("wifi").unwrap());
        let json = save_manifest(&[entry.clone(), entry]).unwrap();
        assert_eq!(
            load_manifest(&json),
            Err(ManifestError::DuplicateId("wifi".to_string()))
        );
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(
            load_manifest("{}"),
            Err(ManifestError::ParseError(_))
        ));
    }
}
