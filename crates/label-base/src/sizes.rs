//! ScrewUnit bin sizes.

use label_types::Footprint;
use serde::Serialize;

/// A named bin size with its label dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeVariant {
    pub id: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SizeVariant {
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width_mm, self.height_mm)
    }
}

/// Every supported bin size.
pub const SIZE_VARIANTS: &[SizeVariant] = &[
    SizeVariant {
        id: "small",
        width_mm: 23.0,
        height_mm: 13.0,
    },
    SizeVariant {
        id: "wide",
        width_mm: 53.0,
        height_mm: 13.0,
    },
];

/// Variant used when a requested id is not in [`SIZE_VARIANTS`].
pub const DEFAULT_VARIANT_ID: &str = "small";

/// Label width assumed by layout code before a variant is chosen.
pub const DEFAULT_LABEL_WIDTH_MM: f64 = 23.0;

/// Clearance layout code keeps between label content and the plate edge.
pub const DEFAULT_MARGIN_MM: f64 = 1.5;

/// Defaults layout code starts from before a variant is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelDefaults {
    pub width_mm: f64,
    pub margin_mm: f64,
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_LABEL_WIDTH_MM,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

/// Exact lookup by id.
pub fn lookup(id: &str) -> Option<&'static SizeVariant> {
    SIZE_VARIANTS.iter().find(|v| v.id == id)
}

pub fn default_variant() -> &'static SizeVariant {
    // The default id is a table entry; the fallback keeps this total.
    lookup(DEFAULT_VARIANT_ID).unwrap_or(&SIZE_VARIANTS[0])
}

/// Lookup with silent fallback to the default variant.
pub fn resolve(id: &str) -> &'static SizeVariant {
    lookup(id).unwrap_or_else(default_variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_dimensions_are_positive() {
        for v in SIZE_VARIANTS {
            assert!(v.width_mm > 0.0 && v.height_mm > 0.0, "{:?}", v);
        }
    }

    #[test]
    fn test_table_ids_are_unique() {
        for (i, a) in SIZE_VARIANTS.iter().enumerate() {
            for b in &SIZE_VARIANTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_variant_is_in_table() {
        assert!(lookup(DEFAULT_VARIANT_ID).is_some());
        assert_eq!(default_variant().id, "small");
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        assert_eq!(resolve("wide").width_mm, 53.0);
        assert_eq!(resolve("WIDE").id, "small");
        assert_eq!(resolve("").id, "small");
        assert_eq!(resolve("huge").footprint(), Footprint::new(23.0, 13.0));
    }

    #[test]
    fn test_default_label_width_matches_default_variant() {
        let defaults = LabelDefaults::default();
        assert_eq!(defaults.width_mm, default_variant().width_mm);
        assert_eq!(defaults.margin_mm, 1.5);
    }
}
