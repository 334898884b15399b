//! The label-base generator.
//!
//! A base is a rounded-rectangle plate extruded downward from z = 0, so text
//! and icons placed on the z = 0 plane sit exactly on its top face. The top
//! edges are filleted when the kernel can do it; when it cannot, the sharp
//! plate is returned and the outcome records why.

use label_kernel::{KernelIntrospect, KernelSolidHandle};
use label_types::{Axis, BoundingBox, Footprint, RoundedRectProfile};
use modeling_ops::extrude::extrude_rounded_rect;
use modeling_ops::{top_edges, try_fillet, FilletAttempt, KernelBundle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::sizes;
use crate::units::{Length, LengthNormalizer, StandardUnits};

const PLANE_ORIGIN: [f64; 3] = [0.0, 0.0, 0.0];
const PLANE_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];
const PLANE_X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

/// What to build: a size variant id and an optional explicit depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub variant: String,
    #[serde(default)]
    pub depth: Option<Length>,
}

impl GenerationRequest {
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: Length) -> Self {
        self.depth = Some(depth);
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(sizes::DEFAULT_VARIANT_ID)
    }
}

/// Parameters actually used for one generation, in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameters {
    /// Id of the variant used, after fallback.
    pub variant: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub corner_radius_mm: f64,
    pub edge_fillet_radius_mm: f64,
}

impl ResolvedParameters {
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width_mm, self.height_mm)
    }

    pub fn profile(&self) -> RoundedRectProfile {
        RoundedRectProfile::new(self.width_mm, self.height_mm, self.corner_radius_mm)
    }
}

/// How the top-edge fillet went.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FilletOutcome {
    Applied { radius_mm: f64, edges: usize },
    /// The body was kept without rounding.
    Skipped { reason: String },
    /// The configured fillet radius is zero.
    Disabled,
}

impl FilletOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FilletOutcome::Applied { .. })
    }
}

/// A generated label base.
#[derive(Debug, Clone)]
pub struct LabelBaseResult {
    /// The plate solid. Valid for the kernel session that built it.
    pub body: KernelSolidHandle,
    pub footprint: Footprint,
    pub parameters: ResolvedParameters,
    pub fillet: FilletOutcome,
}

/// Serializable description of a [`LabelBaseResult`], for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub variant: String,
    pub footprint: Footprint,
    pub depth_mm: f64,
    pub corner_radius_mm: f64,
    pub fillet: FilletOutcome,
    pub faces: usize,
    pub bounds: Option<BoundingBox>,
}

impl GenerationSummary {
    pub fn new(result: &LabelBaseResult, introspect: &dyn KernelIntrospect) -> Self {
        Self {
            variant: result.parameters.variant.clone(),
            footprint: result.footprint,
            depth_mm: result.parameters.depth_mm,
            corner_radius_mm: result.parameters.corner_radius_mm,
            fillet: result.fillet.clone(),
            faces: introspect.list_faces(&result.body).len(),
            bounds: introspect.solid_bounds(&result.body),
        }
    }
}

/// Builds label bases from size variants.
///
/// Stateless between calls: each `generate` works only on the kernel session
/// it is handed.
#[derive(Debug, Clone)]
pub struct BaseShapeGenerator<N: LengthNormalizer = StandardUnits> {
    config: GeneratorConfig,
    units: N,
}

impl BaseShapeGenerator<StandardUnits> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_units(config, StandardUnits)
    }
}

impl Default for BaseShapeGenerator<StandardUnits> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<N: LengthNormalizer> BaseShapeGenerator<N> {
    pub fn with_units(config: GeneratorConfig, units: N) -> Self {
        Self { config, units }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolve the variant and depth of a request.
    ///
    /// Unknown variants fall back to the default variant. A missing depth
    /// becomes half the configured reference depth.
    pub fn resolve(&self, request: &GenerationRequest) -> Result<ResolvedParameters, GenerateError> {
        let size = sizes::resolve(&request.variant);
        info!(
            requested = %request.variant,
            resolved = size.id,
            width_mm = size.width_mm,
            height_mm = size.height_mm,
            "resolved label size"
        );

        let depth_mm = match &request.depth {
            Some(depth) => self.units.to_millimeters(depth)?,
            None => self.config.default_depth_mm(),
        };

        Ok(ResolvedParameters {
            variant: size.id.to_string(),
            width_mm: size.width_mm,
            height_mm: size.height_mm,
            depth_mm,
            corner_radius_mm: self.config.corner_radius_mm,
            edge_fillet_radius_mm: self.config.edge_fillet_radius_mm,
        })
    }

    /// Build the label base for `request` in the given kernel session.
    #[instrument(skip(self, kb, request), fields(variant = %request.variant))]
    pub fn generate(
        &self,
        kb: &mut dyn KernelBundle,
        request: &GenerationRequest,
    ) -> Result<LabelBaseResult, GenerateError> {
        let parameters = self.resolve(request)?;

        let plate = extrude_rounded_rect(
            kb,
            &parameters.profile(),
            PLANE_ORIGIN,
            PLANE_NORMAL,
            PLANE_X_AXIS,
            -parameters.depth_mm,
        )?;
        debug!(
            depth_mm = parameters.depth_mm,
            kernel_time_ms = plate.diagnostics.kernel_time_ms,
            "extruded plate"
        );

        let (body, fillet) = self.round_top_edges(kb, plate.handle, parameters.edge_fillet_radius_mm);

        Ok(LabelBaseResult {
            body,
            footprint: parameters.footprint(),
            parameters,
            fillet,
        })
    }

    /// Fillet the edges bounding the top face. Never fails: on any problem
    /// the input body is handed back unchanged.
    fn round_top_edges(
        &self,
        kb: &mut dyn KernelBundle,
        body: KernelSolidHandle,
        radius_mm: f64,
    ) -> (KernelSolidHandle, FilletOutcome) {
        if radius_mm <= 0.0 {
            return (body, FilletOutcome::Disabled);
        }

        let Some(top) = top_edges(
            kb.as_introspect(),
            &body,
            Axis::Z,
            self.config.group_tolerance_mm,
        ) else {
            let reason = "body has no edges to round".to_string();
            info!(%reason, "top-edge fillet skipped");
            return (body, FilletOutcome::Skipped { reason });
        };

        match try_fillet(kb, &body, &top.edges, radius_mm) {
            FilletAttempt::Applied(result) => {
                debug!(edges = top.edges.len(), radius_mm, "top edges filleted");
                (
                    result.handle,
                    FilletOutcome::Applied {
                        radius_mm,
                        edges: top.edges.len(),
                    },
                )
            }
            FilletAttempt::Skipped(err) => {
                let reason = err.to_string();
                info!(%reason, "top-edge fillet skipped");
                (body, FilletOutcome::Skipped { reason })
            }
        }
    }
}

/// Generate with the default configuration and standard units.
pub fn generate(
    kb: &mut dyn KernelBundle,
    variant: &str,
    depth: Option<Length>,
) -> Result<LabelBaseResult, GenerateError> {
    let request = GenerationRequest {
        variant: variant.to_string(),
        depth,
    };
    BaseShapeGenerator::default().generate(kb, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_kernel::MockKernel;

    #[test]
    fn test_resolve_defaults() {
        let generator = BaseShapeGenerator::default();
        let params = generator.resolve(&GenerationRequest::new("small")).unwrap();
        assert_eq!(params.variant, "small");
        assert_eq!(params.footprint(), Footprint::new(23.0, 13.0));
        assert_eq!(params.depth_mm, 0.3);
        assert_eq!(params.corner_radius_mm, 1.0);
        assert_eq!(params.edge_fillet_radius_mm, 0.1);
    }

    #[test]
    fn test_resolve_unknown_variant_falls_back() {
        let generator = BaseShapeGenerator::default();
        let params = generator.resolve(&GenerationRequest::new("jumbo")).unwrap();
        assert_eq!(params.variant, "small");
    }

    #[test]
    fn test_resolve_rejects_bad_depth() {
        let generator = BaseShapeGenerator::default();
        let request = GenerationRequest::new("wide").with_depth(Length::new(2.0, "cubits"));
        assert!(matches!(
            generator.resolve(&request),
            Err(GenerateError::Units(_))
        ));
    }

    #[test]
    fn test_disabled_fillet_is_not_attempted() {
        let mut kernel = MockKernel::new();
        let generator = BaseShapeGenerator::new(GeneratorConfig::without_fillet());
        let result = generator
            .generate(&mut kernel, &GenerationRequest::default())
            .unwrap();
        assert_eq!(result.fillet, FilletOutcome::Disabled);
        assert_eq!(kernel.fillet_calls(), 0);
    }

    #[test]
    fn test_fillet_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(FilletOutcome::Skipped {
            reason: "nope".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "nope");
    }
}
