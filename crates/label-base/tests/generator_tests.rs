use approx::assert_relative_eq;

use label_base::generator::GenerationSummary;
use label_base::{
    generate, BaseShapeGenerator, FilletOutcome, GenerateError, GenerationRequest,
    GeneratorConfig, LabelBaseResult, Length, LengthNormalizer, LengthUnit, UnitError,
    SIZE_VARIANTS,
};
use label_kernel::{KernelError, KernelIntrospect, MockKernel, TruckKernel};
use label_types::{Axis, Footprint};
use modeling_ops::{KernelBundle, OpError};

/// Check the body lies in z ∈ [-depth, 0] and spans the footprint.
fn assert_body_shape(kb: &dyn KernelIntrospect, result: &LabelBaseResult, depth: f64) {
    let bounds = kb
        .solid_bounds(&result.body)
        .expect("body should have vertices");
    assert_relative_eq!(bounds.max[2], 0.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.min[2], -depth, epsilon = 1e-9);
    assert_relative_eq!(bounds.extent(Axis::X), result.footprint.width_mm, epsilon = 1e-9);
    assert_relative_eq!(bounds.extent(Axis::Y), result.footprint.height_mm, epsilon = 1e-9);
}

fn run(kb: &mut dyn KernelBundle, request: &GenerationRequest) -> LabelBaseResult {
    BaseShapeGenerator::default()
        .generate(kb, request)
        .expect("generation should succeed")
}

// ── Size resolution ────────────────────────────────────────────────────────

#[test]
fn every_variant_footprint_matches_table() {
    for variant in SIZE_VARIANTS {
        let mut kernel = MockKernel::new();
        let result = run(&mut kernel, &GenerationRequest::new(variant.id));
        assert_eq!(result.footprint, variant.footprint());
        assert_eq!(result.parameters.variant, variant.id);
        assert_body_shape(&kernel, &result, 0.3);
    }
}

#[test]
fn unknown_variant_uses_default_footprint() {
    let mut kernel = MockKernel::new();
    let unknown = run(&mut kernel, &GenerationRequest::new("unknown"));
    let small = run(&mut kernel, &GenerationRequest::new("small"));
    assert_eq!(unknown.footprint, small.footprint);
    assert_eq!(unknown.footprint, Footprint::new(23.0, 13.0));
    assert_eq!(unknown.parameters.variant, "small");
}

// ── Depth resolution ───────────────────────────────────────────────────────

#[test]
fn default_depth_is_half_reference() {
    let mut kernel = MockKernel::new();
    let result = run(&mut kernel, &GenerationRequest::new("small"));
    assert_eq!(result.parameters.depth_mm, 0.3);
    assert_eq!(result.parameters.corner_radius_mm, 1.0);
    assert_body_shape(&kernel, &result, 0.3);
}

#[test]
fn default_depth_follows_configured_reference() {
    let mut kernel = MockKernel::new();
    let config = GeneratorConfig {
        reference_depth_mm: 2.0,
        ..GeneratorConfig::default()
    };
    let result = BaseShapeGenerator::new(config)
        .generate(&mut kernel, &GenerationRequest::new("wide"))
        .unwrap();
    assert_eq!(result.parameters.depth_mm, 1.0);
    assert_body_shape(&kernel, &result, 1.0);
}

#[test]
fn explicit_depth_ignores_variant() {
    for variant in SIZE_VARIANTS {
        let mut kernel = MockKernel::new();
        let request = GenerationRequest::new(variant.id).with_depth(Length::mm(5.0));
        let result = run(&mut kernel, &request);
        assert_eq!(result.parameters.depth_mm, 5.0);
        assert_body_shape(&kernel, &result, 5.0);
    }
}

#[test]
fn centimeter_depth_matches_millimeter_depth() {
    let mut kernel = MockKernel::new();
    let cm = run(
        &mut kernel,
        &GenerationRequest::new("small").with_depth("0.5 cm".parse().unwrap()),
    );
    let mm = run(
        &mut kernel,
        &GenerationRequest::new("small").with_depth("5mm".parse().unwrap()),
    );
    assert_relative_eq!(cm.parameters.depth_mm, mm.parameters.depth_mm, epsilon = 1e-12);
    assert_body_shape(&kernel, &cm, 5.0);
}

#[test]
fn unknown_depth_unit_is_an_error() {
    let mut kernel = MockKernel::new();
    let request = GenerationRequest::new("small").with_depth(Length::new(2.0, "hands"));
    let err = BaseShapeGenerator::default()
        .generate(&mut kernel, &request)
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Units(UnitError::UnknownUnit { .. })
    ));
}

#[test]
fn negative_depth_is_an_error() {
    let mut kernel = MockKernel::new();
    let request = GenerationRequest::new("small").with_depth(Length::mm(-1.0));
    let err = BaseShapeGenerator::default()
        .generate(&mut kernel, &request)
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Units(UnitError::NonPositive { .. })
    ));
}

/// Converts without validating, so bad magnitudes reach the kernel.
struct PermissiveUnits;

impl LengthNormalizer for PermissiveUnits {
    fn magnitude_in(&self, length: &Length, target: LengthUnit) -> Result<f64, UnitError> {
        let unit = LengthUnit::from_label(&length.unit)?;
        Ok(length.magnitude * unit.millimeters() / target.millimeters())
    }
}

#[test]
fn zero_depth_fails_in_the_kernel() {
    let mut kernel = MockKernel::new();
    let generator = BaseShapeGenerator::with_units(GeneratorConfig::default(), PermissiveUnits);
    let request = GenerationRequest::new("small").with_depth(Length::mm(0.0));
    let err = generator.generate(&mut kernel, &request).unwrap_err();
    assert!(
        matches!(
            err,
            GenerateError::Op(OpError::Kernel(KernelError::ExtrudeFailed { .. }))
        ),
        "got {:?}",
        err
    );
}

#[test]
fn oversized_corner_radius_fails_in_the_kernel() {
    // 7 mm exceeds half the 13 mm height of the small label.
    let config = GeneratorConfig {
        corner_radius_mm: 7.0,
        ..GeneratorConfig::default()
    };
    let generator = BaseShapeGenerator::new(config);
    let request = GenerationRequest::new("small");

    let mut mock = MockKernel::new();
    let mut truck = TruckKernel::new();
    let kernels: [&mut dyn KernelBundle; 2] = [&mut mock, &mut truck];
    for kb in kernels {
        let err = generator.generate(kb, &request).unwrap_err();
        assert!(
            matches!(
                err,
                GenerateError::Op(OpError::Kernel(KernelError::InvalidProfile { .. }))
            ),
            "got {:?}",
            err
        );
    }
}

// ── Fillet ─────────────────────────────────────────────────────────────────

#[test]
fn fillet_applied_on_mock_kernel() {
    let mut kernel = MockKernel::new();
    let result = run(
        &mut kernel,
        &GenerationRequest::new("wide").with_depth(Length::mm(2.0)),
    );
    assert_eq!(
        result.fillet,
        FilletOutcome::Applied {
            radius_mm: 0.1,
            edges: 8
        }
    );
    assert_eq!(kernel.list_faces(&result.body).len(), 18);
    assert_body_shape(&kernel, &result, 2.0);
}

#[test]
fn forced_fillet_failure_keeps_valid_body() {
    let mut kernel = MockKernel::with_failing_fillet();
    let result = run(&mut kernel, &GenerationRequest::new("wide"));

    assert_eq!(kernel.fillet_calls(), 1);
    match &result.fillet {
        FilletOutcome::Skipped { reason } => assert!(reason.contains("injected")),
        other => panic!("expected skipped fillet, got {:?}", other),
    }
    assert_eq!(result.footprint, Footprint::new(53.0, 13.0));
    assert_eq!(result.parameters.depth_mm, 0.3);
    assert_eq!(kernel.list_faces(&result.body).len(), 10);
    assert_body_shape(&kernel, &result, 0.3);
}

#[test]
fn fillet_too_large_for_body_is_skipped() {
    let mut kernel = MockKernel::new();
    let config = GeneratorConfig {
        edge_fillet_radius_mm: 0.5,
        ..GeneratorConfig::default()
    };
    let result = BaseShapeGenerator::new(config)
        .generate(&mut kernel, &GenerationRequest::new("small"))
        .unwrap();
    assert!(matches!(result.fillet, FilletOutcome::Skipped { .. }));
    assert_body_shape(&kernel, &result, 0.3);
}

// ── Truck kernel ───────────────────────────────────────────────────────────

#[test]
fn truck_small_default() {
    let mut kernel = TruckKernel::new();
    let result = run(&mut kernel, &GenerationRequest::new("small"));

    assert_eq!(result.footprint, Footprint::new(23.0, 13.0));
    assert_eq!(result.parameters.depth_mm, 0.3);
    assert_eq!(result.parameters.corner_radius_mm, 1.0);
    assert!(matches!(result.fillet, FilletOutcome::Skipped { .. }));
    assert_eq!(kernel.list_faces(&result.body).len(), 10);
    assert_body_shape(&kernel, &result, 0.3);
}

#[test]
fn truck_wide_with_explicit_depth() {
    let mut kernel = TruckKernel::new();
    let request = GenerationRequest::new("wide").with_depth(Length::mm(2.0));
    let result = run(&mut kernel, &request);

    assert_eq!(result.footprint, Footprint::new(53.0, 13.0));
    assert_eq!(result.parameters.depth_mm, 2.0);
    assert_body_shape(&kernel, &result, 2.0);
}

#[test]
fn truck_unknown_variant_falls_back() {
    let mut kernel = TruckKernel::new();
    let result = run(&mut kernel, &GenerationRequest::new("unknown"));
    assert_eq!(result.footprint, Footprint::new(23.0, 13.0));
    assert_body_shape(&kernel, &result, 0.3);
}

// ── Convenience API and reporting ──────────────────────────────────────────

#[test]
fn free_generate_uses_defaults() {
    let mut kernel = MockKernel::new();
    let result = generate(&mut kernel, "wide", Some(Length::mm(2.0))).unwrap();
    assert_eq!(result.footprint, Footprint::new(53.0, 13.0));
    assert_eq!(result.parameters.depth_mm, 2.0);
}

#[test]
fn summary_reports_bounds_and_fillet() {
    let mut kernel = TruckKernel::new();
    let result = run(&mut kernel, &GenerationRequest::new("small"));
    let summary = GenerationSummary::new(&result, &kernel);

    assert_eq!(summary.variant, "small");
    assert_eq!(summary.faces, 10);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["footprint"]["width_mm"], 23.0);
    assert_eq!(json["fillet"]["status"], "skipped");
    assert_eq!(json["bounds"]["max"][2], 0.0);
}
