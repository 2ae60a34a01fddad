//! End-to-end pipeline tests
//!
//! Drives the whole chain through the public API: config -> world ->
//! assembled shapes -> renderer sink, checking the numeric contracts a
//! raymarching backend relies on.

use quadmarch::math::mat4::{identity, multiply, scale, translate, translation, transform};
use quadmarch::math::Vec4;
use quadmarch::scene::{
    build_shape, FrameParameters, FrameSubmission, PrimitiveKind, RendererSink, ShapeError,
    ShapeParams, ShapeUniform, World,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_week_scene_surface_counts() {
    init_logging();
    let world = World::default();
    let frame = world.frame(&FrameParameters::at_time_ms(400.0)).unwrap();
    let counts: Vec<_> = frame.shapes.iter().map(|s| s.surface_count()).collect();
    assert_eq!(counts, vec![3, 1, 8, 6]);
}

#[test]
fn test_translated_scaled_sphere_scenario() {
    init_logging();
    let params = ShapeParams {
        radius: 0.1,
        amplitude: 0.0,
        phase: 0.0,
    };
    let placement = multiply(translate(0.4, -0.4, -0.4), scale(0.1, 0.2, 0.1));
    let shape = build_shape(PrimitiveKind::Sphere, placement, 0.0, &params).unwrap();

    let t = translation(shape.placement);
    assert!((t.x - 0.4).abs() < 1e-12 && (t.y + 0.4).abs() < 1e-12 && (t.z + 0.4).abs() < 1e-12);

    let at_center = shape.surfaces[0].evaluate(Vec4::point(0.4, -0.4, -0.4));
    assert!((at_center - (-0.01)).abs() < 1e-4);
}

#[test]
fn test_sink_receives_gpu_ready_shapes() {
    init_logging();

    struct UploadSink {
        uniforms: Vec<ShapeUniform>,
    }

    impl RendererSink for UploadSink {
        fn submit(&mut self, frame: &FrameSubmission) {
            self.uniforms = frame.shapes.iter().map(ShapeUniform::from).collect();
        }
    }

    let world = World::default();
    let mut sink = UploadSink { uniforms: vec![] };
    world
        .submit_frame(&FrameParameters::at_time_ms(100.0), &mut sink)
        .unwrap();

    assert_eq!(sink.uniforms.len(), 4);
    let tags: Vec<_> = sink.uniforms.iter().map(|u| u.kind).collect();
    // cylinder, sphere, octahedron, cube in slot order
    assert_eq!(tags, vec![3, 0, 2, 1]);
    for u in &sink.uniforms {
        let kind = PrimitiveKind::from_tag(u.kind).unwrap();
        assert_eq!(u.surface_count as usize, kind.surface_count());
    }
}

#[test]
fn test_world_shapes_contain_their_centers() {
    init_logging();
    let world = World::default();
    let frame = world.frame(&FrameParameters::at_time_ms(2500.0)).unwrap();
    for shape in &frame.shapes {
        let center = transform(shape.placement, Vec4::point(0.0, 0.0, 0.0));
        for q in &shape.surfaces {
            assert!(
                q.evaluate(center) < 0.0,
                "{:?} center not inside all half-spaces",
                shape.kind
            );
        }
    }
}

#[test]
fn test_placement_inverse_contract_across_frames() {
    init_logging();
    let world = World::default();
    for ms in [0.0, 130.0, 1000.0, 5500.0, 60000.0] {
        let frame = world.frame(&FrameParameters::at_time_ms(ms)).unwrap();
        for shape in &frame.shapes {
            let product = multiply(shape.placement, shape.inverse_placement);
            for (got, want) in product.iter().zip(identity().iter()) {
                assert!((got - want).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn test_singular_placement_error_propagates_to_caller() {
    init_logging();
    let err = build_shape(
        PrimitiveKind::Cube,
        scale(1.0, 0.0, 1.0),
        0.0,
        &ShapeParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ShapeError::Singular(_)));
}
