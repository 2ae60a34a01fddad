//! The demo world: four animated solids
//!
//! One cylinder, sphere, octahedron and cube parked at the corners of the
//! view, each with its own time-driven motion. The whole scene is a pure
//! function of the frame time: `frame` rebuilds every shape from scratch,
//! so no transform state survives between frames.

use quadmarch_math::mat4::{multiply, rotate_x, rotate_y, rotate_z, scale, translate};

use crate::assembler::{build_shape, ShapeParams};
use crate::error::ShapeError;
use crate::frame::{default_lights, default_materials, FrameParameters, Light, Material};
use crate::primitive::PrimitiveKind;
use crate::sink::{FrameSubmission, RendererSink};

/// Tunable world parameters, typically loaded from configuration
#[derive(Clone, Debug)]
pub struct WorldParams {
    /// Canonical radius shared by all four solids
    pub radius: f64,
    /// Amplitude of the breathing/squash animations
    pub amplitude: f64,
    /// Phase offset applied to the animation waveforms, in seconds
    pub phase: f64,
    /// Directional lights
    pub lights: Vec<Light>,
    /// Material table, one entry per shape slot
    pub materials: Vec<Material>,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            amplitude: 0.3,
            phase: 0.0,
            lights: default_lights(),
            materials: default_materials(),
        }
    }
}

/// The four-shape demo scene
#[derive(Clone, Debug, Default)]
pub struct World {
    params: WorldParams,
}

impl World {
    /// Create a world with the given parameters
    pub fn new(params: WorldParams) -> Self {
        Self { params }
    }

    /// Build the frame's shapes and tables.
    ///
    /// Fails only if some placement degenerates, which with these
    /// waveforms cannot happen while `amplitude` stays above -1; the error
    /// is surfaced rather than patched so the caller decides whether to
    /// drop the frame.
    pub fn frame(&self, input: &FrameParameters) -> Result<FrameSubmission, ShapeError> {
        let t = input.time_seconds();
        let p = &self.params;
        let breathing = 1.0 + p.amplitude * (t + p.phase).sin();

        // a tilted, static cylinder
        let cylinder = build_shape(
            PrimitiveKind::Cylinder,
            multiply(
                translate(0.4, -0.4, -0.4),
                multiply(rotate_x(-0.5), scale(0.1, 0.2, 0.1)),
            ),
            t,
            &ShapeParams {
                radius: p.radius,
                amplitude: 0.0,
                phase: 0.0,
            },
        )?;

        // a swaying sphere that squashes along its y axis
        let sphere = build_shape(
            PrimitiveKind::Sphere,
            multiply(
                translate(-0.4, 0.4, -0.4),
                multiply(
                    rotate_y(2.0 * (t + p.phase).sin()),
                    scale(0.1, 0.15, 0.1),
                ),
            ),
            t,
            &ShapeParams {
                radius: p.radius,
                amplitude: p.amplitude,
                phase: p.phase,
            },
        )?;

        // a rocking octahedron
        let octahedron = build_shape(
            PrimitiveKind::Octahedron,
            multiply(
                translate(-0.4, -0.4, 0.4),
                multiply(rotate_z((t + p.phase).sin()), scale(0.1, 0.1, 0.1)),
            ),
            t,
            &ShapeParams {
                radius: p.radius,
                amplitude: 0.0,
                phase: 0.0,
            },
        )?;

        // a cube with a fixed attitude and a breathing x extent
        let cube = build_shape(
            PrimitiveKind::Cube,
            multiply(
                translate(0.4, 0.4, -0.4),
                multiply(
                    multiply(rotate_y(1.0), rotate_z(1.0)),
                    scale(0.1 * breathing, 0.1, 0.2),
                ),
            ),
            t,
            &ShapeParams {
                radius: p.radius,
                amplitude: 0.0,
                phase: 0.0,
            },
        )?;

        let shapes = vec![cylinder, sphere, octahedron, cube];
        log::trace!("assembled {} shapes at t={:.3}s", shapes.len(), t);

        Ok(FrameSubmission {
            time_s: t,
            cursor: input.cursor,
            camera: input.camera,
            shapes,
            lights: p.lights.clone(),
            materials: p.materials.clone(),
        })
    }

    /// Build the frame and hand it to a sink
    pub fn submit_frame(
        &self,
        input: &FrameParameters,
        sink: &mut dyn RendererSink,
    ) -> Result<(), ShapeError> {
        let frame = self.frame(input)?;
        sink.submit(&frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadmarch_math::mat4::{identity, multiply, Mat4};

    fn mat_approx_eq(a: Mat4, b: Mat4, tol: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < tol)
    }

    struct RecordingSink {
        submissions: usize,
        last_shape_count: usize,
    }

    impl RendererSink for RecordingSink {
        fn submit(&mut self, frame: &FrameSubmission) {
            self.submissions += 1;
            self.last_shape_count = frame.shapes.len();
        }
    }

    #[test]
    fn test_frame_has_four_shapes_in_slot_order() {
        let world = World::default();
        let frame = world.frame(&FrameParameters::at_time_ms(250.0)).unwrap();
        let kinds: Vec<_> = frame.shapes.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::Cylinder,
                PrimitiveKind::Sphere,
                PrimitiveKind::Octahedron,
                PrimitiveKind::Cube,
            ]
        );
        assert_eq!(frame.lights.len(), 2);
        assert_eq!(frame.materials.len(), 4);
    }

    #[test]
    fn test_frame_is_deterministic_in_time() {
        let world = World::default();
        let a = world.frame(&FrameParameters::at_time_ms(777.0)).unwrap();
        let b = world.frame(&FrameParameters::at_time_ms(777.0)).unwrap();
        for (x, y) in a.shapes.iter().zip(b.shapes.iter()) {
            assert_eq!(x.placement, y.placement);
        }
    }

    #[test]
    fn test_shapes_animate_over_time() {
        let world = World::default();
        let a = world.frame(&FrameParameters::at_time_ms(0.0)).unwrap();
        let b = world.frame(&FrameParameters::at_time_ms(900.0)).unwrap();
        // sphere and octahedron move; the cylinder is static
        assert_ne!(a.shapes[1].placement, b.shapes[1].placement);
        assert_ne!(a.shapes[2].placement, b.shapes[2].placement);
        assert_eq!(a.shapes[0].placement, b.shapes[0].placement);
    }

    #[test]
    fn test_every_shape_carries_mutual_inverses() {
        let world = World::default();
        let frame = world.frame(&FrameParameters::at_time_ms(123.0)).unwrap();
        for shape in &frame.shapes {
            let product = multiply(shape.placement, shape.inverse_placement);
            assert!(mat_approx_eq(product, identity(), 1e-9));
        }
    }

    #[test]
    fn test_submit_reaches_sink() {
        let world = World::default();
        let mut sink = RecordingSink {
            submissions: 0,
            last_shape_count: 0,
        };
        world
            .submit_frame(&FrameParameters::at_time_ms(16.0), &mut sink)
            .unwrap();
        assert_eq!(sink.submissions, 1);
        assert_eq!(sink.last_shape_count, 4);
    }
}
