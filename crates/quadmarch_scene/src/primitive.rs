//! Primitive kinds and their canonical surfaces
//!
//! Canonical surfaces are expressed in object space with a single radius
//! parameter; the assembler conjugates them into world space. The numeric
//! tags match the shader-side enumeration (sphere 0, cube 1, octahedron 2,
//! cylinder 3).

use serde::{Serialize, Deserialize};

use crate::error::ShapeError;
use crate::quadric::QuadricForm;
use crate::shape::Surfaces;

/// The supported solid primitives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// One quadric: `x^2 + y^2 + z^2 <= r^2`
    Sphere,
    /// Six half-spaces: `+-x <= r`, `+-y <= r`, `+-z <= r`
    Cube,
    /// Lateral surface plus two caps: `x^2 + y^2 <= r^2`, `+-z <= r`
    Cylinder,
    /// Eight facets: `(+-x +- y +- z) / sqrt(3) <= r`
    Octahedron,
}

impl PrimitiveKind {
    /// Decode the shader-side numeric tag
    pub fn from_tag(tag: i32) -> Result<Self, ShapeError> {
        match tag {
            0 => Ok(PrimitiveKind::Sphere),
            1 => Ok(PrimitiveKind::Cube),
            2 => Ok(PrimitiveKind::Octahedron),
            3 => Ok(PrimitiveKind::Cylinder),
            other => Err(ShapeError::InvalidPrimitiveKind(other)),
        }
    }

    /// The shader-side numeric tag
    pub fn tag(self) -> i32 {
        match self {
            PrimitiveKind::Sphere => 0,
            PrimitiveKind::Cube => 1,
            PrimitiveKind::Octahedron => 2,
            PrimitiveKind::Cylinder => 3,
        }
    }

    /// How many canonical surfaces this kind emits
    pub fn surface_count(self) -> usize {
        match self {
            PrimitiveKind::Sphere => 1,
            PrimitiveKind::Cube => 6,
            PrimitiveKind::Cylinder => 3,
            PrimitiveKind::Octahedron => 8,
        }
    }

    /// The canonical object-space surfaces for a solid of radius `r`
    pub fn canonical_surfaces(self, r: f64) -> Surfaces {
        let mut out = Surfaces::new();
        match self {
            PrimitiveKind::Sphere => {
                out.push(QuadricForm::sphere(r));
            }
            PrimitiveKind::Cube => {
                for (a, b, c) in [
                    (1.0, 0.0, 0.0),
                    (-1.0, 0.0, 0.0),
                    (0.0, 1.0, 0.0),
                    (0.0, -1.0, 0.0),
                    (0.0, 0.0, 1.0),
                    (0.0, 0.0, -1.0),
                ] {
                    out.push(QuadricForm::half_space(a, b, c, -r));
                }
            }
            PrimitiveKind::Cylinder => {
                out.push(QuadricForm::lateral_cylinder(r));
                out.push(QuadricForm::half_space(0.0, 0.0, 1.0, -r));
                out.push(QuadricForm::half_space(0.0, 0.0, -1.0, -r));
            }
            PrimitiveKind::Octahedron => {
                let k = 1.0 / 3f64.sqrt();
                for sx in [k, -k] {
                    for sy in [k, -k] {
                        for sz in [k, -k] {
                            out.push(QuadricForm::half_space(sx, sy, sz, -r));
                        }
                    }
                }
            }
        }
        out
    }
}
