//! Per-frame shape snapshot and its fixed-capacity surface list

use quadmarch_math::Mat4;

use crate::primitive::PrimitiveKind;
use crate::quadric::QuadricForm;

/// Hard cap on surfaces per shape; the octahedron uses all eight
pub const MAX_SURFACES: usize = 8;

/// Inline, fixed-capacity list of quadric surfaces.
///
/// Surface counts are bounded at compile time, so shapes never touch the
/// heap and stay `Copy`-cheap to rebuild every frame.
#[derive(Clone, Copy, Debug)]
pub struct Surfaces {
    items: [QuadricForm; MAX_SURFACES],
    len: usize,
}

impl Surfaces {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: [QuadricForm([0.0; 16]); MAX_SURFACES],
            len: 0,
        }
    }

    /// Append a surface. Panics if the capacity invariant is violated,
    /// which would mean a primitive emitted more than [`MAX_SURFACES`].
    pub fn push(&mut self, q: QuadricForm) {
        assert!(self.len < MAX_SURFACES, "surface list capacity exceeded");
        self.items[self.len] = q;
        self.len += 1;
    }

    /// Number of surfaces
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no surfaces have been added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The surfaces in insertion order
    #[inline]
    pub fn as_slice(&self) -> &[QuadricForm] {
        &self.items[..self.len]
    }

    /// Iterate over the surfaces in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, QuadricForm> {
        self.as_slice().iter()
    }
}

impl Default for Surfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Surfaces {
    type Output = QuadricForm;

    fn index(&self, i: usize) -> &QuadricForm {
        &self.as_slice()[i]
    }
}

impl<'a> IntoIterator for &'a Surfaces {
    type Item = &'a QuadricForm;
    type IntoIter = std::slice::Iter<'a, QuadricForm>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One rendered solid for one frame.
///
/// A shape is a transient snapshot, fully determined by its kind and
/// placement: the surfaces are the kind's canonical quadrics conjugated
/// into world space, and `placement`/`inverse_placement` are mutually
/// inverse. Shapes carry no identity across frames; the world rebuilds
/// them from scratch from the frame time.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// Which primitive this is
    pub kind: PrimitiveKind,
    /// Object-to-world transform, animation already folded in
    pub placement: Mat4,
    /// World-to-object transform
    pub inverse_placement: Mat4,
    /// World-space quadrics whose intersection defines the solid
    pub surfaces: Surfaces,
}

impl Shape {
    /// Number of world-space surfaces (1, 6, 3 or 8 depending on kind)
    #[inline]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}
