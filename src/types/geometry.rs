//! Rectangles and 2x2 transform matrices.

/// An integer rectangle. `w`/`h` may be zero, in which case nothing is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Last covered column, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w.saturating_sub(1))
    }

    /// Last covered row, saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h.saturating_sub(1))
    }
}

/// A 2x2 linear transform, row-major: `x' = m[0][0]*x + m[0][1]*y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub m: [[f32; 2]; 2],
}

impl Mat2 {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0], [0.0, 1.0]],
    };

    pub const fn new(m: [[f32; 2]; 2]) -> Self {
        Self { m }
    }

    /// Rotation by `angle` radians: `[[cos, sin], [-sin, cos]]`.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([[cos, sin], [-sin, cos]])
    }

    /// Uniform or non-uniform scale.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new([[sx, 0.0], [0.0, sy]])
    }

    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// The inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let [[a, b], [c, d]] = self.m;
        Some(Self::new([[d / det, -b / det], [-c / det, a / det]]))
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.m[0][0] * x + self.m[0][1] * y,
            self.m[1][0] * x + self.m[1][1] * y,
        )
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
