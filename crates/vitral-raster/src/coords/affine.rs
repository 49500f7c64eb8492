use super::Vec2;

// Tolerance for inversion and degenerate-mapping checks.
const EPSILON: f32 = 1.0e-6;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(sx*x + kx*y + tx, ky*x + sy*y + ty)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub sx: f32,
    pub kx: f32,
    pub tx: f32,
    pub ky: f32,
    pub sy: f32,
    pub ty: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        kx: 0.0,
        tx: 0.0,
        ky: 0.0,
        sy: 1.0,
        ty: 0.0,
    };

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self { sx: 1.0, kx: 0.0, tx, ky: 0.0, sy: 1.0, ty }
    }

    /// Uniform scale about the origin.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self { sx: s, kx: 0.0, tx: 0.0, ky: 0.0, sy: s, ty: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.sx.is_finite()
            && self.kx.is_finite()
            && self.tx.is_finite()
            && self.ky.is_finite()
            && self.sy.is_finite()
            && self.ty.is_finite()
    }

    /// Transforms a point (includes translation).
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Composition: applies `self` first, then `next`.
    pub fn then(self, next: Affine) -> Affine {
        Affine {
            sx: next.sx * self.sx + next.kx * self.ky,
            kx: next.sx * self.kx + next.kx * self.sy,
            tx: next.sx * self.tx + next.kx * self.ty + next.tx,
            ky: next.ky * self.sx + next.sy * self.ky,
            sy: next.ky * self.kx + next.sy * self.sy,
            ty: next.ky * self.tx + next.sy * self.ty + next.ty,
        }
    }

    /// Inverts the transform, returning `None` if singular.
    pub fn inverse(self) -> Option<Affine> {
        let det = self.sx * self.sy - self.kx * self.ky;
        if !det.is_finite() || det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let sx = self.sy * inv_det;
        let kx = -self.kx * inv_det;
        let ky = -self.ky * inv_det;
        let sy = self.sx * inv_det;
        Some(Affine {
            sx,
            kx,
            tx: -(sx * self.tx + kx * self.ty),
            ky,
            sy,
            ty: -(ky * self.tx + sy * self.ty),
        })
    }

    /// The unique similarity transform mapping `p0` to `(0, 0)` and `p1` to
    /// `(1, 0)`.
    ///
    /// Returns `None` when no such transform exists: coincident or non-finite
    /// endpoints make the mapping singular. Callers treat that as a
    /// construction-time failure, never a runtime one.
    pub fn map_to_unit_x(p0: Vec2, p1: Vec2) -> Option<Affine> {
        let d = p1 - p0;
        let len2 = d.length_squared();
        if !len2.is_finite() || len2 <= EPSILON * EPSILON {
            return None;
        }

        // Conformal rows: rotate the segment onto +X and scale it to length 1.
        let inv = 1.0 / len2;
        let mut m = Affine {
            sx: d.x * inv,
            kx: d.y * inv,
            tx: 0.0,
            ky: -d.y * inv,
            sy: d.x * inv,
            ty: 0.0,
        };
        let t = m.apply(p0);
        m.tx = -t.x;
        m.ty = -t.y;

        if m.is_finite() { Some(m) } else { None }
    }
}
