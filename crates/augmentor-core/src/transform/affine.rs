//! 2-D affine matrices in canvas coordinates (origin top-left, y down).
//!
//! A matrix maps a point `(x, y)` to:
//! ```text
//! x' = a * x + b * y + c
//! y' = d * x + e * y + f
//! ```
//! Composition follows the drawing-context convention: `m.then(n)` applies
//! `n` first and `m` second, the same as post-multiplying a context
//! transform with `n`.

/// Row-major 2x3 affine matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            c: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            e: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `degrees`, clockwise on screen for positive angles.
    ///
    /// Multiples of 90 degrees use exact sine/cosine so quarter turns land
    /// on pixel centers without drift.
    pub fn rotate_degrees(degrees: f64) -> Self {
        let (sin, cos) = exact_sin_cos(degrees);
        Self {
            a: cos,
            b: -sin,
            c: 0.0,
            d: sin,
            e: cos,
            f: 0.0,
        }
    }

    /// Compose: the result applies `next` first, then `self`.
    pub fn then(&self, next: &Affine) -> Affine {
        Affine {
            a: self.a * next.a + self.b * next.d,
            b: self.a * next.b + self.b * next.e,
            c: self.a * next.c + self.b * next.f + self.c,
            d: self.d * next.a + self.e * next.d,
            e: self.d * next.b + self.e * next.e,
            f: self.d * next.c + self.e * next.f + self.f,
        }
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }

    /// Inverse matrix, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.a * self.e - self.b * self.d;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine {
            a: self.e * inv,
            b: -self.b * inv,
            c: (self.b * self.f - self.e * self.c) * inv,
            d: -self.d * inv,
            e: self.a * inv,
            f: (self.d * self.c - self.a * self.f) * inv,
        })
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Sine and cosine of an angle in degrees, exact at multiples of 90.
fn exact_sin_cos(degrees: f64) -> (f64, f64) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized.fract() == 0.0 && normalized % 90.0 == 0.0 {
        match normalized as u32 {
            0 => (0.0, 1.0),
            90 => (1.0, 0.0),
            180 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        degrees.to_radians().sin_cos()
    }
}
