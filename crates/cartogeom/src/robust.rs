//! Exact-sign orientation predicate.
//!
//! `sign_of_det2x2` returns the exact sign of `x1*y2 - y1*x2` for finite `f64`
//! inputs without evaluating the products. It folds the two row vectors into
//! the positive quadrant (tracking the sign flips of every row swap/negation)
//! and then runs a Euclid-like reduction: one row is reduced modulo the other,
//! and at each step the sign is read off from rectangle containment. The loop
//! only performs subtractions of exactly representable multiples, so the
//! answer is exact even when the naive expression cancels to zero or flips.
//!
//! References
//! - Avnaim, Boissonnat, Devillers, Preparata, Yvinec: "Evaluating signs of
//!   determinants using single-precision arithmetic" (Algorithmica 1997).

use crate::types::{Orientation, Point};

/// Exact sign (`-1`, `0`, `+1`) of the determinant `| x1 y1 ; x2 y2 |`.
///
/// Non-finite input cannot be reduced; the naive determinant's sign is
/// returned instead (NaN maps to 0).
pub fn sign_of_det2x2(x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
        return naive_sign(x1, y1, x2, y2);
    }

    let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);
    let mut sign = 1;

    // Null entries: one product vanishes, the sign follows from the other.
    if x1 == 0.0 || y2 == 0.0 {
        if y1 == 0.0 || x2 == 0.0 {
            return 0;
        }
        return if (y1 > 0.0) == (x2 > 0.0) { -sign } else { sign };
    }
    if y1 == 0.0 || x2 == 0.0 {
        return if (y2 > 0.0) == (x1 > 0.0) { sign } else { -sign };
    }

    // Make both y positive and permute rows so that y1 <= y2.
    if 0.0 < y1 {
        if 0.0 < y2 {
            if y1 > y2 {
                sign = -sign;
                std::mem::swap(&mut x1, &mut x2);
                std::mem::swap(&mut y1, &mut y2);
            }
        } else if y1 <= -y2 {
            sign = -sign;
            x2 = -x2;
            y2 = -y2;
        } else {
            let (ox1, oy1) = (x1, y1);
            x1 = -x2;
            y1 = -y2;
            x2 = ox1;
            y2 = oy1;
        }
    } else if 0.0 < y2 {
        if -y1 <= y2 {
            sign = -sign;
            x1 = -x1;
            y1 = -y1;
        } else {
            let (ox1, oy1) = (x1, y1);
            x1 = x2;
            y1 = y2;
            x2 = -ox1;
            y2 = -oy1;
        }
    } else if y1 >= y2 {
        x1 = -x1;
        y1 = -y1;
        x2 = -x2;
        y2 = -y2;
    } else {
        sign = -sign;
        let (ox1, oy1) = (x1, y1);
        x1 = -x2;
        y1 = -y2;
        x2 = -ox1;
        y2 = -oy1;
    }

    // Make both x positive; several sign patterns conclude immediately.
    if 0.0 < x1 {
        if 0.0 < x2 {
            if x1 > x2 {
                return sign;
            }
        } else {
            return sign;
        }
    } else if 0.0 < x2 {
        return -sign;
    } else if x1 >= x2 {
        sign = -sign;
        x1 = -x1;
        x2 = -x2;
    } else {
        return -sign;
    }

    // All entries strictly positive, x1 <= x2 and y1 <= y2.
    loop {
        let k = (x2 / x1).floor();
        x2 -= k * x1;
        y2 -= k * y1;

        // Is the reduced row 2 inside the row-1 rectangle?
        if y2 < 0.0 {
            return -sign;
        }
        if y2 > y1 {
            return sign;
        }

        if x1 > x2 + x2 {
            if y1 < y2 + y2 {
                return sign;
            }
        } else if y1 > y2 + y2 {
            return -sign;
        } else {
            x2 = x1 - x2;
            y2 = y1 - y2;
            sign = -sign;
        }
        if y2 == 0.0 {
            return if x2 == 0.0 { 0 } else { -sign };
        }
        if x2 == 0.0 {
            return sign;
        }

        // Same step with the roles of the rows exchanged.
        let k = (x1 / x2).floor();
        x1 -= k * x2;
        y1 -= k * y2;

        if y1 < 0.0 {
            return sign;
        }
        if y1 > y2 {
            return -sign;
        }

        if x2 > x1 + x1 {
            if y2 < y1 + y1 {
                return -sign;
            }
        } else if y2 > y1 + y1 {
            return sign;
        } else {
            x1 = x2 - x1;
            y1 = y2 - y1;
            sign = -sign;
        }
        if y1 == 0.0 {
            return if x1 == 0.0 { 0 } else { sign };
        }
        if x1 == 0.0 {
            return -sign;
        }
    }
}

#[inline]
fn naive_sign(x1: f64, y1: f64, x2: f64, y2: f64) -> i32 {
    let det = x1 * y2 - y1 * x2;
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Turn index of `p1 → p2 → q`: `+1` counterclockwise, `-1` clockwise, `0` collinear.
///
/// Evaluated as the exact sign of `det(p2 - p1, q - p2)`; only the two
/// coordinate differences are rounded.
#[inline]
pub fn orientation_index(p1: Point, p2: Point, q: Point) -> i32 {
    let dx1 = p2.x - p1.x;
    let dy1 = p2.y - p1.y;
    let dx2 = q.x - p2.x;
    let dy2 = q.y - p2.y;
    sign_of_det2x2(dx1, dy1, dx2, dy2)
}

/// Exact turn sign of `a → b → c` on the input coordinates themselves.
///
/// Unlike `orientation_index` no difference is rounded first, so the result is
/// consistent for every ordering of the same three points. The hull sorts and
/// scans with this one predicate.
#[inline]
pub fn orient_exact(a: Point, b: Point, c: Point) -> i32 {
    let det = ::robust::orient2d(
        ::robust::Coord { x: a.x, y: a.y },
        ::robust::Coord { x: b.x, y: b.y },
        ::robust::Coord { x: c.x, y: c.y },
    );
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// `orientation_index` as an `Orientation`.
#[inline]
pub fn orientation(p1: Point, p2: Point, q: Point) -> Orientation {
    Orientation::from_sign(orientation_index(p1, p2, q))
}
