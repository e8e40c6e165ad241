// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! Rotation geometry: angle normalization, bounding boxes and transforms.
//!
//! Everything in this module is a pure function of its arguments. The
//! synchronization machinery relies on that: recomputing with unchanged
//! inputs always yields an identical result.

use kurbo::{Affine, Point, Size, Vec2};

use crate::error::RotationError;

/// A rotation angle, normalized to degrees in the half-open range `[0, 360)`.
///
/// Construction is fallible so that non-finite input is rejected before it
/// can reach a transform. Negative values wrap: `-90` becomes `270`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle(f64);

impl Angle {
    /// Zero degrees.
    pub const ZERO: Self = Self(0.0);

    /// Normalize `degrees` into `[0, 360)`.
    ///
    /// Any finite real number is accepted; NaN and ±∞ fail with
    /// [`RotationError::DegenerateAngle`].
    pub fn try_degrees(degrees: f64) -> Result<Self, RotationError> {
        if !degrees.is_finite() {
            return Err(RotationError::DegenerateAngle(degrees));
        }
        let mut normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        if normalized >= 360.0 {
            normalized = 0.0;
        }
        Ok(Self(normalized))
    }

    /// The normalized angle in degrees, in `[0, 360)`.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The normalized angle in radians.
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Whether the angle is an exact multiple of 90°.
    pub fn is_axis_aligned(self) -> bool {
        self.0 % 90.0 == 0.0
    }

    /// Whether the angle is 90° or 270°, i.e. an odd quarter turn.
    pub fn is_quarter_turn(self) -> bool {
        self.0 % 180.0 == 90.0
    }

    /// Whether the angle is 0° or 180°.
    pub fn is_half_turn(self) -> bool {
        self.0 % 180.0 == 0.0
    }

    /// `|sin θ|`, exact at multiples of 90°.
    ///
    /// The exactness matters: bounding boxes at quarter turns must be exact
    /// integer swaps of width and height, with no rounding drift visible at
    /// the granularity the host reports.
    pub fn abs_sin(self) -> f64 {
        if self.is_axis_aligned() {
            if self.is_quarter_turn() { 1.0 } else { 0.0 }
        } else {
            self.radians().sin().abs()
        }
    }

    /// `|cos θ|`, exact at multiples of 90°.
    pub fn abs_cos(self) -> f64 {
        if self.is_axis_aligned() {
            if self.is_quarter_turn() { 0.0 } else { 1.0 }
        } else {
            self.radians().cos().abs()
        }
    }
}

/// The smallest axis-aligned box containing `natural` rotated by `angle`
/// about its center.
///
/// For width `w`, height `h` and angle `θ` this is
/// `(|w·cos θ| + |h·sin θ|, |w·sin θ| + |h·cos θ|)`. It degenerates to
/// `(w, h)` at 0° and 180° and to `(h, w)` at 90° and 270°, exactly.
pub fn bounding_size(natural: Size, angle: Angle) -> Size {
    let (sin, cos) = (angle.abs_sin(), angle.abs_cos());
    Size::new(
        natural.width * cos + natural.height * sin,
        natural.width * sin + natural.height * cos,
    )
}

/// The transform placing `natural`, rotated by `angle` about its own center,
/// so that the rotated shape's bounding box has its origin at `(0, 0)`.
///
/// Rotation is always about the unrotated rectangle's own center, never an
/// external origin; the trailing translation re-centers the result within
/// [`bounding_size`]. At 0° this is exactly the identity.
pub fn rotation_transform(natural: Size, angle: Angle) -> Affine {
    let center = Point::new(natural.width / 2.0, natural.height / 2.0);
    let bounds = bounding_size(natural, angle);
    let recenter = Vec2::new(
        bounds.width / 2.0 - center.x,
        bounds.height / 2.0 - center.y,
    );
    Affine::rotate_about(angle.radians(), center).then_translate(recenter)
}

// The original's exact `cos 2θ == 0` test is unsatisfiable in floating
// point; anything this close to the diagonal is routed into the stable
// closed form instead.
const DIAGONAL_EPSILON: f64 = 1e-9;

/// The unrotated size whose rotated bounding box best fills `rotated`.
///
/// This is the inverse problem of [`bounding_size`]: given the space the
/// host allocated, find the size to give the embedded control. The optional
/// `current_width`/`current_height` pin a dimension (and through it an
/// aspect ratio); when both are `None` the rectangle is recovered from the
/// bounding box alone.
pub fn unrotated_size(
    rotated: Size,
    angle: Angle,
    current_width: Option<f64>,
    current_height: Option<f64>,
) -> Size {
    // Aspect ratio implied by the pinned dimensions. An infinite ratio means
    // only the width is pinned, a zero ratio only the height.
    let ratio = match (current_width, current_height) {
        (Some(w), Some(h)) if h != 0.0 => Some(w / h),
        (Some(_), _) => Some(f64::INFINITY),
        (None, Some(_)) => Some(0.0),
        (None, None) => None,
    };

    if angle.is_axis_aligned() {
        // At quarter turns the roles of width and height swap; after the
        // swap both axis-aligned cases read the same.
        let (rw, rh) = if angle.is_quarter_turn() {
            (rotated.height, rotated.width)
        } else {
            (rotated.width, rotated.height)
        };
        return match ratio {
            None => Size::new(rw, rh),
            Some(r) if r.is_infinite() => Size::new(current_width.unwrap_or(rw), rh),
            Some(r) if r == 0.0 => Size::new(rw, current_height.unwrap_or(rh)),
            Some(r) => {
                let w = rw.min(rh * r);
                Size::new(w, w / r)
            }
        };
    }

    let sin = angle.abs_sin();
    let cos = angle.abs_cos();
    let cos2 = (2.0 * angle.radians()).cos();

    if cos2.abs() < DIAGONAL_EPSILON {
        // 45° family: both bounding dimensions constrain w + h equally.
        let sum = std::f64::consts::SQRT_2 * rotated.width.min(rotated.height);
        return match ratio {
            None => {
                let side = sum / 2.0;
                Size::new(side, side)
            }
            Some(r) if r.is_infinite() => {
                let w = current_width.unwrap_or(sum / 2.0);
                Size::new(w, sum - w)
            }
            Some(r) if r == 0.0 => {
                let h = current_height.unwrap_or(sum / 2.0);
                Size::new(sum - h, h)
            }
            Some(r) => {
                let h = sum / (r + 1.0);
                Size::new(h * r, h)
            }
        };
    }

    match ratio {
        None => {
            let w = ((rotated.width * cos - rotated.height * sin) / cos2).abs();
            let h = (rotated.height - w * sin).abs() / cos;
            Size::new(w, h)
        }
        Some(r) if r.is_infinite() => {
            let w = current_width.unwrap_or(0.0);
            let h = ((rotated.width - w * cos) / sin).min((rotated.height - w * sin) / cos);
            Size::new(w, h)
        }
        Some(r) if r == 0.0 => {
            let h = current_height.unwrap_or(0.0);
            let w = ((rotated.width - h * sin) / cos).min((rotated.height - h * cos) / sin);
            Size::new(w, h)
        }
        Some(r) => {
            let h = (rotated.width / (r * cos + sin)).min(rotated.height / (r * sin + cos));
            Size::new(h * r, h)
        }
    }
}

// --- MARK: TESTS ---
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use float_cmp::approx_eq;

    use super::*;
    use crate::error::RotationError;

    fn deg(degrees: f64) -> Angle {
        Angle::try_degrees(degrees).unwrap()
    }

    #[test]
    fn angle_normalization() {
        assert_eq!(deg(0.0).degrees(), 0.0);
        assert_eq!(deg(360.0).degrees(), 0.0);
        assert_eq!(deg(-90.0).degrees(), 270.0);
        assert_eq!(deg(725.0).degrees(), 5.0);
        assert_eq!(deg(-360.0).degrees(), 0.0);
    }

    #[test]
    fn angle_rejects_non_finite() {
        assert_matches!(
            Angle::try_degrees(f64::NAN),
            Err(RotationError::DegenerateAngle(_))
        );
        assert_matches!(
            Angle::try_degrees(f64::INFINITY),
            Err(RotationError::DegenerateAngle(_))
        );
        assert_matches!(
            Angle::try_degrees(f64::NEG_INFINITY),
            Err(RotationError::DegenerateAngle(_))
        );
    }

    #[test]
    fn bounding_box_matches_trig_identity() {
        let natural = Size::new(200.0, 50.0);
        for degrees in [13.0, 45.0, 101.5, 180.0, 247.0, 359.9] {
            let angle = deg(degrees);
            let bounds = bounding_size(natural, angle);
            let theta = degrees.to_radians();
            let expected_w = (natural.width * theta.cos()).abs() + (natural.height * theta.sin()).abs();
            let expected_h = (natural.width * theta.sin()).abs() + (natural.height * theta.cos()).abs();
            assert!(
                approx_eq!(f64, bounds.width, expected_w, epsilon = 1e-9),
                "width mismatch at {degrees}°: {} vs {expected_w}",
                bounds.width
            );
            assert!(
                approx_eq!(f64, bounds.height, expected_h, epsilon = 1e-9),
                "height mismatch at {degrees}°: {} vs {expected_h}",
                bounds.height
            );
        }
    }

    #[test]
    fn bounding_box_is_exact_at_quarter_turns() {
        let natural = Size::new(200.0, 50.0);
        assert_eq!(bounding_size(natural, deg(0.0)), Size::new(200.0, 50.0));
        assert_eq!(bounding_size(natural, deg(90.0)), Size::new(50.0, 200.0));
        assert_eq!(bounding_size(natural, deg(180.0)), Size::new(200.0, 50.0));
        assert_eq!(bounding_size(natural, deg(270.0)), Size::new(50.0, 200.0));
    }

    #[test]
    fn bounding_box_of_square_at_45_degrees() {
        let bounds = bounding_size(Size::new(100.0, 100.0), deg(45.0));
        assert!(
            (bounds.width - 141.42).abs() < 0.5,
            "got width {}",
            bounds.width
        );
        assert!(
            (bounds.height - 141.42).abs() < 0.5,
            "got height {}",
            bounds.height
        );
    }

    #[test]
    fn zero_rotation_is_identity() {
        let natural = Size::new(120.0, 40.0);
        assert_eq!(
            rotation_transform(natural, deg(0.0)).as_coeffs(),
            Affine::IDENTITY.as_coeffs()
        );
        // 360 normalizes to 0 and must produce the same transform.
        assert_eq!(
            rotation_transform(natural, deg(360.0)).as_coeffs(),
            rotation_transform(natural, deg(0.0)).as_coeffs()
        );
    }

    #[test]
    fn transform_is_idempotent() {
        let natural = Size::new(200.0, 50.0);
        for degrees in [0.0, 33.0, 90.0, 270.0, 312.5] {
            let a = rotation_transform(natural, deg(degrees));
            let b = rotation_transform(natural, deg(degrees));
            assert_eq!(a.as_coeffs(), b.as_coeffs(), "drift at {degrees}°");
        }
    }

    #[test]
    fn negative_angle_wraps_to_same_transform() {
        let natural = Size::new(200.0, 50.0);
        assert_eq!(
            rotation_transform(natural, deg(-90.0)).as_coeffs(),
            rotation_transform(natural, deg(270.0)).as_coeffs()
        );
    }

    #[test]
    fn transform_maps_natural_rect_onto_bounding_box() {
        let natural = Size::new(200.0, 50.0);
        for degrees in [0.0, 30.0, 90.0, 145.0, 270.0] {
            let angle = deg(degrees);
            let bbox = rotation_transform(natural, angle).transform_rect_bbox(natural.to_rect());
            let bounds = bounding_size(natural, angle);
            assert!(
                approx_eq!(f64, bbox.x0, 0.0, epsilon = 1e-9)
                    && approx_eq!(f64, bbox.y0, 0.0, epsilon = 1e-9),
                "bounding box origin not at zero for {degrees}°: {bbox:?}"
            );
            assert!(
                approx_eq!(f64, bbox.width(), bounds.width, epsilon = 1e-9)
                    && approx_eq!(f64, bbox.height(), bounds.height, epsilon = 1e-9),
                "bounding box size mismatch for {degrees}°: {bbox:?} vs {bounds:?}"
            );
        }
    }

    #[test]
    fn unrotated_size_inverts_bounding_size() {
        let natural = Size::new(120.0, 80.0);
        for degrees in [0.0, 30.0, 90.0, 160.0, 250.0] {
            let angle = deg(degrees);
            let recovered = unrotated_size(bounding_size(natural, angle), angle, None, None);
            assert!(
                approx_eq!(f64, recovered.width, natural.width, epsilon = 1e-6)
                    && approx_eq!(f64, recovered.height, natural.height, epsilon = 1e-6),
                "failed to invert at {degrees}°: {recovered:?}"
            );
        }
    }

    #[test]
    fn unrotated_size_on_diagonal_assumes_square() {
        let size = unrotated_size(Size::new(141.0, 141.0), deg(45.0), None, None);
        assert!(
            approx_eq!(f64, size.width, size.height, epsilon = 1e-9),
            "expected a square, got {size:?}"
        );
        let bounds = bounding_size(size, deg(45.0));
        assert!(
            approx_eq!(f64, bounds.width, 141.0, epsilon = 1e-6),
            "square does not fill the box: {bounds:?}"
        );
    }

    #[test]
    fn unrotated_size_keeps_pinned_ratio() {
        // Ratio 2:1 content fitted into a rotated allocation.
        let size = unrotated_size(Size::new(300.0, 200.0), deg(30.0), Some(100.0), Some(50.0));
        assert!(
            approx_eq!(f64, size.width, 2.0 * size.height, epsilon = 1e-9),
            "ratio lost: {size:?}"
        );
        let bounds = bounding_size(size, deg(30.0));
        assert!(
            bounds.width <= 300.0 + 1e-9 && bounds.height <= 200.0 + 1e-9,
            "content overflows allocation: {bounds:?}"
        );
    }

    #[test]
    fn unrotated_size_respects_pinned_width() {
        let size = unrotated_size(Size::new(100.0, 400.0), deg(90.0), Some(70.0), None);
        assert_eq!(size.width, 70.0);
        // Quarter turn: the unrotated height fills the allocated width.
        assert_eq!(size.height, 100.0);
    }
}
