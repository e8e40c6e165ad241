// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use kurbo::{Affine, Point, Size};
use tracing::debug;

use crate::core::ProxyItem;
use crate::geometry::{self, Angle};

/// A minimal, borderless canvas holding one rotated [`ProxyItem`].
///
/// The canvas is always exactly as large as the rotated content's bounding
/// box; it is derived state and cannot be set independently. The rotation
/// transform is recomputed from scratch on every change, so applying the
/// same angle twice yields byte-identical transform parameters.
pub struct RotationHost {
    item: ProxyItem,
    angle: Angle,
    canvas: Size,
}

impl RotationHost {
    /// Wrap `item` in a canvas rotated by `angle`.
    pub fn new(item: ProxyItem, angle: Angle) -> Self {
        let mut host = Self {
            item,
            angle,
            canvas: Size::ZERO,
        };
        host.apply_transform();
        host
    }

    /// The current rotation angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Rotate the item to `angle` and resize the canvas to match.
    pub fn set_angle(&mut self, angle: Angle) {
        if angle != self.angle {
            debug!(
                from = self.angle.degrees(),
                to = angle.degrees(),
                "rotation angle changed"
            );
        }
        self.angle = angle;
        self.apply_transform();
    }

    /// Recompute the transform and canvas size from the item's current
    /// unrotated geometry.
    pub(crate) fn apply_transform(&mut self) {
        let natural = self.item.geometry().size();
        self.canvas = geometry::bounding_size(natural, self.angle);
        self.item
            .set_transform(geometry::rotation_transform(natural, self.angle));
    }

    /// The canvas size, equal to the rotated content's bounding box.
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// The transform applied to the item.
    pub fn transform(&self) -> Affine {
        self.item.transform()
    }

    /// Map a point in canvas coordinates into the item's unrotated
    /// coordinate space.
    pub fn map_to_item(&self, canvas_point: Point) -> Point {
        self.item.transform().inverse() * canvas_point
    }

    /// Route a pointer event at a canvas-space point to the embedded
    /// control. Returns whether the rotated content was hit.
    pub fn pointer_event(&mut self, canvas_point: Point) -> bool {
        let local = self.map_to_item(canvas_point);
        self.item.pointer_event(local)
    }

    /// The embedded item.
    pub fn item(&self) -> &ProxyItem {
        &self.item
    }

    pub(crate) fn item_mut(&mut self) -> &mut ProxyItem {
        &mut self.item
    }

    pub(crate) fn into_item(self) -> ProxyItem {
        self.item
    }
}

impl fmt::Debug for RotationHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationHost")
            .field("angle", &self.angle)
            .field("canvas", &self.canvas)
            .field("item", &self.item)
            .finish()
    }
}

// --- MARK: TESTS ---
#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use kurbo::Rect;

    use super::*;
    use crate::testing::{Record, TestControl};

    fn host_with(natural: Size, degrees: f64) -> RotationHost {
        let item = ProxyItem::embed(Some(Box::new(TestControl::new(natural)))).unwrap();
        RotationHost::new(item, Angle::try_degrees(degrees).unwrap())
    }

    #[test]
    fn canvas_tracks_exact_swap_at_quarter_turn() {
        let host = host_with(Size::new(200.0, 50.0), 90.0);
        assert_eq!(host.canvas_size(), Size::new(50.0, 200.0));
    }

    #[test]
    fn set_angle_is_idempotent() {
        let mut host = host_with(Size::new(200.0, 50.0), 30.0);
        let first = host.transform().as_coeffs();
        host.set_angle(Angle::try_degrees(30.0).unwrap());
        assert_eq!(host.transform().as_coeffs(), first);
        assert_eq!(
            host.canvas_size(),
            geometry::bounding_size(Size::new(200.0, 50.0), Angle::try_degrees(30.0).unwrap())
        );
    }

    #[test]
    fn canvas_follows_item_geometry() {
        let mut host = host_with(Size::new(200.0, 50.0), 270.0);
        host.item_mut()
            .set_geometry(Rect::new(0.0, 0.0, 100.0, 30.0));
        host.apply_transform();
        assert_eq!(host.canvas_size(), Size::new(30.0, 100.0));
    }

    #[test]
    fn map_to_item_inverts_the_rotation() {
        let host = host_with(Size::new(200.0, 50.0), 90.0);
        // The canvas center always maps back to the item center.
        let mapped = host.map_to_item(Point::new(25.0, 100.0));
        assert!(
            approx_eq!(f64, mapped.x, 100.0, epsilon = 1e-9)
                && approx_eq!(f64, mapped.y, 25.0, epsilon = 1e-9),
            "center did not map back: {mapped:?}"
        );
    }

    #[test]
    fn pointer_events_are_routed_through_the_inverse_transform() {
        let control = TestControl::new(Size::new(200.0, 50.0));
        let recording = control.recording();
        let item = ProxyItem::embed(Some(Box::new(control))).unwrap();
        let mut host = RotationHost::new(item, Angle::try_degrees(90.0).unwrap());

        assert!(
            host.pointer_event(Point::new(25.0, 100.0)),
            "canvas center must hit the rotated content"
        );
        match recording.drain().as_slice() {
            [Record::Pointer(p)] => {
                assert!(
                    approx_eq!(f64, p.x, 100.0, epsilon = 1e-9)
                        && approx_eq!(f64, p.y, 25.0, epsilon = 1e-9),
                    "wrong local point: {p:?}"
                );
            }
            other => panic!("expected one pointer record, got {other:?}"),
        }
    }
}
