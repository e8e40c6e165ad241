// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! The user-facing composite control.

use std::fmt;

use kurbo::{Affine, Point, Rect, Size};
use tracing::debug;

use crate::core::{
    Control, LayoutParticipant, LayoutSpec, ProxyItem, ResizeSync, RotationHost, SizeNegotiator,
    SizePolicies,
};
use crate::error::RotationError;
use crate::geometry::Angle;

/// The options a [`RotatedControl`] is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationOptions {
    /// Rotation in degrees; any finite value, normalized modulo 360.
    pub angle: f64,
    /// Whether content keeps its natural aspect ratio inside the rotated
    /// bounding box.
    pub preserve_aspect_ratio: bool,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            angle: 270.0,
            preserve_aspect_ratio: false,
        }
    }
}

/// Lifecycle of a composite. `Destroyed` is represented by `Drop`, and an
/// uninitialized state is unrepresentable because construction is atomic.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Embedded,
    LaidOut,
}

/// An interactive UI control displayed rotated by an arbitrary angle, as a
/// drop-in replacement for the original control.
///
/// The composite exclusively owns the wrapped control. Rotation is a
/// presentation-layer transform: the control's internal layout always sees
/// its natural, unrotated size, while the parent layout system sees the
/// rotated bounding box through [`LayoutParticipant`].
///
/// Every mutation — [`set_angle`](Self::set_angle),
/// [`set_preserve_aspect_ratio`](Self::set_preserve_aspect_ratio),
/// [`set_bounds`](Self::set_bounds), [`edit_control`](Self::edit_control) —
/// synchronously recomputes the canvas size, transform and size hint before
/// returning; no partially-applied state is observable from outside a call.
pub struct RotatedControl {
    host: RotationHost,
    negotiator: SizeNegotiator,
    sync: ResizeSync,
    layout_spec: LayoutSpec,
    bounds: Rect,
    last_hint: Size,
    stage: Stage,
    relayout: Option<Box<dyn FnMut(Size)>>,
}

impl RotatedControl {
    /// Wrap `control`, rotated by `angle` degrees.
    ///
    /// `control` must be present and reparentable, otherwise this fails
    /// with [`RotationError::InvalidControl`]; a non-finite angle fails
    /// with [`RotationError::DegenerateAngle`]. Negative angles wrap, so
    /// `-90` is the same as `270`.
    pub fn new(control: Option<Box<dyn Control>>, angle: f64) -> Result<Self, RotationError> {
        Self::with_options(
            control,
            RotationOptions {
                angle,
                ..RotationOptions::default()
            },
        )
    }

    /// Wrap `control` with explicit [`RotationOptions`].
    pub fn with_options(
        control: Option<Box<dyn Control>>,
        options: RotationOptions,
    ) -> Result<Self, RotationError> {
        let angle = Angle::try_degrees(options.angle)?;
        let item = ProxyItem::embed(control)?;
        let host = RotationHost::new(item, angle);
        let negotiator = SizeNegotiator::new(angle, options.preserve_aspect_ratio);
        let layout_spec = negotiator.negotiate(host.item().control());
        let last_hint = negotiator.size_hint(host.item().control());
        let bounds = host.canvas_size().to_rect();
        debug!(angle = angle.degrees(), "control embedded");
        Ok(Self {
            host,
            negotiator,
            sync: ResizeSync::new(),
            layout_spec,
            bounds,
            last_hint,
            stage: Stage::Embedded,
            relayout: None,
        })
    }

    /// The normalized rotation angle in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.host.angle().degrees()
    }

    /// Rotate to `degrees` and resynchronize.
    ///
    /// Setting the already-current normalized angle produces byte-identical
    /// transform parameters.
    pub fn set_angle(&mut self, degrees: f64) -> Result<(), RotationError> {
        let angle = Angle::try_degrees(degrees)?;
        self.negotiator.set_angle(angle);
        self.host.set_angle(angle);
        self.sync.invalidate();
        self.resync();
        Ok(())
    }

    /// Whether content keeps its natural aspect ratio.
    pub fn preserve_aspect_ratio(&self) -> bool {
        self.negotiator.preserve_aspect_ratio()
    }

    /// Toggle aspect-ratio preservation and resynchronize.
    ///
    /// Only content scaling and placement inside the bounding box change;
    /// [`size_hint`](Self::size_hint) is unaffected.
    pub fn set_preserve_aspect_ratio(&mut self, preserve: bool) {
        self.negotiator.set_preserve_aspect_ratio(preserve);
        self.sync.invalidate();
        self.resync();
    }

    /// The size the parent layout should reserve: the rotated bounding box
    /// of the control's natural size.
    pub fn size_hint(&self) -> Size {
        self.negotiator.size_hint(self.host.item().control())
    }

    /// Re-derive the composite's size policies and limits from the
    /// control's own size policy.
    ///
    /// Call after construction and after any change to the control's own
    /// policy. At 90° and 270° the horizontal and vertical components swap.
    pub fn update_size_policy(&mut self) {
        self.layout_spec = self.negotiator.negotiate(self.host.item().control());
    }

    /// The most recently derived layout spec.
    pub fn layout_spec(&self) -> LayoutSpec {
        self.layout_spec
    }

    /// The smallest axis-aligned box containing the rotated control.
    pub fn bounding_size(&self) -> Size {
        self.host.canvas_size()
    }

    /// The transform applied to the embedded item: rotation about the
    /// natural rectangle's center, re-centered into the bounding box.
    pub fn transform(&self) -> Affine {
        self.host.transform()
    }

    /// Shared access to the wrapped control.
    pub fn control(&self) -> &dyn Control {
        self.host.item().control()
    }

    /// Mutate the wrapped control, then resynchronize all derived geometry.
    pub fn edit_control(&mut self, f: impl FnOnce(&mut dyn Control)) {
        f(self.host.item_mut().control_mut());
        self.sync.invalidate();
        self.resync();
    }

    /// Route a pointer event at a point in the composite's (rotated)
    /// coordinate space to the control. Returns whether the content was
    /// hit.
    pub fn pointer_event(&mut self, point: Point) -> bool {
        self.host.pointer_event(point)
    }

    /// Install a hook invoked with the new hint whenever a recomputation
    /// changes the reported size hint, so the host toolkit can re-run
    /// layout.
    pub fn set_relayout_callback(&mut self, callback: impl FnMut(Size) + 'static) {
        self.relayout = Some(Box::new(callback));
    }

    /// Release the wrapped control back to the caller.
    pub fn into_control(self) -> Box<dyn Control> {
        self.host.into_item().into_control()
    }

    fn resync(&mut self) {
        self.sync
            .synchronize(&mut self.host, &self.negotiator, self.bounds);
        self.update_size_policy();
        let hint = self.size_hint();
        if hint != self.last_hint {
            self.last_hint = hint;
            if let Some(callback) = self.relayout.as_mut() {
                callback(hint);
            }
        }
    }
}

impl LayoutParticipant for RotatedControl {
    fn size_hint(&self) -> Size {
        Self::size_hint(self)
    }

    fn size_policies(&self) -> SizePolicies {
        self.layout_spec.policies
    }

    fn min_size(&self) -> Size {
        self.layout_spec.min
    }

    fn max_size(&self) -> Size {
        self.layout_spec.max
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if self.stage == Stage::Embedded {
            debug!(bounds = ?bounds, "first layout");
            self.stage = Stage::LaidOut;
        }
        self.resync();
    }
}

impl fmt::Debug for RotatedControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatedControl")
            .field("host", &self.host)
            .field("negotiator", &self.negotiator)
            .field("layout_spec", &self.layout_spec)
            .field("bounds", &self.bounds)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}
