// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use kurbo::{Affine, Point, Rect};

use crate::core::Control;
use crate::error::RotationError;

/// A native control embedded as a positionable, transformable item.
///
/// The item exclusively owns the control; the host toolkit's tree keeps at
/// most a non-owning back-reference for event routing. Embedding changes
/// nothing about the control itself — no enabled/visible/focus state is
/// touched, and input events keep flowing through
/// [`pointer_event`](Self::pointer_event).
pub struct ProxyItem {
    control: Box<dyn Control>,
    /// Unrotated placement rectangle of the control within the canvas.
    geometry: Rect,
    transform: Affine,
}

impl ProxyItem {
    /// Take ownership of `control` and make it addressable as an item.
    ///
    /// Fails with [`RotationError::InvalidControl`] if no control is
    /// supplied or the control cannot be reparented.
    pub fn embed(control: Option<Box<dyn Control>>) -> Result<Self, RotationError> {
        let control = control.ok_or(RotationError::InvalidControl("no control supplied"))?;
        if !control.can_reparent() {
            return Err(RotationError::InvalidControl(
                "control is already embedded elsewhere",
            ));
        }
        let geometry = control.size().to_rect();
        Ok(Self {
            control,
            geometry,
            transform: Affine::IDENTITY,
        })
    }

    /// The item's unrotated placement rectangle.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Place the item at `rect` and resize the control to fill it.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
        self.control.set_geometry(rect);
    }

    /// The transform currently applied to the item.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub(crate) fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Shared access to the embedded control.
    pub fn control(&self) -> &dyn Control {
        self.control.as_ref()
    }

    pub(crate) fn control_mut(&mut self) -> &mut dyn Control {
        self.control.as_mut()
    }

    /// Deliver a pointer event at `local`, a point already mapped into the
    /// item's unrotated coordinate space.
    ///
    /// Returns whether the point hit the item. Points outside the placement
    /// rectangle are not delivered.
    pub fn pointer_event(&mut self, local: Point) -> bool {
        if !self.geometry.contains(local) {
            return false;
        }
        let control_local = local - self.geometry.origin().to_vec2();
        self.control.pointer_event(control_local);
        true
    }

    /// Release the control back to the caller.
    pub fn into_control(self) -> Box<dyn Control> {
        self.control
    }
}

impl fmt::Debug for ProxyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyItem")
            .field("geometry", &self.geometry)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}
