// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Size};

use crate::core::{SizePolicies, SizePolicy};

/// A native UI control that can be embedded and rotated.
///
/// This is the capability seam towards the host toolkit: any concrete
/// control type that has a natural size, can be reparented, and can receive
/// input events is a valid argument to
/// [`RotatedControl::new`](crate::RotatedControl::new). Implementations are
/// expected to be cheap to query; sizes are re-read on every
/// resynchronization rather than cached here.
pub trait Control {
    /// The control's preferred, unrotated size as reported to a layout
    /// system.
    fn size_hint(&self) -> Size;

    /// The control's current laid-out size.
    ///
    /// Defaults to [`size_hint`](Self::size_hint) for controls that don't
    /// track a separate current size.
    fn size(&self) -> Size {
        self.size_hint()
    }

    /// How the control prefers to grow or shrink along each axis.
    fn size_policies(&self) -> SizePolicies {
        SizePolicies::splat(SizePolicy::Preferred)
    }

    /// The smallest size the control can be laid out at.
    fn min_size(&self) -> Size {
        Size::ZERO
    }

    /// The largest size the control can be laid out at.
    fn max_size(&self) -> Size {
        Size::new(f64::INFINITY, f64::INFINITY)
    }

    /// Resize and reposition the control to fill `rect` in its own,
    /// unrotated coordinate space.
    ///
    /// The control's internal layout always sees this natural, unrotated
    /// geometry; rotation happens outside its coordinate space.
    fn set_geometry(&mut self, rect: Rect);

    /// Whether the control can be moved into a new owner.
    ///
    /// Returning `false` (e.g. because the control is already embedded
    /// elsewhere) makes embedding fail with
    /// [`RotationError::InvalidControl`](crate::RotationError::InvalidControl).
    fn can_reparent(&self) -> bool {
        true
    }

    /// An input event at `local`, a point in the control's own unrotated
    /// coordinate space.
    fn pointer_event(&mut self, local: Point) {
        let _ = local;
    }
}

/// The layout-facing surface of a composite control.
///
/// The surrounding layout system queries the hint, policies and size limits
/// whenever it needs to allocate space, and assigns the result through
/// [`set_bounds`](Self::set_bounds) — the single reactive entry point from
/// the host toolkit into this crate.
pub trait LayoutParticipant {
    /// The size the parent layout should reserve.
    fn size_hint(&self) -> Size;

    /// Grow/shrink preferences per axis.
    fn size_policies(&self) -> SizePolicies;

    /// Lower size limit.
    fn min_size(&self) -> Size;

    /// Upper size limit.
    fn max_size(&self) -> Size;

    /// The host layout assigned `bounds`; resynchronize all derived
    /// geometry before returning.
    fn set_bounds(&mut self, bounds: Rect);
}
