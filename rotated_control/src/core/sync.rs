// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Size};
use tracing::{trace_span, warn};

use crate::core::{RotationHost, SizeNegotiator};

// Convergence bound. One pass applies the geometry, a second picks up any
// size change that application itself caused, a third observes a fixed
// point. Anything beyond that is a misbehaving control.
const MAX_SYNC_PASSES: usize = 4;

/// Everything a synchronization pass depends on. Two passes with equal
/// fingerprints are guaranteed to produce identical output, which is what
/// makes re-entrant resizes converge instead of looping.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SyncInputs {
    bounds: Rect,
    angle: f64,
    preserve_aspect_ratio: bool,
    hint: Size,
    current: Size,
}

/// Propagates geometry changes: whenever the host-visible bounds, the
/// angle, the aspect flag or the control's natural size change, the item
/// geometry, transform and canvas size are recomputed and re-applied.
#[derive(Debug, Default)]
pub(crate) struct ResizeSync {
    in_flight: bool,
    applied: Option<SyncInputs>,
}

impl ResizeSync {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Forget the last applied state, forcing the next pass to re-apply.
    pub(crate) fn invalidate(&mut self) {
        self.applied = None;
    }

    /// Bring item geometry, transform and canvas size in line with
    /// `bounds` and the negotiator's current settings.
    ///
    /// Re-entrancy safe: a pass triggered from within a pass is dropped
    /// (the outer pass re-reads the inputs it would have seen), and a pass
    /// whose inputs match the last applied state is a no-op.
    pub(crate) fn synchronize(
        &mut self,
        host: &mut RotationHost,
        negotiator: &SizeNegotiator,
        bounds: Rect,
    ) {
        if self.in_flight {
            return;
        }
        self.in_flight = true;
        let _span = trace_span!("synchronize").entered();

        let mut converged = false;
        for _ in 0..MAX_SYNC_PASSES {
            let inputs = fingerprint(host, negotiator, bounds);
            if self.applied == Some(inputs) {
                converged = true;
                break;
            }
            let content = negotiator.content_size(host.item().control(), bounds.size());
            host.item_mut()
                .set_geometry(Rect::from_origin_size(Point::ORIGIN, content));
            host.apply_transform();
            self.applied = Some(inputs);
        }
        if !converged {
            warn!("geometry did not settle after {MAX_SYNC_PASSES} passes");
        }

        self.in_flight = false;
    }
}

fn fingerprint(host: &RotationHost, negotiator: &SizeNegotiator, bounds: Rect) -> SyncInputs {
    let control = host.item().control();
    SyncInputs {
        bounds,
        angle: negotiator.angle().degrees(),
        preserve_aspect_ratio: negotiator.preserve_aspect_ratio(),
        hint: control.size_hint(),
        current: control.size(),
    }
}

// --- MARK: TESTS ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProxyItem;
    use crate::geometry::Angle;
    use crate::testing::{Record, TestControl};

    fn deg(degrees: f64) -> Angle {
        Angle::try_degrees(degrees).unwrap()
    }

    #[test]
    fn synchronize_applies_geometry_then_settles() {
        // The control starts at a stale current size, so the first pass
        // changes what the second pass reads; the second re-applies and the
        // third observes the fixed point.
        let control =
            TestControl::new(Size::new(200.0, 50.0)).with_current_size(Size::new(10.0, 10.0));
        let recording = control.recording();
        let item = ProxyItem::embed(Some(Box::new(control))).unwrap();
        let mut host = RotationHost::new(item, deg(270.0));
        let negotiator = SizeNegotiator::new(deg(270.0), false);
        let mut sync = ResizeSync::new();

        sync.synchronize(&mut host, &negotiator, Rect::new(0.0, 0.0, 50.0, 200.0));

        let expected = Record::SetGeometry(Rect::new(0.0, 0.0, 200.0, 50.0));
        assert_eq!(recording.drain(), vec![expected.clone(), expected]);
        assert_eq!(host.canvas_size(), Size::new(50.0, 200.0));
    }

    #[test]
    fn synchronize_with_unchanged_inputs_is_a_no_op() {
        let control = TestControl::new(Size::new(200.0, 50.0));
        let recording = control.recording();
        let item = ProxyItem::embed(Some(Box::new(control))).unwrap();
        let mut host = RotationHost::new(item, deg(270.0));
        let negotiator = SizeNegotiator::new(deg(270.0), false);
        let mut sync = ResizeSync::new();
        let bounds = Rect::new(0.0, 0.0, 50.0, 200.0);

        sync.synchronize(&mut host, &negotiator, bounds);
        let first = recording.drain();
        assert!(!first.is_empty(), "first pass must apply geometry");

        sync.synchronize(&mut host, &negotiator, bounds);
        assert!(
            recording.is_empty(),
            "second pass with identical inputs must not touch the control"
        );
    }

    #[test]
    fn invalidate_forces_a_reapply() {
        let control = TestControl::new(Size::new(200.0, 50.0));
        let recording = control.recording();
        let item = ProxyItem::embed(Some(Box::new(control))).unwrap();
        let mut host = RotationHost::new(item, deg(270.0));
        let negotiator = SizeNegotiator::new(deg(270.0), false);
        let mut sync = ResizeSync::new();
        let bounds = Rect::new(0.0, 0.0, 50.0, 200.0);

        sync.synchronize(&mut host, &negotiator, bounds);
        recording.drain();

        sync.invalidate();
        sync.synchronize(&mut host, &negotiator, bounds);
        assert!(
            !recording.is_empty(),
            "invalidation must force the geometry to be re-applied"
        );
    }
}
