// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper controls for writing tests.
//!
//! [`TestControl`] is a configurable fake control that records the calls
//! made to it, so tests can observe exactly what the embedding machinery
//! does to the wrapped control.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};

use crate::core::{Control, SizePolicies, SizePolicy};

/// A recording of one mutating call on a [`TestControl`].
///
/// Size queries are deliberately not recorded; they are expected to happen
/// freely and carry no side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// `set_geometry` was called with this rectangle.
    SetGeometry(Rect),
    /// A pointer event was delivered at this control-local point.
    Pointer(Point),
}

/// A shared queue of [`Record`]s, cloneable so a test can keep reading
/// after handing the control to the composite.
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

impl Recording {
    /// Pop the oldest record, if any.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Take all records accumulated so far.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect()
    }

    /// Whether nothing has been recorded since the last drain.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn push(&self, record: Record) {
        self.0.borrow_mut().push_back(record);
    }
}

/// A fake control with configurable sizes and policies.
///
/// By default it has a given size hint, a current size equal to that hint,
/// [`SizePolicy::Preferred`] on both axes, no minimum, no maximum, and can
/// be reparented.
#[derive(Debug)]
pub struct TestControl {
    hint: Size,
    current: Size,
    policies: SizePolicies,
    min: Size,
    max: Size,
    reparentable: bool,
    recording: Recording,
}

impl TestControl {
    /// A control whose natural size is `hint`.
    pub fn new(hint: Size) -> Self {
        Self {
            hint,
            current: hint,
            policies: SizePolicies::splat(SizePolicy::Preferred),
            min: Size::ZERO,
            max: Size::new(f64::INFINITY, f64::INFINITY),
            reparentable: true,
            recording: Recording::default(),
        }
    }

    /// Set per-axis size policies.
    pub fn with_policies(mut self, horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        self.policies = SizePolicies::new(horizontal, vertical);
        self
    }

    /// Start at a current size different from the hint.
    pub fn with_current_size(mut self, current: Size) -> Self {
        self.current = current;
        self
    }

    /// Set the minimum size.
    pub fn with_min_size(mut self, min: Size) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum size.
    pub fn with_max_size(mut self, max: Size) -> Self {
        self.max = max;
        self
    }

    /// Pretend the control is already owned elsewhere, making embedding
    /// fail.
    pub fn already_embedded(mut self) -> Self {
        self.reparentable = false;
        self
    }

    /// A handle onto this control's recording, valid after the control has
    /// been moved into a composite.
    pub fn recording(&self) -> Recording {
        self.recording.clone()
    }
}

impl Control for TestControl {
    fn size_hint(&self) -> Size {
        self.hint
    }

    fn size(&self) -> Size {
        self.current
    }

    fn size_policies(&self) -> SizePolicies {
        self.policies
    }

    fn min_size(&self) -> Size {
        self.min
    }

    fn max_size(&self) -> Size {
        self.max
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.current = rect.size();
        self.recording.push(Record::SetGeometry(rect));
    }

    fn can_reparent(&self) -> bool {
        self.reparentable
    }

    fn pointer_event(&mut self, local: Point) {
        self.recording.push(Record::Pointer(local));
    }
}
