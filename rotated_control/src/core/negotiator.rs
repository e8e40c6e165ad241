// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::Size;

use crate::core::{Control, SizePolicies, SizePolicy};
use crate::geometry::{self, Angle};

/// Everything the surrounding layout system needs to know about the
/// composite: policies, size limits and pinned dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    /// Per-axis grow/shrink preferences, already adjusted for the angle.
    pub policies: SizePolicies,
    /// Lower size limit.
    pub min: Size,
    /// Upper size limit.
    pub max: Size,
    /// A hard width, present when the relevant control policy is
    /// [`SizePolicy::Fixed`].
    pub fixed_width: Option<f64>,
    /// A hard height, present when the relevant control policy is
    /// [`SizePolicy::Fixed`].
    pub fixed_height: Option<f64>,
}

/// Computes the size the surrounding layout system should reserve for the
/// rotated composite, and the size the embedded content should be given in
/// return.
///
/// The negotiator is pure: it holds only the angle and the aspect-ratio
/// flag, and reads everything else fresh from the control on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeNegotiator {
    angle: Angle,
    preserve_aspect_ratio: bool,
}

impl SizeNegotiator {
    /// A negotiator for the given angle and aspect-ratio flag.
    pub fn new(angle: Angle, preserve_aspect_ratio: bool) -> Self {
        Self {
            angle,
            preserve_aspect_ratio,
        }
    }

    /// The current angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Replace the angle; derived values are recomputed on the next query.
    pub fn set_angle(&mut self, angle: Angle) {
        self.angle = angle;
    }

    /// Whether content keeps its natural aspect ratio inside the canvas.
    pub fn preserve_aspect_ratio(&self) -> bool {
        self.preserve_aspect_ratio
    }

    /// Toggle aspect-ratio preservation.
    ///
    /// This only changes how content is scaled and centered inside the
    /// bounding box, never how big the composite claims to be.
    pub fn set_preserve_aspect_ratio(&mut self, preserve: bool) {
        self.preserve_aspect_ratio = preserve;
    }

    /// The rotated bounding box of `natural` at the current angle.
    pub fn bounding_size(&self, natural: Size) -> Size {
        geometry::bounding_size(natural, self.angle)
    }

    /// The size hint reported to the parent layout in place of the
    /// control's own hint: the rotated bounding box of the control's
    /// natural size, rounded to host granularity.
    ///
    /// Deliberately independent of the aspect-ratio flag, so that toggling
    /// it never changes layout negotiation.
    pub fn size_hint(&self, control: &dyn Control) -> Size {
        self.bounding_size(control.size_hint()).round()
    }

    /// Derive the composite's layout spec from the control's own policies
    /// and limits.
    ///
    /// At quarter turns every horizontal component swaps with its vertical
    /// counterpart; at half turns everything passes through unchanged; at
    /// oblique angles the two axes can no longer be told apart, so both get
    /// the combined policy and rotated limits.
    pub fn negotiate(&self, control: &dyn Control) -> LayoutSpec {
        let policies = control.size_policies();
        let rotated = self.bounding_size(control.size()).round();

        let mut spec = if self.angle.is_half_turn() {
            LayoutSpec {
                policies,
                min: control.min_size(),
                max: control.max_size(),
                fixed_width: (policies.horizontal == SizePolicy::Fixed).then_some(rotated.width),
                fixed_height: (policies.vertical == SizePolicy::Fixed).then_some(rotated.height),
            }
        } else if self.angle.is_quarter_turn() {
            let min = control.min_size();
            let max = control.max_size();
            LayoutSpec {
                policies: policies.transposed(),
                min: Size::new(min.height, min.width),
                max: Size::new(max.height, max.width),
                // What used to be a fixed height is now a fixed width.
                fixed_width: (policies.vertical == SizePolicy::Fixed).then_some(rotated.width),
                fixed_height: (policies.horizontal == SizePolicy::Fixed).then_some(rotated.height),
            }
        } else {
            LayoutSpec {
                policies: SizePolicies::splat(policies.combined()),
                min: self.bounding_size(control.min_size()).round(),
                max: self.bounding_size(control.max_size()).round(),
                fixed_width: None,
                fixed_height: None,
            }
        };

        // A minimum-flavored policy must reserve at least the rotated
        // footprint; a maximum-flavored one must not exceed it.
        if spec.policies.horizontal.pins_minimum() {
            spec.min.width = spec.min.width.max(rotated.width);
        } else if spec.policies.horizontal == SizePolicy::Maximum {
            spec.max.width = spec.max.width.min(rotated.width);
        }
        if spec.policies.vertical.pins_minimum() {
            spec.min.height = spec.min.height.max(rotated.height);
        } else if spec.policies.vertical == SizePolicy::Maximum {
            spec.max.height = spec.max.height.min(rotated.height);
        }

        spec
    }

    /// The unrotated size the embedded control should be laid out at when
    /// the host allocates `host_size` to the composite.
    ///
    /// Constant-size policies keep the control at its current or preferred
    /// size; otherwise the allocation is mapped back through the inverse
    /// bounding-box problem, pinning dimensions according to the policies
    /// and the aspect-ratio flag, and finally clamped against the hint for
    /// minimum/maximum-flavored policies.
    pub fn content_size(&self, control: &dyn Control, host_size: Size) -> Size {
        let policies = control.size_policies();
        // With aspect preservation every dimension is pinned, so the
        // current size always participates.
        let free_axes_unpinned = !self.preserve_aspect_ratio;

        let current_width = if policies.horizontal == SizePolicy::Preferred {
            Some(control.size_hint().width)
        } else if policies.horizontal == SizePolicy::Fixed || !free_axes_unpinned {
            Some(control.size().width)
        } else {
            None
        };
        let current_height = if policies.vertical == SizePolicy::Preferred {
            Some(control.size_hint().height)
        } else if policies.vertical == SizePolicy::Fixed || !free_axes_unpinned {
            Some(control.size().height)
        } else {
            None
        };

        let constant_width = matches!(
            policies.horizontal,
            SizePolicy::Fixed | SizePolicy::Preferred
        );
        let constant_height = matches!(
            policies.vertical,
            SizePolicy::Fixed | SizePolicy::Preferred
        );

        if (constant_width && constant_height)
            || ((constant_width || constant_height) && self.preserve_aspect_ratio)
        {
            // Both dimensions are pinned in these branches.
            return Size::new(
                current_width.unwrap_or_default(),
                current_height.unwrap_or_default(),
            );
        }

        let mut size = geometry::unrotated_size(host_size, self.angle, current_width, current_height);

        let hint = control.size_hint();
        if policies.horizontal.pins_minimum() {
            size.width = size.width.max(hint.width);
        } else if policies.horizontal == SizePolicy::Maximum {
            size.width = size.width.min(hint.width);
        }
        if policies.vertical.pins_minimum() {
            size.height = size.height.max(hint.height);
        } else if policies.vertical == SizePolicy::Maximum {
            size.height = size.height.min(hint.height);
        }
        size
    }
}
