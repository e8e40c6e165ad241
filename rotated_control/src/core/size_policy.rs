// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

use bitflags::bitflags;

bitflags! {
    /// The primitive capabilities a [`SizePolicy`] is composed of.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PolicyFlags: u8 {
        /// The control can grow beyond its size hint if needed.
        const GROW = 1;
        /// The control wants as much space as it can get.
        const EXPAND = 2;
        /// The control can shrink below its size hint if needed.
        const SHRINK = 4;
        /// The size hint is ignored entirely.
        const IGNORE = 8;
    }
}

/// How a control prefers to grow or shrink along one axis within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePolicy {
    /// The size hint is the only acceptable size.
    Fixed,
    /// The size hint is a minimum; growing is fine.
    Minimum,
    /// The size hint is a maximum; shrinking is fine.
    Maximum,
    /// The size hint is best, but deviating either way is fine.
    Preferred,
    /// Like [`Minimum`](Self::Minimum), but actively wants extra space.
    MinimumExpanding,
    /// Can shrink or grow, and actively wants extra space.
    Expanding,
    /// The size hint carries no information at all.
    Ignored,
}

// Promotion ladder used by `combine`, least to most flexible.
const LADDER: [SizePolicy; 7] = [
    SizePolicy::Fixed,
    SizePolicy::Minimum,
    SizePolicy::MinimumExpanding,
    SizePolicy::Maximum,
    SizePolicy::Preferred,
    SizePolicy::Expanding,
    SizePolicy::Ignored,
];

impl SizePolicy {
    /// The flag set this policy is composed of.
    pub const fn flags(self) -> PolicyFlags {
        match self {
            Self::Fixed => PolicyFlags::empty(),
            Self::Minimum => PolicyFlags::GROW,
            Self::Maximum => PolicyFlags::SHRINK,
            Self::Preferred => PolicyFlags::GROW.union(PolicyFlags::SHRINK),
            Self::MinimumExpanding => PolicyFlags::GROW.union(PolicyFlags::EXPAND),
            Self::Expanding => PolicyFlags::GROW
                .union(PolicyFlags::SHRINK)
                .union(PolicyFlags::EXPAND),
            Self::Ignored => PolicyFlags::GROW
                .union(PolicyFlags::SHRINK)
                .union(PolicyFlags::IGNORE),
        }
    }

    /// Whether the hint is a hard lower bound.
    pub const fn pins_minimum(self) -> bool {
        matches!(self, Self::Minimum | Self::MinimumExpanding)
    }

    /// Combine two per-axis policies into one covering both.
    ///
    /// The flag sets are OR-ed together, then promoted to the first policy
    /// on the ladder at least as flexible as the union. Used when an oblique
    /// angle mixes what used to be horizontal and vertical behavior.
    pub fn combine(a: Self, b: Self) -> Self {
        let combined = a.flags().union(b.flags());
        LADDER
            .into_iter()
            .find(|policy| combined.bits() <= policy.flags().bits())
            .unwrap_or(Self::Ignored)
    }
}

/// A horizontal/vertical pair of [`SizePolicy`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicies {
    /// Policy along the x axis.
    pub horizontal: SizePolicy,
    /// Policy along the y axis.
    pub vertical: SizePolicy,
}

impl SizePolicies {
    /// A pair from explicit per-axis policies.
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The same policy on both axes.
    pub const fn splat(policy: SizePolicy) -> Self {
        Self::new(policy, policy)
    }

    /// The pair with the axes swapped.
    ///
    /// A quarter turn converts horizontal stretch capability into vertical
    /// stretch capability and vice versa.
    pub const fn transposed(self) -> Self {
        Self::new(self.vertical, self.horizontal)
    }

    /// Both axes combined into a single policy.
    pub fn combined(self) -> SizePolicy {
        SizePolicy::combine(self.horizontal, self.vertical)
    }
}
