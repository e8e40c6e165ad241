// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! The geometry-and-embedding building blocks behind
//! [`RotatedControl`](crate::RotatedControl).
//!
//! In dependency order, leaves first: [`ProxyItem`] wraps the native
//! control, [`RotationHost`] maintains the canvas and transform,
//! [`SizeNegotiator`] talks to the surrounding layout system, and the
//! internal resize synchronizer orchestrates the other three.

mod control;
mod host;
mod negotiator;
mod proxy;
mod size_policy;
mod sync;

pub use control::{Control, LayoutParticipant};
pub use host::RotationHost;
pub use negotiator::{LayoutSpec, SizeNegotiator};
pub use proxy::ProxyItem;
pub use size_policy::{PolicyFlags, SizePolicies, SizePolicy};

pub(crate) use sync::ResizeSync;
