// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! Display an interactive UI control rotated by an arbitrary angle while
//! keeping it fully functional: it still receives input events correctly,
//! still reports a usable size to its parent's layout engine, and can
//! optionally preserve its original aspect ratio inside the rotated
//! bounding box.
//!
//! The crate is toolkit-agnostic. The host GUI toolkit's event loop, input
//! dispatch and render pipeline are consumed as black-box services: any
//! concrete control type that implements [`Control`][core::Control] can be
//! wrapped, and the wrapper itself participates in the surrounding layout
//! system through [`LayoutParticipant`][core::LayoutParticipant].
//!
//! The entry point is [`RotatedControl`]:
//!
//! ```
//! use rotated_control::RotatedControl;
//! use rotated_control::kurbo::Size;
//! use rotated_control::testing::TestControl;
//!
//! let control = TestControl::new(Size::new(200.0, 50.0));
//! let rotated = RotatedControl::new(Some(Box::new(control)), 270.0).unwrap();
//! assert_eq!(rotated.size_hint(), Size::new(50.0, 200.0));
//! ```
//!
//! Internally the wrapper is composed of four parts, in dependency order:
//!
//! - [`ProxyItem`][core::ProxyItem] embeds the native control as a
//!   positionable, transformable item without severing it from the
//!   application's input/focus graph.
//! - [`RotationHost`][core::RotationHost] owns a canvas sized exactly to the
//!   rotated content and maintains the rotation transform.
//! - [`SizeNegotiator`][core::SizeNegotiator] translates the rotated shape's
//!   bounding box into size-hint and size-policy values the surrounding
//!   layout system understands.
//! - `ResizeSync` (internal) re-applies all of the above whenever geometry
//!   changes, converging even when a resize is triggered from within a
//!   resize.
//!
//! All operations are single-threaded, synchronous and bounded; there are no
//! timers and no background work. Logging uses [`tracing`]; no subscriber is
//! installed by the library.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub use kurbo;

pub mod core;
pub mod geometry;
pub mod testing;

mod error;
mod rotated;

pub use error::RotationError;
pub use rotated::{RotatedControl, RotationOptions};
