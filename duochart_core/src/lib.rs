// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-mode core for `duochart`.
//!
//! The core knows nothing about datasets or scales. It provides:
//! - **Marks**: stable-identity visual primitives (rectangles, paths, text) with
//!   constant, fully resolved geometry.
//! - **Scene**: a keyed store of target marks that classifies every change as an
//!   enter, update, or exit diff.
//! - **Timeline**: time-based transitions layered over the scene. A transition
//!   scheduled on a mark replaces any transition already running on it.
//! - **Frame**: a snapshot of what should be on screen at a given instant.
//!
//! Time is a [`core::time::Duration`] on the host's rendering clock. Nothing in this
//! crate reads a clock itself.

#![no_std]

extern crate alloc;

mod easing;
mod frame;
mod mark;
mod scene;
mod timeline;
mod transition;

pub use easing::Easing;
pub use frame::{Frame, RenderedMark};
pub use mark::{
    FontWeight, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload,
    TextAnchor, TextBaseline, TextPayload, TextSpan,
};
pub use scene::{MarkDiff, Scene};
pub use timeline::Timeline;
pub use transition::Transition;
