// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding freshly built marks to the scene, and animating them there.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use duochart_core::{Frame, Mark, MarkDiff, MarkId, MarkPayload, Scene, Timeline, Transition};

use crate::config::Timing;

/// A mark to place, optionally animated in from a starting payload.
#[derive(Clone, Debug)]
pub struct Staged {
    /// The mark at its final state.
    pub mark: Mark,
    /// Where it starts, and how it gets to `mark`.
    pub entrance: Option<(MarkPayload, Timing)>,
}

impl Staged {
    /// A mark that appears at its final state immediately.
    pub fn at_rest(mark: Mark) -> Self {
        Self {
            mark,
            entrance: None,
        }
    }

    /// A mark that animates from `from` to its final state.
    pub fn entering(mark: Mark, from: Mark, timing: Timing) -> Self {
        Self {
            mark,
            entrance: Some((from.payload, timing)),
        }
    }
}

/// What a rebuild did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Marks removed.
    pub exited: usize,
    /// Marks added.
    pub entered: usize,
    /// Added marks that were given an entrance transition.
    pub animated: usize,
}

/// A scene plus the transitions running over it.
///
/// The scene always holds final (target) payloads; the timeline holds how far each
/// mark still has to travel.
#[derive(Clone, Debug, Default)]
pub struct Stage {
    scene: Scene,
    timeline: Timeline,
}

fn timed(from: MarkPayload, to: MarkPayload, now: Duration, timing: Timing) -> Transition {
    Transition::new(from, to, now)
        .with_delay(timing.delay)
        .with_duration(timing.duration)
        .with_easing(timing.easing)
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// The target marks.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The running transitions.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Removes every mark, then adds `staged` as new marks.
    ///
    /// Transitions attached to removed marks are cancelled, so an entrance interrupted by
    /// a redraw never finishes against stale geometry.
    pub fn rebuild(&mut self, now: Duration, staged: Vec<Staged>) -> (Vec<MarkDiff>, RebuildStats) {
        self.timeline.clear();
        let mut stats = RebuildStats::default();
        let mut marks = Vec::with_capacity(staged.len());
        for Staged { mark, entrance } in staged {
            if let Some((from, timing)) = entrance {
                self.timeline
                    .schedule(mark.id, timed(from, mark.payload.clone(), now, timing));
                stats.animated += 1;
            }
            marks.push(mark);
        }
        let diffs = self.scene.rebuild(marks);
        for d in &diffs {
            match d {
                MarkDiff::Enter { .. } => stats.entered += 1,
                MarkDiff::Exit { .. } => stats.exited += 1,
                MarkDiff::Update { .. } => {}
            }
        }
        tracing::debug!(
            exited = stats.exited,
            entered = stats.entered,
            animated = stats.animated,
            "stage rebuilt"
        );
        (diffs, stats)
    }

    /// Moves an existing mark to a new target, animating from whatever is shown at `now`.
    ///
    /// Any transition already running on the mark is replaced. Returns `None` if the mark
    /// is not on stage or already targets `mark`.
    pub fn retarget(&mut self, now: Duration, mark: Mark, timing: Timing) -> Option<MarkDiff> {
        let id = mark.id;
        let shown = self.shown(id, now)?;
        let to = mark.payload.clone();
        let diff = self.scene.update(mark)?;
        self.timeline.schedule(id, timed(shown, to, now, timing));
        Some(diff)
    }

    fn shown(&self, id: MarkId, now: Duration) -> Option<MarkPayload> {
        let target = self.scene.get(id)?;
        Some(
            self.timeline
                .sample(id, now)
                .unwrap_or_else(|| target.payload.clone()),
        )
    }

    /// Everything on stage as it appears at `now`.
    pub fn frame(&self, now: Duration) -> Frame {
        Frame::capture(&self.scene, &self.timeline, now)
    }

    /// Returns `true` if no transition is still running at `now`.
    pub fn is_idle(&self, now: Duration) -> bool {
        self.timeline.is_idle(now)
    }

    /// When the last running transition ends, if any.
    pub fn settles_at(&self) -> Option<Duration> {
        self.timeline.settles_at()
    }

    /// Drops finished transitions.
    pub fn prune(&mut self, now: Duration) -> usize {
        self.timeline.prune(now)
    }
}
