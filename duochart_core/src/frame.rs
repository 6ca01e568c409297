// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshots of what is on screen at one instant.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::mark::{MarkId, MarkPayload};
use crate::scene::Scene;
use crate::timeline::Timeline;

/// A mark as it appears at a given instant.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedMark {
    /// Mark identity.
    pub id: MarkId,
    /// Paint order.
    pub z_index: i32,
    /// Current (possibly mid-transition) payload.
    pub payload: MarkPayload,
}

/// Every mark of a scene, resolved against a timeline at one instant, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Clock time the frame was captured at.
    pub at: Duration,
    /// Marks sorted by `(z_index, id)`.
    pub marks: Vec<RenderedMark>,
}

impl Frame {
    /// Resolves `scene` against `timeline` at `now`.
    pub fn capture(scene: &Scene, timeline: &Timeline, now: Duration) -> Self {
        let marks = scene
            .iter_sorted()
            .map(|m| RenderedMark {
                id: m.id,
                z_index: m.z_index,
                payload: timeline
                    .sample(m.id, now)
                    .unwrap_or_else(|| m.payload.clone()),
            })
            .collect();
        Self { at: now, marks }
    }

    /// Looks up a rendered mark by id.
    pub fn get(&self, id: MarkId) -> Option<&RenderedMark> {
        self.marks.iter().find(|m| m.id == id)
    }

    /// Iterates marks belonging to `layer` (see [`MarkId::for_row`]), in paint order.
    pub fn layer(&self, layer: u32) -> impl Iterator<Item = &RenderedMark> {
        self.marks.iter().filter(move |m| m.id.layer() == layer)
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the frame has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use crate::mark::Mark;
    use crate::transition::Transition;

    use super::*;

    #[test]
    fn capture_overlays_running_transitions() {
        let id = MarkId::for_row(3, 0);
        let target = Mark::builder(id).h_const(10.0).build();
        let start = Mark::builder(id).h_const(0.0).build();

        let mut scene = Scene::new();
        scene.rebuild(vec![target.clone()]);
        let mut timeline = Timeline::new();
        timeline.schedule(
            id,
            Transition::new(start.payload.clone(), target.payload.clone(), Duration::ZERO)
                .with_duration(Duration::from_millis(100)),
        );

        let early = Frame::capture(&scene, &timeline, Duration::ZERO);
        assert_eq!(early.get(id).map(|m| &m.payload), Some(&start.payload));

        let late = Frame::capture(&scene, &timeline, Duration::from_millis(100));
        assert_eq!(late.get(id).map(|m| &m.payload), Some(&target.payload));
        assert_eq!(late.layer(3).count(), 1);
        assert_eq!(late.layer(4).count(), 0);
    }
}
