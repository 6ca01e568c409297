// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-mark transition scheduling.

extern crate alloc;

use core::time::Duration;

use hashbrown::HashMap;

use crate::mark::{MarkId, MarkPayload};
use crate::transition::Transition;

/// The set of transitions currently attached to marks.
///
/// At most one transition runs per mark. Scheduling a new one replaces the old one
/// outright; there is no queueing.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    active: HashMap<MarkId, Transition>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `transition` to `id`, returning the transition it replaced.
    pub fn schedule(&mut self, id: MarkId, transition: Transition) -> Option<Transition> {
        let replaced = self.active.insert(id, transition);
        if replaced.is_some() {
            tracing::trace!(?id, "transition interrupted");
        }
        replaced
    }

    /// Drops every transition.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Returns the transition attached to `id`.
    pub fn get(&self, id: MarkId) -> Option<&Transition> {
        self.active.get(&id)
    }

    /// Samples the transition attached to `id` at `now`.
    pub fn sample(&self, id: MarkId, now: Duration) -> Option<MarkPayload> {
        self.active.get(&id).map(|t| t.sample(now))
    }

    /// Drops transitions that have finished by `now`, returning how many were dropped.
    pub fn prune(&mut self, now: Duration) -> usize {
        let before = self.active.len();
        self.active.retain(|_, t| !t.is_finished(now));
        before - self.active.len()
    }

    /// Returns `true` if no transition is still running at `now`.
    pub fn is_idle(&self, now: Duration) -> bool {
        self.active.values().all(|t| t.is_finished(now))
    }

    /// Clock time at which the last transition ends, if any.
    pub fn settles_at(&self) -> Option<Duration> {
        self.active.values().map(Transition::ends_at).max()
    }

    /// Number of attached transitions (finished ones included until pruned).
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no transition is attached.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
