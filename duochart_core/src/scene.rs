// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed mark store with enter/update/exit diffs.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to the set of marks in a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Bounds of the new payload, if known.
        bounds: Option<Rect>,
    },
    /// A mark that already existed changed.
    Update {
        /// Mark identity.
        id: MarkId,
        /// Mark kind (unchanged by definition).
        kind: MarkKind,
        /// Paint order after the update.
        new_z_index: i32,
        /// The previous payload.
        old: Box<MarkPayload>,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Bounds before the update.
        old_bounds: Option<Rect>,
        /// Bounds after the update.
        new_bounds: Option<Rect>,
    },
    /// A mark disappeared.
    Exit {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// The payload that was removed.
        old: Box<MarkPayload>,
        /// Bounds of the removed payload, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    fn enter(mark: &Mark) -> Self {
        Self::Enter {
            id: mark.id,
            kind: mark.kind(),
            z_index: mark.z_index,
            new: Box::new(mark.payload.clone()),
            bounds: mark.bounds(),
        }
    }

    fn exit(mark: Mark) -> Self {
        let bounds = mark.bounds();
        Self::Exit {
            id: mark.id,
            kind: mark.kind(),
            old: Box::new(mark.payload),
            bounds,
        }
    }
}

/// The set of target marks currently bound to data.
///
/// The scene stores the *final* state of every mark. In-flight animation lives in a
/// [`crate::Timeline`] and is combined with the scene when a [`crate::Frame`] is captured.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks in the scene.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Iterates marks in paint order (`z_index`, then id).
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Mark> {
        let mut marks: Vec<&Mark> = self.marks.values().collect();
        marks.sort_by_key(|m| (m.z_index, m.id));
        marks.into_iter()
    }

    /// Removes every mark, then inserts `marks` as new.
    ///
    /// No mark is ever classified as an update: persisting ids exit and re-enter.
    /// Exits are reported first.
    pub fn rebuild(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut diffs = self.clear();
        for mark in marks {
            diffs.push(MarkDiff::enter(&mark));
            if let Some(dup) = self.marks.insert(mark.id, mark) {
                tracing::warn!(id = ?dup.id, "duplicate mark id in rebuild; last one wins");
            }
        }
        diffs
    }

    /// Removes every mark, returning one exit diff per mark in id order.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let mut old: Vec<Mark> = self.marks.drain().map(|(_, m)| m).collect();
        old.sort_by_key(|m| m.id);
        old.into_iter().map(MarkDiff::exit).collect()
    }

    /// Replaces a single existing mark.
    ///
    /// Returns `None` if the mark is not in the scene (nothing is inserted) or if it is
    /// unchanged.
    pub fn update(&mut self, mark: Mark) -> Option<MarkDiff> {
        match self.marks.entry(mark.id) {
            Entry::Vacant(_) => None,
            Entry::Occupied(mut e) => {
                if *e.get() == mark {
                    return None;
                }
                let diff = update_diff(e.get(), &mark);
                e.insert(mark);
                Some(diff)
            }
        }
    }
}

fn update_diff(old: &Mark, new: &Mark) -> MarkDiff {
    MarkDiff::Update {
        id: new.id,
        kind: new.kind(),
        new_z_index: new.z_index,
        old: Box::new(old.payload.clone()),
        new: Box::new(new.payload.clone()),
        old_bounds: old.bounds(),
        new_bounds: new.bounds(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::Color;

    use super::*;

    fn bar(row: usize, h: f64) -> Mark {
        Mark::builder(MarkId::for_row(1, row))
            .x_const(row as f64 * 10.0)
            .w_const(8.0)
            .h_const(h)
            .build()
    }

    #[test]
    fn rebuild_exits_everything_before_entering() {
        let mut scene = Scene::new();
        scene.rebuild(vec![bar(0, 1.0), bar(1, 2.0)]);
        let diffs = scene.rebuild(vec![bar(0, 1.0), bar(1, 2.0)]);
        assert_eq!(diffs.len(), 4);
        assert!(matches!(diffs[0], MarkDiff::Exit { .. }));
        assert!(matches!(diffs[1], MarkDiff::Exit { .. }));
        assert!(matches!(diffs[2], MarkDiff::Enter { .. }));
        assert!(matches!(diffs[3], MarkDiff::Enter { .. }));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn update_only_touches_existing_marks() {
        let mut scene = Scene::new();
        assert_eq!(scene.update(bar(0, 1.0)), None);
        assert!(scene.is_empty());

        scene.rebuild(vec![bar(0, 1.0)]);
        assert_eq!(scene.update(bar(0, 1.0)), None);

        let recolored = Mark::builder(MarkId::for_row(1, 0))
            .w_const(8.0)
            .h_const(1.0)
            .fill_const(Color::WHITE)
            .build();
        let diff = scene.update(recolored).expect("fill changed");
        let MarkDiff::Update { old, new, .. } = diff else {
            panic!("expected an update diff");
        };
        assert_eq!(old.as_rect().map(|r| r.fill), Some(Color::BLACK));
        assert_eq!(new.as_rect().map(|r| r.fill), Some(Color::WHITE));
    }

    #[test]
    fn iter_sorted_orders_by_z_then_id() {
        let mut scene = Scene::new();
        let top = Mark::builder(MarkId::from_raw(1)).z_index(10).build();
        let low_b = Mark::builder(MarkId::from_raw(3)).build();
        let low_a = Mark::builder(MarkId::from_raw(2)).build();
        scene.rebuild(vec![top, low_b, low_a]);
        let ids: std::vec::Vec<u64> = scene.iter_sorted().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
