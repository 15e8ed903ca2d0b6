//! Undo/redo history of scene snapshots.
//!
//! The store is a list of immutable [`Snapshot`]s plus a cursor pointing at
//! the current one. It is never empty: it starts with the empty scene.
//!
//! Gestures use **write batching**: between `begin_gesture()` and
//! `end_gesture()`, the first `write()` commits a new step and every later
//! `write()` amends it, so a whole drag undoes in one step. A gesture that
//! never writes leaves history untouched.

use sk_core::Snapshot;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of snapshots kept (`None` = unbounded).
    max_depth: Option<usize>,
    /// Inside a gesture.
    batching: bool,
    /// Whether the current gesture has already committed its step.
    batch_dirty: bool,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryStore {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
            cursor: 0,
            max_depth: max_depth.map(|d| d.max(1)),
            batching: false,
            batch_dirty: false,
        }
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Drop everything after the cursor, append `next`, and advance.
    pub fn commit(&mut self, next: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor += 1;
        if let Some(max) = self.max_depth
            && self.snapshots.len() > max
        {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
        log::debug!("history commit -> {}/{}", self.cursor, self.snapshots.len());
    }

    /// Replace the snapshot at the cursor. Length and cursor are unchanged.
    pub fn amend(&mut self, next: Snapshot) {
        self.snapshots[self.cursor] = next;
        log::trace!("history amend at {}", self.cursor);
    }

    /// Start a gesture. Writes until `end_gesture()` form one undo step.
    pub fn begin_gesture(&mut self) {
        self.batching = true;
        self.batch_dirty = false;
    }

    pub fn end_gesture(&mut self) {
        self.batching = false;
        self.batch_dirty = false;
    }

    pub fn in_gesture(&self) -> bool {
        self.batching
    }

    /// Commit or amend, depending on whether the current gesture already
    /// has a step. Outside a gesture every write commits.
    pub fn write(&mut self, next: Snapshot) {
        if self.batching && self.batch_dirty {
            self.amend(next);
        } else {
            self.commit(next);
            self.batch_dirty = self.batching;
        }
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            log::debug!("undo at oldest snapshot ignored");
            return false;
        }
        self.end_gesture();
        self.cursor -= 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            log::debug!("redo at newest snapshot ignored");
            return false;
        }
        self.end_gesture();
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the store is seeded with the empty scene.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sk_core::{Element, ElementKind, Point};

    fn scene(n: usize) -> Snapshot {
        Snapshot::from_elements(
            (0..n)
                .map(|i| Element::create(ElementKind::Line, Point::new(i as f64, 0.0)))
                .collect(),
        )
    }

    #[test]
    fn starts_with_empty_scene() {
        let h = HistoryStore::default();
        assert_eq!(h.len(), 1);
        assert_eq!(h.cursor(), 0);
        assert!(h.current().is_empty());
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn commit_after_undo_drops_redo_branch() {
        let (s1, s2, s3) = (scene(1), scene(2), scene(3));
        let mut h = HistoryStore::default();
        h.commit(s1);
        h.commit(s2);
        assert!(h.undo());
        h.commit(s3.clone());

        assert!(!h.redo());
        assert_eq!(h.current(), &s3);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn amends_never_grow_history() {
        let mut h = HistoryStore::default();
        h.commit(scene(1));
        for n in 2..10 {
            h.amend(scene(n));
        }
        assert_eq!(h.len(), 2);
        assert!(h.undo());
        assert!(h.current().is_empty());
    }

    #[test]
    fn out_of_range_is_a_noop() {
        let mut h = HistoryStore::default();
        assert!(!h.undo());
        h.commit(scene(1));
        assert!(!h.redo());
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn gesture_writes_form_one_step() {
        let mut h = HistoryStore::default();
        h.begin_gesture();
        h.write(scene(1));
        h.write(scene(2));
        h.write(scene(3));
        h.end_gesture();
        assert_eq!(h.len(), 2);
        assert_eq!(h.current().len(), 3);

        h.begin_gesture();
        h.end_gesture();
        assert_eq!(h.len(), 2, "gesture without writes adds no step");
    }

    #[test]
    fn writes_outside_a_gesture_commit() {
        let mut h = HistoryStore::default();
        h.write(scene(1));
        h.write(scene(2));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn depth_limit_drops_oldest() {
        let mut h = HistoryStore::new(Some(3));
        for n in 1..=5 {
            h.commit(scene(n));
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.cursor(), 2);
        assert!(h.undo());
        assert!(h.undo());
        assert!(!h.undo());
        assert_eq!(h.current().len(), 3);
    }
}
