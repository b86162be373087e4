use std::collections::HashSet;

use tickbox_types::TodoId;

/// Which kind of request an item is busy with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Deleting,
    Updating,
}

/// Per-item in-flight bookkeeping.
///
/// An id is a member only between request dispatch and settlement;
/// settlement removes it whether the request succeeded or failed. Pure
/// in-memory set operations, no failure modes.
#[derive(Debug, Clone, Default)]
pub struct PendingOps {
    deleting: HashSet<TodoId>,
    updating: HashSet<TodoId>,
}

impl PendingOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, kind: OpKind, id: TodoId) {
        self.set_for(kind).insert(id);
    }

    pub fn clear(&mut self, kind: OpKind, id: TodoId) {
        self.set_for(kind).remove(&id);
    }

    /// True while any tracked request for `id` is in flight.
    pub fn is_busy(&self, id: TodoId) -> bool {
        self.deleting.contains(&id) || self.updating.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.deleting.is_empty() && self.updating.is_empty()
    }

    fn set_for(&mut self, kind: OpKind) -> &mut HashSet<TodoId> {
        match kind {
            OpKind::Deleting => &mut self.deleting,
            OpKind::Updating => &mut self.updating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_spans_both_kinds() {
        let mut pending = PendingOps::new();
        pending.mark(OpKind::Deleting, 1);
        pending.mark(OpKind::Updating, 2);

        assert!(pending.is_busy(1));
        assert!(pending.is_busy(2));
        assert!(!pending.is_busy(3));
    }

    #[test]
    fn clear_is_per_kind() {
        let mut pending = PendingOps::new();
        pending.mark(OpKind::Deleting, 1);
        pending.mark(OpKind::Updating, 1);

        pending.clear(OpKind::Deleting, 1);
        assert!(pending.is_busy(1));

        pending.clear(OpKind::Updating, 1);
        assert!(!pending.is_busy(1));
        assert!(pending.is_empty());
    }

    #[test]
    fn marking_twice_then_clearing_once_settles() {
        let mut pending = PendingOps::new();
        pending.mark(OpKind::Updating, 5);
        pending.mark(OpKind::Updating, 5);
        pending.clear(OpKind::Updating, 5);
        assert!(!pending.is_busy(5));
    }
}
