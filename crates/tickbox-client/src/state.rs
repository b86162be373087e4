use std::time::Duration;

use tickbox_types::{filter_todos, DraftTodo, StatusFilter, Todo, TodoId};

use crate::error::{Notice, UiError, ERROR_DISPLAY_DURATION};
use crate::tracker::PendingOps;

/// Single-item edit mode. At most one of these exists at a time, which is
/// what enforces the one-item-in-edit invariant.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub id: TodoId,
    /// Title as it was when edit mode was entered; restored on cancel.
    pub original: String,
    /// Candidate title being typed.
    pub buffer: String,
}

impl EditSession {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            original: todo.title.clone(),
            buffer: todo.title.clone(),
        }
    }
}

/// The whole session state, owned by the controller for the lifetime of the
/// view session. Nothing outside the controller mutates it.
#[derive(Debug)]
pub struct ListState {
    pub todos: Vec<Todo>,
    pub draft: Option<DraftTodo>,
    pub pending: PendingOps,
    pub filter: StatusFilter,
    pub editing: Option<EditSession>,
    pub notice: Option<Notice>,
    pub error_display: Duration,
    pub loading: bool,
    pub add_focus: bool,
    pub edit_focus: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: None,
            pending: PendingOps::new(),
            filter: StatusFilter::All,
            editing: None,
            notice: None,
            error_display: ERROR_DISPLAY_DURATION,
            loading: false,
            add_focus: false,
            edit_focus: false,
        }
    }

    /// Raise an error, replacing whatever notice was active.
    pub fn raise(&mut self, kind: UiError) {
        self.notice = Some(Notice::new(kind));
    }

    /// The active error, if any. Expired notices are dropped here rather
    /// than by a background timer.
    pub fn current_error(&mut self) -> Option<UiError> {
        if let Some(notice) = &self.notice
            && notice.is_expired(self.error_display)
        {
            self.notice = None;
        }
        self.notice.as_ref().map(|n| n.kind())
    }

    pub fn dismiss_error(&mut self) {
        self.notice = None;
    }

    /// Remove an item from the local list, dropping the edit session if it
    /// pointed at the removed item.
    pub fn remove_todo(&mut self, id: TodoId) {
        self.todos.retain(|t| t.id != id);
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
            self.edit_focus = false;
        }
    }

    /// Swap in the server's copy of an item. A miss is fine: the item may
    /// have been deleted while the update was in flight.
    pub fn replace_todo(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    // Derived state. Recomputed on every call, never cached.

    pub fn has_any(&self) -> bool {
        !self.todos.is_empty()
    }

    /// Vacuously true for an empty list; the toggle-all affordance keys off
    /// this, so an empty list shows it "active". Kept on purpose.
    pub fn all_completed(&self) -> bool {
        self.todos.iter().all(|t| t.completed)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    pub fn is_busy(&self, id: TodoId) -> bool {
        self.pending.is_busy(id)
    }

    /// True while the draft exists or any listed item has a request in
    /// flight. The draft is busy by construction: it only exists between
    /// create dispatch and settlement.
    pub fn any_busy(&self) -> bool {
        self.draft.is_some() || self.todos.iter().any(|t| self.pending.is_busy(t.id))
    }

    pub fn visible_todos(&self) -> Vec<Todo> {
        filter_todos(&self.todos, self.filter)
    }

    pub fn snapshot(&mut self) -> Snapshot {
        Snapshot {
            visible: self.visible_todos(),
            draft: self.draft.clone(),
            filter: self.filter,
            editing_id: self.editing.as_ref().map(|e| e.id),
            error: self.current_error(),
            loading: self.loading,
            has_any: self.has_any(),
            all_completed: self.all_completed(),
            active_count: self.active_count(),
            has_completed: self.has_completed(),
            any_busy: self.any_busy(),
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// One coherent read of the session state for a render pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub visible: Vec<Todo>,
    pub draft: Option<DraftTodo>,
    pub filter: StatusFilter,
    pub editing_id: Option<TodoId>,
    pub error: Option<UiError>,
    pub loading: bool,
    pub has_any: bool,
    pub all_completed: bool,
    pub active_count: usize,
    pub has_completed: bool,
    pub any_busy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::OpKind;

    fn todo(id: TodoId, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("todo {}", id),
            completed,
        }
    }

    #[test]
    fn all_completed_is_vacuously_true_when_empty() {
        let state = ListState::new();
        assert!(state.all_completed());
        assert!(!state.has_any());
    }

    #[test]
    fn derived_counts() {
        let mut state = ListState::new();
        state.todos = vec![todo(1, true), todo(2, false), todo(3, false)];

        assert_eq!(state.active_count(), 2);
        assert!(state.has_completed());
        assert!(!state.all_completed());
    }

    #[test]
    fn removing_edited_item_clears_edit_session() {
        let mut state = ListState::new();
        state.todos = vec![todo(1, false), todo(2, false)];
        state.editing = Some(EditSession::new(&state.todos[0]));

        state.remove_todo(1);
        assert!(state.editing.is_none());
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn removing_other_item_keeps_edit_session() {
        let mut state = ListState::new();
        state.todos = vec![todo(1, false), todo(2, false)];
        state.editing = Some(EditSession::new(&state.todos[0]));

        state.remove_todo(2);
        assert!(state.editing.is_some());
    }

    #[test]
    fn replace_miss_leaves_list_unchanged() {
        let mut state = ListState::new();
        state.todos = vec![todo(1, false)];

        state.replace_todo(todo(9, true));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, 1);
    }

    #[test]
    fn expired_notice_reads_as_none() {
        let mut state = ListState::new();
        state.error_display = Duration::ZERO;
        state.raise(UiError::AddFailed);
        assert_eq!(state.current_error(), None);
        assert!(state.notice.is_none());
    }

    #[test]
    fn raising_replaces_the_previous_notice() {
        let mut state = ListState::new();
        state.raise(UiError::AddFailed);
        state.raise(UiError::DeleteFailed);
        assert_eq!(state.current_error(), Some(UiError::DeleteFailed));
    }

    #[test]
    fn any_busy_counts_draft_and_pending() {
        let mut state = ListState::new();
        assert!(!state.any_busy());

        state.draft = Some(DraftTodo::new(1, "pending"));
        assert!(state.any_busy());

        state.draft = None;
        state.todos = vec![todo(1, false)];
        state.pending.mark(OpKind::Updating, 1);
        assert!(state.any_busy());
    }
}
