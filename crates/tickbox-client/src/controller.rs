use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::future::join_all;
use tickbox_store::TodoStore;
use tickbox_types::{DraftTodo, StatusFilter, Todo, TodoId, TodoPatch, UserId};
use tracing::{debug, warn};

use crate::error::{Result, UiError};
use crate::state::{EditSession, ListState, Snapshot};
use crate::tracker::OpKind;

/// The list controller: one per view session.
///
/// Owns the session state behind a mutex and orchestrates every user intent
/// against the store. Handles are cheap to clone; all clones share the same
/// state, so a render loop can read snapshots while an operation is in
/// flight. The lock is only ever held between suspension points, never
/// across an await.
pub struct TodoController {
    store: Arc<dyn TodoStore>,
    user_id: UserId,
    state: Arc<Mutex<ListState>>,
}

impl Clone for TodoController {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            user_id: self.user_id,
            state: self.state.clone(),
        }
    }
}

impl TodoController {
    pub fn new(store: Arc<dyn TodoStore>, user_id: UserId) -> Self {
        Self {
            store,
            user_id,
            state: Arc::new(Mutex::new(ListState::new())),
        }
    }

    /// Shorten (or lengthen) how long raised errors stay visible.
    pub fn with_error_display(self, display_for: Duration) -> Self {
        self.lock().error_display = display_for;
        self
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap()
    }

    // ------------------------------------------------------------------
    // User intents
    // ------------------------------------------------------------------

    /// Initial fetch, invoked once at session start. On failure the list
    /// stays empty and a load error is raised.
    pub async fn load(&self) -> Result<()> {
        self.lock().loading = true;
        debug!(user_id = self.user_id, "loading todos");

        let result = self.store.list(self.user_id).await;

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(todos) => {
                debug!(count = todos.len(), "loaded todos");
                state.todos = todos;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "load failed");
                state.raise(UiError::LoadFailed);
                Err(UiError::LoadFailed)
            }
        }
    }

    /// Create an item from `title`.
    ///
    /// A blank title fails fast without a request. Otherwise a draft row is
    /// installed for the duration of the create; settlement always discards
    /// the draft and re-offers focus to the add form. The returned error
    /// lets the caller keep the typed input on failure.
    pub async fn add(&self, title: &str) -> Result<Todo> {
        let title = title.trim();
        if title.is_empty() {
            let mut state = self.lock();
            state.raise(UiError::TitleEmpty);
            state.add_focus = true;
            return Err(UiError::TitleEmpty);
        }

        let draft = DraftTodo::new(self.user_id, title);
        self.lock().draft = Some(draft.clone());
        debug!(title, "creating todo");

        let result = self.store.create(draft.into()).await;

        let mut state = self.lock();
        state.draft = None;
        state.add_focus = true;
        match result {
            Ok(todo) => {
                state.todos.push(todo.clone());
                Ok(todo)
            }
            Err(err) => {
                warn!(%err, "add failed");
                state.raise(UiError::AddFailed);
                Err(UiError::AddFailed)
            }
        }
    }

    /// Delete one item. Failure is both raised globally and returned, so
    /// the edit-commit cascade can react (see [`commit_edit`]).
    ///
    /// [`commit_edit`]: Self::commit_edit
    pub async fn delete(&self, id: TodoId) -> Result<()> {
        let result = self.delete_quiet(id).await;
        if result.is_err() {
            self.lock().raise(UiError::DeleteFailed);
        }
        result
    }

    /// Apply a partial update to one item.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        match self.update_quiet(id, patch).await {
            Ok(todo) => Ok(todo),
            Err(err) => {
                self.lock().raise(UiError::UpdateFailed);
                Err(err)
            }
        }
    }

    /// Flip the completion flag of one item to the opposite of its current
    /// state.
    pub async fn toggle(&self, id: TodoId) -> Result<Todo> {
        let completed = {
            let state = self.lock();
            match state.todos.iter().find(|t| t.id == id) {
                Some(todo) => todo.completed,
                None => return Err(UiError::UpdateFailed),
            }
        };
        self.update(id, TodoPatch::completed(!completed)).await
    }

    /// Drive every item to the same completion state: active when all are
    /// completed, completed otherwise. Updates are dispatched together and
    /// awaited jointly; a failed sibling never aborts the rest, and at most
    /// one error is raised for the whole batch.
    pub async fn toggle_all(&self) -> Result<()> {
        let (target, picked) = {
            let mut state = self.lock();
            let target = !state.all_completed();
            let picked: Vec<TodoId> = state
                .todos
                .iter()
                .filter(|t| t.completed != target)
                .map(|t| t.id)
                .collect();
            for &id in &picked {
                state.pending.mark(OpKind::Updating, id);
            }
            (target, picked)
        };
        if picked.is_empty() {
            return Ok(());
        }
        debug!(count = picked.len(), target, "toggling all todos");

        let results = join_all(
            picked
                .iter()
                .map(|&id| self.update_quiet(id, TodoPatch::completed(target))),
        )
        .await;

        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            warn!(failures, total = picked.len(), "toggle-all partially failed");
            self.lock().raise(UiError::UpdateFailed);
            return Err(UiError::UpdateFailed);
        }
        Ok(())
    }

    /// Delete every completed item. Deletes are dispatched together and
    /// awaited jointly; only the successful ones leave the list, and at
    /// most one error is raised for the whole batch.
    pub async fn clear_completed(&self) -> Result<()> {
        let picked: Vec<TodoId> = {
            let mut state = self.lock();
            let picked: Vec<TodoId> = state
                .todos
                .iter()
                .filter(|t| t.completed)
                .map(|t| t.id)
                .collect();
            for &id in &picked {
                state.pending.mark(OpKind::Deleting, id);
            }
            picked
        };
        if picked.is_empty() {
            return Ok(());
        }
        debug!(count = picked.len(), "clearing completed todos");

        let results = join_all(picked.iter().map(|&id| self.delete_quiet(id))).await;

        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            warn!(failures, total = picked.len(), "clear-completed partially failed");
            self.lock().raise(UiError::DeleteFailed);
            return Err(UiError::DeleteFailed);
        }
        Ok(())
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.lock().filter = filter;
    }

    /// Enter edit mode for `id`, seeding the buffer with the current title.
    /// Unknown ids are ignored.
    pub fn begin_edit(&self, id: TodoId) {
        let mut state = self.lock();
        if let Some(todo) = state.todos.iter().find(|t| t.id == id) {
            state.editing = Some(EditSession::new(todo));
            state.edit_focus = true;
        }
    }

    pub fn set_edit_buffer(&self, text: impl Into<String>) {
        let mut state = self.lock();
        if let Some(editing) = state.editing.as_mut() {
            editing.buffer = text.into();
        }
    }

    /// Leave edit mode without any request; the original title stands.
    pub fn cancel_edit(&self) {
        let mut state = self.lock();
        state.editing = None;
        state.edit_focus = false;
    }

    /// Commit the edit buffer:
    /// - unchanged (after trimming) → exit edit mode, no request;
    /// - emptied → treat as a deletion request;
    /// - otherwise → rename.
    ///
    /// On failure edit mode stays open with focus re-offered, so the UI can
    /// recover the typed (or original) title.
    pub async fn commit_edit(&self) -> Result<()> {
        let Some(session) = self.lock().editing.clone() else {
            return Ok(());
        };
        let candidate = session.buffer.trim().to_string();

        if candidate == session.original {
            self.cancel_edit();
            return Ok(());
        }

        if candidate.is_empty() {
            match self.delete_quiet(session.id).await {
                // delete settlement already dropped the edit session
                Ok(()) => Ok(()),
                Err(err) => {
                    let mut state = self.lock();
                    state.raise(UiError::DeleteFailed);
                    state.edit_focus = true;
                    Err(err)
                }
            }
        } else {
            match self.update_quiet(session.id, TodoPatch::title(candidate)).await {
                Ok(_) => {
                    let mut state = self.lock();
                    if state.editing.as_ref().is_some_and(|e| e.id == session.id) {
                        state.editing = None;
                        state.edit_focus = false;
                    }
                    Ok(())
                }
                Err(err) => {
                    let mut state = self.lock();
                    state.raise(UiError::UpdateFailed);
                    state.edit_focus = true;
                    Err(err)
                }
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.lock().dismiss_error();
    }

    // ------------------------------------------------------------------
    // Request primitives: track, dispatch, settle. No error raising here;
    // the public intents decide how failures surface so bulk operations
    // can report once per batch.
    // ------------------------------------------------------------------

    /// Settlement always re-offers add-form focus, however the delete was
    /// triggered: directly, by clear-completed, or by an emptied edit.
    async fn delete_quiet(&self, id: TodoId) -> Result<()> {
        self.lock().pending.mark(OpKind::Deleting, id);
        debug!(id, "deleting todo");

        let result = self.store.delete(id).await;

        let mut state = self.lock();
        state.pending.clear(OpKind::Deleting, id);
        state.add_focus = true;
        match result {
            Ok(()) => {
                state.remove_todo(id);
                Ok(())
            }
            Err(err) => {
                warn!(id, %err, "delete failed");
                Err(UiError::DeleteFailed)
            }
        }
    }

    async fn update_quiet(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        self.lock().pending.mark(OpKind::Updating, id);
        debug!(id, "updating todo");

        let result = self.store.update(id, patch).await;

        let mut state = self.lock();
        state.pending.clear(OpKind::Updating, id);
        match result {
            Ok(todo) => {
                state.replace_todo(todo.clone());
                Ok(todo)
            }
            Err(err) => {
                warn!(id, %err, "update failed");
                Err(UiError::UpdateFailed)
            }
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// One coherent read of everything a render pass needs.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }

    pub fn visible_todos(&self) -> Vec<Todo> {
        self.lock().visible_todos()
    }

    pub fn draft(&self) -> Option<DraftTodo> {
        self.lock().draft.clone()
    }

    pub fn filter(&self) -> StatusFilter {
        self.lock().filter
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.lock().editing.as_ref().map(|e| e.id)
    }

    pub fn edit_buffer(&self) -> Option<String> {
        self.lock().editing.as_ref().map(|e| e.buffer.clone())
    }

    pub fn error(&self) -> Option<UiError> {
        self.lock().current_error()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn is_busy(&self, id: TodoId) -> bool {
        self.lock().is_busy(id)
    }

    pub fn any_busy(&self) -> bool {
        self.lock().any_busy()
    }

    pub fn has_any(&self) -> bool {
        self.lock().has_any()
    }

    pub fn all_completed(&self) -> bool {
        self.lock().all_completed()
    }

    pub fn active_count(&self) -> usize {
        self.lock().active_count()
    }

    pub fn has_completed(&self) -> bool {
        self.lock().has_completed()
    }

    /// Read-and-clear the "give the add form focus" signal.
    pub fn take_add_focus(&self) -> bool {
        let mut state = self.lock();
        std::mem::take(&mut state.add_focus)
    }

    /// Read-and-clear the "give the edit form focus" signal.
    pub fn take_edit_focus(&self) -> bool {
        let mut state = self.lock();
        std::mem::take(&mut state.edit_focus)
    }
}
