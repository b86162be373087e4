use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tickbox_store::{Error, MemoryStore, Result, TodoStore};
use tickbox_types::{NewTodo, Todo, TodoId, TodoPatch, UserId};
use tokio::sync::watch;

/// One recorded store call, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(String),
    Update(TodoId),
    Delete(TodoId),
}

/// A [`MemoryStore`] wrapper that can be scripted per operation:
///
/// - `fail_*` makes selected operations settle with an error instead of
///   touching the backing store;
/// - [`hold`](Self::hold) keeps every request open until the returned
///   handle is released, so a test can observe busy state mid-flight;
/// - every dispatched call is recorded for assertions.
pub struct ScriptedStore {
    inner: MemoryStore,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_update: Mutex<HashSet<TodoId>>,
    fail_delete: Mutex<HashSet<TodoId>>,
    calls: Mutex<Vec<Call>>,
    gate: Mutex<Option<watch::Receiver<bool>>>,
}

/// Releases requests held by [`ScriptedStore::hold`]. Dropping the handle
/// also lets held requests through.
pub struct GateHandle {
    tx: watch::Sender<bool>,
}

impl GateHandle {
    pub fn release(&self) {
        let _ = self.tx.send(true);
    }
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::wrapping(MemoryStore::new())
    }

    pub fn seeded(todos: Vec<Todo>) -> Self {
        Self::wrapping(MemoryStore::seeded(todos))
    }

    fn wrapping(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: Mutex::new(HashSet::new()),
            fail_delete: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        }
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    pub fn fail_update(&self, id: TodoId) {
        self.fail_update.lock().unwrap().insert(id);
    }

    pub fn fail_delete(&self, id: TodoId) {
        self.fail_delete.lock().unwrap().insert(id);
    }

    /// Hold every subsequent request open until the handle is released.
    /// Calls are still recorded at dispatch time.
    pub fn hold(&self) -> GateHandle {
        let (tx, rx) = watch::channel(false);
        *self.gate.lock().unwrap() = Some(rx);
        GateHandle { tx }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pass_gate(&self) {
        let rx = self.gate.lock().unwrap().clone();
        if let Some(mut rx) = rx {
            while !*rx.borrow() {
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    }

    fn injected_failure() -> Error {
        Error::Status(500)
    }
}

impl Default for ScriptedStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for ScriptedStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<Todo>> {
        self.record(Call::List);
        self.pass_gate().await;
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.inner.list(user_id).await
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        self.record(Call::Create(new_todo.title.clone()));
        self.pass_gate().await;
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.inner.create(new_todo).await
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        self.record(Call::Update(id));
        self.pass_gate().await;
        if self.fail_update.lock().unwrap().contains(&id) {
            return Err(Self::injected_failure());
        }
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        self.record(Call::Delete(id));
        self.pass_gate().await;
        if self.fail_delete.lock().unwrap().contains(&id) {
            return Err(Self::injected_failure());
        }
        self.inner.delete(id).await
    }
}
