use std::sync::Mutex;

use async_trait::async_trait;
use tickbox_types::{NewTodo, Todo, TodoId, TodoPatch, UserId};

use crate::error::{Error, Result};
use crate::TodoStore;

/// In-process [`TodoStore`] over a mutex-guarded list.
///
/// Behaves like the remote API: assigns ids, returns full items from
/// `update`, keeps insertion order. Used by tests and as an offline backend.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Pre-populate the store, advancing the id counter past the seeds.
    pub fn seeded(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { todos, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<Todo>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .todos
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        let mut inner = self.inner.lock().unwrap();
        let todo = Todo {
            id: inner.next_id,
            user_id: new_todo.user_id,
            title: new_todo.title,
            completed: new_todo.completed,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let mut inner = self.inner.lock().unwrap();
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);
        if inner.todos.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_increasing_ids_from_one() {
        let store = MemoryStore::new();
        let first = store.create(NewTodo::new(1, "a")).await.unwrap();
        let second = store.create(NewTodo::new(1, "b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn list_filters_by_user_and_keeps_order() {
        let store = MemoryStore::new();
        store.create(NewTodo::new(1, "mine")).await.unwrap();
        store.create(NewTodo::new(2, "theirs")).await.unwrap();
        store.create(NewTodo::new(1, "also mine")).await.unwrap();

        let todos = store.list(1).await.unwrap();
        let titles: Vec<_> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["mine", "also mine"]);
    }

    #[tokio::test]
    async fn update_returns_full_item() {
        let store = MemoryStore::new();
        let created = store.create(NewTodo::new(1, "before")).await.unwrap();

        let updated = store
            .update(created.id, TodoPatch::completed(true))
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "before");
    }

    #[tokio::test]
    async fn update_unknown_id_fails() {
        let store = MemoryStore::new();
        let err = store.update(99, TodoPatch::completed(true)).await;
        assert!(matches!(err, Err(Error::NotFound(99))));
    }

    #[tokio::test]
    async fn delete_removes_and_rejects_unknown() {
        let store = MemoryStore::new();
        let created = store.create(NewTodo::new(1, "gone soon")).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(created.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn seeded_advances_id_counter() {
        let store = MemoryStore::seeded(vec![Todo {
            id: 7,
            user_id: 1,
            title: "seed".to_string(),
            completed: false,
        }]);
        let created = store.create(NewTodo::new(1, "next")).await.unwrap();
        assert_eq!(created.id, 8);
    }
}
