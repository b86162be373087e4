use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Wire fidelity: field names serialize in camelCase to match the todo API
//    (`userId`), so these structs go straight through reqwest/serde_json.
//
// 2. No client-side ids: the server assigns every `Todo::id`. The create
//    payload (`NewTodo`) has no id field at all, and the optimistic
//    placeholder (`DraftTodo`) is a separate type rather than a `Todo` with a
//    reserved sentinel id, so a draft can never collide with a real item.
//
// 3. Partial updates: `TodoPatch` serializes only the fields being changed,
//    matching the API's partial-update contract.

/// Server-assigned item identifier.
pub type TodoId = i64;

/// Owner identifier, fixed for the whole session.
pub type UserId = i64;

/// A single to-do entry as stored by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Create payload: a todo that does not exist yet, so it carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Locally-synthesized placeholder shown while a create request is in
/// flight. Deliberately not a `Todo`: it has no identifier, so presentation
/// code cannot confuse it with a persisted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTodo {
    pub user_id: UserId,
    pub title: String,
}

impl DraftTodo {
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
        }
    }
}

impl From<DraftTodo> for NewTodo {
    fn from(draft: DraftTodo) -> Self {
        NewTodo {
            user_id: draft.user_id,
            title: draft.title,
            completed: false,
        }
    }
}

/// Partial update payload. Absent fields are omitted from the wire body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that renames an item.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Patch that flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }

    /// True when the patch touches the title.
    pub fn changes_title(&self) -> bool {
        self.title.is_some()
    }

    /// Local preview of the patch applied to an existing item.
    pub fn apply_to(&self, todo: &Todo) -> Todo {
        Todo {
            id: todo.id,
            user_id: todo.user_id,
            title: self.title.clone().unwrap_or_else(|| todo.title.clone()),
            completed: self.completed.unwrap_or(todo.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo {
            id: 42,
            user_id: 3054,
            title: "Buy milk".to_string(),
            completed: false,
        }
    }

    #[test]
    fn todo_serializes_camel_case() {
        let json = serde_json::to_value(sample_todo()).unwrap();
        assert_eq!(json["userId"], 3054);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn new_todo_has_no_id_on_the_wire() {
        let json = serde_json::to_value(NewTodo::new(3054, "Buy milk")).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn patch_omits_absent_fields() {
        let json = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn patch_title_only_preserves_completed() {
        let patched = TodoPatch::title("Buy bread").apply_to(&sample_todo());
        assert_eq!(patched.title, "Buy bread");
        assert!(!patched.completed);
        assert_eq!(patched.id, 42);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(TodoPatch::default().is_empty());
        assert!(!TodoPatch::completed(false).is_empty());
    }

    #[test]
    fn draft_converts_to_create_payload() {
        let new: NewTodo = DraftTodo::new(3054, "Buy milk").into();
        assert_eq!(new.title, "Buy milk");
        assert!(!new.completed);
    }
}
