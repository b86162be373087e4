use tickbox_types::{Todo, TodoId, UserId};

/// Fixed session owner used throughout the test suites.
pub const USER: UserId = 3054;

pub fn todo(id: TodoId, title: &str) -> Todo {
    Todo {
        id,
        user_id: USER,
        title: title.to_string(),
        completed: false,
    }
}

pub fn completed_todo(id: TodoId, title: &str) -> Todo {
    Todo {
        completed: true,
        ..todo(id, title)
    }
}
