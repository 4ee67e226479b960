use crate::core::forum::{thread::Thread, user::User};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub thread: Thread,
    pub user: User,
}

impl Comment {
    pub fn belongs_to_thread(&self, thread_id: &str) -> bool {
        self.thread.id == thread_id
    }
}
