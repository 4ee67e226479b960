use crate::core::forum::user::User;

/// A discussion category. `user` is a snapshot of the creator at creation time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub user: User,
}
