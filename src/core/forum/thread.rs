// A thread inside a topic.
//
// Notes
// - `topic` and `user` are copies taken when the thread was created. Later
//   changes to either are not reflected here.

use crate::core::forum::{topic::Topic, user::User};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub topic: Topic,
    pub user: User,
}

impl Thread {
    pub fn belongs_to_topic(&self, topic_id: &str) -> bool {
        self.topic.id == topic_id
    }
}
