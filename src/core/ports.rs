// Ports define what the client application needs from the forum backend, without implementing it.
//
// Purpose
// - Describe the backend call interface as a trait, so the in memory mock and a
//   future network client are interchangeable for the views that consume them.
// - Describe the clock the store reads creation times from.
//
// Boundaries
// - No concrete storage or time source here. Adapters implement these traits.
//
// Testing guidance
// - Use the in memory store with a fixed clock for deterministic tests.

use crate::core::forum::{Comment, Thread, Topic, User};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Topic with id '{0}' not found.")]
    TopicNotFound(String),

    #[error("Thread with id '{0}' not found.")]
    ThreadNotFound(String),
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Backend operations of the forum. Every returned value is an owned copy.
pub trait ForumStore {
    /// Creates, stores and returns a new user for `email`. No uniqueness check is done.
    fn login(&mut self, email: &str) -> User;
    /// Removes every user sharing `user.id`. Unknown users are ignored.
    fn logout(&mut self, user: &User);

    fn list_users(&self) -> Vec<User>;
    fn get_user_by_id(&self, id: &str) -> Option<User>;

    fn list_topics(&self) -> Vec<Topic>;
    fn get_topic_by_id(&self, id: &str) -> Option<Topic>;
    fn create_topic(&mut self, title: &str, description: &str, user: &User);

    fn get_thread_by_id(&self, id: &str) -> Option<Thread>;
    fn create_thread(&mut self, title: &str, topic_id: &str, user: &User)
    -> Result<(), StoreError>;
    fn list_threads_by_topic_id(&self, topic_id: &str) -> Vec<Thread>;

    fn list_comments_by_thread_id(&self, thread_id: &str) -> Vec<Comment>;
    fn create_comment(
        &mut self,
        content: &str,
        thread_id: &str,
        user: &User,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
mod ports_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::TopicNotFound("nonexistent".into()), "Topic with id 'nonexistent' not found.")]
    #[case(StoreError::ThreadNotFound("t-1".into()), "Thread with id 't-1' not found.")]
    fn it_should_name_the_missing_identifier(#[case] error: StoreError, #[case] message: &str) {
        assert_eq!(error.to_string(), message);
    }
}
