// In memory implementation of the ForumStore port.
//
// Purpose
// - Let the client application develop and test its views without a backend.
//
// Responsibilities
// - Own the four collections and keep them in insertion order.
// - Hand out clones only, so callers cannot reach the stored values.
// - Check that the parent exists when a thread or comment is created.

use crate::adapters::in_memory::fixtures::seed_snapshot;
use crate::adapters::system_clock::SystemClock;
use crate::core::forum::{Comment, ForumSnapshot, Thread, Topic, User};
use crate::core::generators::{ColorRange, date_string, iso_timestamp, new_id, random_dark_color};
use crate::core::ports::{Clock, ForumStore, StoreError};
use chrono::{DateTime, Local, Utc};
use rand::{SeedableRng, rngs::OsRng, rngs::StdRng};

pub struct InMemoryForumStore {
    users: Vec<User>,
    topics: Vec<Topic>,
    threads: Vec<Thread>,
    comments: Vec<Comment>,
    clock: Box<dyn Clock>,
    colors: ColorRange,
    rng: StdRng,
}

impl Default for InMemoryForumStore {
    fn default() -> Self {
        Self::from_snapshot(ForumSnapshot::default())
    }
}

impl InMemoryForumStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the bundled fixture dataset.
    pub fn seeded() -> Self {
        Self::from_snapshot(seed_snapshot())
    }

    pub fn from_snapshot(snapshot: ForumSnapshot) -> Self {
        let ForumSnapshot {
            users,
            topics,
            threads,
            comments,
        } = snapshot;
        Self {
            users,
            topics,
            threads,
            comments,
            clock: Box::new(SystemClock),
            colors: ColorRange::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Makes generated user colours reproducible.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_color_range(mut self, colors: ColorRange) -> Self {
        self.colors = colors;
        self
    }

    pub fn snapshot(&self) -> ForumSnapshot {
        ForumSnapshot {
            users: self.users.clone(),
            topics: self.topics.clone(),
            threads: self.threads.clone(),
            comments: self.comments.clone(),
        }
    }

    fn fresh_id(now: DateTime<Utc>) -> String {
        new_id(&mut OsRng, now)
    }
}

impl ForumStore for InMemoryForumStore {
    fn login(&mut self, email: &str) -> User {
        let now = self.clock.now();
        let user = User {
            id: Self::fresh_id(now),
            email: email.to_string(),
            username: email.to_string(),
            created_at: date_string(now.with_timezone(&Local)),
            color_hex: random_dark_color(&mut self.rng, self.colors),
        };
        tracing::info!(user_id = %user.id, email, "user logged in");
        self.users.push(user.clone());
        user
    }

    fn logout(&mut self, user: &User) {
        let before = self.users.len();
        self.users.retain(|u| u.id != user.id);
        tracing::info!(
            user_id = %user.id,
            removed = before - self.users.len(),
            "user logged out"
        );
    }

    fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn list_topics(&self) -> Vec<Topic> {
        self.topics.clone()
    }

    fn get_topic_by_id(&self, id: &str) -> Option<Topic> {
        self.topics.iter().find(|t| t.id == id).cloned()
    }

    fn create_topic(&mut self, title: &str, description: &str, user: &User) {
        let now = self.clock.now();
        let topic = Topic {
            id: Self::fresh_id(now),
            title: title.to_string(),
            description: description.to_string(),
            created_at: iso_timestamp(now),
            user: user.clone(),
        };
        tracing::debug!(topic_id = %topic.id, user_id = %user.id, "topic created");
        self.topics.push(topic);
    }

    fn get_thread_by_id(&self, id: &str) -> Option<Thread> {
        self.threads.iter().find(|t| t.id == id).cloned()
    }

    fn create_thread(
        &mut self,
        title: &str,
        topic_id: &str,
        user: &User,
    ) -> Result<(), StoreError> {
        let Some(topic) = self.get_topic_by_id(topic_id) else {
            tracing::warn!(topic_id, "thread rejected, topic not found");
            return Err(StoreError::TopicNotFound(topic_id.to_string()));
        };

        let now = self.clock.now();
        let thread = Thread {
            id: Self::fresh_id(now),
            title: title.to_string(),
            created_at: iso_timestamp(now),
            topic,
            user: user.clone(),
        };
        tracing::debug!(thread_id = %thread.id, topic_id, user_id = %user.id, "thread created");
        self.threads.push(thread);
        Ok(())
    }

    fn list_threads_by_topic_id(&self, topic_id: &str) -> Vec<Thread> {
        self.threads
            .iter()
            .filter(|t| t.belongs_to_topic(topic_id))
            .cloned()
            .collect()
    }

    fn list_comments_by_thread_id(&self, thread_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.belongs_to_thread(thread_id))
            .cloned()
            .collect()
    }

    fn create_comment(
        &mut self,
        content: &str,
        thread_id: &str,
        user: &User,
    ) -> Result<(), StoreError> {
        let Some(thread) = self.get_thread_by_id(thread_id) else {
            tracing::warn!(thread_id, "comment rejected, thread not found");
            return Err(StoreError::ThreadNotFound(thread_id.to_string()));
        };

        let now = self.clock.now();
        let comment = Comment {
            id: Self::fresh_id(now),
            content: content.to_string(),
            created_at: iso_timestamp(now),
            thread,
            user: user.clone(),
        };
        tracing::debug!(comment_id = %comment.id, thread_id, user_id = %user.id, "comment created");
        self.comments.push(comment);
        Ok(())
    }
}
