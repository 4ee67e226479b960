// Forum domain value types.
//
// Structure
// - user.rs: User
// - topic.rs, thread.rs, comment.rs: content entities, each embedding copies of its parents
//
// Every type here is plain data. `Clone` is a full deep copy, which is what
// readers hand out so callers never share state with the store.

pub mod comment;
pub mod thread;
pub mod topic;
pub mod user;

pub use comment::Comment;
pub use thread::Thread;
pub use topic::Topic;
pub use user::User;

/// All four collections, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ForumSnapshot {
    pub users: Vec<User>,
    pub topics: Vec<Topic>,
    pub threads: Vec<Thread>,
    pub comments: Vec<Comment>,
}
