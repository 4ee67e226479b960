// Composition root for the forum mock.
//
// Responsibilities
// - Read config from environment.
// - Build the single store instance the client application is handed.

pub mod config;

use crate::adapters::in_memory::in_memory_forum_store::InMemoryForumStore;
use crate::shell::config::MockConfig;

pub fn build_store(config: &MockConfig) -> InMemoryForumStore {
    let store = if config.seed_fixtures {
        InMemoryForumStore::seeded()
    } else {
        InMemoryForumStore::new()
    };
    let store = store.with_color_range(config.colors);
    match config.rng_seed {
        Some(seed) => store.with_rng_seed(seed),
        None => store,
    }
}
