// Shared test fixture for forum users.
// Compiled into the crate only for tests, exposed under `crate::test_support::fixtures`.

use crate::core::forum::User;
use std::fs;

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/test_support/fixtures/json/user.json").unwrap();
        let inner: User = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn color_hex(mut self, v: impl Into<String>) -> Self {
        self.inner.color_hex = v.into();
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}
