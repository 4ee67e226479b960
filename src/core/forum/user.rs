// Forum user.
//
// Purpose
// - Represent an account as the client application sees it.
//
// Notes
// - Users are created on login and removed on logout; they are never edited.
// - `created_at` is kept as the display string handed out by the backend.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub created_at: String,
    pub color_hex: String,
}

#[cfg(test)]
mod forum_user_tests {
    use crate::test_support::fixtures::users::UserBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_with_the_client_field_names() {
        let json = serde_json::to_value(UserBuilder::new().build()).unwrap();
        assert_eq!(json["id"], "user-fixed-0001");
        assert_eq!(json["created_at"], "Sat Oct 17 2026");
        assert_eq!(json["color_hex"], "#3d315b");
    }
}
