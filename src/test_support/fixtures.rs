pub mod clock;
pub mod users;
