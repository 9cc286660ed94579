pub mod birthdays;
pub mod groups;
pub mod health;
pub mod root;
pub mod teachers;
pub mod users;
