pub mod birthday;
pub mod group;
pub mod user;

pub use birthday::{BirthdayEmailData, BirthdayGreeting};
pub use group::Group;
pub use user::{TEACHER_ROLE, User};
