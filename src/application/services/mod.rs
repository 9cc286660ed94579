pub mod email;
pub mod greetings;
