use crate::domain::models::BirthdayGreeting;

/// Destination for rendered birthday greetings. These never go through
/// [`EmailService`](super::email::EmailService).
pub trait GreetingSink: Send + Sync {
    fn publish(&self, greeting: &BirthdayGreeting);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutGreetingSink;

impl GreetingSink for StdoutGreetingSink {
    fn publish(&self, greeting: &BirthdayGreeting) {
        println!("{greeting}");
    }
}
