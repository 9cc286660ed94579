pub mod in_memory;
pub mod logging;

pub use in_memory::{InMemoryEmailService, SentEmail};
pub use logging::LoggingEmailService;
