//! Campus administration: user and group lookups plus email notifications
//! (group announcements, teacher messages, birthday greetings).

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
