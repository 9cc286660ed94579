use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{
    application::{campus_app::CampusApp, services::greetings::GreetingSink},
    domain::models::{BirthdayGreeting, Group, User},
    infrastructure::{
        email::InMemoryEmailService,
        repositories::{InMemoryUsersRepository, UsersRepositoryState},
    },
};

fn user(
    id: &str,
    name: &str,
    surname: &str,
    email: &str,
    role: &str,
    group_name: &str,
    joined: (i32, u32, u32),
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        group_name: group_name.to_string(),
        created_at: Utc
            .with_ymd_and_hms(joined.0, joined.1, joined.2, 8, 0, 0)
            .unwrap(),
    }
}

pub fn default_initial_state() -> UsersRepositoryState {
    UsersRepositoryState {
        users: vec![
            user(
                "1",
                "John",
                "Doe",
                "john.doe@example.com",
                "student",
                "swqa",
                (2018, 9, 15),
            ),
            user(
                "2",
                "Jane",
                "Doe",
                "jane.doe@example.com",
                "student",
                "swqa",
                (2019, 10, 19),
            ),
            user(
                "3",
                "Mariah",
                "Hairam",
                "mariah.hairam@example.com",
                "teacher",
                "swqa",
                (2015, 2, 3),
            ),
            user(
                "4",
                "Grace",
                "Hopper",
                "grace.hopper@example.com",
                "teacher",
                "bigdata",
                (2017, 6, 30),
            ),
        ],
        groups: vec![
            Group {
                id: "1".to_string(),
                name: "swqa".to_string(),
            },
            Group {
                id: "2".to_string(),
                name: "bigdata".to_string(),
            },
        ],
    }
}

#[derive(Default)]
pub struct RecordingGreetingSink {
    published: Mutex<Vec<BirthdayGreeting>>,
}

impl RecordingGreetingSink {
    pub fn published(&self) -> Vec<BirthdayGreeting> {
        self.published.lock().unwrap().clone()
    }
}

impl GreetingSink for RecordingGreetingSink {
    fn publish(&self, greeting: &BirthdayGreeting) {
        self.published.lock().unwrap().push(greeting.clone());
    }
}

/// A `CampusApp` over in-memory adapters, keeping handles for assertions.
pub struct TestCampus {
    pub app: CampusApp,
    pub users: Arc<InMemoryUsersRepository>,
    pub emails: Arc<InMemoryEmailService>,
    pub greetings: Arc<RecordingGreetingSink>,
}

impl TestCampus {
    pub fn new(state: UsersRepositoryState) -> Self {
        Self::build(InMemoryUsersRepository::with_state(state))
    }

    pub fn on(state: UsersRepositoryState, today: NaiveDate) -> Self {
        Self::build(InMemoryUsersRepository::with_state(state).with_today(today))
    }

    fn build(repo: InMemoryUsersRepository) -> Self {
        let users = Arc::new(repo);
        let emails = Arc::new(InMemoryEmailService::new());
        let greetings = Arc::new(RecordingGreetingSink::default());
        let app =
            CampusApp::new(users.clone(), emails.clone()).with_greeting_sink(greetings.clone());
        Self {
            app,
            users,
            emails,
            greetings,
        }
    }
}
