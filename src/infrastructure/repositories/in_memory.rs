use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    errors::DomainError,
    models::{BirthdayEmailData, Group, User},
    repositories::UsersRepository,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersRepositoryState {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
}

/// Keeps users and groups in insertion order so group lookups are stable.
#[derive(Default)]
pub struct InMemoryUsersRepository {
    state: Arc<RwLock<UsersRepositoryState>>,
    today: Option<NaiveDate>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: UsersRepositoryState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            today: None,
        }
    }

    /// Pins the date used for birthday selection.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub async fn snapshot(&self) -> UsersRepositoryState {
        self.state.read().await.clone()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn get_users_by_group(&self, group_name: &str) -> anyhow::Result<Vec<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .filter(|u| u.group_name == group_name)
            .cloned()
            .collect())
    }

    async fn get_users_in_birthday(&self) -> anyhow::Result<Vec<BirthdayEmailData>> {
        let today = self.today();
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .filter(|u| {
                let joined = u.created_at.date_naive();
                joined.month() == today.month()
                    && joined.day() == today.day()
                    && joined.year() < today.year()
            })
            .map(BirthdayEmailData::from)
            .collect())
    }

    async fn create_user(
        &self,
        id: &str,
        name: &str,
        surname: &str,
        email: &str,
        role: &str,
        group_name: &str,
    ) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.id == id) {
            return Err(DomainError::already_exists(format!("User {id} already exists")).into());
        }
        if !state.groups.iter().any(|g| g.name == group_name) {
            return Err(DomainError::not_found(format!("Group {group_name} does not exist")).into());
        }
        state.users.push(User {
            id: id.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            group_name: group_name.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn create_group(&self, id: &str, name: &str) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        if state.groups.iter().any(|g| g.id == id || g.name == name) {
            return Err(DomainError::already_exists(format!("Group {id} already exists")).into());
        }
        state.groups.push(Group {
            id: id.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }

    async fn get_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }
}
