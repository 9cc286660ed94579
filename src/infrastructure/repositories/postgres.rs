use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres, postgres::PgPoolOptions};

use crate::{
    config::Config,
    domain::{
        errors::DomainError,
        models::{BirthdayEmailData, User},
        repositories::UsersRepository,
    },
};

pub type PgPool = Pool<Postgres>;

/// Anniversaries are judged on the UTC calendar, independent of the session
/// `TimeZone`, so both repositories agree on what "today" is.
const BIRTHDAY_QUERY: &str = r#"
    SELECT email, name, surname, created_at
    FROM users
    WHERE EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')
            = EXTRACT(MONTH FROM (now() AT TIME ZONE 'UTC')::date)
      AND EXTRACT(DAY FROM created_at AT TIME ZONE 'UTC')
            = EXTRACT(DAY FROM (now() AT TIME ZONE 'UTC')::date)
      AND EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')
            < EXTRACT(YEAR FROM (now() AT TIME ZONE 'UTC')::date)
    ORDER BY created_at, id
"#;

/// Opens the pool and applies the bundled migrations.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url())
        .await
        .with_context(|| format!("connecting to database at {}", config.database_host))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running database migrations")?;

    Ok(pool)
}

#[derive(Clone)]
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn get_users_by_group(&self, group_name: &str) -> anyhow::Result<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.name, u.surname, u.email, u.role, g.name AS group_name, u.created_at
            FROM users u
            JOIN user_groups g ON g.id = u.group_id
            WHERE g.name = $1
            ORDER BY u.created_at, u.id
            "#,
        )
        .bind(group_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    async fn get_users_in_birthday(&self) -> anyhow::Result<Vec<BirthdayEmailData>> {
        let records = sqlx::query_as::<_, BirthdayRecord>(BIRTHDAY_QUERY)
            .fetch_all(&self.pool)
            .await?;
        Ok(records.into_iter().map(BirthdayEmailData::from).collect())
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
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, surname, email, role, group_id)
            SELECT $1, $2, $3, $4, $5, g.id
            FROM user_groups g
            WHERE g.name = $6
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(surname)
        .bind(email)
        .bind(role)
        .bind(group_name)
        .execute(&self.pool)
        .await
        .map_err(|err| conflict_or(err, format!("User {id} already exists")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Group {group_name} does not exist")).into());
        }
        Ok(())
    }

    async fn create_group(&self, id: &str, name: &str) -> anyhow::Result<()> {
        sqlx::query(r#"INSERT INTO user_groups (id, name) VALUES ($1, $2)"#)
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|err| conflict_or(err, format!("Group {id} already exists")))?;
        Ok(())
    }

    async fn get_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.name, u.surname, u.email, u.role, g.name AS group_name, u.created_at
            FROM users u
            JOIN user_groups g ON g.id = u.group_id
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }
}

/// Unique violations become a typed conflict; anything else stays opaque.
fn conflict_or(err: sqlx::Error, message: String) -> anyhow::Error {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::already_exists(message).into()
        }
        _ => err.into(),
    }
}

#[derive(Debug, FromRow)]
struct UserRecord {
    id: String,
    name: String,
    surname: String,
    email: String,
    role: String,
    group_name: String,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        User {
            id: value.id,
            name: value.name,
            surname: value.surname,
            email: value.email,
            role: value.role,
            group_name: value.group_name,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct BirthdayRecord {
    email: String,
    name: String,
    surname: String,
    created_at: DateTime<Utc>,
}

impl From<BirthdayRecord> for BirthdayEmailData {
    fn from(value: BirthdayRecord) -> Self {
        BirthdayEmailData {
            email: value.email,
            name: value.name,
            surname: value.surname,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_query_uses_utc_calendar_date() {
        assert!(!BIRTHDAY_QUERY.contains("CURRENT_DATE"));
        assert_eq!(
            BIRTHDAY_QUERY
                .matches("(now() AT TIME ZONE 'UTC')::date")
                .count(),
            3
        );
        assert_eq!(BIRTHDAY_QUERY.matches("created_at AT TIME ZONE 'UTC'").count(), 3);
    }

    #[test]
    fn non_database_errors_stay_opaque() {
        let err = conflict_or(sqlx::Error::RowNotFound, "User 1 already exists".to_string());

        assert!(err.downcast_ref::<DomainError>().is_none());
        assert!(err.downcast_ref::<sqlx::Error>().is_some());
    }
}
