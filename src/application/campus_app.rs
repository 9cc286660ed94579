use std::sync::Arc;

use crate::{
    application::services::{
        email::EmailService,
        greetings::{GreetingSink, StdoutGreetingSink},
    },
    domain::{
        errors::DomainError,
        models::BirthdayGreeting,
        repositories::UsersRepository,
        value_objects::{EmailSubject, reconcile_body},
    },
};

/// Entry point for every campus use case.
///
/// Each operation runs its repository reads and email sends one after the
/// other, in repository order. The first failure aborts the operation;
/// emails already handed to the [`EmailService`] stay sent.
pub struct CampusApp {
    users_repo: Arc<dyn UsersRepository>,
    email_service: Arc<dyn EmailService>,
    greetings: Arc<dyn GreetingSink>,
}

impl CampusApp {
    pub fn new(users_repo: Arc<dyn UsersRepository>, email_service: Arc<dyn EmailService>) -> Self {
        Self {
            users_repo,
            email_service,
            greetings: Arc::new(StdoutGreetingSink),
        }
    }

    pub fn with_greeting_sink(mut self, greetings: Arc<dyn GreetingSink>) -> Self {
        self.greetings = greetings;
        self
    }

    pub async fn send_mail_to_group(
        &self,
        group_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        let users = self.users_repo.get_users_by_group(group_name).await?;
        tracing::debug!(group = group_name, recipients = users.len(), "sending group email");

        for user in &users {
            self.email_service.send_email(user, subject, body).await?;
        }
        Ok(())
    }

    pub async fn send_mail_to_group_role(
        &self,
        group_name: &str,
        role_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        let users = self.users_repo.get_users_by_group(group_name).await?;
        let recipients: Vec<_> = users.iter().filter(|u| u.has_role(role_name)).collect();
        tracing::debug!(
            group = group_name,
            role = role_name,
            recipients = recipients.len(),
            "sending group role email"
        );

        for user in recipients {
            self.email_service.send_email(user, subject, body).await?;
        }
        Ok(())
    }

    /// Hands a greeting per birthday user to the greeting sink. Nothing is
    /// sent through the email service.
    pub async fn send_birthday_emails(&self) -> Result<(), DomainError> {
        let birthdays = self.users_repo.get_users_in_birthday().await?;
        tracing::debug!(recipients = birthdays.len(), "publishing birthday greetings");

        for data in &birthdays {
            self.greetings.publish(&BirthdayGreeting::from(data));
        }
        Ok(())
    }

    pub async fn create_user(
        &self,
        id: &str,
        name: &str,
        surname: &str,
        email: &str,
        role: &str,
        group_name: &str,
    ) -> Result<(), DomainError> {
        self.users_repo
            .create_user(id, name, surname, email, role, group_name)
            .await?;
        Ok(())
    }

    pub async fn create_group(&self, id: &str, name: &str) -> Result<(), DomainError> {
        self.users_repo.create_group(id, name).await?;
        Ok(())
    }

    /// Checks run in a fixed order: subject, then existence, then role.
    pub async fn send_email_to_teacher_id(
        &self,
        id: &str,
        subject: Option<&str>,
        body: &str,
    ) -> Result<(), DomainError> {
        let subject = EmailSubject::parse(subject)?;

        let user = self
            .users_repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User {id} does not exist")))?;

        if !user.is_teacher() {
            return Err(DomainError::validation(format!("User {id} is not a teacher")));
        }

        self.email_service
            .send_email(&user, subject.as_str(), body)
            .await?;
        Ok(())
    }

    pub async fn send_email_to_teacher_id_with_confirmation(
        &self,
        id: &str,
        subject: Option<&str>,
        body: Option<&str>,
        confirm: bool,
    ) -> Result<(), DomainError> {
        let body = reconcile_body(body, confirm)?;
        self.send_email_to_teacher_id(id, subject, &body).await
    }
}
