use std::fmt;

use chrono::{DateTime, Utc};

use super::User;

pub const BIRTHDAY_SUBJECT: &str = "Happy Campus Birthday!";

/// Projection of a [`User`] carrying only what the birthday greeting needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEmailData {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for BirthdayEmailData {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGreeting {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl From<&BirthdayEmailData> for BirthdayGreeting {
    fn from(data: &BirthdayEmailData) -> Self {
        Self {
            recipient: data.email.clone(),
            subject: BIRTHDAY_SUBJECT.to_string(),
            body: format!(
                "Happy campus birthday {} {}!\nYou have been with us since {}",
                data.name,
                data.surname,
                data.created_at.date_naive()
            ),
        }
    }
}

impl fmt::Display for BirthdayGreeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--------\nto: {}\nsubject: {}\nbody:\n{}\n--------\n",
            self.recipient, self.subject, self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn greeting_renders_fixed_template() {
        let data = BirthdayEmailData {
            email: "john.doe@example.com".to_string(),
            name: "John".to_string(),
            surname: "Doe".to_string(),
            created_at: Utc.with_ymd_and_hms(2019, 3, 14, 9, 30, 0).unwrap(),
        };

        let greeting = BirthdayGreeting::from(&data);

        assert_eq!(
            greeting.to_string(),
            "--------\n\
             to: john.doe@example.com\n\
             subject: Happy Campus Birthday!\n\
             body:\n\
             Happy campus birthday John Doe!\n\
             You have been with us since 2019-03-14\n\
             --------\n"
        );
    }
}
