use chrono::{DateTime, Utc};

/// Role value that marks a user as a teacher. Compared case-sensitively.
pub const TEACHER_ROLE: &str = "teacher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: String,
    pub group_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    pub fn is_teacher(&self) -> bool {
        self.has_role(TEACHER_ROLE)
    }
}
