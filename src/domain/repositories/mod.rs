use async_trait::async_trait;

use crate::domain::models::{BirthdayEmailData, User};

/// Read/write access to campus users and groups.
///
/// Implementations own referential integrity and duplicate handling; the
/// use cases above forward whatever error an implementation raises.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Members of `group_name` in storage order. Unknown groups yield an
    /// empty list.
    async fn get_users_by_group(&self, group_name: &str) -> anyhow::Result<Vec<User>>;

    /// Users whose campus anniversary falls on the implementation's today.
    async fn get_users_in_birthday(&self) -> anyhow::Result<Vec<BirthdayEmailData>>;

    async fn create_user(
        &self,
        id: &str,
        name: &str,
        surname: &str,
        email: &str,
        role: &str,
        group_name: &str,
    ) -> anyhow::Result<()>;

    async fn create_group(&self, id: &str, name: &str) -> anyhow::Result<()>;

    async fn get_user_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
}
