pub mod in_memory;
pub mod postgres;

pub use in_memory::{InMemoryUsersRepository, UsersRepositoryState};
pub use postgres::{PgPool, PostgresUsersRepository};
