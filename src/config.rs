use std::env::var;

use dotenvy::dotenv;

const DEFAULT_DATABASE_NAME: &str = "postgres";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_host: String,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds the config from any key lookup; `try_parse` feeds it the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, &'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .ok_or("An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: lookup("SCHEME").ok_or("An error occured while getting SCHEME env param")?,
            host: lookup("HOST").ok_or("An error occured while getting HOST env param")?,
            database_host: lookup("DATABASE_HOST")
                .ok_or("An error occured while getting DATABASE_HOST env param")?,
            database_user: lookup("DATABASE_USER")
                .ok_or("An error occured while getting DATABASE_USER env param")?,
            database_password: lookup("DATABASE_PASSWORD")
                .ok_or("An error occured while getting DATABASE_PASSWORD env param")?,
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => raw.parse::<u32>().map_err(|_| {
                    "An error occured while parsing DATABASE_MAX_CONNECTIONS env param"
                })?,
                None => DEFAULT_DATABASE_MAX_CONNECTIONS,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.database_user, self.database_password, self.database_host, self.database_name
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> HashMap<String, String> {
        env(&[
            ("PORT", "8080"),
            ("SCHEME", "http"),
            ("HOST", "localhost"),
            ("DATABASE_HOST", "db:5432"),
            ("DATABASE_USER", "campus"),
            ("DATABASE_PASSWORD", "secret"),
        ])
    }

    #[test]
    fn parses_required_values_and_defaults() {
        let vars = base();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_name, "postgres");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.server_url(), "http://localhost:8080");
        assert_eq!(
            config.database_url(),
            "postgres://campus:secret@db:5432/postgres"
        );
    }

    #[test]
    fn optional_database_settings_override_defaults() {
        let mut vars = base();
        vars.insert("DATABASE_NAME".to_string(), "campus".to_string());
        vars.insert("DATABASE_MAX_CONNECTIONS".to_string(), "12".to_string());

        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.database_name, "campus");
        assert_eq!(config.database_max_connections, 12);
    }

    #[test]
    fn missing_database_password_is_reported() {
        let mut vars = base();
        vars.remove("DATABASE_PASSWORD");

        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();

        assert_eq!(err, "An error occured while getting DATABASE_PASSWORD env param");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let mut vars = base();
        vars.insert("PORT".to_string(), "eighty".to_string());

        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();

        assert_eq!(err, "An error occured while parsing PORT env param");
    }
}
