/// Default size of the database connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const DATABASE_URL: &str = "DATABASE_URL";
const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

/// Everything the server needs to know before it can start.
/// Built once and handed to the store, never read from a global.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Reads the configuration from the process environment,
    /// loading a `.env` file first if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing { var: DATABASE_URL })?;

        let max_connections = match lookup(DATABASE_MAX_CONNECTIONS) {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: DATABASE_MAX_CONNECTIONS,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            max_connections,
            ..Self::new(database_url)
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing { var: &'static str },
    Invalid { var: &'static str, value: String },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { var } => write!(f, "{} environment variable is not set", var),
            Self::Invalid { var, value } => {
                write!(f, "{} has an invalid value: {:?}", var, value)
            }
        }
    }
}
