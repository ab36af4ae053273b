#[derive(Debug)]
pub enum StoreError {
    Connect { source: sqlx::Error },
    Query { source: sqlx::Error },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect { source } | Self::Query { source } => Some(source),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { source } => write!(f, "failed to connect to a database: {}", source),
            Self::Query { source } => write!(f, "database query failed: {}", source),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(source: sqlx::Error) -> Self {
        Self::Query { source }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
