mod schema;
mod score;
mod store;
mod store_error;

pub use score::{GameScore, ScoreEntry, ScoreRecord};
pub use store::ScoreStore;
pub use store_error::*;

pub type DatabasePool = sqlx::any::AnyPool;
