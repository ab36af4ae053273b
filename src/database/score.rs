use rocket::serde::{Deserialize, Serialize};

pub type GameScore = i64;
pub type RecordId = i64;

/// A single row of the `scores` table.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    pub id: RecordId,
    pub token: String,
    pub name: String,
    pub score: GameScore,
}

/// What the API hands back for every stored score.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreEntry {
    pub name: String,
    pub score: GameScore,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: GameScore) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl From<ScoreRecord> for ScoreEntry {
    fn from(record: ScoreRecord) -> Self {
        Self::new(record.name, record.score)
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score(name={}, score={}, token={})",
            self.name, self.score, self.token
        )
    }
}
