use rocket::http::Status;
use rocket::serde::json::Value;
use rocket::serde::Deserialize;

use crate::database::GameScore;

/// Body of a score write. `score` stays a raw JSON value until it is coerced.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub name: String,
    pub score: Value,
}

impl ScoreSubmission {
    pub fn coerce_score(&self) -> Result<GameScore, SubmissionError> {
        coerce_score(&self.score)
    }
}

/// Result of the write half of a request.
#[derive(Debug)]
pub enum WriteOutcome {
    Stored,
    Rejected(SubmissionError),
}

impl WriteOutcome {
    pub fn status(&self) -> Status {
        match self {
            Self::Stored => Status::Ok,
            Self::Rejected(_) => Status::InternalServerError,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmissionError {
    MalformedBody { reason: String },
    InvalidScore { score: Value },
}

impl std::error::Error for SubmissionError {}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed score submission: {}", reason),
            Self::InvalidScore { score } => write!(f, "score is not an integer: {}", score),
        }
    }
}

/// Turns a JSON value into an integer score.
/// Floats are truncated toward zero, numeric strings are parsed, booleans count as 0 or 1.
pub fn coerce_score(score: &Value) -> Result<GameScore, SubmissionError> {
    let coerced = match score {
        Value::Number(number) => match number.as_i64() {
            Some(score) => Some(score),
            None => number.as_f64().and_then(truncate),
        },
        Value::String(text) => text.trim().parse::<GameScore>().ok(),
        Value::Bool(flag) => Some(GameScore::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    coerced.ok_or_else(|| SubmissionError::InvalidScore {
        score: score.clone(),
    })
}

fn truncate(value: f64) -> Option<GameScore> {
    let value = value.trunc();
    // 2^63 itself is out of range, -2^63 is not
    if value.is_finite() && value >= GameScore::MIN as f64 && value < GameScore::MAX as f64 {
        Some(value as GameScore)
    } else {
        None
    }
}
