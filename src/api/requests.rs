use ::log::warn;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::*;

use super::submission::{ScoreSubmission, SubmissionError, WriteOutcome};
use super::RequestResult;
use crate::database::{ScoreEntry, ScoreStore, StoreResult};

/// Fetches every score stored under `token`, oldest first.
/// An unknown token is answered with an empty list.
#[get("/<token>/scores")]
pub async fn get_scores(
    token: &str,
    store: &State<ScoreStore>,
) -> RequestResult<Json<Vec<ScoreEntry>>> {
    let scores = store.list_by_token(token).await?;
    Ok(Json(scores))
}

/// Tries to add a score under `token`, then responds with the current scores for it.
/// A submission that cannot be stored turns the status into 500,
/// but the body is still the list as it stands.
#[post("/<token>/scores", data = "<submission>")]
pub async fn post_score(
    token: &str,
    submission: Result<Json<ScoreSubmission>, json::Error<'_>>,
    store: &State<ScoreStore>,
) -> RequestResult<(Status, Json<Vec<ScoreEntry>>)> {
    let submission = submission
        .map(Json::into_inner)
        .map_err(|error| SubmissionError::MalformedBody {
            reason: error.to_string(),
        });

    let outcome = write_score(token, submission, store).await?;
    if let WriteOutcome::Rejected(error) = &outcome {
        warn!("Rejected a score for token {:?}: {}", token, error);
    }

    let scores = store.list_by_token(token).await?;
    Ok((outcome.status(), Json(scores)))
}

async fn write_score(
    token: &str,
    submission: Result<ScoreSubmission, SubmissionError>,
    store: &ScoreStore,
) -> StoreResult<WriteOutcome> {
    let submission = match submission {
        Ok(submission) => submission,
        Err(error) => return Ok(WriteOutcome::Rejected(error)),
    };

    let score = match submission.coerce_score() {
        Ok(score) => score,
        Err(error) => return Ok(WriteOutcome::Rejected(error)),
    };

    store.append(token, &submission.name, score).await?;
    Ok(WriteOutcome::Stored)
}
