use ::log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::*;

use crate::database::StoreError;

pub mod requests;
mod submission;

pub type RequestResult<T, E = rocket::response::Debug<StoreError>> = std::result::Result<T, E>;

/// Where the score routes are mounted.
pub const API_BASE: &str = "/api";

pub fn routes() -> Vec<Route> {
    routes![requests::get_scores, requests::post_score]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Body sent back whenever Rocket answers with an error of its own.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub status: u16,
    pub reason: String,
}

#[catch(default)]
fn default_catcher(status: Status, request: &Request<'_>) -> Json<ErrorBody> {
    if status.code >= 500 {
        error!("{} {} failed: {}", request.method(), request.uri(), status);
    }

    Json(ErrorBody {
        status: status.code,
        reason: status.reason().unwrap_or("Unknown Error").to_owned(),
    })
}
