use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use studbud_core::{check_hours, StudbudError, StudyInputs, DEFAULT_HOURS};

use super::AppState;
use crate::form::parse_selections;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/plan", post(create_plan))
}

#[derive(Debug, Deserialize)]
struct PlanRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default = "default_hours")]
    hours: i64,
    #[serde(default)]
    goals: String,
    #[serde(default)]
    strengths: String,
    #[serde(default)]
    weaknesses: String,
    #[serde(default)]
    preferences: Vec<String>,
}

fn default_hours() -> i64 {
    i64::from(DEFAULT_HOURS)
}

impl PlanRequest {
    fn into_inputs(self) -> Result<StudyInputs, StudbudError> {
        let hours = check_hours(self.hours)?;
        let (subjects, preferences) = parse_selections(&self.subjects, &self.preferences)?;
        Ok(StudyInputs::from_selections(
            self.name,
            &subjects,
            hours,
            self.goals,
            self.strengths,
            self.weaknesses,
            &preferences,
        ))
    }
}

async fn create_plan(
    State(state): State<AppState>,
    body: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Json(input) = body.map_err(|rejection| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": rejection.body_text() })),
        )
    })?;
    let inputs = input.into_inputs().map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    state
        .requester
        .generate_plan(&inputs)
        .await
        .map(|plan| Json(json!({ "plan": plan })))
        .map_err(|e| (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))))
}
