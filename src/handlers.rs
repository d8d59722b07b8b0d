use crate::aggregate::Aggregator;
use crate::errors::AppError;
use crate::export::render_csv;
use crate::models::{ProfileForm, SummaryResponse, UserProfile, WorkoutEntry, WorkoutForm, WorkoutsResponse};
use crate::plans::workout_plans_for;
use crate::state::AppState;
use crate::stats::build_summary;
use crate::ui::{IndexView, render_diet, render_index, render_plans, render_summary};
use crate::validate::{validate_profile, validate_workout};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(index_page(&data, None, None))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Form(form): Form<WorkoutForm>,
) -> Html<String> {
    let mut data = state.data.lock().await;
    let (message, error) = match validate_workout(&form, data.categories()) {
        Ok(candidate) => {
            let entry = data.record(candidate);
            (Some(format!("'{}' added successfully!", entry.exercise())), None)
        }
        Err(err) => {
            warn!(kind = err.kind(), "workout rejected");
            (None, Some(err.to_string()))
        }
    };
    Html(index_page(&data, message, error))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Html<String> {
    let mut data = state.data.lock().await;
    let (message, error) = match validate_profile(&form) {
        Ok(profile) => {
            let message = format!("Profile saved for {}.", profile.name);
            data.set_profile(profile);
            (Some(message), None)
        }
        Err(err) => {
            warn!(kind = err.kind(), "profile rejected");
            (None, Some(err.to_string()))
        }
    };
    Html(index_page(&data, message, error))
}

pub async fn summary(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_summary(&build_summary(&data), state.capabilities))
}

pub async fn diet() -> Html<String> {
    Html(render_diet())
}

pub async fn plans(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_plans(&workout_plans_for(data.categories())))
}

pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if !state.capabilities.export {
        return Err(AppError::not_found("report export is disabled"));
    }

    let data = state.data.lock().await;
    let report = render_csv(data.all_entries(), data.profile())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"workout_report.csv\"",
            ),
        ],
        report,
    ))
}

pub async fn get_workouts(State(state): State<AppState>) -> Json<WorkoutsResponse> {
    let data = state.data.lock().await;
    Json(WorkoutsResponse {
        entries: data.all_entries().into_iter().cloned().collect(),
        profile: data.profile().cloned(),
    })
}

pub async fn create_workout(
    State(state): State<AppState>,
    payload: Result<Json<WorkoutForm>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutEntry>), AppError> {
    let Json(form) = payload?;
    let mut data = state.data.lock().await;
    let candidate = validate_workout(&form, data.categories()).inspect_err(|err| {
        warn!(kind = err.kind(), "workout rejected");
    })?;
    let entry = data.record(candidate).clone();
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let data = state.data.lock().await;
    Json(build_summary(&data))
}

pub async fn put_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> Result<Json<UserProfile>, AppError> {
    let Json(form) = payload?;
    let profile = validate_profile(&form).inspect_err(|err| {
        warn!(kind = err.kind(), "profile rejected");
    })?;
    state.data.lock().await.set_profile(profile.clone());
    Ok(Json(profile))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn index_page(data: &Aggregator, message: Option<String>, error: Option<String>) -> String {
    let view = IndexView {
        categories: data.categories(),
        entries: data
            .categories()
            .iter()
            .map(|category| (*category, data.entries(*category)))
            .collect(),
        profile: data.profile(),
        message,
        error,
    };
    render_index(&view)
}
