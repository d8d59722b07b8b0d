use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_workout))
        .route("/profile", post(handlers::update_profile))
        .route("/summary", get(handlers::summary))
        .route("/diet", get(handlers::diet))
        .route("/plans", get(handlers::plans))
        .route("/export.csv", get(handlers::export_csv))
        .route("/api/health", get(handlers::health))
        .route("/api/workouts", get(handlers::get_workouts).post(handlers::create_workout))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/profile", post(handlers::put_profile))
        .with_state(state)
}
