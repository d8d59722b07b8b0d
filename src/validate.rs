//! Turns raw submitted text into typed entries, or says exactly why it can't.

use crate::models::{CandidateEntry, Category, ProfileForm, UserProfile, WorkoutForm};
use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingField(&'static str),

    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    #[error("Duration must be greater than zero.")]
    NonPositiveDuration,

    #[error("Unknown category '{0}'.")]
    UnknownCategory(String),

    #[error("{0} must be greater than zero.")]
    NonPositiveValue(&'static str),
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::NotANumber(_) => "not_a_number",
            ValidationError::NonPositiveDuration => "non_positive_duration",
            ValidationError::UnknownCategory(_) => "unknown_category",
            ValidationError::NonPositiveValue(_) => "non_positive_value",
        }
    }
}

fn missing_message(field: &str) -> String {
    match field {
        "exercise" | "duration" => "Please enter both exercise and duration.".to_string(),
        "registration_id" => "Please enter your registration ID.".to_string(),
        other => format!("Please enter your {other}."),
    }
}

pub fn validate_workout(
    form: &WorkoutForm,
    categories: &[Category],
) -> Result<CandidateEntry, ValidationError> {
    validate_workout_at(form, categories, Local::now())
}

pub fn validate_workout_at(
    form: &WorkoutForm,
    categories: &[Category],
    now: DateTime<Local>,
) -> Result<CandidateEntry, ValidationError> {
    let exercise = required(form.exercise.as_deref(), "exercise")?;
    let duration = required(form.duration.as_deref(), "duration")?;

    let duration: i64 = duration
        .parse()
        .map_err(|_| ValidationError::NotANumber("Duration"))?;
    if duration <= 0 {
        return Err(ValidationError::NonPositiveDuration);
    }
    let duration_minutes =
        u32::try_from(duration).map_err(|_| ValidationError::NotANumber("Duration"))?;

    let category = resolve_category(form.category.as_deref(), categories)?;

    Ok(CandidateEntry {
        exercise: exercise.to_string(),
        duration_minutes,
        category,
        timestamp: now,
    })
}

pub fn validate_profile(form: &ProfileForm) -> Result<UserProfile, ValidationError> {
    let name = required(form.name.as_deref(), "name")?;
    let registration_id = required(form.registration_id.as_deref(), "registration_id")?;
    let age = required(form.age.as_deref(), "age")?;
    let gender = required(form.gender.as_deref(), "gender")?;
    let height = required(form.height.as_deref(), "height")?;
    let weight = required(form.weight.as_deref(), "weight")?;

    let age: i64 = age.parse().map_err(|_| ValidationError::NotANumber("Age"))?;
    if age <= 0 {
        return Err(ValidationError::NonPositiveValue("Age"));
    }
    let age = u32::try_from(age).map_err(|_| ValidationError::NotANumber("Age"))?;

    Ok(UserProfile {
        name: name.to_string(),
        registration_id: registration_id.to_string(),
        age,
        gender: gender.to_string(),
        height_cm: positive_float(height, "Height")?,
        weight_kg: positive_float(weight, "Weight")?,
    })
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn positive_float(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let value: f64 = raw.parse().map_err(|_| ValidationError::NotANumber(field))?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(field));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue(field));
    }
    Ok(value)
}

// Blank or absent means the implicit default category, or the first
// configured one when the default is not offered.
fn resolve_category(
    raw: Option<&str>,
    categories: &[Category],
) -> Result<Category, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        let fallback = if categories.contains(&Category::DEFAULT) {
            Some(Category::DEFAULT)
        } else {
            categories.first().copied()
        };
        return fallback.ok_or_else(|| ValidationError::UnknownCategory(String::new()));
    }
    Category::from_label(raw)
        .filter(|category| categories.contains(category))
        .ok_or_else(|| ValidationError::UnknownCategory(raw.to_string()))
}
