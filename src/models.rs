use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Warm-up")]
    WarmUp,
    Workout,
    #[serde(rename = "Cool-down")]
    CoolDown,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::WarmUp, Category::Workout, Category::CoolDown];

    /// Category used when a submission carries no category at all.
    pub const DEFAULT: Category = Category::Workout;

    pub fn label(self) -> &'static str {
        match self {
            Category::WarmUp => "Warm-up",
            Category::Workout => "Workout",
            Category::CoolDown => "Cool-down",
        }
    }

    /// Matches a display label, ignoring case and surrounding whitespace.
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEntry {
    pub exercise: String,
    pub duration_minutes: u32,
    pub category: Category,
    pub timestamp: DateTime<Local>,
}

/// A stored workout. Only the aggregator builds these, so they stay as recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutEntry {
    exercise: String,
    duration_minutes: u32,
    category: Category,
    timestamp: DateTime<Local>,
    calories: Option<f64>,
}

impl WorkoutEntry {
    pub(crate) fn from_candidate(candidate: CandidateEntry, calories: Option<f64>) -> Self {
        Self {
            exercise: candidate.exercise,
            duration_minutes: candidate.duration_minutes,
            category: candidate.category,
            timestamp: candidate.timestamp,
            calories,
        }
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn calories(&self) -> Option<f64> {
        self.calories
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub registration_id: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Raw workout fields as they arrive from the HTML form or the JSON API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkoutForm {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub weight: Option<String>,
}

/// Accepts JSON numbers where the HTML form would send text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub category: Category,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub bar: Vec<ChartPoint>,
    pub pie: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub minutes: u64,
    pub calories: f64,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total_minutes: u64,
    pub total_calories: f64,
    pub tier: String,
    pub message: String,
    pub categories: Vec<CategoryTotal>,
    pub charts: ChartSeries,
}

#[derive(Debug, Serialize)]
pub struct WorkoutsResponse {
    pub entries: Vec<WorkoutEntry>,
    pub profile: Option<UserProfile>,
}
