use crate::models::{CandidateEntry, Category, ChartPoint, ChartSeries, UserProfile, WorkoutEntry};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Oxygen cost of one MET in ml/kg/min.
const ML_O2_PER_MET: f64 = 3.5;
const KCAL_DIVISOR: f64 = 200.0;

/// Per-category MET multipliers used for calorie estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct MetTable {
    values: BTreeMap<Category, f64>,
}

impl MetTable {
    pub fn new(values: impl IntoIterator<Item = (Category, f64)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn met_for(&self, category: Category) -> Option<f64> {
        self.values.get(&category).copied()
    }

    pub fn set(&mut self, category: Category, met: f64) {
        self.values.insert(category, met);
    }
}

impl Default for MetTable {
    fn default() -> Self {
        Self::new([
            (Category::WarmUp, 3.0),
            (Category::Workout, 6.0),
            (Category::CoolDown, 2.5),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Empty,
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Empty => "empty",
            Tier::Low => "low",
            Tier::Mid => "mid",
            Tier::High => "high",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Empty => "No workout data logged yet. Add your first session to get started!",
            Tier::Low => "Good start! Keep moving and build up your minutes.",
            Tier::Mid => "Nice effort! You're building consistency.",
            Tier::High => "Excellent dedication! Keep up the great work.",
        }
    }
}

pub fn motivational_tier(total_minutes: u64) -> Tier {
    match total_minutes {
        0 => Tier::Empty,
        1..30 => Tier::Low,
        30..60 => Tier::Mid,
        _ => Tier::High,
    }
}

/// The in-memory workout log plus the live user profile.
#[derive(Debug, Clone)]
pub struct Aggregator {
    categories: Vec<Category>,
    met_table: Option<MetTable>,
    store: BTreeMap<Category, Vec<WorkoutEntry>>,
    profile: Option<UserProfile>,
}

impl Aggregator {
    pub fn new(categories: Vec<Category>, met_table: Option<MetTable>) -> Self {
        Self {
            categories,
            met_table,
            store: BTreeMap::new(),
            profile: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        info!(name = %profile.name, weight_kg = profile.weight_kg, "user profile updated");
        self.profile = Some(profile);
    }

    pub fn record(&mut self, candidate: CandidateEntry) -> &WorkoutEntry {
        let calories = self.estimate_calories(candidate.category, candidate.duration_minutes);
        let category = candidate.category;
        info!(
            %category,
            exercise = %candidate.exercise,
            duration_minutes = candidate.duration_minutes,
            "workout recorded"
        );

        let entries = self.store.entry(category).or_default();
        entries.push(WorkoutEntry::from_candidate(candidate, calories));
        &entries[entries.len() - 1]
    }

    fn estimate_calories(&self, category: Category, duration_minutes: u32) -> Option<f64> {
        let weight_kg = self.profile.as_ref()?.weight_kg;
        let met = self.met_table.as_ref()?.met_for(category)?;
        let calories = met * ML_O2_PER_MET * weight_kg / KCAL_DIVISOR * f64::from(duration_minutes);
        debug!(%category, met, calories, "calories estimated");
        Some(calories)
    }

    pub fn entries(&self, category: Category) -> &[WorkoutEntry] {
        self.store.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every entry, grouped in configured category order.
    pub fn all_entries(&self) -> Vec<&WorkoutEntry> {
        self.categories
            .iter()
            .flat_map(|category| self.entries(*category))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.store.values().all(Vec::is_empty)
    }

    pub fn category_minutes(&self, category: Category) -> u64 {
        self.entries(category)
            .iter()
            .map(|entry| u64::from(entry.duration_minutes()))
            .sum()
    }

    pub fn category_calories(&self, category: Category) -> f64 {
        self.entries(category)
            .iter()
            .filter_map(WorkoutEntry::calories)
            .sum()
    }

    pub fn total_minutes(&self) -> u64 {
        self.categories
            .iter()
            .map(|category| self.category_minutes(*category))
            .sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.categories
            .iter()
            .map(|category| self.category_calories(*category))
            .sum()
    }

    pub fn per_category_minutes(&self) -> Vec<(Category, u64)> {
        self.categories
            .iter()
            .map(|category| (*category, self.category_minutes(*category)))
            .collect()
    }

    pub fn per_category_calories(&self) -> Vec<(Category, f64)> {
        self.categories
            .iter()
            .map(|category| (*category, self.category_calories(*category)))
            .collect()
    }

    pub fn tier(&self) -> Tier {
        motivational_tier(self.total_minutes())
    }

    pub fn bar_series(&self) -> Vec<ChartPoint> {
        self.per_category_minutes()
            .into_iter()
            .map(|(category, minutes)| ChartPoint { category, minutes })
            .collect()
    }

    pub fn pie_series(&self) -> Vec<ChartPoint> {
        self.bar_series()
            .into_iter()
            .filter(|point| point.minutes > 0)
            .collect()
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            bar: self.bar_series(),
            pie: self.pie_series(),
        }
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.profile = None;
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Category::ALL.to_vec(), Some(MetTable::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn candidate(category: Category, exercise: &str, minutes: u32) -> CandidateEntry {
        CandidateEntry {
            exercise: exercise.to_string(),
            duration_minutes: minutes,
            category,
            timestamp: Local::now(),
        }
    }

    fn profile(weight_kg: f64) -> UserProfile {
        UserProfile {
            name: "Asha".into(),
            registration_id: "REG-7".into(),
            age: 29,
            gender: "F".into(),
            height_cm: 165.0,
            weight_kg,
        }
    }

    fn minutes_for(agg: &Aggregator, category: Category) -> u64 {
        agg.per_category_minutes()
            .into_iter()
            .find(|(c, _)| *c == category)
            .map(|(_, minutes)| minutes)
            .unwrap()
    }

    #[test]
    fn record_adds_exact_duration_to_its_category() {
        let mut agg = Aggregator::default();
        let before = minutes_for(&agg, Category::Workout);
        agg.record(candidate(Category::Workout, "Pushups", 20));
        assert_eq!(minutes_for(&agg, Category::Workout), before + 20);
        assert_eq!(minutes_for(&agg, Category::WarmUp), 0);
        assert_eq!(agg.tier(), Tier::Low);
    }

    #[test]
    fn total_matches_sum_of_categories() {
        let mut agg = Aggregator::default();
        agg.record(candidate(Category::WarmUp, "Jumping Jacks", 20));
        agg.record(candidate(Category::Workout, "Squats", 30));
        agg.record(candidate(Category::CoolDown, "Stretching", 60));

        let sum: u64 = agg.per_category_minutes().iter().map(|(_, m)| m).sum();
        assert_eq!(agg.total_minutes(), 110);
        assert_eq!(sum, agg.total_minutes());
        assert_eq!(agg.tier(), Tier::High);
    }

    #[test]
    fn insertion_order_does_not_change_totals() {
        let a = candidate(Category::Workout, "Run", 25);
        let b = candidate(Category::WarmUp, "Skip", 7);

        let mut forward = Aggregator::default();
        forward.record(a.clone());
        forward.record(b.clone());

        let mut backward = Aggregator::default();
        backward.record(b);
        backward.record(a);

        assert_eq!(forward.total_minutes(), backward.total_minutes());
        assert_eq!(forward.per_category_minutes(), backward.per_category_minutes());
        assert_eq!(forward.chart_series(), backward.chart_series());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(motivational_tier(0), Tier::Empty);
        assert_eq!(motivational_tier(1), Tier::Low);
        assert_eq!(motivational_tier(29), Tier::Low);
        assert_eq!(motivational_tier(30), Tier::Mid);
        assert_eq!(motivational_tier(59), Tier::Mid);
        assert_eq!(motivational_tier(60), Tier::High);
        assert_eq!(Tier::Mid.label(), "mid");
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut agg = Aggregator::default();
        agg.record(candidate(Category::Workout, "First", 5));
        agg.record(candidate(Category::Workout, "Second", 5));
        let names: Vec<_> = agg
            .entries(Category::Workout)
            .iter()
            .map(|e| e.exercise())
            .collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn calories_need_profile_and_met_table() {
        let mut agg = Aggregator::default();
        assert_eq!(agg.record(candidate(Category::Workout, "Run", 30)).calories(), None);

        agg.set_profile(profile(70.0));
        let entry = agg.record(candidate(Category::Workout, "Run", 30));
        // 6.0 * 3.5 * 70 / 200 * 30
        let expected = 220.5;
        assert!((entry.calories().unwrap() - expected).abs() < 1e-9);
        assert!((agg.total_calories() - expected).abs() < 1e-9);

        let mut no_met = Aggregator::new(Category::ALL.to_vec(), None);
        no_met.set_profile(profile(70.0));
        assert_eq!(no_met.record(candidate(Category::Workout, "Run", 30)).calories(), None);
    }

    #[test]
    fn bar_series_keeps_zero_categories_pie_drops_them() {
        let mut agg = Aggregator::default();
        agg.record(candidate(Category::CoolDown, "Stretch", 10));

        let series = agg.chart_series();
        assert_eq!(series.bar.len(), 3);
        assert_eq!(series.bar[0].category, Category::WarmUp);
        assert_eq!(series.bar[0].minutes, 0);
        assert_eq!(
            series.pie,
            vec![ChartPoint {
                category: Category::CoolDown,
                minutes: 10
            }]
        );
    }

    #[test]
    fn series_follow_configured_order() {
        let agg = Aggregator::new(vec![Category::CoolDown, Category::WarmUp], None);
        let order: Vec<_> = agg.bar_series().iter().map(|p| p.category).collect();
        assert_eq!(order, [Category::CoolDown, Category::WarmUp]);
    }

    #[test]
    fn reset_clears_entries_and_profile() {
        let mut agg = Aggregator::default();
        agg.set_profile(profile(80.0));
        agg.record(candidate(Category::Workout, "Row", 12));
        agg.reset();
        assert!(agg.is_empty());
        assert!(agg.profile().is_none());
        assert_eq!(agg.tier(), Tier::Empty);
    }
}
