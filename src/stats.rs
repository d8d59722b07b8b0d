use crate::aggregate::Aggregator;
use crate::models::{CategoryTotal, SummaryResponse};

pub fn build_summary(data: &Aggregator) -> SummaryResponse {
    let total_minutes = data.total_minutes();
    let tier = data.tier();

    let categories = data
        .categories()
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            minutes: data.category_minutes(*category),
            calories: round_kcal(data.category_calories(*category)),
            entries: data.entries(*category).len(),
        })
        .collect();

    SummaryResponse {
        total_minutes,
        total_calories: round_kcal(data.total_calories()),
        tier: tier.label().to_string(),
        message: tier.message().to_string(),
        categories,
        charts: data.chart_series(),
    }
}

fn round_kcal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateEntry, Category};
    use chrono::Local;

    fn add(data: &mut Aggregator, category: Category, minutes: u32) {
        data.record(CandidateEntry {
            exercise: "Drill".into(),
            duration_minutes: minutes,
            category,
            timestamp: Local::now(),
        });
    }

    #[test]
    fn summary_of_empty_log() {
        let summary = build_summary(&Aggregator::default());
        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.tier, "empty");
        assert!(summary.message.contains("No workout data logged yet"));
        assert_eq!(summary.categories.len(), 3);
        assert_eq!(summary.charts.bar.len(), 3);
        assert!(summary.charts.pie.is_empty());
    }

    #[test]
    fn summary_totals_and_counts() {
        let mut data = Aggregator::default();
        add(&mut data, Category::WarmUp, 20);
        add(&mut data, Category::Workout, 39);
        add(&mut data, Category::Workout, 1);

        let summary = build_summary(&data);
        assert_eq!(summary.total_minutes, 60);
        assert_eq!(summary.tier, "high");
        let workout = summary
            .categories
            .iter()
            .find(|total| total.category == Category::Workout)
            .expect("missing category");
        assert_eq!(workout.minutes, 40);
        assert_eq!(workout.entries, 2);
        assert_eq!(summary.charts.pie.len(), 2);
    }

    #[test]
    fn calories_are_rounded_to_one_decimal() {
        assert_eq!(round_kcal(7.349), 7.3);
        assert_eq!(round_kcal(0.0), 0.0);
    }
}
