//! Inline SVG charts for the summary page.

use crate::models::{Category, ChartPoint};
use std::f64::consts::PI;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;

fn color(category: Category) -> &'static str {
    match category {
        Category::WarmUp => "#f4a259",
        Category::Workout => "#e0524b",
        Category::CoolDown => "#5b8e7d",
    }
}

pub fn render_bar_chart(series: &[ChartPoint]) -> String {
    if series.is_empty() {
        return placeholder("No categories configured");
    }

    let max = series.iter().map(|point| point.minutes).max().unwrap_or(0).max(1) as f64;
    let plot_height = HEIGHT - TOP - PADDING_Y;
    let slot = (WIDTH - PADDING_X * 2.0) / series.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = HEIGHT - PADDING_Y;

    let mut svg = open_svg("Minutes per category");
    svg.push_str(&format!(
        r#"<line class="chart-axis" x1="{PADDING_X}" y1="{baseline}" x2="{}" y2="{baseline}" />"#,
        WIDTH - PADDING_X
    ));

    for (index, point) in series.iter().enumerate() {
        let height = point.minutes as f64 / max * plot_height;
        let x = PADDING_X + slot * index as f64 + (slot - bar_width) / 2.0;
        let y = baseline - height;
        let center = x + bar_width / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" rx="6" fill="{}" />"#,
            color(point.category)
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{center:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            y - 6.0,
            point.minutes
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{center:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            baseline + 18.0,
            point.category
        ));
    }

    svg.push_str("</svg>");
    svg
}

pub fn render_pie_chart(series: &[ChartPoint]) -> String {
    let total: u64 = series.iter().map(|point| point.minutes).sum();
    if total == 0 {
        return placeholder("No data yet");
    }

    let (cx, cy, r) = (HEIGHT / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - 20.0);
    let mut svg = open_svg("Share of minutes per category");

    if series.len() == 1 {
        let point = &series[0];
        svg.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" />"#,
            color(point.category)
        ));
    } else {
        let mut angle = -PI / 2.0;
        for point in series {
            let sweep = point.minutes as f64 / total as f64 * 2.0 * PI;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            angle += sweep;
            let (x2, y2) = (cx + r * angle.cos(), cy + r * angle.sin());
            let large_arc = u8::from(sweep > PI);
            svg.push_str(&format!(
                r#"<path d="M {cx} {cy} L {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{}" />"#,
                color(point.category)
            ));
        }
    }

    for (index, point) in series.iter().enumerate() {
        let y = TOP + 24.0 * index as f64;
        let share = point.minutes as f64 / total as f64 * 100.0;
        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{y:.2}" width="14" height="14" rx="3" fill="{}" />"#,
            HEIGHT + 20.0,
            color(point.category)
        ));
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}">{} ({share:.0}%)</text>"#,
            HEIGHT + 42.0,
            y + 12.0,
            point.category
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn open_svg(label: &str) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{label}">"#
    )
}

fn placeholder(text: &str) -> String {
    let mut svg = open_svg(text);
    svg.push_str(&format!(
        r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">{text}</text></svg>"#
    ));
    svg
}
