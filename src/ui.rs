use crate::charts::{render_bar_chart, render_pie_chart};
use crate::config::Capabilities;
use crate::models::{Category, SummaryResponse, UserProfile, WorkoutEntry};
use crate::plans::{DIET_PLANS, WorkoutPlan};

/// What the index page shows besides the form.
pub struct IndexView<'a> {
    pub categories: &'a [Category],
    pub entries: Vec<(Category, &'a [WorkoutEntry])>,
    pub profile: Option<&'a UserProfile>,
    pub message: Option<String>,
    pub error: Option<String>,
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let mut body = String::new();

    if let Some(message) = &view.message {
        body.push_str(&format!(r#"<p class="flash ok">{}</p>"#, escape_html(message)));
    }
    if let Some(error) = &view.error {
        body.push_str(&format!(r#"<p class="flash error">{}</p>"#, escape_html(error)));
    }

    body.push_str(r#"<section class="card"><h2>Log a workout</h2><form method="post" action="/add" class="grid-form">"#);
    body.push_str(r#"<label>Category<select name="category">"#);
    for category in view.categories {
        body.push_str(&format!(r#"<option value="{category}">{category}</option>"#));
    }
    body.push_str("</select></label>");
    body.push_str(r#"<label>Exercise<input name="exercise" type="text" placeholder="e.g. Pushups" /></label>"#);
    body.push_str(r#"<label>Duration (min)<input name="duration" type="text" inputmode="numeric" /></label>"#);
    body.push_str(r#"<button type="submit">Add workout</button></form></section>"#);

    body.push_str(r#"<section class="card"><h2>Progress Tracker</h2>"#);
    for (category, entries) in &view.entries {
        body.push_str(&format!("<h3>{category}</h3>"));
        if entries.is_empty() {
            body.push_str(r#"<p class="muted">Nothing logged yet.</p>"#);
            continue;
        }
        body.push_str("<ul>");
        for entry in *entries {
            body.push_str(&format!(
                "<li><strong>{}</strong> &middot; {} min &middot; {}{}</li>",
                escape_html(entry.exercise()),
                entry.duration_minutes(),
                entry.timestamp().format("%Y-%m-%d %H:%M"),
                entry
                    .calories()
                    .map(|kcal| format!(" &middot; {kcal:.1} kcal"))
                    .unwrap_or_default()
            ));
        }
        body.push_str("</ul>");
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="card"><h2>Your profile</h2>"#);
    if let Some(profile) = view.profile {
        body.push_str(&format!(
            r#"<p class="muted">{} ({}) &middot; {} yrs &middot; {} &middot; {} cm &middot; {} kg</p>"#,
            escape_html(&profile.name),
            escape_html(&profile.registration_id),
            profile.age,
            escape_html(&profile.gender),
            profile.height_cm,
            profile.weight_kg
        ));
    }
    body.push_str(PROFILE_FORM);
    body.push_str("</section>");

    layout("Log", &body)
}

pub fn render_summary(summary: &SummaryResponse, capabilities: Capabilities) -> String {
    let mut body = String::new();
    body.push_str(r#"<section class="card"><h2>Summary</h2>"#);

    if summary.total_minutes == 0 {
        body.push_str(&format!(r#"<p class="muted">{}</p>"#, summary.message));
    } else {
        body.push_str(&format!(
            r#"<p class="total">{} minutes logged</p><p class="tier tier-{}">{}</p>"#,
            summary.total_minutes, summary.tier, summary.message
        ));
        if summary.total_calories > 0.0 {
            body.push_str(&format!(
                r#"<p class="muted">Estimated burn: {:.1} kcal</p>"#,
                summary.total_calories
            ));
        }
        body.push_str("<table><thead><tr><th>Category</th><th>Sessions</th><th>Minutes</th><th>kcal</th></tr></thead><tbody>");
        for total in &summary.categories {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td></tr>",
                total.category, total.entries, total.minutes, total.calories
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</section>");

    if capabilities.charts {
        body.push_str(r#"<section class="card charts"><h2>Charts</h2>"#);
        body.push_str(&render_bar_chart(&summary.charts.bar));
        body.push_str(&render_pie_chart(&summary.charts.pie));
        body.push_str("</section>");
    }

    if capabilities.export {
        body.push_str(r#"<p><a class="button" href="/export.csv">Download report (CSV)</a></p>"#);
    }

    layout("Summary", &body)
}

pub fn render_diet() -> String {
    let mut body = String::from(r#"<section class="card"><h2>Diet Guide</h2>"#);
    for plan in DIET_PLANS {
        body.push_str(&format!("<h3>{}</h3><ul>", plan.goal));
        for meal in plan.meals {
            body.push_str(&format!("<li>{meal}</li>"));
        }
        body.push_str("</ul>");
    }
    body.push_str("</section>");
    layout("Diet Guide", &body)
}

pub fn render_plans(plans: &[&WorkoutPlan]) -> String {
    let mut body = String::from(r#"<section class="card"><h2>Workout Plan</h2>"#);
    for plan in plans {
        body.push_str(&format!("<h3>{}</h3><ol>", plan.category));
        for exercise in plan.exercises {
            body.push_str(&format!("<li>{exercise}</li>"));
        }
        body.push_str("</ol>");
    }
    body.push_str("</section>");
    layout("Workout Plan", &body)
}

fn layout(title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{BODY}}", body)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PROFILE_FORM: &str = r#"<form method="post" action="/profile" class="grid-form">
  <label>Name<input name="name" type="text" /></label>
  <label>Registration ID<input name="registration_id" type="text" /></label>
  <label>Age<input name="age" type="text" inputmode="numeric" /></label>
  <label>Gender<input name="gender" type="text" /></label>
  <label>Height (cm)<input name="height" type="text" inputmode="decimal" /></label>
  <label>Weight (kg)<input name="weight" type="text" inputmode="decimal" /></label>
  <button type="submit">Save profile</button>
</form>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>ACEest Fitness &middot; {{TITLE}}</title>
  <style>
    :root {
      --bg: #f3f1ec;
      --ink: #24262b;
      --muted: #6d6a66;
      --accent: #e0524b;
      --accent-2: #2f4858;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(36, 38, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
    }

    nav {
      display: flex;
      gap: 18px;
      align-items: center;
      padding: 18px 28px;
      background: var(--accent-2);
    }

    nav a {
      color: white;
      text-decoration: none;
      font-weight: 600;
    }

    nav .brand {
      font-size: 1.3rem;
      margin-right: auto;
    }

    main {
      width: min(880px, 100%);
      margin: 0 auto;
      padding: 28px 18px 48px;
      display: grid;
      gap: 22px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px 28px;
    }

    h2 {
      margin-top: 0;
    }

    .grid-form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input,
    select {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(36, 38, 43, 0.18);
      font-size: 1rem;
    }

    button,
    .button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      background: var(--accent);
      color: white;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-block;
    }

    .flash {
      margin: 0;
      padding: 12px 18px;
      border-radius: 12px;
    }

    .flash.ok {
      background: #e4f3e8;
      color: #2d7a4b;
    }

    .flash.error {
      background: #fbe5e3;
      color: #c63b2b;
    }

    .muted {
      color: var(--muted);
    }

    .total {
      font-size: 1.8rem;
      font-weight: 700;
      margin: 0 0 6px;
    }

    .tier-high {
      color: #2d7a4b;
    }

    .tier-mid {
      color: var(--accent-2);
    }

    .tier-low {
      color: var(--accent);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid rgba(36, 38, 43, 0.08);
    }

    .chart {
      width: 100%;
      height: 260px;
      display: block;
      margin-bottom: 18px;
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.3);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 12px;
    }
  </style>
</head>
<body>
  <nav>
    <a class="brand" href="/">ACEest Fitness</a>
    <a href="/summary">Summary</a>
    <a href="/plans">Workout Plan</a>
    <a href="/diet">Diet Guide</a>
  </nav>
  <main>
{{BODY}}
  </main>
</body>
</html>
"#;
