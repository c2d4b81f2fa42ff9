use crate::core::form::FactForm;
use crate::core::Alert;
use crate::domain::model::MONTH_PLACEHOLDER;

pub const TITLE: &str = "Fun Fact Finder";
pub const LOADING: &str = "Loading...";

pub fn render(form: &FactForm) -> String {
    let mut lines = vec![TITLE.to_string()];

    let month = form.month().map(|m| m.name()).unwrap_or(MONTH_PLACEHOLDER);
    lines.push(format!("Month: {}", month));

    let day = if form.day_text().is_empty() {
        "Enter day (1-31)"
    } else {
        form.day_text()
    };
    lines.push(format!("Day: {}", day));

    if let Some(error) = form.error() {
        lines.push(format!("⚠️  {}", error));
    }

    if form.is_loading() {
        lines.push(format!("⏳ {}", LOADING));
    } else if let Some(fact) = form.fact() {
        lines.push(format!("💡 {}", fact.text));
    }

    lines.join("\n")
}

pub fn render_alert(alert: &Alert) -> String {
    format!("❌ {}: {}", alert.title, alert.message)
}
