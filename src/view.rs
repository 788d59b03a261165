use crate::models::{ChartPoint, Comparison, DashboardSummary, HistoryPoint, Trend, UploadResult};

pub const SCOPES: [&str; 3] = ["Scope 1", "Scope 2", "Scope 3"];
pub const SCOPE_COLORS: [&str; 4] = ["#10B981", "#3B82F6", "#F59E0B", "#EF4444"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryWindow {
    #[default]
    Day,
    Week,
    Month,
}

impl HistoryWindow {
    pub const ALL: [HistoryWindow; 3] = [HistoryWindow::Day, HistoryWindow::Week, HistoryWindow::Month];

    pub fn points(self) -> usize {
        match self {
            HistoryWindow::Day => 7,
            HistoryWindow::Week => 30,
            HistoryWindow::Month => 90,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            HistoryWindow::Day => "day",
            HistoryWindow::Week => "week",
            HistoryWindow::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HistoryWindow::Day => "Day",
            HistoryWindow::Week => "Week",
            HistoryWindow::Month => "Month",
        }
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("week") => HistoryWindow::Week,
            Some("month") => HistoryWindow::Month,
            _ => HistoryWindow::Day,
        }
    }
}

pub fn window_history(series: &[HistoryPoint], window: HistoryWindow) -> &[HistoryPoint] {
    let start = series.len().saturating_sub(window.points());
    &series[start..]
}

pub fn chart_points(summary: &DashboardSummary) -> Vec<ChartPoint> {
    summary
        .by_scope
        .iter()
        .map(|scope| ChartPoint {
            name: scope.0.clone(),
            value: scope.1,
        })
        .collect()
}

pub fn scope_amount(points: &[ChartPoint], name: &str) -> f64 {
    points
        .iter()
        .find(|point| point.name == name)
        .map(|point| point.value)
        .unwrap_or(0.0)
}

pub fn format_total(total: f64) -> String {
    if total == 0.0 {
        "0".to_string()
    } else {
        format!("{total:.2}")
    }
}

pub fn percent_label(percent: &str) -> String {
    if percent.contains('%') {
        percent.to_string()
    } else {
        format!("{percent}%")
    }
}

pub fn comparison_or_default(summary: Option<&DashboardSummary>) -> Comparison {
    summary
        .and_then(|summary| summary.comparison.clone())
        .unwrap_or_else(|| Comparison {
            percent: "0".to_string(),
            trend: Trend::Neutral,
            period: "from last month".to_string(),
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub unit: &'static str,
    pub trend: Trend,
    pub percent: Option<String>,
}

pub fn total_card(summary: Option<&DashboardSummary>) -> StatCardView {
    let comparison = comparison_or_default(summary);
    StatCardView {
        title: "Total Emissions".to_string(),
        value: format_total(summary.map(|s| s.total_emission).unwrap_or(0.0)),
        unit: "kg CO2e",
        trend: comparison.trend,
        percent: Some(format!("{} {}", percent_label(&comparison.percent), comparison.period)),
    }
}

pub fn scope_cards(summary: Option<&DashboardSummary>) -> Vec<StatCardView> {
    let points = summary.map(chart_points).unwrap_or_default();
    SCOPES
        .iter()
        .map(|scope| {
            let ratio = summary
                .and_then(|s| s.scope_ratios.get(*scope).copied())
                .filter(|ratio| *ratio != 0.0);
            StatCardView {
                title: format!("{scope} Emissions"),
                value: format!("{:.2}", scope_amount(&points, scope)),
                unit: "kg",
                trend: Trend::Neutral,
                percent: ratio.map(|ratio| format!("{ratio:.1}% of total")),
            }
        })
        .collect()
}

pub fn scope_color(index: usize) -> &'static str {
    SCOPE_COLORS[index % SCOPE_COLORS.len()]
}

pub fn insight_color(tag: &str) -> &'static str {
    match tag {
        "text-rose-400" => "#fb7185",
        "text-yellow-400" => "#facc15",
        "text-blue-400" => "#60a5fa",
        "text-purple-400" => "#c084fc",
        "text-slate-400" => "#94a3b8",
        "text-amber-400" => "#fbbf24",
        "text-cyan-400" => "#22d3ee",
        _ => "#34d399",
    }
}

pub fn certificate_scope(summary: &DashboardSummary, name: &str) -> String {
    summary
        .by_scope
        .iter()
        .find(|scope| scope.0 == name)
        .map(|scope| format!("{:.1}", scope.1))
        .unwrap_or_else(|| "0".to_string())
}

pub const UPLOAD_FAILED: &str = "Failed to process invoice. Please check the format.";

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Idle,
    Processing,
    Showing(UploadResult),
    Failed(String),
}

impl UploadPhase {
    pub fn submit_disabled(&self, text: &str) -> bool {
        matches!(self, UploadPhase::Processing) || text.trim().is_empty()
    }
}

pub fn upload_lines(result: &UploadResult) -> [String; 4] {
    [
        format!("Category: {}", result.category),
        format!("Scope: {}", result.scope),
        format!("Factor: {} kgCO2e/{}", result.emission_factor, result.unit),
        format!("Total Carbon Footprint: {:.2} kg CO2e", result.total_emission),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScopeAmount;
    use std::collections::BTreeMap;

    fn series(len: usize) -> Vec<HistoryPoint> {
        (0..len)
            .map(|i| HistoryPoint {
                date: format!("d{i}"),
                value: i as f64,
            })
            .collect()
    }

    #[test]
    fn window_returns_trailing_points_in_order() {
        for len in [0usize, 3, 7, 12, 30, 45, 90, 120] {
            let data = series(len);
            for window in HistoryWindow::ALL {
                let slice = window_history(&data, window);
                let expected = len.min(window.points());
                assert_eq!(slice.len(), expected, "len {len} window {window:?}");
                assert_eq!(slice, &data[len - expected..]);
            }
        }
    }

    #[test]
    fn window_parse_defaults_to_day() {
        assert_eq!(HistoryWindow::parse(None), HistoryWindow::Day);
        assert_eq!(HistoryWindow::parse(Some("week")), HistoryWindow::Week);
        assert_eq!(HistoryWindow::parse(Some("month")), HistoryWindow::Month);
        assert_eq!(HistoryWindow::parse(Some("year")), HistoryWindow::Day);
    }

    #[test]
    fn total_is_formatted_to_two_decimals() {
        assert_eq!(format_total(1234.567), "1234.57");
        assert_eq!(format_total(0.0), "0");
        assert_eq!(format_total(1340.0), "1340.00");
    }

    #[test]
    fn missing_scope_renders_zero_without_badge() {
        let mut ratios = BTreeMap::new();
        ratios.insert("Scope 1".to_string(), 62.5);
        ratios.insert("Scope 3".to_string(), 37.5);
        let summary = DashboardSummary {
            total_emission: 800.0,
            by_scope: vec![
                ScopeAmount("Scope 1".into(), 500.0),
                ScopeAmount("Scope 3".into(), 300.0),
            ],
            scope_ratios: ratios,
            ..Default::default()
        };

        let cards = scope_cards(Some(&summary));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].value, "500.00");
        assert_eq!(cards[0].percent.as_deref(), Some("62.5% of total"));
        assert_eq!(cards[1].title, "Scope 2 Emissions");
        assert_eq!(cards[1].value.parse::<f64>().unwrap(), 0.0);
        assert!(cards[1].percent.is_none());
    }

    #[test]
    fn scope_lookup_is_exact() {
        let points = vec![ChartPoint {
            name: "scope 1".into(),
            value: 4.0,
        }];
        assert_eq!(scope_amount(&points, "Scope 1"), 0.0);
        assert_eq!(scope_amount(&points, "scope 1"), 4.0);
    }

    #[test]
    fn comparison_defaults_to_neutral_zero() {
        let card = total_card(None);
        assert_eq!(card.value, "0");
        assert_eq!(card.trend, Trend::Neutral);
        assert_eq!(card.percent.as_deref(), Some("0% from last month"));
        assert_eq!(percent_label("12.5%"), "12.5%");
    }

    #[test]
    fn colors_follow_position() {
        assert_eq!(scope_color(0), "#10B981");
        assert_eq!(scope_color(3), "#EF4444");
        assert_eq!(scope_color(4), "#10B981");
        assert_eq!(insight_color("text-rose-400"), "#fb7185");
        assert_eq!(insight_color(""), "#34d399");
    }

    #[test]
    fn submit_disabled_while_processing_or_empty() {
        assert!(UploadPhase::Idle.submit_disabled(""));
        assert!(UploadPhase::Idle.submit_disabled("   "));
        assert!(!UploadPhase::Idle.submit_disabled("500 liters diesel"));
        assert!(UploadPhase::Processing.submit_disabled("500 liters diesel"));
        assert!(!UploadPhase::Failed(UPLOAD_FAILED.into()).submit_disabled("retry"));
    }

    #[test]
    fn upload_lines_match_result() {
        let result = UploadResult {
            category: "fuel".into(),
            scope: "Scope 1".into(),
            emission_factor: 2.68,
            unit: "liter".into(),
            total_emission: 1340.0,
        };
        assert_eq!(
            upload_lines(&result),
            [
                "Category: fuel".to_string(),
                "Scope: Scope 1".to_string(),
                "Factor: 2.68 kgCO2e/liter".to_string(),
                "Total Carbon Footprint: 1340.00 kg CO2e".to_string(),
            ]
        );
    }

    #[test]
    fn certificate_scope_uses_one_decimal() {
        let summary = DashboardSummary {
            by_scope: vec![ScopeAmount("Scope 1".into(), 12.34)],
            ..Default::default()
        };
        assert_eq!(certificate_scope(&summary, "Scope 1"), "12.3");
        assert_eq!(certificate_scope(&summary, "Scope 2"), "0");
    }
}
