use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_emission: f64,
    #[serde(default)]
    pub by_scope: Vec<ScopeAmount>,
    #[serde(default)]
    pub scope_ratios: BTreeMap<String, f64>,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub comparison: Option<Comparison>,
}

/// `[name, amount]` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopeAmount(pub String, pub f64);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub title: String,
    pub desc: String,
    pub badge: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub percent: String,
    pub trend: Trend,
    pub period: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResult {
    pub category: String,
    pub scope: String,
    pub emission_factor: f64,
    pub unit: String,
    pub total_emission: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_decodes_backend_payload() {
        let payload = serde_json::json!({
            "total_emission": 1340.0,
            "by_scope": [["Scope 1", 1340.0]],
            "scope_ratios": { "Scope 1": 100.0 },
            "history": [{ "date": "2026-10-16", "value": 1340.0 }],
            "insights": [{
                "title": "Fleet Electrification",
                "desc": "Fuel consumption contributes 1340.0 kg CO2e.",
                "badge": "High Impact",
                "color": "text-emerald-400"
            }]
        });

        let summary: DashboardSummary = serde_json::from_value(payload).unwrap();
        assert_eq!(summary.by_scope, vec![ScopeAmount("Scope 1".into(), 1340.0)]);
        assert_eq!(summary.scope_ratios.get("Scope 1"), Some(&100.0));
        assert_eq!(summary.history.len(), 1);
        assert!(summary.comparison.is_none());
    }

    #[test]
    fn summary_tolerates_missing_collections() {
        let summary: DashboardSummary =
            serde_json::from_value(serde_json::json!({ "total_emission": 0.0 })).unwrap();
        assert!(summary.by_scope.is_empty());
        assert!(summary.history.is_empty());
        assert!(summary.insights.is_empty());
    }

    #[test]
    fn comparison_trend_is_lowercase() {
        let comparison: Comparison = serde_json::from_value(serde_json::json!({
            "percent": "12%",
            "trend": "down",
            "period": "from last month"
        }))
        .unwrap();
        assert_eq!(comparison.trend, Trend::Down);
    }

    #[test]
    fn upload_result_ignores_extra_fields() {
        let result: UploadResult = serde_json::from_value(serde_json::json!({
            "id": 7,
            "text": "500 liters diesel",
            "quantity": 500.0,
            "category": "fuel",
            "scope": "Scope 1",
            "emission_factor": 2.68,
            "unit": "liter",
            "total_emission": 1340.0
        }))
        .unwrap();
        assert_eq!(result.category, "fuel");
        assert_eq!(result.emission_factor, 2.68);
    }
}
