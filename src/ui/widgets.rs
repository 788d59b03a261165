use crate::models::{Insight, Trend};
use crate::ui::escape;
use crate::view::{insight_color, percent_label, StatCardView};

pub fn stat_card(card: &StatCardView, delay: f64) -> String {
    let badge = match &card.percent {
        Some(percent) => {
            let (class, arrow) = match card.trend {
                Trend::Up => ("trend up", "&#8599; "),
                Trend::Down => ("trend down", "&#8600; "),
                Trend::Neutral => ("trend", ""),
            };
            format!(
                r#"<div class="{class}">{arrow}{}</div>"#,
                escape(&percent_label(percent))
            )
        }
        None => String::new(),
    };

    format!(
        r#"<div class="card stat-card" style="animation-delay:{delay:.1}s">
  <h3 class="stat-title"><span class="pulse"></span>{}</h3>
  <div class="stat-body"><span class="stat-value">{}</span><span class="stat-unit">{}</span></div>
  {badge}
</div>"#,
        escape(&card.title),
        escape(&card.value),
        card.unit
    )
}

pub fn insights(items: &[Insight]) -> String {
    if items.is_empty() {
        return r#"<p class="insights-empty">No insights available yet.</p>"#.to_string();
    }

    items
        .iter()
        .map(|insight| {
            format!(
                r#"<div class="insight">
  <div class="insight-head"><h4 style="color:{}">{}</h4><span class="badge">{}</span></div>
  <p>{}</p>
</div>"#,
                insight_color(&insight.color),
                escape(&insight.title),
                escape(&insight.badge),
                escape(&insight.desc)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(percent: Option<&str>, trend: Trend) -> StatCardView {
        StatCardView {
            title: "Scope 2 Emissions".into(),
            value: "0.00".into(),
            unit: "kg",
            trend,
            percent: percent.map(str::to_string),
        }
    }

    #[test]
    fn stat_card_without_percent_has_no_badge() {
        let html = stat_card(&card(None, Trend::Neutral), 0.3);
        assert!(html.contains(r#"<span class="stat-value">0.00</span>"#));
        assert!(!html.contains("class=\"trend"));
    }

    #[test]
    fn stat_card_trend_arrow() {
        let html = stat_card(&card(Some("12"), Trend::Up), 0.1);
        assert!(html.contains(r#"<div class="trend up">&#8599; 12%</div>"#));
        let html = stat_card(&card(Some("4.5% of total"), Trend::Neutral), 0.1);
        assert!(html.contains(r#"<div class="trend">4.5% of total</div>"#));
    }

    #[test]
    fn insights_placeholder_and_items() {
        assert!(insights(&[]).contains("No insights available yet."));

        let html = insights(&[Insight {
            title: "Main Hotspot: Diesel".into(),
            desc: "Diesel accounts for 100.0% of your total footprint.".into(),
            badge: "Priority".into(),
            color: "text-rose-400".into(),
        }]);
        assert!(html.contains(r#"<h4 style="color:#fb7185">Main Hotspot: Diesel</h4>"#));
        assert!(html.contains(r#"<span class="badge">Priority</span>"#));
    }
}
