use crate::models::DashboardSummary;
use crate::ui::{escape, layout, LEAF_SVG};
use crate::view::certificate_scope;
use chrono::{DateTime, Local};
use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn display_id(rng: &mut impl Rng) -> String {
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|byte| char::from(byte).to_ascii_uppercase())
        .collect();
    format!("CTR-{suffix}")
}

pub fn verified_on(now: DateTime<Local>) -> String {
    now.format("%B %-d, %Y, %I:%M %p").to_string()
}

pub fn render_verify(summary: Option<&DashboardSummary>, id: &str, verified_on: &str) -> String {
    let body = match summary {
        Some(summary) => CERTIFICATE_HTML
            .replace("{{TOTAL}}", &format!("{:.2}", summary.total_emission))
            .replace("{{SCOPE1}}", &certificate_scope(summary, "Scope 1"))
            .replace("{{SCOPE2}}", &certificate_scope(summary, "Scope 2"))
            .replace("{{ID}}", &escape(id))
            .replace("{{DATE}}", &escape(verified_on))
            .replace("{{LEAF}}", LEAF_SVG),
        None => FAILED_HTML.to_string(),
    };

    layout("C-Trace | Carbon Verification", "/verify", &body)
}

const FAILED_HTML: &str = r#"<main class="page"><div class="card placeholder verify-failed"><p>Verification Failed</p></div></main>"#;

const CERTIFICATE_HTML: &str = r#"<style>
    .verify-wrap {
      min-height: calc(100vh - 160px);
      display: grid;
      place-items: center;
      background: radial-gradient(circle at 50% 120%, rgba(16, 185, 129, 0.1), transparent 50%);
    }
    .certificate {
      width: min(440px, 100%);
      padding: 32px;
      border-radius: 24px;
      border-color: rgba(16, 185, 129, 0.3);
      box-shadow: 0 0 60px -15px rgba(16, 185, 129, 0.3);
      text-align: center;
    }
    .shield {
      width: 80px;
      height: 80px;
      margin: 0 auto 16px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      font-size: 2rem;
      color: #34d399;
      background: rgba(16, 185, 129, 0.2);
      box-shadow: 0 0 0 4px #0f172a, 0 0 0 6px #10b981;
    }
    .certificate h1 {
      margin: 0 0 8px;
      font-size: 1.5rem;
    }
    .verified-pill {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      color: #34d399;
      background: var(--accent-soft);
      font-size: 0.85rem;
      margin-bottom: 32px;
    }
    .cert-total, .cert-scope {
      background: rgba(2, 6, 23, 0.5);
      border: 1px solid rgba(255, 255, 255, 0.05);
      border-radius: 16px;
      padding: 24px;
    }
    .cert-total p, .cert-scope p {
      margin: 0 0 8px;
      color: var(--muted);
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }
    .cert-total strong {
      font-size: 3rem;
      font-weight: 900;
    }
    .cert-total span, .cert-scope span {
      color: #34d399;
      margin-left: 4px;
    }
    .cert-scopes {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
      margin: 24px 0;
    }
    .cert-scope {
      padding: 16px;
    }
    .cert-meta {
      border-top: 1px solid var(--line);
      padding-top: 24px;
      font-size: 0.75rem;
      color: var(--dim);
    }
    .cert-meta div {
      display: flex;
      justify-content: space-between;
      margin-bottom: 8px;
    }
    .cert-meta code {
      color: var(--muted);
    }
    .cert-footer {
      margin-top: 24px;
      padding-top: 24px;
      border-top: 1px solid rgba(255, 255, 255, 0.05);
      font-size: 0.75rem;
      color: #475569;
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 6px;
    }
    .cert-footer svg {
      width: 12px;
      height: 12px;
      color: var(--accent);
    }
  </style>
  <main class="page verify-wrap">
    <div class="card certificate">
      <div class="shield">&#128737;</div>
      <h1>Carbon Verification</h1>
      <div class="verified-pill">&#10003; Officially Verified</div>

      <div class="cert-total">
        <p>Total Carbon Footprint</p>
        <strong id="cert-total">{{TOTAL}}</strong><span>kg CO2e</span>
      </div>

      <div class="cert-scopes">
        <div class="cert-scope">
          <p>Scope 1</p>
          <strong id="cert-scope-1">{{SCOPE1}}</strong><span>kg</span>
        </div>
        <div class="cert-scope">
          <p>Scope 2</p>
          <strong id="cert-scope-2">{{SCOPE2}}</strong><span>kg</span>
        </div>
      </div>

      <div class="cert-meta">
        <div><span>Verification ID:</span><code id="cert-id">{{ID}}</code></div>
        <div><span>Verified On:</span><span id="cert-date">{{DATE}}</span></div>
      </div>

      <div class="cert-footer">Powered by {{LEAF}} C-Trace AI Engine</div>
    </div>
  </main>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScopeAmount;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn display_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = display_id(&mut rng);
        assert!(id.starts_with("CTR-"));
        let suffix = &id[4..];
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_ne!(display_id(&mut rng), id);
    }

    #[test]
    fn verified_on_reads_like_a_date() {
        let now = Local.with_ymd_and_hms(2026, 10, 16, 15, 4, 0).unwrap();
        assert_eq!(verified_on(now), "October 16, 2026, 03:04 PM");
    }

    #[test]
    fn certificate_shows_subset_of_summary() {
        let summary = DashboardSummary {
            total_emission: 1340.0,
            by_scope: vec![ScopeAmount("Scope 1".into(), 1340.0)],
            ..Default::default()
        };
        let html = render_verify(Some(&summary), "CTR-ABC123XYZ", "October 16, 2026, 03:04 PM");
        assert!(html.contains(r#"<strong id="cert-total">1340.00</strong>"#));
        assert!(html.contains(r#"<strong id="cert-scope-1">1340.0</strong>"#));
        assert!(html.contains(r#"<strong id="cert-scope-2">0</strong>"#));
        assert!(html.contains("CTR-ABC123XYZ"));
    }

    #[test]
    fn missing_summary_fails_verification() {
        let html = render_verify(None, "CTR-X", "now");
        assert!(html.contains("Verification Failed"));
        assert!(!html.contains("cert-total"));
    }
}
