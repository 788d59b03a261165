use crate::models::DashboardSummary;
use crate::ui::{charts, escape, layout, widgets};
use crate::view::{chart_points, scope_cards, total_card, HistoryWindow};
use qrcode::render::svg;
use qrcode::QrCode;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ReportFailed,
    ResetFailed,
}

impl Notice {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("report-failed") => Some(Notice::ReportFailed),
            Some("reset-failed") => Some(Notice::ResetFailed),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Notice::ReportFailed => "report-failed",
            Notice::ResetFailed => "reset-failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::ReportFailed => "Failed to download report",
            Notice::ResetFailed => "Failed to reset data",
        }
    }
}

pub struct DashboardPage<'a> {
    pub summary: Option<&'a DashboardSummary>,
    pub window: HistoryWindow,
    pub show_verify: bool,
    pub verify_url: &'a str,
    pub notice: Option<Notice>,
}

impl DashboardPage<'_> {
    fn href(&self, window: HistoryWindow, show_verify: bool) -> String {
        let mut href = String::from("/dashboard");
        let mut params = Vec::new();
        if window != HistoryWindow::default() {
            params.push(format!("range={}", window.key()));
        }
        if show_verify {
            params.push("verify=1".to_string());
        }
        if !params.is_empty() {
            href.push('?');
            href.push_str(&params.join("&"));
        }
        href
    }

    fn refresh_href(&self) -> String {
        let href = self.href(self.window, false);
        let separator = if href.contains('?') { '&' } else { '?' };
        format!("{href}{separator}refresh=1")
    }
}

pub fn render_dashboard(page: &DashboardPage<'_>) -> String {
    let summary = page.summary;
    let points = summary.map(chart_points).unwrap_or_default();
    let history = summary.map(|s| s.history.as_slice()).unwrap_or_default();
    let insights = summary.map(|s| s.insights.as_slice()).unwrap_or_default();

    let mut cards = widgets::stat_card(&total_card(summary), 0.1);
    for (index, card) in scope_cards(summary).iter().enumerate() {
        cards.push_str(&widgets::stat_card(card, 0.2 + index as f64 * 0.1));
    }

    let history_chart = charts::history_chart(history, page.window, |window| {
        page.href(window, page.show_verify)
    });

    let modal = if page.show_verify {
        verify_modal(page.verify_url, &page.href(page.window, false))
    } else {
        String::new()
    };

    let alert = match page.notice {
        Some(notice) => format!(
            r#"<script>window.addEventListener('load', () => alert({}));</script>"#,
            serde_json::Value::String(notice.message().to_string())
        ),
        None => String::new(),
    };

    let body = DASHBOARD_HTML
        .replace("{{REFRESH_HREF}}", &escape(&page.refresh_href()))
        .replace("{{RANGE}}", page.window.key())
        .replace("{{VERIFY_HREF}}", &escape(&page.href(page.window, true)))
        .replace("{{CARDS}}", &cards)
        .replace("{{HISTORY}}", &history_chart)
        .replace("{{SCOPES}}", &charts::scope_chart(&points))
        .replace("{{INSIGHTS}}", &widgets::insights(insights))
        .replace("{{MODAL}}", &modal)
        .replace("{{ALERT}}", &alert);

    layout("C-Trace | Executive Dashboard", "/dashboard", &body)
}

fn verify_modal(verify_url: &str, close_href: &str) -> String {
    format!(
        r#"<a class="modal-backdrop" href="{close}" aria-label="Close"></a>
<div class="modal" role="dialog" aria-modal="true">
  <a class="modal-close" href="{close}" aria-label="Close">&times;</a>
  <h3>Verify Impact</h3>
  <p class="muted">Scan to view the official verification certificate for this dashboard.</p>
  <div class="qr">{}</div>
  <div class="verify-url">{}</div>
</div>"#,
        qr_svg(verify_url),
        escape(verify_url),
        close = escape(close_href)
    )
}

fn qr_svg(value: &str) -> String {
    match QrCode::new(value.as_bytes()) {
        Ok(code) => {
            let image = code
                .render::<svg::Color>()
                .min_dimensions(200, 200)
                .quiet_zone(false)
                .build();
            // drop the xml prolog so the image can sit inline
            match image.find("<svg") {
                Some(start) => image[start..].to_string(),
                None => image,
            }
        }
        Err(err) => {
            warn!("failed to encode verification url as qr: {err}");
            String::new()
        }
    }
}

const DASHBOARD_HTML: &str = r#"<style>
    .dash-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-end;
      gap: 16px;
      flex-wrap: wrap;
      padding-bottom: 24px;
      margin-bottom: 40px;
      border-bottom: 1px solid var(--line);
    }
    .dash-header h1 {
      margin: 0 0 8px;
      font-size: 2.4rem;
      font-weight: 800;
      background: linear-gradient(90deg, #34d399, #06b6d4);
      -webkit-background-clip: text;
      color: transparent;
    }
    .dash-header p {
      margin: 0;
      color: var(--muted);
      font-weight: 300;
    }
    .actions {
      display: flex;
      gap: 12px;
    }
    .actions form {
      margin: 0;
    }
    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 24px;
      margin-bottom: 32px;
    }
    .stat-card {
      animation: rise 500ms ease both;
    }
    .stat-title {
      display: flex;
      align-items: center;
      gap: 8px;
      margin: 0 0 16px;
      color: var(--muted);
      font-size: 0.72rem;
      text-transform: uppercase;
      letter-spacing: 0.2em;
    }
    .pulse {
      width: 8px;
      height: 8px;
      border-radius: 50%;
      background: var(--accent);
    }
    .stat-body {
      display: flex;
      align-items: baseline;
      gap: 8px;
      margin-bottom: 8px;
    }
    .stat-value {
      font-size: 2.2rem;
      font-weight: 800;
      letter-spacing: -0.04em;
    }
    .stat-unit {
      color: #34d399;
      font-size: 0.85rem;
      padding: 4px 8px;
      border-radius: 6px;
      background: var(--accent-soft);
      border: 1px solid rgba(16, 185, 129, 0.2);
    }
    .trend {
      font-size: 0.75rem;
      font-weight: 600;
      color: var(--muted);
    }
    .trend.up {
      color: #fb7185;
    }
    .trend.down {
      color: #34d399;
    }
    .charts {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 32px;
      margin-bottom: 32px;
    }
    .chart-header, .chart-title {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin: 0 0 24px;
    }
    .chart-header h3 {
      margin: 0;
    }
    .chip {
      font-size: 0.72rem;
      color: var(--muted);
      padding: 4px 8px;
      border-radius: 6px;
      background: rgba(30, 41, 59, 0.5);
      border: 1px solid var(--line);
    }
    .tabs {
      display: flex;
      padding: 4px;
      border-radius: 8px;
      background: rgba(30, 41, 59, 0.5);
      border: 1px solid var(--line);
    }
    .tab {
      padding: 4px 12px;
      font-size: 0.75rem;
      border-radius: 6px;
      color: var(--muted);
    }
    .tab.active {
      background: var(--accent);
      color: white;
    }
    .chart {
      width: 100%;
      height: 300px;
      display: block;
    }
    .chart-grid {
      stroke: #1e293b;
      stroke-dasharray: 3 3;
    }
    .chart-label {
      fill: var(--dim);
      font-size: 12px;
    }
    .chart-line {
      fill: none;
      stroke: #10b981;
      stroke-width: 3;
    }
    .donut {
      width: 100%;
      max-height: 260px;
    }
    .legend {
      list-style: none;
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 12px;
      padding: 0;
      color: #cbd5e1;
      font-size: 0.85rem;
    }
    .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
    }
    .pulse-dot {
      width: 64px;
      height: 64px;
      border-radius: 50%;
      background: #1e293b;
      margin: 0 auto 16px;
    }
    .insights {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }
    .insight {
      padding: 16px;
      border-radius: 12px;
      background: rgba(255, 255, 255, 0.05);
      border-left: 2px solid rgba(16, 185, 129, 0.5);
    }
    .insight-head {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
    }
    .insight h4 {
      margin: 0 0 8px;
    }
    .insight p {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      line-height: 1.6;
    }
    .badge {
      font-size: 10px;
      text-transform: uppercase;
      font-weight: 700;
      padding: 4px 8px;
      border-radius: 6px;
      background: rgba(255, 255, 255, 0.1);
      color: #cbd5e1;
    }
    .insights-empty {
      color: var(--dim);
      font-style: italic;
      text-align: center;
    }
    .modal-backdrop {
      position: fixed;
      inset: 0;
      z-index: 50;
      background: rgba(0, 0, 0, 0.6);
      backdrop-filter: blur(4px);
    }
    .modal {
      position: fixed;
      z-index: 51;
      top: 50%;
      left: 50%;
      transform: translate(-50%, -50%);
      width: min(380px, 92vw);
      padding: 32px;
      border-radius: 24px;
      background: #0f172a;
      border: 1px solid var(--line);
      text-align: center;
    }
    .modal h3 {
      margin: 0 0 8px;
      font-size: 1.5rem;
    }
    .modal-close {
      position: absolute;
      top: 16px;
      right: 20px;
      color: var(--muted);
      font-size: 1.4rem;
    }
    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }
    .qr {
      background: white;
      border-radius: 12px;
      padding: 16px;
      margin: 24px 0;
    }
    .qr svg {
      width: 100%;
      height: auto;
    }
    .verify-url {
      font-family: monospace;
      font-size: 0.75rem;
      color: var(--dim);
      background: #020617;
      padding: 8px;
      border-radius: 8px;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }
    @media (max-width: 960px) {
      .charts {
        grid-template-columns: 1fr;
      }
    }
  </style>
  <main class="page">
    <header class="dash-header">
      <div>
        <h1>Executive Dashboard</h1>
        <p>Real-time carbon footprint overview</p>
      </div>
      <div class="actions">
        <form method="post" action="/dashboard/reset" onsubmit="if (!confirm('Are you sure you want to reset all data? This action cannot be undone.')) { return false; } this.confirmed.value = 'true'; return true;">
          <input type="hidden" name="confirmed" value="false" />
          <input type="hidden" name="range" value="{{RANGE}}" />
          <button class="btn btn-danger" type="submit">Reset</button>
        </form>
        <a class="btn" href="/report">&#11015; Report</a>
        <a class="btn btn-accent" href="{{VERIFY_HREF}}">&#9638; Verify</a>
        <a class="btn btn-accent" href="{{REFRESH_HREF}}" aria-label="Refresh">&#8635;</a>
      </div>
    </header>

    <section class="stats">{{CARDS}}</section>

    <section class="charts">
      {{HISTORY}}
      {{SCOPES}}
    </section>

    <section class="card">
      <h3 class="chart-title"><span>AI Insights</span></h3>
      <div class="insights">{{INSIGHTS}}</div>
    </section>
  </main>
  {{MODAL}}
  {{ALERT}}
"#;
