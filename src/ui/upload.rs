use crate::ui::{escape, layout};
use crate::view::{upload_lines, UploadPhase};

pub fn render_upload(phase: &UploadPhase, text: &str) -> String {
    let disabled = if phase.submit_disabled(text) { " disabled" } else { "" };

    let error = match phase {
        UploadPhase::Failed(message) => format!(
            r#"<div class="upload-error" role="alert">&#9888; {}</div>"#,
            escape(message)
        ),
        _ => String::new(),
    };

    let panel = match phase {
        UploadPhase::Showing(result) => {
            let [category, scope, factor, total] = upload_lines(result);
            format!(
                r#"<div class="card result">
  <div class="result-check">&#10003;</div>
  <h3 class="result-title">Analysis Complete</h3>
  <div class="result-row" data-field="category">{}</div>
  <div class="result-row" data-field="scope">{}</div>
  <div class="result-row" data-field="factor">{}</div>
  <div class="result-total" data-field="total">
    <p>{}</p>
    <span class="total-value">{:.2}</span><span class="total-unit">kg CO2e</span>
  </div>
</div>"#,
                escape(&category),
                escape(&scope),
                escape(&factor),
                escape(&total),
                result.total_emission
            )
        }
        _ => WAITING_HTML.to_string(),
    };

    let body = UPLOAD_HTML
        .replace("{{BUTTON}}", &submit_button(phase, disabled))
        .replace("{{PROCESSING}}", &script_string(&submit_label(&UploadPhase::Processing)))
        .replace("{{ERROR}}", &error)
        .replace("{{PANEL}}", &panel)
        .replace("{{TEXT}}", &escape(text));

    layout("C-Trace | Upload", "/upload", &body)
}

fn submit_button(phase: &UploadPhase, disabled: &str) -> String {
    format!(
        r#"<button class="btn btn-primary" id="submit-btn" type="submit"{disabled}>{}</button>"#,
        submit_label(phase)
    )
}

fn submit_label(phase: &UploadPhase) -> String {
    match phase {
        UploadPhase::Processing => r#"<span class="spinner"></span> Processing"#.to_string(),
        _ => "Calculate Impact &#8594;".to_string(),
    }
}

fn script_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

const WAITING_HTML: &str = r#"<div class="waiting">
  <div class="waiting-icon">&#128196;</div>
  <h3>Waiting for Input</h3>
  <p>Data will appear here instantly after analysis.</p>
</div>"#;

const UPLOAD_HTML: &str = r#"<style>
    .upload-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 48px;
      max-width: 1024px;
      margin: 0 auto;
    }
    .upload-grid h1 {
      font-size: 2.4rem;
      font-weight: 900;
      line-height: 1.15;
      margin: 0 0 24px;
    }
    .upload-grid h1 span {
      background: linear-gradient(90deg, #34d399, #22d3ee);
      -webkit-background-clip: text;
      color: transparent;
    }
    .lead {
      color: var(--muted);
      line-height: 1.6;
      max-width: 28rem;
      margin-bottom: 32px;
    }
    textarea {
      width: 100%;
      height: 16rem;
      resize: none;
      padding: 24px;
      border-radius: 16px;
      border: 1px solid var(--line);
      background: rgba(15, 23, 42, 0.8);
      color: var(--ink);
      font-family: monospace;
      font-size: 0.9rem;
      line-height: 1.6;
      outline: none;
    }
    textarea:focus {
      box-shadow: 0 0 0 2px rgba(16, 185, 129, 0.5);
    }
    .submit-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-top: 24px;
    }
    .submit-row small {
      color: var(--dim);
    }
    .upload-error {
      margin-top: 24px;
      padding: 16px;
      border-radius: 12px;
      background: rgba(239, 68, 68, 0.1);
      border: 1px solid rgba(239, 68, 68, 0.2);
      color: #fecaca;
    }
    .result {
      border-color: rgba(16, 185, 129, 0.3);
      padding: 32px;
      animation: rise 500ms ease;
    }
    .result-check {
      position: absolute;
      top: 16px;
      right: 16px;
      padding: 10px 14px;
      border-radius: 14px;
      background: var(--accent);
      transform: rotate(12deg);
    }
    .result-title {
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.2em;
      font-size: 0.75rem;
      margin: 0 0 32px;
    }
    .result-row {
      padding-bottom: 16px;
      margin-bottom: 24px;
      border-bottom: 1px solid var(--line);
      font-size: 1.1rem;
    }
    .result-total {
      padding: 24px;
      border-radius: 16px;
      background: linear-gradient(90deg, rgba(16, 185, 129, 0.1), transparent);
      border: 1px solid rgba(16, 185, 129, 0.2);
    }
    .result-total p {
      color: #34d399;
      font-size: 0.85rem;
      font-weight: 700;
      text-transform: uppercase;
      margin: 0 0 4px;
    }
    .total-value {
      font-size: 3rem;
      font-weight: 900;
      letter-spacing: -0.04em;
      margin-right: 8px;
    }
    .total-unit {
      color: var(--muted);
    }
    .waiting {
      height: 100%;
      min-height: 360px;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      text-align: center;
      padding: 48px;
      border: 2px dashed #1e293b;
      border-radius: 24px;
      color: var(--dim);
    }
    .waiting-icon {
      font-size: 2.5rem;
      margin-bottom: 16px;
    }
    .waiting h3 {
      color: #cbd5e1;
      margin: 0 0 8px;
    }
    @media (max-width: 900px) {
      .upload-grid {
        grid-template-columns: 1fr;
      }
    }
  </style>
  <main class="page">
    <div class="upload-grid">
      <section>
        <h1>Analyze your <br /><span>Emission Data</span></h1>
        <p class="lead">Paste your invoice details, fuel logs, or material usage below. Our AI will automatically categorize and calculate the carbon footprint.</p>
        <form id="upload-form" method="post" action="/upload">
          <textarea id="upload-text" name="text" placeholder="Example: Purchased 500 liters of diesel fuel for the backup generator...">{{TEXT}}</textarea>
          <div class="submit-row">
            <small>Supports natural language processing</small>
            {{BUTTON}}
          </div>
        </form>
        {{ERROR}}
      </section>
      <section>{{PANEL}}</section>
    </div>
  </main>
  <script>
    const form = document.getElementById('upload-form');
    const input = document.getElementById('upload-text');
    const button = document.getElementById('submit-btn');
    let processing = false;

    input.addEventListener('input', () => {
      button.disabled = processing || !input.value.trim();
    });

    form.addEventListener('submit', (event) => {
      if (processing || !input.value.trim()) {
        event.preventDefault();
        return;
      }
      processing = true;
      button.disabled = true;
      button.innerHTML = {{PROCESSING}};
    });
  </script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UploadResult;
    use crate::view::UPLOAD_FAILED;

    #[test]
    fn idle_with_empty_text_disables_submit() {
        let html = render_upload(&UploadPhase::Idle, "");
        assert!(html.contains(r#"type="submit" disabled>"#));
        assert!(html.contains("Waiting for Input"));
    }

    #[test]
    fn processing_label_is_embedded_for_the_form_script() {
        let html = render_upload(&UploadPhase::Idle, "");
        assert!(html.contains(r#"button.innerHTML = "<span class=\"spinner\"></span> Processing";"#));
    }

    #[test]
    fn result_lines_are_rendered() {
        let result = UploadResult {
            category: "fuel".into(),
            scope: "Scope 1".into(),
            emission_factor: 2.68,
            unit: "liter".into(),
            total_emission: 1340.0,
        };
        let html = render_upload(&UploadPhase::Showing(result), "500 liters diesel");
        assert!(html.contains("Category: fuel"));
        assert!(html.contains("Scope: Scope 1"));
        assert!(html.contains("Factor: 2.68 kgCO2e/liter"));
        assert!(html.contains("Total Carbon Footprint: 1340.00 kg CO2e"));
        assert!(html.contains(">500 liters diesel</textarea>"));
        assert!(!html.contains("type=\"submit\" disabled"));
    }

    #[test]
    fn failure_shows_inline_message() {
        let html = render_upload(&UploadPhase::Failed(UPLOAD_FAILED.into()), "???");
        assert!(html.contains(UPLOAD_FAILED));
        assert!(html.contains("Waiting for Input"));
    }
}
