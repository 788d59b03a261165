pub mod charts;
pub mod dashboard;
pub mod landing;
pub mod upload;
pub mod verify;
pub mod widgets;

pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn layout(title: &str, active_path: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{NAV}}", &navbar(active_path))
        .replace("{{BODY}}", body)
}

fn navbar(active_path: &str) -> String {
    let link = |href: &str, label: &str| {
        let class = if href == active_path { "nav-link active" } else { "nav-link" };
        format!(r#"<a class="{class}" href="{href}">{label}</a>"#)
    };
    format!(
        r#"<nav class="navbar">
    <a class="brand" href="/">
      <span class="brand-icon">{LEAF_SVG}</span>
      <span class="brand-name">C-Trace</span>
    </a>
    <div class="nav-links">{}{}</div>
  </nav>"#,
        link("/dashboard", "Dashboard"),
        link("/upload", "Upload"),
    )
}

pub const LEAF_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" width="22" height="22"><path d="M12 2C12 2 13 4 14 5C15 6 16.5 6.5 16.5 6.5C16.5 6.5 16 8 17 9C18 10 19 10.5 19 10.5C19 10.5 18 12 18.5 13C19 14 20 14.5 20 14.5C20 14.5 17 17 15 19C13 21 12 23 12 24" /><path d="M12 2C12 2 11 4 10 5C9 6 7.5 6.5 7.5 6.5C7.5 6.5 8 8 7 9C6 10 5 10.5 5 10.5C5 10.5 6 12 5.5 13C5 14 4 14.5 4 14.5C4 14.5 7 17 9 19C11 21 12 23 12 24" /><path d="M12 2V24" /></svg>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap');

    :root {
      --bg-1: #020617;
      --bg-2: #0f172a;
      --ink: #f8fafc;
      --muted: #94a3b8;
      --dim: #64748b;
      --accent: #10b981;
      --accent-soft: rgba(16, 185, 129, 0.12);
      --accent-2: #06b6d4;
      --danger: #f87171;
      --card: rgba(15, 23, 42, 0.72);
      --line: rgba(255, 255, 255, 0.08);
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    a {
      color: inherit;
      text-decoration: none;
    }

    .navbar {
      position: fixed;
      top: 0;
      width: 100%;
      z-index: 40;
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 16px 32px;
      background: rgba(15, 23, 42, 0.4);
      backdrop-filter: blur(16px);
      border-bottom: 1px solid var(--line);
      animation: drop 500ms ease;
    }

    .brand {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 1.25rem;
      font-weight: 700;
    }

    .brand-icon {
      display: inline-flex;
      padding: 8px;
      border-radius: 12px;
      background: var(--accent-soft);
      color: var(--accent);
    }

    .nav-links {
      display: flex;
      gap: 4px;
      padding: 4px;
      border-radius: 999px;
      background: rgba(30, 41, 59, 0.5);
      border: 1px solid var(--line);
    }

    .nav-link {
      padding: 8px 20px;
      border-radius: 999px;
      font-size: 0.9rem;
      color: var(--muted);
      transition: color 200ms ease;
    }

    .nav-link:hover {
      color: var(--ink);
    }

    .nav-link.active {
      color: var(--accent);
      background: rgba(16, 185, 129, 0.2);
      border: 1px solid rgba(16, 185, 129, 0.3);
    }

    .page {
      max-width: 1200px;
      margin: 0 auto;
      padding: 110px 32px 48px;
      animation: rise 600ms ease;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      box-shadow: var(--shadow);
      backdrop-filter: blur(12px);
      padding: 24px;
      position: relative;
      overflow: hidden;
    }

    .placeholder {
      min-height: 320px;
      display: grid;
      place-items: center;
      color: var(--dim);
    }

    .btn {
      appearance: none;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 12px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: rgba(255, 255, 255, 0.05);
      color: var(--muted);
      display: inline-flex;
      align-items: center;
      gap: 8px;
      transition: transform 150ms ease, background 150ms ease;
    }

    .btn:active {
      transform: scale(0.97);
    }

    .btn-danger {
      color: var(--danger);
      background: rgba(239, 68, 68, 0.1);
      border-color: rgba(239, 68, 68, 0.2);
    }

    .btn-accent {
      color: var(--accent);
      background: var(--accent-soft);
      border-color: rgba(16, 185, 129, 0.2);
    }

    .btn-primary {
      color: white;
      background: #059669;
      border-radius: 999px;
      padding: 12px 32px;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      font-size: 0.85rem;
    }

    .btn[disabled] {
      background: #1e293b;
      color: var(--dim);
      cursor: not-allowed;
    }

    .spinner {
      width: 16px;
      height: 16px;
      border: 2px solid rgba(255, 255, 255, 0.3);
      border-top-color: white;
      border-radius: 50%;
      animation: spin 800ms linear infinite;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes drop {
      from {
        opacity: 0;
        transform: translateY(-50px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @media (max-width: 700px) {
      .page {
        padding: 100px 18px 32px;
      }
      .navbar {
        padding: 12px 16px;
      }
    }
  </style>
</head>
<body>
  {{NAV}}
  {{BODY}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(
            escape(r#"<b>"fuel" & 'gas'</b>"#),
            "&lt;b&gt;&quot;fuel&quot; &amp; &#39;gas&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn navbar_marks_active_path() {
        let html = layout("Upload", "/upload", "<main></main>");
        assert!(html.contains(r#"<a class="nav-link active" href="/upload">Upload</a>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/dashboard">Dashboard</a>"#));
        assert!(html.contains("<title>Upload</title>"));
    }
}
