use crate::models::Particle;
use crate::ui::layout;
use rand::Rng;
use std::fmt::Write;

pub const PARTICLE_COUNT: usize = 30;

pub fn particles(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..6.0),
            duration: rng.gen_range(20.0..40.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

pub fn render_landing(particles: &[Particle]) -> String {
    let mut dots = String::new();
    for particle in particles {
        let _ = write!(
            dots,
            r#"<span class="particle" data-id="{}" style="left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;animation-duration:{:.2}s;animation-delay:{:.2}s"></span>"#,
            particle.id,
            particle.x,
            particle.y,
            particle.size,
            particle.size,
            particle.duration,
            particle.delay
        );
    }

    let features: String = FEATURES
        .iter()
        .enumerate()
        .map(|(index, (icon, title, desc))| {
            format!(
                r#"<article class="feature" style="animation-delay:{:.1}s"><div class="feature-icon">{icon}</div><h3>{title}</h3><p>{desc}</p></article>"#,
                0.3 + index as f64 * 0.2
            )
        })
        .collect();

    let stats: String = STATS
        .iter()
        .map(|(value, label)| format!(r#"<div class="hero-stat"><strong>{value}</strong><p>{label}</p></div>"#))
        .collect();

    let body = LANDING_HTML
        .replace("{{PARTICLES}}", &dots)
        .replace("{{FEATURES}}", &features)
        .replace("{{STATS}}", &stats);

    layout("C-Trace | Carbon Intelligence", "/", &body)
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "&#9889;",
        "Real-time Analytics",
        "Turn invoices and fuel logs into an instant carbon picture with AI-powered extraction.",
    ),
    (
        "&#9776;",
        "Full Scope Coverage",
        "Every record is classified into Scope 1, 2 or 3 so reporting lines up with the GHG Protocol.",
    ),
    (
        "&#127760;",
        "Global Impact",
        "Track trends over time and act on reduction insights tailored to your biggest hotspots.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("3", "GHG scopes tracked"),
    ("< 1s", "Invoice analysis"),
    ("PDF", "Executive reports"),
];

const LANDING_HTML: &str = r#"<style>
    .hero {
      position: relative;
      min-height: 100vh;
      overflow: hidden;
      display: grid;
      place-items: center;
      padding: 120px 24px 64px;
    }
    .particle {
      position: absolute;
      border-radius: 50%;
      background: rgba(16, 185, 129, 0.35);
      animation-name: float;
      animation-timing-function: ease-in-out;
      animation-iteration-count: infinite;
      pointer-events: none;
    }
    .orb {
      position: absolute;
      width: 520px;
      height: 520px;
      border-radius: 50%;
      background: radial-gradient(circle, rgba(16, 185, 129, 0.18), transparent 70%);
      top: -120px;
      right: -160px;
      animation: orbit 20s linear infinite;
    }
    .hero-inner {
      position: relative;
      max-width: 960px;
      text-align: center;
      animation: rise 800ms ease both;
    }
    .eyebrow {
      display: inline-block;
      padding: 6px 14px;
      border-radius: 999px;
      border: 1px solid rgba(16, 185, 129, 0.3);
      background: var(--accent-soft);
      color: #34d399;
      font-size: 0.85rem;
      margin-bottom: 24px;
    }
    .hero h1 {
      font-size: clamp(2.6rem, 6vw, 4.6rem);
      font-weight: 900;
      line-height: 1.05;
      margin: 0 0 24px;
    }
    .hero h1 span {
      background: linear-gradient(90deg, #34d399, #06b6d4);
      -webkit-background-clip: text;
      color: transparent;
    }
    .hero .lead {
      color: var(--muted);
      font-size: 1.15rem;
      line-height: 1.7;
      max-width: 640px;
      margin: 0 auto 40px;
    }
    .cta {
      display: flex;
      justify-content: center;
      gap: 16px;
      flex-wrap: wrap;
    }
    .cta .btn-primary {
      padding: 16px 36px;
    }
    .hero-stats {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 24px;
      margin-top: 64px;
    }
    .hero-stat strong {
      font-size: 2rem;
      color: white;
    }
    .hero-stat p {
      margin: 8px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }
    .features {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 24px;
      max-width: 1100px;
      margin: 0 auto;
      padding: 0 24px 96px;
    }
    .feature {
      padding: 32px;
      border-radius: 24px;
      background: var(--card);
      border: 1px solid var(--line);
      animation: rise 800ms ease both;
      transition: transform 200ms ease, border-color 200ms ease;
    }
    .feature:hover {
      transform: translateY(-6px);
      border-color: rgba(16, 185, 129, 0.3);
    }
    .feature-icon {
      font-size: 1.6rem;
      width: 56px;
      height: 56px;
      display: grid;
      place-items: center;
      border-radius: 16px;
      background: var(--accent-soft);
      margin-bottom: 20px;
    }
    .feature h3 {
      margin: 0 0 12px;
    }
    .feature p {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      line-height: 1.6;
    }
    @keyframes float {
      0%, 100% {
        transform: translateY(0);
        opacity: 0.2;
      }
      50% {
        transform: translateY(-40px);
        opacity: 0.8;
      }
    }
    @keyframes orbit {
      to {
        transform: rotate(360deg);
      }
    }
  </style>
  <section class="hero">
    <div class="orb"></div>
    {{PARTICLES}}
    <div class="hero-inner">
      <span class="eyebrow">AI-powered carbon accounting</span>
      <h1>Track every kilogram.<br /><span>Cut what matters.</span></h1>
      <p class="lead">C-Trace reads your invoices, classifies emissions by scope and turns them into an executive dashboard you can verify and share.</p>
      <div class="cta">
        <a class="btn btn-primary" href="/upload">Start Analyzing &#8594;</a>
        <a class="btn" href="/dashboard">View Dashboard</a>
      </div>
      <div class="hero-stats">{{STATS}}</div>
    </div>
  </section>
  <section class="features">{{FEATURES}}</section>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = particles(&mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for (index, particle) in particles.iter().enumerate() {
            assert_eq!(particle.id, index);
            assert!((0.0..100.0).contains(&particle.x));
            assert!((0.0..100.0).contains(&particle.y));
            assert!((2.0..6.0).contains(&particle.size));
            assert!((20.0..40.0).contains(&particle.duration));
            assert!((0.0..2.0).contains(&particle.delay));
        }
    }

    #[test]
    fn landing_renders_particles_and_features() {
        let mut rng = StdRng::seed_from_u64(1);
        let html = render_landing(&particles(&mut rng));
        assert_eq!(html.matches(r#"class="particle""#).count(), PARTICLE_COUNT);
        assert!(html.contains("Real-time Analytics"));
        assert!(html.contains("Full Scope Coverage"));
        assert!(html.contains("Global Impact"));
        assert!(html.contains(r#"href="/dashboard""#));
    }
}
