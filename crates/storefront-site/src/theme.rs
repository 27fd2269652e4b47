//! Stylesheet generation for rendered sites.

use storefront_catalog::Palette;

use crate::model::Layout;

/// Theme stylesheet utilities.
pub struct ThemePipeline;

impl ThemePipeline {
    /// Generate the stylesheet for a palette and layout.
    pub fn generate_css(palette: &Palette, layout: Layout) -> String {
        let variables = format!(
            ":root {{\n  --primary: {};\n  --on-primary: {};\n  --secondary: {};\n  --accent: {};\n  --background: {};\n  --text: {};\n}}\n",
            palette.primary,
            palette.on_primary(),
            palette.secondary,
            palette.accent,
            palette.background,
            palette.text,
        );

        format!("{variables}\n{BASE_CSS}\n{}", layout_css(layout))
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

fn layout_css(layout: Layout) -> &'static str {
    match layout {
        Layout::Classic => CLASSIC_CSS,
        Layout::Elegant => ELEGANT_CSS,
        Layout::Bold => BOLD_CSS,
        Layout::Dynamic => DYNAMIC_CSS,
        Layout::Clean => CLEAN_CSS,
    }
}

const BASE_CSS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: var(--background);
  color: var(--text);
  line-height: 1.6;
}

a {
  color: var(--primary);
}

.container {
  width: min(1100px, 100% - 3rem);
  margin-inline: auto;
}

.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 1rem 1.5rem;
}

.brand {
  font-weight: 700;
  font-size: 1.25rem;
  text-decoration: none;
  color: var(--text);
}

.site-nav {
  display: flex;
  flex-wrap: wrap;
  gap: 1.25rem;
}

.site-nav a {
  text-decoration: none;
  color: var(--text);
}

.site-nav a:hover {
  color: var(--primary);
}

.section {
  padding: 4rem 1.5rem;
}

.section > h2 {
  font-size: 1.75rem;
  margin-bottom: 1.5rem;
}

.hero {
  padding: 6rem 1.5rem;
  text-align: center;
  background: var(--primary);
  color: var(--on-primary);
}

.hero h1 {
  font-size: clamp(2rem, 5vw, 3.5rem);
  line-height: 1.15;
}

.hero-sub {
  margin-top: 1rem;
  font-size: 1.25rem;
  opacity: 0.9;
}

.button,
.button-secondary {
  display: inline-block;
  margin-top: 2rem;
  padding: 0.75rem 1.75rem;
  border: 0;
  border-radius: 0.5rem;
  font: inherit;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
}

.button {
  background: var(--accent);
  color: var(--text);
}

.button-secondary {
  background: transparent;
  color: inherit;
  border: 1px solid currentColor;
}

.prose p + p {
  margin-top: 1rem;
}

.service-grid {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.service-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid color-mix(in srgb, var(--text) 12%, transparent);
}

.service-card h3 {
  margin-bottom: 0.5rem;
  color: var(--secondary);
}

.price {
  margin-top: 0.75rem;
  font-weight: 600;
}

.hours {
  border-collapse: collapse;
  min-width: min(420px, 100%);
}

.hours th,
.hours td {
  padding: 0.5rem 1rem 0.5rem 0;
  text-align: left;
  border-bottom: 1px solid color-mix(in srgb, var(--text) 12%, transparent);
}

.contact address {
  font-style: normal;
}

.contact p + p {
  margin-top: 0.5rem;
}

.site-footer {
  padding: 2rem 1.5rem;
  text-align: center;
  font-size: 0.875rem;
  background: var(--secondary);
  color: #ffffff;
}

.cookie-banner {
  position: fixed;
  inset: auto 1rem 1rem 1rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1.5rem;
  border-radius: 0.75rem;
  background: var(--text);
  color: var(--background);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
}

.cookie-banner[hidden] {
  display: none;
}

.cookie-actions {
  display: flex;
  gap: 0.75rem;
}

.cookie-actions .button,
.cookie-actions .button-secondary {
  margin-top: 0;
}
"#;

const CLASSIC_CSS: &str = r#".layout-classic .site-header {
  border-bottom: 1px solid color-mix(in srgb, var(--text) 12%, transparent);
}
"#;

const ELEGANT_CSS: &str = r#".layout-elegant {
  font-family: Georgia, "Times New Roman", serif;
}

.layout-elegant .site-header {
  flex-direction: column;
  padding: 2.5rem 1.5rem 1.5rem;
}

.layout-elegant .brand {
  font-size: 2rem;
  font-weight: 400;
  letter-spacing: 0.08em;
}

.layout-elegant .brand-tagline {
  font-style: italic;
  opacity: 0.75;
}

.layout-elegant .hero {
  background: var(--background);
  color: var(--text);
  border-block: 1px solid var(--accent);
}

.layout-elegant .section > h2 {
  font-weight: 400;
  text-align: center;
}
"#;

const BOLD_CSS: &str = r#".layout-bold h1,
.layout-bold h2 {
  text-transform: uppercase;
  font-weight: 900;
  letter-spacing: -0.02em;
}

.layout-bold .site-header {
  background: var(--text);
  color: var(--background);
}

.layout-bold .site-header .brand,
.layout-bold .site-header .site-nav a {
  color: var(--background);
}

.layout-bold .hero {
  min-height: 70vh;
  display: grid;
  place-items: center;
  background: var(--accent);
  color: var(--text);
}

.layout-bold .button {
  background: var(--text);
  color: var(--background);
  border-radius: 0;
}
"#;

const DYNAMIC_CSS: &str = r#".layout-dynamic .hero {
  background: linear-gradient(135deg, var(--primary), var(--accent));
}

.layout-dynamic .band-dark {
  background: var(--secondary);
  color: #ffffff;
}

.layout-dynamic .band-dark h2,
.layout-dynamic .band-dark .service-card h3 {
  color: #ffffff;
}

.layout-dynamic .service-card {
  transition: transform 0.2s ease;
}

.layout-dynamic .service-card:hover {
  transform: translateY(-4px);
}
"#;

const CLEAN_CSS: &str = r#".layout-clean .site-header {
  justify-content: center;
  padding: 2rem 1.5rem;
}

.layout-clean .hero {
  background: var(--background);
  color: var(--text);
  text-align: left;
}

.layout-clean .section {
  max-width: 760px;
  margin-inline: auto;
}

.layout-clean .service-card {
  border: 0;
  padding: 0;
}

.layout-clean .site-footer {
  background: transparent;
  color: inherit;
}
"#;
