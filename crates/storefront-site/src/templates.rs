//! Template engine for rendering business pages.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::cookie::{CookieView, BANNER_TEMPLATE};
use crate::mockup::{PreviewView, PREVIEW_TEMPLATE};
use crate::model::Layout;

/// A rendered section, tagged by `type` for the section dispatch template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionView {
    Hero {
        headline: String,
        subheadline: Option<String>,
        cta_label: Option<String>,
        cta_href: String,
    },
    About {
        title: String,
        /// Rendered Markdown
        body_html: String,
    },
    Services {
        title: String,
        items: Vec<ServiceView>,
    },
    Contact {
        title: String,
        phone: Option<String>,
        /// Phone number for the `tel:` link
        phone_href: Option<String>,
        email: Option<String>,
        address: Option<String>,
    },
    Hours {
        title: String,
        rows: Vec<HoursRow>,
    },
}

impl SectionView {
    /// Anchor id and `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hero { .. } => "hero",
            Self::About { .. } => "about",
            Self::Services { .. } => "services",
            Self::Contact { .. } => "contact",
            Self::Hours { .. } => "hours",
        }
    }

    /// Heading shown in the section and navigation. Heroes have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Hero { .. } => None,
            Self::About { title, .. }
            | Self::Services { title, .. }
            | Self::Contact { title, .. }
            | Self::Hours { title, .. } => Some(title.as_str()),
        }
    }
}

/// A service card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub title: String,
    pub description: String,
    pub price: Option<String>,
}

/// One row of the opening-hours table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursRow {
    pub day: String,
    pub hours: String,
}

/// A navigation link to a section anchor.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

/// Context for rendering a business page.
#[derive(Debug, Clone, Serialize)]
pub struct Context<'a> {
    /// Business name
    pub name: &'a str,
    pub tagline: Option<&'a str>,
    /// German category label
    pub category_label: String,
    /// Industry id, used as a body class
    pub industry: &'static str,
    /// German industry name
    pub industry_name: &'static str,
    /// Layout name, used as a body class
    pub layout: &'static str,
    pub sections: Vec<SectionView>,
    pub nav: Vec<NavLink>,
    pub cookie: Option<CookieView<'a>>,
}

/// An entry on the generated overview page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteLink {
    pub name: String,
    pub industry_name: String,
    pub layout: String,
    pub href: String,
    pub preview_href: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        let templates = [
            ("base.html", BASE_TEMPLATE),
            ("sections.html", SECTIONS_TEMPLATE),
            ("cookie.html", BANNER_TEMPLATE),
            ("classic.html", CLASSIC_TEMPLATE),
            ("elegant.html", ELEGANT_TEMPLATE),
            ("bold.html", BOLD_TEMPLATE),
            ("dynamic.html", DYNAMIC_TEMPLATE),
            ("clean.html", CLEAN_TEMPLATE),
            ("preview.html", PREVIEW_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a business page in the given layout.
    pub fn render_site(
        &self,
        layout: Layout,
        context: &Context<'_>,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(layout.template())?;
        tmpl.render(context)
    }

    /// Render a browser mockup page around a site.
    pub fn render_preview(&self, preview: &PreviewView<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("preview.html")?;
        tmpl.render(context! { preview => preview })
    }

    /// Render the overview page linking all generated sites.
    pub fn render_index(
        &self,
        title: &str,
        sites: &[SiteLink],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;
        tmpl.render(context! { title => title, sites => sites })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ name }}{% if tagline %} – {{ tagline }}{% endif %}</title>
  {% if tagline %}<meta name="description" content="{{ tagline }}">
  {% endif %}<link rel="stylesheet" href="theme.css">
</head>
<body class="layout-{{ layout }} industry-{{ industry }}">
  {% block header %}
  <header class="site-header">
    <a class="brand" href="#top">{{ name }}</a>
    <nav class="site-nav">
      {% for link in nav %}<a href="{{ link.href }}">{{ link.title }}</a>
      {% endfor %}
    </nav>
  </header>
  {% endblock %}
  <main id="top">
    {% block content %}
    {% for section in sections %}{% include "sections.html" %}{% endfor %}
    {% endblock %}
  </main>
  {% block footer %}
  <footer class="site-footer">
    <p>&copy; {{ name }}{% if category_label %} · {{ category_label }}{% endif %}</p>
  </footer>
  {% endblock %}
  {% if cookie %}{% include "cookie.html" %}{% endif %}
</body>
</html>"##;

const SECTIONS_TEMPLATE: &str = r##"{% if section.type == "hero" %}
<section id="hero" class="section hero">
  <div class="container">
    <h1>{{ section.headline }}</h1>
    {% if section.subheadline %}<p class="hero-sub">{{ section.subheadline }}</p>{% endif %}
    {% if section.cta_label %}<a class="button" href="{{ section.cta_href }}">{{ section.cta_label }}</a>{% endif %}
  </div>
</section>
{% elif section.type == "about" %}
<section id="about" class="section about">
  <div class="container">
    <h2>{{ section.title }}</h2>
    <div class="prose">{{ section.body_html | safe }}</div>
  </div>
</section>
{% elif section.type == "services" %}
<section id="services" class="section services">
  <div class="container">
    <h2>{{ section.title }}</h2>
    <ul class="service-grid">
      {% for item in section.items %}
      <li class="service-card">
        <h3>{{ item.title }}</h3>
        {% if item.description %}<p>{{ item.description }}</p>{% endif %}
        {% if item.price %}<p class="price">{{ item.price }}</p>{% endif %}
      </li>
      {% endfor %}
    </ul>
  </div>
</section>
{% elif section.type == "hours" %}
<section id="hours" class="section hours-section">
  <div class="container">
    <h2>{{ section.title }}</h2>
    <table class="hours">
      {% for row in section.rows %}
      <tr><th scope="row">{{ row.day }}</th><td>{{ row.hours }}</td></tr>
      {% endfor %}
    </table>
  </div>
</section>
{% elif section.type == "contact" %}
<section id="contact" class="section contact">
  <div class="container">
    <h2>{{ section.title }}</h2>
    <address>
      {% if section.phone %}<p>Telefon: <a href="tel:{{ section.phone_href }}">{{ section.phone }}</a></p>{% endif %}
      {% if section.email %}<p>E-Mail: <a href="mailto:{{ section.email }}">{{ section.email }}</a></p>{% endif %}
      {% if section.address %}<p>{{ section.address }}</p>{% endif %}
    </address>
  </div>
</section>
{% endif %}"##;

const CLASSIC_TEMPLATE: &str = r##"{% extends "base.html" %}"##;

const ELEGANT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block header %}
<header class="site-header">
  <a class="brand" href="#top">{{ name }}</a>
  {% if tagline %}<p class="brand-tagline">{{ tagline }}</p>{% endif %}
  <nav class="site-nav">
    {% for link in nav %}<a href="{{ link.href }}">{{ link.title }}</a>
    {% endfor %}
  </nav>
</header>
{% endblock %}"##;

const BOLD_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block header %}
<header class="site-header">
  <a class="brand" href="#top">{{ name }}</a>
  <nav class="site-nav">
    {% for link in nav %}<a href="{{ link.href }}">{{ link.title }}</a>
    {% endfor %}
  </nav>
  {% for link in nav %}{% if link.href == "#contact" %}<a class="button" href="#contact">{{ link.title }}</a>{% endif %}{% endfor %}
</header>
{% endblock %}"##;

const DYNAMIC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% for section in sections %}
<div class="band {{ loop.cycle('band-light', 'band-dark') }}">
  {% include "sections.html" %}
</div>
{% endfor %}
{% endblock %}"##;

const CLEAN_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block header %}
<header class="site-header">
  <a class="brand" href="#top">{{ name }}</a>
</header>
{% endblock %}

{% block footer %}
<footer class="site-footer">
  <p>{{ name }}</p>
</footer>
{% endblock %}"##;

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 2rem 1.5rem; color: #111827; }
    ul { list-style: none; padding: 0; display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); }
    li { border: 1px solid #e5e7eb; border-radius: 0.75rem; padding: 1.25rem; }
    .meta { color: #6b7280; font-size: 0.875rem; }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  <ul>
    {% for site in sites %}
    <li>
      <h2><a href="{{ site.href }}">{{ site.name }}</a></h2>
      <p class="meta">{{ site.industry_name }} · {{ site.layout }}</p>
      {% if site.preview_href %}<p><a href="{{ site.preview_href }}">Vorschau</a></p>{% endif %}
    </li>
    {% endfor %}
  </ul>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context<'static> {
        Context {
            name: "Bäckerei Korn",
            tagline: Some("Brot wie früher"),
            category_label: "Bäckerei".to_string(),
            industry: "bakery",
            industry_name: "Bäckerei",
            layout: "classic",
            sections: vec![
                SectionView::Hero {
                    headline: "Bäckerei Korn".to_string(),
                    subheadline: Some("Brot wie früher".to_string()),
                    cta_label: Some("Kontakt".to_string()),
                    cta_href: "#contact".to_string(),
                },
                SectionView::Hours {
                    title: "Öffnungszeiten".to_string(),
                    rows: vec![HoursRow {
                        day: "Montag".to_string(),
                        hours: "06:00 – 18:00 Uhr".to_string(),
                    }],
                },
                SectionView::Contact {
                    title: "Kontakt".to_string(),
                    phone: Some("030 123".to_string()),
                    phone_href: Some("030123".to_string()),
                    email: None,
                    address: None,
                },
            ],
            nav: vec![
                NavLink {
                    title: "Öffnungszeiten".to_string(),
                    href: "#hours".to_string(),
                },
                NavLink {
                    title: "Kontakt".to_string(),
                    href: "#contact".to_string(),
                },
            ],
            cookie: None,
        }
    }

    #[test]
    fn renders_every_layout() {
        let engine = TemplateEngine::new();
        let context = context();

        for layout in Layout::ALL {
            let html = engine.render_site(layout, &context).unwrap();

            assert!(html.contains("<title>Bäckerei Korn – Brot wie früher</title>"));
            assert!(html.contains("06:00 – 18:00 Uhr"));
            assert!(html.contains(r#"href="tel:030123""#));
        }
    }

    #[test]
    fn layouts_differ() {
        let engine = TemplateEngine::new();
        let context = context();

        let elegant = engine.render_site(Layout::Elegant, &context).unwrap();
        assert!(elegant.contains(r#"<p class="brand-tagline">"#));

        let dynamic = engine.render_site(Layout::Dynamic, &context).unwrap();
        assert!(dynamic.contains("band-light"));
        assert!(dynamic.contains("band-dark"));

        let clean = engine.render_site(Layout::Clean, &context).unwrap();
        assert!(!clean.contains(r#"class="site-nav""#));

        let bold = engine.render_site(Layout::Bold, &context).unwrap();
        assert!(bold.contains(r##"<a class="button" href="#contact">Kontakt</a>"##));
    }

    #[test]
    fn escapes_user_text() {
        let engine = TemplateEngine::new();
        let mut context = context();
        context.name = "<script>alert(1)</script>";

        let html = engine.render_site(Layout::Classic, &context).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_index() {
        let engine = TemplateEngine::new();
        let sites = vec![SiteLink {
            name: "Salon".to_string(),
            industry_name: "Friseur".to_string(),
            layout: "bold".to_string(),
            href: "/salon/".to_string(),
            preview_href: Some("/salon/preview.html".to_string()),
        }];

        let html = engine.render_index("Alle Seiten", &sites).unwrap();

        // Autoescape also encodes slashes, so match around them
        assert!(html.contains(">Salon</a>"));
        assert!(html.contains("preview.html"));
        assert!(html.contains("Friseur · bold"));
    }
}
