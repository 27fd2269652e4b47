//! Rendering a business into a themed page.

use pulldown_cmark::{html, Event, Options, Parser};
use storefront_catalog::{CatalogError, Industry, IndustryProfile};
use storefront_i18n::{convert_opening_hours_to_german, translate_category};

use crate::mockup::{MockupViewport, PreviewView};
use crate::model::{Business, Layout, Section};
use crate::templates::{Context, HoursRow, NavLink, SectionView, ServiceView, TemplateEngine};
use crate::theme::ThemePipeline;

/// Output of rendering one business.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub slug: String,
    pub name: String,
    pub industry: Industry,
    pub layout: Layout,
    /// The page (`index.html`)
    pub html: String,
    /// The theme stylesheet (`theme.css`)
    pub css: String,
    /// The mockup page (`preview.html`), when a viewport is configured
    pub preview: Option<String>,
}

/// Errors that can occur while rendering a business.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid colors: {0}")]
    Colors(#[from] CatalogError),

    #[error("Failed to render template: {0}")]
    Template(String),
}

/// Renders businesses with a shared template engine.
pub struct SiteRenderer {
    templates: TemplateEngine,
    minify: bool,
    mockup: Option<MockupViewport>,
}

impl SiteRenderer {
    pub fn new(minify: bool) -> Self {
        Self {
            templates: TemplateEngine::new(),
            minify,
            mockup: None,
        }
    }

    /// Also render a browser mockup page for every site.
    pub fn with_mockup(mut self, viewport: MockupViewport) -> Self {
        self.mockup = Some(viewport);
        self
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Render the page, stylesheet and optional preview for a business.
    pub fn render(&self, business: &Business) -> Result<RenderedSite, RenderError> {
        let slug = business.slug();
        let industry = business.resolve_industry();
        let profile = industry.profile();

        let palette = match &business.colors {
            Some(scheme) => profile.palette().with_overrides(scheme)?,
            None => profile.palette(),
        };

        let sections: Vec<SectionView> = business
            .effective_sections()
            .iter()
            .filter_map(|section| section_view(section, business, profile))
            .collect();

        let nav = sections
            .iter()
            .filter_map(|section| {
                section.title().map(|title| NavLink {
                    title: title.to_string(),
                    href: format!("#{}", section.kind()),
                })
            })
            .collect();

        let context = Context {
            name: &business.name,
            tagline: business.tagline.as_deref(),
            category_label: translate_category(&business.category),
            industry: industry.id(),
            industry_name: profile.name,
            layout: business.layout.name(),
            sections,
            nav,
            cookie: business.cookie_consent.view(),
        };

        let html = self
            .templates
            .render_site(business.layout, &context)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        let css = ThemePipeline::generate_css(&palette, business.layout);
        let css = if self.minify {
            ThemePipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Failed to minify theme for {}: {}", slug, e);
                css
            })
        } else {
            css
        };

        let preview = match &self.mockup {
            Some(viewport) => {
                let url = format!("www.{}.de", slug);
                let view = PreviewView::new(viewport, &business.name, "index.html", &url);
                let page = self
                    .templates
                    .render_preview(&view)
                    .map_err(|e| RenderError::Template(e.to_string()))?;
                Some(page)
            }
            None => None,
        };

        tracing::debug!("Rendered {} as {} ({})", slug, business.layout, industry);

        Ok(RenderedSite {
            slug,
            name: business.name.clone(),
            industry,
            layout: business.layout,
            html,
            css,
            preview,
        })
    }
}

/// Resolve a declared section against the business data.
///
/// Contact and hours sections without data are dropped.
fn section_view(
    section: &Section,
    business: &Business,
    profile: &IndustryProfile,
) -> Option<SectionView> {
    let has_contact = business.contact.as_ref().is_some_and(|c| !c.is_empty());

    let view = match section {
        Section::Hero {
            headline,
            subheadline,
            cta_label,
            cta_href,
        } => SectionView::Hero {
            headline: headline.clone().unwrap_or_else(|| business.name.clone()),
            subheadline: subheadline.clone().or_else(|| business.tagline.clone()),
            cta_label: cta_label
                .clone()
                .or_else(|| has_contact.then(|| "Kontakt aufnehmen".to_string())),
            cta_href: cta_href.clone().unwrap_or_else(|| "#contact".to_string()),
        },

        Section::About { title, body } => SectionView::About {
            title: title.clone().unwrap_or_else(|| "Über uns".to_string()),
            body_html: markdown_to_html(body),
        },

        Section::Services { title, items } => {
            let items = if items.is_empty() {
                profile
                    .services
                    .iter()
                    .map(|s| ServiceView {
                        title: s.title.to_string(),
                        description: s.description.to_string(),
                        price: None,
                    })
                    .collect()
            } else {
                items
                    .iter()
                    .map(|s| ServiceView {
                        title: s.title.clone(),
                        description: s.description.clone(),
                        price: s.price.clone(),
                    })
                    .collect()
            };

            SectionView::Services {
                title: title.clone().unwrap_or_else(|| "Leistungen".to_string()),
                items,
            }
        }

        Section::Contact { title } => {
            let Some(contact) = business.contact.as_ref().filter(|c| !c.is_empty()) else {
                tracing::debug!("Skipping contact section of {}: no contact data", business.name);
                return None;
            };

            SectionView::Contact {
                title: title.clone().unwrap_or_else(|| "Kontakt".to_string()),
                phone: contact.phone.clone(),
                phone_href: contact.phone.as_deref().map(phone_href),
                email: contact.email.clone(),
                address: contact.address.clone(),
            }
        }

        Section::Hours { title } => {
            if business.hours.is_empty() {
                tracing::debug!("Skipping hours section of {}: no hours", business.name);
                return None;
            }

            SectionView::Hours {
                title: title.clone().unwrap_or_else(|| "Öffnungszeiten".to_string()),
                rows: hours_rows(&business.hours),
            }
        }
    };

    Some(view)
}

/// Convert hours lines to German and split each at the first `": "`.
pub fn hours_rows(lines: &[String]) -> Vec<HoursRow> {
    convert_opening_hours_to_german(lines)
        .into_iter()
        .map(|line| match line.split_once(": ") {
            Some((day, hours)) => HoursRow {
                day: day.to_string(),
                hours: hours.to_string(),
            },
            None => HoursRow {
                day: String::new(),
                hours: line,
            },
        })
        .collect()
}

/// Strip formatting from a phone number for a `tel:` link.
pub fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Render Markdown to HTML. Raw HTML in the source is shown as text.
pub fn markdown_to_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
