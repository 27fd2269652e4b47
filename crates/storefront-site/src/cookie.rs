//! Cookie-consent banner.

use serde::{Deserialize, Serialize};

/// `localStorage` key holding the visitor's choice.
pub const CONSENT_STORAGE_KEY: &str = "storefront-cookie-consent";

/// Banner settings from a business file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieConsent {
    pub enabled: bool,
    pub message: String,
    pub accept_label: String,
    pub decline_label: String,
    pub privacy_url: Option<String>,
    pub privacy_label: String,
}

impl Default for CookieConsent {
    fn default() -> Self {
        Self {
            enabled: true,
            message: "Wir verwenden Cookies, um unsere Website für Sie zu verbessern.".to_string(),
            accept_label: "Akzeptieren".to_string(),
            decline_label: "Ablehnen".to_string(),
            privacy_url: None,
            privacy_label: "Datenschutz".to_string(),
        }
    }
}

/// Values handed to the banner template.
#[derive(Debug, Clone, Serialize)]
pub struct CookieView<'a> {
    pub message: &'a str,
    pub accept_label: &'a str,
    pub decline_label: &'a str,
    pub privacy_url: Option<&'a str>,
    pub privacy_label: &'a str,
    pub storage_key: &'static str,
}

impl CookieConsent {
    /// Template values, or `None` when the banner is switched off.
    pub fn view(&self) -> Option<CookieView<'_>> {
        if !self.enabled {
            return None;
        }

        Some(CookieView {
            message: &self.message,
            accept_label: &self.accept_label,
            decline_label: &self.decline_label,
            privacy_url: self.privacy_url.as_deref().filter(|url| !url.is_empty()),
            privacy_label: &self.privacy_label,
            storage_key: CONSENT_STORAGE_KEY,
        })
    }
}

/// Banner markup and script. Hidden until the script finds no stored choice.
pub(crate) const BANNER_TEMPLATE: &str = r##"<div id="cookie-consent" class="cookie-banner" role="dialog" aria-live="polite" hidden>
  <p>{{ cookie.message }}{% if cookie.privacy_url %} <a href="{{ cookie.privacy_url }}">{{ cookie.privacy_label }}</a>{% endif %}</p>
  <div class="cookie-actions">
    <button type="button" class="button-secondary" data-consent="declined">{{ cookie.decline_label }}</button>
    <button type="button" class="button" data-consent="accepted">{{ cookie.accept_label }}</button>
  </div>
</div>
<script>
(function () {
  var key = "{{ cookie.storage_key }}";
  var banner = document.getElementById("cookie-consent");
  if (!banner) return;
  try {
    if (window.localStorage.getItem(key)) return;
  } catch (e) {}
  banner.hidden = false;
  banner.addEventListener("click", function (event) {
    var choice = event.target.getAttribute("data-consent");
    if (!choice) return;
    try {
      window.localStorage.setItem(key, choice);
    } catch (e) {}
    banner.hidden = true;
  });
})();
</script>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_by_default_with_german_labels() {
        let consent = CookieConsent::default();
        let view = consent.view().unwrap();

        assert_eq!(view.accept_label, "Akzeptieren");
        assert_eq!(view.decline_label, "Ablehnen");
        assert_eq!(view.storage_key, CONSENT_STORAGE_KEY);
        assert!(view.privacy_url.is_none());
    }

    #[test]
    fn disabled_banner_has_no_view() {
        let consent = CookieConsent {
            enabled: false,
            ..Default::default()
        };

        assert!(consent.view().is_none());
    }

    #[test]
    fn partial_settings_keep_defaults() {
        let consent: CookieConsent =
            toml::from_str("privacy_url = \"/datenschutz\"\naccept_label = \"OK\"").unwrap();

        assert!(consent.enabled);
        assert_eq!(consent.accept_label, "OK");
        assert_eq!(consent.decline_label, "Ablehnen");
        assert_eq!(consent.view().unwrap().privacy_url, Some("/datenschutz"));
    }
}
