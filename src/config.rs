use serde::Deserialize;
use web_sys::window;

use crate::error::SiteError;

// <script id="site-config" type="application/json"> in index.html
const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NightsLimits {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for NightsLimits {
    fn default() -> Self {
        Self { min: 1, max: 60, default: 3 }
    }
}

impl NightsLimits {
    pub fn clamp(&self, n: u32) -> u32 {
        n.clamp(self.min, self.max)
    }
}

/// Everything about the site that is not layout: names, contacts, the booking
/// mailbox and the optional form relay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub locality: String,
    pub tagline: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub booking_recipient: String,
    pub booking_subject: String,
    /// Form relay URL (e.g. a Formspree endpoint). Blank means mailto handoff.
    pub relay_endpoint: String,
    pub nights: NightsLimits,
    pub map_query: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "L'Ontano sulle Alpi".into(),
            locality: "Località XXX".into(),
            tagline: "XXX descrizione breve dell'appartamento, atmosfera accogliente e servizi principali."
                .into(),
            contact_phone: "+39 XXX XXX XXXX".into(),
            contact_email: "info@example.com".into(),
            booking_recipient: "host@example.com".into(),
            booking_subject: "Richiesta prenotazione dal sito".into(),
            relay_endpoint: String::new(),
            nights: NightsLimits::default(),
            map_query: "Val Pellice".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), SiteError> {
        let n = &self.nights;
        if n.min > n.max || n.default < n.min || n.default > n.max {
            return Err(SiteError::NightsLimits {
                min: n.min,
                default: n.default,
                max: n.max,
            });
        }
        Ok(())
    }

    pub fn relay(&self) -> Option<&str> {
        let r = self.relay_endpoint.trim();
        (!r.is_empty()).then_some(r)
    }

    pub fn map_embed_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={}&hl=it&z=11&output=embed",
            urlencoding::encode(&self.map_query)
        )
    }

    pub fn map_directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&self.map_query)
        )
    }

    /// Reads the embedded JSON block, falling back to the compiled-in defaults.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            log::debug!("no #{CONFIG_SCRIPT_ID} block, using default site config");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {e}");
                Self::default()
            }
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content().filter(|s| !s.trim().is_empty())
}
