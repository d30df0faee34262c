//! Tunable constants for the page.
//!
//! Every field has a default; a page may override any subset by embedding
//! `<script id="site-config" type="application/json">{ ... }</script>`.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub projects_url: String,
    pub websites_url: String,
    /// Address written to the clipboard by the copy button.
    pub email: String,
    pub typed_words: Vec<String>,
    pub type_interval_ms: u32,
    pub type_pause_ms: u32,
    pub search_debounce_ms: u32,
    /// Square pixels of viewport per background particle.
    pub area_per_particle: f64,
    pub counter_duration_ms: f64,
    /// Fraction of viewport height a counter's top must rise above.
    pub counter_threshold: f64,
    /// Skill bars reveal once their top is above `viewport / skill_divisor`.
    pub skill_divisor: f64,
    pub featured_count: usize,
    pub slide_step_px: f64,
    pub slide_interval_ms: u32,
    pub theme_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_url: "data/projects.json".into(),
            websites_url: "data/websites.json".into(),
            email: "hello@example.com".into(),
            typed_words: [
                "HTML",
                "CSS",
                "JavaScript",
                "React",
                "Node.js",
                "MongoDB",
                "WordPress",
                "Shopify",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            type_interval_ms: 150,
            type_pause_ms: 1000,
            search_debounce_ms: 300,
            area_per_particle: 10_000.0,
            counter_duration_ms: 2000.0,
            counter_threshold: 0.85,
            skill_divisor: 1.2,
            featured_count: 3,
            slide_step_px: 320.0,
            slide_interval_ms: 4000,
            theme_key: "theme".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parses an override block, keeping the defaults when it is malformed.
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring malformed site config: {e}");
                Self::default()
            }
        }
    }
}
