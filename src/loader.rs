//! Turns the two fetched JSON bodies into a [`Dataset`], or falls back to the
//! embedded one. The network half lives in `wasm::fetch`.

use anyhow::Context;

use crate::model::{self, Client, Project, Testimonial, Website};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Network,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub websites: Vec<Website>,
    pub testimonials: Vec<Testimonial>,
    pub clients: Vec<Client>,
    pub source: DataSource,
}

impl Dataset {
    pub fn fallback() -> Self {
        Self {
            projects: model::fallback_projects(),
            websites: model::fallback_websites(),
            testimonials: model::testimonials(),
            clients: model::clients(),
            source: DataSource::Fallback,
        }
    }

    pub fn from_json(projects: &str, websites: &str) -> anyhow::Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(projects).context("parsing projects")?;
        let websites: Vec<Website> =
            serde_json::from_str(websites).context("parsing websites")?;
        Ok(Self {
            projects,
            websites,
            testimonials: model::testimonials(),
            clients: model::clients(),
            source: DataSource::Network,
        })
    }

    /// Accepts the outcome of fetching both bodies. Any failure, in either
    /// fetch or in parsing, discards everything and yields the fallback set.
    pub fn resolve(fetched: anyhow::Result<(String, String)>) -> Self {
        let parsed = fetched.and_then(|(p, w)| Self::from_json(&p, &w));
        match parsed {
            Ok(data) => {
                log::info!(
                    "loaded {} projects, {} websites",
                    data.projects.len(),
                    data.websites.len()
                );
                data
            }
            Err(e) => {
                log::warn!("data load failed, using embedded data: {e:#}");
                Self::fallback()
            }
        }
    }
}
