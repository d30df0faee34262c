use anyhow::{anyhow, bail, Context};
use futures::future::try_join;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::config::SiteConfig;
use crate::loader::Dataset;

/// Fetch both collections concurrently; any failure yields the fallback set.
pub async fn load(window: &Window, config: &SiteConfig) -> Dataset {
    let fetched = try_join(
        fetch_text(window, &config.projects_url),
        fetch_text(window, &config.websites_url),
    )
    .await;
    Dataset::resolve(fetched)
}

async fn fetch_text(window: &Window, url: &str) -> anyhow::Result<String> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)
        .with_context(|| format!("fetching {url}"))?;
    let resp: Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        bail!("{url}: HTTP {}", resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)
        .with_context(|| format!("reading {url}"))?;
    body.as_string().ok_or_else(|| anyhow!("{url}: body is not text"))
}

fn js_err(v: JsValue) -> anyhow::Error {
    anyhow!("{v:?}")
}
