use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_POLICY_DOCUMENT_URL: &str = "/assets/leave-policy.pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy_document_url: String,
    pub calendar_year: i32,
    pub calendar_month: u32,
    /// Pins "today" for demos; the browser clock is used when absent.
    pub reference_date: Option<NaiveDate>,
    pub snapshot_seed: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy_document_url: DEFAULT_POLICY_DOCUMENT_URL.to_string(),
            calendar_year: 2025,
            calendar_month: 4,
            reference_date: None,
            snapshot_seed: 42,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// The loaded config, or defaults until [`init`] has finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

fn cache(config: AppConfig) -> AppConfig {
    let _ = APP_CONFIG.set(config.clone());
    config
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<AppConfig> {
    // Optional global object: window.__LEAVE_TRACKER_CONFIG = { policy_document_url: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__LEAVE_TRACKER_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match serde_json::from_str::<AppConfig>(&json) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring malformed __LEAVE_TRACKER_CONFIG: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<AppConfig> {
    let origin = crate::utils::storage::window()
        .map_err(anyhow::Error::msg)?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("no location origin"))?;
    let url = crate::utils::resolve_url(&origin, "./config.json");
    let resp = reqwest::get(&url).await?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned {}", resp.status());
    }
    Ok(resp.json::<AppConfig>().await?)
}

#[cfg(target_arch = "wasm32")]
pub async fn init() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    if let Some(cfg) = snapshot_from_globals() {
        log::info!("runtime config loaded from window global");
        return cache(cfg);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            log::info!("runtime config loaded from config.json");
            cache(cfg)
        }
        Err(err) => {
            log::debug!("using default config: {err}");
            cache(AppConfig::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn init() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    cache(AppConfig::default())
}
