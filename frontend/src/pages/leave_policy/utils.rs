use std::sync::OnceLock;

use regex::Regex;

use crate::data::AppError;

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load PDF. Please try downloading the file or contact support.";
pub const MOBILE_MESSAGE: &str = "Inline PDF viewing is not supported on your device.";
pub const DOWNLOAD_NAME: &str = "leave-policy.pdf";

fn mobile_agent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)iPhone|iPad|iPod|Android").expect("user agent pattern"))
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    mobile_agent_re().is_match(user_agent)
}

#[cfg(target_arch = "wasm32")]
pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent() -> String {
    String::new()
}

/// Absolute URL for the configured document; relative paths resolve
/// against the page origin in the browser.
pub fn document_url(configured: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return crate::utils::resolve_url(&origin, configured);
        }
    }
    configured.to_string()
}

/// Confirms the document can be fetched. Any transport failure or non-2xx
/// status counts as unavailable.
pub async fn check_document(url: String) -> Result<(), AppError> {
    let response = reqwest::get(&url).await.map_err(|err| {
        log::warn!("policy document request failed: {err}");
        AppError::asset_unavailable(LOAD_FAILED_MESSAGE)
    })?;
    if !response.status().is_success() {
        log::warn!("policy document returned {}", response.status());
        return Err(AppError::asset_unavailable(LOAD_FAILED_MESSAGE));
    }
    log::debug!("policy document available at {url}");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyView {
    Checking,
    Embedded,
    MobileDownload,
    Unavailable(AppError),
}

pub fn policy_view(check: Option<Result<(), AppError>>, mobile: bool) -> PolicyView {
    match check {
        None => PolicyView::Checking,
        Some(Err(err)) => PolicyView::Unavailable(err),
        Some(Ok(())) if mobile => PolicyView::MobileDownload,
        Some(Ok(())) => PolicyView::Embedded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mobile_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; android 14)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0"
        ));
    }

    #[test]
    fn view_follows_check_and_device() {
        assert_eq!(policy_view(None, false), PolicyView::Checking);
        assert_eq!(policy_view(Some(Ok(())), false), PolicyView::Embedded);
        assert_eq!(policy_view(Some(Ok(())), true), PolicyView::MobileDownload);
        let err = AppError::asset_unavailable(LOAD_FAILED_MESSAGE);
        assert_eq!(
            policy_view(Some(Err(err.clone())), true),
            PolicyView::Unavailable(err)
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_keeps_configured_url() {
        assert_eq!(document_url("/assets/leave-policy.pdf"), "/assets/leave-policy.pdf");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn unreachable_document_is_unavailable() {
        let err = check_document("http://127.0.0.1:9/leave-policy.pdf".into())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "ASSET_UNAVAILABLE");
        assert_eq!(err.to_string(), LOAD_FAILED_MESSAGE);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn relative_url_without_origin_is_unavailable() {
        assert!(check_document("/assets/leave-policy.pdf".into()).await.is_err());
    }
}
