pub mod navigation;
pub mod storage;
pub mod time;
pub mod timer;
pub mod validation;

/// Joins a possibly relative asset path onto the page origin. Absolute URLs
/// pass through untouched.
pub fn resolve_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches("./").trim_start_matches('/');
    format!("{origin}/{path}")
}
