use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Client-side navigation handle. Inside the router it drives history;
/// elsewhere it falls back to a full page load.
#[derive(Clone)]
pub struct Navigator(Rc<dyn Fn(&str)>);

impl Navigator {
    pub fn new(f: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn location() -> Self {
        Self::new(|path| {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(path);
            }
        })
    }

    pub fn go(&self, path: &str) {
        log::debug!("navigating to {path}");
        (self.0)(path)
    }
}

/// Must run under `<Router>`.
pub fn provide_router_navigator() {
    let navigate = use_navigate();
    provide_context(Navigator::new(move |path| {
        navigate(path, NavigateOptions::default())
    }));
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::location)
}

const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

pub fn with_query(path: &str, key: &str, value: &str) -> String {
    let encoded = utf8_percent_encode(value, QUERY_VALUE);
    format!("{path}?{key}={encoded}")
}

pub fn apply_leave_link(date: chrono::NaiveDate) -> String {
    with_query(
        "/employee/leave/apply",
        "date",
        &date.format("%Y-%m-%d").to_string(),
    )
}
