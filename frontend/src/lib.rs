pub mod components;
pub mod config;
pub mod data;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::set_max_level(config::current().log_level().to_level_filter());
    log::info!("starting Leave Tracker frontend: loading runtime config");

    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::set_max_level(cfg.log_level().to_level_filter());
        log::info!(
            "runtime config ready: calendar {}-{:02}, policy {}",
            cfg.calendar_year,
            cfg.calendar_month,
            cfg.policy_document_url
        );
        router::mount_app();
    });
}
