use std::time::Duration;

/// Runs `f` after `delay`. The host build has no event loop to wait on, so
/// it runs immediately there.
pub fn run_after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            f();
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = delay;
        f();
    }
}
