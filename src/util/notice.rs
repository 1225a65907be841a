//! Auto-dismiss for transient success banners.
//!
//! TRADE-OFFS
//! ==========
//! Timers are browser-only. Outside the browser the callback is dropped, so a
//! banner simply stays until the next action replaces it.

/// Run `f` once after `ms` milliseconds.
pub fn after_delay<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}
