//! Log routing: the `log` facade, sent to the browser console under `hydrate`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::LevelFilter;

/// Install the console logger (once per page) and apply `filter`.
///
/// The logger itself passes every level; `filter` is enforced through the
/// facade's max level, so later calls can raise or lower it freely.
pub fn init(filter: LevelFilter) {
    #[cfg(feature = "hydrate")]
    {
        // Err means an earlier call already installed it.
        if console_log::init_with_level(log::Level::Trace).is_err() {
            log::trace!("console logger already installed");
        }
    }
    log::set_max_level(filter);
}

/// Route panics to `console.error` instead of the opaque `unreachable` trap.
pub fn install_panic_hook() {
    #[cfg(feature = "hydrate")]
    console_error_panic_hook::set_once();
}
