//! Console logging helper.
//!
//! Non-fatal failures (malformed persisted JSON, storage write errors) are
//! logged, not surfaced to the user.

/// Log a warning to the browser console (stderr on native targets).
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {msg}");
}
