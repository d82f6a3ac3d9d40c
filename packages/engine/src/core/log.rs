//! Engine logging.
//!
//! In the browser messages go to the devtools console, elsewhere they are
//! emitted as `tracing` debug events so a host can attach a subscriber.
//!
//! Usage:
//! ```rust
//! conway_engine::engine_log!("universe {}x{} ready", 64, 64);
//! ```

/// Log a formatted message through the platform sink.
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::log::emit(&::std::format!($($arg)*));
    }};
}

#[doc(hidden)]
pub fn emit(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(target: "conway_engine", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn logging_without_subscriber_is_silent() {
        crate::engine_log!("grid {}x{}", 3, 3);
    }
}
