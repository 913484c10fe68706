//! Logging setup for the browser.
//!
//! Installs a `tracing-subscriber` fmt subscriber whose writer forwards every
//! formatted line to the devtools console, at the matching console level.
//! The filter defaults to `info` and can be changed per page load with a
//! `?log=<directive>` query parameter (e.g. `?log=superside_landing=debug`).

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

pub const DEFAULT_FILTER: &str = "info";

/// Install the console subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(directive, "console logging ready");
    }
}

/// Filter directive requested by the page URL, if any.
pub fn filter_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    filter_from_query(&search)
}

/// Extract the `log` parameter from a URL query string (`?a=b&log=debug`).
pub fn filter_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("log="))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Hands out one [`ConsoleWriter`] per formatted event.
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one event and emits it to the console on flush/drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        let message = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
