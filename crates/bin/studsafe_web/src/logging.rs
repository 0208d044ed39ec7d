//! Logging setup — `tracing-subscriber` formatting into the browser console.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Logging initialisation errors.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Parse a `RUST_LOG`-style filter directive.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when the directive is malformed.
pub fn filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(directive)?)
}

/// Install the global subscriber writing through `writer`.
///
/// Timestamps are disabled: there is no wall clock to read in
/// `wasm32-unknown-unknown`, and the console stamps lines itself.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init<W>(directive: &str, writer: W) -> Result<(), LoggingError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub use console::MakeConsoleWriter;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Hands out one [`ConsoleWriter`] per log line.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MakeConsoleWriter;

    /// Buffers one formatted line and forwards it to `console.*` on drop.
    #[derive(Debug)]
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn emit(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let text = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(text.trim_end());
            if self.level == Level::ERROR {
                web_sys::console::error_1(&line);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&line);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&line);
            } else {
                web_sys::console::debug_1(&line);
            }
            self.buffer.clear();
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.emit();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            self.emit();
        }
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> ConsoleWriter {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleWriter {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}
