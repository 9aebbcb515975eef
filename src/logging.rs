//! `tracing` output routed to the browser console.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}

/// Filter for `level`, falling back to the default when the directive is malformed.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to the console method matching its level on drop.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());

        if self.level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&message);
        } else {
            web_sys::console::debug_1(&message);
        }
    }
}
