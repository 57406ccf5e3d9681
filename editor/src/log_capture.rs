use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

const CAPACITY: usize = 2_000;

/// One captured log record.
pub struct LogEntry {
    pub level: log::Level,
    pub target: String,
    pub message: String,
    pub timestamp: Instant,
}

/// Ring buffer of captured log records, shared with the event log panel.
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

pub type SharedLogBuffer = Arc<Mutex<LogBuffer>>;

impl LogBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Forwards to `env_logger` and keeps a copy of every record it accepts.
struct CaptureLogger {
    inner: env_logger::Logger,
    buffer: SharedLogBuffer,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if !self.inner.enabled(record.metadata()) {
            return;
        }
        self.inner.log(record);
        self.buffer.lock().push(LogEntry {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
            timestamp: Instant::now(),
        });
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Installs the capturing logger. `RUST_LOG` applies; the default shows
/// `info` and every matgrid edit at `debug`.
pub fn install() -> Result<SharedLogBuffer, log::SetLoggerError> {
    let buffer = Arc::new(Mutex::new(LogBuffer::new(CAPACITY)));
    let inner = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,matgrid_inspector=debug"),
    )
    .build();
    let max_level = inner.filter();

    log::set_boxed_logger(Box::new(CaptureLogger {
        inner,
        buffer: buffer.clone(),
    }))?;
    log::set_max_level(max_level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            level: log::Level::Info,
            target: "matgrid".to_owned(),
            message: message.to_owned(),
            timestamp: Instant::now(),
        }
    }

    #[test]
    fn buffer_drops_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        buffer.push(entry("c"));
        let messages: Vec<_> = buffer.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["b", "c"]);
        buffer.clear();
        assert!(buffer.entries().is_empty());
    }
}
