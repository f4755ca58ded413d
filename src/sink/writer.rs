//! Concrete sink implementations.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::sink::SharedWriter;

/// Serializes writes to an [`io::Write`] behind a lock.
///
/// Each call writes the whole buffer and flushes before the lock is released,
/// so concurrent emitters never produce torn lines.
pub struct Sink<W> {
    writer: Mutex<W>,
}

impl<W: Write> Sink<W> {
    /// Create a new sink around `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        // A panicking emitter must not silence the sink for everyone else.
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> SharedWriter for Sink<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self.lock();
        writer.write_all(buf)?;
        writer.flush()?;
        Ok(buf.len())
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<W> fmt::Debug for Sink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

/// In-memory capture buffer.
///
/// Clones share the same buffer, so one clone can be handed to a notepad
/// while another is used to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SharedWriter for MemorySink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Accepts and drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl SharedWriter for Discard {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_sink_writes_whole_lines() {
        let sink = Arc::new(Sink::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let line = format!("worker-{i} {}\n", "x".repeat(64));
                        sink.write(line.as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let sink = Arc::try_unwrap(sink).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 400);
        assert!(output
            .lines()
            .all(|l| l.starts_with("worker-") && l.ends_with(&"x".repeat(64))));
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let capture = MemorySink::new();
        let writer = capture.clone();
        writer.write(b"one\ntwo\n").unwrap();
        assert_eq!(capture.lines(), vec!["one", "two"]);

        capture.clear();
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn test_discard_reports_full_length() {
        assert_eq!(Discard.write(b"abc").unwrap(), 3);
    }
}
