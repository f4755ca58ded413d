//! Output destinations.
//!
//! # Data Flow
//! ```text
//! Logger (one rendered line)
//!     → SharedWriter::write (exactly once per emit)
//!         - writer.rs: Sink<W> (lock, write_all, flush)
//!         - writer.rs: MemorySink (in-memory capture)
//!         - writer.rs: Discard
//!         - fanout.rs: Broadcast (every member, in order)
//!         - listener writers (e.g. Counter)
//! ```
//!
//! # Design Decisions
//! - Writes take `&self`; every destination is responsible for its own synchronization
//! - One write call carries one complete line, so a locked sink never interleaves lines
//! - Sinks are shared via `Arc` and never closed by the notepad

use std::io;
use std::sync::Arc;

pub mod fanout;
pub mod writer;

pub use fanout::Broadcast;
pub use writer::{Discard, MemorySink, Sink};

/// A destination that accepts concurrent writes through a shared reference.
pub trait SharedWriter: Send + Sync {
    /// Writes `buf`, returning the number of bytes consumed.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    /// Flushes buffered output, if any.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Reference-counted destination handle.
pub type SharedSink = Arc<dyn SharedWriter>;

impl<T: SharedWriter + ?Sized> SharedWriter for Arc<T> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Wraps `writer` in a locked [`Sink`] and erases its type.
pub fn shared<W>(writer: W) -> SharedSink
where
    W: io::Write + Send + 'static,
{
    Arc::new(Sink::new(writer))
}

/// A shared discard destination.
pub fn discard() -> SharedSink {
    Arc::new(Discard)
}
