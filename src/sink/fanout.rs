//! Broadcasting one line to several destinations.

use std::fmt;
use std::io;
use crate::sink::{SharedSink, SharedWriter};

/// Writes every buffer to each member in order.
///
/// A failing member does not stop the others; the first error is returned
/// after all members have been written.
#[derive(Clone)]
pub struct Broadcast {
    targets: Vec<SharedSink>,
}

impl Broadcast {
    pub fn new(targets: Vec<SharedSink>) -> Self {
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl SharedWriter for Broadcast {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut first_error = None;
        for target in &self.targets {
            if let Err(e) = target.write(buf) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(buf.len()),
        }
    }

    fn flush(&self) -> io::Result<()> {
        let mut result = Ok(());
        for target in &self.targets {
            if let Err(e) = target.flush() {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

impl fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("targets", &self.targets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::Arc;

    struct Broken;

    impl SharedWriter for Broken {
        fn write(&self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_writes_every_target() {
        let a = MemorySink::new();
        let b = MemorySink::new();
        let fanout = Broadcast::new(vec![Arc::new(a.clone()), Arc::new(b.clone())]);

        assert_eq!(fanout.write(b"line\n").unwrap(), 5);
        assert_eq!(a.contents(), "line\n");
        assert_eq!(b.contents(), "line\n");
    }

    #[test]
    fn test_failure_does_not_skip_later_targets() {
        let after = MemorySink::new();
        let fanout = Broadcast::new(vec![Arc::new(Broken), Arc::new(after.clone())]);

        let err = fanout.write(b"x\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(after.contents(), "x\n");
    }
}
