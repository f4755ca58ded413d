//! Lock-free event counter.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use crate::level::Threshold;
use crate::listener::Listener;
use crate::sink::{SharedSink, SharedWriter};

/// Counts write calls, not bytes.
///
/// Safe to share between any number of emitting threads; every write is a
/// single atomic increment.
#[derive(Debug, Default)]
pub struct Counter {
    count: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of writes.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl SharedWriter for Counter {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(buf.len())
    }
}

/// Listener routing every level at or above `floor` into a [`Counter`].
#[derive(Debug, Clone)]
pub struct LevelCounter {
    counter: Arc<Counter>,
    floor: Threshold,
}

impl LevelCounter {
    pub fn new(counter: Arc<Counter>, floor: Threshold) -> Self {
        Self { counter, floor }
    }

    pub fn floor(&self) -> Threshold {
        self.floor
    }
}

impl Listener for LevelCounter {
    fn select(&self, level: Threshold) -> Option<SharedSink> {
        if level < self.floor {
            return None;
        }
        Some(self.counter.clone())
    }
}

/// Build a [`LevelCounter`] listener counting levels `>= floor`.
pub fn level_counter(counter: Arc<Counter>, floor: Threshold) -> LevelCounter {
    LevelCounter::new(counter, floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_writes() {
        let counter = Arc::new(Counter::new());
        assert_eq!(counter.count(), 0);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || {
                    for _ in 0..20 {
                        assert_eq!(counter.write(b"write to count\n").unwrap(), 15);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(counter.count(), 200);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_counts_calls_not_bytes() {
        let counter = Counter::new();
        counter.write(&[0u8; 1024]).unwrap();
        counter.write(b"").unwrap();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_level_counter_floor() {
        let counter = Arc::new(Counter::new());
        let listener = level_counter(counter.clone(), Threshold::Error);

        for level in Threshold::ALL {
            let selected = listener.select(level);
            assert_eq!(selected.is_some(), level >= Threshold::Error, "{level}");
            if let Some(writer) = selected {
                writer.write(b"x").unwrap();
            }
        }
        assert_eq!(counter.count(), 3);
    }
}
