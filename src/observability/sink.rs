//! Destinations for rendered log lines.

use std::sync::{Arc, Mutex};

/// Receives fully rendered log lines.
///
/// Implementations must tolerate concurrent calls from many requests.
pub trait LogSink: Send + Sync + 'static {
    fn emit(&self, line: &str);
}

/// Forwards lines to the process-wide tracing subscriber at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Keeps lines in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().expect("memory sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .expect("memory sink mutex poisoned")
            .push(line.to_owned());
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_order_across_clones() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        sink.emit("<- GET / -");
        clone.emit("-> 200 OK 6B 1ms");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["<- GET / -", "-> 200 OK 6B 1ms"]);
    }

    #[test]
    fn concurrent_emits_are_not_lost() {
        let sink = MemorySink::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = sink.clone();
                std::thread::spawn(move || {
                    for j in 0..100 {
                        sink.emit(&format!("{i}-{j}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.len(), 800);
    }
}
