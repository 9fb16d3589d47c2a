//! Leveled event logging handed to the session and the quote fetcher.
//!
//! `FacadeLog` forwards to the `log` macros, and therefore to whatever sink `main`
//! installed. Tests swap in `RecordingLog` to inspect what was emitted.
use log::{error, info, warn};

/// Capability to emit timestamped, leveled diagnostic records to the shared sink.
pub trait EventLog: Send + Sync {
    /// Routine events: turns, successful fetches, saved transcript.
    fn info(&self, message: &str);
    /// Unusual but harmless conditions such as end of input.
    fn warn(&self, message: &str);
    /// Caught faults, with the error's description.
    fn error(&self, message: &str);
}

/// Production logger backed by the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLog;

impl EventLog for FacadeLog {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

#[cfg(test)]
pub use recording::RecordingLog;

#[cfg(test)]
mod recording {
    use super::EventLog;
    use log::Level;
    use std::sync::Mutex;

    /// Keeps every record in memory.
    #[derive(Debug, Default)]
    pub struct RecordingLog {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingLog {
        pub fn records(&self) -> Vec<(Level, String)> {
            self.records.lock().unwrap().clone()
        }

        pub fn at(&self, level: Level) -> Vec<String> {
            self.records()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m)
                .collect()
        }

        fn push(&self, level: Level, message: &str) {
            self.records.lock().unwrap().push((level, message.to_string()));
        }
    }

    impl EventLog for RecordingLog {
        fn info(&self, message: &str) {
            self.push(Level::Info, message);
        }

        fn warn(&self, message: &str) {
            self.push(Level::Warn, message);
        }

        fn error(&self, message: &str) {
            self.push(Level::Error, message);
        }
    }
}
