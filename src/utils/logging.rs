/// Logging collaborator handed to every component that reports progress.
///
/// Components never reach for a global logger; the caller decides where
/// messages go. `Sync` so one logger can be shared across the rayon pool.
pub trait Logger: Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards every message to the `log` facade under the crate's target
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLogger;

const TARGET: &str = "fontpatch";

impl Logger for StandardLogger {
    fn info(&self, message: &str) {
        log::info!(target: TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{}", message);
    }
}

/// Install `env_logger` as the `log` backend, printing `LEVEL: message`.
///
/// Info by default, debug with `--debug`; `RUST_LOG` still overrides.
pub fn init_logging(debug: bool) {
    use std::io::Write;

    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

/// Severity attached to a captured message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

/// Logger that keeps every message in memory, used to inspect what a run reported
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: std::sync::Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, in order
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages logged at the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}
