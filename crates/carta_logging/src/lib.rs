//! Category and level based logging, shared by all carta crates.
//!
//! Logging is opt-in: until a logger is registered with [`set_logger`], all `log_*!` macros are no-ops.

use core::{
    fmt::{self, Display, Arguments, Write as _},
    sync::atomic::{AtomicU8, Ordering},
};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

#[doc(hidden)]
pub use carta_base::func_name;

static CLOCK : Lazy<Instant> = Lazy::new(Instant::now);

static GLOBAL_LOGGER : RwLock<Option<&'static Logger>> = parking_lot::const_rwlock(None);

/// Register the global logger, replacing any previously registered logger
pub fn set_logger(logger: &'static Logger) {
    *GLOBAL_LOGGER.write() = Some(logger);
}

/// Unregister the global logger, returning it if one was set
pub fn clear_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.write().take()
}

/// Get the global logger, if one was registered
pub fn get_logger() -> Option<&'static Logger> {
    *GLOBAL_LOGGER.read()
}

/// Time elapsed since the logging clock was first read
pub fn elapsed() -> Duration {
    CLOCK.elapsed()
}

//------------------------------------------------------------------------------------------------------------------------------

/// Severity of a log record, ordered from most to least severe
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// The process is unlikely to recover
    Severe,
    /// An operation failed
    Error,
    /// An operation succeeded, but the result is likely not what the caller wanted
    Warning,
    Info,
    Verbose,
    /// Internal state, only useful when working on the library itself
    Debug,
}

impl LogLevel {
    /// Fixed width tag written in front of every record
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Severe  => "[SEVERE ]",
            LogLevel::Error   => "[ERROR  ]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Info    => "[INFO   ]",
            LogLevel::Verbose => "[VERBOSE]",
            LogLevel::Debug   => "[DEBUG  ]",
        }
    }

    const fn ansi_color(self) -> &'static str {
        match self {
            LogLevel::Severe  => "\x1B[1m\x1B[41m\x1B[30m",
            LogLevel::Error   => "\x1B[91m",
            LogLevel::Warning => "\x1B[93m",
            LogLevel::Info    => "\x1B[37m",
            LogLevel::Verbose => "\x1B[90m",
            LogLevel::Debug   => "\x1B[94m",
        }
    }

    /// Does a record of this level carry its source location
    const fn shows_location(self) -> bool {
        matches!(self, LogLevel::Severe | LogLevel::Error | LogLevel::Debug)
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}{}\x1B[0m", self.ansi_color(), self.tag()))
    }
}

/// Log category, e.g. `Math` or `Math(Pool)`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    name : &'static str,
    sub  : Option<&'static str>,
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { name, sub: None }
    }

    pub const fn new_with_sub(name: &'static str, sub: &'static str) -> Self {
        Self { name, sub: Some(sub) }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn sub_category(&self) -> Option<&'static str> {
        self.sub
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some(sub) = self.sub {
            f.write_fmt(format_args!("({sub})"))?;
        }
        Ok(())
    }
}

/// Where and when a record was logged, see [`log_location!`]
#[derive(Clone, Copy, Debug)]
pub struct LogLocation {
    pub file     : &'static str,
    pub line     : u32,
    pub function : &'static str,
    /// Time since the logging clock started
    pub elapsed  : Duration,
}

impl LogLocation {
    pub const fn new(file: &'static str, line: u32, function: &'static str, elapsed: Duration) -> Self {
        Self { file, line, function, elapsed }
    }
}

/// Create a [`LogLocation`] for the call site
#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), $crate::func_name!(), $crate::elapsed())
    };
}

//------------------------------------------------------------------------------------------------------------------------------

type BoxedWriter = Box<dyn Write + Send>;

struct Sink {
    writers        : Vec<Option<BoxedWriter>>,
    pending        : String,
    always_flush   : bool,
    log_to_console : bool,
}

impl Sink {
    const fn new() -> Self {
        Self { writers: Vec::new(), pending: String::new(), always_flush: false, log_to_console: true }
    }

    fn write_record(&mut self, category: LogCategory, level: LogLevel, loc: &LogLocation, message: Arguments) {
        // Writing into a `String` can't fail
        _ = self.pending.write_fmt(format_args!("\x1B[38m{:>10.4}\x1B[0m {level} [{category}] ", loc.elapsed.as_secs_f64()));
        if level.shows_location() {
            _ = self.pending.write_fmt(format_args!("({}:{}: {}) ", loc.file, loc.line, loc.function));
        }
        _ = self.pending.write_fmt(message);
        self.pending.push('\n');

        if self.always_flush || self.pending.len() > Logger::FLUSH_THRESHOLD {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let bytes = self.pending.as_bytes();
        if self.log_to_console {
            _ = io::stderr().lock().write_all(bytes);
        }
        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(bytes).and_then(|_| writer.flush());
        }
        self.pending.clear();
    }
}

/// Logger writing to stderr and up to [`Logger::MAX_WRITERS`] additional writers
///
/// Records are collected in memory and written out once [`Logger::FLUSH_THRESHOLD`] bytes are pending, on [`Logger::flush`], or when the logger is dropped.
pub struct Logger {
    sink      : Mutex<Sink>,
    max_level : AtomicU8,
}

impl Logger {
    pub const MAX_WRITERS : usize = 8;
    pub const FLUSH_THRESHOLD : usize = 4 * 1024;

    pub const fn new() -> Self {
        Self {
            sink: parking_lot::const_mutex(Sink::new()),
            max_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the least severe level that is still written
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_level.load(Ordering::Relaxed)
    }

    /// Write every record out as soon as it is logged
    pub fn set_always_flush(&self, always_flush: bool) {
        self.sink.lock().always_flush = always_flush;
    }

    /// Mirror the output to stderr, records logged before the change keep their original destination
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut sink = self.sink.lock();
        sink.flush();
        sink.log_to_console = log_to_console;
    }

    /// Add a writer, returning the slot it occupies, or the writer itself when all slots are taken
    pub fn add_writer(&self, writer: BoxedWriter) -> Result<usize, BoxedWriter> {
        let mut sink = self.sink.lock();
        if let Some(idx) = sink.writers.iter().position(Option::is_none) {
            sink.writers[idx] = Some(writer);
            Ok(idx)
        } else if sink.writers.len() < Self::MAX_WRITERS {
            sink.writers.push(Some(writer));
            Ok(sink.writers.len() - 1)
        } else {
            Err(writer)
        }
    }

    /// Remove the writer in the given slot, pending records are written to it first
    pub fn remove_writer(&self, slot: usize) -> Option<BoxedWriter> {
        let mut sink = self.sink.lock();
        sink.flush();
        sink.writers.get_mut(slot).and_then(Option::take)
    }

    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"));
    }

    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, message: Arguments) {
        if self.is_enabled(level) {
            self.sink.lock().write_record(category, level, &loc, message);
        }
    }

    pub fn flush(&self) {
        self.sink.lock().flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.sink.get_mut().flush();
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Log a formatted message to the global logger, if there is one
#[macro_export]
macro_rules! log {
    ($cat:expr, $level:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            let level : $crate::LogLevel = $level;
            if logger.is_enabled(level) {
                logger.log_fmt($cat, level, $crate::log_location!(), format_args!($($arg)+));
            }
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Severe, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_warning {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_verbose {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Verbose, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)+) => { $crate::log!($cat, $crate::LogLevel::Debug, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const CATEGORY : LogCategory = LogCategory::new_with_sub("Math", "Test");

    fn quiet_logger() -> (Logger, SharedBuffer) {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        let buffer = SharedBuffer::default();
        assert!(logger.add_writer(Box::new(buffer.clone())).is_ok());
        (logger, buffer)
    }

    #[test]
    fn writes_category_and_message() {
        let (logger, buffer) = quiet_logger();
        logger.log_fmt(CATEGORY, LogLevel::Info, log_location!(), format_args!("value {}", 42));
        logger.flush();

        let out = buffer.contents();
        assert!(out.contains("[Math(Test)]"), "{out}");
        assert!(out.contains("[INFO   ]"), "{out}");
        assert!(out.contains("value 42"), "{out}");
        assert!(out.ends_with('\n'));
        assert_eq!(LogCategory::new("Math").to_string(), "Math");
    }

    #[test]
    fn filters_above_max_level() {
        let (logger, buffer) = quiet_logger();
        logger.set_max_level(LogLevel::Warning);
        logger.log(CATEGORY, LogLevel::Info, log_location!(), "dropped");
        logger.log(CATEGORY, LogLevel::Error, log_location!(), "kept");
        logger.flush();

        let out = buffer.contents();
        assert!(!out.contains("dropped"));
        assert!(out.contains("kept"));
    }

    #[test]
    fn caches_until_flush() {
        let (logger, buffer) = quiet_logger();
        logger.log(CATEGORY, LogLevel::Info, log_location!(), "cached");
        assert!(buffer.contents().is_empty());

        logger.set_always_flush(true);
        logger.log(CATEGORY, LogLevel::Info, log_location!(), "direct");
        assert!(buffer.contents().contains("direct"));
    }

    #[test]
    fn writer_slots_are_limited() {
        let logger = Logger::new();
        logger.set_log_to_console(false);
        for i in 0..Logger::MAX_WRITERS {
            assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(i));
        }
        assert!(logger.add_writer(Box::new(io::sink())).is_err());
        assert!(logger.remove_writer(3).is_some());
        assert_eq!(logger.add_writer(Box::new(io::sink())).ok(), Some(3));
    }

    #[test]
    fn location_only_for_errors_and_debug() {
        let (logger, buffer) = quiet_logger();
        logger.log(CATEGORY, LogLevel::Debug, log_location!(), "where");
        logger.log(CATEGORY, LogLevel::Warning, log_location!(), "anywhere");
        logger.flush();

        let out = buffer.contents();
        let mut lines = out.lines();
        assert!(lines.next().is_some_and(|line| line.contains("location_only_for_errors_and_debug")));
        assert!(lines.next().is_some_and(|line| !line.contains("location_only_for_errors_and_debug")));
    }

    static GLOBAL : Logger = Logger::new();

    #[test]
    fn global_macros() {
        GLOBAL.set_log_to_console(false);
        let buffer = SharedBuffer::default();
        assert!(GLOBAL.add_writer(Box::new(buffer.clone())).is_ok());
        set_logger(&GLOBAL);

        let count = 3;
        log_warning!(CATEGORY, "{count} buffers recycled");
        GLOBAL.flush();
        assert!(buffer.contents().contains("3 buffers recycled"));

        assert!(clear_logger().is_some());
        log_warning!(CATEGORY, "not written");
        GLOBAL.flush();
        assert!(!buffer.contents().contains("not written"));
    }
}
