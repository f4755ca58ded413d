//! The formatted writer behind every level handle.
//!
//! # Responsibilities
//! - Render decoration (date, time, source location) per [`Flags`]
//! - Place the header before or after the decoration
//! - Hand one complete line to the destination in a single write
//!
//! # Design Decisions
//! - Source location comes from `#[track_caller]`, so it names the emitting call site
//! - The clock is read once per line, only when a timestamp is requested
//! - Write failures are swallowed; logging never fails its caller

use std::fmt::{self, Display, Write as _};
use std::panic::Location;
use chrono::{DateTime, Local, Utc};
use crate::format::Flags;
use crate::sink::{SharedSink, SharedWriter};

/// Renders and emits lines with a fixed header, flags and destination.
///
/// Loggers are immutable; reconfiguring a notepad builds new ones.
#[derive(Clone)]
pub struct Logger {
    header: String,
    flags: Flags,
    destination: SharedSink,
}

impl Logger {
    /// Create a new logger.
    pub fn new(destination: SharedSink, header: impl Into<String>, flags: Flags) -> Self {
        Self {
            header: header.into(),
            flags,
            destination,
        }
    }

    /// The header written in front of every message.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Emit `message`, appending a newline if it lacks one.
    #[track_caller]
    pub fn print(&self, message: impl Display) {
        self.output(Location::caller(), &message.to_string());
    }

    /// Emit `message` followed by a newline.
    #[track_caller]
    pub fn println(&self, message: impl Display) {
        self.output(Location::caller(), &format!("{message}\n"));
    }

    /// Emit pre-formatted arguments, usually built with `format_args!`.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let message = match args.as_str() {
            Some(s) => s.to_owned(),
            None => fmt::format(args),
        };
        self.output(Location::caller(), &message);
    }

    /// Render `message` as one line attributed to `location` and write it.
    pub fn output(&self, location: &Location<'_>, message: &str) {
        let line = self.render(location, message);
        if let Err(e) = self.destination.write(line.as_bytes()) {
            tracing::debug!(error = %e, header = %self.header, "dropped log line after write failure");
        }
    }

    fn render(&self, location: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(self.header.len() + message.len() + 48);
        if self.flags.contains(Flags::PREFIX_AT_LINE_START) {
            line.push_str(&self.header);
            self.decorate(&mut line, location);
        } else {
            self.decorate(&mut line, location);
            line.push_str(&self.header);
        }
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn decorate(&self, line: &mut String, location: &Location<'_>) {
        if self.flags.wants_timestamp() {
            if self.flags.contains(Flags::UTC) {
                write_timestamp(line, self.flags, &Utc::now());
            } else {
                write_timestamp(line, self.flags, &Local::now());
            }
        }
        if self.flags.wants_location() {
            let file = if self.flags.contains(Flags::SHORTFILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            let _ = write!(line, "{}:{}: ", file, location.line());
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("header", &self.header)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

fn write_timestamp<Tz>(line: &mut String, flags: Flags, now: &DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
    }
    if flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(line, "{} ", now.format("%H:%M:%S%.6f"));
        } else {
            let _ = write!(line, "{} ", now.format("%H:%M:%S"));
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Emit through a [`Logger`] (or anything with a `printf` method) using
/// `format!` syntax.
///
/// ```
/// use std::sync::Arc;
/// use notepad::{logf, Flags, Logger, MemorySink};
///
/// let capture = MemorySink::new();
/// let logger = Logger::new(Arc::new(capture.clone()), "APP ", Flags::NONE);
/// logf!(logger, "{} + {} = {}", 1, 2, 1 + 2);
/// assert_eq!(capture.contents(), "APP 1 + 2 = 3\n");
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::Arc;

    fn capture(header: &str, flags: Flags) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        (Logger::new(Arc::new(sink.clone()), header, flags), sink)
    }

    #[test]
    fn test_plain_line() {
        let (logger, sink) = capture("[app] INFO ", Flags::NONE);
        logger.print("hello");
        logger.println("again");
        logger.printf(format_args!("n={}", 3));
        assert_eq!(sink.contents(), "[app] INFO hello\n[app] INFO again\n[app] INFO n=3\n");
    }

    #[test]
    fn test_existing_newline_kept() {
        let (logger, sink) = capture("", Flags::NONE);
        logger.print("done\n");
        logger.println("twice\n");
        assert_eq!(sink.contents(), "done\ntwice\n\n");
    }

    #[test]
    fn test_shortfile_names_call_site() {
        let (logger, sink) = capture("WARN ", Flags::SHORTFILE);
        let line = line!() + 1;
        logger.print("here");
        assert_eq!(sink.contents(), format!("line.rs:{line}: WARN here\n"));
    }

    #[test]
    fn test_longfile_shows_path() {
        let (logger, sink) = capture("", Flags::LONGFILE);
        logger.print("x");
        assert!(sink.contents().starts_with(file!()));
    }

    #[test]
    fn test_shortfile_wins_over_longfile() {
        let (logger, sink) = capture("", Flags::LONGFILE | Flags::SHORTFILE);
        logger.print("x");
        assert!(sink.contents().starts_with("line.rs:"));
    }

    #[test]
    fn test_header_position() {
        let (after, after_sink) = capture("ERROR ", Flags::SHORTFILE);
        let (before, before_sink) = capture("ERROR ", Flags::SHORTFILE | Flags::PREFIX_AT_LINE_START);
        after.print("m");
        before.print("m");
        assert!(after_sink.contents().starts_with("line.rs:"));
        assert!(after_sink.contents().ends_with(": ERROR m\n"));
        assert!(before_sink.contents().starts_with("ERROR line.rs:"));
        assert!(before_sink.contents().ends_with(": m\n"));
    }

    #[test]
    fn test_date_time_shape() {
        let (logger, sink) = capture("INFO ", Flags::STANDARD | Flags::UTC);
        logger.print("tick");
        let out = sink.contents();
        // 2024/01/31 13:45:07 INFO tick
        let (date, rest) = out.split_at(10);
        assert_eq!(date.matches('/').count(), 2);
        assert_eq!(&rest[..1], " ");
        assert_eq!(rest[1..9].matches(':').count(), 2);
        assert_eq!(&rest[9..], " INFO tick\n");
    }

    #[test]
    fn test_utc_flag_renders_utc() {
        let (logger, sink) = capture("", Flags::STANDARD | Flags::UTC);
        let before = Utc::now().format("%Y/%m/%d %H:%M:%S").to_string();
        logger.print("z");
        let after = Utc::now().format("%Y/%m/%d %H:%M:%S").to_string();

        let stamp = &sink.contents()[..19];
        assert!(stamp == before || stamp == after, "{stamp} not in [{before}, {after}]");
    }

    #[test]
    fn test_local_time_without_utc_flag() {
        let (logger, sink) = capture("", Flags::STANDARD);
        let before = Local::now().format("%Y/%m/%d %H:%M:%S").to_string();
        logger.print("z");
        let after = Local::now().format("%Y/%m/%d %H:%M:%S").to_string();

        let stamp = &sink.contents()[..19];
        assert!(stamp == before || stamp == after, "{stamp} not in [{before}, {after}]");
    }

    #[test]
    fn test_microseconds_without_time() {
        let (logger, sink) = capture("", Flags::MICROSECONDS | Flags::UTC);
        logger.print("m");
        let out = sink.contents();
        // 13:45:07.123456 m
        assert_eq!(out.len(), "13:45:07.123456 m\n".len());
        assert_eq!(&out[8..9], ".");
    }

    #[test]
    fn test_logf_macro() {
        let (logger, sink) = capture("DEBUG ", Flags::NONE);
        crate::logf!(logger, "{}-{}", "a", 1);
        assert_eq!(sink.contents(), "DEBUG a-1\n");
    }

    #[test]
    fn test_short_file() {
        assert_eq!(short_file("src/format/line.rs"), "line.rs");
        assert_eq!(short_file(r"src\format\line.rs"), "line.rs");
        assert_eq!(short_file("line.rs"), "line.rs");
    }
}
