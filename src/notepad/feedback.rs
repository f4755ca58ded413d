//! Messages that always reach both the audit trail and the user.

use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;
use crate::format::Logger;

/// Pairs an audit handle with a plain, undecorated handle.
///
/// Every message is written through both, independently of any threshold.
/// A missing handle is skipped.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    audit: Option<Arc<Logger>>,
    plain: Option<Arc<Logger>>,
}

impl Feedback {
    pub fn new(audit: Option<Arc<Logger>>, plain: Option<Arc<Logger>>) -> Self {
        Self { audit, plain }
    }

    #[track_caller]
    pub fn print(&self, message: impl Display) {
        self.emit(Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn println(&self, message: impl Display) {
        self.emit(Location::caller(), &format!("{message}\n"));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Location::caller(), &fmt::format(args));
    }

    fn emit(&self, location: &Location<'_>, message: &str) {
        if let Some(audit) = &self.audit {
            audit.output(location, message);
        }
        if let Some(plain) = &self.plain {
            plain.output(location, message);
        }
    }
}
