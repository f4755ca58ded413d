//! Formatting flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit-set selecting the decoration rendered in front of each line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u16);

impl Flags {
    /// No decoration.
    pub const NONE: Flags = Flags(0);
    /// Calendar date, `2024/01/31`.
    pub const DATE: Flags = Flags(1 << 0);
    /// Clock time, `13:45:07`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond precision on the time. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line, `src/app/main.rs:12`.
    pub const LONGFILE: Flags = Flags(1 << 3);
    /// Source base filename and line, `main.rs:12`. Overrides [`Flags::LONGFILE`].
    pub const SHORTFILE: Flags = Flags(1 << 4);
    /// Render date and time in UTC rather than local time.
    pub const UTC: Flags = Flags(1 << 5);
    /// Place the header at the very start of the line, before the decoration.
    pub const PREFIX_AT_LINE_START: Flags = Flags(1 << 6);
    /// Date and time.
    pub const STANDARD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u16 = (1 << 7) - 1;

    /// Builds flags from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    /// Raw bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns a copy with `other` set or cleared.
    pub const fn with(self, other: Flags, enabled: bool) -> Self {
        if enabled {
            Flags(self.0 | other.0)
        } else {
            Flags(self.0 & !other.0)
        }
    }

    /// True when any time-of-day or date stamp is rendered.
    pub(crate) const fn wants_timestamp(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// True when a source location is rendered.
    pub(crate) const fn wants_location(self) -> bool {
        self.0 & (Self::SHORTFILE.0 | Self::LONGFILE.0) != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 7] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONGFILE, "LONGFILE"),
            (Flags::SHORTFILE, "SHORTFILE"),
            (Flags::UTC, "UTC"),
            (Flags::PREFIX_AT_LINE_START, "PREFIX_AT_LINE_START"),
        ];

        if self.is_empty() {
            return f.write_str("Flags(NONE)");
        }
        let set: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Flags({})", set.join(" | "))
    }
}
