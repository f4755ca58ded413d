//! Line formatting.
//!
//! # Data Flow
//! ```text
//! emit call (print / println / printf)
//!     → line.rs (decoration per flags.rs + header + message + newline)
//!     → destination (one write per line)
//! ```

pub mod flags;
pub mod line;

pub use flags::Flags;
pub use line::Logger;
