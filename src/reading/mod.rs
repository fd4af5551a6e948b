//! Reader state: display preferences, position, and statistics.
//!
//! These are the values a persistence layer stores between sessions. No I/O
//! happens here.

mod history;
mod progress;
mod settings;

pub use history::{ReadingLog, ReadingSession, ReadingSummary};
pub use progress::{dwell_time, ReadingCursor, ReadingMode, ReadingProgress};
pub use settings::{ReadingSettings, SettingsUpdate, MAX_READING_SPEED};
