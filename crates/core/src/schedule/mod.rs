//! Temporal classification and meeting list arrangement

pub mod arrange;
pub mod classifier;
pub mod clock;

pub use arrange::{arrange, arrange_with_divider, ArrangedMeetings};
pub use classifier::{status_at, Classification, TemporalClassifier};
pub use clock::{Clock, FixedClock, SystemClock};
