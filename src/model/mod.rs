pub mod clock;
pub mod collection;
pub mod expiry;
pub mod task;

pub use clock::{Clock, SystemClock};
pub use collection::{AddOutcome, TaskCollection};
pub use expiry::{format_timestamp, DEFAULT_DATETIME_FORMAT};
pub use task::{Task, TaskId};
