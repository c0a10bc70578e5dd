pub mod daily_stats;
pub mod filter;
pub mod id;
pub mod person;
pub mod presence;

pub use daily_stats::DailyStats;
pub use filter::FilterMode;
pub use id::{IdMinter, Origin, RecordId};
pub use person::{Person, PersonDraft, PersonField};
pub use presence::{Presence, Status};
