pub mod completed;
pub mod notice;
pub mod pending;
pub mod record_store;

pub use completed::CompletedView;
pub use notice::{ActionOutcome, Notice, NoticeKind};
pub use pending::PendingView;
pub use record_store::RecordStore;
