mod attendee;
mod dm;
mod event;
mod post;

pub use attendee::Attendee;
pub use dm::DmSummary;
pub use event::{EventData, EventKind};
pub use post::GalleryPost;
