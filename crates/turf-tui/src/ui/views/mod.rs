mod canvas;
mod chat;
mod connect_modal;
mod dm;
mod events;
mod onboarding;
mod post_detail;
mod room;

pub use canvas::render_canvas_gallery;
pub use chat::render_chat_hub;
pub use connect_modal::render_connect_modal;
pub use dm::render_dm;
pub use events::{render_attendee_list, render_event_list};
pub use onboarding::render_onboarding;
pub use post_detail::render_post_detail;
pub use room::render_room;
