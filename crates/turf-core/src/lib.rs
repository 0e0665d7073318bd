pub mod catalog;
pub mod error;
pub mod models;
pub mod nav;
pub mod screen;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use nav::{DisplayMode, NavState, Notice, Tab};
pub use screen::{connect_modal_visible, Screen};
