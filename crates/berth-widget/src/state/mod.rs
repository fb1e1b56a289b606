//! Widget state and its reactive store

mod store;
mod widget_state;

pub use store::Store;
pub use widget_state::WidgetState;
