//! UI Components
//!
//! Reusable Leptos components.

mod pulse_loader;
mod user_list;

pub use pulse_loader::PulseLoader;
pub use user_list::UserList;
