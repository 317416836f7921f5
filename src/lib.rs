// Navigation core of the TuneQuest showcase. The terminal front end in main.rs
// drives it through `engine::navigation::NavigationController`.

pub mod config;
pub mod engine;
pub mod notify;
pub mod session;
