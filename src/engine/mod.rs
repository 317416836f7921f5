pub mod ad_gate;
pub mod frontend;
pub mod navigation;
pub mod premium;
pub mod refusal;
pub mod screen;

pub use refusal::Refusal;
pub use screen::ScreenId;
