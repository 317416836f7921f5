use crate::engine::screen::ScreenId;

/// Transient user-facing messages. A new message replaces whatever is showing.
pub trait NotificationSink {
    fn display(&mut self, message: &str);
}

/// Told once per committed transition which screen is now the active one.
pub trait ScreenPresenter {
    fn set_active(&mut self, screen: ScreenId, title: &str);
}

pub trait CoinDisplay {
    fn render_coins(&mut self, balance: u32);
}

/// Receives lesson progress in percent, already clamped to `0.0..=100.0`.
pub trait ProgressDisplay {
    fn render_progress(&mut self, percent: f64);
}

/// Everything the navigation controller drives.
pub trait Frontend: NotificationSink + ScreenPresenter + CoinDisplay + ProgressDisplay {}

impl<T> Frontend for T where T: NotificationSink + ScreenPresenter + CoinDisplay + ProgressDisplay {}
