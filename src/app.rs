use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use tunequest::config::Config;
use tunequest::engine::ScreenId;
use tunequest::engine::ad_gate::RngSource;
use tunequest::engine::frontend::{CoinDisplay, NotificationSink, ProgressDisplay, ScreenPresenter};
use tunequest::engine::navigation::{GUITAR, NavigationController, SessionSettings};
use tunequest::notify::Toast;
use tunequest::session::lesson::GuitarString;

use crate::ui::theme::Theme;

pub const INSTRUMENTS: &[&str] = &[GUITAR, "Piano", "Drums", "Violin"];

/// What the terminal shows, kept up to date by the navigation controller.
pub struct Shell {
    pub active: ScreenId,
    pub title: String,
    pub coins: u32,
    pub progress: f64,
    pub toast: Toast,
}

impl Shell {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            active: ScreenId::Instrument,
            title: String::new(),
            coins: 0,
            progress: 0.0,
            toast: Toast::new(toast_duration),
        }
    }
}

impl NotificationSink for Shell {
    fn display(&mut self, message: &str) {
        self.toast.display(message);
    }
}

impl ScreenPresenter for Shell {
    fn set_active(&mut self, screen: ScreenId, title: &str) {
        self.active = screen;
        self.title = title.to_string();
    }
}

impl CoinDisplay for Shell {
    fn render_coins(&mut self, balance: u32) {
        self.coins = balance;
    }
}

impl ProgressDisplay for Shell {
    fn render_progress(&mut self, percent: f64) {
        self.progress = percent;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(ScreenId),
    SelectInstrument(&'static str),
    ConfirmInstrument,
    Hit(GuitarString),
    ResetLesson,
    SetPremium(bool),
    Purchase,
    DismissAd,
    Showcase(Option<&'static str>),
    Back,
}

pub struct ActionItem {
    pub label: String,
    pub description: &'static str,
    pub action: Action,
    pub marked: bool,
}

impl ActionItem {
    fn new(label: impl Into<String>, description: &'static str, action: Action) -> Self {
        Self {
            label: label.into(),
            description,
            action,
            marked: false,
        }
    }

    fn marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }
}

pub type Navigator = NavigationController<RngSource<SmallRng>, Shell>;

pub struct App {
    pub nav: Navigator,
    pub selected: usize,
    pub theme: &'static Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: &'static Theme, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let shell = Shell::new(Duration::from_millis(config.toast_duration_ms));
        let mut nav = NavigationController::new(SessionSettings::from(config), RngSource(rng), shell);
        nav.boot();

        Self {
            nav,
            selected: 0,
            theme,
            should_quit: false,
        }
    }

    pub fn shell(&self) -> &Shell {
        self.nav.frontend()
    }

    pub fn actions(&self) -> Vec<ActionItem> {
        match self.nav.current_screen() {
            ScreenId::Instrument => {
                let mut items: Vec<ActionItem> = INSTRUMENTS
                    .iter()
                    .map(|name| {
                        ActionItem::new(*name, "", Action::SelectInstrument(*name))
                            .marked(self.nav.selected_instrument() == *name)
                    })
                    .collect();
                items.push(ActionItem::new("Continue", "", Action::ConfirmInstrument));
                items
            }
            ScreenId::Login => vec![
                ActionItem::new("Log in", "(simulated)", Action::Nav(ScreenId::Home)),
                ActionItem::new("Continue as guest", "", Action::Nav(ScreenId::Home)),
                ActionItem::new(
                    "Forgot password",
                    "",
                    Action::Showcase(Some("No accounts in this showcase !")),
                ),
            ],
            ScreenId::Home => vec![
                ActionItem::new("Skill tree", "lessons", Action::Nav(ScreenId::SkillTree)),
                ActionItem::new("Daily quests", "", Action::Nav(ScreenId::DailyQuests)),
                ActionItem::new("Leaderboard", "", Action::Nav(ScreenId::Leaderboard)),
                ActionItem::new("Premium", "no ads", Action::Nav(ScreenId::Premium)),
                ActionItem::new("Profile", "", Action::Showcase(None)),
            ],
            ScreenId::SkillTree => {
                let mut items: Vec<ActionItem> = self
                    .nav
                    .registry()
                    .lessons()
                    .into_iter()
                    .map(|lesson| {
                        let title = self.nav.registry().title_of(lesson);
                        ActionItem::new(title, "", Action::Nav(lesson))
                    })
                    .collect();
                items.push(ActionItem::new("Back", "", Action::Back));
                items
            }
            ScreenId::LessonGuitar(_) => {
                let lesson = self.nav.lesson();
                let mut items: Vec<ActionItem> = GuitarString::all()
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        ActionItem::new(format!("[{}] {}", i + 1, s.label()), "", Action::Hit(*s))
                            .marked(lesson.is_hit(*s))
                    })
                    .collect();
                items.push(ActionItem::new("Reset", "[r]", Action::ResetLesson));
                items.push(ActionItem::new("Back to skill tree", "", Action::Back));
                items
            }
            ScreenId::DailyQuests => vec![
                ActionItem::new(
                    "Finish a lesson",
                    "+15 coins",
                    Action::Showcase(Some("Quests are a showcase only !")),
                ),
                ActionItem::new("Back", "", Action::Back),
            ],
            ScreenId::Leaderboard => vec![
                ActionItem::new(
                    "Join a league",
                    "",
                    Action::Showcase(Some("Leagues are a showcase only !")),
                ),
                ActionItem::new("Back", "", Action::Back),
            ],
            ScreenId::Premium => {
                let premium = if self.nav.is_premium() {
                    ActionItem::new("Remove premium", "", Action::SetPremium(false))
                } else {
                    ActionItem::new("Get premium", "", Action::Nav(ScreenId::PaymentForPremium))
                };
                vec![premium, ActionItem::new("Back", "", Action::Back)]
            }
            ScreenId::PaymentForPremium => vec![
                ActionItem::new("Pay", "(simulated, nothing is charged)", Action::Purchase),
                ActionItem::new("Cancel", "", Action::Back),
            ],
            ScreenId::AdInterstitial => vec![ActionItem::new("Close ad", "", Action::DismissAd)],
        }
    }

    pub fn select_next(&mut self) {
        let len = self.actions().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.actions().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn activate(&mut self) {
        if let Some(item) = self.actions().get(self.selected) {
            let action = item.action;
            self.perform(action);
        }
    }

    // Refusals have already been shown as toasts by the controller.
    pub fn perform(&mut self, action: Action) {
        let before = self.nav.current_screen();
        match action {
            Action::Nav(screen) => {
                let _ = self.nav.go_to(screen);
            }
            Action::SelectInstrument(name) => self.nav.select_instrument(name),
            Action::ConfirmInstrument => {
                let _ = self.nav.confirm_instrument();
            }
            Action::Hit(target) => {
                let _ = self.nav.hit(target);
            }
            Action::ResetLesson => self.nav.reset_lesson(),
            Action::SetPremium(active) => self.nav.set_premium(active),
            Action::Purchase => {
                self.nav.set_premium(true);
                let _ = self.nav.go_back();
            }
            Action::DismissAd => {
                self.nav.resolve_ad_dismissal();
            }
            Action::Showcase(message) => self.nav.showcase(message),
            Action::Back => {
                let _ = self.nav.go_back();
            }
        }

        if self.nav.current_screen() != before {
            self.selected = 0;
        }
        let len = self.actions().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.nav.frontend_mut().toast.tick(now);
    }
}
