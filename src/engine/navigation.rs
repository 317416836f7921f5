use crate::config::Config;
use crate::engine::ad_gate::{AdGate, DEFAULT_AD_CHANCE, RandomSource};
use crate::engine::frontend::Frontend;
use crate::engine::premium::PremiumStatus;
use crate::engine::refusal::Refusal;
use crate::engine::screen::{DEFAULT_APP_TITLE, ScreenId, ScreenRegistry};
use crate::session::lesson::{DEFAULT_LESSON_REWARD, GuitarString, HitOutcome, LessonTracker};

pub const GUITAR: &str = "Guitar";
pub const DEFAULT_STARTING_COINS: u32 = 250;

// --- Settings ---

/// Values fixed for the lifetime of one session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSettings {
    pub app_title: String,
    pub ad_chance: f64,
    pub starting_coins: u32,
    pub lesson_reward: u32,
    pub lesson_count: u8,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            ad_chance: DEFAULT_AD_CHANCE,
            starting_coins: DEFAULT_STARTING_COINS,
            lesson_reward: DEFAULT_LESSON_REWARD,
            lesson_count: 1,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            app_title: config.app_title.clone(),
            ad_chance: config.ad_chance,
            starting_coins: config.starting_coins,
            lesson_reward: config.lesson_reward,
            lesson_count: config.lesson_count,
        }
    }
}

// --- State ---

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current_screen: ScreenId,
    pub pending_screen: Option<ScreenId>,
    pub selected_instrument: String,
    pub coin_balance: u32,
    pub premium: PremiumStatus,
}

impl NavigationState {
    pub fn new(starting_coins: u32) -> Self {
        Self {
            current_screen: ScreenId::Instrument,
            pending_screen: None,
            selected_instrument: GUITAR.to_string(),
            coin_balance: starting_coins,
            premium: PremiumStatus::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered(ScreenId),
    /// The ad screen is showing; `deferred` opens once it is dismissed.
    Interstitial { deferred: ScreenId },
}

// --- Back table ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackStep {
    To(ScreenId),
    Refuse(Refusal),
}

/// Where "back" leads from each screen. There is no history stack.
pub fn back_step(current: ScreenId) -> BackStep {
    match current {
        ScreenId::Instrument => BackStep::Refuse(Refusal::BackFromInstrument),
        ScreenId::Login => BackStep::To(ScreenId::Instrument),
        ScreenId::Home => BackStep::Refuse(Refusal::BackFromHome),
        ScreenId::LessonGuitar(_) => BackStep::To(ScreenId::SkillTree),
        ScreenId::PaymentForPremium => BackStep::To(ScreenId::Premium),
        ScreenId::SkillTree
        | ScreenId::DailyQuests
        | ScreenId::Leaderboard
        | ScreenId::Premium
        | ScreenId::AdInterstitial => BackStep::To(ScreenId::Home),
    }
}

// --- Controller ---

pub struct NavigationController<R, F> {
    state: NavigationState,
    registry: ScreenRegistry,
    gate: AdGate<R>,
    lesson: LessonTracker,
    frontend: F,
}

impl<R: RandomSource, F: Frontend> NavigationController<R, F> {
    pub fn new(settings: SessionSettings, source: R, frontend: F) -> Self {
        Self {
            state: NavigationState::new(settings.starting_coins),
            registry: ScreenRegistry::new(&settings.app_title, settings.lesson_count),
            gate: AdGate::new(source, settings.ad_chance),
            lesson: LessonTracker::new(settings.lesson_reward),
            frontend,
        }
    }

    /// Shows the starting screen.
    pub fn boot(&mut self) {
        self.commit(self.state.current_screen);
    }

    pub fn go_to(&mut self, target: ScreenId) -> Result<Transition, Refusal> {
        if target == ScreenId::Home && self.state.current_screen == ScreenId::Instrument {
            return self.refuse(Refusal::HomeLocked);
        }

        if self.gate.should_interrupt_for(target, self.state.premium) {
            self.state.pending_screen = Some(target);
            self.commit(ScreenId::AdInterstitial);
            return Ok(Transition::Interstitial { deferred: target });
        }

        self.commit(target);
        Ok(Transition::Entered(target))
    }

    pub fn go_back(&mut self) -> Result<ScreenId, Refusal> {
        match back_step(self.state.current_screen) {
            BackStep::To(screen) => {
                self.commit(screen);
                Ok(screen)
            }
            BackStep::Refuse(refusal) => self.refuse(refusal),
        }
    }

    /// Leaves the interstitial for whatever it deferred, without gating again.
    pub fn resolve_ad_dismissal(&mut self) -> ScreenId {
        let target = self.state.pending_screen.take().unwrap_or(ScreenId::Home);
        self.commit(target);
        target
    }

    pub fn select_instrument(&mut self, instrument: &str) {
        self.state.selected_instrument = instrument.to_string();
        if instrument == GUITAR {
            self.frontend.display("Guitar selected !");
        } else {
            self.frontend.display("Only Guitar is enabled in this showcase !");
        }
    }

    pub fn confirm_instrument(&mut self) -> Result<ScreenId, Refusal> {
        if self.state.selected_instrument != GUITAR {
            return self.refuse(Refusal::InstrumentUnavailable);
        }
        self.commit(ScreenId::Login);
        Ok(ScreenId::Login)
    }

    pub fn hit(&mut self, target: GuitarString) -> Result<HitOutcome, Refusal> {
        let outcome = match self.lesson.hit(target) {
            Ok(outcome) => outcome,
            Err(refusal) => return self.refuse(refusal),
        };
        self.frontend.render_progress(outcome.percent());

        match outcome {
            HitOutcome::Progress { .. } => self.frontend.display("Good hit."),
            HitOutcome::Completed { reward, .. } => {
                self.state.coin_balance = self.state.coin_balance.saturating_add(reward);
                tracing::info!(
                    lesson = ?self.lesson.active_lesson(),
                    reward,
                    balance = self.state.coin_balance,
                    "lesson complete"
                );
                self.frontend.render_coins(self.state.coin_balance);
                self.frontend
                    .display(&format!("Nice. Lesson complete (showcase)! +{reward} coins"));
            }
        }
        Ok(outcome)
    }

    pub fn reset_lesson(&mut self) {
        self.lesson.reset();
        self.frontend.render_progress(0.0);
        self.frontend.display("Reset.");
    }

    pub fn set_premium(&mut self, active: bool) {
        if self.state.premium.set(active) {
            tracing::info!(active, "premium status changed");
        }
        self.frontend.display(self.state.premium.message());
    }

    /// Buttons that only exist to show off the layout.
    pub fn showcase(&mut self, message: Option<&str>) {
        self.frontend.display(message.unwrap_or("Showcase only !"));
    }

    pub fn current_screen(&self) -> ScreenId {
        self.state.current_screen
    }

    pub fn pending_screen(&self) -> Option<ScreenId> {
        self.state.pending_screen
    }

    pub fn selected_instrument(&self) -> &str {
        &self.state.selected_instrument
    }

    pub fn coin_balance(&self) -> u32 {
        self.state.coin_balance
    }

    pub fn is_premium(&self) -> bool {
        self.state.premium.is_active()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn lesson(&self) -> &LessonTracker {
        &self.lesson
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    fn refuse<T>(&mut self, refusal: Refusal) -> Result<T, Refusal> {
        tracing::debug!(screen = ?self.state.current_screen, %refusal, "action refused");
        self.frontend.display(&refusal.to_string());
        Err(refusal)
    }

    // Every screen change goes through here exactly once.
    fn commit(&mut self, target: ScreenId) {
        tracing::debug!(from = ?self.state.current_screen, to = ?target, "commit transition");
        self.state.current_screen = target;
        if target != ScreenId::AdInterstitial {
            self.state.pending_screen = None;
        }

        let title = self.registry.title_of(target);
        self.frontend.set_active(target, &title);
        self.frontend.render_coins(self.state.coin_balance);

        match target.lesson_number() {
            Some(n) => {
                self.lesson.begin(n);
                self.frontend.render_progress(0.0);
            }
            None => self.lesson.close(),
        }
    }
}
