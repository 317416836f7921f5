use std::cell::Cell;
use std::rc::Rc;

use tunequest::engine::ad_gate::RandomSource;
use tunequest::engine::frontend::{CoinDisplay, NotificationSink, ProgressDisplay, ScreenPresenter};
use tunequest::engine::navigation::{NavigationController, SessionSettings, Transition};
use tunequest::engine::{Refusal, ScreenId};
use tunequest::session::lesson::{GuitarString, LessonPhase};

/// Returns a draw the test can change between navigations and counts how often it was asked.
#[derive(Clone)]
struct ScriptedDraw {
    value: Rc<Cell<f64>>,
    draws: Rc<Cell<usize>>,
}

impl ScriptedDraw {
    fn new(value: f64) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
            draws: Rc::new(Cell::new(0)),
        }
    }
}

impl RandomSource for ScriptedDraw {
    fn next_unit(&mut self) -> f64 {
        self.draws.set(self.draws.get() + 1);
        self.value.get()
    }
}

#[derive(Default)]
struct Log {
    messages: Vec<String>,
    active: Vec<ScreenId>,
    progress: Vec<f64>,
}

impl NotificationSink for Log {
    fn display(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl ScreenPresenter for Log {
    fn set_active(&mut self, screen: ScreenId, _title: &str) {
        self.active.push(screen);
    }
}

impl CoinDisplay for Log {
    fn render_coins(&mut self, _balance: u32) {}
}

impl ProgressDisplay for Log {
    fn render_progress(&mut self, percent: f64) {
        self.progress.push(percent);
    }
}

type Nav = NavigationController<ScriptedDraw, Log>;

fn session(draw: &ScriptedDraw) -> Nav {
    let mut nav = NavigationController::new(SessionSettings::default(), draw.clone(), Log::default());
    nav.boot();
    nav
}

fn signed_in(draw: &ScriptedDraw) -> Nav {
    let mut nav = session(draw);
    nav.confirm_instrument().unwrap();
    nav.go_to(ScreenId::Home).unwrap();
    nav
}

#[test]
fn confirm_then_back_returns_to_instrument() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = session(&draw);
    assert_eq!(nav.coin_balance(), 250);
    assert_eq!(nav.selected_instrument(), "Guitar");

    assert_eq!(nav.confirm_instrument(), Ok(ScreenId::Login));
    assert_eq!(nav.current_screen(), ScreenId::Login);
    assert_eq!(nav.go_back(), Ok(ScreenId::Instrument));
    assert_eq!(nav.current_screen(), ScreenId::Instrument);
}

#[test]
fn home_lock_holds_however_often_it_is_tried() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = session(&draw);
    for _ in 0..3 {
        assert_eq!(nav.go_to(ScreenId::Home), Err(Refusal::HomeLocked));
    }
    assert_eq!(nav.current_screen(), ScreenId::Instrument);
    assert!(
        nav.frontend()
            .messages
            .iter()
            .all(|m| m == "Choose an instrument first !")
    );
    assert_eq!(nav.frontend().messages.len(), 3);
}

#[test]
fn piano_cannot_continue() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = session(&draw);
    nav.select_instrument("Piano");
    assert_eq!(nav.confirm_instrument(), Err(Refusal::InstrumentUnavailable));
    assert_eq!(nav.current_screen(), ScreenId::Instrument);
}

#[test]
fn full_lesson_pays_out_once() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = signed_in(&draw);
    nav.go_to(ScreenId::SkillTree).unwrap();
    nav.go_to(ScreenId::LessonGuitar(1)).unwrap();
    let coins_before = nav.coin_balance();
    let messages_before = nav.frontend().messages.len();

    // Out of order on purpose; only distinctness matters
    let order = [
        GuitarString::G,
        GuitarString::HighE,
        GuitarString::LowE,
        GuitarString::B,
        GuitarString::A,
        GuitarString::D,
    ];
    for s in order {
        nav.hit(s).unwrap();
    }

    assert_eq!(nav.lesson().percent_complete(), 100.0);
    assert_eq!(nav.lesson().phase(), LessonPhase::Complete);
    assert_eq!(nav.coin_balance(), coins_before + 15);

    let new_messages = &nav.frontend().messages[messages_before..];
    let completions: Vec<usize> = new_messages
        .iter()
        .enumerate()
        .filter(|(_, m)| m.starts_with("Nice. Lesson complete"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(completions, vec![5]);
}

#[test]
fn repeated_hit_changes_nothing() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = signed_in(&draw);
    nav.go_to(ScreenId::LessonGuitar(1)).unwrap();
    nav.hit(GuitarString::A).unwrap();
    let percent = nav.lesson().percent_complete();
    let coins = nav.coin_balance();

    assert_eq!(nav.hit(GuitarString::A), Err(Refusal::AlreadyTapped));
    assert_eq!(nav.lesson().percent_complete(), percent);
    assert_eq!(nav.coin_balance(), coins);
    assert_eq!(nav.frontend().messages.last().unwrap(), "Already tapped.");
}

#[test]
fn reset_then_one_hit_is_one_sixth() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = signed_in(&draw);
    nav.go_to(ScreenId::LessonGuitar(1)).unwrap();
    for s in &GuitarString::all()[..4] {
        nav.hit(*s).unwrap();
    }
    nav.reset_lesson();
    nav.hit(GuitarString::B).unwrap();

    let percent = nav.lesson().percent_complete();
    assert!((percent - 16.67).abs() < 0.01);
    assert_eq!(format!("{percent:.0}"), "17");
    assert_eq!(nav.lesson().phase(), LessonPhase::InProgress);
    assert_eq!(nav.frontend().progress.last(), Some(&percent));
}

#[test]
fn premium_skips_the_gate_without_drawing() {
    let draw = ScriptedDraw::new(0.999);
    let mut nav = signed_in(&draw);
    nav.set_premium(true);
    assert_eq!(
        nav.go_to(ScreenId::SkillTree),
        Ok(Transition::Entered(ScreenId::SkillTree))
    );
    assert_eq!(draw.draws.get(), 0);
}

#[test]
fn premium_change_is_seen_by_next_navigation() {
    let draw = ScriptedDraw::new(0.999);
    let mut nav = signed_in(&draw);
    assert!(matches!(
        nav.go_to(ScreenId::Leaderboard),
        Ok(Transition::Interstitial { .. })
    ));
    nav.resolve_ad_dismissal();

    nav.set_premium(true);
    assert_eq!(
        nav.go_to(ScreenId::Leaderboard),
        Ok(Transition::Entered(ScreenId::Leaderboard))
    );
}

#[test]
fn interstitial_defers_then_delivers() {
    let draw = ScriptedDraw::new(0.999);
    let mut nav = signed_in(&draw);

    assert_eq!(
        nav.go_to(ScreenId::DailyQuests),
        Ok(Transition::Interstitial {
            deferred: ScreenId::DailyQuests
        })
    );
    assert_eq!(nav.current_screen(), ScreenId::AdInterstitial);
    assert_eq!(nav.pending_screen(), Some(ScreenId::DailyQuests));

    // Dismissal must not be gated again even though the draw still says "interrupt"
    let draws = draw.draws.get();
    assert_eq!(nav.resolve_ad_dismissal(), ScreenId::DailyQuests);
    assert_eq!(draw.draws.get(), draws);
    assert_eq!(nav.current_screen(), ScreenId::DailyQuests);
    assert_eq!(nav.pending_screen(), None);
}

#[test]
fn gate_outcome_follows_the_draw() {
    let draw = ScriptedDraw::new(0.1);
    let mut nav = signed_in(&draw);
    assert_eq!(
        nav.go_to(ScreenId::SkillTree),
        Ok(Transition::Entered(ScreenId::SkillTree))
    );
    nav.go_back().unwrap();

    draw.value.set(0.9);
    assert!(matches!(
        nav.go_to(ScreenId::SkillTree),
        Ok(Transition::Interstitial { .. })
    ));
}

#[test]
fn back_destinations() {
    let draw = ScriptedDraw::new(0.0);
    let mut nav = signed_in(&draw);

    nav.go_to(ScreenId::LessonGuitar(1)).unwrap();
    assert_eq!(nav.go_back(), Ok(ScreenId::SkillTree));

    nav.go_to(ScreenId::PaymentForPremium).unwrap();
    assert_eq!(nav.go_back(), Ok(ScreenId::Premium));
    assert_eq!(nav.go_back(), Ok(ScreenId::Home));

    for screen in [ScreenId::DailyQuests, ScreenId::Leaderboard, ScreenId::SkillTree] {
        nav.go_to(screen).unwrap();
        assert_eq!(nav.go_back(), Ok(ScreenId::Home));
    }

    assert_eq!(nav.go_back(), Err(Refusal::BackFromHome));
}

#[test]
fn one_active_screen_per_commit() {
    let draw = ScriptedDraw::new(0.999);
    let mut nav = signed_in(&draw);
    let before = nav.frontend().active.len();

    nav.go_to(ScreenId::SkillTree).unwrap();
    nav.resolve_ad_dismissal();
    let _ = nav.go_back();
    let _ = nav.go_back();

    let committed = &nav.frontend().active[before..];
    assert_eq!(
        committed,
        &[ScreenId::AdInterstitial, ScreenId::SkillTree, ScreenId::Home]
    );
    assert_eq!(nav.frontend().active.last(), Some(&nav.current_screen()));
}
