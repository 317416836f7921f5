use std::collections::HashSet;

use crate::engine::refusal::Refusal;

pub const TOTAL_TARGETS: usize = 6;
pub const DEFAULT_LESSON_REWARD: u32 = 15;

// --- Targets ---

/// The six strings a guitar lesson asks the player to tap once each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuitarString {
    LowE,
    A,
    D,
    G,
    B,
    HighE,
}

impl GuitarString {
    pub fn all() -> &'static [GuitarString] {
        &[
            GuitarString::LowE,
            GuitarString::A,
            GuitarString::D,
            GuitarString::G,
            GuitarString::B,
            GuitarString::HighE,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            GuitarString::LowE => "E (6th)",
            GuitarString::A => "A",
            GuitarString::D => "D",
            GuitarString::G => "G",
            GuitarString::B => "B",
            GuitarString::HighE => "e (1st)",
        }
    }

    /// 1-based position, low E first.
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

// --- Progress ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonPhase {
    Empty,
    InProgress,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitOutcome {
    Progress { percent: f64 },
    Completed { percent: f64, reward: u32 },
}

impl HitOutcome {
    pub fn percent(self) -> f64 {
        match self {
            HitOutcome::Progress { percent } | HitOutcome::Completed { percent, .. } => percent,
        }
    }
}

pub struct LessonTracker {
    lesson: Option<u8>,
    hit: HashSet<GuitarString>,
    reward: u32,
}

impl Default for LessonTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LESSON_REWARD)
    }
}

impl LessonTracker {
    pub fn new(reward: u32) -> Self {
        Self {
            lesson: None,
            hit: HashSet::new(),
            reward,
        }
    }

    /// Starts a fresh session for `lesson`, discarding any previous one.
    pub fn begin(&mut self, lesson: u8) {
        self.lesson = Some(lesson);
        self.reset();
    }

    pub fn close(&mut self) {
        self.lesson = None;
        self.hit.clear();
    }

    pub fn reset(&mut self) {
        self.hit.clear();
    }

    pub fn active_lesson(&self) -> Option<u8> {
        self.lesson
    }

    pub fn hit(&mut self, target: GuitarString) -> Result<HitOutcome, Refusal> {
        if self.lesson.is_none() {
            return Err(Refusal::NoActiveLesson);
        }
        if !self.hit.insert(target) {
            return Err(Refusal::AlreadyTapped);
        }

        let percent = self.percent_complete();
        if self.hit.len() == TOTAL_TARGETS {
            Ok(HitOutcome::Completed {
                percent,
                reward: self.reward,
            })
        } else {
            Ok(HitOutcome::Progress { percent })
        }
    }

    pub fn is_hit(&self, target: GuitarString) -> bool {
        self.hit.contains(&target)
    }

    pub fn hit_count(&self) -> usize {
        self.hit.len()
    }

    pub fn percent_complete(&self) -> f64 {
        (self.hit.len() as f64 / TOTAL_TARGETS as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn phase(&self) -> LessonPhase {
        match self.hit.len() {
            0 => LessonPhase::Empty,
            n if n >= TOTAL_TARGETS => LessonPhase::Complete,
            _ => LessonPhase::InProgress,
        }
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }
}
