// --- Screen ID ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Instrument,
    Login,
    Home,
    SkillTree,
    LessonGuitar(u8),
    DailyQuests,
    Leaderboard,
    Premium,
    PaymentForPremium,
    AdInterstitial,
}

const LESSON_PREFIX: &str = "LessonGuitar";

impl ScreenId {
    pub fn to_key(self) -> String {
        match self {
            ScreenId::Instrument => "Instrument".to_string(),
            ScreenId::Login => "Login".to_string(),
            ScreenId::Home => "Home".to_string(),
            ScreenId::SkillTree => "SkillTree".to_string(),
            ScreenId::LessonGuitar(n) => format!("{LESSON_PREFIX}{n:02}"),
            ScreenId::DailyQuests => "DailyQuests".to_string(),
            ScreenId::Leaderboard => "Leaderboard".to_string(),
            ScreenId::Premium => "Premium".to_string(),
            ScreenId::PaymentForPremium => "PaymentForPremium".to_string(),
            ScreenId::AdInterstitial => "AdInterstitial".to_string(),
        }
    }

    /// Parses a screen key. Lesson keys need a two-digit number (`LessonGuitar01`);
    /// whether that lesson exists is up to the registry.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Instrument" => Some(ScreenId::Instrument),
            "Login" => Some(ScreenId::Login),
            "Home" => Some(ScreenId::Home),
            "SkillTree" => Some(ScreenId::SkillTree),
            "DailyQuests" => Some(ScreenId::DailyQuests),
            "Leaderboard" => Some(ScreenId::Leaderboard),
            "Premium" => Some(ScreenId::Premium),
            "PaymentForPremium" => Some(ScreenId::PaymentForPremium),
            "AdInterstitial" => Some(ScreenId::AdInterstitial),
            _ => {
                let digits = key.strip_prefix(LESSON_PREFIX)?;
                if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok().map(ScreenId::LessonGuitar)
            }
        }
    }

    pub fn is_lesson(self) -> bool {
        matches!(self, ScreenId::LessonGuitar(_))
    }

    pub fn lesson_number(self) -> Option<u8> {
        match self {
            ScreenId::LessonGuitar(n) => Some(n),
            _ => None,
        }
    }

    /// Screens that sit behind the ad interstitial for non-premium users.
    pub fn is_gated(self) -> bool {
        matches!(
            self,
            ScreenId::SkillTree | ScreenId::DailyQuests | ScreenId::Leaderboard
        )
    }

    fn fixed_title(self) -> Option<&'static str> {
        match self {
            ScreenId::Instrument => Some("Choose Instrument"),
            ScreenId::Login => Some("Login"),
            ScreenId::Home => Some("Home"),
            ScreenId::SkillTree => Some("Skill Tree"),
            ScreenId::LessonGuitar(_) => None,
            ScreenId::DailyQuests => Some("Daily Quests"),
            ScreenId::Leaderboard => Some("Leaderboard"),
            ScreenId::Premium => Some("Premium"),
            ScreenId::PaymentForPremium => Some("Payment"),
            ScreenId::AdInterstitial => None,
        }
    }
}

// --- Registry ---

pub const DEFAULT_APP_TITLE: &str = "TuneQuest";

/// Catalog of the screens this session knows about and how each is titled.
#[derive(Clone, Debug)]
pub struct ScreenRegistry {
    app_title: String,
    lesson_count: u8,
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_APP_TITLE, 1)
    }
}

impl ScreenRegistry {
    pub fn new(app_title: &str, lesson_count: u8) -> Self {
        Self {
            app_title: app_title.to_string(),
            lesson_count,
        }
    }

    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    pub fn is_known(&self, id: ScreenId) -> bool {
        match id {
            ScreenId::LessonGuitar(n) => (1..=self.lesson_count).contains(&n),
            _ => true,
        }
    }

    pub fn resolve(&self, key: &str) -> Option<ScreenId> {
        ScreenId::from_key(key).filter(|id| self.is_known(*id))
    }

    pub fn lessons(&self) -> Vec<ScreenId> {
        (1..=self.lesson_count).map(ScreenId::LessonGuitar).collect()
    }

    pub fn title_of(&self, id: ScreenId) -> String {
        if !self.is_known(id) {
            return self.app_title.clone();
        }
        match id {
            ScreenId::LessonGuitar(n) => format!("Guitar Lesson {n:02}"),
            _ => id
                .fixed_title()
                .map(str::to_string)
                .unwrap_or_else(|| id.to_key()),
        }
    }

    pub fn title_of_key(&self, key: &str) -> String {
        match self.resolve(key) {
            Some(id) => self.title_of(id),
            None => self.app_title.clone(),
        }
    }
}
