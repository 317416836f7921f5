/// Entitlement flag that switches the ad interstitial off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PremiumStatus {
    active: bool,
}

impl PremiumStatus {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(self) -> bool {
        self.active
    }

    /// Returns true if the flag actually changed.
    pub fn set(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    pub fn message(self) -> &'static str {
        if self.active {
            "Premium enabled !"
        } else {
            "Premium removed."
        }
    }
}
