/**
 * Easter Egg Catalogue
 *
 * Egg definitions and their one-way unlock flags for the current UI session.
 */

use std::collections::BTreeMap;

/// Key of the logo triple-click egg
pub const TRIPLE_CLICK_EGG: &str = "triple_click";

/// A one-way unlockable achievement tied to a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEgg {
    pub id: String,
    pub name: String,
    pub description: String,
    /// UI element or gesture that fires this egg
    pub trigger: String,
    pub icon: String,
    unlocked: bool,
}

impl EasterEgg {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        trigger: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            trigger: trigger.into(),
            icon: icon.into(),
            unlocked: false,
        }
    }

    /// The logo triple-click egg
    pub fn triple_click() -> Self {
        Self::new(
            TRIPLE_CLICK_EGG,
            "Triple Threat",
            "You clicked the logo three times in a row. Special mode is on!",
            "logo",
            "🎯",
        )
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// Result of an unlock attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    NewlyUnlocked,
    AlreadyUnlocked,
    Unknown,
}

/// Session-scoped set of egg definitions, one per id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EggCatalog {
    eggs: BTreeMap<String, EasterEgg>,
}

impl Default for EggCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(EasterEgg::triple_click());
        catalog
    }
}

impl EggCatalog {
    pub fn empty() -> Self {
        Self { eggs: BTreeMap::new() }
    }

    /// Add a definition. Returns false and keeps the existing one if the id is taken.
    pub fn insert(&mut self, egg: EasterEgg) -> bool {
        if self.eggs.contains_key(&egg.id) {
            return false;
        }
        self.eggs.insert(egg.id.clone(), egg);
        true
    }

    pub fn get(&self, id: &str) -> Option<&EasterEgg> {
        self.eggs.get(id)
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.eggs.get(id).is_some_and(EasterEgg::is_unlocked)
    }

    /// Mark an egg unlocked. Unlocking never reverts.
    pub fn unlock(&mut self, id: &str) -> UnlockOutcome {
        match self.eggs.get_mut(id) {
            None => UnlockOutcome::Unknown,
            Some(egg) if egg.unlocked => UnlockOutcome::AlreadyUnlocked,
            Some(egg) => {
                egg.unlocked = true;
                UnlockOutcome::NewlyUnlocked
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EasterEgg> {
        self.eggs.values()
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &EasterEgg> {
        self.iter().filter(|egg| egg.unlocked)
    }
}
