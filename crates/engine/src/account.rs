//! Score/level/lines counters mirrored into the HUD.

use crate::core::hud::{self, Hud};

/// A counter of the account; each one has a HUD element of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Score,
    Level,
    Lines,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Score, Field::Level, Field::Lines];

    /// Id of the HUD element displaying this field
    pub fn id(&self) -> &'static str {
        match self {
            Field::Score => hud::SCORE,
            Field::Level => hud::LEVEL,
            Field::Lines => hud::LINES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    score: u32,
    level: u32,
    lines: u32,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Score => self.score,
            Field::Level => self.level,
            Field::Lines => self.lines,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Store `value` and write it into the field's HUD element, if the HUD has one.
    pub fn set(&mut self, field: Field, value: u32, hud: &mut Hud) {
        match field {
            Field::Score => self.score = value,
            Field::Level => self.level = value,
            Field::Lines => self.lines = value,
        }
        hud.set_text(field.id(), value.to_string());
    }

    pub fn add(&mut self, field: Field, delta: u32, hud: &mut Hud) {
        let value = self.get(field).saturating_add(delta);
        self.set(field, value, hud);
    }

    /// Zero every field.
    pub fn reset(&mut self, hud: &mut Hud) {
        for field in Field::ALL {
            self.set(field, 0, hud);
        }
    }
}
