//! Text rendering of a catalog record as a two-sided card
//!
//! The front shows identity (number, name, sprite, types, size); the back shows
//! base stats as bars. Flipping is purely visual and never touches the caches.

use std::sync::Arc;

use crate::config::DisplayConfig;
use crate::models::PokemonRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// A record shown on a card; new cards always start on the front
#[derive(Debug, Clone)]
pub struct Card {
    record: Arc<PokemonRecord>,
    face: CardFace,
}

impl Card {
    pub fn new(record: Arc<PokemonRecord>) -> Self {
        Self {
            record,
            face: CardFace::Front,
        }
    }

    pub fn record(&self) -> &PokemonRecord {
        &self.record
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn flip(&mut self) -> CardFace {
        self.face = self.face.flipped();
        self.face
    }
}

/// `#025` style dex number
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Tenths of a unit to one decimal place (`69` -> `"6.9"`)
pub fn format_tenths(value: u32) -> String {
    format!("{:.1}", f64::from(value) / 10.0)
}

/// Display label for a catalog stat name; unknown stats pass through
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Attack",
        "special-defense" => "Sp. Defense",
        "speed" => "Speed",
        other => other,
    }
}

/// Bar fill percentage, capped at 100
pub fn stat_percentage(value: u32, ceiling: u32) -> f64 {
    if ceiling == 0 {
        return 100.0;
    }
    (f64::from(value) / f64::from(ceiling) * 100.0).min(100.0)
}

pub struct CardRenderer {
    config: DisplayConfig,
}

impl CardRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, card: &Card) -> String {
        match card.face() {
            CardFace::Front => self.render_front(card.record()),
            CardFace::Back => self.render_back(card.record()),
        }
    }

    pub fn render_front(&self, record: &PokemonRecord) -> String {
        let sprite = record
            .sprite_url()
            .unwrap_or(self.config.placeholder_sprite.as_str());
        let badges: Vec<String> = record.type_names().map(|t| format!("[{t}]")).collect();

        [
            format!("{}  {}", format_dex_number(record.id), record.name),
            format!("Sprite: {sprite}"),
            format!("Types:  {}", badges.join(" ")),
            format!("Weight: {} kg", format_tenths(record.weight)),
            format!("Height: {} m", format_tenths(record.height)),
        ]
        .join("\n")
    }

    pub fn render_back(&self, record: &PokemonRecord) -> String {
        let labels: Vec<(&str, u32)> = record
            .base_stats()
            .map(|(name, value)| (stat_label(name), value))
            .collect();
        let label_width = labels.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

        let mut lines = vec![format!(
            "{}  {} - base stats",
            format_dex_number(record.id),
            record.name
        )];
        for (label, value) in &labels {
            lines.push(format!(
                "{label:<label_width$} {value:>3} {}",
                self.stat_bar(*value)
            ));
        }
        lines.join("\n")
    }

    fn stat_bar(&self, value: u32) -> String {
        let width = self.config.stat_bar_width;
        let percentage = stat_percentage(value, self.config.stat_ceiling);
        let filled = ((percentage / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}
