//! Rule-based color psychology: hue picks the trait row, saturation and
//! lightness pick energy and formality. Purely heuristic.

use serde::{Deserialize, Serialize};

use crate::color::conversion::rgb_to_hsl;

/// Below this saturation a color is treated as a neutral gray.
const NEUTRAL_SATURATION: f64 = 10.0;

/// The seven hue buckets of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl HueFamily {
    /// Bucket for a hue in degrees. Red wraps around 0°.
    pub fn from_hue(hue: f64) -> Self {
        match hue.rem_euclid(360.0) {
            h if h < 15.0 => Self::Red,
            h if h < 45.0 => Self::Orange,
            h if h < 75.0 => Self::Yellow,
            h if h < 165.0 => Self::Green,
            h if h < 195.0 => Self::Cyan,
            h if h < 255.0 => Self::Blue,
            h if h < 345.0 => Self::Purple,
            _ => Self::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Casual,
    Balanced,
    Formal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psychology {
    /// `None` for near-grays.
    pub hue_family: Option<HueFamily>,
    pub dominant_trait: String,
    pub emotions: Vec<String>,
    pub associations: Vec<String>,
    pub energy_level: EnergyLevel,
    pub formality: Formality,
}

struct TraitRow {
    dominant: &'static str,
    emotions: [&'static str; 3],
    associations: [&'static str; 3],
}

const NEUTRAL_ROW: TraitRow = TraitRow {
    dominant: "neutral",
    emotions: ["balance", "calm", "restraint"],
    associations: ["simplicity", "sophistication", "timelessness"],
};

const fn trait_row(family: HueFamily) -> TraitRow {
    match family {
        HueFamily::Red => TraitRow {
            dominant: "passionate",
            emotions: ["excitement", "love", "urgency"],
            associations: ["energy", "danger", "strength"],
        },
        HueFamily::Orange => TraitRow {
            dominant: "enthusiastic",
            emotions: ["enthusiasm", "warmth", "creativity"],
            associations: ["autumn", "playfulness", "affordability"],
        },
        HueFamily::Yellow => TraitRow {
            dominant: "optimistic",
            emotions: ["happiness", "optimism", "cheer"],
            associations: ["sunshine", "caution", "intellect"],
        },
        HueFamily::Green => TraitRow {
            dominant: "balanced",
            emotions: ["calm", "renewal", "harmony"],
            associations: ["nature", "growth", "health"],
        },
        HueFamily::Cyan => TraitRow {
            dominant: "refreshing",
            emotions: ["clarity", "tranquility", "openness"],
            associations: ["water", "technology", "freshness"],
        },
        HueFamily::Blue => TraitRow {
            dominant: "trustworthy",
            emotions: ["trust", "serenity", "confidence"],
            associations: ["sky", "stability", "professionalism"],
        },
        HueFamily::Purple => TraitRow {
            dominant: "creative",
            emotions: ["mystery", "imagination", "luxury"],
            associations: ["royalty", "spirituality", "wisdom"],
        },
    }
}

/// Psychological profile of an 8-bit color.
pub fn classify(r: u8, g: u8, b: u8) -> Psychology {
    let hsl = rgb_to_hsl(r, g, b);
    let hue_family = (hsl.s >= NEUTRAL_SATURATION).then(|| HueFamily::from_hue(hsl.h));
    let row = hue_family.map_or(NEUTRAL_ROW, trait_row);

    Psychology {
        hue_family,
        dominant_trait: row.dominant.to_string(),
        emotions: row.emotions.map(String::from).to_vec(),
        associations: row.associations.map(String::from).to_vec(),
        energy_level: energy_level(hsl.s, hsl.l),
        formality: formality(hsl.s, hsl.l),
    }
}

fn energy_level(saturation: f64, lightness: f64) -> EnergyLevel {
    if saturation >= 60.0 && (25.0..=75.0).contains(&lightness) {
        EnergyLevel::High
    } else if saturation < 30.0 || !(20.0..=85.0).contains(&lightness) {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    }
}

fn formality(saturation: f64, lightness: f64) -> Formality {
    if saturation < 25.0 || lightness < 25.0 {
        Formality::Formal
    } else if saturation >= 65.0 && lightness >= 45.0 {
        Formality::Casual
    } else {
        Formality::Balanced
    }
}
