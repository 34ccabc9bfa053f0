use crate::evolution;
use crate::resource;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Species metadata, present once the second fetch stage has landed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub gender_rate: GenderRate,
    /// Percentage, from 0 to 100.
    pub capture_rate: u8,
    /// The English genus, if the catalog has one.
    pub genus: Option<String>,
    #[serde(rename = "evolutionLineId")]
    pub evolution_line: Option<evolution::Id>,
}

impl Species {
    pub fn from_response(response: Response) -> Self {
        let genus = response
            .genera
            .into_iter()
            .find(|genus| genus.language.name == "en")
            .map(|genus| genus.genus);

        if genus.is_none() {
            log::warn!("No English genus available for {}", response.name);
        }

        let evolution_line = response
            .evolution_chain
            .as_ref()
            .and_then(|chain| evolution::Id::from_url(&chain.url));

        if evolution_line.is_none() {
            log::warn!("No evolution line available for {}", response.name);
        }

        Self {
            gender_rate: GenderRate::from_eighths(response.gender_rate),
            capture_rate: percentage(response.capture_rate, 255),
            genus,
            evolution_line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenderRate {
    Genderless,
    /// Percentage of females, from 0 to 100.
    Female(u8),
}

impl GenderRate {
    /// The catalog counts females in eighths, with `-1` for genderless species.
    pub fn from_eighths(eighths: i32) -> Self {
        match u32::try_from(eighths) {
            Ok(eighths) => Self::Female(percentage(eighths, 8)),
            Err(_) => Self::Genderless,
        }
    }
}

impl fmt::Display for GenderRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genderless => f.write_str("Genderless"),
            Self::Female(percentage) => write!(f, "{percentage}% female"),
        }
    }
}

/// `GET /pokemon-species/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub name: String,
    pub capture_rate: u32,
    pub gender_rate: i32,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub evolution_chain: Option<resource::Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: resource::Named,
}

fn percentage(value: u32, total: u32) -> u8 {
    (f64::from(value) / f64::from(total) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8
}
