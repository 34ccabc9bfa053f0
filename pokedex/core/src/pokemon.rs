use crate::resource;
use crate::species::Species;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Shown for any Pokémon without a sprite of its own.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/items/poke-ball.png";

/// A lookup key. Always lowercase, so different casings share a cache slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();

        if name.is_empty() {
            return None;
        }

        Some(Self(name.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(pub u32);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A Pokémon record, enriched stage by stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(rename = "speciesData", skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution_chain: Option<Vec<Name>>,
}

impl Entity {
    /// Applies a partial update. Whatever the patch leaves out is kept.
    pub fn merge(mut self, patch: Patch) -> Self {
        let Patch {
            summary,
            species,
            evolution_chain,
        } = patch;

        if let Some(summary) = summary {
            self.summary = summary;
        }

        if let Some(species) = species {
            self.species = Some(species);
        }

        if let Some(evolution_chain) = evolution_chain {
            self.evolution_chain = Some(evolution_chain);
        }

        self
    }
}

/// The base fields written by every summary fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Id,
    pub name: String,
    pub pokedex_number: i32,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    pub height: f64,
    pub weight: f64,
    pub types: Vec<String>,
}

impl Summary {
    pub fn from_response(response: Response) -> Self {
        Self {
            id: Id(response.id),
            name: capitalize(&response.name),
            pokedex_number: response.order,
            thumbnail_url: response
                .sprites
                .front_default
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_owned()),
            // The catalog measures in decimetres and hectograms
            height: f64::from(response.height) / 10.0,
            weight: f64::from(response.weight) / 10.0,
            types: response
                .types
                .into_iter()
                .map(|slot| slot.r#type.name)
                .collect(),
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            id: Id::default(),
            name: String::new(),
            pokedex_number: 0,
            thumbnail_url: PLACEHOLDER_THUMBNAIL.to_owned(),
            height: 0.0,
            weight: 0.0,
            types: Vec::new(),
        }
    }
}

/// A partial [`Entity`]. `None` fields are left untouched by [`Entity::merge`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    pub summary: Option<Summary>,
    pub species: Option<Species>,
    pub evolution_chain: Option<Vec<Name>>,
}

impl Patch {
    pub fn summary(summary: Summary) -> Self {
        Self {
            summary: Some(summary),
            ..Self::default()
        }
    }

    pub fn species(species: Species) -> Self {
        Self {
            species: Some(species),
            ..Self::default()
        }
    }

    pub fn evolution_chain(chain: Vec<Name>) -> Self {
        Self {
            evolution_chain: Some(chain),
            ..Self::default()
        }
    }
}

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub order: i32,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub r#type: resource::Named,
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
