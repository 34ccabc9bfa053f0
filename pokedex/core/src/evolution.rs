use crate::pokemon::Name;
use crate::resource;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an evolution line in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn parse(id: &str) -> Option<Self> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(Self(id.to_owned()))
    }

    /// Extracts the id from a chain resource URL shaped like `.../evolution-chain/{id}/`.
    pub fn from_url(url: &str) -> Option<Self> {
        Self::parse(url.trim_end_matches('/').rsplit('/').next()?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub chain: Link,
}

/// A node of the evolution tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub species: resource::Named,
    #[serde(default)]
    pub evolves_to: Vec<Link>,
}

impl Link {
    /// Walks the tree from this node, always following the first evolution.
    ///
    /// Branches are discarded: a species with alternate evolutions only keeps
    /// the one the catalog lists first.
    pub fn flatten(&self) -> Vec<Name> {
        let mut line = Vec::new();
        let mut link = Some(self);

        while let Some(current) = link {
            if let Some(name) = Name::parse(&current.species.name) {
                line.push(name);
            }

            link = current.evolves_to.first();
        }

        line
    }
}
