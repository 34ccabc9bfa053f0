use crate::pokedex::{Entity, Name, State, Status};

use std::fmt;

/// What the detail screen shows for a given state.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Idle,
    Loading,
    Found { entity: &'a Entity, state: &'a State },
    NotFound { query: &'a str },
}

impl<'a> View<'a> {
    pub fn new(state: &'a State, name: &Name, query: &'a str) -> Self {
        match state.detail_status {
            Status::Idle => Self::Idle,
            Status::Pending => Self::Loading,
            Status::Success | Status::Updating => match state.get(name) {
                Some(entity) => Self::Found { entity, state },
                None => Self::NotFound { query },
            },
            Status::Error => Self::NotFound { query },
        }
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Loading => f.write_str("Loading..."),
            Self::NotFound { query } => {
                write!(f, "No Pokémon was found under the name: {query}")
            }
            Self::Found { entity, state } => {
                let summary = &entity.summary;

                writeln!(f, "#{}: {}", summary.id, summary.name)?;
                writeln!(f, "Type(s): {}", summary.types.join(", "))?;
                writeln!(f, "Height: {} m", summary.height)?;
                writeln!(f, "Weight: {} kg", summary.weight)?;
                write!(f, "Thumbnail: {}", summary.thumbnail_url)?;

                if let Some(species) = &entity.species {
                    writeln!(f)?;
                    writeln!(f, "Species data:")?;
                    writeln!(f, "  Gender: {}", species.gender_rate)?;
                    writeln!(f, "  Capture rate: {}%", species.capture_rate)?;
                    write!(
                        f,
                        "  Genus: {}",
                        species.genus.as_deref().unwrap_or("Unknown")
                    )?;
                }

                if let Some(chain) = &entity.evolution_chain {
                    writeln!(f)?;
                    write!(f, "Evolution line:")?;

                    for member in chain {
                        let label = state
                            .get(member)
                            .map(|entity| entity.summary.name.as_str())
                            .filter(|name| !name.is_empty())
                            .unwrap_or(member.as_str());

                        write!(f, "\n  {label} ({})", state.thumbnail(member))?;
                    }
                }

                Ok(())
            }
        }
    }
}
