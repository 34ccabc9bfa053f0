use crate::pokemon::{Entity, Name, PLACEHOLDER_THUMBNAIL, Patch};
use crate::status::Status;

use std::collections::BTreeMap;

/// A snapshot of the Pokémon cache.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub entities: BTreeMap<Name, Entity>,
    /// Reserved for list screens.
    pub list_status: Status,
    pub detail_status: Status,
}

/// Every way a [`State`] can change.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    SetListStatus(Status),
    SetDetailStatus(Status),
    Upsert { name: Name, patch: Patch },
}

impl State {
    /// Produces the state that follows `update`, leaving `self` untouched.
    pub fn reduce(&self, update: Update) -> Self {
        match update {
            Update::SetListStatus(status) => Self {
                list_status: status,
                ..self.clone()
            },
            Update::SetDetailStatus(status) => Self {
                detail_status: status,
                ..self.clone()
            },
            Update::Upsert { name, patch } => {
                let mut entities = self.entities.clone();
                let entity = entities.remove(&name).unwrap_or_default().merge(patch);

                let _ = entities.insert(name, entity);

                Self {
                    entities,
                    ..self.clone()
                }
            }
        }
    }

    pub fn get(&self, name: &Name) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// The thumbnail of a cached Pokémon, or the placeholder.
    pub fn thumbnail(&self, name: &Name) -> &str {
        self.entities
            .get(name)
            .map(|entity| entity.summary.thumbnail_url.as_str())
            .unwrap_or(PLACEHOLDER_THUMBNAIL)
    }
}
