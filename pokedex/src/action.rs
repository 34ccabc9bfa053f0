//! Procedures that fetch from the catalog and merge the results into the cache.
//!
//! Each one marks the detail status before its request, then either merges and
//! reports `Success`, or logs and reports `Error`. Failures are also returned,
//! but the cache never keeps anything beyond the status.
use crate::evolution;
use crate::pokemon::{Name, Patch, Summary};
use crate::species::Species;
use crate::state::Update;
use crate::{Error, Result, Session, Status, Store};

use std::fmt;
use tokio::task;

/// Fetches the base fields of a Pokémon, overwriting any previous ones.
pub async fn fetch_summary(store: &Store, session: &Session, name: &Name) -> Result<()> {
    store.dispatch(Update::SetDetailStatus(Status::Pending));

    let result = session.fetch_pokemon(name).await;

    settle(store, name, result, |response| {
        Patch::summary(Summary::from_response(response))
    })
}

/// Enriches a Pokémon with its species metadata.
pub async fn fetch_species(store: &Store, session: &Session, name: &Name) -> Result<()> {
    store.dispatch(Update::SetDetailStatus(Status::Updating));

    if !store.snapshot().entities.contains_key(name) {
        log::warn!("Fetching species of {name} before its summary");
    }

    let result = session.fetch_species(name).await;

    settle(store, name, result, |response| {
        Patch::species(Species::from_response(response))
    })
}

/// Enriches a Pokémon with its evolution line, then refreshes every member of
/// the line in the background.
///
/// The status is set to `Success` as soon as the refreshes are spawned. They
/// keep running if the returned [`Fanout`] is dropped, and never touch the
/// detail status.
pub async fn fetch_evolution_chain(
    store: &Store,
    session: &Session,
    chain: &evolution::Id,
    name: &Name,
) -> Result<Fanout> {
    store.dispatch(Update::SetDetailStatus(Status::Updating));

    let line = match session.fetch_evolution_chain(chain).await {
        Ok(response) => response.chain.flatten(),
        Err(error) => {
            return Err(fail(store, name, error));
        }
    };

    store.dispatch(Update::Upsert {
        name: name.clone(),
        patch: Patch::evolution_chain(line.clone()),
    });

    let tasks = line
        .into_iter()
        .map(|member| task::spawn(refresh(store.clone(), session.clone(), member)))
        .collect();

    store.dispatch(Update::SetDetailStatus(Status::Success));

    Ok(Fanout { tasks })
}

/// Looks up a Pokémon and, once its summary has landed, its species.
///
/// The evolution line is never fetched here.
pub async fn lookup(store: &Store, session: &Session, name: &Name) -> Result<()> {
    fetch_summary(store, session, name).await?;
    fetch_species(store, session, name).await
}

/// The background refreshes spawned by [`fetch_evolution_chain`].
pub struct Fanout {
    tasks: Vec<task::JoinHandle<()>>,
}

impl Fanout {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Waits for every refresh to finish.
    pub async fn join(self) {
        for result in futures_util::future::join_all(self.tasks).await {
            if let Err(error) = result {
                log::error!("Refresh task failed: {error}");
            }
        }
    }
}

impl fmt::Debug for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fanout")
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

async fn refresh(store: Store, session: Session, name: Name) {
    match session.fetch_pokemon(&name).await {
        Ok(response) => store.dispatch(Update::Upsert {
            name,
            patch: Patch::summary(Summary::from_response(response)),
        }),
        Err(error) => {
            log::warn!("Could not refresh {name}: {error}");
        }
    }
}

fn settle<T>(
    store: &Store,
    name: &Name,
    result: Result<T>,
    patch: impl FnOnce(T) -> Patch,
) -> Result<()> {
    match result {
        Ok(response) => {
            store.dispatch(Update::Upsert {
                name: name.clone(),
                patch: patch(response),
            });
            store.dispatch(Update::SetDetailStatus(Status::Success));

            Ok(())
        }
        Err(error) => Err(fail(store, name, error)),
    }
}

fn fail(store: &Store, name: &Name, error: Error) -> Error {
    log::error!("{name}: {error}");

    store.dispatch(Update::SetDetailStatus(Status::Error));

    error
}
