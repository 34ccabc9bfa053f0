pub mod action;
pub mod session;
pub mod store;

mod error;

pub use pokedex_core::{evolution, pokemon, species, state, status};
pub use pokedex_core::{Entity, GenderRate, Name, PLACEHOLDER_THUMBNAIL, Species, State, Status};

pub use action::Fanout;
pub use error::Error;
pub use session::Session;
pub use store::Store;

pub type Result<T, E = Error> = std::result::Result<T, E>;
