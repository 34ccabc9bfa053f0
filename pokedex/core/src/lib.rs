pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod state;
pub mod status;

pub use pokemon::{Entity, Name, PLACEHOLDER_THUMBNAIL, Patch, Summary};
pub use species::{GenderRate, Species};
pub use state::{State, Update};
pub use status::Status;
