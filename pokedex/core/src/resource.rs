use serde::Deserialize;

/// A named reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Named {
    pub name: String,
}

/// An unnamed reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub url: String,
}
