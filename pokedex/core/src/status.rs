use std::fmt;

/// The fetch state of a screen.
///
/// A fresh lookup goes `Idle -> Pending -> {Success, Error}`. From `Success`,
/// enrichment goes `Updating -> {Success, Error}`, as many times as needed.
/// `Error` is only left by starting a brand new lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
    Updating,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "IDLE",
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Updating => "UPDATING",
        })
    }
}
