use thiserror::Error;

use crate::maze::Juncture;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Wall and weight queries only make sense between grid neighbours.
    #[error("junctures {0} and {1} are not adjacent")]
    NotAdjacent(Juncture, Juncture),
    #[error("juncture {juncture} lies outside the {width}x{height} maze")]
    OutOfBounds {
        juncture: Juncture,
        width: u16,
        height: u16,
    },
    /// An edge endpoint that was never added to the graph.
    #[error("vertex {0} was never added to the graph")]
    UnknownVertex(String),
    #[error("invalid maze layout: {0}")]
    InvalidLayout(String),
}

impl Error {
    /// Whether the error was caused by the caller passing arguments the
    /// operation is not defined for.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NotAdjacent(..) | Error::OutOfBounds { .. } | Error::UnknownVertex(_)
        )
    }
}
