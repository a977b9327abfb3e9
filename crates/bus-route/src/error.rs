use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("stop name must not be empty")]
    EmptyName,

    #[error("stop {name:?} is already on the route")]
    Duplicate { name: String },

    #[error("no stop named {name:?} on the route")]
    NotFound { name: String },

    #[error("cannot remove the last remaining stop")]
    LastStop,

    #[error("a route needs at least one stop")]
    EmptyRoute,

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
