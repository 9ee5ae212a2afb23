//! Shared types of the generated CRUD code.

use std::fmt;
use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

{% if db.kind in ["postgres", "postgresql"] %}
/// Database driver the generated repositories are written against.
pub type Db = ::sqlx::Postgres;
{% else %}
/// Database driver the generated repositories are written against.
pub type Db = ::sqlx::MySql;
{% endif %}
pub type Pool = ::sqlx::Pool<Db>;

/// Pool that connects on first use.
pub fn connect_lazy(url: &str) -> Result<Pool, Error> {
    ::sqlx::pool::PoolOptions::<Db>::new()
        .max_connections(5)
        .connect_lazy(url)
        .map_err(Error::from)
}

#[derive(Debug)]
pub enum Error {
    NotFound,
    Database(::sqlx::Error),
    Template(minijinja::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => f.write_str("not found"),
            Error::Database(e) => write!(f, "database error: {e}"),
            Error::Template(e) => write!(f, "template error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound => None,
            Error::Database(e) => Some(e),
            Error::Template(e) => Some(e),
        }
    }
}

impl From<::sqlx::Error> for Error {
    fn from(e: ::sqlx::Error) -> Self {
        match e {
            ::sqlx::Error::RowNotFound => Error::NotFound,
            other => Error::Database(other),
        }
    }
}

impl From<minijinja::Error> for Error {
    fn from(e: minijinja::Error) -> Self {
        Error::Template(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Parse one submitted form value.
///
/// Blank input is %%GRAVE%%Ok(None)%%GRAVE%%; the caller decides whether the field is
/// mandatory.
pub fn parse_input<T: FromStr>(label: &str, raw: &str) -> Result<Option<T>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| format!("{label} is not a valid value"))
}
