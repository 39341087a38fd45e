use thiserror::Error;

use crate::forms::ContactField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("A carousel needs at least one item")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Mohon lengkapi: {}", join_fields(.missing))]
    Incomplete { missing: Vec<ContactField> },
}

impl ContactFormError {
    pub fn missing(&self) -> &[ContactField] {
        match self {
            Self::Incomplete { missing } => missing,
        }
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route is registered for {0:?}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Invalid log filter {0:?}")]
    LogFilter(String),

    #[error("Leptos configuration error: {0}")]
    Leptos(String),
}
