use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Can't search an empty string")]
    EmptyString,
    #[error("Search service answered with HTTP {0}")]
    BadStatus(u16),
}

/// Wraps the non clonable transport errors so `AppError` can be handed to the view
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(not(target_arch = "wasm32"))]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(not(target_arch = "wasm32"))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(not(target_arch = "wasm32"))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
