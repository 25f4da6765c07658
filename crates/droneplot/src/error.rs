//! Error types for reading and plotting routes.

use std::path::PathBuf;

use thiserror::Error;

use crate::route::Position;

/// Errors that can occur while loading a route file.
#[derive(Debug, Error)]
pub enum RouteFileError {
    /// The file does not exist or cannot be opened.
    #[error("File not found")]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not describe a route.
    #[error("Invalid file format")]
    MalformedContent { reason: String },
}

impl RouteFileError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedContent {
            reason: reason.into(),
        }
    }
}

/// Reasons a route is rejected by the plotter.
///
/// Every variant is reported to the user the same way; the detail only shows
/// up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The starting position is not on the grid.
    #[error("start position {position} is outside the grid")]
    StartOutsideGrid { position: Position },

    /// Move number `step` (1-based) leaves the grid.
    #[error("move {step} leaves the grid at {position}")]
    MoveOutsideGrid { step: usize, position: Position },

    /// Move number `step` (1-based) is not one of N, S, E, W.
    #[error("move {step} has unknown direction {token:?}")]
    UnknownDirection { step: usize, token: String },
}
