//! Engine error taxonomy.
//!
//! Every validation failure surfaces here instead of terminating the process.
//! A failed construction never leaves partial state behind (no half-registered
//! entity, no leaked native surface).

use std::fmt;

use crate::entity::EntityId;

/// RGBA channel selector used in color validation errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Engine-level errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A color channel was given a value outside `0..=255`.
    #[error("{channel} channel value {value} is out of range (max 255)")]
    InvalidChannel { channel: Channel, value: u32 },

    /// The identifier is already registered in the scene.
    #[error("entity id `{0}` is already registered in this scene")]
    DuplicateId(EntityId),

    /// Entity coordinates exceed the scene dimensions.
    #[error("entity `{id}` at ({x}, {y}) lies outside the {width}x{height} scene")]
    OutOfBounds {
        id: EntityId,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A scene or window was requested with a zero dimension.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The native window or its drawing surface could not be created.
    #[error("failed to create display surface: {0}")]
    SurfaceCreation(String),

    /// A frame could not be presented.
    #[error("failed to present frame: {0}")]
    Present(String),

    /// A font file could not be read or parsed.
    #[error("failed to load font `{path}`: {reason}")]
    FontLoad { path: String, reason: String },

    /// Process-wide initialization failed or was attempted twice.
    #[error("engine initialization failed: {0}")]
    Init(String),
}

/// Result alias used throughout the engine.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = EngineError::InvalidChannel { channel: Channel::Alpha, value: 300 };
        assert_eq!(err.to_string(), "alpha channel value 300 is out of range (max 255)");

        let err = EngineError::OutOfBounds {
            id: EntityId::from("player"),
            x: 900,
            y: 10,
            width: 800,
            height: 600,
        };
        assert_eq!(
            err.to_string(),
            "entity `player` at (900, 10) lies outside the 800x600 scene"
        );
    }
}
