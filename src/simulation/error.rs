//! Error types for the simulation library.

use thiserror::Error;

/// Errors raised while building or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The course raster does not have the fixed course dimensions.
    #[error("course image must be {expected_width}x{expected_height}, got {width}x{height}")]
    TrackDimensions {
        /// Width of the supplied raster.
        width: usize,
        /// Height of the supplied raster.
        height: usize,
        /// Required width.
        expected_width: usize,
        /// Required height.
        expected_height: usize,
    },
    /// The RGBA byte buffer does not match the stated dimensions.
    #[error("raster of {width}x{height} needs {expected} RGBA bytes, got {actual}")]
    RasterSize {
        /// Stated width.
        width: usize,
        /// Stated height.
        height: usize,
        /// `width * height * 4`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A weight tensor handed to a controller has the wrong shape.
    #[error("layer {index} expects weights of shape {expected:?}, got {actual:?}")]
    WeightShape {
        /// Layer position.
        index: usize,
        /// Shape of the installed layer.
        expected: (usize, usize),
        /// Shape that was supplied.
        actual: (usize, usize),
    },
    /// The number of weight tensors does not match the number of layers.
    #[error("controller has {expected} layers, got {actual} weight tensors")]
    LayerCount {
        /// Number of layers in the controller.
        expected: usize,
        /// Number of tensors supplied.
        actual: usize,
    },
    /// The senses of a perception system do not fill the controller input.
    #[error("senses produce {actual} inputs, controller expects {expected}")]
    SenseWidth {
        /// Controller input width.
        expected: usize,
        /// Sum of the senses' input sizes.
        actual: usize,
    },
    /// Two parents cannot be bred because their weight tensors differ.
    #[error("cannot cross weights of shape {left:?} with {right:?}")]
    ParentShapes {
        /// Shape of the first parent's tensor.
        left: (usize, usize),
        /// Shape of the second parent's tensor.
        right: (usize, usize),
    },
    /// The track can only be installed once per world.
    #[error("track has already been loaded")]
    TrackAlreadyLoaded,
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised when loading or validating [`super::params::Params`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter has a value the simulation cannot run with.
    #[error("invalid parameter `{name}`: {reason}")]
    Invalid {
        /// Field name.
        name: &'static str,
        /// Human readable constraint.
        reason: &'static str,
    },
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`super::params::Params`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
