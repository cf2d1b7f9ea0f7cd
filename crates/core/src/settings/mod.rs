//! Display and refresh settings threaded explicitly into the engine.

mod settings_model;

pub use settings_model::*;
