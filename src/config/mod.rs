//! Configuration loading
//!
//! Two layers: the tool's own [`Settings`] (defaults < settings file < env),
//! and the application config text found by walking the [`ConfigLoader`] tiers
//! (primary path > build-tree path > embedded default). Optional data files
//! such as the README are looked up through runfiles only.

pub mod loader;
pub mod resources;
pub mod runfiles;
pub mod settings;

pub use loader::{ConfigLoader, ConfigSource, DEFAULT_CONFIG};
pub use resources::load_readme;
pub use runfiles::Runfiles;
pub use settings::{ResolutionStrategy, Settings};
