mod config;
mod error;
mod materialize;
mod script;

pub use config::Config;
pub use config::DEFAULT_ASSET;
pub use config::DEFAULT_MIN_SIZE;
pub use error::Error;
pub use error::Result;
pub use materialize::Artifact;
pub use materialize::materialize;
pub use script::Script;
