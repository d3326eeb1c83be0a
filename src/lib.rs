pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;

pub use config::GeneratorConfig;
pub use distribution::{normal::Normal, Distribution};
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorBuilder};
