use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    distribution::normal::Normal,
    error::{Error, Result},
    generator::Generator,
};

pub const DEFAULT_COUNT: usize = 10;

/// Settings for a Normal generator, every field optional.
///
/// Unset fields fall back to Normal(0, 1), an entropy seed, and
/// [`DEFAULT_COUNT`] samples.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub seed: Option<u64>,
    pub count: Option<usize>,
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Fields set in `overrides` win over fields set in `self`.
    pub fn merge(self, overrides: GeneratorConfig) -> Self {
        Self {
            mean: overrides.mean.or(self.mean),
            std_dev: overrides.std_dev.or(self.std_dev),
            seed: overrides.seed.or(self.seed),
            count: overrides.count.or(self.count),
        }
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    pub fn normal(&self) -> Result<Normal> {
        let defaults = Normal::default();
        Normal::new(
            self.mean.unwrap_or(defaults.mean()),
            self.std_dev.unwrap_or(defaults.std_dev()),
        )
    }

    pub fn build_generator(&self) -> Result<Generator<Normal>> {
        let normal = self.normal()?;
        Ok(match self.seed {
            Some(seed) => Generator::seeded_with(seed, normal),
            None => Generator::with_distribution(normal),
        })
    }
}
