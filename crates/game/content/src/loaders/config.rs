//! Magic configuration loader.

use std::path::Path;

use magic_core::MagicConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for magic configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing MagicConfig
    pub fn load(path: &Path) -> LoadResult<MagicConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text. Missing fields take their defaults.
    pub fn parse(content: &str) -> LoadResult<MagicConfig> {
        let config: MagicConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use magic_core::MagnitudeSettings;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), MagicConfig::default());
    }

    #[test]
    fn reads_magnitude_table() {
        let config = ConfigLoader::parse(
            r#"
            rng_seed = 77

            [default_magnitude]
            base_min = 2
            base_max = 8
            plus_min = 1
            plus_max = 3
            plus_per_level = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.rng_seed, 77);
        assert_eq!(
            config.default_magnitude,
            MagnitudeSettings::new(2, 8, 1, 3, 2)
        );
    }
}
