use super::{cfgerr, error_context, Error, RangeMode};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// First code point of the CJK Unified Ideographs block
pub const CJK_MIN: u32 = 0x4e00;
/// Last code point sampled by default (not the end of the block, which is 0x9fff)
pub const CJK_MAX: u32 = 0x9fa5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_code_point: u32,
    pub max_code_point: u32,
    pub range_mode: RangeMode,
    pub seed: Option<u64>,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            min_code_point: CJK_MIN,
            max_code_point: CJK_MAX,
            range_mode: RangeMode::default(),
            seed: None,
        }
    }
}
impl GeneratorConfig {
    /// Location of the user configuration file, relative to the home directory
    pub fn default_path(home_dir: &Path) -> PathBuf {
        home_dir
            .join(".config")
            .join("randtext")
            .join("config.toml")
    }

    /// Check that both bounds are scalar values and that they are in order
    pub fn validate(&self) -> Result<(), Error> {
        let (min, max) = (self.min_code_point, self.max_code_point);
        if min > max || char::from_u32(min).is_none() || char::from_u32(max).is_none() {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<GeneratorConfig, Error> {
        let errctx = error_context(format!("could not load config at path {}", path.display()));
        if !path.is_file() {
            return Err(cfgerr(errctx("open file"))("file doesn't exist"));
        }
        let serialized =
            std::fs::read_to_string(path).map_err(cfgerr(errctx("read content to string")))?;
        let config: GeneratorConfig =
            toml::from_str(&serialized).map_err(cfgerr(errctx("deserialize content from toml")))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config as toml, creating the parent directories if needed
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let errctx = error_context(format!("could not save config at path {}", path.display()));
        let serialized =
            toml::to_string(self).map_err(cfgerr(errctx("serialize content to toml")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(cfgerr(errctx("ensure parent directory")))?;
        }
        std::fs::write(path, serialized).map_err(cfgerr(errctx("write content to file")))
    }
}
