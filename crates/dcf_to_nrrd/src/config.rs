//! Optional TOML configuration for the converter.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use dcf_volume::constants::SIGN_BLOCK_LEN;

/// Converter settings. Every key is optional.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Bytes skipped before the grid dimensions.
	#[serde(default = "default_sign_block_len")]
	pub sign_block_len: usize,
	/// Also write the header-less value dump next to the NRRD file.
	#[serde(default)]
	pub write_txt: bool,
}

fn default_sign_block_len() -> usize {
	SIGN_BLOCK_LEN
}

impl Default for Config {
	fn default() -> Self {
		Self {
			sign_block_len: default_sign_block_len(),
			write_txt: false,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.sign_block_len > 1024 {
			anyhow::bail!(
				"sign_block_len must be at most 1024 bytes, got {}",
				config.sign_block_len
			);
		}

		Ok(config)
	}
}
