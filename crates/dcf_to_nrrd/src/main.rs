//! Polymender DCF to NRRD converter.
//!
//! Decodes the sign octree of a `.dcf` file into a dense point grid and writes
//! it as a text NRRD volume (1 = inside, 0 = outside).
//!
//! ```text
//! dcf_to_nrrd temp/cube01/cube01-dc-3-0.8.dcf 3
//! ```

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use dcf_volume::{decode, nrrd, DecodeConfig, DecodedVolume};

/// Polymender DCF to NRRD converter.
#[derive(Parser, Debug)]
#[command(name = "dcf_to_nrrd")]
#[command(about = "Converts Polymender DCF octree files into text NRRD volumes")]
struct Args {
	/// Path to the input .dcf file.
	input: PathBuf,

	/// Octree depth the DCF file was generated with.
	depth: u32,

	/// Output NRRD path (default: input path with a .nrrd extension).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Also write the header-less value dump (.txt) next to the output.
	#[arg(long)]
	txt: bool,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(io::stderr)
		.init();

	let args = Args::parse();

	let config = match &args.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};
	let output = args
		.output
		.clone()
		.unwrap_or_else(|| args.input.with_extension("nrrd"));

	info!(input = %args.input.display(), depth = args.depth, "loading dcf");
	let bytes = std::fs::read(&args.input)
		.with_context(|| format!("Failed to read input: {}", args.input.display()))?;

	let volume = decode_bytes(&bytes, args.depth, &config)?;
	info!(
		points = volume.grid.len(),
		cells = %volume.grid.cell_dims(),
		nodes = volume.stats.total_nodes(),
		"decoded grid"
	);

	write_file(&output, |w| nrrd::write_nrrd(&volume.grid, w))?;
	info!(path = %output.display(), "wrote nrrd");

	if args.txt || config.write_txt {
		let txt = output.with_extension("txt");
		write_file(&txt, |w| nrrd::write_values(&volume.grid, w))?;
		info!(path = %txt.display(), "wrote value dump");
	}

	Ok(())
}

/// Decode a DCF buffer with the root at `depth`.
fn decode_bytes(bytes: &[u8], depth: u32, config: &Config) -> Result<DecodedVolume> {
	let decode_config = DecodeConfig {
		depth,
		sign_block_len: config.sign_block_len,
	};
	decode(bytes, &decode_config)
		.with_context(|| format!("Failed to decode DCF octree at depth {}", depth))
}

/// Create `path` and stream output into it through a buffered writer.
fn write_file(
	path: &Path,
	write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<()> {
	let file = File::create(path)
		.with_context(|| format!("Failed to create output: {}", path.display()))?;
	let mut writer = BufWriter::new(file);
	write(&mut writer).with_context(|| format!("Failed to write: {}", path.display()))?;
	writer
		.flush()
		.with_context(|| format!("Failed to flush: {}", path.display()))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn uniform_file(sign: i16) -> Vec<u8> {
		let mut bytes = b"multisign\0".to_vec();
		for _ in 0..3 {
			bytes.extend_from_slice(&1i32.to_le_bytes());
		}
		bytes.extend_from_slice(&1i32.to_le_bytes());
		bytes.extend_from_slice(&sign.to_le_bytes());
		bytes
	}

	#[test]
	fn test_args_positional() {
		let args = Args::try_parse_from(["dcf_to_nrrd", "cube01-dc-3-0.8.dcf", "3"]).unwrap();
		assert_eq!(args.input, PathBuf::from("cube01-dc-3-0.8.dcf"));
		assert_eq!(args.depth, 3);
		assert!(args.output.is_none());
		assert!(!args.txt);
	}

	#[test]
	fn test_args_require_depth() {
		assert!(Args::try_parse_from(["dcf_to_nrrd", "in.dcf"]).is_err());
		assert!(Args::try_parse_from(["dcf_to_nrrd", "in.dcf", "-1"]).is_err());
	}

	#[test]
	fn test_decode_and_render() {
		let volume = decode_bytes(&uniform_file(0), 0, &Config::default()).unwrap();

		let mut out = Vec::new();
		nrrd::write_nrrd(&volume.grid, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.starts_with("NRRD0001\n"));
		assert!(text.contains("sizes: 2 2 2\n"));
		assert!(text.ends_with("\n\n1 1 1 1 1 1 1 1\n"));
	}

	#[test]
	fn test_decode_error_has_context() {
		let mut bytes = uniform_file(0);
		bytes.pop();
		let err = decode_bytes(&bytes, 0, &Config::default()).unwrap_err();

		assert_eq!(err.to_string(), "Failed to decode DCF octree at depth 0");
		assert!(err.root_cause().to_string().starts_with("truncated input"));
	}
}
