use std::{
	env,
	fs::{
		read,
		write
	},
	io
};

use thiserror::Error;
use tracing::{
	info,
	warn
};
use tracing_subscriber::EnvFilter;

use restx::{
	convert,
	ResourceKind,
	TranscodeError
};

#[derive(Debug, Error)]
enum CliError {
	#[error("Usage: restx <type-tag> <input> <output>")]
	Usage,
	#[error("Invalid type tag {0:?}")]
	Tag(String),
	#[error("I/O error")]
	IO(#[from] io::Error),
	#[error(transparent)]
	Transcode(#[from] TranscodeError),
}

fn main() -> Result<(), CliError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args: Vec<String> = env::args().collect();
	if args.len() != 4 {
		return Err(CliError::Usage);
	}

	let tag: u32 = args[1].parse().map_err(|_| CliError::Tag(args[1].clone()))?;
	let data = read(&args[2])?;

	match ResourceKind::from_tag(tag) {
		Some(kind) => {
			let converted = convert(kind, &data)?;

			for reloc in converted.relocations.iter() {
				info!(offset = reloc.offset, kind = ?reloc.kind, "relocation");
			}

			write(&args[3], &converted.data)?;
			info!(?kind, before = data.len(), after = converted.data.len(), "transcoded");
		},
		None => {
			warn!(tag, "no schema for resource kind, copying");
			write(&args[3], &data)?;
		},
	}

	Ok(())
}
