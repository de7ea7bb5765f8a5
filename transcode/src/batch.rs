use thiserror::Error;
use tracing::warn;

use restx_core::TranscodeError;

use crate::{
	cfg::{
		BatchPolicy,
		TranscodeCfg
	},
	dispatch::{
		transcode,
		Outcome
	},
	record::ResourceRecord
};

#[derive(Debug, Error)]
#[error("Resource {id:08X} failed to transcode")]
pub struct RecordError {
	pub id: u32,
	#[source]
	pub source: TranscodeError,
}

/// Ids of the records a batch touched, grouped by what happened to them
#[derive(Debug, Default)]
pub struct BatchReport {
	pub converted: Vec<u32>,
	pub filtered: Vec<u32>,
	pub passed_through: Vec<u32>,
	pub failed: Vec<RecordError>,
}

/// Transcodes every record in order. Under [`BatchPolicy::Abort`] the first failure is returned and the
/// records after it are not visited.
pub fn transcode_batch(records: &mut [ResourceRecord], cfg: &TranscodeCfg) -> Result<BatchReport, RecordError> {
	let mut report = BatchReport::default();

	for record in records.iter_mut() {
		match transcode(record, cfg) {
			Ok(Outcome::Converted(_)) => report.converted.push(record.id),
			Ok(Outcome::Filtered(_)) => report.filtered.push(record.id),
			Ok(Outcome::PassedThrough(_)) => report.passed_through.push(record.id),
			Err(e) => {
				let err = RecordError {
					id: record.id,
					source: e,
				};

				match cfg.policy {
					BatchPolicy::Abort => return Err(err),
					BatchPolicy::Skip => {
						warn!(id = record.id, tag = record.type_tag, error = %err.source, "skipping resource");
						report.failed.push(err);
					},
				}
			},
		}
	}

	Ok(report)
}
