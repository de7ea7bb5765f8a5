pub mod batch;
pub mod cfg;
pub mod dispatch;
pub mod record;

pub use batch::{
	transcode_batch,
	BatchReport,
	RecordError
};

pub use cfg::{
	BatchPolicy,
	KindFlags,
	TranscodeCfg
};

pub use dispatch::{
	convert,
	transcode,
	Outcome
};

pub use record::{
	ImportEntry,
	ResourceKind,
	ResourceRecord
};

pub use restx_core::{
	Result,
	TranscodeError
};
