use byteorder::{
	LE,
	WriteBytesExt
};

use restx::{
	transcode,
	transcode_batch,
	BatchPolicy,
	ImportEntry,
	KindFlags,
	Outcome,
	ResourceKind,
	ResourceRecord,
	TranscodeCfg,
	TranscodeError
};

const A8R8G8B8: i32 = 21;
const P8: i32 = 41;

fn texture(id: u32, format: i32) -> ResourceRecord {
	let mut data = vec![0; 0x10];
	data.write_i32::<LE>(format).unwrap();
	data.write_u16::<LE>(256).unwrap();
	data.write_u16::<LE>(128).unwrap();
	data.write_u8(1).unwrap();
	data.write_u8(9).unwrap();
	data.write_i8(0).unwrap();
	data.write_u8(0).unwrap();

	ResourceRecord::new(0, id, data)
}

fn texture_state(id: u32, imports: usize) -> ResourceRecord {
	let mut data = vec![];
	for code in [1, 1, 1, 2, 2, 1] {
		data.write_i32::<LE>(code).unwrap();
	}
	data.write_u32::<LE>(0).unwrap();
	data.write_u32::<LE>(4).unwrap();
	data.write_f32::<LE>(0.0).unwrap();
	data.write_u32::<LE>(0).unwrap();

	let entries = (0..imports).map(|i| ImportEntry { resource_id: 0x100 + i as u32, offset: 0 }).collect();
	ResourceRecord::new(14, id, data).with_imports(entries)
}

#[test]
fn test_convert_texture() {
	let mut record = texture(1, A8R8G8B8);
	let outcome = transcode(&mut record, &TranscodeCfg::default()).unwrap();

	assert_eq!(outcome, Outcome::Converted(ResourceKind::Texture));
	assert_eq!(record.data.len(), 0x40);
	assert_eq!(record.type_tag, 0);
	assert_eq!(record.id, 1);
}

#[test]
fn test_pass_through() {
	let mut record = ResourceRecord::new(3, 2, vec![1, 2, 3, 4]);
	let outcome = transcode(&mut record, &TranscodeCfg::default()).unwrap();

	assert_eq!(outcome, Outcome::PassedThrough(3));
	assert_eq!(record.data, vec![1, 2, 3, 4]);
}

#[test]
fn test_filtered_kind() {
	let cfg = TranscodeCfg {
		kinds: KindFlags::all() - KindFlags::TEXTURE,
		..TranscodeCfg::default()
	};

	let mut record = texture(1, A8R8G8B8);
	let original = record.clone();

	assert_eq!(transcode(&mut record, &cfg).unwrap(), Outcome::Filtered(ResourceKind::Texture));
	assert_eq!(record, original);
}

#[test]
fn test_failure_leaves_record_untouched() {
	let mut record = texture(1, P8);
	let original = record.clone();

	let res = transcode(&mut record, &TranscodeCfg::default());
	assert!(matches!(res, Err(TranscodeError::UnsupportedValue { table: "pixel format", .. })));
	assert_eq!(record, original);

	let mut record = texture(1, A8R8G8B8);
	record.data.truncate(0x18);
	let original = record.clone();

	let res = transcode(&mut record, &TranscodeCfg::default());
	assert!(matches!(res, Err(TranscodeError::MalformedInput { .. })));
	assert_eq!(record, original);
}

#[test]
fn test_relocations_fill_imports() {
	let mut record = texture_state(5, 1);
	transcode(&mut record, &TranscodeCfg::default()).unwrap();

	assert_eq!(record.data.len(), 0x3C);
	assert_eq!(record.imports, vec![ImportEntry { resource_id: 0x100, offset: 0x38 }]);
}

#[test]
fn test_relocation_count_mismatch() {
	let mut record = texture_state(5, 2);
	let original = record.clone();

	let res = transcode(&mut record, &TranscodeCfg::default());
	assert!(matches!(res, Err(TranscodeError::MalformedInput { .. })));
	assert_eq!(record, original);
}

#[test]
fn test_batch_skip() {
	let mut records = vec![
		texture(1, A8R8G8B8),
		texture(2, P8),
		ResourceRecord::new(99, 3, vec![]),
		texture_state(4, 1),
	];
	let cfg = TranscodeCfg {
		policy: BatchPolicy::Skip,
		..TranscodeCfg::default()
	};

	let report = transcode_batch(&mut records, &cfg).unwrap();

	assert_eq!(report.converted, vec![1, 4]);
	assert_eq!(report.passed_through, vec![3]);
	assert!(report.filtered.is_empty());
	assert_eq!(report.failed.len(), 1);
	assert_eq!(report.failed[0].id, 2);
	assert_eq!(records[1], texture(2, P8));
}

#[test]
fn test_batch_abort() {
	let mut records = vec![
		texture(1, A8R8G8B8),
		texture(2, P8),
		texture(3, A8R8G8B8),
	];

	let err = transcode_batch(&mut records, &TranscodeCfg::default()).unwrap_err();

	assert_eq!(err.id, 2);
	assert!(matches!(err.source, TranscodeError::UnsupportedValue { .. }));
	assert_eq!(records[0].data.len(), 0x40);
	assert_eq!(records[2], texture(3, A8R8G8B8));
}
