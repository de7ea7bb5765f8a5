use tracing::debug;

use crate::{
	error::Result,
	layout::Layout,
	reloc::{
		Relocation,
		RelocKind,
		Relocations
	}
};

/// Output of a successful conversion
#[derive(Clone, Debug, PartialEq)]
pub struct Converted {
	pub data: Vec<u8>,
	pub relocations: Vec<Relocation>,
}

/// Legacy and modern layout of one resource kind, plus the field-by-field transform between them.
///
/// Implementors are stateless; every call works on value structs built for that call only.
pub trait ResourceSchema {
	/// Container type tag of the resource kind
	const TYPE_TAG: u32;
	const NAME: &'static str;

	type Legacy;
	type Modern;

	/// Reads the legacy blob into a fully populated value struct
	fn decode(data: &[u8]) -> Result<Self::Legacy>;

	/// Maps legacy fields onto the modern field set
	fn transform(legacy: &Self::Legacy) -> Result<Self::Modern>;

	/// Lays out the modern blob, marking every externally resolved field
	fn encode(modern: &Self::Modern, layout: &mut Layout, relocs: &mut Relocations) -> Result<()>;

	/// Relocation kinds `encode` produces for `modern`, in order
	fn expected_relocations(_modern: &Self::Modern) -> Vec<RelocKind> {
		vec![]
	}

	/// Decodes, transforms and encodes `data`. Nothing is written unless decode and transform succeed.
	fn convert(data: &[u8]) -> Result<Converted> {
		let legacy = Self::decode(data)?;
		debug!(kind = Self::NAME, size = data.len(), "decoded legacy resource");

		let modern = Self::transform(&legacy)?;

		let mut layout = Layout::new();
		let mut relocs = Relocations::new();
		Self::encode(&modern, &mut layout, &mut relocs)?;

		debug_assert_eq!(relocs.kinds(), Self::expected_relocations(&modern),
			"{} relocation order", Self::NAME);

		let data = layout.finish();
		debug!(kind = Self::NAME, size = data.len(), relocations = relocs.len(), "encoded modern resource");

		Ok(Converted {
			data: data,
			relocations: relocs.drain(),
		})
	}
}
