use restx_core::{
	code_enum,
	reloc::Relocation,
	remap::Coded,
	schema::Converted,
	Result,
	TranscodeError
};

use crate::cfg::KindFlags;

code_enum! {
	pub enum ResourceKind {
		Texture = restx_texture::TYPE_TAG,
		VertexDescriptor = restx_vertexdesc::TYPE_TAG,
		Renderable = restx_renderable::TYPE_TAG,
		TextureState = restx_texturestate::TYPE_TAG,
		MaterialState = restx_materialstate::TYPE_TAG,
	}
}

impl ResourceKind {
	pub fn from_tag(tag: u32) -> Option<ResourceKind> {
		ResourceKind::from_raw(tag as i64)
	}

	pub fn flag(self) -> KindFlags {
		match self {
			ResourceKind::Texture => KindFlags::TEXTURE,
			ResourceKind::VertexDescriptor => KindFlags::VERTEX_DESCRIPTOR,
			ResourceKind::Renderable => KindFlags::RENDERABLE,
			ResourceKind::TextureState => KindFlags::TEXTURE_STATE,
			ResourceKind::MaterialState => KindFlags::MATERIAL_STATE,
		}
	}
}

/// A reference from one resource to another, resolved by the container once the buffer is final
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImportEntry {
	pub resource_id: u32,
	pub offset: u32,
}

/// One resource as held by its container: a tagged buffer plus the offsets of the references inside it
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceRecord {
	pub type_tag: u32,
	pub id: u32,
	pub data: Vec<u8>,
	pub imports: Vec<ImportEntry>,
}

impl ResourceRecord {
	pub fn new(type_tag: u32, id: u32, data: Vec<u8>) -> ResourceRecord {
		ResourceRecord {
			type_tag: type_tag,
			id: id,
			data: data,
			imports: vec![],
		}
	}

	pub fn with_imports(mut self, imports: Vec<ImportEntry>) -> ResourceRecord {
		self.imports = imports;
		self
	}

	pub fn kind(&self) -> Option<ResourceKind> {
		ResourceKind::from_tag(self.type_tag)
	}

	/// Copies relocation offsets into the import entries, position by position
	pub fn apply_relocations(&mut self, relocs: &[Relocation]) -> Result<()> {
		if relocs.len() != self.imports.len() {
			return Err(TranscodeError::malformed(0, format!("resource {:08X} declares {} imports but its modern layout has {} references",
				self.id, self.imports.len(), relocs.len())));
		}

		for (import, reloc) in self.imports.iter_mut().zip(relocs.iter()) {
			import.offset = reloc.offset;
		}

		Ok(())
	}

	/// Swaps in a converted buffer. Nothing changes if the relocations do not fit the imports.
	pub fn replace(&mut self, converted: Converted) -> Result<()> {
		self.apply_relocations(&converted.relocations)?;
		self.data = converted.data;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use restx_core::reloc::RelocKind;

	use super::*;

	fn record() -> ResourceRecord {
		ResourceRecord::new(ResourceKind::TextureState.raw() as u32, 0x1234ABCD, vec![0xAA; 4])
			.with_imports(vec![ImportEntry { resource_id: 7, offset: 0 }])
	}

	#[test]
	fn test_kind() {
		assert_eq!(ResourceKind::from_tag(0), Some(ResourceKind::Texture));
		assert_eq!(ResourceKind::from_tag(12), Some(ResourceKind::Renderable));
		assert_eq!(ResourceKind::from_tag(1), None);
		assert_eq!(record().kind(), Some(ResourceKind::TextureState));
	}

	#[test]
	fn test_replace() {
		let mut rec = record();
		rec.replace(Converted {
			data: vec![1, 2, 3],
			relocations: vec![Relocation { offset: 0x38, kind: RelocKind::SamplerObject }],
		}).unwrap();

		assert_eq!(rec.data, vec![1, 2, 3]);
		assert_eq!(rec.imports, vec![ImportEntry { resource_id: 7, offset: 0x38 }]);
	}

	#[test]
	fn test_replace_mismatch() {
		let mut rec = record();
		let res = rec.replace(Converted {
			data: vec![1, 2, 3],
			relocations: vec![],
		});

		assert!(matches!(res, Err(TranscodeError::MalformedInput { .. })));
		assert_eq!(rec, record());
	}
}
