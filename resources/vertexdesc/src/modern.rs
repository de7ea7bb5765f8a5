use byteorder::{
	LE,
	WriteBytesExt
};

use restx_core::{
	code_enum,
	io_ext::WriteBinExt,
	layout::Layout,
	modern::Format,
	remap::Coded,
	Result
};

pub const HEADER_SIZE: u64 = 0x10;
pub const ELEMENT_SIZE: u64 = 0x14;
pub const SECTION_ALIGNMENT: u64 = 0x10;

code_enum! {
	pub enum SemanticName {
		None = 0,
		Position = 1,
		PositionT = 2,
		Normal = 3,
		Color0 = 4,
		Texcoord0 = 5,
		Texcoord1 = 6,
		Texcoord2 = 7,
		Texcoord3 = 8,
		Texcoord4 = 9,
		Texcoord5 = 10,
		Texcoord6 = 11,
		Texcoord7 = 12,
		BlendIndices = 13,
		BlendWeight = 14,
		Tangent = 15,
		Color1 = 16,
		Binormal = 17,
		PSize = 18,
	}
}

code_enum! {
	pub enum InputClassification {
		PerVertexData = 0,
		PerInstanceData = 1,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
	pub semantic_name: SemanticName,
	pub semantic_index: u8,
	pub input_slot: u8,
	pub input_slot_class: InputClassification,
	pub format: Format,
	pub offset: u32,
	pub instance_step_rate: u32,
	pub stride: u32,
}

impl Element {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_code_i8(self.semantic_name)?;
		buf.write_u8(self.semantic_index)?;
		buf.write_u8(self.input_slot)?;
		buf.write_code_i8(self.input_slot_class)?;
		buf.write_code_i32(self.format)?;
		buf.write_u32::<LE>(self.offset)?;
		buf.write_u32::<LE>(self.instance_step_rate)?;
		buf.write_u32::<LE>(self.stride)?;

		Ok(())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexDescriptor {
	pub elements_hash: u32,
	pub input_slots_hash: u32,
	pub input_slots_count: u8,
	pub elements: Vec<Element>,
}

impl VertexDescriptor {
	/// Coarse fingerprint of the semantics present, one bit per semantic name
	pub fn hash_elements(elements: &[Element]) -> u32 {
		elements.iter().fold(0, |hash, e| hash | (1 << e.semantic_name.raw()))
	}

	/// One bit per input slot that carries per-instance data
	pub fn hash_input_slots(elements: &[Element]) -> u32 {
		elements.iter()
			.filter(|e| e.input_slot_class == InputClassification::PerInstanceData)
			.fold(0, |hash, e| hash | (1 << e.input_slot))
	}

	pub fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u32::<LE>(1)?;
		buf.write_u32::<LE>(self.elements_hash)?;
		buf.write_u32::<LE>(self.input_slots_hash)?;
		buf.write_u8(self.elements.len() as u8)?;
		buf.write_u8(self.input_slots_count)?;
		buf.write_u16::<LE>(0)?;

		buf.align(SECTION_ALIGNMENT)?;
		for element in self.elements.iter() {
			element.write(buf)?;
		}

		Ok(())
	}
}
