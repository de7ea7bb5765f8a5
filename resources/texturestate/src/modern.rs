use byteorder::{
	LE,
	WriteBytesExt
};

use restx_core::{
	code_enum,
	io_ext::WriteBinExt,
	layout::Layout,
	modern::ComparisonFunc,
	reloc::{
		RelocKind,
		Relocations
	},
	Result
};

pub const SIZE: u64 = 0x3C;

code_enum! {
	pub enum AddressMode {
		Wrap = 1,
		Mirror = 2,
		Clamp = 3,
		Border = 4,
		MirrorOnce = 5,
	}
}

code_enum! {
	pub enum FilterType {
		Point = 0,
		Linear = 1,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerState {
	pub address_u: AddressMode,
	pub address_v: AddressMode,
	pub address_w: AddressMode,
	pub mag_filter: FilterType,
	pub min_filter: FilterType,
	pub mip_filter: FilterType,
	pub min_lod: f32,
	pub max_lod: f32,
	pub max_anisotropy: u32,
	pub mip_lod_bias: f32,
	pub comparison: ComparisonFunc,
	pub use_border_color: bool,
}

impl SamplerState {
	pub fn write(&self, buf: &mut Layout, relocs: &mut Relocations) -> Result<()> {
		buf.write_code_i32(self.address_u)?;
		buf.write_code_i32(self.address_v)?;
		buf.write_code_i32(self.address_w)?;
		buf.write_code_i32(self.mag_filter)?;
		buf.write_code_i32(self.min_filter)?;
		buf.write_code_i32(self.mip_filter)?;
		buf.write_f32::<LE>(self.min_lod)?;
		buf.write_f32::<LE>(self.max_lod)?;
		buf.write_u32::<LE>(self.max_anisotropy)?;
		buf.write_f32::<LE>(self.mip_lod_bias)?;
		buf.write_code_i32(self.comparison)?;
		buf.write_u8(self.use_border_color as u8)?;
		buf.pad(3)?;

		// runtime sampler header
		buf.write_u32::<LE>(1)?;
		buf.write_u32::<LE>(0)?;

		relocs.mark(buf.tell(), RelocKind::SamplerObject);
		buf.write_u32::<LE>(0)?;

		Ok(())
	}
}
