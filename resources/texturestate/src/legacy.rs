use byteorder::{
	LE,
	ReadBytesExt
};

use std::io::{
	Read,
	Seek
};

use restx_core::{
	code_enum,
	io_ext::SectionExt,
	Result
};

pub const SIZE: u32 = 0x28;

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
		None = 0,
		Point = 1,
		Linear = 2,
		Anisotropic = 3,
		PyramidalQuad = 6,
		GaussianQuad = 7,
		ConvolutionMono = 8,
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
	pub max_mip_level: u32,
	pub max_anisotropy: u32,
	pub mip_lod_bias: f32,
	pub border_color: u32,
}

impl SamplerState {
	pub fn read<R>(buf: &mut R) -> Result<SamplerState>
	where
		R: Read + Seek,
	{
		buf.enter(0, SIZE)?;

		let address_u: AddressMode = buf.read_code_i32()?;
		let address_v: AddressMode = buf.read_code_i32()?;
		let address_w: AddressMode = buf.read_code_i32()?;
		let mag_filter: FilterType = buf.read_code_i32()?;
		let min_filter: FilterType = buf.read_code_i32()?;
		let mip_filter: FilterType = buf.read_code_i32()?;

		Ok(SamplerState {
			address_u: address_u,
			address_v: address_v,
			address_w: address_w,
			mag_filter: mag_filter,
			min_filter: min_filter,
			mip_filter: mip_filter,
			max_mip_level: buf.read_u32::<LE>()?,
			max_anisotropy: buf.read_u32::<LE>()?,
			mip_lod_bias: buf.read_f32::<LE>()?,
			border_color: buf.read_u32::<LE>()?,
		})
	}
}
