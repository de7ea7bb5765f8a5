use byteorder::{
	LE,
	ReadBytesExt
};

use std::io::{
	Read,
	Seek,
	SeekFrom
};

use restx_core::{
	code_enum,
	io_ext::SectionExt,
	legacy::Format,
	Result
};

/// Bytes read from the start of a legacy texture
pub const SIZE: u32 = 0x1C;

code_enum! {
	pub enum TextureType {
		Texture = 0,
		CubeTexture = 1,
		VolumeTexture = 2,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texture {
	pub format: Format,
	pub width: u16,
	pub height: u16,
	pub depth: u8,
	pub mip_levels: u8,
	pub ty: TextureType,
	pub flags: u8,
}

impl Texture {
	pub fn read<R>(buf: &mut R) -> Result<Texture>
	where
		R: Read + Seek,
	{
		buf.enter(0, SIZE)?;

		// 0x00-0x0f hold runtime pointers and the lock count
		buf.seek(SeekFrom::Start(0x10))?;

		Ok(Texture {
			format: buf.read_code_i32()?,
			width: buf.read_u16::<LE>()?,
			height: buf.read_u16::<LE>()?,
			depth: buf.read_u8()?,
			mip_levels: buf.read_u8()?,
			ty: buf.read_code_i8()?,
			flags: buf.read_u8()?,
		})
	}
}
