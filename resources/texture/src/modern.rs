use byteorder::{
	LE,
	WriteBytesExt
};

use restx_core::{
	code_enum,
	io_ext::WriteBinExt,
	layout::Layout,
	modern::{
		Format,
		Usage
	},
	Result
};

pub const SIZE: u64 = 0x40;

code_enum! {
	pub enum TextureType {
		Texture1D = 6,
		Texture2D = 7,
		Texture3D = 8,
		CubeTexture = 9,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texture {
	pub usage: Usage,
	pub ty: TextureType,
	pub format: Format,
	pub width: u16,
	pub height: u16,
	pub depth: u16,
	pub count: u16,
	pub mip_levels: u8,
}

impl Texture {
	pub fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u32::<LE>(0)?; // runtime resource pointer
		buf.write_code_i32(self.usage)?;
		buf.write_code_i32(self.ty)?;
		buf.pad(0x10)?;
		buf.write_code_i32(self.format)?;
		buf.write_u32::<LE>(0)?;
		buf.write_u16::<LE>(self.width)?;
		buf.write_u16::<LE>(self.height)?;
		buf.write_u16::<LE>(self.depth)?;
		buf.write_u16::<LE>(self.count)?;
		buf.write_u8(0)?; // most detailed mip
		buf.write_u8(self.mip_levels)?;
		buf.pad(2)?;
		buf.pad(0x10)?;

		debug_assert_eq!(buf.tell(), SIZE);
		Ok(())
	}
}
