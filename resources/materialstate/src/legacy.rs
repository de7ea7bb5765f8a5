use byteorder::{
	LE,
	ReadBytesExt
};

use std::io::{
	Read,
	Seek
};

use restx_core::{
	bit_ext::{
		BitField,
		BitLayout
	},
	code_enum,
	io_ext::{
		decode_code,
		SectionExt
	},
	legacy::ComparisonFunc,
	Result
};

use crate::ColorWriteEnable;

pub const HEADER_SIZE: u32 = 0x0C;
pub const BLEND_SIZE: u32 = 0x10;
pub const DEPTH_STENCIL_SIZE: u32 = 0x10;
pub const RASTERIZER_SIZE: u32 = 0x14;

static BLEND_FIELDS: [BitField; 6] = BitLayout::packed([5, 3, 5, 3, 5, 8]);

/// src, op, dest, alpha op, alpha src, alpha dest
pub static BLEND_WORD: BitLayout = BitLayout { fields: &BLEND_FIELDS };

static STENCIL_FIELDS: [BitField; 8] = BitLayout::packed([4; 8]);

/// fail, depth fail, pass, func for the clockwise face, then the same for the counter-clockwise face
pub static STENCIL_WORD: BitLayout = BitLayout { fields: &STENCIL_FIELDS };

code_enum! {
	pub enum Blend {
		Zero = 1,
		One = 2,
		SrcColor = 3,
		InvSrcColor = 4,
		SrcAlpha = 5,
		InvSrcAlpha = 6,
		DestAlpha = 7,
		InvDestAlpha = 8,
		DestColor = 9,
		InvDestColor = 10,
		SrcAlphaSat = 11,
		BothSrcAlpha = 12,
		BothInvSrcAlpha = 13,
		BlendFactor = 14,
		InvBlendFactor = 15,
	}
}

code_enum! {
	pub enum BlendOp {
		Add = 1,
		Subtract = 2,
		RevSubtract = 3,
		Min = 4,
		Max = 5,
	}
}

code_enum! {
	pub enum StencilOp {
		Keep = 1,
		Zero = 2,
		Replace = 3,
		IncrSat = 4,
		DecrSat = 5,
		Invert = 6,
		Incr = 7,
		Decr = 8,
	}
}

code_enum! {
	pub enum FillMode {
		Point = 1,
		Wireframe = 2,
		Solid = 3,
	}
}

code_enum! {
	/// Winding of the faces to cull
	pub enum CullMode {
		None = 1,
		Cw = 2,
		Ccw = 3,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendState {
	pub src: Blend,
	pub op: BlendOp,
	pub dest: Blend,
	pub alpha_op: BlendOp,
	pub alpha_src: Blend,
	pub alpha_dest: Blend,
	pub alpha_blend_enable: bool,
	pub separate_alpha_blend: bool,
	pub alpha_to_coverage: bool,
	pub write_mask: ColorWriteEnable,
	pub alpha_test_enable: bool,
	pub alpha_ref: u8,
	pub alpha_func: ComparisonFunc,
}

impl BlendState {
	fn read<R>(buf: &mut R, offset: u32) -> Result<BlendState>
	where
		R: Read + Seek,
	{
		buf.enter(offset, BLEND_SIZE)?;

		let at = offset as u64;
		let word = BLEND_WORD.unpack_all(buf.read_u32::<LE>()?);

		let alpha_blend_enable = buf.read_u8()? != 0;
		let separate_alpha_blend = buf.read_u8()? != 0;
		let alpha_to_coverage = buf.read_u8()? != 0;
		let write_mask = ColorWriteEnable::from_bits_truncate(buf.read_u8()?);
		let alpha_test_enable = buf.read_u8()? != 0;
		let alpha_ref = buf.read_u8()?;
		buf.read_u16::<LE>()?;
		let alpha_func: ComparisonFunc = buf.read_code_i32()?;

		Ok(BlendState {
			src: decode_code(at, word[0] as i64)?,
			op: decode_code(at, word[1] as i64)?,
			dest: decode_code(at, word[2] as i64)?,
			alpha_op: decode_code(at, word[3] as i64)?,
			alpha_src: decode_code(at, word[4] as i64)?,
			alpha_dest: decode_code(at, word[5] as i64)?,
			alpha_blend_enable: alpha_blend_enable,
			separate_alpha_blend: separate_alpha_blend,
			alpha_to_coverage: alpha_to_coverage,
			write_mask: write_mask,
			alpha_test_enable: alpha_test_enable,
			alpha_ref: alpha_ref,
			alpha_func: alpha_func,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilOps {
	pub fail: StencilOp,
	pub depth_fail: StencilOp,
	pub pass: StencilOp,
	pub func: ComparisonFunc,
}

impl StencilOps {
	fn decode(at: u64, fields: &[u32]) -> Result<StencilOps> {
		Ok(StencilOps {
			fail: decode_code(at, fields[0] as i64)?,
			depth_fail: decode_code(at, fields[1] as i64)?,
			pass: decode_code(at, fields[2] as i64)?,
			func: decode_code(at, fields[3] as i64)?,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStencilState {
	pub z_enable: bool,
	pub z_write_enable: bool,
	pub stencil_enable: bool,
	pub two_sided_stencil: bool,
	pub z_func: ComparisonFunc,
	pub front: StencilOps,
	pub ccw: StencilOps,
	pub read_mask: u8,
	pub write_mask: u8,
	pub stencil_ref: u8,
}

impl DepthStencilState {
	fn read<R>(buf: &mut R, offset: u32) -> Result<DepthStencilState>
	where
		R: Read + Seek,
	{
		buf.enter(offset, DEPTH_STENCIL_SIZE)?;

		let z_enable = buf.read_u8()? != 0;
		let z_write_enable = buf.read_u8()? != 0;
		let stencil_enable = buf.read_u8()? != 0;
		let two_sided_stencil = buf.read_u8()? != 0;
		let z_func: ComparisonFunc = buf.read_code_i32()?;

		let at = buf.stream_position()?;
		let word = STENCIL_WORD.unpack_all(buf.read_u32::<LE>()?);

		Ok(DepthStencilState {
			z_enable: z_enable,
			z_write_enable: z_write_enable,
			stencil_enable: stencil_enable,
			two_sided_stencil: two_sided_stencil,
			z_func: z_func,
			front: StencilOps::decode(at, &word[..4])?,
			ccw: StencilOps::decode(at, &word[4..])?,
			read_mask: buf.read_u8()?,
			write_mask: buf.read_u8()?,
			stencil_ref: buf.read_u8()?,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterizerState {
	pub fill_mode: FillMode,
	pub cull_mode: CullMode,
	pub depth_bias: f32,
	pub slope_scaled_depth_bias: f32,
	pub scissor_enable: bool,
	pub multisample_enable: bool,
	pub antialiased_line_enable: bool,
}

impl RasterizerState {
	fn read<R>(buf: &mut R, offset: u32) -> Result<RasterizerState>
	where
		R: Read + Seek,
	{
		buf.enter(offset, RASTERIZER_SIZE)?;

		let fill_mode: FillMode = buf.read_code_i32()?;
		let cull_mode: CullMode = buf.read_code_i32()?;

		Ok(RasterizerState {
			fill_mode: fill_mode,
			cull_mode: cull_mode,
			depth_bias: buf.read_f32::<LE>()?,
			slope_scaled_depth_bias: buf.read_f32::<LE>()?,
			scissor_enable: buf.read_u8()? != 0,
			multisample_enable: buf.read_u8()? != 0,
			antialiased_line_enable: buf.read_u8()? != 0,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialState {
	pub blend: BlendState,
	pub depth_stencil: DepthStencilState,
	pub rasterizer: RasterizerState,
}

impl MaterialState {
	pub fn read<R>(buf: &mut R) -> Result<MaterialState>
	where
		R: Read + Seek,
	{
		buf.enter(0, HEADER_SIZE)?;

		let blend = buf.read_u32::<LE>()?;
		let depth_stencil = buf.read_u32::<LE>()?;
		let rasterizer = buf.read_u32::<LE>()?;

		Ok(MaterialState {
			blend: BlendState::read(buf, blend)?,
			depth_stencil: DepthStencilState::read(buf, depth_stencil)?,
			rasterizer: RasterizerState::read(buf, rasterizer)?,
		})
	}
}
