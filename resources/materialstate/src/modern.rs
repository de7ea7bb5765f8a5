use byteorder::{
	LE,
	WriteBytesExt
};

use restx_core::{
	bit_ext::{
		BitField,
		BitLayout
	},
	code_enum,
	io_ext::WriteBinExt,
	layout::Layout,
	modern::ComparisonFunc,
	remap::Coded,
	Result
};

use crate::ColorWriteEnable;

pub const RENDER_TARGETS: usize = 8;
pub const BLEND_SIZE: u64 = 0x24;
pub const DEPTH_STENCIL_SIZE: u64 = 0x2C;
pub const RASTERIZER_SIZE: u64 = 0x1C;
pub const SECTION_ALIGNMENT: u64 = 0x10;

/// Scale from a floating point depth bias to depth buffer units of a 24-bit buffer
pub const DEPTH_BIAS_SCALE: f32 = (1 << 24) as f32;

static RENDER_TARGET_FIELDS: [BitField; 8] = BitLayout::packed([1, 5, 5, 3, 5, 5, 3, 4]);

/// enable, src, dest, op, src alpha, dest alpha, op alpha, write mask
pub static RENDER_TARGET_WORD: BitLayout = BitLayout { fields: &RENDER_TARGET_FIELDS };

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
		BlendFactor = 14,
		InvBlendFactor = 15,
		Src1Color = 16,
		InvSrc1Color = 17,
		Src1Alpha = 18,
		InvSrc1Alpha = 19,
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
		Wireframe = 2,
		Solid = 3,
	}
}

code_enum! {
	/// Faces to cull
	pub enum CullMode {
		None = 1,
		Front = 2,
		Back = 3,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTargetBlend {
	pub enable: bool,
	pub src: Blend,
	pub dest: Blend,
	pub op: BlendOp,
	pub src_alpha: Blend,
	pub dest_alpha: Blend,
	pub op_alpha: BlendOp,
	pub write_mask: ColorWriteEnable,
}

impl RenderTargetBlend {
	pub fn pack(&self) -> u32 {
		RENDER_TARGET_WORD.pack_all(&[
			self.enable as u32,
			self.src.raw() as u32,
			self.dest.raw() as u32,
			self.op.raw() as u32,
			self.src_alpha.raw() as u32,
			self.dest_alpha.raw() as u32,
			self.op_alpha.raw() as u32,
			self.write_mask.bits() as u32,
		])
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendState {
	pub alpha_to_coverage: bool,
	pub independent_blend: bool,
	pub render_targets: [RenderTargetBlend; RENDER_TARGETS],
}

impl BlendState {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u8(self.alpha_to_coverage as u8)?;
		buf.write_u8(self.independent_blend as u8)?;
		buf.write_u16::<LE>(0)?;

		for rt in self.render_targets.iter() {
			buf.write_u32::<LE>(rt.pack())?;
		}

		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStencilOp {
	pub fail: StencilOp,
	pub depth_fail: StencilOp,
	pub pass: StencilOp,
	pub func: ComparisonFunc,
}

impl DepthStencilOp {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_code_i32(self.fail)?;
		buf.write_code_i32(self.depth_fail)?;
		buf.write_code_i32(self.pass)?;
		buf.write_code_i32(self.func)?;

		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStencilState {
	pub depth_enable: bool,
	pub depth_write: bool,
	pub stencil_enable: bool,
	pub depth_func: ComparisonFunc,
	pub read_mask: u8,
	pub write_mask: u8,
	pub stencil_ref: u8,
	pub front: DepthStencilOp,
	pub back: DepthStencilOp,
}

impl DepthStencilState {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u8(self.depth_enable as u8)?;
		buf.write_u8(self.depth_write as u8)?;
		buf.write_u8(self.stencil_enable as u8)?;
		buf.write_u8(0)?;
		buf.write_code_i32(self.depth_func)?;
		buf.write_u8(self.read_mask)?;
		buf.write_u8(self.write_mask)?;
		buf.write_u8(self.stencil_ref)?;
		buf.write_u8(0)?;

		self.front.write(buf)?;
		self.back.write(buf)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterizerState {
	pub fill_mode: FillMode,
	pub cull_mode: CullMode,
	pub front_counter_clockwise: bool,
	pub depth_clip_enable: bool,
	pub scissor_enable: bool,
	pub multisample_enable: bool,
	pub depth_bias: i32,
	pub depth_bias_clamp: f32,
	pub slope_scaled_depth_bias: f32,
	pub antialiased_line_enable: bool,
}

impl RasterizerState {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_code_i32(self.fill_mode)?;
		buf.write_code_i32(self.cull_mode)?;
		buf.write_u8(self.front_counter_clockwise as u8)?;
		buf.write_u8(self.depth_clip_enable as u8)?;
		buf.write_u8(self.scissor_enable as u8)?;
		buf.write_u8(self.multisample_enable as u8)?;
		buf.write_i32::<LE>(self.depth_bias)?;
		buf.write_f32::<LE>(self.depth_bias_clamp)?;
		buf.write_f32::<LE>(self.slope_scaled_depth_bias)?;
		buf.write_u8(self.antialiased_line_enable as u8)?;
		buf.pad(3)?;

		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialState {
	pub blend: BlendState,
	pub depth_stencil: DepthStencilState,
	pub rasterizer: RasterizerState,
}

impl MaterialState {
	pub fn write(&self, buf: &mut Layout) -> Result<()> {
		let header = buf.reserve_header(3)?;

		let offset = buf.align(SECTION_ALIGNMENT)?;
		buf.backpatch(header.slot(0), offset as u32)?;
		self.blend.write(buf)?;

		let offset = buf.align(SECTION_ALIGNMENT)?;
		buf.backpatch(header.slot(1), offset as u32)?;
		self.depth_stencil.write(buf)?;

		let offset = buf.align(SECTION_ALIGNMENT)?;
		buf.backpatch(header.slot(2), offset as u32)?;
		self.rasterizer.write(buf)
	}
}
