pub mod legacy;
pub mod modern;

use std::io::Cursor;

use bitflags::bitflags;

use restx_core::{
	layout::Layout,
	legacy::ComparisonFunc as LegacyComparisonFunc,
	modern::ComparisonFunc,
	reloc::Relocations,
	remap::RemapTable,
	schema::ResourceSchema,
	Result
};

pub const TYPE_TAG: u32 = 15;

bitflags! {
	/// Colour channels a render target accepts writes to
	pub struct ColorWriteEnable: u8 {
		const RED = 1;
		const GREEN = 2;
		const BLUE = 4;
		const ALPHA = 8;
	}
}

pub static BLENDS: RemapTable<legacy::Blend, modern::Blend> = RemapTable::new("blend factor", &[
	(legacy::Blend::Zero, Some(modern::Blend::Zero)),
	(legacy::Blend::One, Some(modern::Blend::One)),
	(legacy::Blend::SrcColor, Some(modern::Blend::SrcColor)),
	(legacy::Blend::InvSrcColor, Some(modern::Blend::InvSrcColor)),
	(legacy::Blend::SrcAlpha, Some(modern::Blend::SrcAlpha)),
	(legacy::Blend::InvSrcAlpha, Some(modern::Blend::InvSrcAlpha)),
	(legacy::Blend::DestAlpha, Some(modern::Blend::DestAlpha)),
	(legacy::Blend::InvDestAlpha, Some(modern::Blend::InvDestAlpha)),
	(legacy::Blend::DestColor, Some(modern::Blend::DestColor)),
	(legacy::Blend::InvDestColor, Some(modern::Blend::InvDestColor)),
	(legacy::Blend::SrcAlphaSat, Some(modern::Blend::SrcAlphaSat)),
	(legacy::Blend::BothSrcAlpha, None),
	(legacy::Blend::BothInvSrcAlpha, None),
	(legacy::Blend::BlendFactor, Some(modern::Blend::BlendFactor)),
	(legacy::Blend::InvBlendFactor, Some(modern::Blend::InvBlendFactor)),
]);

pub static BLEND_OPS: RemapTable<legacy::BlendOp, modern::BlendOp> = RemapTable::new("blend op", &[
	(legacy::BlendOp::Add, Some(modern::BlendOp::Add)),
	(legacy::BlendOp::Subtract, Some(modern::BlendOp::Subtract)),
	(legacy::BlendOp::RevSubtract, Some(modern::BlendOp::RevSubtract)),
	(legacy::BlendOp::Min, Some(modern::BlendOp::Min)),
	(legacy::BlendOp::Max, Some(modern::BlendOp::Max)),
]);

pub static STENCIL_OPS: RemapTable<legacy::StencilOp, modern::StencilOp> = RemapTable::new("stencil op", &[
	(legacy::StencilOp::Keep, Some(modern::StencilOp::Keep)),
	(legacy::StencilOp::Zero, Some(modern::StencilOp::Zero)),
	(legacy::StencilOp::Replace, Some(modern::StencilOp::Replace)),
	(legacy::StencilOp::IncrSat, Some(modern::StencilOp::IncrSat)),
	(legacy::StencilOp::DecrSat, Some(modern::StencilOp::DecrSat)),
	(legacy::StencilOp::Invert, Some(modern::StencilOp::Invert)),
	(legacy::StencilOp::Incr, Some(modern::StencilOp::Incr)),
	(legacy::StencilOp::Decr, Some(modern::StencilOp::Decr)),
]);

pub static COMPARISONS: RemapTable<LegacyComparisonFunc, ComparisonFunc> = RemapTable::new("comparison func", &[
	(LegacyComparisonFunc::Never, Some(ComparisonFunc::Never)),
	(LegacyComparisonFunc::Less, Some(ComparisonFunc::Less)),
	(LegacyComparisonFunc::Equal, Some(ComparisonFunc::Equal)),
	(LegacyComparisonFunc::LessEqual, Some(ComparisonFunc::LessEqual)),
	(LegacyComparisonFunc::Greater, Some(ComparisonFunc::Greater)),
	(LegacyComparisonFunc::NotEqual, Some(ComparisonFunc::NotEqual)),
	(LegacyComparisonFunc::GreaterEqual, Some(ComparisonFunc::GreaterEqual)),
	(LegacyComparisonFunc::Always, Some(ComparisonFunc::Always)),
]);

pub static FILL_MODES: RemapTable<legacy::FillMode, modern::FillMode> = RemapTable::new("fill mode", &[
	(legacy::FillMode::Point, None),
	(legacy::FillMode::Wireframe, Some(modern::FillMode::Wireframe)),
	(legacy::FillMode::Solid, Some(modern::FillMode::Solid)),
]);

/// Legacy culling names the winding to drop, modern culling names the face. The modern rasterizer treats
/// counter-clockwise triangles as front faces, so culling clockwise triangles drops back faces.
pub static CULL_MODES: RemapTable<legacy::CullMode, modern::CullMode> = RemapTable::new("cull mode", &[
	(legacy::CullMode::None, Some(modern::CullMode::None)),
	(legacy::CullMode::Cw, Some(modern::CullMode::Back)),
	(legacy::CullMode::Ccw, Some(modern::CullMode::Front)),
]);

fn transform_blend(blend: &legacy::BlendState) -> Result<modern::BlendState> {
	// without separate alpha the colour factors drive alpha as well
	let (alpha_src, alpha_dest, alpha_op) = if blend.separate_alpha_blend {
		(blend.alpha_src, blend.alpha_dest, blend.alpha_op)
	} else {
		(blend.src, blend.dest, blend.op)
	};

	let rt = modern::RenderTargetBlend {
		enable: blend.alpha_blend_enable,
		src: BLENDS.remap(blend.src)?,
		dest: BLENDS.remap(blend.dest)?,
		op: BLEND_OPS.remap(blend.op)?,
		src_alpha: BLENDS.remap(alpha_src)?,
		dest_alpha: BLENDS.remap(alpha_dest)?,
		op_alpha: BLEND_OPS.remap(alpha_op)?,
		write_mask: blend.write_mask,
	};

	Ok(modern::BlendState {
		alpha_to_coverage: blend.alpha_to_coverage,
		independent_blend: false,
		render_targets: [rt; modern::RENDER_TARGETS],
	})
}

fn transform_stencil(ops: &legacy::StencilOps) -> Result<modern::DepthStencilOp> {
	Ok(modern::DepthStencilOp {
		fail: STENCIL_OPS.remap(ops.fail)?,
		depth_fail: STENCIL_OPS.remap(ops.depth_fail)?,
		pass: STENCIL_OPS.remap(ops.pass)?,
		func: COMPARISONS.remap(ops.func)?,
	})
}

fn transform_depth_stencil(ds: &legacy::DepthStencilState) -> Result<modern::DepthStencilState> {
	let front = transform_stencil(&ds.front)?;
	let back = if ds.two_sided_stencil {
		transform_stencil(&ds.ccw)?
	} else {
		front
	};

	Ok(modern::DepthStencilState {
		depth_enable: ds.z_enable,
		depth_write: ds.z_write_enable,
		stencil_enable: ds.stencil_enable,
		depth_func: COMPARISONS.remap(ds.z_func)?,
		read_mask: ds.read_mask,
		write_mask: ds.write_mask,
		stencil_ref: ds.stencil_ref,
		front: front,
		back: back,
	})
}

fn transform_rasterizer(rs: &legacy::RasterizerState) -> Result<modern::RasterizerState> {
	Ok(modern::RasterizerState {
		fill_mode: FILL_MODES.remap(rs.fill_mode)?,
		cull_mode: CULL_MODES.remap(rs.cull_mode)?,
		front_counter_clockwise: true,
		depth_clip_enable: false,
		scissor_enable: rs.scissor_enable,
		multisample_enable: rs.multisample_enable,
		depth_bias: (rs.depth_bias * modern::DEPTH_BIAS_SCALE).round() as i32,
		depth_bias_clamp: 0.0,
		slope_scaled_depth_bias: rs.slope_scaled_depth_bias,
		antialiased_line_enable: rs.antialiased_line_enable,
	})
}

/// Material state schema. The legacy alpha test has no fixed-function counterpart and is dropped.
pub struct MaterialStateSchema;

impl ResourceSchema for MaterialStateSchema {
	const TYPE_TAG: u32 = TYPE_TAG;
	const NAME: &'static str = "MaterialState";

	type Legacy = legacy::MaterialState;
	type Modern = modern::MaterialState;

	fn decode(data: &[u8]) -> Result<legacy::MaterialState> {
		legacy::MaterialState::read(&mut Cursor::new(data))
	}

	fn transform(state: &legacy::MaterialState) -> Result<modern::MaterialState> {
		Ok(modern::MaterialState {
			blend: transform_blend(&state.blend)?,
			depth_stencil: transform_depth_stencil(&state.depth_stencil)?,
			rasterizer: transform_rasterizer(&state.rasterizer)?,
		})
	}

	fn encode(state: &modern::MaterialState, layout: &mut Layout, _relocs: &mut Relocations) -> Result<()> {
		state.write(layout)
	}
}

#[cfg(test)]
mod tests {
	use byteorder::{
		LE,
		ReadBytesExt,
		WriteBytesExt
	};

	use restx_core::{
		bit_ext::{
			pack,
			unpack
		},
		remap::Coded,
		TranscodeError
	};

	use super::*;

	use legacy::{
		Blend,
		BlendOp,
		CullMode,
		FillMode
	};

	const BLEND_OFFSET: usize = 0x10;
	const DEPTH_STENCIL_OFFSET: usize = 0x20;
	const RASTERIZER_OFFSET: usize = 0x30;

	struct Fixture {
		blend_word: u32,
		alpha_blend_enable: bool,
		separate_alpha: bool,
		two_sided: bool,
		stencil_word: u32,
		fill: FillMode,
		cull: CullMode,
		depth_bias: f32,
	}

	impl Default for Fixture {
		fn default() -> Fixture {
			Fixture {
				blend_word: blend_word(Blend::One, BlendOp::Add, Blend::Zero, Blend::One, BlendOp::Add, Blend::Zero),
				alpha_blend_enable: true,
				separate_alpha: false,
				two_sided: false,
				// keep keep keep always, clockwise then counter-clockwise
				stencil_word: pack(&[(1, 4), (1, 4), (1, 4), (8, 4), (1, 4), (1, 4), (1, 4), (8, 4)]),
				fill: FillMode::Solid,
				cull: CullMode::Cw,
				depth_bias: 0.0,
			}
		}
	}

	fn blend_word(src: Blend, op: BlendOp, dest: Blend, alpha_src: Blend, alpha_op: BlendOp, alpha_dest: Blend) -> u32 {
		legacy::BLEND_WORD.pack_all(&[
			src.raw() as u32,
			op.raw() as u32,
			dest.raw() as u32,
			alpha_op.raw() as u32,
			alpha_src.raw() as u32,
			alpha_dest.raw() as u32,
		])
	}

	impl Fixture {
		fn blob(&self) -> Vec<u8> {
			let mut buf = vec![];
			buf.write_u32::<LE>(BLEND_OFFSET as u32).unwrap();
			buf.write_u32::<LE>(DEPTH_STENCIL_OFFSET as u32).unwrap();
			buf.write_u32::<LE>(RASTERIZER_OFFSET as u32).unwrap();
			buf.resize(BLEND_OFFSET, 0);

			buf.write_u32::<LE>(self.blend_word).unwrap();
			buf.write_u8(self.alpha_blend_enable as u8).unwrap();
			buf.write_u8(self.separate_alpha as u8).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(0x0F).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(0x80).unwrap();
			buf.write_u16::<LE>(0).unwrap();
			buf.write_i32::<LE>(7).unwrap();

			buf.write_u8(1).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(self.two_sided as u8).unwrap();
			buf.write_i32::<LE>(4).unwrap();
			buf.write_u32::<LE>(self.stencil_word).unwrap();
			buf.write_u8(0xFF).unwrap();
			buf.write_u8(0x0F).unwrap();
			buf.write_u8(3).unwrap();
			buf.write_u8(0).unwrap();

			buf.write_i32::<LE>(self.fill.raw() as i32).unwrap();
			buf.write_i32::<LE>(self.cull.raw() as i32).unwrap();
			buf.write_f32::<LE>(self.depth_bias).unwrap();
			buf.write_f32::<LE>(1.5).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(0).unwrap();
			buf.write_u8(1).unwrap();
			buf.write_u8(0).unwrap();

			buf
		}

		fn modern(&self) -> modern::MaterialState {
			MaterialStateSchema::transform(&MaterialStateSchema::decode(&self.blob()).unwrap()).unwrap()
		}
	}

	fn get_u32(buf: &[u8], at: usize) -> u32 {
		(&buf[at..at + 4]).read_u32::<LE>().unwrap()
	}

	#[test]
	fn test_tables() {
		assert!(BLENDS.audit().is_empty());
		assert!(BLEND_OPS.audit().is_empty());
		assert!(STENCIL_OPS.audit().is_empty());
		assert!(COMPARISONS.audit().is_empty());
		assert!(FILL_MODES.audit().is_empty());
		assert!(CULL_MODES.audit().is_empty());
		assert!(BLENDS.duplicates().is_empty());
	}

	#[test]
	fn test_decode() {
		let state = MaterialStateSchema::decode(&Fixture::default().blob()).unwrap();

		assert_eq!(state.blend.src, Blend::One);
		assert_eq!(state.blend.dest, Blend::Zero);
		assert_eq!(state.blend.op, BlendOp::Add);
		assert_eq!(state.blend.write_mask, ColorWriteEnable::all());
		assert_eq!(state.blend.alpha_ref, 0x80);
		assert_eq!(state.blend.alpha_func, LegacyComparisonFunc::GreaterEqual);
		assert_eq!(state.depth_stencil.z_func, LegacyComparisonFunc::LessEqual);
		assert_eq!(state.depth_stencil.front.func, LegacyComparisonFunc::Always);
		assert_eq!(state.depth_stencil.stencil_ref, 3);
		assert_eq!(state.rasterizer.cull_mode, CullMode::Cw);
		assert_eq!(state.rasterizer.slope_scaled_depth_bias, 1.5);
	}

	#[test]
	fn test_replicated_render_targets() {
		let out = MaterialStateSchema::convert(&Fixture::default().blob()).unwrap();
		let data = &out.data;

		assert!(out.relocations.is_empty());

		let blend = get_u32(data, 0) as usize;
		assert_eq!(blend, 0x10);
		assert_eq!(data[blend], 1);
		assert_eq!(data[blend + 1], 0);

		let words: Vec<_> = (0..8).map(|i| get_u32(data, blend + 4 + i * 4)).collect();
		assert!(words.iter().all(|w| *w == words[0]));

		let fields = modern::RENDER_TARGET_WORD.unpack_all(words[0]);
		assert_eq!(fields, vec![1, 2, 1, 1, 2, 1, 1, 0x0F]);
	}

	#[test]
	fn test_separate_alpha() {
		let word = blend_word(Blend::SrcAlpha, BlendOp::Add, Blend::InvSrcAlpha, Blend::One, BlendOp::Max, Blend::Zero);

		let shared = Fixture { blend_word: word, ..Fixture::default() }.modern();
		let rt = shared.blend.render_targets[0];
		assert_eq!((rt.src_alpha, rt.dest_alpha, rt.op_alpha),
			(modern::Blend::SrcAlpha, modern::Blend::InvSrcAlpha, modern::BlendOp::Add));

		let separate = Fixture { blend_word: word, separate_alpha: true, ..Fixture::default() }.modern();
		let rt = separate.blend.render_targets[7];
		assert_eq!((rt.src_alpha, rt.dest_alpha, rt.op_alpha),
			(modern::Blend::One, modern::Blend::Zero, modern::BlendOp::Max));
	}

	#[test]
	fn test_blend_disabled() {
		let state = Fixture { alpha_blend_enable: false, ..Fixture::default() }.modern();
		let word = state.blend.render_targets[3].pack();

		assert_eq!(unpack(word, 1, 0), 0);
		assert_eq!(unpack(word, 5, 1), modern::Blend::One.raw() as u32);
	}

	#[test]
	fn test_cull_inversion() {
		let cases = [
			(CullMode::Cw, modern::CullMode::Back),
			(CullMode::Ccw, modern::CullMode::Front),
			(CullMode::None, modern::CullMode::None),
		];

		for (winding, expected) in cases {
			let state = Fixture { cull: winding, ..Fixture::default() }.modern();
			assert_eq!(state.rasterizer.cull_mode, expected);
		}
	}

	#[test]
	fn test_stencil_faces() {
		// replace on pass for clockwise faces, decrement on pass for counter-clockwise faces
		let stencil_word = pack(&[(1, 4), (1, 4), (3, 4), (8, 4), (1, 4), (1, 4), (8, 4), (3, 4)]);

		let one_sided = Fixture { stencil_word: stencil_word, ..Fixture::default() }.modern();
		assert_eq!(one_sided.depth_stencil.back, one_sided.depth_stencil.front);
		assert_eq!(one_sided.depth_stencil.front.pass, modern::StencilOp::Replace);

		let two_sided = Fixture { stencil_word: stencil_word, two_sided: true, ..Fixture::default() }.modern();
		assert_eq!(two_sided.depth_stencil.back.pass, modern::StencilOp::Decr);
		assert_eq!(two_sided.depth_stencil.back.func, ComparisonFunc::Equal);
	}

	#[test]
	fn test_encode_layout() {
		let data = MaterialStateSchema::convert(&Fixture { depth_bias: 0.0001, ..Fixture::default() }.blob()).unwrap().data;

		let ds = get_u32(&data, 4) as usize;
		let rs = get_u32(&data, 8) as usize;
		assert_eq!((ds, rs), (0x40, 0x70));
		assert_eq!(data.len(), rs + modern::RASTERIZER_SIZE as usize);

		assert_eq!(&data[ds..ds + 4], &[1, 1, 1, 0u8]);
		assert_eq!(get_u32(&data, ds + 4), ComparisonFunc::LessEqual.raw() as u32);
		assert_eq!(&data[ds + 8..ds + 12], &[0xFF, 0x0F, 3, 0u8]);
		assert_eq!(get_u32(&data, ds + 0x18), 8);
		assert_eq!(get_u32(&data, ds + 0x28), 8);

		assert_eq!(get_u32(&data, rs), 3);
		assert_eq!(get_u32(&data, rs + 4), 3);
		assert_eq!(&data[rs + 8..rs + 12], &[1, 0, 1, 0u8]);
		assert_eq!(get_u32(&data, rs + 12), 1678);
		assert_eq!(&data[rs + 16..rs + 20], &0.0f32.to_le_bytes());
		assert_eq!(&data[rs + 20..rs + 24], &1.5f32.to_le_bytes());
		assert_eq!(data[rs + 24], 1);
	}

	#[test]
	fn test_deterministic() {
		let data = Fixture { separate_alpha: true, two_sided: true, depth_bias: 0.0001, ..Fixture::default() }.blob();
		assert_eq!(MaterialStateSchema::convert(&data).unwrap(), MaterialStateSchema::convert(&data).unwrap());
	}

	#[test]
	fn test_unsupported() {
		let fixture = Fixture { fill: FillMode::Point, ..Fixture::default() };
		assert!(matches!(MaterialStateSchema::convert(&fixture.blob()),
			Err(TranscodeError::UnsupportedValue { table: "fill mode", .. })));

		let word = blend_word(Blend::BothSrcAlpha, BlendOp::Add, Blend::Zero, Blend::One, BlendOp::Add, Blend::Zero);
		let fixture = Fixture { blend_word: word, ..Fixture::default() };
		assert!(matches!(MaterialStateSchema::convert(&fixture.blob()),
			Err(TranscodeError::UnsupportedValue { table: "blend factor", .. })));
	}

	#[test]
	fn test_malformed() {
		// blend factor zero is outside the legacy domain
		let fixture = Fixture { blend_word: 0, ..Fixture::default() };
		assert!(matches!(MaterialStateSchema::decode(&fixture.blob()),
			Err(TranscodeError::MalformedInput { offset: 0x10, .. })));

		let mut blob = Fixture::default().blob();
		(&mut blob[8..12]).write_u32::<LE>(0x40).unwrap();
		assert!(matches!(MaterialStateSchema::decode(&blob),
			Err(TranscodeError::MalformedInput { offset: 0x40, .. })));
	}
}
