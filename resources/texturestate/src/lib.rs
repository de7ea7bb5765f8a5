pub mod legacy;
pub mod modern;

use std::io::Cursor;

use restx_core::{
	layout::Layout,
	modern::ComparisonFunc,
	reloc::{
		RelocKind,
		Relocations
	},
	remap::RemapTable,
	schema::ResourceSchema,
	Result
};

pub const TYPE_TAG: u32 = 14;

pub static ADDRESS_MODES: RemapTable<legacy::AddressMode, modern::AddressMode> = RemapTable::new("texture address mode", &[
	(legacy::AddressMode::Wrap, Some(modern::AddressMode::Wrap)),
	(legacy::AddressMode::Mirror, Some(modern::AddressMode::Mirror)),
	(legacy::AddressMode::Clamp, Some(modern::AddressMode::Clamp)),
	(legacy::AddressMode::Border, Some(modern::AddressMode::Border)),
	(legacy::AddressMode::MirrorOnce, Some(modern::AddressMode::MirrorOnce)),
]);

/// Only point and linear filtering carry over. The rest are left unspecified.
pub static FILTERS: RemapTable<legacy::FilterType, modern::FilterType> = RemapTable::new("texture filter", &[
	(legacy::FilterType::Point, Some(modern::FilterType::Point)),
	(legacy::FilterType::Linear, Some(modern::FilterType::Linear)),
]);

pub struct TextureStateSchema;

impl ResourceSchema for TextureStateSchema {
	const TYPE_TAG: u32 = TYPE_TAG;
	const NAME: &'static str = "TextureState";

	type Legacy = legacy::SamplerState;
	type Modern = modern::SamplerState;

	fn decode(data: &[u8]) -> Result<legacy::SamplerState> {
		legacy::SamplerState::read(&mut Cursor::new(data))
	}

	fn transform(state: &legacy::SamplerState) -> Result<modern::SamplerState> {
		Ok(modern::SamplerState {
			address_u: ADDRESS_MODES.remap(state.address_u)?,
			address_v: ADDRESS_MODES.remap(state.address_v)?,
			address_w: ADDRESS_MODES.remap(state.address_w)?,
			mag_filter: FILTERS.remap(state.mag_filter)?,
			min_filter: FILTERS.remap(state.min_filter)?,
			mip_filter: FILTERS.remap(state.mip_filter)?,
			min_lod: -f32::MAX,
			max_lod: f32::MAX,
			max_anisotropy: state.max_anisotropy,
			mip_lod_bias: state.mip_lod_bias,
			comparison: ComparisonFunc::Always,
			use_border_color: state.border_color != 0,
		})
	}

	fn encode(state: &modern::SamplerState, layout: &mut Layout, relocs: &mut Relocations) -> Result<()> {
		state.write(layout, relocs)
	}

	fn expected_relocations(_state: &modern::SamplerState) -> Vec<RelocKind> {
		vec![RelocKind::SamplerObject]
	}
}
