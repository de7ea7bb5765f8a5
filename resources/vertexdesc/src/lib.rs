pub mod legacy;
pub mod modern;

use std::io::Cursor;

use restx_core::{
	layout::Layout,
	modern::Format,
	reloc::Relocations,
	remap::RemapTable,
	schema::ResourceSchema,
	Result,
	TranscodeError
};

use legacy::{
	DataType,
	MapIndex,
	Usage
};

use modern::{
	InputClassification,
	SemanticName
};

pub const TYPE_TAG: u32 = 10;

pub static DATA_TYPES: RemapTable<DataType, Format> = RemapTable::new("vertex data type", &[
	(DataType::Float1, Some(Format::R32Float)),
	(DataType::Float2, Some(Format::R32G32Float)),
	(DataType::Float3, Some(Format::R32G32B32Float)),
	(DataType::Float4, Some(Format::R32G32B32A32Float)),
	(DataType::D3dColor, None),
	(DataType::UByte4, Some(Format::R8G8B8A8Uint)),
	(DataType::Short2, Some(Format::R16G16Sint)),
	(DataType::Short4, Some(Format::R16G16B16A16Sint)),
	(DataType::UByte4N, Some(Format::R8G8B8A8Unorm)),
	(DataType::Short2N, Some(Format::R16G16Snorm)),
	(DataType::Short4N, Some(Format::R16G16B16A16Snorm)),
	(DataType::UShort2N, Some(Format::R16G16Unorm)),
	(DataType::UShort4N, Some(Format::R16G16B16A16Unorm)),
	(DataType::UDec3, None),
	(DataType::Dec3N, None),
	(DataType::Float16x2, Some(Format::R16G16Float)),
	(DataType::Float16x4, Some(Format::R16G16B16A16Float)),
	(DataType::Unused, Some(Format::Unknown)),
]);

/// Usages with a single modern semantic. Texcoord and Color are resolved through their usage index.
pub static USAGES: RemapTable<Usage, SemanticName> = RemapTable::new("vertex usage", &[
	(Usage::Position, Some(SemanticName::Position)),
	(Usage::BlendWeight, Some(SemanticName::BlendWeight)),
	(Usage::BlendIndices, Some(SemanticName::BlendIndices)),
	(Usage::Normal, Some(SemanticName::Normal)),
	(Usage::PSize, Some(SemanticName::PSize)),
	(Usage::Tangent, Some(SemanticName::Tangent)),
	(Usage::Binormal, Some(SemanticName::Binormal)),
	(Usage::TessFactor, None),
	(Usage::PositionT, Some(SemanticName::PositionT)),
	(Usage::Fog, None),
	(Usage::Depth, None),
	(Usage::Sample, None),
]);

pub const TEXCOORDS: [SemanticName; 8] = [
	SemanticName::Texcoord0,
	SemanticName::Texcoord1,
	SemanticName::Texcoord2,
	SemanticName::Texcoord3,
	SemanticName::Texcoord4,
	SemanticName::Texcoord5,
	SemanticName::Texcoord6,
	SemanticName::Texcoord7,
];

pub const COLORS: [SemanticName; 2] = [SemanticName::Color0, SemanticName::Color1];

pub static MAP_INDEX_NAMES: RemapTable<MapIndex, SemanticName> = RemapTable::new("vertex map index", &[
	(MapIndex(0), Some(SemanticName::None)),
	(MapIndex(1), Some(SemanticName::Position)),
	(MapIndex(2), Some(SemanticName::Position)),
	(MapIndex(3), Some(SemanticName::Normal)),
	(MapIndex(4), Some(SemanticName::Color0)),
	(MapIndex(5), Some(SemanticName::Color1)),
	(MapIndex(6), Some(SemanticName::Texcoord0)),
	(MapIndex(7), Some(SemanticName::Texcoord1)),
	(MapIndex(8), Some(SemanticName::Texcoord2)),
	(MapIndex(9), Some(SemanticName::Texcoord3)),
	(MapIndex(10), Some(SemanticName::Texcoord4)),
	(MapIndex(11), Some(SemanticName::Texcoord5)),
	(MapIndex(12), Some(SemanticName::Texcoord6)),
	(MapIndex(13), Some(SemanticName::Texcoord7)),
	(MapIndex(14), Some(SemanticName::BlendIndices)),
	(MapIndex(15), Some(SemanticName::BlendWeight)),
	(MapIndex(16), Some(SemanticName::Position)),
	(MapIndex(17), Some(SemanticName::Normal)),
	(MapIndex(18), Some(SemanticName::Position)),
	(MapIndex(19), Some(SemanticName::Position)),
	(MapIndex(20), Some(SemanticName::Position)),
	(MapIndex(21), Some(SemanticName::Tangent)),
	(MapIndex(22), Some(SemanticName::Binormal)),
	(MapIndex(23), None),
	(MapIndex(24), None),
	(MapIndex(25), Some(SemanticName::PSize)),
	(MapIndex(26), Some(SemanticName::BlendIndices)),
	(MapIndex(27), Some(SemanticName::BlendWeight)),
]);

pub static MAP_INDEX_SEMANTIC_INDICES: RemapTable<MapIndex, u8> = RemapTable::new("vertex map index semantic index", &[
	(MapIndex(0), Some(0)),
	(MapIndex(1), Some(0)),
	(MapIndex(2), Some(0)),
	(MapIndex(3), Some(0)),
	(MapIndex(4), Some(0)),
	(MapIndex(5), Some(1)),
	(MapIndex(6), Some(0)),
	(MapIndex(7), Some(1)),
	(MapIndex(8), Some(2)),
	(MapIndex(9), Some(3)),
	(MapIndex(10), Some(4)),
	(MapIndex(11), Some(5)),
	(MapIndex(12), Some(6)),
	(MapIndex(13), Some(7)),
	(MapIndex(14), Some(0)),
	(MapIndex(15), Some(0)),
	(MapIndex(16), Some(1)),
	(MapIndex(17), Some(1)),
	(MapIndex(18), Some(0)),
	(MapIndex(19), Some(0)),
	(MapIndex(20), Some(0)),
	(MapIndex(21), Some(0)),
	(MapIndex(22), Some(0)),
	(MapIndex(23), Some(2)),
	(MapIndex(24), Some(0)),
	(MapIndex(25), Some(0)),
	(MapIndex(26), Some(1)),
	(MapIndex(27), Some(1)),
]);

/// Picks the `index`th semantic of an indexed usage
fn indexed(table: &'static str, names: &[SemanticName], index: u8) -> Result<SemanticName> {
	names.get(index as usize).copied().ok_or_else(|| TranscodeError::UnsupportedValue {
		table: table,
		value: format!("usage index {}", index),
	})
}

/// Resolves the modern semantic name and index of a legacy element. An element with a usage but no
/// usage index is index 0 of that usage.
pub fn semantic(element: &legacy::Element) -> Result<(SemanticName, u8)> {
	let usage = match element.usage {
		Some(usage) => usage,
		None => {
			let name = MAP_INDEX_NAMES.remap(element.map_index)?;
			let index = match element.usage_index {
				Some(index) => index,
				None => MAP_INDEX_SEMANTIC_INDICES.remap(element.map_index)?,
			};

			return Ok((name, index));
		}
	};

	let index = element.usage_index.unwrap_or(0);
	let name = match usage {
		Usage::Texcoord => indexed("vertex texcoord usage", &TEXCOORDS, index)?,
		Usage::Color => indexed("vertex color usage", &COLORS, index)?,
		usage => USAGES.remap(usage)?,
	};

	Ok((name, index))
}

/// Vertex descriptor schema
pub struct VertexDescriptorSchema;

impl ResourceSchema for VertexDescriptorSchema {
	const TYPE_TAG: u32 = TYPE_TAG;
	const NAME: &'static str = "VertexDescriptor";

	type Legacy = legacy::VertexDescriptor;
	type Modern = modern::VertexDescriptor;

	fn decode(data: &[u8]) -> Result<legacy::VertexDescriptor> {
		legacy::VertexDescriptor::read(&mut Cursor::new(data))
	}

	fn transform(vd: &legacy::VertexDescriptor) -> Result<modern::VertexDescriptor> {
		let mut elements = Vec::with_capacity(vd.elements.len());

		for element in vd.elements.iter() {
			let (name, index) = semantic(element)?;

			elements.push(modern::Element {
				semantic_name: name,
				semantic_index: index,
				input_slot: element.stream,
				input_slot_class: InputClassification::PerVertexData,
				format: DATA_TYPES.remap(element.data_type)?,
				offset: element.offset as u32,
				instance_step_rate: 0,
				stride: element.stride as u32,
			});
		}

		Ok(modern::VertexDescriptor {
			elements_hash: modern::VertexDescriptor::hash_elements(&elements),
			input_slots_hash: modern::VertexDescriptor::hash_input_slots(&elements),
			input_slots_count: vd.streams_count,
			elements: elements,
		})
	}

	fn encode(vd: &modern::VertexDescriptor, layout: &mut Layout, _relocs: &mut Relocations) -> Result<()> {
		vd.write(layout)
	}
}
