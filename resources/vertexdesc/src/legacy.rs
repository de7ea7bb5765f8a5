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
	io_ext::{
		decode_code,
		SectionExt
	},
	remap::Coded,
	Result,
	TranscodeError
};

pub const HEADER_SIZE: u32 = 0x10;
pub const ELEMENT_STRIDE: u32 = 0x10;
pub const ELEMENT_SIZE: u32 = 0x0C;

/// Stored in the usage and usage index fields when the element has none
pub const ABSENT: i8 = -1;

code_enum! {
	pub enum DataType {
		Float1 = 0,
		Float2 = 1,
		Float3 = 2,
		Float4 = 3,
		D3dColor = 4,
		UByte4 = 5,
		Short2 = 6,
		Short4 = 7,
		UByte4N = 8,
		Short2N = 9,
		Short4N = 10,
		UShort2N = 11,
		UShort4N = 12,
		UDec3 = 13,
		Dec3N = 14,
		Float16x2 = 15,
		Float16x4 = 16,
		Unused = 17,
	}
}

code_enum! {
	/// Tessellator method, unused by the modern runtime
	pub enum Method {
		Default = 0,
		PartialU = 1,
		PartialV = 2,
		CrossUv = 3,
		Uv = 4,
		Lookup = 5,
		LookupPresampled = 6,
	}
}

code_enum! {
	pub enum Usage {
		Position = 0,
		BlendWeight = 1,
		BlendIndices = 2,
		Normal = 3,
		PSize = 4,
		Texcoord = 5,
		Tangent = 6,
		Binormal = 7,
		TessFactor = 8,
		PositionT = 9,
		Color = 10,
		Fog = 11,
		Depth = 12,
		Sample = 13,
	}
}

/// Engine-specific attribute slot, used in place of a usage when the element has none
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MapIndex(pub u8);

pub const MAP_INDEX_COUNT: usize = 28;

const MAP_INDICES: [MapIndex; MAP_INDEX_COUNT] = {
	let mut all = [MapIndex(0); MAP_INDEX_COUNT];
	let mut i = 0;

	while i < MAP_INDEX_COUNT {
		all[i] = MapIndex(i as u8);
		i += 1;
	}

	all
};

impl Coded for MapIndex {
	const ALL: &'static [MapIndex] = &MAP_INDICES;
	const NAME: &'static str = "MapIndex";

	fn raw(self) -> i64 {
		self.0 as i64
	}

	fn from_raw(raw: i64) -> Option<MapIndex> {
		if (0..MAP_INDEX_COUNT as i64).contains(&raw) {
			Some(MapIndex(raw as u8))
		} else {
			None
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
	pub stream: u8,
	pub stride: u8,
	pub offset: u16,
	pub data_type: DataType,
	pub method: Method,
	pub usage: Option<Usage>,
	pub usage_index: Option<u8>,
	pub map_index: MapIndex,
}

impl Element {
	fn read<R>(buf: &mut R) -> Result<Element>
	where
		R: Read + Seek,
	{
		let stream = buf.read_u8()?;
		let stride = buf.read_u8()?;
		let offset = buf.read_u16::<LE>()?;
		let data_type: DataType = buf.read_code_i32()?;
		let method: Method = buf.read_code_i8()?;

		let at = buf.stream_position()?;
		let usage: Option<Usage> = match buf.read_i8()? {
			ABSENT => None,
			raw => Some(decode_code(at, raw as i64)?),
		};

		let at = buf.stream_position()?;
		let usage_index = match buf.read_i8()? {
			ABSENT => None,
			raw if raw < 0 => return Err(TranscodeError::malformed(at, format!("{} is not a valid usage index", raw))),
			raw => Some(raw as u8),
		};

		let at = buf.stream_position()?;
		let map_index: MapIndex = decode_code(at, buf.read_u8()? as i64)?;

		Ok(Element {
			stream: stream,
			stride: stride,
			offset: offset,
			data_type: data_type,
			method: method,
			usage: usage,
			usage_index: usage_index,
			map_index: map_index,
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexDescriptor {
	pub elements_hash: u32,
	pub streams_count: u8,
	pub elements: Vec<Element>,
}

impl VertexDescriptor {
	pub fn read<R>(buf: &mut R) -> Result<VertexDescriptor>
	where
		R: Read + Seek,
	{
		buf.enter(0, HEADER_SIZE)?;
		buf.seek(SeekFrom::Start(0x08))?;

		let elements_hash = buf.read_u32::<LE>()?;
		let count = buf.read_u8()?;
		let streams_count = buf.read_u8()?;

		let mut elements = Vec::with_capacity(count as usize);
		for i in 0..(count as u32) {
			buf.enter(HEADER_SIZE + i * ELEMENT_STRIDE, ELEMENT_SIZE)?;
			elements.push(Element::read(buf)?);
		}

		Ok(VertexDescriptor {
			elements_hash: elements_hash,
			streams_count: streams_count,
			elements: elements,
		})
	}
}
