use byteorder::{
	LE,
	ReadBytesExt
};

use std::io::{
	Read,
	Seek,
	SeekFrom
};

use ultraviolet::{
	mat::Mat4,
	vec::Vec4
};

use restx_core::{
	code_enum,
	io_ext::{
		ReadBinExt,
		SectionExt
	},
	legacy::Format,
	Result
};

pub const HEADER_SIZE: u32 = 0x28;
pub const INDEX_BUFFER_SIZE: u32 = 0x10;
pub const VERTEX_BUFFER_SIZE: u32 = 0x10;
pub const MESH_SIZE: u32 = 0x60;
/// Position of the primitive count within a mesh
pub const PRIMITIVES_COUNT_OFFSET: u32 = 0x54;

code_enum! {
	pub enum PrimitiveType {
		PointList = 1,
		LineList = 2,
		LineStrip = 3,
		TriangleList = 4,
		TriangleStrip = 5,
		TriangleFan = 6,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexBuffer {
	/// Position of the descriptor in the legacy buffer
	pub offset: u32,
	pub indices_count: u32,
	pub data_offset: u32,
	pub format: Format,
}

impl IndexBuffer {
	fn read<R>(buf: &mut R, offset: u32) -> Result<IndexBuffer>
	where
		R: Read + Seek,
	{
		buf.enter(offset, INDEX_BUFFER_SIZE)?;

		let indices_count = buf.read_u32::<LE>()?;
		let data_offset = buf.read_u32::<LE>()?;
		buf.seek(SeekFrom::Start(offset as u64 + 0x0C))?;
		let format: Format = buf.read_code_i32()?;

		Ok(IndexBuffer {
			offset: offset,
			indices_count: indices_count,
			data_offset: data_offset,
			format: format,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexBuffer {
	pub data_offset: u32,
	pub data_size: u32,
	pub flags: u32,
}

impl VertexBuffer {
	fn read<R>(buf: &mut R, offset: u32) -> Result<VertexBuffer>
	where
		R: Read + Seek,
	{
		buf.enter(offset, VERTEX_BUFFER_SIZE)?;

		let data_offset = buf.read_u32::<LE>()?;
		buf.seek(SeekFrom::Start(offset as u64 + 0x08))?;
		let data_size = buf.read_u32::<LE>()?;
		let flags = buf.read_u32::<LE>()?;

		Ok(VertexBuffer {
			data_offset: data_offset,
			data_size: data_size,
			flags: flags,
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
	/// Position of the mesh in the legacy buffer
	pub offset: u32,
	pub transform: Mat4,
	pub primitive_type: PrimitiveType,
	pub base_vertex_index: i32,
	pub start_index: u32,
	pub vertices_count: u32,
	pub min_vertex_index: u32,
	pub primitives_count: u32,
	pub vertex_descriptors_count: u8,
	pub instance_count: u8,
	pub vertex_buffers_count: u8,
	pub flags: u8,
}

impl Mesh {
	fn read<R>(buf: &mut R, offset: u32) -> Result<Mesh>
	where
		R: Read + Seek,
	{
		buf.enter(offset, MESH_SIZE)?;

		let transform = buf.read_mat4_le()?;
		let primitive_type: PrimitiveType = buf.read_code_i32()?;
		let base_vertex_index = buf.read_i32::<LE>()?;
		let start_index = buf.read_u32::<LE>()?;
		let vertices_count = buf.read_u32::<LE>()?;
		let min_vertex_index = buf.read_u32::<LE>()?;
		let primitives_count = buf.read_u32::<LE>()?;

		buf.seek(SeekFrom::Start(offset as u64 + 0x5C))?;
		let vertex_descriptors_count = buf.read_u8()?;
		let instance_count = buf.read_u8()?;
		let vertex_buffers_count = buf.read_u8()?;
		let flags = buf.read_u8()?;

		Ok(Mesh {
			offset: offset,
			transform: transform,
			primitive_type: primitive_type,
			base_vertex_index: base_vertex_index,
			start_index: start_index,
			vertices_count: vertices_count,
			min_vertex_index: min_vertex_index,
			primitives_count: primitives_count,
			vertex_descriptors_count: vertex_descriptors_count,
			instance_count: instance_count,
			vertex_buffers_count: vertex_buffers_count,
			flags: flags,
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Renderable {
	pub bounding_sphere: Vec4,
	pub version: u16,
	pub flags: u16,
	pub index_buffer: IndexBuffer,
	pub vertex_buffer: VertexBuffer,
	pub meshes: Vec<Mesh>,
}

impl Renderable {
	pub fn read<R>(buf: &mut R) -> Result<Renderable>
	where
		R: Read + Seek,
	{
		buf.enter(0, HEADER_SIZE)?;

		let bounding_sphere = buf.read_vec4_le()?;
		let version = buf.read_u16::<LE>()?;
		let meshes_count = buf.read_u16::<LE>()?;
		let meshes_offset = buf.read_u32::<LE>()?;

		buf.seek(SeekFrom::Start(0x1C))?;
		let flags = buf.read_u16::<LE>()?;

		buf.seek(SeekFrom::Start(0x20))?;
		let index_buffer_offset = buf.read_u32::<LE>()?;
		let vertex_buffer_offset = buf.read_u32::<LE>()?;

		let index_buffer = IndexBuffer::read(buf, index_buffer_offset)?;
		let vertex_buffer = VertexBuffer::read(buf, vertex_buffer_offset)?;

		let offsets = buf.read_offset_table(meshes_offset, meshes_count as usize)?;
		let mut meshes = Vec::with_capacity(offsets.len());
		for offset in offsets {
			meshes.push(Mesh::read(buf, offset)?);
		}

		Ok(Renderable {
			bounding_sphere: bounding_sphere,
			version: version,
			flags: flags,
			index_buffer: index_buffer,
			vertex_buffer: vertex_buffer,
			meshes: meshes,
		})
	}
}
