use byteorder::{
	LE,
	WriteBytesExt
};

use ultraviolet::{
	mat::Mat4,
	vec::Vec4
};

use restx_core::{
	code_enum,
	io_ext::WriteBinExt,
	layout::Layout,
	modern::Usage,
	reloc::{
		RelocKind,
		Relocations
	},
	Result
};

pub const SECTION_ALIGNMENT: u64 = 0x10;

code_enum! {
	pub enum PrimitiveTopology {
		PointList = 1,
		LineList = 2,
		LineStrip = 3,
		TriangleList = 4,
		TriangleStrip = 5,
	}
}

code_enum! {
	pub enum BufferType {
		VertexBuffer = 2,
		IndexBuffer = 3,
		ConstantBuffer = 4,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexBuffer {
	pub usage: Usage,
	pub data_offset: u32,
	pub data_size: u32,
	pub index_size: u32,
}

impl IndexBuffer {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u32::<LE>(0)?;
		buf.write_code_i32(self.usage)?;
		buf.write_code_i32(BufferType::IndexBuffer)?;
		buf.write_u32::<LE>(self.data_offset)?;
		buf.write_u32::<LE>(self.data_size)?;
		buf.write_u32::<LE>(self.index_size)?;

		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexBuffer {
	pub usage: Usage,
	pub data_offset: u32,
	pub data_size: u32,
}

impl VertexBuffer {
	fn write(&self, buf: &mut Layout) -> Result<()> {
		buf.write_u32::<LE>(0)?;
		buf.write_code_i32(self.usage)?;
		buf.write_code_i32(BufferType::VertexBuffer)?;
		buf.write_u32::<LE>(self.data_offset)?;
		buf.write_u32::<LE>(self.data_size)?;
		buf.write_u32::<LE>(0)?;
		buf.write_u32::<LE>(0)?;

		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
	pub transform: Mat4,
	pub topology: PrimitiveTopology,
	pub base_vertex_location: i32,
	pub start_index_location: u32,
	pub indices_count: u32,
	pub vertex_descriptors_count: u8,
	pub instance_count: u8,
	pub vertex_buffers_count: u8,
	pub flags: u8,
}

impl Mesh {
	/// Relocation kinds the mesh emits, in the order it emits them
	pub fn relocations(&self) -> impl Iterator<Item = RelocKind> {
		std::iter::once(RelocKind::MeshMaterial)
			.chain(std::iter::repeat(RelocKind::VertexDescriptor).take(self.vertex_descriptors_count as usize))
	}

	fn write(&self, buf: &mut Layout, relocs: &mut Relocations, index_buffer: u32, vertex_buffer: u32) -> Result<()> {
		buf.write_mat4_le(&self.transform)?;
		buf.write_code_i32(self.topology)?;
		buf.write_i32::<LE>(self.base_vertex_location)?;
		buf.write_u32::<LE>(self.start_index_location)?;
		buf.write_u32::<LE>(self.indices_count)?;

		relocs.mark(buf.tell(), RelocKind::MeshMaterial);
		buf.write_u32::<LE>(0)?;

		buf.write_u8(self.vertex_descriptors_count)?;
		buf.write_u8(self.instance_count)?;
		buf.write_u8(self.vertex_buffers_count)?;
		buf.write_u8(self.flags)?;

		buf.write_u32::<LE>(index_buffer)?;
		for _ in 0..self.vertex_buffers_count {
			buf.write_u32::<LE>(vertex_buffer)?;
		}

		for _ in 0..self.vertex_descriptors_count {
			relocs.mark(buf.tell(), RelocKind::VertexDescriptor);
			buf.write_u32::<LE>(0)?;
		}

		Ok(())
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
	pub fn write(&self, buf: &mut Layout, relocs: &mut Relocations) -> Result<()> {
		buf.write_vec4_le(self.bounding_sphere)?;
		buf.write_u16::<LE>(self.version)?;
		buf.write_u16::<LE>(self.meshes.len() as u16)?;
		let header = buf.reserve_header(2)?;
		buf.write_u16::<LE>(self.flags)?;
		buf.fill_to(0x20)?;
		let buffers = buf.reserve_header(2)?;

		let meshes_offset = buf.align(SECTION_ALIGNMENT)?;
		let mesh_slots = buf.reserve_header(self.meshes.len())?;

		let index_buffer_offset = buf.tell() as u32;
		self.index_buffer.write(buf)?;

		let vertex_buffer_offset = buf.tell() as u32;
		self.vertex_buffer.write(buf)?;

		for (i, mesh) in self.meshes.iter().enumerate() {
			let mesh_offset = buf.align(SECTION_ALIGNMENT)?;
			buf.backpatch(mesh_slots.slot(i), mesh_offset as u32)?;
			mesh.write(buf, relocs, index_buffer_offset, vertex_buffer_offset)?;
		}

		buf.backpatch(header.slot(0), meshes_offset as u32)?;
		buf.backpatch(buffers.slot(0), index_buffer_offset)?;
		buf.backpatch(buffers.slot(1), vertex_buffer_offset)?;

		Ok(())
	}
}
