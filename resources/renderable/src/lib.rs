pub mod legacy;
pub mod modern;

use std::io::Cursor;

use restx_core::{
	layout::Layout,
	legacy::Format,
	modern::Usage,
	reloc::{
		RelocKind,
		Relocations
	},
	remap::RemapTable,
	schema::ResourceSchema,
	Result,
	TranscodeError
};

use legacy::PrimitiveType;
use modern::PrimitiveTopology;

pub const TYPE_TAG: u32 = 12;

/// Bytes per index. Only the two index formats have a size.
pub static INDEX_SIZES: RemapTable<Format, u32> = RemapTable::new("index size", &[
	(Format::Index16, Some(2)),
	(Format::Index32, Some(4)),
]);

pub static TOPOLOGIES: RemapTable<PrimitiveType, PrimitiveTopology> = RemapTable::new("primitive topology", &[
	(PrimitiveType::PointList, Some(PrimitiveTopology::PointList)),
	(PrimitiveType::LineList, Some(PrimitiveTopology::LineList)),
	(PrimitiveType::LineStrip, Some(PrimitiveTopology::LineStrip)),
	(PrimitiveType::TriangleList, Some(PrimitiveTopology::TriangleList)),
	(PrimitiveType::TriangleStrip, Some(PrimitiveTopology::TriangleStrip)),
	(PrimitiveType::TriangleFan, None),
]);

/// Indices drawn per primitive
pub static INDEX_MULTIPLIERS: RemapTable<PrimitiveType, u32> = RemapTable::new("indices per primitive", &[
	(PrimitiveType::PointList, Some(1)),
	(PrimitiveType::LineList, Some(2)),
	(PrimitiveType::LineStrip, Some(2)),
	(PrimitiveType::TriangleList, Some(3)),
	(PrimitiveType::TriangleStrip, Some(3)),
	(PrimitiveType::TriangleFan, None),
]);

fn transform_mesh(mesh: &legacy::Mesh) -> Result<modern::Mesh> {
	let multiplier = INDEX_MULTIPLIERS.remap(mesh.primitive_type)?;
	let indices_count = multiplier.checked_mul(mesh.primitives_count)
		.ok_or_else(|| TranscodeError::malformed(
			mesh.offset as u64 + legacy::PRIMITIVES_COUNT_OFFSET as u64,
			format!("{} primitives overflow the index count", mesh.primitives_count),
		))?;

	Ok(modern::Mesh {
		transform: mesh.transform,
		topology: TOPOLOGIES.remap(mesh.primitive_type)?,
		base_vertex_location: mesh.base_vertex_index,
		start_index_location: mesh.start_index,
		indices_count: indices_count,
		vertex_descriptors_count: mesh.vertex_descriptors_count,
		instance_count: mesh.instance_count,
		vertex_buffers_count: mesh.vertex_buffers_count,
		flags: mesh.flags,
	})
}

/// Renderable schema. Emits one material relocation per mesh followed by one relocation per vertex
/// descriptor of that mesh.
pub struct RenderableSchema;

impl ResourceSchema for RenderableSchema {
	const TYPE_TAG: u32 = TYPE_TAG;
	const NAME: &'static str = "Renderable";

	type Legacy = legacy::Renderable;
	type Modern = modern::Renderable;

	fn decode(data: &[u8]) -> Result<legacy::Renderable> {
		legacy::Renderable::read(&mut Cursor::new(data))
	}

	fn transform(renderable: &legacy::Renderable) -> Result<modern::Renderable> {
		let ib = &renderable.index_buffer;
		let index_size = INDEX_SIZES.remap(ib.format)?;
		let data_size = index_size.checked_mul(ib.indices_count)
			.ok_or_else(|| TranscodeError::malformed(
				ib.offset as u64,
				format!("{} indices overflow the index buffer size", ib.indices_count),
			))?;

		let meshes = renderable.meshes.iter()
			.map(transform_mesh)
			.collect::<Result<Vec<_>>>()?;

		Ok(modern::Renderable {
			bounding_sphere: renderable.bounding_sphere,
			version: renderable.version,
			flags: renderable.flags,
			index_buffer: modern::IndexBuffer {
				usage: Usage::Default,
				data_offset: ib.data_offset,
				data_size: data_size,
				index_size: index_size,
			},
			vertex_buffer: modern::VertexBuffer {
				usage: Usage::Default,
				data_offset: renderable.vertex_buffer.data_offset,
				data_size: renderable.vertex_buffer.data_size,
			},
			meshes: meshes,
		})
	}

	fn encode(renderable: &modern::Renderable, layout: &mut Layout, relocs: &mut Relocations) -> Result<()> {
		renderable.write(layout, relocs)
	}

	fn expected_relocations(renderable: &modern::Renderable) -> Vec<RelocKind> {
		renderable.meshes.iter().flat_map(|m| m.relocations()).collect()
	}
}

#[cfg(test)]
mod tests {
	use byteorder::{
		LE,
		ReadBytesExt,
		WriteBytesExt
	};

	use restx_core::remap::Coded;

	use super::*;

	/// (primitive type, primitive count, vertex descriptors, vertex buffers)
	type MeshFields = (PrimitiveType, u32, u8, u8);

	const MESHES_OFFSET: usize = 0x30;
	const INDEX_BUFFER_OFFSET: usize = 0x40;
	const VERTEX_BUFFER_OFFSET: usize = 0x50;
	const FIRST_MESH: usize = 0x60;

	fn put_u32(buf: &mut Vec<u8>, at: usize, v: u32) {
		(&mut buf[at..at + 4]).write_u32::<LE>(v).unwrap();
	}

	fn get_u32(buf: &[u8], at: usize) -> u32 {
		(&buf[at..at + 4]).read_u32::<LE>().unwrap()
	}

	fn legacy_blob(index_format: Format, meshes: &[MeshFields]) -> Vec<u8> {
		let mut buf = vec![0; FIRST_MESH + meshes.len() * 0x60];

		for (i, f) in [0.0f32, 1.0, 2.0, 5.0].iter().enumerate() {
			(&mut buf[i * 4..i * 4 + 4]).write_f32::<LE>(*f).unwrap();
		}
		(&mut buf[0x10..0x12]).write_u16::<LE>(3).unwrap();
		(&mut buf[0x12..0x14]).write_u16::<LE>(meshes.len() as u16).unwrap();
		put_u32(&mut buf, 0x14, MESHES_OFFSET as u32);
		(&mut buf[0x1C..0x1E]).write_u16::<LE>(0x8001).unwrap();
		put_u32(&mut buf, 0x20, INDEX_BUFFER_OFFSET as u32);
		put_u32(&mut buf, 0x24, VERTEX_BUFFER_OFFSET as u32);

		put_u32(&mut buf, INDEX_BUFFER_OFFSET, 900);
		put_u32(&mut buf, INDEX_BUFFER_OFFSET + 0x04, 0x1000);
		put_u32(&mut buf, INDEX_BUFFER_OFFSET + 0x0C, index_format.raw() as u32);

		put_u32(&mut buf, VERTEX_BUFFER_OFFSET, 0x2000);
		put_u32(&mut buf, VERTEX_BUFFER_OFFSET + 0x08, 0x4800);
		put_u32(&mut buf, VERTEX_BUFFER_OFFSET + 0x0C, 1);

		for (i, (ty, prims, vds, vbs)) in meshes.iter().enumerate() {
			let at = FIRST_MESH + i * 0x60;
			put_u32(&mut buf, MESHES_OFFSET + i * 4, at as u32);

			// identity transform
			for d in 0..4 {
				(&mut buf[at + d * 20..at + d * 20 + 4]).write_f32::<LE>(1.0).unwrap();
			}
			put_u32(&mut buf, at + 0x40, ty.raw() as u32);
			put_u32(&mut buf, at + 0x44, 0);
			put_u32(&mut buf, at + 0x48, 30 * i as u32);
			put_u32(&mut buf, at + 0x4C, 12);
			put_u32(&mut buf, at + 0x54, *prims);
			buf[at + 0x5C] = *vds;
			buf[at + 0x5D] = 1;
			buf[at + 0x5E] = *vbs;
			buf[at + 0x5F] = 0x10;
		}

		buf
	}

	#[test]
	fn test_tables() {
		assert!(TOPOLOGIES.audit().is_empty());
		assert!(INDEX_MULTIPLIERS.audit().is_empty());
		assert!(INDEX_SIZES.is_mapped(Format::Index16));
		assert!(!INDEX_SIZES.is_mapped(Format::VertexData));
	}

	#[test]
	fn test_decode() {
		let data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleList, 10, 2, 1)]);
		let renderable = RenderableSchema::decode(&data).unwrap();

		assert_eq!(renderable.version, 3);
		assert_eq!(renderable.flags, 0x8001);
		assert_eq!(renderable.bounding_sphere.w, 5.0);
		assert_eq!(renderable.index_buffer.indices_count, 900);
		assert_eq!(renderable.index_buffer.format, Format::Index16);
		assert_eq!(renderable.vertex_buffer.data_size, 0x4800);
		assert_eq!(renderable.meshes.len(), 1);
		assert_eq!(renderable.meshes[0].primitives_count, 10);
		assert_eq!(renderable.meshes[0].vertex_descriptors_count, 2);
	}

	#[test]
	fn test_derived_counts() {
		let data = legacy_blob(Format::Index32, &[
			(PrimitiveType::TriangleList, 10, 1, 1),
			(PrimitiveType::LineStrip, 7, 1, 1),
			(PrimitiveType::PointList, 5, 1, 1),
		]);
		let renderable = RenderableSchema::transform(&RenderableSchema::decode(&data).unwrap()).unwrap();

		let counts: Vec<_> = renderable.meshes.iter().map(|m| m.indices_count).collect();
		assert_eq!(counts, vec![30, 14, 5]);
		assert_eq!(renderable.index_buffer.index_size, 4);
		assert_eq!(renderable.index_buffer.data_size, 3600);
		assert_eq!(renderable.meshes[1].topology, PrimitiveTopology::LineStrip);
	}

	#[test]
	fn test_encode_layout() {
		let data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleList, 10, 2, 1)]);
		let converted = RenderableSchema::convert(&data).unwrap();
		let out = &converted.data;

		assert_eq!(&out[..0x14], &data[..0x14]);
		assert_eq!(get_u32(out, 0x14), 0x30);
		assert_eq!(&out[0x1C..0x1E], &0x8001u16.to_le_bytes());
		assert_eq!(get_u32(out, 0x20), 0x34);
		assert_eq!(get_u32(out, 0x24), 0x4C);

		// index buffer descriptor
		assert_eq!(get_u32(out, 0x3C), 3);
		assert_eq!(get_u32(out, 0x40), 0x1000);
		assert_eq!(get_u32(out, 0x44), 1800);
		assert_eq!(get_u32(out, 0x48), 2);

		// vertex buffer descriptor
		assert_eq!(get_u32(out, 0x54), 2);
		assert_eq!(get_u32(out, 0x5C), 0x4800);

		let mesh = get_u32(out, 0x30) as usize;
		assert_eq!(mesh, 0x70);
		assert_eq!(get_u32(out, mesh + 0x40), PrimitiveTopology::TriangleList.raw() as u32);
		assert_eq!(get_u32(out, mesh + 0x4C), 30);
		assert_eq!(&out[mesh + 0x54..mesh + 0x58], &[2u8, 1, 1, 0x10]);
		assert_eq!(get_u32(out, mesh + 0x58), 0x34);
		assert_eq!(get_u32(out, mesh + 0x5C), 0x4C);
		assert_eq!(out.len(), mesh + 0x68);

		let relocs: Vec<_> = converted.relocations.iter().map(|r| (r.offset, r.kind)).collect();
		assert_eq!(relocs, vec![
			(0xC0, RelocKind::MeshMaterial),
			(0xD0, RelocKind::VertexDescriptor),
			(0xD4, RelocKind::VertexDescriptor),
		]);
	}

	#[test]
	fn test_mesh_alignment() {
		let data = legacy_blob(Format::Index16, &[
			(PrimitiveType::TriangleStrip, 4, 1, 2),
			(PrimitiveType::TriangleList, 8, 3, 1),
			(PrimitiveType::LineList, 2, 0, 1),
		]);
		let converted = RenderableSchema::convert(&data).unwrap();
		let out = &converted.data;

		let table = get_u32(out, 0x14) as usize;
		assert_eq!(table % 16, 0);

		let offsets: Vec<_> = (0..3).map(|i| get_u32(out, table + i * 4) as usize).collect();
		for offset in offsets.iter() {
			assert_eq!(offset % 16, 0);
		}
		assert!(offsets.windows(2).all(|w| w[0] < w[1]));

		let kinds: Vec<_> = converted.relocations.iter().map(|r| r.kind).collect();
		assert_eq!(kinds, vec![
			RelocKind::MeshMaterial,
			RelocKind::VertexDescriptor,
			RelocKind::MeshMaterial,
			RelocKind::VertexDescriptor,
			RelocKind::VertexDescriptor,
			RelocKind::VertexDescriptor,
			RelocKind::MeshMaterial,
		]);

		// each material slot sits right after the index count of its mesh
		let materials: Vec<_> = converted.relocations.iter()
			.filter(|r| r.kind == RelocKind::MeshMaterial)
			.map(|r| r.offset as usize)
			.collect();
		let expected: Vec<_> = offsets.iter().map(|o| o + 0x50).collect();
		assert_eq!(materials, expected);
	}

	#[test]
	fn test_no_meshes() {
		let data = legacy_blob(Format::Index16, &[]);
		let converted = RenderableSchema::convert(&data).unwrap();

		assert!(converted.relocations.is_empty());
		assert_eq!(get_u32(&converted.data, 0x20), 0x30);
		assert_eq!(converted.data.len(), 0x30 + 0x18 + 0x1C);
	}

	#[test]
	fn test_bad_mesh_offset() {
		let mut data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleList, 1, 1, 1)]);
		put_u32(&mut data, MESHES_OFFSET, 0x1000);

		match RenderableSchema::convert(&data) {
			Err(TranscodeError::MalformedInput { offset, .. }) => assert_eq!(offset, 0x1000),
			other => panic!("expected malformed input, got {:?}", other),
		}
	}

	#[test]
	fn test_bad_primitive_type() {
		let mut data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleList, 1, 1, 1)]);
		put_u32(&mut data, FIRST_MESH + 0x40, 9);

		match RenderableSchema::decode(&data) {
			Err(TranscodeError::MalformedInput { offset, .. }) => assert_eq!(offset, (FIRST_MESH + 0x40) as u64),
			other => panic!("expected malformed input, got {:?}", other),
		}
	}

	#[test]
	fn test_index_count_overflow() {
		let data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleList, 0x6000_0000, 1, 1)]);

		match RenderableSchema::convert(&data) {
			Err(TranscodeError::MalformedInput { offset, .. }) => assert_eq!(offset, (FIRST_MESH + 0x54) as u64),
			other => panic!("expected malformed input, got {:?}", other),
		}
	}

	#[test]
	fn test_index_buffer_size_overflow() {
		let mut data = legacy_blob(Format::Index32, &[(PrimitiveType::TriangleList, 10, 1, 1)]);
		put_u32(&mut data, INDEX_BUFFER_OFFSET, 0x4000_0001);

		match RenderableSchema::convert(&data) {
			Err(TranscodeError::MalformedInput { offset, .. }) => assert_eq!(offset, INDEX_BUFFER_OFFSET as u64),
			other => panic!("expected malformed input, got {:?}", other),
		}

		// largest count that still fits
		put_u32(&mut data, INDEX_BUFFER_OFFSET, 0x3FFF_FFFF);
		let renderable = RenderableSchema::transform(&RenderableSchema::decode(&data).unwrap()).unwrap();
		assert_eq!(renderable.index_buffer.data_size, 0xFFFF_FFFC);
	}

	#[test]
	fn test_deterministic() {
		let data = legacy_blob(Format::Index16, &[
			(PrimitiveType::TriangleStrip, 4, 1, 2),
			(PrimitiveType::TriangleList, 8, 3, 1),
		]);
		assert_eq!(RenderableSchema::convert(&data).unwrap(), RenderableSchema::convert(&data).unwrap());
	}

	#[test]
	fn test_unsupported() {
		let data = legacy_blob(Format::Index16, &[(PrimitiveType::TriangleFan, 4, 1, 1)]);
		assert!(matches!(RenderableSchema::convert(&data),
			Err(TranscodeError::UnsupportedValue { table: "indices per primitive", .. })));

		let data = legacy_blob(Format::D16, &[(PrimitiveType::TriangleList, 4, 1, 1)]);
		assert!(matches!(RenderableSchema::convert(&data),
			Err(TranscodeError::UnsupportedValue { table: "index size", .. })));
	}
}
