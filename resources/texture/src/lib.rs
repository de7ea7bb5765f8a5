pub mod legacy;
pub mod modern;

use std::io::Cursor;

use restx_core::{
	layout::Layout,
	legacy::Format as LegacyFormat,
	modern::{
		Format,
		Usage
	},
	reloc::Relocations,
	remap::RemapTable,
	schema::ResourceSchema,
	Result
};

pub const TYPE_TAG: u32 = 0;

pub static TEXTURE_TYPES: RemapTable<legacy::TextureType, modern::TextureType> = RemapTable::new("texture type", &[
	(legacy::TextureType::Texture, Some(modern::TextureType::Texture2D)),
	(legacy::TextureType::CubeTexture, Some(modern::TextureType::CubeTexture)),
	(legacy::TextureType::VolumeTexture, Some(modern::TextureType::Texture3D)),
]);

pub static PIXEL_FORMATS: RemapTable<LegacyFormat, Format> = RemapTable::new("pixel format", &[
	(LegacyFormat::Unknown, Some(Format::Unknown)),
	(LegacyFormat::R8G8B8, None),
	(LegacyFormat::A8R8G8B8, Some(Format::R8G8B8A8Unorm)),
	(LegacyFormat::X8R8G8B8, Some(Format::B8G8R8X8Unorm)),
	(LegacyFormat::R5G6B5, Some(Format::B5G6R5Unorm)),
	(LegacyFormat::X1R5G5B5, None),
	(LegacyFormat::A1R5G5B5, Some(Format::B5G5R5A1Unorm)),
	(LegacyFormat::A4R4G4B4, Some(Format::B4G4R4A4Unorm)),
	(LegacyFormat::R3G3B2, None),
	(LegacyFormat::A8, Some(Format::A8Unorm)),
	(LegacyFormat::A8R3G3B2, None),
	(LegacyFormat::X4R4G4B4, None),
	(LegacyFormat::A2B10G10R10, Some(Format::R10G10B10A2Unorm)),
	(LegacyFormat::A8B8G8R8, Some(Format::R8G8B8A8Unorm)),
	(LegacyFormat::X8B8G8R8, None),
	(LegacyFormat::G16R16, Some(Format::R16G16Unorm)),
	(LegacyFormat::A2R10G10B10, None),
	(LegacyFormat::A16B16G16R16, Some(Format::R16G16B16A16Unorm)),
	(LegacyFormat::A8P8, None),
	(LegacyFormat::P8, None),
	(LegacyFormat::L8, Some(Format::R8Unorm)),
	(LegacyFormat::A8L8, Some(Format::R8G8Unorm)),
	(LegacyFormat::A4L4, None),
	(LegacyFormat::V8U8, Some(Format::R8G8Snorm)),
	(LegacyFormat::L6V5U5, None),
	(LegacyFormat::X8L8V8U8, None),
	(LegacyFormat::Q8W8V8U8, Some(Format::R8G8B8A8Snorm)),
	(LegacyFormat::V16U16, Some(Format::R16G16Snorm)),
	(LegacyFormat::A2W10V10U10, None),
	(LegacyFormat::Uyvy, None),
	(LegacyFormat::R8G8B8G8, Some(Format::G8R8G8B8Unorm)),
	(LegacyFormat::Yuy2, None),
	(LegacyFormat::G8R8G8B8, Some(Format::R8G8B8G8Unorm)),
	(LegacyFormat::Dxt1, Some(Format::Bc1Unorm)),
	(LegacyFormat::Dxt2, Some(Format::Bc2Unorm)),
	(LegacyFormat::Dxt3, Some(Format::Bc2Unorm)),
	(LegacyFormat::Dxt4, Some(Format::Bc3Unorm)),
	(LegacyFormat::Dxt5, Some(Format::Bc3Unorm)),
	(LegacyFormat::D16Lockable, Some(Format::D16Unorm)),
	(LegacyFormat::D32, None),
	(LegacyFormat::D15S1, None),
	(LegacyFormat::D24S8, Some(Format::D24UnormS8Uint)),
	(LegacyFormat::D24X8, Some(Format::D24UnormS8Uint)),
	(LegacyFormat::D24X4S4, None),
	(LegacyFormat::D16, Some(Format::D16Unorm)),
	(LegacyFormat::L16, Some(Format::R16Unorm)),
	(LegacyFormat::D32FLockable, Some(Format::D32Float)),
	(LegacyFormat::D24FS8, None),
	(LegacyFormat::D32Lockable, None),
	(LegacyFormat::S8Lockable, None),
	(LegacyFormat::VertexData, None),
	(LegacyFormat::Index16, Some(Format::R16Uint)),
	(LegacyFormat::Index32, Some(Format::R32Uint)),
	(LegacyFormat::Q16W16V16U16, Some(Format::R16G16B16A16Snorm)),
	(LegacyFormat::Multi2Argb8, None),
	(LegacyFormat::R16F, Some(Format::R16Float)),
	(LegacyFormat::G16R16F, Some(Format::R16G16Float)),
	(LegacyFormat::A16B16G16R16F, Some(Format::R16G16B16A16Float)),
	(LegacyFormat::R32F, Some(Format::R32Float)),
	(LegacyFormat::G32R32F, Some(Format::R32G32Float)),
	(LegacyFormat::A32B32G32R32F, Some(Format::R32G32B32A32Float)),
	(LegacyFormat::CxV8U8, None),
	(LegacyFormat::A1, None),
	(LegacyFormat::A2B10G10R10XrBias, None),
	(LegacyFormat::BinaryBuffer, None),
]);

/// Texture descriptor schema
pub struct TextureSchema;

impl ResourceSchema for TextureSchema {
	const TYPE_TAG: u32 = TYPE_TAG;
	const NAME: &'static str = "Texture";

	type Legacy = legacy::Texture;
	type Modern = modern::Texture;

	fn decode(data: &[u8]) -> Result<legacy::Texture> {
		legacy::Texture::read(&mut Cursor::new(data))
	}

	fn transform(tex: &legacy::Texture) -> Result<modern::Texture> {
		let ty = TEXTURE_TYPES.remap(tex.ty)?;

		// cube faces are array slices in the modern runtime
		let (depth, count) = match ty {
			modern::TextureType::CubeTexture => (0, 6),
			modern::TextureType::Texture3D => (tex.depth.max(1) as u16, 1),
			_ => (1, 1),
		};

		Ok(modern::Texture {
			usage: Usage::Default,
			ty: ty,
			format: PIXEL_FORMATS.remap(tex.format)?,
			width: tex.width,
			height: tex.height,
			depth: depth,
			count: count,
			mip_levels: tex.mip_levels,
		})
	}

	fn encode(tex: &modern::Texture, layout: &mut Layout, _relocs: &mut Relocations) -> Result<()> {
		tex.write(layout)
	}
}
