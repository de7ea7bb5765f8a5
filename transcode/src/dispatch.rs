use tracing::{
	debug,
	info
};

use restx_core::{
	schema::{
		Converted,
		ResourceSchema
	},
	Result
};

use restx_materialstate::MaterialStateSchema;
use restx_renderable::RenderableSchema;
use restx_texture::TextureSchema;
use restx_texturestate::TextureStateSchema;
use restx_vertexdesc::VertexDescriptorSchema;

use crate::{
	cfg::TranscodeCfg,
	record::{
		ResourceKind,
		ResourceRecord
	}
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
	/// Buffer replaced with its modern layout
	Converted(ResourceKind),
	/// Kind disabled by the configuration, record untouched
	Filtered(ResourceKind),
	/// No schema for the tag, record untouched
	PassedThrough(u32),
}

/// Runs the schema for `kind` over a legacy buffer
pub fn convert(kind: ResourceKind, data: &[u8]) -> Result<Converted> {
	match kind {
		ResourceKind::Texture => TextureSchema::convert(data),
		ResourceKind::VertexDescriptor => VertexDescriptorSchema::convert(data),
		ResourceKind::Renderable => RenderableSchema::convert(data),
		ResourceKind::TextureState => TextureStateSchema::convert(data),
		ResourceKind::MaterialState => MaterialStateSchema::convert(data),
	}
}

/// Transcodes one record in place. On error the record is left exactly as it was.
pub fn transcode(record: &mut ResourceRecord, cfg: &TranscodeCfg) -> Result<Outcome> {
	let kind = match record.kind() {
		Some(kind) => kind,
		None => {
			debug!(id = record.id, tag = record.type_tag, "no schema for resource kind, passing through");
			return Ok(Outcome::PassedThrough(record.type_tag));
		},
	};

	if !cfg.kinds.contains(kind.flag()) {
		debug!(id = record.id, ?kind, "resource kind disabled");
		return Ok(Outcome::Filtered(kind));
	}

	let converted = convert(kind, &record.data)?;
	let (before, after) = (record.data.len(), converted.data.len());
	record.replace(converted)?;

	info!(id = record.id, ?kind, before, after, "transcoded");
	Ok(Outcome::Converted(kind))
}
