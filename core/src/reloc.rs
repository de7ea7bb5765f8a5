/// What an outgoing relocation points at. The container correlates relocations with its import
/// entries by position, so each schema also exposes the kind sequence it is expected to produce.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RelocKind {
	/// Per-mesh reference to the material/vertex layout the mesh draws with
	MeshMaterial,
	/// One vertex descriptor slot of a mesh
	VertexDescriptor,
	/// Runtime sampler object trailing a texture state
	SamplerObject,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
	pub offset: u32,
	pub kind: RelocKind,
}

/// Ordered list of fields in a fresh blob that an external loader must resolve
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relocations {
	pending: Vec<Relocation>,
}

impl Relocations {
	pub fn new() -> Relocations {
		Relocations {
			pending: vec![],
		}
	}

	/// Records that the `u32` at `offset` is resolved externally
	pub fn mark(&mut self, offset: u64, kind: RelocKind) {
		self.pending.push(Relocation {
			offset: offset as u32,
			kind: kind,
		});
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Kinds in write order
	pub fn kinds(&self) -> Vec<RelocKind> {
		self.pending.iter().map(|r| r.kind).collect()
	}

	/// Returns the relocations in write order, leaving the list empty
	pub fn drain(&mut self) -> Vec<Relocation> {
		std::mem::take(&mut self.pending)
	}
}
