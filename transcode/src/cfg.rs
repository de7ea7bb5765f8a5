use bitflags::bitflags;

bitflags! {
	/// Resource kinds a transcode run converts. Records of a disabled kind are left as they are.
	pub struct KindFlags: u32 {
		const TEXTURE = 1;
		const VERTEX_DESCRIPTOR = 2;
		const RENDERABLE = 4;
		const TEXTURE_STATE = 8;
		const MATERIAL_STATE = 16;
	}
}

impl Default for KindFlags {
	fn default() -> Self {
		KindFlags::all()
	}
}

/// What a batch does when one of its records fails
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BatchPolicy {
	/// Stop at the first failure
	Abort,
	/// Log the failure, leave the record untouched and carry on
	Skip,
}

impl Default for BatchPolicy {
	fn default() -> Self {
		BatchPolicy::Abort
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranscodeCfg {
	pub kinds: KindFlags,
	pub policy: BatchPolicy,
}
