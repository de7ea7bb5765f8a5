//! Code domains shared by more than one modern resource kind

use crate::code_enum;

code_enum! {
	/// Resource formats of the modern runtime
	pub enum Format {
		Unknown = 0,
		R32G32B32A32Float = 2,
		R32G32B32Float = 6,
		R16G16B16A16Float = 10,
		R16G16B16A16Unorm = 11,
		R16G16B16A16Uint = 12,
		R16G16B16A16Snorm = 13,
		R16G16B16A16Sint = 14,
		R32G32Float = 16,
		R10G10B10A2Unorm = 24,
		R8G8B8A8Unorm = 28,
		R8G8B8A8Uint = 30,
		R8G8B8A8Snorm = 31,
		R16G16Float = 34,
		R16G16Unorm = 35,
		R16G16Uint = 36,
		R16G16Snorm = 37,
		R16G16Sint = 38,
		D32Float = 40,
		R32Float = 41,
		R32Uint = 42,
		D24UnormS8Uint = 45,
		R8G8Unorm = 49,
		R8G8Snorm = 51,
		R16Float = 54,
		D16Unorm = 55,
		R16Unorm = 56,
		R16Uint = 57,
		R8Unorm = 61,
		A8Unorm = 65,
		R8G8B8G8Unorm = 68,
		G8R8G8B8Unorm = 69,
		Bc1Unorm = 71,
		Bc2Unorm = 74,
		Bc3Unorm = 77,
		B5G6R5Unorm = 85,
		B5G5R5A1Unorm = 86,
		B8G8R8A8Unorm = 87,
		B8G8R8X8Unorm = 88,
		B4G4R4A4Unorm = 115,
	}
}

code_enum! {
	pub enum ComparisonFunc {
		Never = 1,
		Less = 2,
		Equal = 3,
		LessEqual = 4,
		Greater = 5,
		NotEqual = 6,
		GreaterEqual = 7,
		Always = 8,
	}
}

code_enum! {
	pub enum Usage {
		Default = 0,
		Immutable = 1,
		Dynamic = 2,
		Staging = 3,
	}
}
