//! Code domains shared by more than one legacy resource kind

use crate::{
	code_enum,
	rtag4
};

code_enum! {
	/// Surface, vertex and index formats, including FourCC codes
	pub enum Format {
		Unknown = 0,
		R8G8B8 = 20,
		A8R8G8B8 = 21,
		X8R8G8B8 = 22,
		R5G6B5 = 23,
		X1R5G5B5 = 24,
		A1R5G5B5 = 25,
		A4R4G4B4 = 26,
		R3G3B2 = 27,
		A8 = 28,
		A8R3G3B2 = 29,
		X4R4G4B4 = 30,
		A2B10G10R10 = 31,
		A8B8G8R8 = 32,
		X8B8G8R8 = 33,
		G16R16 = 34,
		A2R10G10B10 = 35,
		A16B16G16R16 = 36,
		A8P8 = 40,
		P8 = 41,
		L8 = 50,
		A8L8 = 51,
		A4L4 = 52,
		V8U8 = 60,
		L6V5U5 = 61,
		X8L8V8U8 = 62,
		Q8W8V8U8 = 63,
		V16U16 = 64,
		A2W10V10U10 = 67,
		Uyvy = rtag4!(b"UYVY"),
		R8G8B8G8 = rtag4!(b"RGBG"),
		Yuy2 = rtag4!(b"YUY2"),
		G8R8G8B8 = rtag4!(b"GRGB"),
		Dxt1 = rtag4!(b"DXT1"),
		Dxt2 = rtag4!(b"DXT2"),
		Dxt3 = rtag4!(b"DXT3"),
		Dxt4 = rtag4!(b"DXT4"),
		Dxt5 = rtag4!(b"DXT5"),
		D16Lockable = 70,
		D32 = 71,
		D15S1 = 73,
		D24S8 = 75,
		D24X8 = 77,
		D24X4S4 = 79,
		D16 = 80,
		L16 = 81,
		D32FLockable = 82,
		D24FS8 = 83,
		D32Lockable = 84,
		S8Lockable = 85,
		VertexData = 100,
		Index16 = 101,
		Index32 = 102,
		Q16W16V16U16 = 110,
		Multi2Argb8 = rtag4!(b"MET1"),
		R16F = 111,
		G16R16F = 112,
		A16B16G16R16F = 113,
		R32F = 114,
		G32R32F = 115,
		A32B32G32R32F = 116,
		CxV8U8 = 117,
		A1 = 118,
		A2B10G10R10XrBias = 119,
		BinaryBuffer = 199,
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
