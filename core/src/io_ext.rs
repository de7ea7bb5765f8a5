use byteorder::{
	LE,
	ReadBytesExt,
	WriteBytesExt
};

use std::io::{
	Read,
	Result,
	Seek,
	SeekFrom,
	Write
};

use ultraviolet::{
	mat::Mat4,
	vec::Vec4
};

use crate::{
	error::TranscodeError,
	remap::Coded
};

pub trait ReadBinExt: Read {
	/// Reads a little endian 4D vector
	#[inline]
	fn read_vec4_le(&mut self) -> Result<Vec4> {
		let x = self.read_f32::<LE>()?;
		let y = self.read_f32::<LE>()?;
		let z = self.read_f32::<LE>()?;
		let w = self.read_f32::<LE>()?;

		Ok(Vec4::new(x, y, z, w))
	}

	/// Reads a little endian 4x4 matrix stored as 16 floats, one column after another
	#[inline]
	fn read_mat4_le(&mut self) -> Result<Mat4> {
		let c0 = self.read_vec4_le()?;
		let c1 = self.read_vec4_le()?;
		let c2 = self.read_vec4_le()?;
		let c3 = self.read_vec4_le()?;

		Ok(Mat4::new(c0, c1, c2, c3))
	}
}

impl<R> ReadBinExt for R
where
	R: Read + ?Sized,
{
}

/// Bounds-checked navigation over a legacy blob. Every section is entered with its full size so the
/// reads inside it cannot run off the end of the buffer.
pub trait SectionExt: Read + Seek {
	/// Moves to `offset` after checking that `size` bytes are available there
	fn enter(&mut self, offset: u32, size: u32) -> std::result::Result<(), TranscodeError> {
		let len = self.seek(SeekFrom::End(0))?;
		let end = offset as u64 + size as u64;

		if end > len {
			return Err(TranscodeError::malformed(offset as u64,
				format!("section of {:#x} bytes runs past the end of a {:#x} byte buffer", size, len)));
		}

		self.seek(SeekFrom::Start(offset as u64))?;
		Ok(())
	}

	/// Reads an `i32` code and checks it against the domain of `E`
	fn read_code_i32<E>(&mut self) -> std::result::Result<E, TranscodeError>
	where
		E: Coded,
	{
		let at = self.stream_position()?;
		let raw = self.read_i32::<LE>()?;
		decode_code(at, raw as i64)
	}

	/// Reads an `i8` code and checks it against the domain of `E`
	fn read_code_i8<E>(&mut self) -> std::result::Result<E, TranscodeError>
	where
		E: Coded,
	{
		let at = self.stream_position()?;
		let raw = self.read_i8()?;
		decode_code(at, raw as i64)
	}

	/// Reads a table of `count` absolute `u32` offsets starting at `offset`
	fn read_offset_table(&mut self, offset: u32, count: usize) -> std::result::Result<Vec<u32>, TranscodeError> {
		self.enter(offset, (count * 4) as u32)?;

		let mut offsets = Vec::with_capacity(count);
		for _ in 0..count {
			offsets.push(self.read_u32::<LE>()?);
		}

		Ok(offsets)
	}
}

impl<R> SectionExt for R
where
	R: Read + Seek + ?Sized,
{
}

/// Checks a raw value read at `at` against the domain of `E`
pub fn decode_code<E>(at: u64, raw: i64) -> std::result::Result<E, TranscodeError>
where
	E: Coded,
{
	E::from_raw(raw).ok_or_else(|| TranscodeError::malformed(at, format!("{} is not a valid {}", raw, E::NAME)))
}

pub trait WriteBinExt: Write {
	/// Writes a little endian 4D vector
	#[inline]
	fn write_vec4_le(&mut self, v: Vec4) -> Result<()> {
		self.write_f32::<LE>(v.x)?;
		self.write_f32::<LE>(v.y)?;
		self.write_f32::<LE>(v.z)?;
		self.write_f32::<LE>(v.w)
	}

	/// Writes a little endian 4x4 matrix, one column after another
	#[inline]
	fn write_mat4_le(&mut self, m: &Mat4) -> Result<()> {
		for col in m.cols.iter() {
			self.write_vec4_le(*col)?;
		}

		Ok(())
	}

	/// Writes a coded value as `i32`
	#[inline]
	fn write_code_i32<E>(&mut self, code: E) -> Result<()>
	where
		E: Coded,
	{
		self.write_i32::<LE>(code.raw() as i32)
	}

	/// Writes a coded value as `i8`
	#[inline]
	fn write_code_i8<E>(&mut self, code: E) -> Result<()>
	where
		E: Coded,
	{
		self.write_i8(code.raw() as i8)
	}
}

impl<W> WriteBinExt for W
where
	W: Write + ?Sized,
{
}
