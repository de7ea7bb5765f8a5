use byteorder::{
	LE,
	WriteBytesExt
};

use std::io::{
	Cursor,
	Result,
	Seek,
	SeekFrom,
	Write
};

/// A run of `u32` offset fields reserved ahead of the sections they point to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slots {
	pub base: u64,
	pub count: usize,
}

impl Slots {
	/// Absolute offset of slot `i`
	pub fn slot(&self, i: usize) -> u64 {
		debug_assert!(i < self.count, "slot {} out of {}", i, self.count);
		self.base + (i as u64) * 4
	}
}

/// Forward-only writer for a modern blob.
///
/// Section offsets are written as placeholders first and backpatched once the section lands, so the
/// blob is produced in a single pass without knowing its final size.
#[derive(Clone, Debug, Default)]
pub struct Layout {
	cur: Cursor<Vec<u8>>,
}

impl Layout {
	pub fn new() -> Layout {
		Layout {
			cur: Cursor::new(vec![]),
		}
	}

	/// Current write position
	pub fn tell(&self) -> u64 {
		self.cur.position()
	}

	/// Moves the write position. Seeking past the end never truncates what was already written; the
	/// gap is zero-filled by the next write or by [`Layout::finish`].
	pub fn seek_to(&mut self, offset: u64) {
		self.cur.set_position(offset);
	}

	/// Advances to the next multiple of `boundary`, zero-filling the gap, and returns it
	pub fn align(&mut self, boundary: u64) -> Result<u64> {
		let pos = self.tell();
		let aligned = align_offset(pos, boundary);

		self.fill_to(aligned)?;
		Ok(aligned)
	}

	/// Writes `count` zeroed offset fields at the current position
	pub fn reserve_header(&mut self, count: usize) -> Result<Slots> {
		let base = self.tell();

		for _ in 0..count {
			self.write_u32::<LE>(0)?;
		}

		Ok(Slots {
			base: base,
			count: count,
		})
	}

	/// Overwrites the `u32` at `offset` and returns to the position held before the call
	pub fn backpatch(&mut self, offset: u64, value: u32) -> Result<()> {
		let pos = self.tell();

		self.seek_to(offset);
		let res = self.write_u32::<LE>(value);
		self.seek_to(pos);

		res
	}

	/// Writes zeros up to `offset` if the buffer is shorter, then moves there
	pub fn fill_to(&mut self, offset: u64) -> Result<()> {
		let len = self.cur.get_ref().len() as u64;
		if len < offset {
			self.cur.get_mut().resize(offset as usize, 0);
		}

		self.seek_to(offset);
		Ok(())
	}

	/// Writes `n` zero bytes
	pub fn pad(&mut self, n: usize) -> Result<()> {
		self.write_all(&vec![0; n])
	}

	/// Finishes the blob. A trailing seek past the end is materialized as zeros.
	pub fn finish(mut self) -> Vec<u8> {
		let pos = self.tell() as usize;
		let mut data = std::mem::take(self.cur.get_mut());

		if data.len() < pos {
			data.resize(pos, 0);
		}

		data
	}
}

impl Write for Layout {
	fn write(&mut self, buf: &[u8]) -> Result<usize> {
		self.cur.write(buf)
	}

	fn flush(&mut self) -> Result<()> {
		Ok(())
	}
}

impl Seek for Layout {
	fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
		self.cur.seek(pos)
	}
}

/// Rounds `offset` up to a multiple of `boundary`
pub const fn align_offset(offset: u64, boundary: u64) -> u64 {
	if boundary <= 1 {
		return offset;
	}

	(offset + boundary - 1) / boundary * boundary
}
