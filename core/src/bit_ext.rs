use bitvec::prelude::*;

/// Position and width of a field inside a 32-bit word, counted from the lowest bit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BitField {
	pub offset: u32,
	pub width: u32,
}

impl BitField {
	pub const fn new(offset: u32, width: u32) -> BitField {
		BitField {
			offset: offset,
			width: width,
		}
	}
}

/// A fixed arrangement of fields sharing one word
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BitLayout {
	pub fields: &'static [BitField],
}

impl BitLayout {
	/// Builds a layout from consecutive widths, low bit first
	pub const fn packed<const N: usize>(widths: [u32; N]) -> [BitField; N] {
		let mut fields = [BitField::new(0, 0); N];
		let mut offset = 0;
		let mut i = 0;

		while i < N {
			fields[i] = BitField::new(offset, widths[i]);
			offset += widths[i];
			i += 1;
		}

		fields
	}

	/// Extracts every field of the layout from `word`
	pub fn unpack_all(&self, word: u32) -> Vec<u32> {
		self.fields.iter().map(|f| unpack(word, f.width, f.offset)).collect()
	}

	/// Places `values` into a fresh word, one per field. Missing trailing values are left zero.
	pub fn pack_all(&self, values: &[u32]) -> u32 {
		self.fields.iter().zip(values.iter())
			.fold(0, |word, (f, v)| pack_at(word, *v, f.width, f.offset))
	}
}

/// Packs `(value, width)` pairs one after another into a word, starting at bit 0
pub fn pack(fields: &[(u32, u32)]) -> u32 {
	let mut word = 0;
	let mut offset = 0;

	for (value, width) in fields.iter() {
		word = pack_at(word, *value, *width, offset);
		offset += *width;
	}

	word
}

/// Stores `value` into `width` bits of `word` starting at `offset`, returning the new word.
/// Bits of `value` above `width` are dropped.
pub fn pack_at(word: u32, value: u32, width: u32, offset: u32) -> u32 {
	if width == 0 {
		return word;
	}

	let mut word = word;
	let (start, end) = (offset as usize, (offset + width) as usize);
	word.view_bits_mut::<Lsb0>()[start..end].store_le(value);

	word
}

/// Reads `width` bits of `word` starting at `offset`
pub fn unpack(word: u32, width: u32, offset: u32) -> u32 {
	if width == 0 {
		return 0;
	}

	let (start, end) = (offset as usize, (offset + width) as usize);
	word.view_bits::<Lsb0>()[start..end].load_le::<u32>()
}
