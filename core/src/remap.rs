use std::fmt::Debug;

use tracing::debug;

use crate::error::{
	Result,
	TranscodeError
};

/// A closed set of raw codes stored in a resource blob. Implemented through [`code_enum!`](crate::code_enum).
pub trait Coded: Copy + Debug + PartialEq + 'static {
	/// Every member of the domain, in declaration order
	const ALL: &'static [Self];
	const NAME: &'static str;

	fn raw(self) -> i64;
	fn from_raw(raw: i64) -> Option<Self>;
}

/// Static mapping from a legacy coded value to its modern counterpart.
///
/// An entry of `(code, None)` records that `code` is known to have no modern equivalent. A code that
/// has no entry at all is unspecified. Either way [`RemapTable::remap`] refuses it, since later stages
/// derive buffer sizes from these values and a silent default would corrupt the output.
#[derive(Debug)]
pub struct RemapTable<L: 'static, M: 'static> {
	name: &'static str,
	entries: &'static [(L, Option<M>)],
}

impl<L, M> RemapTable<L, M>
where
	L: Coded,
	M: Copy,
{
	pub const fn new(name: &'static str, entries: &'static [(L, Option<M>)]) -> RemapTable<L, M> {
		RemapTable {
			name: name,
			entries: entries,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Looks up the modern value for `legacy`
	pub fn remap(&self, legacy: L) -> Result<M> {
		match self.entries.iter().find(|(l, _)| *l == legacy) {
			Some((_, Some(modern))) => Ok(*modern),
			Some((_, None)) => {
				debug!(table = self.name, value = ?legacy, "no modern equivalent");
				Err(self.unsupported(legacy))
			},
			None => {
				debug!(table = self.name, value = ?legacy, "unspecified legacy value");
				Err(self.unsupported(legacy))
			},
		}
	}

	/// Returns true if `legacy` has a modern value
	pub fn is_mapped(&self, legacy: L) -> bool {
		self.entries.iter().any(|(l, m)| *l == legacy && m.is_some())
	}

	/// Lists the legacy codes the table neither maps nor declares unsupported
	pub fn audit(&self) -> Vec<L> {
		L::ALL.iter()
			.filter(|l| !self.entries.iter().any(|(e, _)| e == *l))
			.copied()
			.collect()
	}

	/// Lists the legacy codes that appear in more than one entry
	pub fn duplicates(&self) -> Vec<L> {
		let mut dups = vec![];

		for (i, (l, _)) in self.entries.iter().enumerate() {
			if self.entries[..i].iter().any(|(e, _)| e == l) && !dups.contains(l) {
				dups.push(*l);
			}
		}

		dups
	}

	fn unsupported(&self, legacy: L) -> TranscodeError {
		TranscodeError::UnsupportedValue {
			table: self.name,
			value: format!("{:?} ({:#x})", legacy, legacy.raw()),
		}
	}
}
