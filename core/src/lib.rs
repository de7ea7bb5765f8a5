#[cfg(feature = "bit_ext")]
pub mod bit_ext;

#[cfg(feature = "io_ext")]
pub mod io_ext;

pub mod error;
pub mod layout;
pub mod legacy;
pub mod modern;
pub mod reloc;
pub mod remap;
pub mod schema;

pub use error::{
	Result,
	TranscodeError
};

/// Converts a 4-byte string into a 32-bit little endian integer.
/// Byte strings longer than 4 bytes are truncated.
#[macro_export]
macro_rules! rtag4 {
	($b4: literal) => {
		u32::from_le_bytes([$b4[0], $b4[1], $b4[2], $b4[3]])
	}
}

/// Declares a coded enumeration: a fieldless enum whose variants stand for raw integers stored in a
/// resource blob. Generates [`remap::Coded`] so the enum can be decoded, remapped and audited.
#[macro_export]
macro_rules! code_enum {
	(
		$(#[$meta: meta])*
		$vis: vis enum $name: ident {
			$($variant: ident = $value: expr),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
		$vis enum $name {
			$($variant),+
		}

		impl $crate::remap::Coded for $name {
			const ALL: &'static [$name] = &[$($name::$variant),+];
			const NAME: &'static str = stringify!($name);

			fn raw(self) -> i64 {
				match self {
					$($name::$variant => ($value) as i64),+
				}
			}

			fn from_raw(raw: i64) -> Option<$name> {
				$(
					if raw == ($value) as i64 {
						return Some($name::$variant);
					}
				)+

				None
			}
		}
	}
}
