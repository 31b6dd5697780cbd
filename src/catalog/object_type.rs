//! The `e_type` catalog: numeric object file types to symbolic names

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The kind of an ELF object file, as recorded in `e_type`
pub enum ObjectType {
    /// No file type
    None = 0,
    /// Relocatable file
    Rel = 1,
    /// Executable file
    Exec = 2,
    /// Shared object file
    Dyn = 3,
    /// Core file
    Core = 4,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl ObjectType {
    /// Decode a raw `e_type` value, folding unrecognized codes to [`ObjectType::Unknown`]
    pub fn from_raw(value: u16) -> Self {
        FromPrimitive::from_u16(value).unwrap_or(ObjectType::Unknown)
    }
}
