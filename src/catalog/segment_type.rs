//! The `p_type` catalog: numeric segment (program header) types to symbolic names

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The kind of segment described by a program header entry
pub enum SegmentType {
    /// Unused entry
    Null = 0,
    /// Loadable segment
    Load = 1,
    /// Dynamic linking information
    Dynamic = 2,
    /// Path to an interpreter to load
    Interp = 3,
    /// Auxiliary information
    Note = 4,
    /// Reserved, unspecified semantics
    ShLib = 5,
    /// The program header table itself
    Phdr = 6,
    /// Thread-local storage template
    Tls = 7,
    /// GNU eh_frame_hdr segment
    GnuEhFrame = 0x6474e550,
    /// GNU stack executability
    GnuStack = 0x6474e551,
    /// GNU read-only after relocation
    GnuRelro = 0x6474e552,
    /// GNU property notes
    GnuProperty = 0x6474e553,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl SegmentType {
    /// Decode a raw `p_type` value, folding unrecognized codes to [`SegmentType::Unknown`]
    pub fn from_raw(value: u32) -> Self {
        FromPrimitive::from_u32(value).unwrap_or(SegmentType::Unknown)
    }
}
