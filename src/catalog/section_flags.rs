//! The `sh_flags` catalog, expressed as a bitmask rather than a closed enum

use bitflags::bitflags;

bitflags! {
    /// Attribute flags for an ELF section, widened to 64 bits regardless of
    /// the file's class.
    ///
    /// A mask rather than a closed enum, since `sh_flags` bits outside this
    /// cataloged set are legal (OS/processor-specific ranges) rather than
    /// erroneous.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SectionFlags: u64 {
        /// Writable during process execution
        const WRITE = 0x1;
        /// Occupies memory during process execution
        const ALLOC = 0x2;
        /// Contains executable machine instructions
        const EXECINSTR = 0x4;
        /// May be merged to eliminate duplication
        const MERGE = 0x10;
        /// Contains null-terminated strings
        const STRINGS = 0x20;
        /// `sh_info` holds a section header table index
        const INFO_LINK = 0x40;
        /// Adds special ordering requirements for link editors
        const LINK_ORDER = 0x80;
        /// Requires OS-specific processing to avoid incorrect behavior
        const OS_NONCONFORMING = 0x100;
        /// Member of a section group
        const GROUP = 0x200;
        /// Holds thread-local storage
        const TLS = 0x400;
        /// Contains compressed data
        const COMPRESSED = 0x800;
    }
}

impl SectionFlags {
    /// Decode a raw `sh_flags` value. Bits outside the cataloged set are
    /// preserved rather than rejected, matching §9's "forward-compatibility"
    /// rationale for the rest of the catalogs.
    pub fn from_raw(value: u64) -> Self {
        Self::from_bits_retain(value)
    }
}
