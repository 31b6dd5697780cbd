//! The `p_flags` catalog, expressed as a bitmask

use bitflags::bitflags;

bitflags! {
    /// Permission flags for a loadable segment
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ProgramFlags: u32 {
        /// Executable
        const EXECUTE = 0x1;
        /// Writable
        const WRITE = 0x2;
        /// Readable
        const READ = 0x4;
    }
}

impl ProgramFlags {
    /// Decode a raw `p_flags` value, preserving OS/processor-specific bits
    pub fn from_raw(value: u32) -> Self {
        Self::from_bits_retain(value)
    }
}
