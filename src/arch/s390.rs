//! Relocation types for the IBM System/390 architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::S390`
pub enum S390Relocation {
    /// No relocation
    None,
    /// S + A (8-bit)
    Direct8,
    /// S + A (12-bit)
    Direct12,
    /// S + A (16-bit)
    Direct16,
    /// S + A (32-bit)
    Direct32,
    /// S + A (64-bit)
    Direct64,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
    GlobDat,
    /// S, sets GOT entry to the address of a PLT entry
    JumpSlot,
    /// B + A
    Relative,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl S390Relocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use S390Relocation::*;
        match value {
            0 => None,
            2 => Direct8,
            3 => Direct12,
            4 => Direct16,
            5 => Direct32,
            22 => Direct64,
            9 => Copy,
            10 => GlobDat,
            11 => JumpSlot,
            12 => Relative,
            other => Unknown(other),
        }
    }
}
