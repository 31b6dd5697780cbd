//! Relocation types for the 32-bit PowerPC architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::Ppc`
pub enum PpcRelocation {
    /// No relocation
    None,
    /// S + A
    Addr32,
    /// S + A (24-bit PC-relative)
    Addr24,
    /// S + A (16-bit)
    Addr16,
    /// High 16 bits of S + A
    Addr16Hi,
    /// Low 16 bits of S + A
    Addr16Lo,
    /// S + A - P (14-bit PC-relative)
    Addr14,
    /// S + A - P (24-bit PC-relative)
    Rel24,
    /// S + A - P (14-bit PC-relative)
    Rel14,
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

impl PpcRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use PpcRelocation::*;
        match value {
            0 => None,
            1 => Addr32,
            2 => Addr24,
            3 => Addr16,
            4 => Addr16Hi,
            5 => Addr16Lo,
            7 => Addr14,
            10 => Rel24,
            11 => Rel14,
            19 => Copy,
            20 => GlobDat,
            21 => JumpSlot,
            22 => Relative,
            other => Unknown(other),
        }
    }
}
