//! Relocation types for the SPARC architecture (32-bit SPARC and SPARC V9)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::Sparc` or `Machine::SparcV9`
pub enum SparcRelocation {
    /// No relocation
    None,
    /// S + A (8-bit)
    Disp8,
    /// S + A (16-bit)
    Disp16,
    /// S + A (32-bit)
    Disp32,
    /// S + A (32-bit absolute)
    Wdisp30,
    /// S + A (22-bit PC-relative)
    Wdisp22,
    /// High 22 bits of S + A
    Hi22,
    /// 32-bit absolute
    Direct32,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
    GlobDat,
    /// S, sets GOT entry to the address of a PLT entry
    JumpSlot,
    /// B + A
    Relative,
    /// 64-bit absolute
    Direct64,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl SparcRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use SparcRelocation::*;
        match value {
            0 => None,
            1 => Disp8,
            2 => Disp16,
            3 => Disp32,
            4 => Wdisp30,
            5 => Wdisp22,
            6 => Hi22,
            11 => Direct32,
            19 => Copy,
            20 => GlobDat,
            21 => JumpSlot,
            22 => Relative,
            54 => Direct64,
            other => Unknown(other),
        }
    }
}
