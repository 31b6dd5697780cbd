//! Relocation types for the LoongArch architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::LoongArch`
pub enum LoongArchRelocation {
    /// No relocation
    None,
    /// S + A (32-bit)
    Abs32,
    /// S + A (64-bit)
    Abs64,
    /// B + A
    Relative,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
    GlobDat,
    /// S, sets GOT entry to the address of a PLT entry
    JumpSlot,
    /// Module index for TLS variant I
    TlsDtpMod32,
    /// Module index for TLS variant I (64-bit)
    TlsDtpMod64,
    /// Offset in TLS block
    TlsDtpRel32,
    /// Offset in TLS block (64-bit)
    TlsDtpRel64,
    /// Offset in initial TLS block
    TlsTprel32,
    /// Offset in initial TLS block (64-bit)
    TlsTprel64,
    /// Adjusts indirect function calls at runtime
    IRelative,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl LoongArchRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use LoongArchRelocation::*;
        match value {
            0 => None,
            1 => Abs32,
            2 => Abs64,
            3 => Relative,
            4 => Copy,
            5 => GlobDat,
            6 => JumpSlot,
            7 => TlsDtpMod32,
            8 => TlsDtpMod64,
            9 => TlsDtpRel32,
            10 => TlsDtpRel64,
            11 => TlsTprel32,
            12 => TlsTprel64,
            13 => IRelative,
            other => Unknown(other),
        }
    }
}
