//! Relocation types for the Intel 80386 architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::I386`
pub enum I386Relocation {
    /// No relocation
    None,
    /// S + A
    Direct32,
    /// S + A - P
    Pc32,
    /// G + A
    Got32,
    /// L + A - P
    Plt32,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
    GlobDat,
    /// S, sets GOT entry to the address of a PLT entry
    JumpSlot,
    /// B + A
    Relative,
    /// S + A - GOT
    GotOff,
    /// GOT + A - P
    GotPc,
    /// Offset in TLS block for module's generic dynamic
    TlsTpOff,
    /// Offset in module's TLS block
    TlsDtpMod32,
    /// Offset in TLS block
    TlsDtpOff32,
    /// Offset in initial TLS block
    TlsTpOff32,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl I386Relocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use I386Relocation::*;
        match value {
            0 => None,
            1 => Direct32,
            2 => Pc32,
            3 => Got32,
            4 => Plt32,
            5 => Copy,
            6 => GlobDat,
            7 => JumpSlot,
            8 => Relative,
            9 => GotOff,
            10 => GotPc,
            14 => TlsTpOff,
            35 => TlsDtpMod32,
            36 => TlsDtpOff32,
            37 => TlsTpOff32,
            other => Unknown(other),
        }
    }
}
