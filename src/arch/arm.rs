//! Relocation types for the 32-bit ARM architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::Arm`
pub enum ArmRelocation {
    /// No relocation
    None,
    /// S + A - P
    Pc24,
    /// S + A
    Abs32,
    /// S + A - P
    Rel32,
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
    /// G + A
    Got32,
    /// L + A - P
    Plt32,
    /// Thumb-mode call relocation
    ThmCall,
    /// Module index for TLS variant I
    TlsDtpMod32,
    /// Offset in TLS block
    TlsDtpOff32,
    /// Offset in initial TLS block
    TlsTpOff32,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl ArmRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use ArmRelocation::*;
        match value {
            0 => None,
            1 => Pc24,
            2 => Abs32,
            3 => Rel32,
            20 => Copy,
            21 => GlobDat,
            22 => JumpSlot,
            23 => Relative,
            24 => GotOff,
            25 => GotPc,
            26 => Got32,
            27 => Plt32,
            10 => ThmCall,
            75 => TlsDtpMod32,
            76 => TlsDtpOff32,
            77 => TlsTpOff32,
            other => Unknown(other),
        }
    }
}
