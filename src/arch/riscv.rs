//! Relocation types for the RISC-V architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::RiscV`
pub enum RiscVRelocation {
    /// No relocation
    None,
    /// S + A
    Abs32,
    /// S + A
    Abs64,
    /// B + A
    Relative,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
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
    TlsTpRel32,
    /// Offset in initial TLS block (64-bit)
    TlsTpRel64,
    /// PC-relative branch
    Branch,
    /// PC-relative jump
    Jal,
    /// PC-relative call to a global function
    Call,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl RiscVRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use RiscVRelocation::*;
        match value {
            0 => None,
            1 => Abs32,
            2 => Abs64,
            3 => Relative,
            4 => Copy,
            5 => JumpSlot,
            6 => TlsDtpMod32,
            7 => TlsDtpMod64,
            8 => TlsDtpRel32,
            9 => TlsDtpRel64,
            10 => TlsTpRel32,
            11 => TlsTpRel64,
            16 => Branch,
            17 => Jal,
            18 => Call,
            other => Unknown(other),
        }
    }
}
