//! Relocation types for the ARM AARCH64 architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::Aarch64`
pub enum Aarch64Relocation {
    /// No relocation
    None,
    /// S + A
    Abs64,
    /// S + A (32-bit truncated)
    Abs32,
    /// S + A (16-bit truncated)
    Abs16,
    /// S + A - P
    Prel64,
    /// S + A - P (32-bit truncated)
    Prel32,
    /// S + A - P (16-bit truncated)
    Prel16,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// S, sets GOT entry to the address of the symbol
    GlobDat,
    /// S, sets GOT entry to the address of a PLT entry
    JumpSlot,
    /// B + A
    Relative,
    /// Module index for TLS variant I
    TlsDtpMod,
    /// Offset in TLS block
    TlsDtpRel,
    /// Offset in initial TLS block
    TlsTprel,
    /// Adjusts indirect function calls at runtime
    IRelative,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl Aarch64Relocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use Aarch64Relocation::*;
        match value {
            0 => None,
            257 => Abs64,
            258 => Abs32,
            259 => Abs16,
            260 => Prel64,
            261 => Prel32,
            262 => Prel16,
            1024 => Copy,
            1025 => GlobDat,
            1026 => JumpSlot,
            1027 => Relative,
            1028 => TlsDtpMod,
            1029 => TlsDtpRel,
            1030 => TlsTprel,
            1032 => IRelative,
            other => Unknown(other),
        }
    }
}
