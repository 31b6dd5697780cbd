//! Relocation types for the MIPS architecture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::Mips`
pub enum MipsRelocation {
    /// No relocation
    None,
    /// S + A - P (16-bit PC-relative branch)
    Rel16,
    /// 32-bit absolute
    Direct32,
    /// Reference to procedure entry in the PLT/stub
    Rel26,
    /// High 16 bits of symbol value
    Hi16,
    /// Low 16 bits of symbol value
    Lo16,
    /// GP-relative reference
    GpRel16,
    /// Literal section reference
    Literal,
    /// GOT entry
    Got16,
    /// No relocation, copies symbol data at runtime
    Copy,
    /// Creates a GOT entry for a function
    Jump32,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl MipsRelocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use MipsRelocation::*;
        match value {
            0 => None,
            1 => Rel16,
            2 => Direct32,
            4 => Rel26,
            5 => Hi16,
            6 => Lo16,
            7 => GpRel16,
            8 => Literal,
            9 => Got16,
            19 => Copy,
            21 => Jump32,
            other => Unknown(other),
        }
    }
}
