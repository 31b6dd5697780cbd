//! Relocation types for the AMD x86-64 architecture
//!
//! Numeric codes and computations are documented in the psABI; grounded on
//! the doc table in `other_examples/..._m4b-goblin__src-elf-reloc.rs`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type for `Machine::X86_64`
pub enum X86_64Relocation {
    /// No relocation
    None,
    /// S + A
    Direct64,
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
    /// G + GOT + A - P
    GotPcRel,
    /// S + A (32-bit truncated)
    Direct32,
    /// S + A (32-bit signed truncated)
    Direct32Signed,
    /// S + A (16-bit truncated)
    Direct16,
    /// S + A - P (16-bit truncated)
    Pc16,
    /// S + A (8-bit truncated)
    Direct8,
    /// S + A - P (8-bit truncated)
    Pc8,
    /// ID of module containing symbol
    DtpMod64,
    /// Offset in TLS block
    DtpOff64,
    /// Offset in initial TLS block
    TpOff64,
    /// PC-relative offset to GD GOT block
    TlsGd,
    /// PC-relative offset to LD GOT block
    TlsLd,
    /// Offset in TLS block
    DtpOff32,
    /// PC-relative offset to IE GOT entry
    GotTpOff,
    /// Offset in initial TLS block
    TpOff32,
    /// S + A - P (64-bit)
    Pc64,
    /// S + A - GOT
    GotOff64,
    /// GOT + A - P
    GotPc32,
    /// Size of symbol plus addend
    Size32,
    /// Size of symbol plus addend (64-bit)
    Size64,
    /// Indirect call via resolver function
    IRelative,
    /// Numeric code with no cataloged name
    Unknown(u32),
}

impl X86_64Relocation {
    /// Decode a raw `r_type` value for this architecture
    pub fn from_raw(value: u32) -> Self {
        use X86_64Relocation::*;
        match value {
            0 => None,
            1 => Direct64,
            2 => Pc32,
            3 => Got32,
            4 => Plt32,
            5 => Copy,
            6 => GlobDat,
            7 => JumpSlot,
            8 => Relative,
            9 => GotPcRel,
            10 => Direct32,
            11 => Direct32Signed,
            12 => Direct16,
            13 => Pc16,
            14 => Direct8,
            15 => Pc8,
            16 => DtpMod64,
            17 => DtpOff64,
            18 => TpOff64,
            19 => TlsGd,
            20 => TlsLd,
            21 => DtpOff32,
            22 => GotTpOff,
            23 => TpOff32,
            24 => Pc64,
            25 => GotOff64,
            26 => GotPc32,
            32 => Size32,
            33 => Size64,
            37 => IRelative,
            other => Unknown(other),
        }
    }
}
