//! The `e_machine` catalog: numeric architecture codes to symbolic names

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive)]
#[allow(non_camel_case_types)]
#[non_exhaustive]
/// The required architecture for an ELF object file, as recorded in `e_machine`.
///
/// Unknown numeric codes are not an error: they fold to [`Machine::Unknown`]
/// so that files targeting architectures this catalog has not cataloged yet
/// can still be read.
pub enum Machine {
    /// No machine
    None = 0,
    /// AT&T WE 32100
    M32 = 1,
    /// SPARC
    Sparc = 2,
    /// Intel 80386
    I386 = 3,
    /// Motorola 68000
    M68k = 4,
    /// Motorola 88000
    M88k = 5,
    /// MIPS I Architecture
    Mips = 8,
    /// Hewlett-Packard PA-RISC
    PaRisc = 15,
    /// PowerPC
    Ppc = 20,
    /// 64-bit PowerPC
    Ppc64 = 21,
    /// IBM System/390 Processor
    S390 = 22,
    /// ARM 32-bit architecture (AARCH32)
    Arm = 40,
    /// Digital Alpha
    Alpha = 41,
    /// Hitachi SH
    Sh = 42,
    /// SPARC Version 9
    SparcV9 = 43,
    /// Siemens TriCore embedded processor
    TriCore = 44,
    /// Intel IA-64 processor architecture
    Ia64 = 50,
    /// AMD x86-64 architecture
    X86_64 = 62,
    /// ARM AARCH64
    Aarch64 = 183,
    /// RISC-V
    RiscV = 243,
    /// LoongArch
    LoongArch = 258,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl Machine {
    /// Decode a raw `e_machine` value, folding unrecognized codes to [`Machine::Unknown`]
    pub fn from_raw(value: u16) -> Self {
        FromPrimitive::from_u16(value).unwrap_or(Machine::Unknown)
    }

    /// The raw `e_machine` value, where known; [`Machine::Unknown`] has no stable
    /// numeric representation and is reported as `0xffff`
    pub fn to_raw(self) -> u16 {
        ToPrimitive::to_u16(&self).unwrap_or(0xffff)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        assert_eq!(Machine::from_raw(62), Machine::X86_64);
        assert_eq!(Machine::from_raw(2), Machine::Sparc);
        assert_eq!(Machine::X86_64.to_raw(), 62);
    }

    #[test]
    fn unknown_code_folds_to_sentinel() {
        assert_eq!(Machine::from_raw(0xbeef), Machine::Unknown);
    }
}
