//! Per-architecture relocation type catalogs and the machine-keyed union
//! over them.

pub mod aarch64;
pub mod alpha;
pub mod arm;
pub mod i386;
pub mod loongarch;
pub mod mips;
pub mod ppc;
pub mod ppc64;
pub mod riscv;
pub mod s390;
pub mod sparc;
pub mod x86_64;

use crate::catalog::machine::Machine;
use crate::error::Error;

use aarch64::Aarch64Relocation;
use alpha::AlphaRelocation;
use arm::ArmRelocation;
use i386::I386Relocation;
use loongarch::LoongArchRelocation;
use mips::MipsRelocation;
use ppc::PpcRelocation;
use ppc64::Ppc64Relocation;
use riscv::RiscVRelocation;
use s390::S390Relocation;
use sparc::SparcRelocation;
use x86_64::X86_64Relocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// A relocation type, discriminated by the machine that defines its numbering
pub enum RelocationKind {
    /// AMD x86-64
    X86_64(X86_64Relocation),
    /// ARM AARCH64
    Aarch64(Aarch64Relocation),
    /// ARM 32-bit
    Arm(ArmRelocation),
    /// RISC-V
    RiscV(RiscVRelocation),
    /// MIPS
    Mips(MipsRelocation),
    /// SPARC (and SPARC V9)
    Sparc(SparcRelocation),
    /// PowerPC
    Ppc(PpcRelocation),
    /// 64-bit PowerPC
    Ppc64(Ppc64Relocation),
    /// IBM System/390
    S390(S390Relocation),
    /// Digital Alpha
    Alpha(AlphaRelocation),
    /// LoongArch
    LoongArch(LoongArchRelocation),
    /// Intel 80386
    I386(I386Relocation),
}

impl RelocationKind {
    /// Decode a raw `r_type` value for `machine`.
    ///
    /// Fails with [`Error::UnknownRelocationArch`] if `machine` has no
    /// cataloged relocation numbering, and with [`Error::UnknownRelocationCode`]
    /// if the code is outside that machine's catalog (i.e. the per-arch
    /// `from_raw` folded it to its own `Unknown(code)` arm).
    pub fn decode(machine: Machine, raw: u32) -> Result<Self, Error> {
        let kind = match machine {
            Machine::X86_64 => RelocationKind::X86_64(X86_64Relocation::from_raw(raw)),
            Machine::Aarch64 => RelocationKind::Aarch64(Aarch64Relocation::from_raw(raw)),
            Machine::Arm => RelocationKind::Arm(ArmRelocation::from_raw(raw)),
            Machine::RiscV => RelocationKind::RiscV(RiscVRelocation::from_raw(raw)),
            Machine::Mips => RelocationKind::Mips(MipsRelocation::from_raw(raw)),
            Machine::Sparc | Machine::SparcV9 => {
                RelocationKind::Sparc(SparcRelocation::from_raw(raw))
            }
            Machine::Ppc => RelocationKind::Ppc(PpcRelocation::from_raw(raw)),
            Machine::Ppc64 => RelocationKind::Ppc64(Ppc64Relocation::from_raw(raw)),
            Machine::S390 => RelocationKind::S390(S390Relocation::from_raw(raw)),
            Machine::Alpha => RelocationKind::Alpha(AlphaRelocation::from_raw(raw)),
            Machine::LoongArch => RelocationKind::LoongArch(LoongArchRelocation::from_raw(raw)),
            Machine::I386 => RelocationKind::I386(I386Relocation::from_raw(raw)),
            other => return Err(Error::UnknownRelocationArch { machine: other }),
        };

        if kind.is_unknown_code() {
            return Err(Error::UnknownRelocationCode {
                machine,
                code: raw,
            });
        }

        Ok(kind)
    }

    fn is_unknown_code(&self) -> bool {
        match self {
            RelocationKind::X86_64(r) => matches!(r, X86_64Relocation::Unknown(_)),
            RelocationKind::Aarch64(r) => matches!(r, Aarch64Relocation::Unknown(_)),
            RelocationKind::Arm(r) => matches!(r, ArmRelocation::Unknown(_)),
            RelocationKind::RiscV(r) => matches!(r, RiscVRelocation::Unknown(_)),
            RelocationKind::Mips(r) => matches!(r, MipsRelocation::Unknown(_)),
            RelocationKind::Sparc(r) => matches!(r, SparcRelocation::Unknown(_)),
            RelocationKind::Ppc(r) => matches!(r, PpcRelocation::Unknown(_)),
            RelocationKind::Ppc64(r) => matches!(r, Ppc64Relocation::Unknown(_)),
            RelocationKind::S390(r) => matches!(r, S390Relocation::Unknown(_)),
            RelocationKind::Alpha(r) => matches!(r, AlphaRelocation::Unknown(_)),
            RelocationKind::LoongArch(r) => matches!(r, LoongArchRelocation::Unknown(_)),
            RelocationKind::I386(r) => matches!(r, I386Relocation::Unknown(_)),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    #[test]
    fn x86_64_decodes_known_code() {
        let kind = RelocationKind::decode(Machine::X86_64, 1).expect("decode");
        assert_eq!(kind, RelocationKind::X86_64(X86_64Relocation::Direct64));
    }

    #[test]
    fn unknown_arch_is_an_error() {
        assert_eq!(
            RelocationKind::decode(Machine::M32, 0),
            Err(Error::UnknownRelocationArch { machine: Machine::M32 })
        );
    }

    #[test]
    fn unknown_code_for_known_arch_is_an_error() {
        assert_eq!(
            RelocationKind::decode(Machine::X86_64, 0xffff),
            Err(Error::UnknownRelocationCode {
                machine: Machine::X86_64,
                code: 0xffff,
            })
        );
    }

    // Every cataloged architecture agrees that raw code 0 means "no relocation";
    // one generated smoke test per arch catches a future catalog edit that
    // breaks that agreement for a single architecture.
    macro_rules! none_code_decodes {
        ($machine:ident, $kind:ident, $relocation:ident) => {
            paste! {
                #[test]
                fn [<$machine:lower _none_code_decodes>]() {
                    let kind = RelocationKind::decode(Machine::$machine, 0).expect("decode");
                    assert_eq!(kind, RelocationKind::$kind($relocation::None));
                }
            }
        };
    }

    none_code_decodes!(X86_64, X86_64, X86_64Relocation);
    none_code_decodes!(Aarch64, Aarch64, Aarch64Relocation);
    none_code_decodes!(Arm, Arm, ArmRelocation);
    none_code_decodes!(RiscV, RiscV, RiscVRelocation);
    none_code_decodes!(Mips, Mips, MipsRelocation);
    none_code_decodes!(Sparc, Sparc, SparcRelocation);
    none_code_decodes!(Ppc, Ppc, PpcRelocation);
    none_code_decodes!(Ppc64, Ppc64, Ppc64Relocation);
    none_code_decodes!(S390, S390, S390Relocation);
    none_code_decodes!(Alpha, Alpha, AlphaRelocation);
    none_code_decodes!(LoongArch, LoongArch, LoongArchRelocation);
    none_code_decodes!(I386, I386, I386Relocation);
}
