//! The `EI_OSABI` catalog: numeric OS/ABI codes to symbolic names
//!
//! Unknown codes fold to [`OsAbi::Unknown`] rather than erroring, so a file
//! targeting an OS/ABI this catalog doesn't name yet can still be read.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The operating system and ABI for which an ELF object file is intended,
/// as recorded in `EI_OSABI`
pub enum OsAbi {
    /// Unix System V ABI, also used when no extensions are in use
    SystemV = 0,
    /// HP-UX
    HpUx = 1,
    /// NetBSD
    NetBsd = 2,
    /// Object uses GNU ELF extensions
    GnuLinux = 3,
    /// Sun Solaris
    Solaris = 6,
    /// IBM AIX
    Aix = 7,
    /// SGI Irix
    Irix = 8,
    /// FreeBSD
    FreeBsd = 9,
    /// Compaq TRU64 UNIX
    Tru64 = 10,
    /// Novell Modesto
    NovellModesto = 11,
    /// OpenBSD
    OpenBsd = 12,
    /// Open VMS
    OpenVms = 13,
    /// HP Non-Stop Kernel
    NonStopKernel = 14,
    /// Amiga Research OS
    Aros = 15,
    /// FenixOS
    FenixOs = 16,
    /// Nuxi CloudABI
    CloudAbi = 17,
    /// Stratus Technologies OpenVOS
    OpenVos = 18,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl OsAbi {
    /// Decode a raw `EI_OSABI` value, folding unrecognized codes to [`OsAbi::Unknown`]
    pub fn from_raw(value: u8) -> Self {
        FromPrimitive::from_u8(value).unwrap_or(OsAbi::Unknown)
    }
}
