//! The `sh_type` catalog: numeric section types to symbolic names

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The kind of data held by an ELF section, as recorded in `sh_type`
///
/// Unknown codes fold to [`SectionType::Unknown`] rather than erroring, since
/// a reader is expected to tolerate sections from architectures or linkers
/// it doesn't know.
pub enum SectionType {
    /// Inactive section; other members are undefined
    Null = 0,
    /// Program-defined information
    ProgBits = 1,
    /// Symbol table
    SymTab = 2,
    /// String table
    StrTab = 3,
    /// Relocation entries with addends
    Rela = 4,
    /// Symbol hash table
    Hash = 5,
    /// Dynamic linking information
    Dynamic = 6,
    /// Notes
    Note = 7,
    /// Occupies no file space
    NoBits = 8,
    /// Relocation entries without addends
    Rel = 9,
    /// Reserved
    ShLib = 10,
    /// Minimal symbol table for dynamic linking
    DynSym = 11,
    /// Array of pointers to initialization functions
    InitArray = 14,
    /// Array of pointers to termination functions
    FiniArray = 15,
    /// Array of pointers to pre-initialization functions
    PreInitArray = 16,
    /// Section group
    Group = 17,
    /// Extended section indices for a symbol table
    SymTabShndx = 18,
    /// RELR relative relocations
    Relr = 19,
    /// GNU incremental build data
    GnuIncrementalInputs = 0x6fff4700,
    /// GNU object attributes
    GnuAttributes = 0x6ffffff5,
    /// GNU-style symbol hash table
    GnuHash = 0x6ffffff6,
    /// GNU prelink library list
    GnuLibList = 0x6ffffff7,
    /// GNU/SUN version definitions
    GnuVerDef = 0x6ffffffd,
    /// GNU/SUN version needs
    GnuVerNeed = 0x6ffffffe,
    /// GNU/SUN symbol versions
    GnuVerSym = 0x6fffffff,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl SectionType {
    /// Decode a raw `sh_type` value, folding unrecognized codes to [`SectionType::Unknown`]
    pub fn from_raw(value: u32) -> Self {
        FromPrimitive::from_u32(value).unwrap_or(SectionType::Unknown)
    }

    /// Whether this section type holds a symbol table (`SYMTAB` or `DYNSYM`)
    pub fn is_symbol_table(self) -> bool {
        matches!(self, SectionType::SymTab | SectionType::DynSym)
    }

    /// Whether this section type holds relocation entries (`REL` or `RELA`)
    pub fn is_relocation_table(self) -> bool {
        matches!(self, SectionType::Rel | SectionType::Rela)
    }
}
