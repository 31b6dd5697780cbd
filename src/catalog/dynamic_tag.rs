//! The `d_tag` catalog for `.dynamic` section entries

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The kind of a `.dynamic` entry, as recorded in `d_tag`
pub enum DynamicTag {
    /// Marks the end of the dynamic array
    Null = 0,
    /// Name of a needed library, an offset into `.dynstr`
    Needed = 1,
    /// Size in bytes of the PLT relocation entries
    PltRelSz = 2,
    /// Address of the procedure linkage table GOT
    PltGot = 3,
    /// Address of the symbol hash table
    Hash = 4,
    /// Address of the string table
    StrTab = 5,
    /// Address of the symbol table
    SymTab = 6,
    /// Address of the relocation table with addends
    Rela = 7,
    /// Total size in bytes of `Rela`
    RelaSz = 8,
    /// Size in bytes of a `Rela` entry
    RelaEnt = 9,
    /// Size in bytes of the string table
    StrSz = 10,
    /// Size in bytes of a symbol table entry
    SymEnt = 11,
    /// Address of the initialization function
    Init = 12,
    /// Address of the termination function
    Fini = 13,
    /// Name of this shared object, an offset into `.dynstr`
    SoName = 14,
    /// Library search path, an offset into `.dynstr`
    RPath = 15,
    /// Reverses the search order for `Symbolic`
    Symbolic = 16,
    /// Address of the relocation table without addends
    Rel = 17,
    /// Total size in bytes of `Rel`
    RelSz = 18,
    /// Size in bytes of a `Rel` entry
    RelEnt = 19,
    /// Type of relocation used for the PLT
    PltRel = 20,
    /// Reserved for debugger use
    Debug = 21,
    /// Relocations exist that reference the text segment
    TextRel = 22,
    /// Address of the PLT relocations
    JmpRel = 23,
    /// Process all relocations before execution, not lazily
    BindNow = 24,
    /// Array of initialization functions
    InitArray = 25,
    /// Array of termination functions
    FiniArray = 26,
    /// Size in bytes of `InitArray`
    InitArraySz = 27,
    /// Size in bytes of `FiniArray`
    FiniArraySz = 28,
    /// Library search path, an offset into `.dynstr` (supersedes `RPath`)
    RunPath = 29,
    /// State flags
    Flags = 30,
    /// Array of pre-initialization functions
    PreInitArray = 32,
    /// Size in bytes of `PreInitArray`
    PreInitArraySz = 33,
    /// Address of the `.dynamic` section itself
    SymTabShndx = 34,
    /// GNU hash table address
    GnuHash = 0x6ffffef5,
    /// Configuration information, an offset into `.dynstr`
    Config = 0x6ffffefa,
    /// Dependency auditing, an offset into `.dynstr`
    DepAudit = 0x6ffffefb,
    /// Object auditing, an offset into `.dynstr`
    Audit = 0x6ffffefc,
    /// Offsets of auxiliary filtees, an offset into `.dynstr`
    Auxiliary = 0x7ffffffd_u32 as i64,
    /// Offsets of filtered libraries, an offset into `.dynstr`
    Filter = 0x7fffffff_u32 as i64,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl DynamicTag {
    /// Decode a raw `d_tag` value, folding unrecognized codes to [`DynamicTag::Unknown`]
    pub fn from_raw(value: i64) -> Self {
        FromPrimitive::from_i64(value).unwrap_or(DynamicTag::Unknown)
    }

    /// Whether `d_un` for this tag is a string table offset rather than a
    /// value or address, i.e. whether `dyn_name` is meaningful for it
    pub fn is_name_bearing(self) -> bool {
        matches!(
            self,
            DynamicTag::Needed
                | DynamicTag::SoName
                | DynamicTag::RPath
                | DynamicTag::RunPath
                | DynamicTag::Auxiliary
                | DynamicTag::Filter
                | DynamicTag::Config
                | DynamicTag::DepAudit
                | DynamicTag::Audit
        )
    }
}
