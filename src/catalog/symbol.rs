//! Catalogs for the packed `st_info`/`st_other` fields of a symbol table entry

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive as _;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The binding of a symbol, the high nibble of `st_info` (`st_info >> 4`)
pub enum SymbolBind {
    /// Not visible outside the object file
    Local = 0,
    /// Visible to all object files being combined
    Global = 1,
    /// Like `Global`, but with lower precedence
    Weak = 2,
    /// GNU unique symbol
    GnuUnique = 10,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl SymbolBind {
    /// Decode the high nibble of `st_info`
    pub fn from_raw(value: u8) -> Self {
        FromPrimitive::from_u8(value).unwrap_or(SymbolBind::Unknown)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The type of a symbol, the low nibble of `st_info` (`st_info & 0x0F`)
pub enum SymbolType {
    /// Type not specified
    NoType = 0,
    /// Data object (variable, array, ...)
    Object = 1,
    /// Function or other executable code
    Func = 2,
    /// Associated with a section
    Section = 3,
    /// Source file name associated with the object file
    File = 4,
    /// An uninitialized common block
    Common = 5,
    /// Thread-local storage entity
    Tls = 6,
    /// Indirect function
    GnuIFunc = 10,
    /// Sentinel for a numeric code with no cataloged name
    Unknown,
}

impl SymbolType {
    /// Decode the low nibble of `st_info`
    pub fn from_raw(value: u8) -> Self {
        FromPrimitive::from_u8(value).unwrap_or(SymbolType::Unknown)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[non_exhaustive]
/// The visibility of a symbol, the low two bits of `st_other`
pub enum SymbolVisibility {
    /// Visibility is the symbol's binding
    Default = 0,
    /// Processor-specific hidden class
    Internal = 1,
    /// Not visible to other components
    Hidden = 2,
    /// Visible, but not preemptible
    Protected = 3,
}

impl SymbolVisibility {
    /// Decode the low two bits of `st_other`; every 2-bit pattern is covered
    /// by this catalog, so there is no `Unknown` fallback.
    pub fn from_raw(value: u8) -> Self {
        match value & 0x3 {
            0 => SymbolVisibility::Default,
            1 => SymbolVisibility::Internal,
            2 => SymbolVisibility::Hidden,
            _ => SymbolVisibility::Protected,
        }
    }
}
