//! Numeric-to-symbolic catalogs for the various tag/flag fields found
//! throughout an ELF object file.

pub mod dynamic_tag;
pub mod machine;
pub mod object_type;
pub mod os_abi;
pub mod program_flags;
pub mod section_flags;
pub mod section_type;
pub mod segment_type;
pub mod symbol;
