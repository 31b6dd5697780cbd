//! Fixed-layout on-disk record structs, one pair (32-/64-bit) per ELF table.
//!
//! These are the concrete `T` that [`crate::buffer::MappedBuffer::read_record`]
//! decodes; [`crate::views`] wraps them in class-agnostic accessors. Field
//! names follow the gABI's `e_`/`p_`/`sh_`/`st_`/`d_`/`r_` prefixes.

use crate::buffer::{Endian, FromRecordBytes};

const EI_NIDENT: usize = 16;

macro_rules! read_u16 {
    ($bytes:expr, $off:expr, $endian:expr) => {{
        let b: [u8; 2] = $bytes[$off..$off + 2].try_into().unwrap_or([0; 2]);
        match $endian {
            Endian::Little => u16::from_le_bytes(b),
            Endian::Big => u16::from_be_bytes(b),
        }
    }};
}

macro_rules! read_u32 {
    ($bytes:expr, $off:expr, $endian:expr) => {{
        let b: [u8; 4] = $bytes[$off..$off + 4].try_into().unwrap_or([0; 4]);
        match $endian {
            Endian::Little => u32::from_le_bytes(b),
            Endian::Big => u32::from_be_bytes(b),
        }
    }};
}

macro_rules! read_u64 {
    ($bytes:expr, $off:expr, $endian:expr) => {{
        let b: [u8; 8] = $bytes[$off..$off + 8].try_into().unwrap_or([0; 8]);
        match $endian {
            Endian::Little => u64::from_le_bytes(b),
            Endian::Big => u64::from_be_bytes(b),
        }
    }};
}

macro_rules! read_i64 {
    ($bytes:expr, $off:expr, $endian:expr) => {{
        let b: [u8; 8] = $bytes[$off..$off + 8].try_into().unwrap_or([0; 8]);
        match $endian {
            Endian::Little => i64::from_le_bytes(b),
            Endian::Big => i64::from_be_bytes(b),
        }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit ELF file header (`Elf32_Ehdr`)
pub struct Elf32Ehdr {
    pub ident: [u8; EI_NIDENT],
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u32,
    pub e_phoff: u32,
    pub e_shoff: u32,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl FromRecordBytes for Elf32Ehdr {
    const SIZE: usize = 52;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        let mut ident = [0u8; EI_NIDENT];
        ident.copy_from_slice(&bytes[0..EI_NIDENT]);
        Self {
            ident,
            e_type: read_u16!(bytes, 16, endian),
            e_machine: read_u16!(bytes, 18, endian),
            e_version: read_u32!(bytes, 20, endian),
            e_entry: read_u32!(bytes, 24, endian),
            e_phoff: read_u32!(bytes, 28, endian),
            e_shoff: read_u32!(bytes, 32, endian),
            e_flags: read_u32!(bytes, 36, endian),
            e_ehsize: read_u16!(bytes, 40, endian),
            e_phentsize: read_u16!(bytes, 42, endian),
            e_phnum: read_u16!(bytes, 44, endian),
            e_shentsize: read_u16!(bytes, 46, endian),
            e_shnum: read_u16!(bytes, 48, endian),
            e_shstrndx: read_u16!(bytes, 50, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit ELF file header (`Elf64_Ehdr`)
pub struct Elf64Ehdr {
    pub ident: [u8; EI_NIDENT],
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl FromRecordBytes for Elf64Ehdr {
    const SIZE: usize = 64;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        let mut ident = [0u8; EI_NIDENT];
        ident.copy_from_slice(&bytes[0..EI_NIDENT]);
        Self {
            ident,
            e_type: read_u16!(bytes, 16, endian),
            e_machine: read_u16!(bytes, 18, endian),
            e_version: read_u32!(bytes, 20, endian),
            e_entry: read_u64!(bytes, 24, endian),
            e_phoff: read_u64!(bytes, 32, endian),
            e_shoff: read_u64!(bytes, 40, endian),
            e_flags: read_u32!(bytes, 48, endian),
            e_ehsize: read_u16!(bytes, 52, endian),
            e_phentsize: read_u16!(bytes, 54, endian),
            e_phnum: read_u16!(bytes, 56, endian),
            e_shentsize: read_u16!(bytes, 58, endian),
            e_shnum: read_u16!(bytes, 60, endian),
            e_shstrndx: read_u16!(bytes, 62, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit program header (`Elf32_Phdr`)
pub struct Elf32Phdr {
    pub p_type: u32,
    pub p_offset: u32,
    pub p_vaddr: u32,
    pub p_paddr: u32,
    pub p_filesz: u32,
    pub p_memsz: u32,
    pub p_flags: u32,
    pub p_align: u32,
}

impl FromRecordBytes for Elf32Phdr {
    const SIZE: usize = 32;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            p_type: read_u32!(bytes, 0, endian),
            p_offset: read_u32!(bytes, 4, endian),
            p_vaddr: read_u32!(bytes, 8, endian),
            p_paddr: read_u32!(bytes, 12, endian),
            p_filesz: read_u32!(bytes, 16, endian),
            p_memsz: read_u32!(bytes, 20, endian),
            p_flags: read_u32!(bytes, 24, endian),
            p_align: read_u32!(bytes, 28, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit program header (`Elf64_Phdr`)
pub struct Elf64Phdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

impl FromRecordBytes for Elf64Phdr {
    const SIZE: usize = 56;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            p_type: read_u32!(bytes, 0, endian),
            p_flags: read_u32!(bytes, 4, endian),
            p_offset: read_u64!(bytes, 8, endian),
            p_vaddr: read_u64!(bytes, 16, endian),
            p_paddr: read_u64!(bytes, 24, endian),
            p_filesz: read_u64!(bytes, 32, endian),
            p_memsz: read_u64!(bytes, 40, endian),
            p_align: read_u64!(bytes, 48, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit section header (`Elf32_Shdr`)
pub struct Elf32Shdr {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u32,
    pub sh_addr: u32,
    pub sh_offset: u32,
    pub sh_size: u32,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u32,
    pub sh_entsize: u32,
}

impl FromRecordBytes for Elf32Shdr {
    const SIZE: usize = 40;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            sh_name: read_u32!(bytes, 0, endian),
            sh_type: read_u32!(bytes, 4, endian),
            sh_flags: read_u32!(bytes, 8, endian),
            sh_addr: read_u32!(bytes, 12, endian),
            sh_offset: read_u32!(bytes, 16, endian),
            sh_size: read_u32!(bytes, 20, endian),
            sh_link: read_u32!(bytes, 24, endian),
            sh_info: read_u32!(bytes, 28, endian),
            sh_addralign: read_u32!(bytes, 32, endian),
            sh_entsize: read_u32!(bytes, 36, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit section header (`Elf64_Shdr`)
pub struct Elf64Shdr {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

impl FromRecordBytes for Elf64Shdr {
    const SIZE: usize = 64;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            sh_name: read_u32!(bytes, 0, endian),
            sh_type: read_u32!(bytes, 4, endian),
            sh_flags: read_u64!(bytes, 8, endian),
            sh_addr: read_u64!(bytes, 16, endian),
            sh_offset: read_u64!(bytes, 24, endian),
            sh_size: read_u64!(bytes, 32, endian),
            sh_link: read_u32!(bytes, 40, endian),
            sh_info: read_u32!(bytes, 44, endian),
            sh_addralign: read_u64!(bytes, 48, endian),
            sh_entsize: read_u64!(bytes, 56, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit symbol table entry (`Elf32_Sym`)
pub struct Elf32Sym {
    pub st_name: u32,
    pub st_value: u32,
    pub st_size: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
}

impl FromRecordBytes for Elf32Sym {
    const SIZE: usize = 16;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            st_name: read_u32!(bytes, 0, endian),
            st_value: read_u32!(bytes, 4, endian),
            st_size: read_u32!(bytes, 8, endian),
            st_info: bytes[12],
            st_other: bytes[13],
            st_shndx: read_u16!(bytes, 14, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit symbol table entry (`Elf64_Sym`)
pub struct Elf64Sym {
    pub st_name: u32,
    pub st_info: u8,
    pub st_other: u8,
    pub st_shndx: u16,
    pub st_value: u64,
    pub st_size: u64,
}

impl FromRecordBytes for Elf64Sym {
    const SIZE: usize = 24;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            st_name: read_u32!(bytes, 0, endian),
            st_info: bytes[4],
            st_other: bytes[5],
            st_shndx: read_u16!(bytes, 6, endian),
            st_value: read_u64!(bytes, 8, endian),
            st_size: read_u64!(bytes, 16, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit dynamic entry (`Elf32_Dyn`)
pub struct Elf32Dyn {
    pub d_tag: i32,
    pub d_val: u32,
}

impl FromRecordBytes for Elf32Dyn {
    const SIZE: usize = 8;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            d_tag: read_u32!(bytes, 0, endian) as i32,
            d_val: read_u32!(bytes, 4, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit dynamic entry (`Elf64_Dyn`)
pub struct Elf64Dyn {
    pub d_tag: i64,
    pub d_val: u64,
}

impl FromRecordBytes for Elf64Dyn {
    const SIZE: usize = 16;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            d_tag: read_i64!(bytes, 0, endian),
            d_val: read_u64!(bytes, 8, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit relocation without an addend (`Elf32_Rel`)
pub struct Elf32Rel {
    pub r_offset: u32,
    pub r_info: u32,
}

impl FromRecordBytes for Elf32Rel {
    const SIZE: usize = 8;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            r_offset: read_u32!(bytes, 0, endian),
            r_info: read_u32!(bytes, 4, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 32-bit relocation with an addend (`Elf32_Rela`)
pub struct Elf32Rela {
    pub r_offset: u32,
    pub r_info: u32,
    pub r_addend: i32,
}

impl FromRecordBytes for Elf32Rela {
    const SIZE: usize = 12;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            r_offset: read_u32!(bytes, 0, endian),
            r_info: read_u32!(bytes, 4, endian),
            r_addend: read_u32!(bytes, 8, endian) as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit relocation without an addend (`Elf64_Rel`)
pub struct Elf64Rel {
    pub r_offset: u64,
    pub r_info: u64,
}

impl FromRecordBytes for Elf64Rel {
    const SIZE: usize = 16;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            r_offset: read_u64!(bytes, 0, endian),
            r_info: read_u64!(bytes, 8, endian),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The raw 64-bit relocation with an addend (`Elf64_Rela`)
pub struct Elf64Rela {
    pub r_offset: u64,
    pub r_info: u64,
    pub r_addend: i64,
}

impl FromRecordBytes for Elf64Rela {
    const SIZE: usize = 24;

    fn from_record_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            r_offset: read_u64!(bytes, 0, endian),
            r_info: read_u64!(bytes, 8, endian),
            r_addend: read_i64!(bytes, 16, endian),
        }
    }
}
