//! Class-agnostic accessors over the raw on-disk records in [`crate::raw`].
//!
//! Every view is a tagged `{Class32, Class64}` enum (`Relocation`
//! additionally tags `{Rel, Rela}`). Endian is never represented here: it
//! lives on the [`crate::buffer::MappedBuffer`] and is applied once, inside
//! [`crate::buffer::MappedBuffer::read_record`].

use crate::catalog::dynamic_tag::DynamicTag;
use crate::catalog::machine::Machine;
use crate::catalog::object_type::ObjectType;
use crate::catalog::os_abi::OsAbi;
use crate::catalog::program_flags::ProgramFlags;
use crate::catalog::section_flags::SectionFlags;
use crate::catalog::section_type::SectionType;
use crate::catalog::segment_type::SegmentType;
use crate::catalog::symbol::{SymbolBind, SymbolType, SymbolVisibility};
use crate::error::Error;
use crate::raw::{
    Elf32Dyn, Elf32Ehdr, Elf32Phdr, Elf32Rel, Elf32Rela, Elf32Shdr, Elf32Sym, Elf64Dyn, Elf64Ehdr,
    Elf64Phdr, Elf64Rel, Elf64Rela, Elf64Shdr, Elf64Sym,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether a file is 32- or 64-bit (`EI_CLASS`)
pub enum Class {
    /// ELFCLASS32
    Class32,
    /// ELFCLASS64
    Class64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The ELF file header (`e_ident` plus the rest of `Elf{32,64}_Ehdr`)
pub enum Header {
    /// 32-bit layout
    Class32(Elf32Ehdr),
    /// 64-bit layout
    Class64(Elf64Ehdr),
}

impl Header {
    fn ident(&self) -> &[u8; 16] {
        match self {
            Header::Class32(h) => &h.ident,
            Header::Class64(h) => &h.ident,
        }
    }

    /// The file's class, read back from `e_ident[EI_CLASS]`
    pub fn class(&self) -> Class {
        match self {
            Header::Class32(_) => Class::Class32,
            Header::Class64(_) => Class::Class64,
        }
    }

    /// `e_ident[EI_OSABI]`
    pub fn os_abi(&self) -> OsAbi {
        OsAbi::from_raw(self.ident()[7])
    }

    /// `e_ident[EI_ABIVERSION]`
    pub fn abi_version(&self) -> u8 {
        self.ident()[8]
    }

    /// `e_ident[EI_VERSION]`
    pub fn ident_version(&self) -> u8 {
        self.ident()[6]
    }

    /// `e_type`
    pub fn object_type(&self) -> ObjectType {
        ObjectType::from_raw(match self {
            Header::Class32(h) => h.e_type,
            Header::Class64(h) => h.e_type,
        })
    }

    /// `e_machine`
    pub fn machine(&self) -> Machine {
        Machine::from_raw(match self {
            Header::Class32(h) => h.e_machine,
            Header::Class64(h) => h.e_machine,
        })
    }

    /// `e_version`
    pub fn version(&self) -> u32 {
        match self {
            Header::Class32(h) => h.e_version,
            Header::Class64(h) => h.e_version,
        }
    }

    /// `e_entry`, widened to 64 bits
    pub fn entry(&self) -> u64 {
        match self {
            Header::Class32(h) => h.e_entry as u64,
            Header::Class64(h) => h.e_entry,
        }
    }

    /// `e_phoff`, widened to 64 bits
    pub fn phoff(&self) -> u64 {
        match self {
            Header::Class32(h) => h.e_phoff as u64,
            Header::Class64(h) => h.e_phoff,
        }
    }

    /// `e_shoff`, widened to 64 bits
    pub fn shoff(&self) -> u64 {
        match self {
            Header::Class32(h) => h.e_shoff as u64,
            Header::Class64(h) => h.e_shoff,
        }
    }

    /// `e_flags`
    pub fn flags(&self) -> u32 {
        match self {
            Header::Class32(h) => h.e_flags,
            Header::Class64(h) => h.e_flags,
        }
    }

    /// `e_ehsize`
    pub fn ehsize(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_ehsize,
            Header::Class64(h) => h.e_ehsize,
        }
    }

    /// `e_phentsize`
    pub fn phentsize(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_phentsize,
            Header::Class64(h) => h.e_phentsize,
        }
    }

    /// `e_phnum`
    pub fn phnum(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_phnum,
            Header::Class64(h) => h.e_phnum,
        }
    }

    /// `e_shentsize`
    pub fn shentsize(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_shentsize,
            Header::Class64(h) => h.e_shentsize,
        }
    }

    /// `e_shnum`
    pub fn shnum(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_shnum,
            Header::Class64(h) => h.e_shnum,
        }
    }

    /// `e_shstrndx`
    pub fn shstrndx(&self) -> u16 {
        match self {
            Header::Class32(h) => h.e_shstrndx,
            Header::Class64(h) => h.e_shstrndx,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An ELF program header / segment descriptor
pub enum ProgramHeader {
    /// 32-bit layout
    Class32(Elf32Phdr),
    /// 64-bit layout
    Class64(Elf64Phdr),
}

impl ProgramHeader {
    /// `p_type`
    pub fn segment_type(&self) -> SegmentType {
        SegmentType::from_raw(match self {
            ProgramHeader::Class32(p) => p.p_type,
            ProgramHeader::Class64(p) => p.p_type,
        })
    }

    /// `p_flags`
    pub fn flags(&self) -> ProgramFlags {
        ProgramFlags::from_raw(match self {
            ProgramHeader::Class32(p) => p.p_flags,
            ProgramHeader::Class64(p) => p.p_flags,
        })
    }

    /// `p_offset`, widened to 64 bits
    pub fn offset(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_offset as u64,
            ProgramHeader::Class64(p) => p.p_offset,
        }
    }

    /// `p_vaddr`, widened to 64 bits
    pub fn vaddr(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_vaddr as u64,
            ProgramHeader::Class64(p) => p.p_vaddr,
        }
    }

    /// `p_paddr`, widened to 64 bits
    pub fn paddr(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_paddr as u64,
            ProgramHeader::Class64(p) => p.p_paddr,
        }
    }

    /// `p_filesz`, widened to 64 bits
    pub fn filesz(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_filesz as u64,
            ProgramHeader::Class64(p) => p.p_filesz,
        }
    }

    /// `p_memsz`, widened to 64 bits
    pub fn memsz(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_memsz as u64,
            ProgramHeader::Class64(p) => p.p_memsz,
        }
    }

    /// `p_align`, widened to 64 bits
    pub fn align(&self) -> u64 {
        match self {
            ProgramHeader::Class32(p) => p.p_align as u64,
            ProgramHeader::Class64(p) => p.p_align,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An ELF section header
pub enum SectionHeader {
    /// 32-bit layout
    Class32(Elf32Shdr),
    /// 64-bit layout
    Class64(Elf64Shdr),
}

impl SectionHeader {
    /// `sh_name`, an offset into the section header string table
    pub fn name_offset(&self) -> u32 {
        match self {
            SectionHeader::Class32(s) => s.sh_name,
            SectionHeader::Class64(s) => s.sh_name,
        }
    }

    /// `sh_type`
    pub fn section_type(&self) -> SectionType {
        SectionType::from_raw(match self {
            SectionHeader::Class32(s) => s.sh_type,
            SectionHeader::Class64(s) => s.sh_type,
        })
    }

    /// `sh_flags`, widened to 64 bits
    pub fn flags(&self) -> SectionFlags {
        SectionFlags::from_raw(match self {
            SectionHeader::Class32(s) => s.sh_flags as u64,
            SectionHeader::Class64(s) => s.sh_flags,
        })
    }

    /// `sh_addr`, widened to 64 bits
    pub fn addr(&self) -> u64 {
        match self {
            SectionHeader::Class32(s) => s.sh_addr as u64,
            SectionHeader::Class64(s) => s.sh_addr,
        }
    }

    /// `sh_offset`, widened to 64 bits
    pub fn offset(&self) -> u64 {
        match self {
            SectionHeader::Class32(s) => s.sh_offset as u64,
            SectionHeader::Class64(s) => s.sh_offset,
        }
    }

    /// `sh_size`, widened to 64 bits
    pub fn size(&self) -> u64 {
        match self {
            SectionHeader::Class32(s) => s.sh_size as u64,
            SectionHeader::Class64(s) => s.sh_size,
        }
    }

    /// `sh_link`
    pub fn link(&self) -> u32 {
        match self {
            SectionHeader::Class32(s) => s.sh_link,
            SectionHeader::Class64(s) => s.sh_link,
        }
    }

    /// `sh_info`
    pub fn info(&self) -> u32 {
        match self {
            SectionHeader::Class32(s) => s.sh_info,
            SectionHeader::Class64(s) => s.sh_info,
        }
    }

    /// `sh_addralign`, widened to 64 bits
    pub fn addralign(&self) -> u64 {
        match self {
            SectionHeader::Class32(s) => s.sh_addralign as u64,
            SectionHeader::Class64(s) => s.sh_addralign,
        }
    }

    /// `sh_entsize`, widened to 64 bits
    pub fn entsize(&self) -> u64 {
        match self {
            SectionHeader::Class32(s) => s.sh_entsize as u64,
            SectionHeader::Class64(s) => s.sh_entsize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A symbol table entry
pub enum Symbol {
    /// 32-bit layout
    Class32(Elf32Sym),
    /// 64-bit layout
    Class64(Elf64Sym),
}

impl Symbol {
    /// `st_name`, an offset into the linked string table
    pub fn name_offset(&self) -> u32 {
        match self {
            Symbol::Class32(s) => s.st_name,
            Symbol::Class64(s) => s.st_name,
        }
    }

    /// `st_value`, widened to 64 bits
    pub fn value(&self) -> u64 {
        match self {
            Symbol::Class32(s) => s.st_value as u64,
            Symbol::Class64(s) => s.st_value,
        }
    }

    /// `st_size`, widened to 64 bits
    pub fn size(&self) -> u64 {
        match self {
            Symbol::Class32(s) => s.st_size as u64,
            Symbol::Class64(s) => s.st_size,
        }
    }

    fn st_info(&self) -> u8 {
        match self {
            Symbol::Class32(s) => s.st_info,
            Symbol::Class64(s) => s.st_info,
        }
    }

    fn st_other(&self) -> u8 {
        match self {
            Symbol::Class32(s) => s.st_other,
            Symbol::Class64(s) => s.st_other,
        }
    }

    /// The symbol's binding, `st_info >> 4`
    pub fn bind(&self) -> SymbolBind {
        SymbolBind::from_raw(self.st_info() >> 4)
    }

    /// The symbol's type, `st_info & 0x0F`
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::from_raw(self.st_info() & 0x0F)
    }

    /// The symbol's visibility, the low two bits of `st_other`
    pub fn visibility(&self) -> SymbolVisibility {
        SymbolVisibility::from_raw(self.st_other())
    }

    /// `st_shndx`, the section this symbol is defined relative to
    pub fn section_index(&self) -> u16 {
        match self {
            Symbol::Class32(s) => s.st_shndx,
            Symbol::Class64(s) => s.st_shndx,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A `.dynamic` section entry
pub enum DynamicEntry {
    /// 32-bit layout
    Class32(Elf32Dyn),
    /// 64-bit layout
    Class64(Elf64Dyn),
}

impl DynamicEntry {
    /// `d_tag`
    pub fn tag(&self) -> DynamicTag {
        DynamicTag::from_raw(match self {
            DynamicEntry::Class32(d) => d.d_tag as i64,
            DynamicEntry::Class64(d) => d.d_tag,
        })
    }

    /// `d_un`, widened to 64 bits; may be a value, address, or `.dynstr` offset
    /// depending on [`DynamicEntry::tag`]
    pub fn value(&self) -> u64 {
        match self {
            DynamicEntry::Class32(d) => d.d_val as u64,
            DynamicEntry::Class64(d) => d.d_val,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A relocation entry, tagged on both class and whether it carries an
/// explicit addend
pub enum Relocation {
    /// 32-bit, no explicit addend
    Rel32(Elf32Rel),
    /// 32-bit, explicit addend
    Rela32(Elf32Rela),
    /// 64-bit, no explicit addend
    Rel64(Elf64Rel),
    /// 64-bit, explicit addend
    Rela64(Elf64Rela),
}

impl Relocation {
    /// `r_offset`, widened to 64 bits
    pub fn offset(&self) -> u64 {
        match self {
            Relocation::Rel32(r) => r.r_offset as u64,
            Relocation::Rela32(r) => r.r_offset as u64,
            Relocation::Rel64(r) => r.r_offset,
            Relocation::Rela64(r) => r.r_offset,
        }
    }

    fn r_info(&self) -> u64 {
        match self {
            Relocation::Rel32(r) => r.r_info as u64,
            Relocation::Rela32(r) => r.r_info as u64,
            Relocation::Rel64(r) => r.r_info,
            Relocation::Rela64(r) => r.r_info,
        }
    }

    /// The index into the linked symbol table: `info >> 8` for class32,
    /// `info >> 32` for class64
    pub fn symbol_index(&self) -> u64 {
        match self {
            Relocation::Rel32(_) | Relocation::Rela32(_) => self.r_info() >> 8,
            Relocation::Rel64(_) | Relocation::Rela64(_) => self.r_info() >> 32,
        }
    }

    /// The raw, architecture-specific relocation type code packed into `r_info`
    pub fn type_raw(&self) -> u32 {
        match self {
            Relocation::Rel32(_) | Relocation::Rela32(_) => (self.r_info() & 0xFF) as u32,
            Relocation::Rel64(_) | Relocation::Rela64(_) => (self.r_info() & 0xFFFF_FFFF) as u32,
        }
    }

    /// The decoded relocation type for `machine`
    pub fn relocation_type(&self, machine: Machine) -> Result<crate::arch::RelocationKind, Error> {
        crate::arch::RelocationKind::decode(machine, self.type_raw())
    }

    /// The addend: `None` for `rel` entries, `Some(r_addend)` for `rela` entries
    pub fn addend(&self) -> Option<i64> {
        match self {
            Relocation::Rel32(_) | Relocation::Rel64(_) => None,
            Relocation::Rela32(r) => Some(r.r_addend as i64),
            Relocation::Rela64(r) => Some(r.r_addend),
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symbol_packing_matches_class32() {
        let sym = Symbol::Class32(Elf32Sym {
            st_info: (1 << 4) | 2,
            ..Default::default()
        });
        assert_eq!(sym.bind(), SymbolBind::Global);
        assert_eq!(sym.symbol_type(), SymbolType::Func);
    }

    #[test]
    fn relocation_packing_matches_class64() {
        let reloc = Relocation::Rela64(Elf64Rela {
            r_info: (7u64 << 32) | 1,
            r_addend: -4,
            ..Default::default()
        });
        assert_eq!(reloc.symbol_index(), 7);
        assert_eq!(reloc.type_raw(), 1);
        assert_eq!(reloc.addend(), Some(-4));
    }

    #[test]
    fn relocation_packing_matches_class32() {
        let reloc = Relocation::Rel32(Elf32Rel {
            r_info: (3u32 << 8) | 0xAB,
            ..Default::default()
        });
        assert_eq!(reloc.symbol_index(), 3);
        assert_eq!(reloc.type_raw(), 0xAB);
        assert_eq!(reloc.addend(), None);
    }
}
