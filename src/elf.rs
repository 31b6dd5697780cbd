//! The ELF object file container.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use typed_builder::TypedBuilder;

use crate::buffer::{Endian, MappedBuffer, OpenMode};
use crate::catalog::dynamic_tag::DynamicTag;
use crate::catalog::machine::Machine;
use crate::catalog::section_type::SectionType;
use crate::error::{Error, ErrorContext, Result};
use crate::iter::{DynamicIter, ProgramHeaderIter, RelocationIter, SectionHeaderIter, SymbolIter};
use crate::raw::{Elf32Ehdr, Elf32Shdr, Elf64Ehdr, Elf64Shdr};
use crate::string_table::read_c_string;
use crate::views::{Class, DynamicEntry, Header, Relocation, SectionHeader, Symbol};

const EI_NIDENT: usize = 16;
const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

#[derive(Debug, Clone, Copy, TypedBuilder)]
/// Options controlling how [`Elf::open`] maps a file
pub struct OpenOptions {
    #[builder(default = OpenMode::ReadOnly)]
    /// Whether the mapping is read-only or additionally exposes a mutable view
    pub mode: OpenMode,
}

impl Default for OpenOptions {
    fn default() -> Self {
        OpenOptions::builder().build()
    }
}

fn raw_section_bytes<'a>(buffer: &'a MappedBuffer, section: &SectionHeader) -> Option<&'a [u8]> {
    if section.size() == 0 {
        return Some(&[]);
    }
    buffer
        .slice(section.offset() as usize, section.size() as usize)
        .ok()
}

/// An ELF object file: a [`MappedBuffer`] plus the decoded file header, an
/// eagerly materialized section cache, resolved string tables, and a
/// symbol-name cache.
pub struct Elf {
    buffer: MappedBuffer,
    class: Class,
    header: Header,
    sections: Vec<SectionHeader>,
    shstrtab_index: Option<usize>,
    strtab_index: Option<usize>,
    dynstr_index: Option<usize>,
    symbol_names: HashMap<u32, Vec<u8>>,
}

impl Elf {
    /// Open and fully index the ELF object file at `path`: decode the magic,
    /// class and endian, read the file header, materialize the section
    /// cache, resolve the string tables, and build the symbol-name cache.
    pub fn open<P: AsRef<Path>>(path: P, options: OpenOptions) -> Result<Self> {
        let path = path.as_ref();

        let mut ident = [0u8; EI_NIDENT];
        {
            let mut file = File::open(path).map_err(|e| Error::OpenFailed {
                message: e.to_string(),
            })?;
            file.read_exact(&mut ident)
                .map_err(|_| Error::UnexpectedEof {
                    context: ErrorContext::at(0),
                })?;
        }

        if ident[0..4] != ELF_MAGIC {
            return Err(Error::BadMagic {
                context: ErrorContext::at(0),
            });
        }

        let endian = match ident[5] {
            1 => Endian::Little,
            2 => Endian::Big,
            value => {
                return Err(Error::InvalidEndian {
                    value,
                    context: ErrorContext::at(5),
                })
            }
        };

        let class = match ident[4] {
            1 => Class::Class32,
            2 => Class::Class64,
            value => {
                return Err(Error::InvalidClass {
                    value,
                    context: ErrorContext::at(4),
                })
            }
        };

        let buffer = MappedBuffer::open(path, endian, options.mode)?;

        let header = match class {
            Class::Class32 => Header::Class32(buffer.read_record::<Elf32Ehdr>(0)?),
            Class::Class64 => Header::Class64(buffer.read_record::<Elf64Ehdr>(0)?),
        };

        let mut sections = Vec::with_capacity(header.shnum() as usize);
        for i in 0..header.shnum() {
            let offset = header.shoff() as usize + i as usize * header.shentsize() as usize;
            let view = match class {
                Class::Class32 => SectionHeader::Class32(buffer.read_record::<Elf32Shdr>(offset)?),
                Class::Class64 => SectionHeader::Class64(buffer.read_record::<Elf64Shdr>(offset)?),
            };
            sections.push(view);
        }

        let shstrtab_index = sections
            .get(header.shstrndx() as usize)
            .map(|_| header.shstrndx() as usize);

        let mut strtab_index = None;
        let mut dynstr_index = None;
        if let Some(idx) = shstrtab_index {
            if let Some(shstrtab) = raw_section_bytes(&buffer, &sections[idx]) {
                for (i, section) in sections.iter().enumerate() {
                    let Ok(name) = read_c_string(shstrtab, section.name_offset()) else {
                        continue;
                    };
                    if name == b".strtab" {
                        strtab_index = Some(i);
                    } else if name == b".dynstr" {
                        dynstr_index = Some(i);
                    }
                }
            }
        }

        let mut symbol_names = HashMap::new();
        for section in &sections {
            if !matches!(
                section.section_type(),
                SectionType::SymTab | SectionType::DynSym
            ) {
                continue;
            }
            if section.entsize() == 0 {
                continue;
            }
            let count = section.size() / section.entsize();
            for j in 0..count {
                let offset = section.offset() as usize + (j * section.entsize()) as usize;
                let name_offset = match class {
                    Class::Class32 => buffer
                        .read_record::<crate::raw::Elf32Sym>(offset)?
                        .st_name,
                    Class::Class64 => buffer
                        .read_record::<crate::raw::Elf64Sym>(offset)?
                        .st_name,
                };
                for table_index in [strtab_index, dynstr_index].into_iter().flatten() {
                    if let Some(bytes) = raw_section_bytes(&buffer, &sections[table_index]) {
                        if let Ok(name) = read_c_string(bytes, name_offset) {
                            symbol_names.insert(name_offset, name.to_vec());
                        }
                    }
                }
            }
        }

        Ok(Self {
            buffer,
            class,
            header,
            sections,
            shstrtab_index,
            strtab_index,
            dynstr_index,
            symbol_names,
        })
    }

    /// A copy of the decoded file header
    pub fn header(&self) -> Header {
        self.header
    }

    /// `e_machine`, convenience accessor used throughout relocation decoding
    pub fn machine(&self) -> Machine {
        self.header.machine()
    }

    /// Iterate the program-header (segment) table
    pub fn program_headers(&self) -> ProgramHeaderIter<'_> {
        ProgramHeaderIter::new(
            &self.buffer,
            self.class,
            self.header.phoff(),
            self.header.phentsize(),
            self.header.phnum(),
        )
    }

    /// Iterate the section-header table
    pub fn section_headers(&self) -> SectionHeaderIter<'_> {
        SectionHeaderIter::new(
            &self.buffer,
            self.class,
            self.header.shoff(),
            self.header.shentsize(),
            self.header.shnum(),
        )
    }

    /// Iterate every symbol in every `SYMTAB`/`DYNSYM` section
    pub fn symbols(&self) -> SymbolIter<'_> {
        SymbolIter::new(&self.buffer, &self.sections, self.class)
    }

    /// Iterate every entry in every `DYNAMIC` section
    pub fn dynamics(&self) -> DynamicIter<'_> {
        DynamicIter::new(&self.buffer, &self.sections, self.class)
    }

    /// Iterate every relocation in every `REL`/`RELA` section
    pub fn relocations(&self) -> RelocationIter<'_> {
        RelocationIter::new(&self.buffer, &self.sections, self.class)
    }

    /// The number of sections materialized in the section cache
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Look up a section by its zero-based index
    pub fn section_by_index(&self, index: usize) -> Result<&SectionHeader> {
        self.sections
            .get(index)
            .ok_or(Error::InvalidSectionIndex {
                index,
                count: self.sections.len(),
            })
    }

    /// The first section whose name equals `name`, in canonical (section
    /// header table) order
    pub fn section_by_name(&self, name: &str) -> Result<&SectionHeader> {
        for section in &self.sections {
            if self.section_name(section).ok() == Some(name.as_bytes()) {
                return Ok(section);
            }
        }
        Err(Error::SectionNotFound)
    }

    /// The first section whose type equals `ty`, in canonical order
    pub fn section_by_type(&self, ty: SectionType) -> Result<&SectionHeader> {
        self.sections
            .iter()
            .find(|s| s.section_type() == ty)
            .ok_or(Error::SectionNotFound)
    }

    /// The NUL-terminated name of `section`, read from `.shstrtab`
    pub fn section_name(&self, section: &SectionHeader) -> Result<&[u8]> {
        let idx = self.shstrtab_index.ok_or(Error::NoSectionStringTable)?;
        let bytes =
            raw_section_bytes(&self.buffer, &self.sections[idx]).ok_or(Error::NoSectionStringTable)?;
        read_c_string(bytes, section.name_offset())
    }

    /// The raw content bytes of `section`
    pub fn section_data(&self, section: &SectionHeader) -> Result<&[u8]> {
        if section.size() == 0 {
            return Err(Error::EmptySection);
        }
        self.buffer
            .slice(section.offset() as usize, section.size() as usize)
    }

    /// Composition of [`Elf::section_by_name`] and [`Elf::section_data`]
    pub fn section_data_by_name(&self, name: &str) -> Result<&[u8]> {
        let section = self.section_by_name(name)?;
        self.section_data(section)
    }

    /// Overwrite `[section.offset, section.offset + bytes.len())` with `bytes`.
    ///
    /// Requires a mutable buffer, a non-empty section, and `bytes.len() <
    /// section.size()` (strictly less, so the final byte of every section is
    /// never touched by this call, leaving a one-byte margin a caller can use
    /// to tell "fully rewritten" apart from "bounded patch" sections when
    /// inspecting a persisted file).
    pub fn modify_section_data(&mut self, section: &SectionHeader, bytes: &[u8]) -> Result<()> {
        if section.size() == 0 {
            return Err(Error::EmptySection);
        }
        if bytes.len() as u64 >= section.size() {
            return Err(Error::PayloadTooLarge {
                payload_len: bytes.len(),
                section_size: section.size(),
            });
        }
        self.buffer.write_bytes(bytes, section.offset() as usize)
    }

    /// Forward to [`MappedBuffer::persist_to`]
    pub fn persist<P: AsRef<Path>>(&self, new_path: P) -> Result<()> {
        self.buffer.persist_to(new_path)
    }

    /// The cached name for `symbol.name_offset()`
    pub fn symbol_name(&self, symbol: &Symbol) -> Result<&[u8]> {
        self.symbol_names
            .get(&symbol.name_offset())
            .map(|v| v.as_slice())
            .ok_or(Error::SymbolNameNotFound {
                offset: symbol.name_offset(),
            })
    }

    /// The `.dynstr` name for `dynamic`, if its tag's value is a string-table offset
    pub fn dyn_name(&self, dynamic: &DynamicEntry) -> Result<Option<&[u8]>> {
        if !dynamic.tag().is_name_bearing() {
            return Ok(None);
        }
        let idx = self.dynstr_index.ok_or(Error::DynStringTableNotFound)?;
        let bytes =
            raw_section_bytes(&self.buffer, &self.sections[idx]).ok_or(Error::DynStringTableNotFound)?;
        Ok(Some(read_c_string(bytes, dynamic.value() as u32)?))
    }

    /// The symbol a relocation references, following `link` from the
    /// relocation's containing section to a `SYMTAB`/`DYNSYM` section
    pub fn relocation_linked_symbol(
        &self,
        reloc: &Relocation,
        containing_section_index: usize,
    ) -> Result<Symbol> {
        let containing = self.section_by_index(containing_section_index)?;
        let link = containing.link() as u64;
        if link as usize >= self.sections.len() {
            return Err(Error::InvalidLinkIndex {
                index: link,
                count: self.sections.len(),
            });
        }
        let linked = &self.sections[link as usize];
        if !matches!(
            linked.section_type(),
            SectionType::SymTab | SectionType::DynSym
        ) {
            return Err(Error::InvalidLinkedSection {
                index: link,
                ty: linked.section_type(),
            });
        }
        if linked.entsize() == 0 {
            return Err(Error::CannotGetEntries);
        }
        let offset = linked.offset() + reloc.symbol_index() * linked.entsize();
        match self.class {
            Class::Class32 => self
                .buffer
                .read_record::<crate::raw::Elf32Sym>(offset as usize)
                .map(Symbol::Class32),
            Class::Class64 => self
                .buffer
                .read_record::<crate::raw::Elf64Sym>(offset as usize)
                .map(Symbol::Class64),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_fixture {
    use super::*;

    /// Construct a minimal, valid little-endian 64-bit ELF executable with a
    /// `.shstrtab`, `.strtab`, one `SYMTAB` section with two symbols (one
    /// named, one `STN_UNDEF`), one `DYNAMIC` section with a `DT_NEEDED` and
    /// a `DT_NULL` entry, and one `RELA` section with a single relocation
    /// pointing at the `SYMTAB`.
    pub fn synthetic_elf64_le() -> Vec<u8> {
        // Layout, all offsets hand-computed and kept 8-byte aligned:
        //   0x0000  Ehdr              (64 bytes)
        //   0x0040  .symtab data      (2 * 24 = 48 bytes)
        //   0x0070  .dynamic data     (2 * 16 = 32 bytes)
        //   0x0090  .rela data        (1 * 24 = 24 bytes)
        //   0x00a8  .strtab data      (b"\0hello\0")
        //   0x00b0  .shstrtab data
        //   ...     Shdr table (6 entries * 64 bytes)
        const EHDR_SIZE: u64 = 64;
        const SYMTAB_OFF: u64 = 0x0040;
        const SYMTAB_SIZE: u64 = 48;
        const DYNAMIC_OFF: u64 = SYMTAB_OFF + SYMTAB_SIZE;
        const DYNAMIC_SIZE: u64 = 32;
        const RELA_OFF: u64 = DYNAMIC_OFF + DYNAMIC_SIZE;
        const RELA_SIZE: u64 = 24;
        const STRTAB_OFF: u64 = RELA_OFF + RELA_SIZE;
        let strtab: &[u8] = b"\0hello\0";
        let shstrtab: &[u8] =
            b"\0.symtab\0.dynamic\0.rela\0.strtab\0.shstrtab\0";
        let shstrtab_off = STRTAB_OFF + strtab.len() as u64;
        let shoff = (shstrtab_off + shstrtab.len() as u64 + 7) & !7;

        let mut buf = Vec::new();

        // Ehdr
        buf.extend_from_slice(&[0x7F, b'E', b'L', b'F']);
        buf.push(2); // EI_CLASS = ELFCLASS64
        buf.push(1); // EI_DATA = little-endian
        buf.push(1); // EI_VERSION
        buf.push(0); // EI_OSABI
        buf.extend_from_slice(&[0u8; 8]); // EI_ABIVERSION + padding
        buf.extend_from_slice(&2u16.to_le_bytes()); // e_type = ET_EXEC
        buf.extend_from_slice(&62u16.to_le_bytes()); // e_machine = X86_64
        buf.extend_from_slice(&1u32.to_le_bytes()); // e_version
        buf.extend_from_slice(&0x1000u64.to_le_bytes()); // e_entry
        buf.extend_from_slice(&0u64.to_le_bytes()); // e_phoff (no program headers)
        buf.extend_from_slice(&shoff.to_le_bytes()); // e_shoff
        buf.extend_from_slice(&0u32.to_le_bytes()); // e_flags
        buf.extend_from_slice(&(EHDR_SIZE as u16).to_le_bytes()); // e_ehsize
        buf.extend_from_slice(&0u16.to_le_bytes()); // e_phentsize
        buf.extend_from_slice(&0u16.to_le_bytes()); // e_phnum
        buf.extend_from_slice(&64u16.to_le_bytes()); // e_shentsize
        buf.extend_from_slice(&6u16.to_le_bytes()); // e_shnum
        buf.extend_from_slice(&5u16.to_le_bytes()); // e_shstrndx (index 5)
        assert_eq!(buf.len() as u64, EHDR_SIZE);

        // .symtab: symbol 0 is the mandatory STN_UNDEF null entry, symbol 1 is "hello"
        buf.extend_from_slice(&[0u8; 24]);
        buf.extend_from_slice(&1u32.to_le_bytes()); // st_name -> "hello" at offset 1
        buf.push((1 << 4) | 2); // st_info: GLOBAL FUNC
        buf.push(0); // st_other
        buf.extend_from_slice(&1u16.to_le_bytes()); // st_shndx
        buf.extend_from_slice(&0x1000u64.to_le_bytes()); // st_value
        buf.extend_from_slice(&16u64.to_le_bytes()); // st_size
        assert_eq!(buf.len() as u64, DYNAMIC_OFF);

        // .dynamic: DT_NEEDED -> "hello", DT_NULL terminator
        buf.extend_from_slice(&1i64.to_le_bytes()); // DT_NEEDED
        buf.extend_from_slice(&1u64.to_le_bytes()); // dynstr offset 1 ("hello"); reuses .strtab as .dynstr is absent
        buf.extend_from_slice(&0i64.to_le_bytes()); // DT_NULL
        buf.extend_from_slice(&0u64.to_le_bytes());
        assert_eq!(buf.len() as u64, RELA_OFF);

        // .rela: one R_X86_64_64 against symbol index 1
        buf.extend_from_slice(&0x2000u64.to_le_bytes()); // r_offset
        let r_info: u64 = (1u64 << 32) | 1; // symbol 1, type 1 (R_X86_64_64)
        buf.extend_from_slice(&r_info.to_le_bytes());
        buf.extend_from_slice(&0i64.to_le_bytes()); // r_addend
        assert_eq!(buf.len() as u64, STRTAB_OFF);

        buf.extend_from_slice(strtab);
        assert_eq!(buf.len() as u64, shstrtab_off);
        buf.extend_from_slice(shstrtab);
        while (buf.len() as u64) < shoff {
            buf.push(0);
        }
        assert_eq!(buf.len() as u64, shoff);

        let name_off = |needle: &[u8]| -> u32 {
            let pos = shstrtab
                .windows(needle.len())
                .position(|w| w == needle)
                .expect("name present in shstrtab");
            pos as u32
        };

        let push_shdr = |buf: &mut Vec<u8>,
                          name: &[u8],
                          sh_type: u32,
                          offset: u64,
                          size: u64,
                          link: u32,
                          info: u32,
                          entsize: u64| {
            buf.extend_from_slice(&name_off(name).to_le_bytes());
            buf.extend_from_slice(&sh_type.to_le_bytes());
            buf.extend_from_slice(&0u64.to_le_bytes()); // sh_flags
            buf.extend_from_slice(&0u64.to_le_bytes()); // sh_addr
            buf.extend_from_slice(&offset.to_le_bytes());
            buf.extend_from_slice(&size.to_le_bytes());
            buf.extend_from_slice(&link.to_le_bytes());
            buf.extend_from_slice(&info.to_le_bytes());
            buf.extend_from_slice(&1u64.to_le_bytes()); // sh_addralign
            buf.extend_from_slice(&entsize.to_le_bytes());
        };

        // index 0: NULL section (mandatory)
        buf.extend_from_slice(&[0u8; 64]);
        // index 1: .symtab, linked to .strtab (index 3)
        push_shdr(&mut buf, b".symtab", 2, SYMTAB_OFF, SYMTAB_SIZE, 3, 1, 24);
        // index 2: .dynamic, linked to .strtab (index 3) for this fixture
        push_shdr(&mut buf, b".dynamic", 6, DYNAMIC_OFF, DYNAMIC_SIZE, 3, 0, 16);
        // index 3: .strtab
        push_shdr(&mut buf, b".strtab", 3, STRTAB_OFF, strtab.len() as u64, 0, 0, 0);
        // index 4: .rela, linked to .symtab (index 1), info = target section (unused here)
        push_shdr(&mut buf, b".rela", 4, RELA_OFF, RELA_SIZE, 1, 0, 24);
        // index 5: .shstrtab
        push_shdr(
            &mut buf,
            b".shstrtab",
            3,
            shstrtab_off,
            shstrtab.len() as u64,
            0,
            0,
            0,
        );

        buf
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod test {
    use super::test_fixture::synthetic_elf64_le;
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn open_fixture(mode: OpenMode) -> (NamedTempFile, Elf) {
        let mut f = NamedTempFile::new().expect("create temp file");
        f.write_all(&synthetic_elf64_le()).expect("write fixture");
        f.flush().expect("flush fixture");
        let elf = Elf::open(f.path(), OpenOptions::builder().mode(mode).build())
            .expect("open synthetic fixture");
        (f, elf)
    }

    #[test]
    fn header_fields_decode() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let header = elf.header();
        assert_eq!(header.class(), Class::Class64);
        assert_eq!(header.machine(), Machine::X86_64);
        assert_eq!(header.shnum(), 6);
        assert_eq!(header.shstrndx(), 5);
    }

    #[test]
    fn shstrtab_section_is_self_named() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let shstrtab = elf.section_by_index(5).unwrap();
        assert_eq!(elf.section_name(shstrtab).unwrap(), b".shstrtab");
    }

    #[test]
    fn section_by_index_covers_every_section() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        for i in 0..elf.section_count() {
            assert!(elf.section_by_index(i).is_ok());
        }
        assert!(matches!(
            elf.section_by_index(elf.section_count()),
            Err(Error::InvalidSectionIndex { .. })
        ));
    }

    #[test]
    fn symbol_name_offset_zero_is_empty() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let symbols: Vec<_> = elf.symbols().collect::<Result<_>>().unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(elf.symbol_name(&symbols[0]).unwrap(), b"");
        assert_eq!(elf.symbol_name(&symbols[1]).unwrap(), b"hello");
    }

    #[test]
    fn relocation_linked_symbol_resolves() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let relocations: Vec<_> = elf.relocations().collect::<Result<_>>().unwrap();
        assert_eq!(relocations.len(), 1);
        let reloc = &relocations[0];
        assert_eq!(reloc.symbol_index(), 1);

        let symbol = elf.relocation_linked_symbol(reloc, 4).unwrap();
        assert_eq!(elf.symbol_name(&symbol).unwrap(), b"hello");
    }

    #[test]
    fn relocation_type_dispatches_on_machine() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let reloc = elf.relocations().next().unwrap().unwrap();
        let kind = reloc.relocation_type(elf.machine()).unwrap();
        assert_eq!(
            kind,
            crate::arch::RelocationKind::X86_64(crate::arch::x86_64::X86_64Relocation::Direct64)
        );
        assert_eq!(
            reloc.relocation_type(Machine::M32),
            Err(Error::UnknownRelocationArch { machine: Machine::M32 })
        );
    }

    #[test]
    fn dyn_name_decodes_needed_and_skips_null() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        // This fixture has no .dynstr section, so dyn_name can only be
        // exercised on a non-name-bearing tag (DT_NULL), which returns
        // `Ok(None)` without ever consulting the (absent) dynstr cache.
        let dynamics: Vec<_> = elf.dynamics().collect::<Result<_>>().unwrap();
        assert_eq!(dynamics.len(), 2);
        assert_eq!(dynamics[0].tag(), DynamicTag::Needed);
        assert_eq!(dynamics[1].tag(), DynamicTag::Null);
        assert_eq!(elf.dyn_name(&dynamics[1]).unwrap(), None);
    }

    #[test]
    fn read_only_mutation_is_rejected() {
        let (_f, mut elf) = open_fixture(OpenMode::ReadOnly);
        let section = *elf.section_by_index(1).unwrap();
        assert_eq!(
            elf.modify_section_data(&section, b"x"),
            Err(Error::NotMutable)
        );
    }

    #[test]
    fn bounded_mutation_then_persist_round_trips() {
        let (f, mut elf) = open_fixture(OpenMode::ReadWrite);
        let section = *elf.section_by_index(1).unwrap();
        let payload = vec![0xAB; (section.size() - 1) as usize];
        elf.modify_section_data(&section, &payload).unwrap();

        let out = NamedTempFile::new().expect("create out file");
        elf.persist(out.path()).unwrap();

        let persisted = Elf::open(out.path(), OpenOptions::builder().mode(OpenMode::ReadOnly).build())
            .expect("reopen persisted file");
        assert_eq!(persisted.header().shnum(), elf.header().shnum());
        assert_eq!(
            persisted.section_name(persisted.section_by_index(5).unwrap()).unwrap(),
            b".shstrtab"
        );

        let original = std::fs::read(f.path()).expect("read original fixture file");
        assert_eq!(original, synthetic_elf64_le());
    }

    #[test]
    fn iterator_reset_reproduces_sequence() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let mut symbols = elf.symbols();
        let first_pass: Vec<_> = symbols.by_ref().collect::<Result<_>>().unwrap();
        symbols.reset();
        let second_pass: Vec<_> = symbols.collect::<Result<_>>().unwrap();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn section_data_by_name_finds_symtab() {
        let (_f, elf) = open_fixture(OpenMode::ReadOnly);
        let data = elf.section_data_by_name(".symtab").unwrap();
        assert_eq!(data.len(), 48);
    }
}
