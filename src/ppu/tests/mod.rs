//! PPU unit tests
//!
//! Covers register latch behavior, VRAM/OAM access, and the nametable/
//! mirroring math the renderer and Bus depend on.

use super::*;
use crate::cartridge::mappers::Mapper0;
use crate::cartridge::{Cartridge, Mirroring};
use std::cell::RefCell;
use std::rc::Rc;

/// PPU Control Register ($2000) - Write only
pub(crate) const PPUCTRL: u16 = 0x2000;
/// PPU Mask Register ($2001) - Write only
pub(crate) const PPUMASK: u16 = 0x2001;
/// PPU Status Register ($2002) - Read only
pub(crate) const PPUSTATUS: u16 = 0x2002;
/// OAM Address Port ($2003) - Write only
pub(crate) const OAMADDR: u16 = 0x2003;
/// OAM Data Port ($2004) - Read/Write
pub(crate) const OAMDATA: u16 = 0x2004;
/// Scroll Position Register ($2005) - Write x2
pub(crate) const PPUSCROLL: u16 = 0x2005;
/// PPU Address Register ($2006) - Write x2
pub(crate) const PPUADDR: u16 = 0x2006;
/// PPU Data Port ($2007) - Read/Write
pub(crate) const PPUDATA: u16 = 0x2007;

fn ppu_with_chr_ram() -> Ppu {
    let cart = Cartridge {
        prg_rom: vec![0xAA; 16 * 1024],
        chr_rom: vec![0x00; 8 * 1024], // all-zero CHR bank reads as CHR-RAM
        trainer: None,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    };
    let mut ppu = Ppu::new();
    let mapper: Box<dyn crate::cartridge::Mapper> = Box::new(Mapper0::new(cart));
    ppu.set_mapper(Rc::new(RefCell::new(mapper)));
    ppu
}

#[test]
fn ppustatus_read_clears_vblank_and_latch() {
    let mut ppu = ppu_with_chr_ram();
    ppu.ppustatus = 0x80;
    ppu.write_latch = true;
    let status = ppu.read(PPUSTATUS);
    assert_eq!(status, 0x80);
    assert_eq!(ppu.ppustatus & 0x80, 0);
    assert!(!ppu.write_latch);
}

#[test]
fn ppuaddr_two_writes_set_vram_address() {
    let mut ppu = ppu_with_chr_ram();
    ppu.write(PPUADDR, 0x23);
    ppu.write(PPUADDR, 0x05);
    assert_eq!(ppu.vram_addr, 0x2305);
}

#[test]
fn ppuscroll_two_writes_set_x_then_y() {
    let mut ppu = ppu_with_chr_ram();
    ppu.write(PPUSCROLL, 12);
    ppu.write(PPUSCROLL, 34);
    assert_eq!(ppu.scroll_x, 12);
    assert_eq!(ppu.scroll_y, 34);
}

#[test]
fn ppudata_write_then_read_is_buffered_one_behind() {
    let mut ppu = ppu_with_chr_ram();
    ppu.write(PPUADDR, 0x20);
    ppu.write(PPUADDR, 0x00);
    ppu.write(PPUDATA, 0xAB); // nametable write, vram_addr -> $2001

    ppu.write(PPUADDR, 0x20);
    ppu.write(PPUADDR, 0x00);
    let first = ppu.read(PPUDATA); // returns stale buffer, not 0xAB yet
    let second = ppu.read(PPUDATA);
    assert_ne!(first, 0xAB);
    assert_eq!(second, 0xAB);
}

#[test]
fn ppudata_palette_read_is_not_buffered() {
    let mut ppu = ppu_with_chr_ram();
    ppu.palette_ram[0] = 0x30;
    ppu.write(PPUADDR, 0x3F);
    ppu.write(PPUADDR, 0x00);
    assert_eq!(ppu.read(PPUDATA), 0x30);
}

#[test]
fn ppuctrl_bit_2_selects_32_byte_increment() {
    let mut ppu = ppu_with_chr_ram();
    ppu.write(PPUCTRL, 0x04);
    ppu.write(PPUADDR, 0x20);
    ppu.write(PPUADDR, 0x00);
    ppu.write(PPUDATA, 0);
    assert_eq!(ppu.vram_addr, 0x2020);
}

#[test]
fn oamdata_write_advances_oam_addr() {
    let mut ppu = ppu_with_chr_ram();
    ppu.write(OAMADDR, 0x10);
    ppu.write(OAMDATA, 0x42);
    ppu.write(OAMDATA, 0x43);
    assert_eq!(ppu.oam[0x10], 0x42);
    assert_eq!(ppu.oam[0x11], 0x43);
}

#[test]
fn horizontal_mirroring_maps_top_nametables_together() {
    let mut ppu = ppu_with_chr_ram();
    ppu.set_mirroring(Mirroring::Horizontal);
    ppu.write_ppu_memory(0x2000, 0x11);
    assert_eq!(ppu.read_ppu_memory(0x2400), 0x11);
    assert_ne!(ppu.read_ppu_memory(0x2800), 0x11);
}

#[test]
fn vertical_mirroring_maps_left_nametables_together() {
    let mut ppu = ppu_with_chr_ram();
    ppu.set_mirroring(Mirroring::Vertical);
    ppu.write_ppu_memory(0x2000, 0x22);
    assert_eq!(ppu.read_ppu_memory(0x2800), 0x22);
    assert_ne!(ppu.read_ppu_memory(0x2400), 0x22);
}

#[test]
fn sprite_palette_mirrors_entry_zero_to_background() {
    let mut ppu = ppu_with_chr_ram();
    ppu.palette_ram[0] = 0x0F;
    assert_eq!(ppu.mirror_palette_addr(0x3F10), 0);
    assert_eq!(ppu.mirror_palette_addr(0x3F14), 4);
}

#[test]
fn begin_vblank_sets_status_and_end_vblank_clears_it() {
    let mut ppu = ppu_with_chr_ram();
    ppu.begin_vblank();
    assert_eq!(ppu.ppustatus & 0x80, 0x80);
    assert_eq!(ppu.state(), PpuState::VBlankStart);
    ppu.end_vblank();
    assert_eq!(ppu.ppustatus & 0x80, 0);
    assert_eq!(ppu.state(), PpuState::VBlankEnd);
}

#[test]
fn nmi_enabled_reflects_ppuctrl_bit_7() {
    let mut ppu = ppu_with_chr_ram();
    assert!(!ppu.nmi_enabled());
    ppu.write(PPUCTRL, 0x80);
    assert!(ppu.nmi_enabled());
}
