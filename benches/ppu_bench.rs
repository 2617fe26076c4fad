// PPU Benchmarks
// Performance benchmarks for PPU register access and full-frame rendering.

use criterion::{criterion_group, criterion_main, Criterion};
use nes_rs::cartridge::mappers::Mapper0;
use nes_rs::{Cartridge, MemoryMappedDevice, Mirroring, Ppu};
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

fn create_test_cartridge() -> Cartridge {
    let mut cart = Cartridge::new();
    cart.prg_rom = vec![0; 16 * 1024];
    cart.chr_rom = vec![0xAA; 8 * 1024];
    cart.mirroring = Mirroring::Horizontal;
    cart
}

fn ppu_with_mapper() -> Ppu {
    let mut ppu = Ppu::new();
    let mapper = Mapper0::new(create_test_cartridge());
    let mapper_rc = Rc::new(RefCell::new(Box::new(mapper) as Box<dyn nes_rs::Mapper>));
    ppu.set_mapper(mapper_rc);
    ppu
}

/// Benchmark a full non-cycle-accurate frame render (background + sprites).
fn bench_ppu_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_rendering");
    group.sample_size(20);

    group.bench_function("full_frame_begin_vblank", |b| {
        let mut ppu = ppu_with_mapper();
        ppu.write(0x2001, 0b0001_1110); // PPUMASK: show background and sprites

        b.iter(|| {
            ppu.begin_vblank();
            ppu.end_vblank();
            black_box(ppu.frame());
        });
    });

    group.finish();
}

fn bench_ppu_registers(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_registers");

    group.bench_function("ppuctrl_write", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            ppu.write(black_box(0x2000), black_box(0b1001_0000));
        });
    });

    group.bench_function("ppustatus_read", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            black_box(ppu.read(0x2002));
        });
    });

    group.bench_function("ppudata_write_sequence", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            ppu.write(0x2006, 0x20);
            ppu.write(0x2006, 0x00);
            for i in 0..32 {
                ppu.write(0x2007, i);
            }
        });
    });

    group.finish();
}

fn bench_ppu_oam(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_oam");

    group.bench_function("oam_write", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            ppu.write(0x2003, 0);
            for i in 0..=255u8 {
                ppu.write(0x2004, i);
            }
        });
    });

    group.bench_function("oam_read", |b| {
        let mut ppu = ppu_with_mapper();
        b.iter(|| {
            black_box(ppu.read(0x2004));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ppu_rendering,
    bench_ppu_registers,
    bench_ppu_oam
);
criterion_main!(benches);
