// NES Emulator Library
//
// Core library for the emulator: a 6502 CPU interpreter, a memory-mapped
// Bus, a non-cycle-accurate PPU front-end, a controller latch, and the
// ambient stack (cartridge loading, config, Frame Loop, host window) that
// makes it a runnable program.

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;

pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};
pub use controller::Controller;
pub use cpu::Cpu;
pub use emulator::{Emulator, EmulatorConfig};
pub use ppu::Ppu;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_components_can_be_instantiated() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _cartridge = Cartridge::new();
        let _controller = Controller::new();
        let _emulator = Emulator::new();
    }
}
