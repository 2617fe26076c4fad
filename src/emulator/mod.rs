// Emulator module - aggregate emulator state and the Frame Loop
//
// `Emulator` owns the CPU and Bus (which in turn owns the PPU, controller,
// and cartridge mapper) and drives the single cooperative activity that
// makes the machine run: `run_frame`, the Frame Loop described in the
// core's concurrency model. There are no threads; the loop steps the CPU,
// counts instructions, and raises vblank/NMI at tunable thresholds rather
// than tracking real PPU cycles.

mod config;

pub use config::{EmulatorConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::{create_mapper, Cartridge, CartridgeError};
use crate::cpu::Cpu;
use std::path::{Path, PathBuf};

/// Instruction count after which vblank is cleared for the next frame.
pub const VBLANK_CLEAR_THRESHOLD: u32 = 1200;
/// Instruction count after which the Renderer runs and vblank is raised.
pub const VBLANK_SET_THRESHOLD: u32 = 4000;

/// Aggregate emulator: CPU, Bus, and the bookkeeping the Frame Loop needs.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
    instruction_count: u32,
    paused: bool,
}

impl Emulator {
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            instruction_count: 0,
            paused: false,
        }
    }

    /// Load an iNES ROM from disk, wire its mapper into the Bus, and reset.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CartridgeError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let mapper = create_mapper(cartridge).map_err(|e| CartridgeError::Io(e.to_string()))?;

        self.bus.load_cartridge(mapper);
        self.rom_path = Some(path.to_path_buf());
        self.instruction_count = 0;
        self.reset();
        Ok(())
    }

    /// Reset the CPU (and, transitively, PC) to power-on/reset-vector state.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.ppu_mut().reset();
        self.instruction_count = 0;
        self.paused = false;
    }

    /// Run the Frame Loop's steady-state body once: drain nothing (the
    /// caller drains input into the Controller before calling this), step
    /// the CPU once, and cross the vblank-clear/vblank-set thresholds as
    /// the instruction counter dictates. Returns true if this step crossed
    /// into vblank (a fresh frame is ready in `ppu().frame()`).
    pub fn step(&mut self) -> bool {
        if self.paused {
            return false;
        }

        self.cpu.step(&mut self.bus);
        self.instruction_count += 1;

        if self.instruction_count == VBLANK_CLEAR_THRESHOLD {
            self.bus.ppu_mut().end_vblank();
        }

        if self.instruction_count >= VBLANK_SET_THRESHOLD {
            self.bus.ppu_mut().begin_vblank();
            if self.bus.nmi_enabled() {
                self.cpu.nmi(&mut self.bus);
            }
            self.instruction_count = 0;
            return true;
        }

        false
    }

    /// Step the CPU until a frame is produced (vblank is raised).
    pub fn run_frame(&mut self) {
        while !self.step() {}
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
