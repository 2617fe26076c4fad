// Display module - host window creation and frame presentation
//
// The PPU already produces an RGBA framebuffer (see `ppu::Ppu::frame`); this
// module's only job is to blit it to a window via `winit` + `pixels` and
// translate window/gamepad events into controller input.

pub mod window;

pub use window::{run_emulator, EmulatorWindow, WindowConfig};
