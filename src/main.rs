// NES Emulator - entry point
//
// Single positional argument: path to an iNES ROM. Exit code 0 on a clean
// window close, non-zero (with a logged error) if the ROM fails to load.

use nes_rs::display::{run_emulator, WindowConfig};
use nes_rs::emulator::Emulator;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let rom_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: nes-rs <rom.nes>");
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        log::error!("failed to load ROM '{}': {}", rom_path, err);
        return ExitCode::FAILURE;
    }

    let config = emulator.config().video.clone();
    let window_config = WindowConfig {
        scale: config.scale,
        target_fps: config.fps,
        vsync: config.vsync,
    };

    if let Err(err) = run_emulator(window_config, emulator) {
        log::error!("emulator exited with an error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
