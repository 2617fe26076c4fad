// Window module - presents the PPU's RGBA framebuffer via winit + pixels
//
// Drives the Frame Loop once per redraw: polls keyboard/gamepad input into
// the Controller, runs the emulator until a frame is ready, then blits the
// PPU's framebuffer into the window.

use crate::emulator::Emulator;
use crate::input::{translate_gamepad_button, KeyboardMapping};
use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use gilrs::{Event as GilrsEvent, EventType as GilrsEventType, Gilrs};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub scale: u32,
    pub target_fps: u32,
    pub vsync: bool,
}

impl WindowConfig {
    pub fn new() -> Self {
        WindowConfig {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Host window that owns the emulator and drives its Frame Loop.
pub struct EmulatorWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    emulator: Emulator,
    keymap: KeyboardMapping,
    gilrs: Option<Gilrs>,
    last_frame_time: Instant,
}

impl EmulatorWindow {
    pub fn new(config: WindowConfig, emulator: Emulator) -> Self {
        EmulatorWindow {
            window: None,
            pixels: None,
            config,
            emulator,
            keymap: KeyboardMapping::default_player1(),
            gilrs: Gilrs::new().ok(),
            last_frame_time: Instant::now(),
        }
    }

    fn poll_gamepad(&mut self) {
        let Some(gilrs) = &mut self.gilrs else {
            return;
        };
        while let Some(GilrsEvent { event, .. }) = gilrs.next_event() {
            let (button, pressed) = match event {
                GilrsEventType::ButtonPressed(button, _) => (button, true),
                GilrsEventType::ButtonReleased(button, _) => (button, false),
                _ => continue,
            };
            if let Some(id) = translate_gamepad_button(button) {
                self.emulator.bus_mut().controller1().set_button(id, pressed);
            }
        }
    }

    fn should_render_frame(&mut self) -> bool {
        let elapsed = self.last_frame_time.elapsed();
        if elapsed >= self.config.frame_duration() {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        self.emulator.run_frame();
        if let Some(pixels) = &mut self.pixels {
            pixels.frame_mut().copy_from_slice(self.emulator.bus().ppu().frame());
            pixels.render()?;
        }
        Ok(())
    }
}

impl ApplicationHandler for EmulatorWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("nes-rs")
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = event_loop
            .create_window(window_attributes)
            .expect("failed to create window");
        let window = Arc::new(window);
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture)
            .expect("failed to create pixel buffer");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key, state, ..
                },
                ..
            } => {
                if let Some(id) = self.keymap.translate(physical_key) {
                    let pressed = state == ElementState::Pressed;
                    self.emulator.bus_mut().controller1().set_button(id, pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.poll_gamepad();
                if self.should_render_frame() {
                    if let Err(err) = self.render() {
                        log::error!("render error: {}", err);
                        event_loop.exit();
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the window and run the emulator's Frame Loop until closed.
pub fn run_emulator(config: WindowConfig, emulator: Emulator) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(if config.vsync {
        ControlFlow::Wait
    } else {
        ControlFlow::Poll
    });

    let mut window = EmulatorWindow::new(config, emulator);
    event_loop.run_app(&mut window)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_dimensions_scale_correctly() {
        let config = WindowConfig::new();
        assert_eq!(config.window_width(), 768);
        assert_eq!(config.window_height(), 720);
    }

    #[test]
    fn frame_duration_is_approximately_60hz() {
        let config = WindowConfig::new();
        assert_eq!(config.frame_duration().as_micros(), 16666);
    }
}
