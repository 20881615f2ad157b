//! SDL2 window that shows a rendered buffer until it is closed.

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::buffer::PixelBuffer;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

impl Display {
    /// Open a centered window of the given size with VSync enabled
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;
        let event_pump = sdl_context.event_pump()?;
        debug!("opened {}x{} window '{}'", width, height, title);

        Ok(Self { canvas, event_pump })
    }

    /// Present `buffer` and keep redrawing it until the window is closed or
    /// Escape is pressed. The buffer is stretched to the window.
    pub fn show(&mut self, buffer: &PixelBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        // 0xRRGGBBAA words match SDL's packed RGBA8888 in native byte order
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                buffer.width() as u32,
                buffer.height() as u32,
            )
            .map_err(|e| e.to_string())?;
        texture
            .update(None, buffer.as_bytes(), (buffer.width() * 4) as usize)
            .map_err(|e| e.to_string())?;

        info!("showing {}x{} buffer, Escape to close", buffer.width(), buffer.height());
        'running: loop {
            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'running,
                    _ => {},
                }
            }
            self.canvas.clear();
            self.canvas.copy(&texture, None, None)?;
            self.canvas.present();
        }
        Ok(())
    }
}
