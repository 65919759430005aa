//! Winit input adapter
//!
//! Tracks the primary pointer across winit events and emits engine
//! [`PointerEvent`]s. AR handsets report touches; desktop builds use the
//! left mouse button. Either way the engine sees a single down/move/up
//! stream.

use std::time::Instant;

use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use crate::interaction::pointer::PointerEvent;

pub struct PointerAdapter {
    cursor: (f32, f32),
    pressed: bool,
    started: Instant,
}

impl PointerAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            pressed: false,
            started: Instant::now(),
        }
    }

    /// Session time in seconds, the timestamp attached to emitted events.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Translates one window event. Cursor motion while the pointer is up
    /// produces nothing; gestures only exist between down and up.
    pub fn process(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.pressed.then(|| PointerEvent::Moved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                    time: self.now(),
                })
            }
            WindowEvent::MouseInput { state, button, .. } if *button == MouseButton::Left => {
                let (x, y) = self.cursor;
                match state {
                    ElementState::Pressed => {
                        self.pressed = true;
                        Some(PointerEvent::Down {
                            x,
                            y,
                            time: self.now(),
                        })
                    }
                    ElementState::Released => {
                        self.pressed = false;
                        Some(PointerEvent::Up {
                            x,
                            y,
                            time: self.now(),
                        })
                    }
                }
            }
            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => {
                self.cursor = (location.x as f32, location.y as f32);
                let (x, y) = self.cursor;
                let time = self.now();
                match phase {
                    TouchPhase::Started => {
                        self.pressed = true;
                        Some(PointerEvent::Down { x, y, time })
                    }
                    TouchPhase::Moved => self.pressed.then_some(PointerEvent::Moved { x, y, time }),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.pressed = false;
                        Some(PointerEvent::Up { x, y, time })
                    }
                }
            }
            _ => None,
        }
    }
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new()
    }
}
