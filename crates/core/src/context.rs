//! Shared state threaded through event handling.

use crate::geom::Rectangle;
use crate::settings::Settings;

/// Dimensions of the host display, injected at startup.
#[derive(Debug, Clone, Copy)]
pub struct Display {
    pub dims: (u32, u32),
}

impl Display {
    pub fn new(width: u32, height: u32) -> Display {
        Display {
            dims: (width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.dims.0
    }

    pub fn height(&self) -> u32 {
        self.dims.1
    }

    pub fn rect(&self) -> Rectangle {
        rect![0, 0, self.dims.0 as i32, self.dims.1 as i32]
    }
}

pub struct Context {
    pub display: Display,
    pub settings: Settings,
}

impl Context {
    pub fn new(display: Display, settings: Settings) -> Context {
        Context { display, settings }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod test_helpers {
    use super::*;

    pub fn create_test_context() -> Context {
        Context::new(Display::new(600, 800), Settings::default())
    }
}
