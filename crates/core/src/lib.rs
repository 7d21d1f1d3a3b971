//! Corridor core: a screen-stack navigator for event-driven GUI surfaces.
//!
//! The central piece is [`view::navigator::Navigator`], which owns a stack of
//! screens declared as named routes, animates push/pop transitions, and
//! interprets left-edge drags as a back gesture. Rendering, input delivery
//! and the clock are capabilities supplied by the host: it draws through a
//! [`framebuffer::Framebuffer`], feeds raw contacts through a
//! [`gesture::GestureDetector`], and advances transitions with tick events.

#[macro_use]
pub mod geom;

pub mod animation;
pub mod color;
pub mod context;
pub mod framebuffer;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod settings;
pub mod view;
