//! View tree infrastructure.
//!
//! Views are owned trait objects composed into a tree. Events are delivered
//! to a view's `handle_event`; a view reacts, forwards to its children, or
//! ignores. Child views communicate upwards by pushing events onto the `Bus`
//! handed to them, which their parent drains. Long-lived senders (the host
//! loop) use the `Hub`. Views never draw directly: they enqueue damaged
//! regions on the [`RenderQueue`] and the host repaints through
//! [`render_tree`].

pub mod button;
pub mod filler;
pub mod navigator;
pub mod panel;

use crate::context::Context;
use crate::framebuffer::Framebuffer;
use crate::geom::Rectangle;
use crate::gesture::GestureEvent;
use crate::input::DeviceEvent;
use downcast_rs::{impl_downcast, Downcast};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;

pub use crate::framebuffer::UpdateMode;

pub type Id = u64;

pub struct IdFeeder(AtomicU64);

impl IdFeeder {
    pub fn next(&self) -> Id {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

pub static ID_FEEDER: IdFeeder = IdFeeder(AtomicU64::new(1));

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Device(DeviceEvent),
    Gesture(GestureEvent),
    /// Animation frame; `time` is the host clock in seconds.
    Tick {
        time: f64,
    },
    /// Request to push the named route onto the navigation stack.
    Push(String),
    /// Request to pop the top screen.
    Pop,
    Quit,
}

/// Channel used by the host loop and background senders.
pub type Hub = Sender<Event>;

/// Per-dispatch queue a child uses to bubble events to its parent.
pub type Bus = VecDeque<Event>;

#[derive(Debug, Clone, Copy)]
pub struct RenderData {
    pub id: Id,
    pub rect: Rectangle,
    pub mode: UpdateMode,
}

impl RenderData {
    pub fn new(id: Id, rect: Rectangle, mode: UpdateMode) -> RenderData {
        RenderData { id, rect, mode }
    }
}

#[derive(Debug, Default)]
pub struct RenderQueue {
    entries: VecDeque<RenderData>,
}

impl RenderQueue {
    pub fn new() -> RenderQueue {
        RenderQueue::default()
    }

    pub fn add(&mut self, data: RenderData) {
        self.entries.push_back(data);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = RenderData> + '_ {
        self.entries.drain(..)
    }
}

pub trait View: Downcast {
    /// Reacts to an event.
    ///
    /// Returns `true` when the event was consumed and must not propagate
    /// further. Events for the parent go onto `bus`.
    fn handle_event(
        &mut self,
        evt: &Event,
        hub: &Hub,
        bus: &mut Bus,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> bool;

    /// Draws this view (not its children) inside `rect`.
    fn render(&self, fb: &mut dyn Framebuffer, rect: Rectangle);

    fn rect(&self) -> &Rectangle;

    fn rect_mut(&mut self) -> &mut Rectangle;

    fn children(&self) -> &Vec<Box<dyn View>>;

    fn children_mut(&mut self) -> &mut Vec<Box<dyn View>>;

    fn id(&self) -> Id;
}

impl_downcast!(View);

/// Paints `view` and its descendants, parents first, onto `fb`.
pub fn render_tree(view: &dyn View, fb: &mut dyn Framebuffer) {
    let rect = *view.rect();
    view.render(fb, rect);
    for child in view.children() {
        render_tree(child.as_ref(), fb);
    }
}
