use super::{Bus, Event, Hub, Id, RenderQueue, View, ID_FEEDER};
use crate::color::Color;
use crate::context::Context;
use crate::framebuffer::Framebuffer;
use crate::geom::{Point, Rectangle};

/// A colored screen hosting child views.
///
/// Events are offered to children topmost-first; anything a child bubbles is
/// passed through to the panel's own parent.
pub struct Panel {
    id: Id,
    rect: Rectangle,
    children: Vec<Box<dyn View>>,
    color: Color,
}

impl Panel {
    pub fn new(rect: Rectangle, color: Color) -> Panel {
        Panel {
            id: ID_FEEDER.next(),
            rect,
            children: Vec::new(),
            color,
        }
    }

    pub fn child(mut self, view: Box<dyn View>) -> Panel {
        self.children.push(view);
        self
    }

    /// Moves the panel and everything on it.
    pub fn shift(&mut self, delta: Point) {
        self.rect += delta;
        for child in &mut self.children {
            *child.rect_mut() += delta;
        }
    }
}

impl View for Panel {
    fn handle_event(
        &mut self,
        evt: &Event,
        hub: &Hub,
        bus: &mut Bus,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> bool {
        for child in self.children.iter_mut().rev() {
            if child.handle_event(evt, hub, bus, rq, context) {
                return true;
            }
        }

        false
    }

    fn render(&self, fb: &mut dyn Framebuffer, rect: Rectangle) {
        if self.rect.intersects(&rect) {
            fb.fill_rect(&self.rect, self.color);
        }
    }

    fn rect(&self) -> &Rectangle {
        &self.rect
    }

    fn rect_mut(&mut self) -> &mut Rectangle {
        &mut self.rect
    }

    fn children(&self) -> &Vec<Box<dyn View>> {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Box<dyn View>> {
        &mut self.children
    }

    fn id(&self) -> Id {
        self.id
    }
}
