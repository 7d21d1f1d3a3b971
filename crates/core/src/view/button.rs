use super::{Bus, Event, Hub, Id, RenderQueue, View, ID_FEEDER};
use crate::color::{BUTTON_BORDER, BUTTON_NORMAL};
use crate::context::Context;
use crate::framebuffer::Framebuffer;
use crate::geom::Rectangle;
use crate::gesture::GestureEvent;

const BORDER_THICKNESS: i32 = 2;

/// A tappable control that emits its configured event.
///
/// The caption is carried for hosts that can draw text; the built-in
/// rendering is limited to the button chrome.
pub struct Button {
    id: Id,
    rect: Rectangle,
    children: Vec<Box<dyn View>>,
    caption: String,
    event: Event,
}

impl Button {
    pub fn new(rect: Rectangle, caption: &str, event: Event) -> Button {
        Button {
            id: ID_FEEDER.next(),
            rect,
            children: Vec::new(),
            caption: caption.to_string(),
            event,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl View for Button {
    fn handle_event(
        &mut self,
        evt: &Event,
        _hub: &Hub,
        bus: &mut Bus,
        _rq: &mut RenderQueue,
        _context: &mut Context,
    ) -> bool {
        match *evt {
            Event::Gesture(GestureEvent::Tap(position)) if self.rect.includes(position) => {
                tracing::debug!(caption = %self.caption, "button tapped");
                bus.push_back(self.event.clone());
                true
            }
            _ => false,
        }
    }

    fn render(&self, fb: &mut dyn Framebuffer, rect: Rectangle) {
        if !self.rect.intersects(&rect) {
            return;
        }

        fb.fill_rect(&self.rect, BUTTON_BORDER);

        let face = rect![
            self.rect.min.x + BORDER_THICKNESS,
            self.rect.min.y + BORDER_THICKNESS,
            self.rect.max.x - BORDER_THICKNESS,
            self.rect.max.y - BORDER_THICKNESS
        ];

        if !face.is_empty() {
            fb.fill_rect(&face, BUTTON_NORMAL);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_helpers::create_test_context;
    use std::collections::VecDeque;
    use std::sync::mpsc::channel;

    #[test]
    fn tap_inside_emits_configured_event() {
        let mut button = Button::new(rect![10, 10, 110, 60], "Details", Event::Push("details".to_string()));

        let (hub, _receiver) = channel();
        let mut bus = VecDeque::new();
        let mut rq = RenderQueue::new();
        let mut context = create_test_context();

        let evt = Event::Gesture(GestureEvent::Tap(pt!(50, 30)));
        assert!(button.handle_event(&evt, &hub, &mut bus, &mut rq, &mut context));
        assert_eq!(bus.pop_front(), Some(Event::Push("details".to_string())));
    }

    #[test]
    fn tap_outside_is_ignored() {
        let mut button = Button::new(rect![10, 10, 110, 60], "Details", Event::Pop);

        let (hub, _receiver) = channel();
        let mut bus = VecDeque::new();
        let mut rq = RenderQueue::new();
        let mut context = create_test_context();

        let evt = Event::Gesture(GestureEvent::Tap(pt!(200, 200)));
        assert!(!button.handle_event(&evt, &hub, &mut bus, &mut rq, &mut context));
        assert!(bus.is_empty());
    }

    #[test]
    fn non_tap_events_are_ignored() {
        let mut button = Button::new(rect![0, 0, 50, 50], "Back", Event::Pop);

        let (hub, _receiver) = channel();
        let mut bus = VecDeque::new();
        let mut rq = RenderQueue::new();
        let mut context = create_test_context();

        assert!(!button.handle_event(&Event::Pop, &hub, &mut bus, &mut rq, &mut context));
        assert!(bus.is_empty());
    }
}
