//! Screen-stack navigation.
//!
//! [`Navigator`] owns an ordered stack of screens built from a declared
//! [`RouteTable`]. The top screen slides in when pushed and slides out when
//! popped, driven by a single horizontal offset; a drag starting in the left
//! edge zone tracks that offset directly and resolves to either a pop or a
//! snap-back on release. The base screen can never be popped.
//!
//! Ordering rules keep the stack and the picture consistent: a push mutates
//! the stack first and animates the new screen in, while a pop animates the
//! old screen out and only removes it when the transition completes. When a
//! new push or pop arrives mid-transition the offset is restarted; the last
//! caller wins, nothing is queued.

pub mod routes;

pub use routes::{RouteDescriptor, RouteError, RouteTable, ScreenBuilder};

use crate::animation::{AnimatedValue, Easing};
use crate::color::Color;
use crate::context::Context;
use crate::framebuffer::Framebuffer;
use crate::geom::{Point, Rectangle};
use crate::gesture::GestureEvent;
use crate::view::{Bus, Event, Hub, Id, RenderData, RenderQueue, UpdateMode, View, ID_FEEDER};

/// Shifts a view and its descendants by `delta`.
fn shift_view(view: &mut dyn View, delta: Point) {
    *view.rect_mut() += delta;
    for child in view.children_mut() {
        shift_view(child.as_mut(), delta);
    }
}

pub struct Navigator {
    id: Id,
    rect: Rectangle,
    /// Screen stack, bottom to top. Never empty.
    children: Vec<Box<dyn View>>,
    /// Route names, aligned with `children`.
    names: Vec<String>,
    routes: RouteTable,
    /// Horizontal displacement of the top screen, in pixels.
    offset: AnimatedValue,
    /// Shift currently applied to the top screen's rectangles.
    shifted: i32,
    /// A pop whose stack mutation waits for the transition to complete.
    pending_pop: bool,
    dragging: bool,
    background: Color,
    transition: f64,
    easing: Easing,
    edge_fraction: f32,
    commit_fraction: f32,
}

impl Navigator {
    /// Builds the navigator and seeds the stack with the initial route
    /// (the first declared one unless `initial` overrides it).
    pub fn new(
        rect: Rectangle,
        routes: Vec<RouteDescriptor>,
        initial: Option<&str>,
        context: &mut Context,
    ) -> Result<Navigator, RouteError> {
        let routes = RouteTable::from_descriptors(routes)?;

        let initial = match initial {
            Some(name) if routes.contains(name) => name.to_string(),
            Some(name) => return Err(RouteError::NotFound(name.to_string())),
            None => routes.first_name().to_string(),
        };

        let seed = match routes.get(&initial) {
            Some(builder) => builder(rect, context),
            None => return Err(RouteError::NotFound(initial)),
        };

        let settings = &context.settings.navigator;
        let navigator = Navigator {
            id: ID_FEEDER.next(),
            rect,
            children: vec![seed],
            names: vec![initial.clone()],
            routes,
            offset: AnimatedValue::new(0.0),
            shifted: 0,
            pending_pop: false,
            dragging: false,
            background: settings.background,
            transition: settings.transition_ms as f64 / 1000.0,
            easing: settings.easing,
            edge_fraction: settings.edge_fraction,
            commit_fraction: settings.commit_fraction,
        };

        tracing::info!(route = %initial, routes = navigator.routes.len(), "navigator ready");

        Ok(navigator)
    }

    pub fn depth(&self) -> usize {
        self.children.len()
    }

    pub fn top_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// Current displacement of the top screen.
    pub fn offset_value(&self) -> f32 {
        self.offset.value()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// Whether a drag starting at `start` may become a back gesture:
    /// only above the base screen, only from the left edge zone.
    pub fn admits_drag(&self, start: Point) -> bool {
        self.children.len() > 1
            && ((start.x - self.rect.min.x) as f32) < self.edge_fraction * self.width()
    }

    /// Appends the named route's screen and slides it in.
    ///
    /// Fails with [`RouteError::NotFound`] for undeclared names; the stack
    /// and offset stay untouched in that case.
    pub fn push(
        &mut self,
        name: &str,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> Result<(), RouteError> {
        let Some(builder) = self.routes.get(name) else {
            return Err(RouteError::NotFound(name.to_string()));
        };

        let screen = builder(self.rect, context);

        self.settle_top();
        self.dragging = false;
        self.pending_pop = false;

        self.children.push(screen);
        self.names.push(name.to_string());

        self.offset.set(self.width());
        self.offset.animate_to(0.0, self.transition, self.easing);
        self.apply_shift(rq);
        rq.add(RenderData::new(self.id, self.rect, UpdateMode::Gui));

        tracing::info!(route = name, depth = self.children.len(), "pushed route");

        Ok(())
    }

    /// Slides the top screen out; the stack shrinks when the transition
    /// completes. Popping the base screen is a no-op.
    pub fn pop(&mut self, rq: &mut RenderQueue) {
        if self.children.len() <= 1 {
            tracing::debug!("pop ignored at base screen");
            return;
        }

        self.dragging = false;
        self.pending_pop = true;
        self.offset
            .animate_to(self.width(), self.transition, self.easing);
        rq.add(RenderData::new(self.id, self.rect, UpdateMode::Partial));

        tracing::info!(route = self.top_name(), "pop started");
    }

    /// Advances the transition to the host clock and applies deferred
    /// stack mutations on completion.
    pub fn tick(&mut self, time: f64, rq: &mut RenderQueue) {
        if !self.offset.is_animating() {
            return;
        }

        let finished = self.offset.tick(time);
        self.apply_shift(rq);

        if finished {
            if self.pending_pop {
                self.complete_pop();
            }

            rq.add(RenderData::new(self.id, self.rect, UpdateMode::Gui));
        }
    }

    fn width(&self) -> f32 {
        self.rect.width() as f32
    }

    /// Re-shifts the top screen to match the offset value.
    fn apply_shift(&mut self, rq: &mut RenderQueue) {
        let target = self.offset.value().round() as i32;
        let delta = target - self.shifted;

        if delta == 0 {
            return;
        }

        if let Some(top) = self.children.last_mut() {
            shift_view(top.as_mut(), pt!(delta, 0));
        }

        self.shifted = target;
        rq.add(RenderData::new(self.id, self.rect, UpdateMode::Partial));
    }

    /// Returns the in-flight top screen to its rest position and stops the
    /// offset, so a new transition starts from a clean slate.
    fn settle_top(&mut self) {
        if self.shifted != 0 {
            if let Some(top) = self.children.last_mut() {
                shift_view(top.as_mut(), pt!(-self.shifted, 0));
            }
            self.shifted = 0;
        }

        self.offset.set(0.0);
    }

    fn complete_pop(&mut self) {
        self.children.pop();
        let name = self.names.pop();
        self.pending_pop = false;
        self.shifted = 0;
        self.offset.set(0.0);

        tracing::info!(
            route = name.as_deref().unwrap_or_default(),
            depth = self.children.len(),
            "popped route"
        );
    }

    fn begin_drag(&mut self, rq: &mut RenderQueue) {
        self.dragging = true;
        self.pending_pop = false;
        self.offset.set(0.0);
        self.apply_shift(rq);
    }

    fn track_drag(&mut self, current: Point, rq: &mut RenderQueue) {
        let x = (current.x - self.rect.min.x).max(0) as f32;
        self.offset.set(x.min(self.width()));
        self.apply_shift(rq);
    }

    fn resolve_drag(&mut self, end: Point, rq: &mut RenderQueue) {
        self.dragging = false;

        let x = (end.x - self.rect.min.x) as f32;
        if x >= self.commit_fraction * self.width() {
            self.pending_pop = true;
            self.offset
                .animate_to(self.width(), self.transition, self.easing);
            tracing::debug!(release = x, "drag committed to pop");
        } else {
            self.offset.animate_to(0.0, self.transition, self.easing);
            tracing::debug!(release = x, "drag snapped back");
        }

        rq.add(RenderData::new(self.id, self.rect, UpdateMode::Partial));
    }

    fn cancel_drag(&mut self, rq: &mut RenderQueue) {
        self.dragging = false;
        self.offset.animate_to(0.0, self.transition, self.easing);
        rq.add(RenderData::new(self.id, self.rect, UpdateMode::Partial));
    }

    fn handle_gesture(
        &mut self,
        gesture: GestureEvent,
        hub: &Hub,
        bus: &mut Bus,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> bool {
        match gesture {
            GestureEvent::DragStart { start } => {
                if !self.dragging && self.admits_drag(start) {
                    self.begin_drag(rq);
                    true
                } else {
                    false
                }
            }
            GestureEvent::DragMove { current, .. } if self.dragging => {
                self.track_drag(current, rq);
                true
            }
            GestureEvent::DragEnd { end, .. } if self.dragging => {
                self.resolve_drag(end, rq);
                true
            }
            GestureEvent::DragCancel if self.dragging => {
                self.cancel_drag(rq);
                true
            }
            _ => self.forward_to_top(&Event::Gesture(gesture), hub, bus, rq, context),
        }
    }

    /// Offers an event to the top screen (lower screens are fully occluded)
    /// and executes any push/pop requests it bubbles.
    fn forward_to_top(
        &mut self,
        evt: &Event,
        hub: &Hub,
        bus: &mut Bus,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> bool {
        let mut child_bus = Bus::new();
        let handled = match self.children.last_mut() {
            Some(top) => top.handle_event(evt, hub, &mut child_bus, rq, context),
            None => false,
        };

        while let Some(event) = child_bus.pop_front() {
            match event {
                Event::Push(name) => {
                    if let Err(err) = self.push(&name, rq, context) {
                        tracing::warn!(route = %name, %err, "dropping push request");
                    }
                }
                Event::Pop => self.pop(rq),
                other => bus.push_back(other),
            }
        }

        handled
    }
}

impl View for Navigator {
    fn handle_event(
        &mut self,
        evt: &Event,
        hub: &Hub,
        bus: &mut Bus,
        rq: &mut RenderQueue,
        context: &mut Context,
    ) -> bool {
        match evt {
            Event::Push(name) => {
                if let Err(err) = self.push(name, rq, context) {
                    tracing::warn!(route = %name, %err, "dropping push request");
                }
                true
            }
            Event::Pop => {
                self.pop(rq);
                true
            }
            Event::Tick { time } => {
                self.tick(*time, rq);
                true
            }
            Event::Gesture(gesture) => self.handle_gesture(*gesture, hub, bus, rq, context),
            Event::Quit => false,
            _ => self.forward_to_top(evt, hub, bus, rq, context),
        }
    }

    fn render(&self, fb: &mut dyn Framebuffer, rect: Rectangle) {
        if self.rect.intersects(&rect) {
            fb.fill_rect(&self.rect, self.background);
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
