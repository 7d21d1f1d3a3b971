//! Headless demo of the corridor navigator.
//!
//! Declares three routes, then replays a scripted touch sequence through the
//! gesture detector and event loop: tap-driven pushes, a programmatic pop,
//! an edge drag that commits a pop, and one that snaps back. Transitions are
//! driven to completion with a synthetic clock between inputs, rendering to
//! an in-memory pixmap after every change.

use anyhow::Error;
use corridor_core::color::{SCREEN_CORAL, SCREEN_OLIVE, SCREEN_TEAL};
use corridor_core::context::{Context, Display};
use corridor_core::framebuffer::Pixmap;
use corridor_core::geom::Point;
use corridor_core::gesture::GestureDetector;
use corridor_core::input::{DeviceEvent, FingerStatus};
use corridor_core::logging::{init_logging, shutdown_logging};
use corridor_core::settings::Settings;
use corridor_core::view::button::Button;
use corridor_core::view::navigator::{Navigator, RouteDescriptor};
use corridor_core::view::panel::Panel;
use corridor_core::view::{render_tree, Bus, Event, Hub, RenderQueue, View};
use corridor_core::{pt, rect};
use std::path::Path;
use std::sync::mpsc;

const SETTINGS_PATH: &str = "Settings.toml";
const FRAME: f64 = 1.0 / 60.0;

fn declare_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("home", |rect, _context| {
            Box::new(
                Panel::new(rect, SCREEN_CORAL).child(Box::new(Button::new(
                    rect![150, 560, 450, 640],
                    "Open details",
                    Event::Push("details".to_string()),
                ))),
            ) as Box<dyn View>
        }),
        RouteDescriptor::new("details", |rect, _context| {
            Box::new(
                Panel::new(rect, SCREEN_TEAL)
                    .child(Box::new(Button::new(
                        rect![150, 460, 450, 540],
                        "About",
                        Event::Push("about".to_string()),
                    )))
                    .child(Box::new(Button::new(
                        rect![150, 560, 450, 640],
                        "Back",
                        Event::Pop,
                    ))),
            ) as Box<dyn View>
        }),
        RouteDescriptor::new("about", |rect, _context| {
            Box::new(
                Panel::new(rect, SCREEN_OLIVE).child(Box::new(Button::new(
                    rect![150, 560, 450, 640],
                    "Back",
                    Event::Pop,
                ))),
            ) as Box<dyn View>
        }),
    ]
}

struct Harness {
    navigator: Navigator,
    detector: GestureDetector,
    context: Context,
    fb: Pixmap,
    hub: Hub,
    receiver: mpsc::Receiver<Event>,
    clock: f64,
}

impl Harness {
    fn new(settings: Settings) -> Result<Harness, Error> {
        let display = Display::new(600, 800);
        let mut context = Context::new(display, settings);
        let navigator = Navigator::new(display.rect(), declare_routes(), None, &mut context)?;
        let (hub, receiver) = mpsc::channel();

        Ok(Harness {
            navigator,
            detector: GestureDetector::default(),
            context,
            fb: Pixmap::new(display.width(), display.height()),
            hub,
            receiver,
            clock: 0.0,
        })
    }

    fn dispatch(&mut self, evt: &Event) {
        let mut bus = Bus::new();
        let mut rq = RenderQueue::new();

        self.navigator
            .handle_event(evt, &self.hub, &mut bus, &mut rq, &mut self.context);

        for event in bus.drain(..) {
            tracing::debug!(?event, "event bubbled to the host");
        }

        if !rq.is_empty() {
            let damaged = rq.drain().count();
            tracing::trace!(damaged, "repainting");
            render_tree(&self.navigator, &mut self.fb);
        }
    }

    /// Feeds one raw contact through the gesture detector.
    fn touch(&mut self, status: FingerStatus, position: Point) {
        self.clock += FRAME;
        let device = DeviceEvent::Finger {
            id: 1,
            status,
            position,
            time: self.clock,
        };

        for gesture in self.detector.feed(&device) {
            self.dispatch(&Event::Gesture(gesture));
        }
    }

    fn tap(&mut self, position: Point) {
        self.touch(FingerStatus::Down, position);
        self.touch(FingerStatus::Up, position);
    }

    fn drag(&mut self, from: Point, to: Point) {
        self.touch(FingerStatus::Down, from);
        for step in 1..=4 {
            let position = pt!(
                from.x + (to.x - from.x) * step / 4,
                from.y + (to.y - from.y) * step / 4,
            );
            self.touch(FingerStatus::Motion, position);
        }
        self.touch(FingerStatus::Up, to);
    }

    /// Drains host-sent events, then runs any transition to completion.
    fn settle(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.dispatch(&event);
        }

        while self.navigator.is_animating() {
            self.clock += FRAME;
            self.dispatch(&Event::Tick { time: self.clock });
        }

        tracing::info!(
            depth = self.navigator.depth(),
            top = self.navigator.top_name(),
            "settled"
        );
    }
}

fn run() -> Result<(), Error> {
    let settings = if Path::new(SETTINGS_PATH).exists() {
        Settings::load(SETTINGS_PATH)?
    } else {
        Settings::default()
    };

    init_logging(&settings.logging)?;

    let mut harness = Harness::new(settings)?;
    render_tree(&harness.navigator, &mut harness.fb);

    tracing::info!("tapping through home -> details -> about");
    harness.tap(pt!(300, 600));
    harness.settle();
    harness.tap(pt!(300, 500));
    harness.settle();

    tracing::info!("popping back to details programmatically");
    harness.hub.send(Event::Pop)?;
    harness.settle();

    tracing::info!("edge drag past the middle commits a pop");
    harness.drag(pt!(30, 400), pt!(380, 400));
    harness.settle();

    tracing::info!("pushing details again, then a short drag snaps back");
    harness.tap(pt!(300, 600));
    harness.settle();
    harness.drag(pt!(30, 400), pt!(200, 400));
    harness.settle();

    tracing::info!(
        depth = harness.navigator.depth(),
        top = harness.navigator.top_name(),
        "walkthrough finished"
    );

    Ok(())
}

fn main() {
    let outcome = run();
    shutdown_logging();

    if let Err(err) = outcome {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
