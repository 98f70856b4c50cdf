use crate::domain::animation::GlowInterpolator;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-frame driver for the cursor glow. The pending frame handle must be
/// held - dropping an `AnimationFrame` cancels the request - so the loop
/// stores it for the page's lifetime.
pub struct GlowLoop {
    interpolator: RefCell<GlowInterpolator>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl GlowLoop {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            interpolator: RefCell::new(GlowInterpolator::new()),
            frame: RefCell::new(None),
        })
    }

    /// Feed the raw pointer position; the displayed position catches up
    /// over the following frames.
    pub fn set_target(&self, x: f64, y: f64) {
        self.interpolator.borrow_mut().set_target(x, y);
    }

    /// Start the self-rescheduling frame loop. No termination condition;
    /// skipped frames under load cost smoothness, never correctness.
    pub fn start(self: &Rc<Self>) {
        Self::schedule(Rc::clone(self));
    }

    fn schedule(this: Rc<Self>) {
        let next = Rc::clone(&this);
        let handle = request_animation_frame(move |_timestamp| {
            next.frame.borrow_mut().take();
            let shown = next.interpolator.borrow_mut().tick();
            apply_glow_position(shown.x, shown.y);
            Self::schedule(Rc::clone(&next));
        });
        *this.frame.borrow_mut() = Some(handle);
    }
}

/// The stylesheet consumes these two custom properties to place the glow;
/// they have no functional impact on the data flow.
fn apply_glow_position(x: f64, y: f64) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("--mouse-x", &format!("{x}px"));
        let _ = style.set_property("--mouse-y", &format!("{y}px"));
    }
}
