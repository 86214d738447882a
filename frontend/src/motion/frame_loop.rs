use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

type Step = Rc<RefCell<Box<dyn FnMut(f64) -> bool>>>;
type Slot = Rc<RefCell<Option<AnimationFrame>>>;

/// Chain of animation frames driving `step` until it returns `false`.
///
/// Dropping the loop cancels the pending frame, so a superseded chain can
/// never fire again.
pub struct FrameLoop {
    pending: Slot,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let pending: Slot = Rc::new(RefCell::new(None));
        let step: Step = Rc::new(RefCell::new(Box::new(step)));
        schedule(pending.clone(), step);
        Self { pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn schedule(pending: Slot, step: Step) {
    let slot = pending.clone();
    let handle = request_animation_frame(move |timestamp| {
        slot.borrow_mut().take();
        let keep_going = {
            let mut step_fn = step.borrow_mut();
            (&mut **step_fn)(timestamp)
        };
        if keep_going {
            schedule(slot, step);
        }
    });
    *pending.borrow_mut() = Some(handle);
}
