use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::config::MIN_SCROLL_DISTANCE_PX;
use crate::dom;
use crate::motion::easing::{ease_in_out_cubic, progress};
use crate::motion::frame_loop::FrameLoop;

/// Identifies one scroll request. Frames carrying an older id are stale.
pub type AnimationId = u64;

#[derive(Debug, Clone, PartialEq)]
struct Trajectory {
    start: f64,
    target: f64,
    duration_ms: f64,
    first_frame_at: Option<f64>,
}

impl Trajectory {
    fn distance(&self) -> f64 {
        self.target - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollFrame {
    /// Move to this position and request another frame.
    Continue(f64),
    /// Move to this position; the animation is over.
    Finished(f64),
    /// The frame belongs to a superseded or completed request.
    Stale,
}

/// Trajectory bookkeeping for the single in-flight scroll animation.
#[derive(Debug, Default)]
pub struct ScrollController {
    next_id: AnimationId,
    active: Option<(AnimationId, Trajectory)>,
}

impl ScrollController {
    /// Cancels whatever is running and starts a new trajectory. Returns
    /// `None` when the target is within a pixel of `current`.
    pub fn begin(&mut self, current: f64, target: f64, duration_ms: f64) -> Option<AnimationId> {
        self.active = None;
        if (target - current).abs() < MIN_SCROLL_DISTANCE_PX {
            return None;
        }
        self.next_id += 1;
        let trajectory = Trajectory {
            start: current,
            target,
            duration_ms,
            first_frame_at: None,
        };
        self.active = Some((self.next_id, trajectory));
        Some(self.next_id)
    }

    pub fn frame(&mut self, id: AnimationId, now_ms: f64) -> ScrollFrame {
        let Some((active_id, trajectory)) = self.active.as_mut() else {
            return ScrollFrame::Stale;
        };
        if *active_id != id {
            return ScrollFrame::Stale;
        }

        let started = *trajectory.first_frame_at.get_or_insert(now_ms);
        let t = progress(now_ms - started, trajectory.duration_ms);
        if t < 1.0 {
            return ScrollFrame::Continue(trajectory.start + trajectory.distance() * ease_in_out_cubic(t));
        }

        let target = trajectory.target;
        self.active = None;
        ScrollFrame::Finished(target)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

/// Drives the window scroll position along the controller's trajectory,
/// one animation frame at a time. Cloning shares the same in-flight slot.
#[derive(Clone, Default)]
pub struct ScrollAnimator {
    controller: Rc<RefCell<ScrollController>>,
    running: Rc<RefCell<Option<FrameLoop>>>,
}

impl PartialEq for ScrollAnimator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(&self, target: f64, duration_ms: f64) {
        // Dropping the previous loop cancels its pending frame.
        self.running.borrow_mut().take();

        let current = match dom::scroll_y() {
            Ok(y) => y,
            Err(e) => {
                warn!("Cannot read scroll position: {}", e);
                return;
            }
        };

        let Some(id) = self.controller.borrow_mut().begin(current, target, duration_ms) else {
            debug!("Already at {}, skipping scroll animation", target);
            return;
        };
        debug!("Scrolling from {} to {} over {}ms", current, target, duration_ms);

        let controller = self.controller.clone();
        let frame_loop = FrameLoop::start(move |timestamp| {
            let frame = controller.borrow_mut().frame(id, timestamp);
            match frame {
                ScrollFrame::Continue(y) => {
                    dom::scroll_window_to(y);
                    true
                }
                ScrollFrame::Finished(y) => {
                    dom::scroll_window_to(y);
                    false
                }
                ScrollFrame::Stale => false,
            }
        });
        *self.running.borrow_mut() = Some(frame_loop);
    }

    pub fn cancel(&self) {
        self.running.borrow_mut().take();
        let mut controller = self.controller.borrow_mut();
        if controller.is_animating() {
            debug!("Cancelling scroll animation");
        }
        controller.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds frames every ~16ms until the controller stops, returning every
    /// position it produced.
    fn drive(controller: &mut ScrollController, id: AnimationId, from_ms: f64) -> Vec<f64> {
        let mut positions = Vec::new();
        let mut now = from_ms;
        loop {
            match controller.frame(id, now) {
                ScrollFrame::Continue(y) => positions.push(y),
                ScrollFrame::Finished(y) => {
                    positions.push(y);
                    return positions;
                }
                ScrollFrame::Stale => return positions,
            }
            now += 16.0;
            assert!(now < from_ms + 10_000.0, "animation never finished");
        }
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut controller = ScrollController::default();
        let id = controller.begin(0.0, 1234.5, 800.0).unwrap();
        let positions = drive(&mut controller, id, 100.0);

        assert_eq!(*positions.last().unwrap(), 1234.5);
        assert!(!controller.is_animating());
    }

    #[test]
    fn elapsed_time_counts_from_first_frame() {
        let mut controller = ScrollController::default();
        let id = controller.begin(0.0, 100.0, 800.0).unwrap();

        assert_eq!(controller.frame(id, 5000.0), ScrollFrame::Continue(0.0));
        assert_eq!(controller.frame(id, 5400.0), ScrollFrame::Continue(50.0));
        assert_eq!(controller.frame(id, 5800.0), ScrollFrame::Finished(100.0));
    }

    #[test]
    fn positions_move_monotonically_upwards() {
        let mut controller = ScrollController::default();
        let id = controller.begin(900.0, 0.0, 600.0).unwrap();
        let positions = drive(&mut controller, id, 0.0);

        assert!(positions.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_eq!(*positions.last().unwrap(), 0.0);
    }

    #[test]
    fn second_request_supersedes_first() {
        let mut controller = ScrollController::default();
        let first = controller.begin(0.0, 500.0, 800.0).unwrap();
        assert!(matches!(controller.frame(first, 0.0), ScrollFrame::Continue(_)));

        let second = controller.begin(120.0, 2000.0, 800.0).unwrap();
        assert_ne!(first, second);
        assert_eq!(controller.frame(first, 16.0), ScrollFrame::Stale);

        let positions = drive(&mut controller, second, 16.0);
        assert_eq!(*positions.last().unwrap(), 2000.0);
        assert_eq!(controller.frame(first, 5000.0), ScrollFrame::Stale);
    }

    #[test]
    fn sub_pixel_distance_is_a_no_op() {
        let mut controller = ScrollController::default();
        assert_eq!(controller.begin(300.0, 300.6, 800.0), None);
        assert_eq!(controller.begin(300.0, 299.2, 800.0), None);
        assert!(!controller.is_animating());
    }

    #[test]
    fn no_op_request_still_cancels_running_animation() {
        let mut controller = ScrollController::default();
        let id = controller.begin(0.0, 800.0, 800.0).unwrap();
        controller.frame(id, 0.0);

        assert_eq!(controller.begin(400.0, 400.0, 800.0), None);
        assert_eq!(controller.frame(id, 16.0), ScrollFrame::Stale);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let mut controller = ScrollController::default();
        let id = controller.begin(0.0, 42.0, 0.0).unwrap();
        assert_eq!(controller.frame(id, 10.0), ScrollFrame::Finished(42.0));
    }
}
