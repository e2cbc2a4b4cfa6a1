//! Control block between the window context and the frame loop.
//!
//! Input arrives on the event loop (key presses, file drops); the frame loop
//! wants to see it exactly once, at frame start. [`SceneControls`] is the
//! small mutex-guarded queue bridging the two: events push into it at any
//! time, the frame loop drains it once per frame and applies the result in
//! a fixed order.
//!
//! The mutex is held only for a push or a swap, never across frame work.

use std::path::PathBuf;

use parking_lot::Mutex;

/// Pending control input, drained once per frame.
#[derive(Debug, Default)]
struct ControlQueue {
    /// Phase toggles requested since the last drain.
    phase_toggles: u32,
    /// Photo files requested since the last drain, oldest first.
    photo_requests: Vec<PathBuf>,
}

/// Everything the frame loop drained at the start of one frame.
#[derive(Clone, Debug, Default)]
pub struct ControlSnapshot {
    /// How many times the phase toggle fired. An even count cancels out.
    pub phase_toggles: u32,
    /// Photo files to load, oldest first.
    pub photo_requests: Vec<PathBuf>,
}

impl ControlSnapshot {
    /// True when the frame has nothing to apply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phase_toggles == 0 && self.photo_requests.is_empty()
    }

    /// True when the net effect of the queued toggles is a phase flip.
    #[must_use]
    pub const fn wants_phase_flip(&self) -> bool {
        self.phase_toggles % 2 == 1
    }
}

/// Shared control state. The window context pushes; the frame loop drains.
#[derive(Debug, Default)]
pub struct SceneControls {
    queue: Mutex<ControlQueue>,
}

impl SceneControls {
    /// Creates an empty control block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one phase toggle (chaos <-> formed).
    pub fn request_toggle(&self) {
        self.queue.lock().phase_toggles += 1;
    }

    /// Queues a photo file for assignment to a frame slot.
    pub fn request_photo(&self, path: PathBuf) {
        self.queue.lock().photo_requests.push(path);
    }

    /// Takes everything queued so far and resets the queue.
    #[must_use]
    pub fn drain(&self) -> ControlSnapshot {
        let mut queue = self.queue.lock();
        let snapshot = ControlSnapshot {
            phase_toggles: queue.phase_toggles,
            photo_requests: std::mem::take(&mut queue.photo_requests),
        };
        queue.phase_toggles = 0;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_the_queue() {
        let controls = SceneControls::new();
        controls.request_toggle();
        controls.request_photo(PathBuf::from("a.png"));
        controls.request_photo(PathBuf::from("b.png"));

        let snapshot = controls.drain();
        assert_eq!(snapshot.phase_toggles, 1);
        assert!(snapshot.wants_phase_flip());
        assert_eq!(
            snapshot.photo_requests,
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );

        let empty = controls.drain();
        assert!(empty.is_empty());
        assert!(!empty.wants_phase_flip());
    }

    #[test]
    fn test_even_toggle_count_cancels() {
        let controls = SceneControls::new();
        controls.request_toggle();
        controls.request_toggle();
        let snapshot = controls.drain();
        assert_eq!(snapshot.phase_toggles, 2);
        assert!(!snapshot.wants_phase_flip());
    }

    #[test]
    fn test_pushes_from_another_thread_arrive() {
        let controls = std::sync::Arc::new(SceneControls::new());
        let remote = std::sync::Arc::clone(&controls);
        let handle = std::thread::spawn(move || {
            remote.request_toggle();
            remote.request_photo(PathBuf::from("dropped.jpg"));
        });
        handle.join().expect("control thread must not panic");

        let snapshot = controls.drain();
        assert_eq!(snapshot.phase_toggles, 1);
        assert_eq!(snapshot.photo_requests.len(), 1);
    }
}
