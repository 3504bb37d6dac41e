// Host-side tests for mount/unmount bookkeeping against a fake host.

use grid_shimmer::core::{Host, Mount, Signal};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Default)]
struct Registry {
    live_listeners: HashSet<usize>,
    pending_frames: HashSet<usize>,
    next_id: usize,
    frames_requested: usize,
    frames_cancelled: usize,
}

#[derive(Clone, Default)]
struct FakeHost {
    registry: Rc<RefCell<Registry>>,
    missing: Vec<Signal>,
}

impl FakeHost {
    fn live_listeners(&self) -> usize {
        self.registry.borrow().live_listeners.len()
    }

    fn pending_frames(&self) -> usize {
        self.registry.borrow().pending_frames.len()
    }

    /// Simulate the browser firing every pending frame callback.
    fn fire_frames(&self) -> usize {
        let mut reg = self.registry.borrow_mut();
        let n = reg.pending_frames.len();
        reg.pending_frames.clear();
        n
    }
}

impl Host for FakeHost {
    type Listener = usize;
    type FrameRequest = usize;

    fn listen(&mut self, signal: Signal) -> Option<usize> {
        if self.missing.contains(&signal) {
            return None;
        }
        let mut reg = self.registry.borrow_mut();
        reg.next_id += 1;
        let id = reg.next_id;
        reg.live_listeners.insert(id);
        Some(id)
    }

    fn unlisten(&mut self, listener: usize) {
        assert!(
            self.registry.borrow_mut().live_listeners.remove(&listener),
            "listener {listener} removed twice"
        );
    }

    fn request_frame(&mut self) -> Option<usize> {
        let mut reg = self.registry.borrow_mut();
        reg.next_id += 1;
        reg.frames_requested += 1;
        let id = reg.next_id;
        reg.pending_frames.insert(id);
        Some(id)
    }

    fn cancel_frame(&mut self, request: usize) {
        let mut reg = self.registry.borrow_mut();
        reg.frames_cancelled += 1;
        reg.pending_frames.remove(&request);
    }
}

#[test]
fn mount_registers_every_signal_and_one_frame() {
    let host = FakeHost::default();
    let mount = Mount::mount(host.clone());
    assert!(mount.is_mounted());
    assert_eq!(mount.listener_count(), Signal::ALL.len());
    assert_eq!(host.live_listeners(), 9);
    assert_eq!(host.pending_frames(), 1);
}

#[test]
fn unmount_releases_everything() {
    let host = FakeHost::default();
    let mut mount = Mount::mount(host.clone());
    mount.unmount();
    assert!(!mount.is_mounted());
    assert_eq!(mount.listener_count(), 0);
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.pending_frames(), 0);
    assert_eq!(host.registry.borrow().frames_cancelled, 1);
}

#[test]
fn unmount_is_idempotent() {
    let host = FakeHost::default();
    let mut mount = Mount::mount(host.clone());
    mount.unmount();
    // A second call must not unlisten or cancel anything again.
    mount.unmount();
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.registry.borrow().frames_cancelled, 1);
    drop(mount);
    assert_eq!(host.registry.borrow().frames_cancelled, 1);
}

#[test]
fn dropping_a_mount_unmounts_it() {
    let host = FakeHost::default();
    {
        let _mount = Mount::mount(host.clone());
        assert_eq!(host.live_listeners(), 9);
    }
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn missing_targets_are_skipped() {
    let host = FakeHost {
        missing: vec![Signal::ReducedMotionChange, Signal::CoarsePointerChange],
        ..Default::default()
    };
    let mut mount = Mount::mount(host.clone());
    assert_eq!(mount.listener_count(), 7);
    assert_eq!(host.live_listeners(), 7);
    mount.unmount();
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn running_loop_keeps_exactly_one_frame_pending() {
    let host = FakeHost::default();
    let mut mount = Mount::mount(host.clone());
    for _ in 0..100 {
        assert_eq!(host.fire_frames(), 1);
        assert!(mount.begin_frame());
        mount.schedule_next();
        // Scheduling twice in one frame does not double up.
        mount.schedule_next();
        assert_eq!(host.pending_frames(), 1);
    }
    assert_eq!(host.registry.borrow().frames_requested, 101);
}

#[test]
fn no_frames_after_unmount() {
    let host = FakeHost::default();
    let mut mount = Mount::mount(host.clone());
    // A callback already queued by the browser fires after unmount.
    assert_eq!(host.fire_frames(), 1);
    mount.unmount();
    assert!(!mount.begin_frame());
    mount.schedule_next();
    assert_eq!(host.pending_frames(), 0);
    assert_eq!(host.registry.borrow().frames_requested, 1);
}

#[test]
fn mount_and_unmount_repeatedly_leaks_nothing() {
    let host = FakeHost::default();
    for _ in 0..25 {
        let mut mount = Mount::mount(host.clone());
        host.fire_frames();
        assert!(mount.begin_frame());
        mount.schedule_next();
        mount.unmount();
    }
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.pending_frames(), 0);
}
