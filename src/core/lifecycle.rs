//! Mount/unmount bookkeeping, independent of the browser.
//!
//! A [`Host`] knows how to attach a listener for each ambient [`Signal`] and
//! how to request a display frame. [`Mount`] registers everything up front,
//! keeps exactly one frame request outstanding while alive, and releases all
//! of it on unmount.

/// Ambient inputs the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Resize,
    PointerMove,
    PointerLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    ReducedMotionChange,
    CoarsePointerChange,
    VisibilityChange,
}

impl Signal {
    pub const ALL: [Signal; 9] = [
        Signal::Resize,
        Signal::PointerMove,
        Signal::PointerLeave,
        Signal::TouchStart,
        Signal::TouchMove,
        Signal::TouchEnd,
        Signal::ReducedMotionChange,
        Signal::CoarsePointerChange,
        Signal::VisibilityChange,
    ];
}

pub trait Host {
    type Listener;
    type FrameRequest;

    /// `None` when the event target is unavailable; the signal is then skipped.
    fn listen(&mut self, signal: Signal) -> Option<Self::Listener>;
    fn unlisten(&mut self, listener: Self::Listener);
    fn request_frame(&mut self) -> Option<Self::FrameRequest>;
    fn cancel_frame(&mut self, request: Self::FrameRequest);
}

pub struct Mount<H: Host> {
    host: H,
    listeners: Vec<H::Listener>,
    pending: Option<H::FrameRequest>,
    disposed: bool,
}

impl<H: Host> Mount<H> {
    pub fn mount(mut host: H) -> Self {
        let listeners = Signal::ALL
            .iter()
            .filter_map(|s| host.listen(*s))
            .collect();
        let pending = host.request_frame();
        Self {
            host,
            listeners,
            pending,
            disposed: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_mounted(&self) -> bool {
        !self.disposed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Called at the top of a frame callback. The request that fired is
    /// consumed; returns false once unmounted.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        !self.disposed
    }

    /// Request the next frame unless unmounted or one is already pending.
    pub fn schedule_next(&mut self) {
        if self.disposed || self.pending.is_some() {
            return;
        }
        self.pending = self.host.request_frame();
    }

    /// Cancel the outstanding frame and drop every listener. Idempotent.
    pub fn unmount(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(req) = self.pending.take() {
            self.host.cancel_frame(req);
        }
        for l in self.listeners.drain(..) {
            self.host.unlisten(l);
        }
    }
}

impl<H: Host> Drop for Mount<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
