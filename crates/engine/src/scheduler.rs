//! Animation frame scheduling for a fixed-tick host loop.
//!
//! `request` registers a callback for the next frame and returns its handle,
//! `cancel` withdraws it. The host loop calls [`FrameScheduler::take_due_into`]
//! once per tick and fires what it gets, in scheduling order. Callbacks
//! requested while firing land in the following frame.

/// Opaque id of a scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a callback for the next frame.
    pub fn request(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    /// Withdraw a scheduled callback. Unknown or already fired handles are ignored.
    pub fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Move every due handle into `out` (cleared first). Reuses both buffers.
    pub fn take_due_into(&mut self, out: &mut Vec<FrameHandle>) {
        out.clear();
        out.append(&mut self.pending);
    }
}
