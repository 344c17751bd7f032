/// Handle for one pending next-frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// "Call me on the next display frame" primitive.
///
/// The render loop asks for exactly one frame at a time and cancels the
/// outstanding request when it stops. On the web this wraps
/// `requestAnimationFrame`; headless drivers and tests use [`ManualScheduler`].
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending request. Cancelling an already-fired token is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Scheduler driven by hand: records requests so a test or a native host can
/// decide when frames fire.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<FrameToken>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, as if the display refreshed.
    pub fn fire(&mut self) -> Option<FrameToken> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total requests ever made.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total requests cancelled while still pending.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.push(token);
        self.requested += 1;
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Some(idx) = self.pending.iter().position(|t| *t == token) {
            self.pending.remove(idx);
            self.cancelled += 1;
        }
    }
}
