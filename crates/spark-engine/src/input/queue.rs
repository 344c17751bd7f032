use crate::api::types::Trigger;

/// A queue of UI triggers.
/// Event handlers push; the render loop drains it at the start of each tick,
/// so no trigger ever touches simulation state mid-frame.
pub struct TriggerQueue {
    events: Vec<Trigger>,
}

impl TriggerQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new trigger (called from DOM event handlers).
    pub fn push(&mut self, event: Trigger) {
        // Consecutive pointer moves collapse into the latest sample.
        if let (Some(Trigger::PointerMove(last)), Trigger::PointerMove(next)) =
            (self.events.last_mut(), event)
        {
            *last = next;
            return;
        }
        self.events.push(event);
    }

    /// Drain all pending triggers. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<Trigger> {
        std::mem::take(&mut self.events)
    }

    /// Push a trigger that replaces state, dropping any queued trigger of
    /// the same kind first. Keeps the queue bounded while nothing drains it.
    pub fn push_latest(&mut self, event: Trigger) {
        let kind = std::mem::discriminant(&event);
        self.events.retain(|e| std::mem::discriminant(e) != kind);
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for TriggerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn push_and_drain() {
        let mut q = TriggerQueue::new();
        q.push(Trigger::Click(Vec2::new(10.0, 20.0)));
        q.push(Trigger::FilterChanged);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn push_latest_keeps_one_per_kind() {
        let mut q = TriggerQueue::new();
        for i in 0..50 {
            q.push_latest(Trigger::PointerMove(Vec2::new(i as f32, 0.0)));
            q.push_latest(Trigger::PointerLeave);
            q.push_latest(Trigger::PointerEnter);
        }
        assert_eq!(
            q.drain(),
            vec![
                Trigger::PointerMove(Vec2::new(49.0, 0.0)),
                Trigger::PointerLeave,
                Trigger::PointerEnter,
            ]
        );
    }

    #[test]
    fn consecutive_moves_coalesce() {
        let mut q = TriggerQueue::new();
        q.push(Trigger::PointerMove(Vec2::new(1.0, 1.0)));
        q.push(Trigger::PointerMove(Vec2::new(2.0, 2.0)));
        q.push(Trigger::Click(Vec2::new(2.0, 2.0)));
        q.push(Trigger::PointerMove(Vec2::new(3.0, 3.0)));
        let events = q.drain();
        assert_eq!(
            events,
            vec![
                Trigger::PointerMove(Vec2::new(2.0, 2.0)),
                Trigger::Click(Vec2::new(2.0, 2.0)),
                Trigger::PointerMove(Vec2::new(3.0, 3.0)),
            ]
        );
    }
}
