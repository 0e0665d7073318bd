// Toast queue for transient status feedback, shown one at a time in the
// bottom status line and dismissed automatically.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            level: NotificationLevel::Info,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    fn expired(&self) -> bool {
        self.shown_at
            .map(|at| at.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

/// FIFO of pending toasts; the head is the one on screen.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Advance the queue: stamp the head when it first becomes visible and
    /// drop it once its duration has elapsed. Called from the tick loop.
    pub fn tick(&mut self) {
        if let Some(head) = self.queue.front_mut() {
            if head.shown_at.is_none() {
                head.shown_at = Some(Instant::now());
            } else if head.expired() {
                self.queue.pop_front();
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_stamped_then_dropped_after_its_duration() {
        let mut queue = NotificationQueue::default();
        let mut toast = Notification::success("sent");
        toast.duration = Duration::ZERO;
        queue.push(toast);
        queue.push(Notification::info("next"));

        assert_eq!(queue.current().unwrap().message, "sent");
        queue.tick(); // stamps
        queue.tick(); // expires
        assert_eq!(queue.current().unwrap().message, "next");
    }

    #[test]
    fn empty_queue_ticks_quietly() {
        let mut queue = NotificationQueue::default();
        queue.tick();
        assert!(queue.current().is_none());
    }
}
