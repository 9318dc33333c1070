//! One-shot event wrapper.
//!
//! Distinguishes "something happened" from "a value that is currently true":
//! an [`Event`] hands out its content to exactly one observer, after which
//! re-reading whatever state cell carries it delivers nothing.

use std::sync::atomic::{AtomicBool, Ordering};

/// A value that should be consumed at most once.
///
/// Typically shared as `Arc<Event<T>>` inside an `Option` on a watch channel:
/// the channel replays its latest state to new subscribers, but a consumed
/// event stays consumed no matter how many times the state is re-read.
#[derive(Debug)]
pub struct Event<T> {
    content: T,
    handled: AtomicBool,
}

impl<T> Event<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            handled: AtomicBool::new(false),
        }
    }

    /// Returns the content the first time it is called, `None` afterwards.
    pub fn get_content_if_not_handled(&self) -> Option<&T> {
        if self.handled.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(&self.content)
        }
    }

    /// Reads the content without consuming the event.
    pub fn peek(&self) -> &T {
        &self.content
    }

    pub fn has_been_handled(&self) -> bool {
        self.handled.load(Ordering::Acquire)
    }
}
