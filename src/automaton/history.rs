//! Bounded, time-ordered frame history.
//!
//! Frames are appended at the tail and evicted from the head. The backing
//! `im::Vector` shares structure between clones, so handing the whole window
//! to a reader is O(1) and the reader's copy never changes underneath it.

use im::Vector;

use crate::grid::GridSnapshot;

/// Retained frames plus the retention policy.
///
/// ## Invariants
///
/// - Never empty: created with a seed frame, and eviction stops at
///   `max_frames >= 1`.
/// - Index 0 is the oldest retained frame, the last index is the current one.
/// - `len() <= max_frames` whenever `scroll_on_overflow` is set.
#[derive(Clone, Debug)]
pub struct History {
    frames: Vector<GridSnapshot>,
    current: GridSnapshot,
    max_frames: usize,
    scroll_on_overflow: bool,
    oldest_generation: u64,
}

impl History {
    /// Start a history from its seed frame (generation 0).
    pub(crate) fn new(seed: GridSnapshot, max_frames: usize, scroll_on_overflow: bool) -> Self {
        debug_assert!(max_frames >= 1);
        let mut frames = Vector::new();
        frames.push_back(seed.clone());
        Self {
            frames,
            current: seed,
            max_frames,
            scroll_on_overflow,
            oldest_generation: 0,
        }
    }

    /// Number of retained frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Retention cap.
    #[must_use]
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }

    /// Whether overflow evicts the oldest frames (or pauses stepping).
    #[must_use]
    pub fn scroll_on_overflow(&self) -> bool {
        self.scroll_on_overflow
    }

    /// True when more frames are retained than the cap allows.
    #[must_use]
    pub fn is_over_capacity(&self) -> bool {
        self.frames.len() > self.max_frames
    }

    /// The most recent frame.
    #[must_use]
    pub fn current(&self) -> &GridSnapshot {
        &self.current
    }

    /// Retained frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &Vector<GridSnapshot> {
        &self.frames
    }

    /// Frame at `index` (0 = oldest retained).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridSnapshot> {
        self.frames.get(index)
    }

    /// Iterate retained frames, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GridSnapshot> + '_ {
        self.frames.iter()
    }

    /// Generation of `frames[0]`.
    #[must_use]
    pub fn oldest_generation(&self) -> u64 {
        self.oldest_generation
    }

    /// Generation of the current frame.
    #[must_use]
    pub fn newest_generation(&self) -> u64 {
        self.oldest_generation + self.frames.len() as u64 - 1
    }

    /// Generation of the frame at `index`, if retained.
    #[must_use]
    pub fn generation_of(&self, index: usize) -> Option<u64> {
        (index < self.frames.len()).then(|| self.oldest_generation + index as u64)
    }

    /// Append a frame, then apply the scroll policy.
    ///
    /// Returns the number of frames evicted.
    pub(crate) fn push(&mut self, frame: GridSnapshot) -> usize {
        self.frames.push_back(frame.clone());
        self.current = frame;
        if self.scroll_on_overflow {
            self.evict_overflow()
        } else {
            0
        }
    }

    /// Drop frames from the head until within capacity.
    pub(crate) fn evict_overflow(&mut self) -> usize {
        let mut evicted = 0;
        while self.frames.len() > self.max_frames {
            self.frames.pop_front();
            self.oldest_generation += 1;
            evicted += 1;
        }
        evicted
    }

    pub(crate) fn set_max_frames(&mut self, max_frames: usize) -> usize {
        debug_assert!(max_frames >= 1);
        self.max_frames = max_frames;
        if self.scroll_on_overflow {
            self.evict_overflow()
        } else {
            0
        }
    }

    pub(crate) fn set_scroll_on_overflow(&mut self, scroll: bool) -> usize {
        self.scroll_on_overflow = scroll;
        if scroll {
            self.evict_overflow()
        } else {
            0
        }
    }
}
