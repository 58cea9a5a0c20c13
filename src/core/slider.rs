// Hero slider model: slide index cycling and swipe recognition.

/// Horizontal travel (px) a press/release must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Cyclic slide index over `len` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

impl SlideDeck {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn show(&mut self, index: usize) -> usize {
        if self.len > 0 {
            self.current = index % self.len;
        }
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.show(self.current + 1)
    }

    pub fn prev(&mut self) -> usize {
        if self.len == 0 {
            return self.current;
        }
        self.show(self.current + self.len - 1)
    }

    pub fn step(&mut self, dir: SwipeDirection) -> usize {
        match dir {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }
}

/// Left swipe (negative travel) goes forward, right swipe goes back.
#[inline]
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let diff = end_x - start_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if diff < 0.0 {
        SwipeDirection::Next
    } else {
        SwipeDirection::Prev
    })
}

/// Press/release tracking for mouse drags and touches on the slider.
///
/// Mouse gestures need a press inside the slider; leaving the slider cancels
/// them. Touch gestures only remember the start position.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: f64,
    dragging: bool,
}

impl SwipeTracker {
    pub fn press(&mut self, x: f64) {
        self.dragging = true;
        self.start_x = x;
    }

    pub fn release(&mut self, x: f64) -> Option<SwipeDirection> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        classify_swipe(self.start_x, x)
    }

    pub fn leave(&mut self) {
        self.dragging = false;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        classify_swipe(self.start_x, x)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// CSS transform for the translate-style slider.
pub fn translate_for(index: usize) -> String {
    format!("translateX(-{}vw)", index * 100)
}
