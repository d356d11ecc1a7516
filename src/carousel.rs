use serde::Serialize;

/// Cursor over a non-empty image list. Movement wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// `len` is clamped to at least 1 so the modulo arithmetic never divides by zero.
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn previous(self) -> Self {
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Out-of-range targets leave the cursor where it is.
    pub fn jump_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// "3 / 5"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len())
    }
}
