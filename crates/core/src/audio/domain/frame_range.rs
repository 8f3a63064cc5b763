/// A half-open interval `[start, end)` over an audio file's frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRange {
    start: u32,
    end: u32,
}

impl FrameRange {
    /// Returns None unless `start <= end <= total_frames`.
    pub fn new(start: u32, end: u32, total_frames: u32) -> Option<Self> {
        if start <= end && end <= total_frames {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
