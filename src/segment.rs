/// Covers `[offset, offset + payload.len())` in the wrapping wire space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub offset: u32,
    pub payload: Vec<u8>,
}

impl Segment {
    pub fn new(offset: u32, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            payload: payload.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// A buffered byte range keyed by its unwrapped stream position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: u64,
    pub data: Vec<u8>,
}

impl Interval {
    pub fn new(start: u64, data: Vec<u8>) -> Self {
        Self { start, data }
    }

    pub fn end(&self) -> u64 {
        self.start + self.data.len() as u64
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn touches(&self, other: &Interval) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }

    /// Union of two touching intervals. The lower start is laid down first
    /// and the other copied over it, so on overlap the higher start wins, and
    /// with equal starts `later` wins. A gap between disjoint inputs would
    /// come out zero-filled, so callers check [`Interval::touches`] first.
    pub fn merge(earlier: Interval, later: Interval) -> Interval {
        let (low, high) = if later.start < earlier.start {
            (later, earlier)
        } else {
            (earlier, later)
        };

        let start = low.start;
        let end = low.end().max(high.end());
        let mut data = low.data;
        data.resize((end - start) as usize, 0);

        let at = (high.start - start) as usize;
        data[at..at + high.data.len()].copy_from_slice(&high.data);

        Interval { start, data }
    }
}
