/// One storage slot of a cache set.
///
/// Lines start invalid with tag 0 and recency 0. Once a line is occupied it
/// stays valid for the life of the cache; only its tag and recency change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheLine {
    valid: bool,
    tag: u64,
    /// Recency stamp; larger means more recently used within the set.
    recency: u64,
}

impl CacheLine {
    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn recency(&self) -> u64 {
        self.recency
    }

    /// True if the line is valid and holds `tag`.
    #[inline]
    pub fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Marks the line valid with `tag` and stamps it.
    pub(crate) fn fill(&mut self, tag: u64, recency: u64) {
        self.valid = true;
        self.tag = tag;
        self.recency = recency;
    }

    pub(crate) fn touch(&mut self, recency: u64) {
        self.recency = recency;
    }
}
