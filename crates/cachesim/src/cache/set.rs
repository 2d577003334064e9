//! Cache Set with LRU Replacement.
//!
//! Recency is tracked with a per-line stamp rather than a usage stack. Every
//! access that hits or fills a line stamps it with one more than the largest
//! stamp currently held by a valid line in the set, so stamps within a set
//! form a strict order of use. The victim on a full-set miss is the valid
//! line with the smallest stamp.
//!
//! # Performance
//!
//! - **Time Complexity:** `resolve()` is O(E), a single scan over the lines.
//! - **Space Complexity:** O(E), fixed at construction.

use super::Outcome;
use super::line::CacheLine;

/// A fixed-size group of `E` lines sharing one set index.
#[derive(Debug, Clone)]
pub struct CacheSet {
    lines: Box<[CacheLine]>,
}

/// What one linear scan of the set found.
struct Scan {
    hit: Option<usize>,
    empty: Option<usize>,
    lru: Option<usize>,
    max_recency: u64,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines.
    ///
    /// # Panics
    ///
    /// Panics if `ways` is zero.
    pub fn new(ways: usize) -> Self {
        assert!(ways > 0, "cache set must have at least one line");
        Self {
            lines: vec![CacheLine::default(); ways].into_boxed_slice(),
        }
    }

    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    pub fn ways(&self) -> usize {
        self.lines.len()
    }

    /// True if a valid line holds `tag`. Does not update recency.
    pub fn probe(&self, tag: u64) -> bool {
        self.lines.iter().any(|line| line.holds(tag))
    }

    /// Resolves an access to `tag` and updates the set.
    ///
    /// Returns [`Outcome::Hit`] if the tag is resident, [`Outcome::MissCold`] if
    /// it was placed in an empty line, and [`Outcome::MissEvict`] if the
    /// least recently used line had to be overwritten.
    pub fn resolve(&mut self, tag: u64) -> Outcome {
        self.resolve_with_victim(tag).0
    }

    /// Same as [`CacheSet::resolve`], also returning the evicted tag.
    pub(crate) fn resolve_with_victim(&mut self, tag: u64) -> (Outcome, Option<u64>) {
        let scan = self.scan(tag);
        let stamp = scan.max_recency + 1;

        if let Some(way) = scan.hit {
            self.lines[way].touch(stamp);
            return (Outcome::Hit, None);
        }

        if let Some(way) = scan.empty {
            self.lines[way].fill(tag, stamp);
            return (Outcome::MissCold, None);
        }

        // No empty line means every line is valid, so an LRU line exists.
        let way = scan.lru.unwrap_or(0);
        let victim = self.lines[way].tag();
        self.lines[way].fill(tag, stamp);
        (Outcome::MissEvict, Some(victim))
    }

    fn scan(&self, tag: u64) -> Scan {
        let mut scan = Scan {
            hit: None,
            empty: None,
            lru: None,
            max_recency: 0,
        };

        for (way, line) in self.lines.iter().enumerate() {
            if !line.valid() {
                if scan.empty.is_none() {
                    scan.empty = Some(way);
                }
                continue;
            }

            if line.tag() == tag {
                scan.hit = Some(way);
            }
            scan.max_recency = scan.max_recency.max(line.recency());

            // Strict comparison keeps the lowest way on ties.
            let older = match scan.lru {
                Some(lru) => line.recency() < self.lines[lru].recency(),
                None => true,
            };
            if older {
                scan.lru = Some(way);
            }
        }

        scan
    }
}
