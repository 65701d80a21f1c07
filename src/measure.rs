//! Text measurement port.
//!
//! The engine never rasterizes text itself. It asks a [`Measure`]
//! implementation for the pixel advance of a single character in normal or
//! bold weight, and for the constant line height of the session.

use lru::LruCache;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use unicode_width::UnicodeWidthChar;

/// Default number of `(char, bold)` entries kept by [`CachedMeasure`].
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Rendered size of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    pub width: u32,
    pub height: u32,
}

/// Pixel measurement of single characters.
///
/// Implementations must be deterministic for a fixed font configuration.
pub trait Measure {
    fn measure(&self, ch: char, bold: bool) -> Metrics;

    /// Height of one display row.
    fn line_height(&self) -> u32;

    fn width(&self, ch: char, bold: bool) -> u32 {
        self.measure(ch, bold).width
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self, ch: char, bold: bool) -> Metrics {
        (**self).measure(ch, bold)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }
}

/// Cell-grid measurement for monospace fonts.
///
/// Each character occupies its Unicode display width (0, 1 or 2 cells)
/// times `cell_width`. Bold glyphs are `bold_extra` pixels wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    pub cell_width: u32,
    pub bold_extra: u32,
    pub line_height: u32,
}

impl MonospaceMeasure {
    pub fn new(cell_width: u32, line_height: u32) -> Self {
        Self {
            cell_width,
            bold_extra: 0,
            line_height,
        }
    }

    pub fn with_bold_extra(mut self, bold_extra: u32) -> Self {
        self.bold_extra = bold_extra;
        self
    }
}

impl Measure for MonospaceMeasure {
    fn measure(&self, ch: char, bold: bool) -> Metrics {
        // Control characters report no width; give them one cell like a
        // replacement glyph would take.
        let cells = ch.width().unwrap_or(1) as u32;
        let extra = if bold && cells > 0 { self.bold_extra } else { 0 };
        Metrics {
            width: cells * self.cell_width + extra,
            height: self.line_height,
        }
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// Explicit per-character widths with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeasure {
    widths: HashMap<char, u32>,
    default_width: u32,
    bold_extra: u32,
    line_height: u32,
}

impl TableMeasure {
    pub fn new(default_width: u32, line_height: u32) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
            bold_extra: 0,
            line_height,
        }
    }

    /// Set the width of one character.
    pub fn with(mut self, ch: char, width: u32) -> Self {
        self.widths.insert(ch, width);
        self
    }

    pub fn with_bold_extra(mut self, bold_extra: u32) -> Self {
        self.bold_extra = bold_extra;
        self
    }
}

impl Measure for TableMeasure {
    fn measure(&self, ch: char, bold: bool) -> Metrics {
        let base = self.widths.get(&ch).copied().unwrap_or(self.default_width);
        Metrics {
            width: if bold { base + self.bold_extra } else { base },
            height: self.line_height,
        }
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// Hit and miss counters of a [`CachedMeasure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

/// LRU memoization of another measurer, keyed by `(char, bold)`.
///
/// Not thread-safe; the engine is single-threaded.
#[derive(Debug)]
pub struct CachedMeasure<M> {
    inner: M,
    cache: RefCell<LruCache<(char, bool), Metrics>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<M: Measure> CachedMeasure<M> {
    /// Wrap `inner` with room for `capacity` entries (at least 1).
    pub fn new(inner: M, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: RefCell::new(LruCache::new(capacity)),
            hits: Default::default(),
            misses: Default::default(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.cache.borrow();
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            size: cache.len(),
            capacity: cache.cap().get(),
        }
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }
}

impl<M: Measure> Measure for CachedMeasure<M> {
    fn measure(&self, ch: char, bold: bool) -> Metrics {
        let key = (ch, bold);
        if let Some(metrics) = self.cache.borrow_mut().get(&key).copied() {
            self.hits.set(self.hits.get() + 1);
            return metrics;
        }
        self.misses.set(self.misses.get() + 1);
        let metrics = self.inner.measure(ch, bold);
        self.cache.borrow_mut().put(key, metrics);
        metrics
    }

    fn line_height(&self) -> u32 {
        self.inner.line_height()
    }
}
