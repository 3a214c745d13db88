//! Exhaustive crossword interlock search.
//!
//! For every ordering of the input words, the engine grows a frontier of
//! partial layouts word by word: the first word seeds both orientations at
//! the origin, and each later word is tried at every letter-sharing crossing
//! of every frontier layout, kept only if the placement rules validate.
//! Completed layouts are deduplicated up to translation with canonical keys
//! in an `FxHashSet`.
//!
//! The search is single-threaded over locally owned data; copy-on-extend
//! layouts keep sibling branches disjoint. A `CancelToken` is checked
//! between permutations and between word-addition steps.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use rustc_hash::FxHashSet;

use crate::layout::{Layout, LayoutKey};
use crate::notify::{Event, EventSink, LogLine, NullSink};
use crate::placement::{Direction, Placement};

/// The word list cannot form a crossword: fewer than two words supplied.
///
/// Raised before any search begins; the solver stays idle and re-invocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputError {
    pub word_count: usize,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "need at least two words to interlock, got {}",
            self.word_count
        )
    }
}

impl std::error::Error for InputError {}

/// Cooperative cancellation handle, shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The run stops at the next check point and
    /// returns partial statistics.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters and timing for one run. Written only by the solving thread.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Word orderings processed.
    pub permutations: u64,
    /// Candidate placements handed to the validator.
    pub candidates_considered: u64,
    /// Completed layouts found, including translation duplicates.
    pub valid_layouts: u64,
    /// Layouts kept after deduplication.
    pub unique_layouts: u64,
    /// Wall-clock start of the run.
    pub started_at: SystemTime,
    /// Monotonic run duration.
    pub elapsed: Duration,
    /// True if the run stopped at a cancellation check point.
    pub cancelled: bool,
}

impl RunStats {
    fn new() -> Self {
        Self {
            permutations: 0,
            candidates_considered: 0,
            valid_layouts: 0,
            unique_layouts: 0,
            started_at: SystemTime::now(),
            elapsed: Duration::ZERO,
            cancelled: false,
        }
    }
}

/// Result of a completed (or cancelled) run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub solutions: UniqueSolutionSet,
    pub stats: RunStats,
}

/// Append-only collection of layouts, no two translation-equivalent.
///
/// Membership is a canonical-key lookup: every stored layout's key sits in
/// an `FxHashSet`, so uniqueness never rescans the stored layouts.
#[derive(Debug, Clone, Default)]
pub struct UniqueSolutionSet {
    layouts: Vec<Layout>,
    keys: FxHashSet<LayoutKey>,
}

impl UniqueSolutionSet {
    /// Inserts `layout` if no translation-equivalent layout is present.
    /// Returns a reference to the stored layout when newly added.
    fn insert(&mut self, layout: Layout) -> Option<&Layout> {
        if self.keys.insert(layout.canonical_key()) {
            self.layouts.push(layout);
            self.layouts.last()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layout> {
        self.layouts.iter()
    }

    pub fn as_slice(&self) -> &[Layout] {
        &self.layouts
    }
}

impl<'a> IntoIterator for &'a UniqueSolutionSet {
    type Item = &'a Layout;
    type IntoIter = std::slice::Iter<'a, Layout>;

    fn into_iter(self) -> Self::IntoIter {
        self.layouts.iter()
    }
}

/// Lazy lexicographic enumeration of all orderings of `0..n`.
///
/// Deterministic: starts at the identity ordering and steps to the next
/// lexicographic permutation, yielding each ordering exactly once.
pub struct Permutations {
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            started: false,
            done: false,
        }
    }

    /// n!, saturating for inputs no search would ever finish anyway.
    pub fn total(n: usize) -> u64 {
        (1..=n as u64).fold(1u64, u64::saturating_mul)
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let n = self.indices.len();
        if n < 2 {
            self.done = true;
            return None;
        }

        // standard next-permutation step: pivot, successor swap, suffix flip
        let Some(pivot) = (0..n - 1).rfind(|&i| self.indices[i] < self.indices[i + 1]) else {
            self.done = true;
            return None;
        };
        let successor = (pivot + 1..n)
            .rfind(|&j| self.indices[j] > self.indices[pivot])
            .unwrap();
        self.indices.swap(pivot, successor);
        self.indices[pivot + 1..].reverse();
        Some(self.indices.clone())
    }
}

/// Drives the full search: permutation enumeration, per-ordering frontier
/// construction, deduplication, statistics, and event notifications.
pub struct Solver {
    sink: Box<dyn EventSink + Send>,
    cancel: CancelToken,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// A solver that discards notifications.
    pub fn new() -> Self {
        Self::with_sink(NullSink)
    }

    pub fn with_sink(sink: impl EventSink + Send + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            cancel: CancelToken::new(),
        }
    }

    /// A handle for cancelling this solver's runs from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Finds every geometrically distinct interlocking of `words`.
    ///
    /// Words are assumed pre-normalized (uppercase ASCII, deduplicated).
    /// Returns `InputError` for fewer than two words, before any search
    /// state exists. An empty solution set with full statistics is the
    /// valid outcome for words that cannot interlock.
    pub fn solve<S: AsRef<str>>(&self, words: &[S]) -> Result<RunReport, InputError> {
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        if words.len() < 2 {
            return Err(InputError {
                word_count: words.len(),
            });
        }

        let mut stats = RunStats::new();
        let run_clock = Instant::now();
        let total = Permutations::total(words.len());
        let mut solutions = UniqueSolutionSet::default();

        self.sink.emit(Event::Progress(0));
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "There are {} permutations of {{ {} }} to consider.",
            total,
            words.join(", ")
        ))));

        let mut last_percent = 0u8;
        for ordering in Permutations::new(words.len()) {
            if self.cancel.is_cancelled() {
                stats.cancelled = true;
                break;
            }

            self.sink.emit(Event::Log(LogLine::fragment(".")));

            let frontier = self.layouts_for_ordering(&words, &ordering, &mut stats);
            for layout in frontier {
                if layout.is_empty() {
                    continue;
                }
                stats.valid_layouts += 1;
                if let Some(stored) = solutions.insert(layout) {
                    stats.unique_layouts += 1;
                    self.sink.emit(Event::SolutionFound(stored.clone()));
                }
            }

            stats.permutations += 1;
            let percent = ((stats.permutations as u128 * 100) / total as u128) as u8;
            if percent != last_percent {
                last_percent = percent;
                self.sink.emit(Event::Progress(percent));
            }
        }

        stats.cancelled = stats.cancelled || self.cancel.is_cancelled();
        stats.elapsed = run_clock.elapsed();

        // terminate the run of '.' fragments before the summary
        self.sink.emit(Event::Log(LogLine::complete("")));
        self.sink.emit(Event::Progress(100));

        if stats.cancelled {
            self.sink.emit(Event::Log(LogLine::complete(
                "Run cancelled; partial statistics follow.",
            )));
        }
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "Permutations considered: {}",
            stats.permutations
        ))));
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "Candidates considered: {}",
            stats.candidates_considered
        ))));
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "Valid solutions found: {}",
            stats.valid_layouts
        ))));
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "Unique solutions: {}",
            stats.unique_layouts
        ))));
        self.sink.emit(Event::Log(LogLine::complete(format!(
            "Elapsed time: {:?}",
            stats.elapsed
        ))));

        Ok(RunReport { solutions, stats })
    }

    /// Runs `solve` on a worker thread. Completion is observed only through
    /// the event stream: `Finished` with the report, or `Failed` for bad
    /// input. Grab `cancel_token` before calling to keep a cancel handle.
    pub fn solve_async(self, words: Vec<String>) -> thread::JoinHandle<()> {
        thread::spawn(move || match self.solve(&words) {
            Ok(report) => self.sink.emit(Event::Finished(report)),
            Err(error) => self.sink.emit(Event::Failed(error)),
        })
    }

    /// Builds all completed layouts for one word ordering.
    ///
    /// The frontier after the last word holds only layouts using every
    /// word; an empty frontier mid-ordering aborts early since no layout
    /// with this word order can recover.
    fn layouts_for_ordering(
        &self,
        words: &[&str],
        ordering: &[usize],
        stats: &mut RunStats,
    ) -> Vec<Layout> {
        let mut frontier: Vec<Layout> = Vec::new();

        for (step, &word_index) in ordering.iter().enumerate() {
            if self.cancel.is_cancelled() {
                return Vec::new();
            }
            let word = words[word_index];

            if step == 0 {
                // no prior context fixes the first word's direction
                frontier = vec![
                    Layout::seeded(Placement::new(word, 0, 0, Direction::Horizontal)),
                    Layout::seeded(Placement::new(word, 0, 0, Direction::Vertical)),
                ];
                continue;
            }

            let mut next = Vec::new();
            for layout in &frontier {
                for candidate in layout.intersection_candidates(word) {
                    stats.candidates_considered += 1;
                    if layout.validates(&candidate) {
                        next.push(layout.with(candidate));
                    }
                }
            }
            frontier = next;

            if frontier.is_empty() {
                return frontier;
            }
        }

        frontier
    }
}
