//! Crossword Interlock Generator Library
//!
//! Enumerates every geometrically distinct way to interlock a set of words
//! into a crossword-style grid. Intersecting words must share a letter at
//! the crossing cell and obey Scrabble-like adjacency rules; finished
//! layouts are deduplicated up to translation. The engine reports progress,
//! log lines, and discovered solutions through a typed event stream so
//! front ends stay decoupled from the search.

pub mod engine;
pub mod layout;
pub mod notify;
pub mod placement;

pub use engine::{
    CancelToken, InputError, Permutations, RunReport, RunStats, Solver, UniqueSolutionSet,
};
pub use layout::{Bounds, Layout, LayoutKey};
pub use notify::{Event, EventSink, FnSink, LogLine, NullSink};
pub use placement::{Cell, Direction, Placement};
