//! Layout representation and the crossword placement rules.
//!
//! A layout is a consistent set of word placements: any two placements are
//! either cell-disjoint or cross in exactly one cell on a matching letter.
//! The invariant is enforced incrementally by `validates` as the engine
//! extends layouts, never re-checked afterwards.
//!
//! Canonical keys translate a layout to its bounding-box origin so that two
//! layouts differing only by translation compare equal. Reflections and
//! rotations are deliberately distinct.

use crate::placement::{Cell, Direction, Placement};

/// Axis-aligned bounding box over all occupied cells, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

/// Translation-invariant identity of a layout: every placement shifted so
/// the bounding box starts at the origin, sorted into a set order.
pub type LayoutKey = Vec<(String, Direction, i32, i32)>;

/// A set of mutually consistent word placements.
///
/// Extension is copy-on-extend (`with`): the receiving layout is untouched,
/// so sibling search branches never alias each other's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a single-placement layout, seeding a search frontier.
    pub fn seeded(placement: Placement) -> Self {
        Self {
            placements: vec![placement],
        }
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns a new layout with `placement` appended. `self` is unchanged.
    pub fn with(&self, placement: Placement) -> Layout {
        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(placement);
        Layout { placements }
    }

    /// Returns the letter occupying `(x, y)`, scanning every placement.
    ///
    /// Crossing cells are covered by two placements that agree on the
    /// letter, so first match wins.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<u8> {
        self.placements.iter().find_map(|p| p.letter_at(x, y))
    }

    /// Proposes every placement of `word` crossing an existing word on a
    /// shared letter, perpendicular to it.
    ///
    /// Candidates are not pre-screened; `validates` is the single source of
    /// legality, and distinct crossings may propose the same placement.
    pub fn intersection_candidates(&self, word: &str) -> Vec<Placement> {
        let letters = word.as_bytes();
        let mut candidates = Vec::new();

        for existing in &self.placements {
            let (ex, ey) = existing.origin();
            for (i, &existing_letter) in existing.letters().iter().enumerate() {
                for (j, &letter) in letters.iter().enumerate() {
                    if letter != existing_letter {
                        continue;
                    }
                    // position the new word so its letter j lands on the
                    // existing word's letter-i cell
                    let candidate = match existing.direction() {
                        Direction::Horizontal => Placement::new(
                            word,
                            ex + i as i32,
                            ey - j as i32,
                            Direction::Vertical,
                        ),
                        Direction::Vertical => Placement::new(
                            word,
                            ex - j as i32,
                            ey + i as i32,
                            Direction::Horizontal,
                        ),
                    };
                    candidates.push(candidate);
                }
            }
        }

        candidates
    }

    /// Decides whether `candidate` may legally join this layout.
    ///
    /// Rules, checked per letter cell of the candidate:
    /// 1. A cell already occupied must hold the candidate's letter there
    ///    (a true crossing), else reject.
    /// 2. An empty cell must have both side cells (perpendicular to the
    ///    candidate's direction) empty, else a parallel word would touch.
    /// 3. The cell before the first letter and the cell after the last
    ///    letter must be empty, else an existing word would be extended.
    pub fn validates(&self, candidate: &Placement) -> bool {
        let (dx, dy) = candidate.direction().step();
        let last = candidate.len() - 1;

        for (i, ((x, y), letter)) in candidate.cells().enumerate() {
            if i == 0 && self.letter_at(x - dx, y - dy).is_some() {
                return false;
            }
            if i == last && self.letter_at(x + dx, y + dy).is_some() {
                return false;
            }

            match self.letter_at(x, y) {
                None => {
                    // side cells are perpendicular to the travel direction
                    if self.letter_at(x - dy, y - dx).is_some()
                        || self.letter_at(x + dy, y + dx).is_some()
                    {
                        return false;
                    }
                }
                Some(existing) => {
                    if existing != letter {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Bounding box over all occupied cells, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.placements.iter().flat_map(Placement::cells);
        let ((x, y), _) = cells.next()?;
        let mut bounds = Bounds {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        };
        for ((x, y), _) in cells {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// The bounding box's top-left corner.
    pub fn corner(&self) -> Option<Cell> {
        self.bounds().map(|b| (b.min_x, b.min_y))
    }

    /// Computes the canonical form: placements translated to the bounding
    /// box origin, sorted so placement order within the layout is
    /// irrelevant. Equal keys mean translation-equivalent layouts.
    pub fn canonical_key(&self) -> LayoutKey {
        let Some((min_x, min_y)) = self.corner() else {
            return Vec::new();
        };

        let mut key: LayoutKey = self
            .placements
            .iter()
            .map(|p| {
                let (x, y) = p.origin();
                (p.word().to_owned(), p.direction(), x - min_x, y - min_y)
            })
            .collect();
        key.sort();
        key
    }

    /// Renders the layout as a character grid, '.' for empty cells.
    pub fn render(&self) -> String {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };

        let mut output =
            String::with_capacity((bounds.width() as usize + 1) * bounds.height() as usize);
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                match self.letter_at(x, y) {
                    Some(letter) => output.push(char::from(letter)),
                    None => output.push('.'),
                }
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_act() -> Layout {
        // A..
        // CAT
        // T..
        Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal))
            .with(Placement::new("ACT", 0, -1, Direction::Vertical))
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        let extended = base.with(Placement::new("ACT", 0, -1, Direction::Vertical));
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_letter_lookup_across_placements() {
        let layout = cat_act();
        assert_eq!(layout.letter_at(0, -1), Some(b'A'));
        assert_eq!(layout.letter_at(0, 0), Some(b'C'));
        assert_eq!(layout.letter_at(2, 0), Some(b'T'));
        assert_eq!(layout.letter_at(0, 1), Some(b'T'));
        assert_eq!(layout.letter_at(1, 1), None);
        assert_eq!(layout.letter_at(-1, 0), None);
    }

    #[test]
    fn test_intersection_candidates_horizontal_host() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        let candidates = layout.intersection_candidates("ACT");

        // shared letters: C (i=0,j=1), A (i=1,j=0), T (i=2,j=2)
        assert_eq!(candidates.len(), 3);
        assert!(candidates.contains(&Placement::new("ACT", 0, -1, Direction::Vertical)));
        assert!(candidates.contains(&Placement::new("ACT", 1, 0, Direction::Vertical)));
        assert!(candidates.contains(&Placement::new("ACT", 2, -2, Direction::Vertical)));
        assert!(candidates
            .iter()
            .all(|c| c.direction() == Direction::Vertical));
    }

    #[test]
    fn test_intersection_candidates_vertical_host() {
        let layout = Layout::seeded(Placement::new("AB", 0, 0, Direction::Vertical));
        let candidates = layout.intersection_candidates("BA");

        // B at host i=1 matches j=0, A at host i=0 matches j=1
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains(&Placement::new("BA", 0, 1, Direction::Horizontal)));
        assert!(candidates.contains(&Placement::new("BA", -1, 0, Direction::Horizontal)));
    }

    #[test]
    fn test_validates_accepts_clean_crossing() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        assert!(layout.validates(&Placement::new("ACT", 0, -1, Direction::Vertical)));
    }

    #[test]
    fn test_validates_rejects_mismatched_crossing() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        // DOG vertical through (1, 0) would need its letter there to be A
        assert!(!layout.validates(&Placement::new("DOG", 1, 0, Direction::Vertical)));
    }

    #[test]
    fn test_validates_rejects_parallel_side_touch() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        // a horizontal word directly underneath touches all three letters
        assert!(!layout.validates(&Placement::new("ACT", 0, 1, Direction::Horizontal)));
    }

    #[test]
    fn test_validates_rejects_head_extension() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        // MOCS ends in the cell just before CAT's C, concatenating the words
        assert!(!layout.validates(&Placement::new("MOCS", -4, 0, Direction::Horizontal)));
    }

    #[test]
    fn test_validates_rejects_tail_extension() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        // vertical word whose last letter sits just above C's cell
        assert!(!layout.validates(&Placement::new("ORC", 0, -3, Direction::Vertical)));
    }

    #[test]
    fn test_validates_rejects_overlap_same_direction() {
        let layout = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal));
        // same row, overlapping cells: C matches at (0,0) but A/T collide
        assert!(!layout.validates(&Placement::new("COG", 0, 0, Direction::Horizontal)));
    }

    #[test]
    fn test_bounds_and_corner() {
        let layout = cat_act();
        let bounds = layout.bounds().unwrap();
        assert_eq!(bounds.min_x, 0);
        assert_eq!(bounds.min_y, -1);
        assert_eq!(bounds.max_x, 2);
        assert_eq!(bounds.max_y, 1);
        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 3);
        assert_eq!(layout.corner(), Some((0, -1)));
        assert_eq!(Layout::new().bounds(), None);
    }

    #[test]
    fn test_canonical_key_is_translation_invariant() {
        let layout = cat_act();
        let translated = Layout {
            placements: layout
                .placements()
                .iter()
                .map(|p| p.translated(-17, 40))
                .collect(),
        };
        assert_eq!(layout.canonical_key(), translated.canonical_key());
    }

    #[test]
    fn test_canonical_key_ignores_placement_order() {
        let a = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal))
            .with(Placement::new("ACT", 0, -1, Direction::Vertical));
        let b = Layout::seeded(Placement::new("ACT", 0, -1, Direction::Vertical))
            .with(Placement::new("CAT", 0, 0, Direction::Horizontal));
        assert_eq!(a.canonical_key(), b.canonical_key());
    }

    #[test]
    fn test_canonical_key_distinguishes_mirror_image() {
        // ACT crossing CAT at the C, and its horizontal mirror
        let layout = cat_act();
        let mirrored = Layout::seeded(Placement::new("CAT", 0, 0, Direction::Horizontal))
            .with(Placement::new("ACT", 2, -2, Direction::Vertical));
        assert_ne!(layout.canonical_key(), mirrored.canonical_key());
    }

    #[test]
    fn test_render_grid() {
        insta::assert_snapshot!(cat_act().render().trim_end(), @r"
        A..
        CAT
        T..
        ");
    }

    #[test]
    fn test_render_empty_layout() {
        assert_eq!(Layout::new().render(), "");
    }
}
