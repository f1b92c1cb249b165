// Title <-> matrix-position maps.
//
// Each similarity matrix carries one of these describing its row order.
// Invariant: the index length always equals the dimension of the matrix it
// was built alongside, and every indexed title maps back to itself.

use std::collections::HashMap;

/// Bidirectional map between movie titles and matrix row positions.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    titles: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    /// Build an index from titles in matrix row order.
    ///
    /// If a title appears more than once, the first occurrence keeps the
    /// position mapping (lookups are only well-defined for unique titles).
    pub fn from_titles(titles: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(titles.len());
        for (pos, title) in titles.iter().enumerate() {
            positions.entry(title.clone()).or_insert(pos);
        }
        Self { titles, positions }
    }

    /// The matrix row position for a title, if indexed.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    /// The title at a matrix row position, if in bounds.
    pub fn title(&self, position: usize) -> Option<&str> {
        self.titles.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// All titles in matrix row order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}
