//! Deduplicating style store

use super::Style;
use ahash::AHashMap;

/// Interned styles, indexed by `u32`
///
/// Cells hold an index into the pool. Index 0 is the default style and is
/// never replaced; asking for a style that already exists returns its index,
/// so editing one cell's style means interning a new style for that cell.
#[derive(Debug, Clone)]
pub struct StylePool {
    styles: Vec<Style>,
    indices: AHashMap<Style, u32>,
    default: Style,
}

impl StylePool {
    /// Create a pool holding only the default style
    pub fn new() -> Self {
        let default = Style::default();
        let mut indices = AHashMap::new();
        indices.insert(default.clone(), 0);
        Self {
            styles: vec![default.clone()],
            indices,
            default,
        }
    }

    /// Index of `style`, interning it on first use
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        if let Some(&index) = self.indices.get(&style) {
            return index;
        }
        let index = self.styles.len() as u32;
        self.styles.push(style.clone());
        self.indices.insert(style, index);
        index
    }

    /// Style at `index`
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// The style at index 0
    pub fn default_style(&self) -> &Style {
        &self.default
    }

    /// Number of interned styles, the default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True while only the default style is present
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NumberFormat;

    #[test]
    fn test_starts_with_default() {
        let pool = StylePool::new();
        assert_eq!(pool.len(), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.get(0), Some(&Style::default()));
        assert_eq!(pool.get(1), None);
    }

    #[test]
    fn test_interning() {
        let mut pool = StylePool::new();

        let two_places = pool.get_or_insert(Style::new().number_format("0.00"));
        let again = pool.get_or_insert(Style::new().number_format("0.00"));
        let date = pool.get_or_insert(Style::new().with_number_format(NumberFormat::date_short()));

        assert_eq!(two_places, again);
        assert_ne!(two_places, date);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get_or_insert(Style::default()), 0);
    }
}
