//! Collection Cache
//!
//! View-scoped copy of the last fetched list. Only whole replacements
//! remove entries; local creations are inserted without reconciliation.

/// Ordered snapshot of fetched entities
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the result of a full fetch
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
    }

    /// Insert a freshly created entity at the front (posts)
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Insert a freshly created entity at the back (comments)
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// True once any full fetch has landed, even an empty one
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

/// Where a created entity lands in its cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

impl<T> Collection<T> {
    pub fn insert(&mut self, item: T, placement: Placement) {
        match placement {
            Placement::Front => self.prepend(item),
            Placement::Back => self.append(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_swaps_everything() {
        let mut cache = Collection::new();
        assert!(!cache.is_loaded());

        cache.replace(vec![1, 2, 3]);
        cache.replace(vec![9]);

        assert!(cache.is_loaded());
        assert_eq!(cache.items(), &[9]);
    }

    #[test]
    fn test_prepend_and_append() {
        let mut cache = Collection::new();
        cache.replace(vec![2, 3]);
        cache.prepend(1);
        cache.append(4);
        assert_eq!(cache.items(), &[1, 2, 3, 4]);
        assert_eq!(cache.first(), Some(&1));
    }

    #[test]
    fn test_prepend_does_not_deduplicate() {
        let mut cache = Collection::new();
        cache.replace(vec![7]);
        cache.insert(7, Placement::Front);
        assert_eq!(cache.items(), &[7, 7]);

        // A refetch is a full swap, so the duplicate disappears
        cache.replace(vec![7]);
        assert_eq!(cache.len(), 1);
    }
}
