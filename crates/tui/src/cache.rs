//! Client-side cache for fetched data.
//!
//! One value, one invalidation rule: any successful create invalidates
//! the cached expense list, which triggers a refetch on the next read
//! (revalidate-on-write). Independent of any particular fetch path.

/// Holds at most one cached value.
#[derive(Debug)]
pub struct Cache<T> {
    value: Option<T>,
}

impl<T> Cache<T> {
    /// An empty cache.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// The cached value, if any.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replace the cached value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Drop the cached value; the next read misses.
    pub fn invalidate(&mut self) {
        self.value = None;
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache: Cache<Vec<i64>> = Cache::new();
        assert!(cache.get().is_none());
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut cache = Cache::new();
        cache.set(vec![1, 2, 3]);
        assert_eq!(cache.get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut cache = Cache::new();
        cache.set(1);
        cache.set(2);
        assert_eq!(cache.get(), Some(&2));
    }

    #[test]
    fn invalidate_empties_the_cache() {
        let mut cache = Cache::new();
        cache.set("cached");
        cache.invalidate();
        assert!(cache.get().is_none());
    }
}
