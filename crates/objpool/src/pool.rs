//! Fixed-capacity arena storage for one kind of engine object

use std::iter::repeat_with;

use crate::error::{PoolError, Result};

/// A fixed-capacity arena addressed by `u16` slot indices.
///
/// The pool never grows and never relocates its elements: a slot index
/// handed out by [`insert`](Self::insert) stays valid until
/// [`remove`](Self::remove) vacates it, so indices can be held across
/// frames and written into saved data via the wire-reference codec.
#[derive(Debug, Clone)]
pub struct ObjectPool<T> {
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T> ObjectPool<T> {
    /// Creates a pool with `capacity` vacant slots.
    pub fn new(capacity: u16) -> Self {
        Self {
            slots: repeat_with(|| None).take(usize::from(capacity)).collect(),
            live: 0,
        }
    }

    /// Places `value` in the lowest vacant slot and returns its index.
    pub fn insert(&mut self, value: T) -> Result<u16> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(PoolError::PoolFull { capacity })?;
        self.slots[slot] = Some(value);
        self.live += 1;
        Ok(slot as u16)
    }

    /// Returns the element in `slot`, or `None` for vacant and
    /// out-of-range slots.
    pub fn get(&self, slot: u16) -> Option<&T> {
        self.slots.get(usize::from(slot))?.as_ref()
    }

    pub fn get_mut(&mut self, slot: u16) -> Option<&mut T> {
        self.slots.get_mut(usize::from(slot))?.as_mut()
    }

    /// Vacates `slot` and returns its element, making the slot available
    /// for reuse by later inserts.
    pub fn remove(&mut self, slot: u16) -> Option<T> {
        let value = self.slots.get_mut(usize::from(slot))?.take();
        if value.is_some() {
            self.live -= 1;
        }
        value
    }

    pub fn contains(&self, slot: u16) -> bool {
        self.get(slot).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slot count, occupied or not.
    pub fn capacity(&self) -> u16 {
        self.slots.len() as u16
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_ref().map(|v| (slot as u16, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_pool_is_empty() {
        let pool: ObjectPool<u32> = ObjectPool::new(8);
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.capacity(), 8);
    }

    #[test]
    fn test_insert_fills_lowest_slot_first() {
        let mut pool = ObjectPool::new(4);
        assert_eq!(pool.insert("a").unwrap(), 0);
        assert_eq!(pool.insert("b").unwrap(), 1);
        assert_eq!(pool.insert("c").unwrap(), 2);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(1), Some(&"b"));
    }

    #[test]
    fn test_insert_into_full_pool_fails() {
        let mut pool = ObjectPool::new(2);
        pool.insert(1).unwrap();
        pool.insert(2).unwrap();

        let err = pool.insert(3).unwrap_err();
        assert!(
            matches!(err, PoolError::PoolFull { capacity: 2 }),
            "actual error: {err:?}",
        );
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_zero_capacity_pool_rejects_everything() {
        let mut pool = ObjectPool::new(0);
        assert!(pool.insert(1).is_err());
        assert_eq!(pool.get(0), None);
        assert_eq!(pool.capacity(), 0);
    }

    #[test]
    fn test_remove_vacates_and_reuses_slot() {
        let mut pool = ObjectPool::new(4);
        pool.insert("a").unwrap();
        pool.insert("b").unwrap();
        pool.insert("c").unwrap();

        assert_eq!(pool.remove(1), Some("b"));
        assert_eq!(pool.len(), 2);
        assert!(!pool.contains(1));

        // Lowest vacant slot wins
        assert_eq!(pool.insert("d").unwrap(), 1);
        assert_eq!(pool.get(1), Some(&"d"));
    }

    #[test]
    fn test_remove_vacant_or_out_of_range_is_none() {
        let mut pool: ObjectPool<u32> = ObjectPool::new(2);
        assert_eq!(pool.remove(0), None);
        assert_eq!(pool.remove(100), None);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut pool = ObjectPool::new(2);
        let slot = pool.insert(10).unwrap();
        *pool.get_mut(slot).unwrap() += 5;
        assert_eq!(pool.get(slot), Some(&15));
    }

    #[test]
    fn test_iter_yields_occupied_in_index_order() {
        let mut pool = ObjectPool::new(8);
        pool.insert("a").unwrap();
        pool.insert("b").unwrap();
        pool.insert("c").unwrap();
        pool.remove(1);

        let collected: Vec<(u16, &&str)> = pool.iter().collect();
        assert_eq!(collected, vec![(0, &"a"), (2, &"c")]);
    }
}
