use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn list_contains() {
        let list = List::from_iter([1, 2, 3]);
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
        assert!(!List::<i32>::new().contains(&1));
    }

    #[test]
    fn list_compare() {
        let list = List::from_iter([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);

        let shorter = List::from_iter([1, 2]);
        assert_ne!(list, shorter);
        assert!(shorter < list);

        let greater = List::from_iter([2]);
        assert!(list < greater);
    }

    #[test]
    fn list_clone_is_deep() {
        let list = List::from_iter([1, 2, 3]);
        let mut cloned = list.clone();
        cloned.push_back(4);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(cloned.iter().copied()), vec![1, 2, 3, 4]);
    }
}
