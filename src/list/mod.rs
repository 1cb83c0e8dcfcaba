use std::fmt::{self, Debug, Display, Formatter};

use crate::list::cursor::Cursor;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list whose nodes live in a slot arena
/// and are addressed by stable indices. It allows inserting and removing
/// elements at either end, or next to a matched value, in constant time
/// once the position is known. Finding a value takes *O*(*n*) time.
///
/// The `List` contains:
/// - the slot vector owning every node;
/// - `head` and `tail`, optional indices of the first and last element,
///   both absent exactly when the list is empty;
/// - the head of the free chain of vacant slots;
/// - a length field `len` indicating the length of the list. It can be
///   disabled by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// slot_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `prev..next`: a pair of neighbor positions around a splice point;
///   either side may be absent, meaning the splice touches `head` or
///   `tail` instead of a node.
pub struct List<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
    pub(crate) element: T,
}

/// A storage cell of the arena. Vacant slots form a singly linked free
/// chain through `next_free` and are reused before the vector grows.
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

// private methods
impl<T> List<T> {
    /// Read the node in an occupied slot.
    ///
    /// Panics if the slot is vacant: a link leading into a vacant slot
    /// means the chain is corrupt, which is a defect in the mutation
    /// logic, never a caller error.
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("link into vacant slot {}", index),
        }
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("link into vacant slot {}", index),
        }
    }

    /// Store `element` in a vacant slot, or grow the arena by one slot,
    /// and return its index. The new node is not linked yet.
    fn allocate(&mut self, element: T) -> usize {
        let node = Node {
            next: None,
            prev: None,
            element,
        };
        match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => panic!("occupied slot {} on the free chain", index),
                };
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacate a slot, thread it onto the free chain, and return the
    /// element it held. The node must already be unlinked.
    fn release(&mut self, index: usize) -> T {
        let slot = std::mem::replace(
            &mut self.slots[index],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node.element,
            Slot::Vacant { .. } => panic!("released slot {} twice", index),
        }
    }

    /// Make `next` follow `prev` in the chain. An absent `prev` rewires
    /// `head`, an absent `next` rewires `tail`; both absent empties the
    /// list.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(index) => self.node_mut(index).next = next,
            None => self.head = next,
        }
        match next {
            Some(index) => self.node_mut(index).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Splice a new node holding `element` between the adjacent positions
    /// `prev` and `next`, and return its slot index.
    fn attach(&mut self, prev: Option<usize>, next: Option<usize>, element: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let index = self.allocate(element);
        self.connect(prev, Some(index));
        self.connect(Some(index), next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(index));
            self.assert_adjacent(Some(index), next);
        }
        index
    }

    /// Splice the node at `index` out of the chain and return its
    /// element. The neighbors are linked to each other in both
    /// directions; the slot is vacated.
    fn detach(&mut self, index: usize) -> T {
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        self.release(index)
    }

    /// Index of the first node whose element equals `target`, scanning
    /// forward from the head.
    fn find(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index);
            if node.element == *target {
                return Some(index);
            }
            current = node.next;
        }
        None
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(index) => assert_eq!(self.node(index).next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(index) => assert_eq!(self.node(index).prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use slot_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// The list is empty exactly when both `head` and `tail` are absent;
    /// a state where only one of them is absent is a defect and trips a
    /// debug assertion.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        self.head.is_none()
    }

    /// Returns the length of the `List`. Enabled by `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// #![cfg(feature = "length")]
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The arena and its free chain are reset as well, releasing the
    /// slot storage.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        #[cfg(feature = "length")]
        {
            self.len = 0;
        }
    }

    /// Provides a reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(move |index| &self.node(index).element)
    }

    /// Provides a mutable reference to the front element, or `None` if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head;
        head.map(move |index| &mut self.node_mut(index).element)
    }

    /// Provides a reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(move |index| &self.node(index).element)
    }

    /// Provides a mutable reference to the back element, or `None` if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail;
        tail.map(move |index| &mut self.node_mut(index).element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.attach(None, self.head, element);
    }

    /// Removes the first element and returns it, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head;
        head.map(move |index| self.detach(index))
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, element: T) {
        self.attach(self.tail, None, element);
    }

    /// Removes the last element from a list and returns it, or `None`
    /// if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail;
        tail.map(move |index| self.detach(index))
    }

    /// Splices `element` in after the first node equal to `target`,
    /// scanning forward from the head, and returns whether an insertion
    /// happened.
    ///
    /// When the match is the last node the element is appended, exactly
    /// as [`push_back`] would. When no node matches, the list is left
    /// untouched and `element` is dropped. Nodes after the first match
    /// are never considered.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time for the scan and
    /// *O*(1) for the splice.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert!(list.insert_after(&2, 99));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 99, 3]);
    ///
    /// // Inserting after the tail appends.
    /// assert!(list.insert_after(&3, 4));
    /// assert_eq!(list.back(), Some(&4));
    ///
    /// // A miss leaves the list untouched.
    /// assert!(!list.insert_after(&7, 0));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 99, 3, 4]);
    /// ```
    ///
    /// [`push_back`]: List::push_back
    pub fn insert_after(&mut self, target: &T, element: T) -> bool
    where
        T: PartialEq,
    {
        match self.find(target) {
            Some(index) => {
                let next = self.node(index).next;
                self.attach(Some(index), next, element);
                true
            }
            None => false,
        }
    }

    /// Removes the first node equal to `target`, scanning forward from
    /// the head, and returns its element.
    ///
    /// Later duplicates stay in place. When no node matches, the list
    /// is left untouched and `None` is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time for the scan and
    /// *O*(1) for the splice.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 7, 5]);
    ///
    /// assert_eq!(list.remove(&5), Some(5));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![7, 5]);
    ///
    /// assert_eq!(list.remove(&6), None);
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![7, 5]);
    /// ```
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let found = self.find(target);
        found.map(move |index| self.detach(index))
    }

    /// Overwrites the element of **every** node equal to `old` with a
    /// clone of `new`, and returns how many nodes were overwritten.
    ///
    /// The links are not touched; only element values change. When no
    /// node matches, the list is left untouched and 0 is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([8, 1, 8]);
    ///
    /// assert_eq!(list.replace(&8, 6), 2);
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![6, 1, 6]);
    ///
    /// assert_eq!(list.replace(&9, 0), 0);
    /// ```
    pub fn replace(&mut self, old: &T, new: T) -> usize
    where
        T: PartialEq + Clone,
    {
        let mut replaced = 0;
        for element in self.iter_mut() {
            if *element == *old {
                *element = new.clone();
                replaced += 1;
            }
        }
        replaced
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.head,
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the end position, past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            None,
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
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
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the forward sequence between braces, joined by `", "`.
///
/// # Examples
///
/// ```
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "{1, 2, 3}");
/// assert_eq!(List::<i32>::new().to_string(), "{}");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for element in iter {
                write!(f, ", {}", element)?;
            }
        }
        f.write_str("}")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    /// Walk the chain in both directions and check they agree, along
    /// with the emptiness probes.
    fn check_links<T: Eq + Debug>(list: &List<T>) {
        let from_front: Vec<_> = list.iter().collect();
        let from_back: Vec<_> = list.iter().rev().collect();
        let re_reversed: Vec<_> = from_back.into_iter().rev().collect();

        assert_eq!(from_front, re_reversed);
        assert_eq!(list.is_empty(), from_front.is_empty());
        #[cfg(feature = "length")]
        assert_eq!(list.len(), from_front.len());
    }

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
        check_links(list);
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().len(), 3);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list_eq(&list, vec![2, 1, 3]);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_order_round_trip() {
        let mut list = List::new();
        for i in 0..5 {
            list.push_back(i);
        }
        list_eq(&list, 0..5);

        let forward: Vec<i32> = list.iter().copied().collect();
        let mut backward: Vec<i32> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        let mut list = List::new();
        for i in 0..5 {
            list.push_front(i);
        }
        list_eq(&list, (0..5).rev());
    }

    #[test]
    fn list_insert_after() {
        let mut list = List::from_iter([1, 2, 3]);

        assert!(list.insert_after(&2, 99));
        list_eq(&list, vec![1, 2, 99, 3]);

        // Inserting after the tail must look exactly like push_back.
        let mut appended = list.clone();
        assert!(appended.insert_after(&3, 4));
        let mut pushed = list.clone();
        pushed.push_back(4);
        assert_eq!(appended, pushed);
        list_eq(&appended, vec![1, 2, 99, 3, 4]);

        // Only the first match gets a successor.
        let mut list = List::from_iter([5, 5]);
        assert!(list.insert_after(&5, 6));
        list_eq(&list, vec![5, 6, 5]);

        // A miss is a no-op.
        assert!(!list.insert_after(&7, 0));
        list_eq(&list, vec![5, 6, 5]);

        // Also on an empty list.
        let mut list = List::new();
        assert!(!list.insert_after(&1, 2));
        assert!(list.is_empty());
    }

    #[test]
    fn list_remove_by_value() {
        // Each call removes exactly the first remaining occurrence.
        let mut list = List::from_iter([5, 5, 5]);
        assert_eq!(list.remove(&5), Some(5));
        list_eq(&list, vec![5, 5]);
        assert_eq!(list.remove(&5), Some(5));
        list_eq(&list, vec![5]);
        assert_eq!(list.remove(&5), Some(5));
        list_eq(&list, Vec::<i32>::new());
        assert_eq!(list.remove(&5), None);
        assert!(list.is_empty());

        // Removing the head, an inner node, and the tail.
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.remove(&2), Some(2));
        list_eq(&list, vec![1, 3]);
        assert_eq!(list.remove(&1), Some(1));
        list_eq(&list, vec![3]);
        assert_eq!(list.remove(&3), Some(3));
        assert!(list.is_empty());

        // A miss is a no-op.
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.remove(&9), None);
        list_eq(&list, vec![1, 2, 3]);
    }

    #[test]
    fn list_replace() {
        let mut list = List::from_iter([99, 1, 99, 2, 99]);

        // Every occurrence is overwritten, not just the first.
        assert_eq!(list.replace(&99, 7), 3);
        list_eq(&list, vec![7, 1, 7, 2, 7]);

        assert_eq!(list.replace(&42, 0), 0);
        list_eq(&list, vec![7, 1, 7, 2, 7]);

        // An empty list is a no-op.
        let mut list = List::<i32>::new();
        assert_eq!(list.replace(&1, 2), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_empty_no_ops() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn list_single_element_to_empty() {
        let mut list = List::new();
        list.push_front(1);
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        check_links(&list);

        list.push_back(2);
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn list_mutation_chain() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_string(), "{1, 2, 3}");

        assert!(list.insert_after(&2, 99));
        assert_eq!(list.to_string(), "{1, 2, 99, 3}");

        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.to_string(), "{2, 99, 3}");
        assert_eq!(list.front(), Some(&2));

        assert_eq!(list.replace(&99, 7), 1);
        assert_eq!(list.to_string(), "{2, 7, 3}");

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.to_string(), "{2, 7}");
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![7, 2]);
        check_links(&list);
    }

    #[test]
    fn list_slot_reuse() {
        let mut list = List::from_iter(0..4);
        let slots = list.slots.len();

        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.remove(&0), Some(0));
        list.push_back(4);
        list.push_front(5);
        list_eq(&list, vec![5, 1, 3, 4]);

        // Vacant slots are reused before the arena grows.
        assert_eq!(list.slots.len(), slots);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        check_links(&list);

        list.push_back(1);
        list_eq(&list, vec![1]);
    }

    #[test]
    fn list_display() {
        let mut list = List::new();
        assert_eq!(list.to_string(), "{}");
        list.push_back(1);
        assert_eq!(list.to_string(), "{1}");
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_string(), "{1, 2, 3}");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
