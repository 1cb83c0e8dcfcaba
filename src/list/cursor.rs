use crate::list::List;
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth, one explicit step at a time.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the end position past
/// the last element; the cursor has no current element there.
///
/// Every cursor holds its own position: several cursors over the same
/// list walk independently, and creating a new cursor restarts a walk
/// from scratch.
///
/// # Examples
///
/// ```
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D ]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D ] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D ] (index = 1)
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end position: [ A B C D|] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D ] (index = 3)
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // The end position is as far as a forward walk goes.
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), None);
/// assert!(!cursor.move_next());
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    current: Option<usize>,
    list: &'a List<T>,
}

/// Compare cursors by their position.
///
/// Only cursors belonging to the same list and resting at the same
/// position are considered equal.
///
/// # Examples
/// ```
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

// private methods
impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: Option<usize>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    #[cfg(feature = "length")]
    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the `List` is empty. See [`List::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the element the cursor rests on, or
    /// `None` at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().current(), Some(&1));
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|index| &self.list.node(index).element)
    }

    /// Returns a reference to the element just before the cursor, or
    /// `None` at the start position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().previous(), None);
    /// assert_eq!(list.cursor_end().previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        let previous = match self.current {
            Some(index) => self.list.node(index).prev,
            None => self.list.tail,
        };
        previous.map(|index| &self.list.node(index).element)
    }

    /// Move the cursor one position toward the end of the list, and
    /// return whether it moved. The cursor stays put at the end
    /// position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert!(cursor.move_next());
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert!(cursor.move_next()); // now at the end position
    /// assert!(!cursor.move_next());
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn move_next(&mut self) -> bool {
        match self.current {
            Some(index) => {
                self.current = self.list.node(index).next;
                #[cfg(feature = "length")]
                {
                    self.index += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Move the cursor one position toward the start of the list, and
    /// return whether it moved. The cursor stays put at the start
    /// position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_end();
    ///
    /// assert!(cursor.move_prev());
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert!(cursor.move_prev());
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert!(!cursor.move_prev()); // already at the start
    /// ```
    pub fn move_prev(&mut self) -> bool {
        let previous = match self.current {
            Some(index) => self.list.node(index).prev,
            None => self.list.tail,
        };
        match previous {
            Some(index) => {
                self.current = Some(index);
                #[cfg(feature = "length")]
                {
                    self.index -= 1;
                }
                true
            }
            None => false,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .finish()
    }
}
