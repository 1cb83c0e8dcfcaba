//! This crate provides a doubly-linked list whose nodes live in a slot
//! arena and are addressed by stable indices instead of pointers.
//!
//! The [`List`] supports the usual deque operations at both ends, plus a
//! value-addressed mutation surface: inserting after the first occurrence
//! of a value, removing the first occurrence of a value, and replacing
//! every occurrence of a value in place. Searches are *O*(*n*); every
//! splice is *O*(1) once the position is known.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! list.insert_after(&2, 99); // splice 99 after the first 2
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 99, 3]);
//!
//! assert_eq!(list.remove(&1), Some(1)); // remove the first 1
//! assert_eq!(list.front(), Some(&2));
//!
//! list.replace(&99, 7); // overwrite every 99
//! assert_eq!(list.to_string(), "{2, 7, 3}");
//! ```
//!
//! # Memory Layout
//!
//! Nodes are kept in a `Vec` of slots. A slot is either *occupied* (it
//! holds an element together with the slot indices of its neighbors) or
//! *vacant* (it is threaded onto a free chain and will be reused by the
//! next insertion before the vector grows):
//!
//! ```text
//!         head = 2                                    tail = 1
//!            │                                           │
//!            ▼                                           ▼
//!   slots: ┌──────────┬──────────┬──────────┬─────────┬──────────┐
//!          │ Occupied │ Occupied │ Occupied │ Vacant  │ Occupied │
//!          │ prev: 2  │ prev: 4  │ prev: —  │ free: — │ prev: 0  │
//!          │ next: 4  │ next: —  │ next: 0  │         │ next: 1  │
//!          │ elem: B  │ elem: D  │ elem: A  │         │ elem: C  │
//!          └──────────┴──────────┴──────────┴─────────┴──────────┘
//!               0          1          2          3         4
//!
//!   list order: A (slot 2) → B (slot 0) → C (slot 4) → D (slot 1)
//!   free chain: 3
//! ```
//!
//! The `List` contains:
//! - the slot vector, which owns every node;
//! - `head` and `tail`, optional indices of the first and last occupied
//!   slot — both absent exactly when the list is empty;
//! - the head of the free chain;
//! - a length field `len` indicating the length of the list. It can be
//!   disabled by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! slot_list = { default-features = false }
//! ```
//!
//! A slot index never moves once allocated: inserting or removing one
//! node leaves every other node where it is. Because neighbors are plain
//! indices into the arena rather than owning pointers, a stale index can
//! at worst hit a vacant slot — which is detected and treated as a defect
//! — never freed memory.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the list like an array
//! (fused and non-cyclic). [`IterMut`] provides mutability of the
//! elements (but not the linked structure of the list).
//!
//! Every call to [`iter`] starts a fresh walk from the head; walks are
//! independent of each other and can be restarted at will. A forward walk
//! follows `next` indices from the head, and the same iterator reversed
//! follows `prev` indices from the tail.
//!
//! ## Examples
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! // The same iterator walks backward from the tail.
//! let backward: Vec<i32> = list.iter().rev().copied().collect();
//! assert_eq!(backward, vec![3, 2, 1]);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursor [`Cursor`] provides a more flexible way
//! of viewing a list: it holds the slot of the element it rests on and is
//! advanced one step at a time by explicit [`move_next`] and
//! [`move_prev`] calls, in either direction.
//!
//! In a list with length *n*, there are *n* + 1 valid locations for the
//! cursor, indexed by 0, 1, ..., *n*, where *n* is the end position past
//! the last element.
//!
//! ## Examples
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start();
//! assert_eq!(cursor.current(), Some(&1));
//! assert!(cursor.move_next());
//! assert_eq!(cursor.current(), Some(&2));
//!
//! // A second cursor holds its own position.
//! let mut backward = list.cursor_end();
//! assert_eq!(backward.current(), None);
//! assert!(backward.move_prev());
//! assert_eq!(backward.current(), Some(&3));
//! assert_eq!(cursor.current(), Some(&2));
//! ```
//!
//! Because iterators and cursors borrow the list, the borrow checker
//! rejects any mutation of the list while a walk is in progress; a walk
//! can never follow a link into a removed node.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`iter`]: crate::List::iter
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`move_next`]: crate::list::cursor::Cursor::move_next
//! [`move_prev`]: crate::list::cursor::Cursor::move_prev

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
