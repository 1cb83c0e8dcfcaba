use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

/// Half of the ownership of a node. Each linked node is owned by exactly
/// two halves: one held by whatever points at it from the front side
/// (the previous node's `next`, or the list `head`), and one held by
/// whatever points at it from the back side (the next node's `prev`, or
/// the list `tail`).
type Half<'brand, T> = StaticRc<GhostCell<'brand, RawNode<'brand, T>>, 1, 2>;
type Full<'brand, T> = StaticRc<GhostCell<'brand, RawNode<'brand, T>>, 2, 2>;

struct RawNode<'brand, T> {
    prev: Option<Half<'brand, T>>,
    next: Option<Half<'brand, T>>,
    element: T,
}

impl<'brand, T> RawNode<'brand, T> {
    fn with_element(element: T) -> Self {
        Self {
            prev: None,
            next: None,
            element,
        }
    }
}

/// A pointer-backed list variant without any arena: node ownership is
/// split in two with `static-rc`, and all link mutation goes through a
/// `ghost-cell` brand token.
pub struct TokenList<'brand, T> {
    head: Option<Half<'brand, T>>,
    tail: Option<Half<'brand, T>>,
}

impl<'brand, T> Default for TokenList<'brand, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }
}

impl<'brand, T> TokenList<'brand, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        self.head.is_none()
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'brand>) {
        let (front_half, back_half) =
            Full::split(Full::new(GhostCell::new(RawNode::with_element(element))));
        match self.head.take() {
            Some(old_head) => {
                old_head.deref().borrow_mut(token).prev = Some(back_half);
                front_half.deref().borrow_mut(token).next = Some(old_head);
                self.head = Some(front_half);
            }
            None => {
                self.tail = Some(back_half);
                self.head = Some(front_half);
            }
        }
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'brand>) {
        let (front_half, back_half) =
            Full::split(Full::new(GhostCell::new(RawNode::with_element(element))));
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.deref().borrow_mut(token).next = Some(front_half);
                back_half.deref().borrow_mut(token).prev = Some(old_tail);
                self.tail = Some(back_half);
            }
            None => {
                self.head = Some(front_half);
                self.tail = Some(back_half);
            }
        }
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'brand>) -> Option<T> {
        let first = self.head.take()?;
        let other = match first.deref().borrow_mut(token).next.take() {
            Some(second) => {
                let other = second
                    .deref()
                    .borrow_mut(token)
                    .prev
                    .take()
                    .expect("the second node holds half of the first");
                self.head = Some(second);
                other
            }
            None => self
                .tail
                .take()
                .expect("the tail holds half of the only node"),
        };
        Some(Full::into_box(Full::join(other, first)).into_inner().element)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'brand>) -> Option<T> {
        let last = self.tail.take()?;
        let other = match last.deref().borrow_mut(token).prev.take() {
            Some(before) => {
                let other = before
                    .deref()
                    .borrow_mut(token)
                    .next
                    .take()
                    .expect("the next-to-last node holds half of the last");
                self.tail = Some(before);
                other
            }
            None => self
                .head
                .take()
                .expect("the head holds half of the only node"),
        };
        Some(Full::into_box(Full::join(other, last)).into_inner().element)
    }

    pub fn contains(&self, target: &T, token: &GhostToken<'brand>) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head.as_deref();
        while let Some(cell) = current {
            let node = cell.borrow(token);
            if node.element == *target {
                return true;
            }
            current = node.next.as_deref();
        }
        false
    }

    /// Removes the first element equal to `target` and returns it, or
    /// `None` without touching the list. The prefix before the match is
    /// popped off and pushed back, which keeps the order intact.
    pub fn remove(&mut self, target: &T, token: &mut GhostToken<'brand>) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prefix = Vec::new();
        let mut removed = None;
        while let Some(element) = self.pop_front(token) {
            if element == *target {
                removed = Some(element);
                break;
            }
            prefix.push(element);
        }
        while let Some(element) = prefix.pop() {
            self.push_front(element, token);
        }
        removed
    }
}
