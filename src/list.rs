use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::error::OutOfBounds;

/// A doubly linked list bounded by two permanent sentinel nodes.
///
/// The sentinels never hold user data; `head.next` and `tail.prev` always
/// point into the live chain, which collapses to `head <-> tail` when the
/// list is empty. Every operation is index-addressed and walks the chain
/// from whichever end is closer.
///
/// Equality used by the search operations, and the hook run by [`clear`],
/// are pluggable closures shared (not deep-copied) by [`Clone`].
///
/// [`clear`]: BiList::clear
pub struct BiList<T> {
	pub(crate) head: NonNull<Node<T>>,
	pub(crate) tail: NonNull<Node<T>>,
	pub(crate) len:  usize,
	eq:         Option<Rc<dyn Fn(&T, &T) -> bool>>,
	clear_hook: Option<Rc<dyn Fn(&mut BiList<T>)>>,
	_boo:       PhantomData<T>,
}

pub(crate) struct Node<T> {
	pub(crate) next: Option<NonNull<Node<T>>>,
	pub(crate) prev: Option<NonNull<Node<T>>>,
	pub(crate) elem: MaybeUninit<T>,
}

impl<T> Node<T> {
	fn live(elem: T) -> NonNull<Self> {
		unsafe {
			NonNull::new_unchecked(Box::into_raw(Box::new(Self {
				next: None,
				prev: None,
				elem: MaybeUninit::new(elem),
			})))
		}
	}

	fn sentinel() -> NonNull<Self> {
		unsafe {
			NonNull::new_unchecked(Box::into_raw(Box::new(Self {
				next: None,
				prev: None,
				elem: MaybeUninit::uninit(),
			})))
		}
	}
}

impl<T> BiList<T> {
	/// Create a new empty list. `O(1)`.
	/// Allocates the two sentinel nodes.
	/// ```
	/// # use bilist::BiList;
	/// let list: BiList<u8> = BiList::new();
	/// assert_eq!(list.len(), 0);
	/// ```
	pub fn new() -> Self {
		let head = Node::sentinel();
		let tail = Node::sentinel();

		unsafe {
			(*head.as_ptr()).next = Some(tail);
			(*tail.as_ptr()).prev = Some(head);
		}

		Self {
			head,
			tail,
			len:        0,
			eq:         None,
			clear_hook: None,
			_boo:       PhantomData,
		}
	}

	/// Create a new empty list with a custom equality strategy. `O(1)`.
	/// The strategy is consulted by [`index_of`], [`contains`] and
	/// [`remove_item`] instead of `PartialEq`.
	/// ```
	/// # use bilist::BiList;
	/// let mut list: BiList<String> =
	///     BiList::with_eq(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
	///
	/// list.push_back("Hello".to_string());
	/// assert_eq!(list.index_of(&"HELLO".to_string()), Some(0));
	/// ```
	///
	/// [`index_of`]: BiList::index_of
	/// [`contains`]: BiList::contains
	/// [`remove_item`]: BiList::remove_item
	pub fn with_eq(eq: impl Fn(&T, &T) -> bool + 'static) -> Self {
		let mut list = Self::new();
		list.eq = Some(Rc::new(eq));
		list
	}

	/// Replace the equality strategy. `O(1)`.
	#[inline]
	pub fn set_eq(&mut self, eq: impl Fn(&T, &T) -> bool + 'static) {
		self.eq = Some(Rc::new(eq));
	}

	/// Install a hook invoked once by [`clear`] (and so by `Drop`) before
	/// any node is freed. `O(1)`.
	/// Meant for lists of owning handles whose referents need tearing down
	/// as a batch.
	/// ```
	/// # use bilist::BiList;
	/// # use std::rc::Rc;
	/// # use std::cell::Cell;
	/// let hits = Rc::new(Cell::new(0));
	/// let seen = hits.clone();
	///
	/// let mut list = BiList::from(vec![1, 2, 3]);
	/// list.set_clear_hook(move |list| seen.set(seen.get() + list.len()));
	///
	/// list.clear();
	/// assert_eq!(hits.get(), 3);
	/// ```
	///
	/// [`clear`]: BiList::clear
	#[inline]
	pub fn set_clear_hook(&mut self, hook: impl Fn(&mut Self) + 'static) {
		self.clear_hook = Some(Rc::new(hook));
	}

	/// Append an element at the back of the list. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::new();
	/// list.push_back(1);
	/// list.push_back(2);
	/// list.push_back(3);
	///
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	#[inline]
	pub fn push_back(&mut self, elem: T) {
		unsafe { self.link_before(self.tail, elem) };
	}

	/// Insert an element at the given index, shifting the rest back. `O(n)`.
	/// Valid indices are `0..=len`; `insert(len, e)` is exactly
	/// [`push_back`]. Walks from the closer end of the list.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 3]);
	///
	/// list.insert(1, 2).unwrap();
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	///
	/// assert!(list.insert(7, 9).is_err());
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	///
	/// [`push_back`]: BiList::push_back
	pub fn insert(&mut self, index: usize, elem: T) -> Result<(), OutOfBounds> {
		if index > self.len {
			return Err(OutOfBounds { index, len: self.len });
		}

		let succ = self.node_at(index);
		unsafe { self.link_before(succ, elem) };
		Ok(())
	}

	/// Remove and return the element at the given index. `O(n)`.
	/// Valid indices are `0..len`. Walks from the closer end of the list.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	///
	/// assert_eq!(list.remove_at(1), Ok(2));
	/// assert_eq!(list.to_string(), "[1, 3]");
	///
	/// assert!(list.remove_at(2).is_err());
	/// assert_eq!(list.len(), 2);
	/// ```
	pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfBounds> {
		if index >= self.len {
			return Err(OutOfBounds { index, len: self.len });
		}

		let node = self.node_at(index);
		Ok(unsafe { self.unlink(node) })
	}

	/// Remove the first element equal to `item` and return it. `O(n)`.
	/// Uses the equality strategy if one is set, else `PartialEq`.
	/// Returns `None` if no element matched.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3, 2]);
	///
	/// assert_eq!(list.remove_item(&2), Some(2));
	/// assert_eq!(list.to_string(), "[1, 3, 2]");
	/// assert_eq!(list.remove_item(&7), None);
	/// ```
	pub fn remove_item(&mut self, item: &T) -> Option<T>
	where
		T: PartialEq,
	{
		let mut cur = unsafe { self.head.as_ref().next.unwrap_unchecked() };

		while cur != self.tail {
			if self.matches(unsafe { (*cur.as_ptr()).elem.assume_init_ref() }, item) {
				return Some(unsafe { self.unlink(cur) });
			}
			cur = unsafe { (*cur.as_ptr()).next.unwrap_unchecked() };
		}

		None
	}

	/// Get a ref to the element at the given index. `O(n)`.
	/// Returns `None` if the index is out of bounds.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert_eq!(list.get(1), Some(&2));
	/// assert_eq!(list.get(3), None);
	/// ```
	pub fn get(&self, index: usize) -> Option<&T> {
		if index >= self.len {
			return None;
		}

		let node = self.node_at(index);
		Some(unsafe { (*node.as_ptr()).elem.assume_init_ref() })
	}

	/// Get a mut ref to the element at the given index. `O(n)`.
	/// Returns `None` if the index is out of bounds.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	///
	/// *list.get_mut(1).unwrap() = 4;
	/// assert_eq!(list.to_string(), "[1, 4, 3]");
	/// ```
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		if index >= self.len {
			return None;
		}

		let node = self.node_at(index);
		Some(unsafe { (*node.as_ptr()).elem.assume_init_mut() })
	}

	/// Index of the first element equal to `item`. `O(n)`.
	/// Uses the equality strategy if one is set, else `PartialEq`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert_eq!(list.index_of(&3), Some(2));
	/// assert_eq!(list.index_of(&7), None);
	/// ```
	#[inline]
	pub fn index_of(&self, item: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		self.iter().position(|elem| self.matches(elem, item))
	}

	/// Whether some element of the list is equal to `item`. `O(n)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert!(list.contains(&2));
	/// assert!(!list.contains(&5));
	/// ```
	#[inline]
	pub fn contains(&self, item: &T) -> bool
	where
		T: PartialEq,
	{
		self.index_of(item).is_some()
	}

	/// Whether the list begins with `prefix`, compared elementwise. `O(n)`.
	/// Uses the equality strategy if one is set, else `PartialEq`.
	/// The empty prefix matches any list.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert!(list.starts_with(&[1, 2]));
	/// assert!(!list.starts_with(&[2]));
	/// assert!(!list.starts_with(&[1, 2, 3, 4]));
	/// ```
	pub fn starts_with(&self, prefix: &[T]) -> bool
	where
		T: PartialEq,
	{
		self.len >= prefix.len()
			&& self.iter().zip(prefix).all(|(elem, want)| self.matches(elem, want))
	}

	/// Get the number of elements in the list. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert_eq!(list.len(), 3);
	/// ```
	#[inline]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Check if the list is empty. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let list: BiList<u8> = BiList::new();
	/// assert!(list.is_empty());
	/// ```
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Remove every element, resetting the chain to `head <-> tail`. `O(n)`.
	/// The clear hook, if set, runs once before any node is freed. The hook
	/// is taken out for the duration of the call, so a re-entrant `clear`
	/// will not run it twice. Clearing an empty list is a no-op.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	///
	/// list.clear();
	/// assert!(list.is_empty());
	/// assert_eq!(list.to_string(), "[]");
	/// ```
	pub fn clear(&mut self) {
		if self.len == 0 {
			return;
		}

		if let Some(hook) = self.clear_hook.take() {
			hook(self);
			self.clear_hook = Some(hook);
		}

		let mut cur = unsafe { self.head.as_ref().next.unwrap_unchecked() };

		while cur != self.tail {
			let node = unsafe { Box::from_raw(cur.as_ptr()) };
			cur = unsafe { node.next.unwrap_unchecked() };
			drop(unsafe { node.elem.assume_init() });
		}

		unsafe {
			(*self.head.as_ptr()).next = Some(self.tail);
			(*self.tail.as_ptr()).prev = Some(self.head);
		}
		self.len = 0;
	}

	/// Render the list as `[e0, e1, ..., en]` through a custom formatter. `O(n)`.
	/// The `Display` impl does the same with the native representation.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2]);
	/// assert_eq!(list.format_with(|e| format!("<{e}>")), "[<1>, <2>]");
	/// ```
	pub fn format_with(&self, mut item2str: impl FnMut(&T) -> String) -> String {
		let mut out = String::from("[");

		for (i, elem) in self.iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			out.push_str(&item2str(elem));
		}

		out.push(']');
		out
	}

	fn matches(&self, lhs: &T, rhs: &T) -> bool
	where
		T: PartialEq,
	{
		match &self.eq {
			Some(eq) => eq(lhs, rhs),
			None     => lhs == rhs,
		}
	}

	/// Node at `index`, walking from the closer end.
	/// `index == len` resolves to the tail sentinel.
	fn node_at(&self, index: usize) -> NonNull<Node<T>> {
		debug_assert!(index <= self.len);

		if index <= self.len / 2 {
			(0..=index).fold(self.head, |node, _| unsafe {
				node.as_ref().next.unwrap_unchecked()
			})
		} else {
			(index..self.len).fold(self.tail, |node, _| unsafe {
				node.as_ref().prev.unwrap_unchecked()
			})
		}
	}

	/// Splice a fresh node in front of `succ`.
	///
	/// # Safety
	/// `succ` must be a live node or the tail sentinel of this list.
	unsafe fn link_before(&mut self, succ: NonNull<Node<T>>, elem: T) {
		let new = Node::live(elem);
		let prev = (*succ.as_ptr()).prev.unwrap_unchecked();

		(*new.as_ptr()).prev = Some(prev);
		(*new.as_ptr()).next = Some(succ);
		(*prev.as_ptr()).next = Some(new);
		(*succ.as_ptr()).prev = Some(new);

		self.len += 1;
	}

	/// Unlink a live node, relink its neighbours, and return its element.
	///
	/// # Safety
	/// `node` must be a live (non-sentinel) node of this list.
	pub(crate) unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
		let node = Box::from_raw(node.as_ptr());
		let prev = node.prev.unwrap_unchecked();
		let next = node.next.unwrap_unchecked();

		(*prev.as_ptr()).next = Some(next);
		(*next.as_ptr()).prev = Some(prev);

		self.len -= 1;
		node.elem.assume_init()
	}
}

impl<T> std::ops::Index<usize> for BiList<T> {
	type Output = T;

	/// Essentially equivalent to `get`. `O(n)`.
	/// # Panics
	/// Panics if the index is out of bounds.
	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).expect("index out of bounds")
	}
}

impl<T> std::ops::IndexMut<usize> for BiList<T> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index).expect("index out of bounds")
	}
}

impl<T> Default for BiList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for BiList<T> {
	/// Deep copy: every element is cloned into a fresh sentinel chain. `O(n)`.
	/// The equality strategy and clear hook are shared with the source.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	///
	/// let mut copy = list.clone();
	/// copy.remove_at(0).unwrap();
	///
	/// assert_eq!(copy.to_string(), "[2, 3]");
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	fn clone(&self) -> Self {
		let mut list = Self::new();
		list.eq = self.eq.clone();
		list.clear_hook = self.clear_hook.clone();
		list.extend(self.iter().cloned());
		list
	}

	/// Assignment: clears `self` (running its own clear hook), then deep
	/// copies `source`. `O(n)`.
	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.eq = source.eq.clone();
		self.clear_hook = source.clear_hook.clone();
		self.extend(source.iter().cloned());
	}
}

impl<T: Debug> Debug for BiList<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[")?;

		for (i, elem) in self.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{:?}", elem)?;
		}

		write!(f, "]")
	}
}

impl<T: Display> Display for BiList<T> {
	/// Render as `[e0, e1, ..., en]`; the empty list renders as `[]`.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[")?;

		for (i, elem) in self.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}", elem)?;
		}

		write!(f, "]")
	}
}

impl<T> Extend<T> for BiList<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|elem| self.push_back(elem));
	}
}

impl<T> FromIterator<T> for BiList<T> {
	/// Create a new list from an iterator. `O(n)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = (1..=3).collect::<BiList<_>>();
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = Self::new();
		list.extend(iter);
		list
	}
}

impl<T> From<Vec<T>> for BiList<T> {
	/// Create a new list from a Vec. `O(n)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	#[inline]
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<T: Clone> From<&[T]> for BiList<T> {
	/// Create a new list from a slice. `O(n)`.
	/// ```
	/// # use bilist::BiList;
	/// let array: &[u8] = &[1, 2, 3];
	/// let list = BiList::from(array);
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	#[inline]
	fn from(slice: &[T]) -> Self {
		slice.iter().cloned().collect()
	}
}

impl<T> Drop for BiList<T> {
	/// Drop the list: frees every live node, then the sentinels. `O(n)`.
	fn drop(&mut self) {
		self.clear();
		unsafe {
			drop(Box::from_raw(self.head.as_ptr()));
			drop(Box::from_raw(self.tail.as_ptr()));
		}
	}
}
