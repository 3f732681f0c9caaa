use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::{BiList, Node};

/*
* ==========================
* ===== Iteratory bits =====
* ==========================
*/

impl<T> BiList<T> {
	/// Forward iterator over refs, front to back. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// let forward: Vec<_> = list.iter().copied().collect();
	/// assert_eq!(forward, [1, 2, 3]);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			front:     unsafe { self.head.as_ref().next.unwrap_unchecked() },
			back:      unsafe { self.tail.as_ref().prev.unwrap_unchecked() },
			remaining: self.len,
			_list:     PhantomData,
		}
	}

	/// Backward iterator over refs, back to front. `O(1)`.
	/// On an empty list `tail.prev` is the head sentinel itself, which is
	/// exactly the empty range: the iterator yields nothing.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// let backward: Vec<_> = list.iter_back().copied().collect();
	/// assert_eq!(backward, [3, 2, 1]);
	/// ```
	#[inline]
	pub fn iter_back(&self) -> IterBack<'_, T> {
		IterBack {
			front:     unsafe { self.head.as_ref().next.unwrap_unchecked() },
			back:      unsafe { self.tail.as_ref().prev.unwrap_unchecked() },
			remaining: self.len,
			_list:     PhantomData,
		}
	}

	/// Forward iterator over mut refs. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	///
	/// for elem in list.iter_mut() {
	///     *elem *= 10;
	/// }
	///
	/// assert_eq!(list.to_string(), "[10, 20, 30]");
	/// ```
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		IterMut {
			front:     unsafe { self.head.as_ref().next.unwrap_unchecked() },
			back:      unsafe { self.tail.as_ref().prev.unwrap_unchecked() },
			remaining: self.len,
			_list:     PhantomData,
		}
	}

	/// Forward cursor, positioned before the first element. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3, 4]);
	/// let mut cursor = list.cursor_mut();
	///
	/// while cursor.advance() {
	///     if cursor.current().is_some_and(|e| e % 2 == 0) {
	///         let _ = cursor.remove();
	///     }
	/// }
	///
	/// assert_eq!(list.to_string(), "[1, 3]");
	/// ```
	#[inline]
	pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
		let node = self.head;
		CursorMut { list: self, node }
	}

	/// Backward cursor, positioned after the last element. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	/// let mut cursor = list.cursor_back_mut();
	///
	/// cursor.advance();
	/// assert_eq!(cursor.remove(), Some(3));
	///
	/// cursor.advance();
	/// assert_eq!(cursor.current(), Some(&2));
	/// ```
	#[inline]
	pub fn cursor_back_mut(&mut self) -> CursorBackMut<'_, T> {
		let node = self.tail;
		CursorBackMut { list: self, node }
	}
}

/// Forward borrowed iterator, `head.next` up to the tail sentinel.
///
/// Counts down the number of unvisited elements instead of comparing
/// against the sentinel, so a sentinel is never dereferenced.
pub struct Iter<'a, T> {
	front:     NonNull<Node<T>>,
	back:      NonNull<Node<T>>,
	remaining: usize,
	_list:     PhantomData<&'a BiList<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &*self.front.as_ptr() };
		self.front = unsafe { node.next.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_ref() })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &*self.back.as_ptr() };
		self.back = unsafe { node.prev.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_ref() })
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Backward borrowed iterator, `tail.prev` down to the head sentinel.
/// Yields the exact reverse of [`Iter`] for any list state.
pub struct IterBack<'a, T> {
	front:     NonNull<Node<T>>,
	back:      NonNull<Node<T>>,
	remaining: usize,
	_list:     PhantomData<&'a BiList<T>>,
}

unsafe impl<T: Sync> Send for IterBack<'_, T> {}
unsafe impl<T: Sync> Sync for IterBack<'_, T> {}

impl<T> Clone for IterBack<'_, T> {
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

impl<'a, T> Iterator for IterBack<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &*self.back.as_ptr() };
		self.back = unsafe { node.prev.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_ref() })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> DoubleEndedIterator for IterBack<'_, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &*self.front.as_ptr() };
		self.front = unsafe { node.next.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_ref() })
	}
}

impl<T> ExactSizeIterator for IterBack<'_, T> {}
impl<T> FusedIterator for IterBack<'_, T> {}

/// Forward mutable iterator.
pub struct IterMut<'a, T> {
	front:     NonNull<Node<T>>,
	back:      NonNull<Node<T>>,
	remaining: usize,
	_list:     PhantomData<&'a mut BiList<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
	type Item = &'a mut T;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &mut *self.front.as_ptr() };
		self.front = unsafe { node.next.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_mut() })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;

		let node = unsafe { &mut *self.back.as_ptr() };
		self.back = unsafe { node.prev.unwrap_unchecked() };
		Some(unsafe { node.elem.assume_init_mut() })
	}
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator. Drains from the front; `next_back` from the back.
pub struct IntoIter<T> {
	list: BiList<T>,
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		if self.list.is_empty() {
			return None;
		}

		let node = unsafe { self.list.head.as_ref().next.unwrap_unchecked() };
		Some(unsafe { self.list.unlink(node) })
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.list.len(), Some(self.list.len()))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.list.is_empty() {
			return None;
		}

		let node = unsafe { self.list.tail.as_ref().prev.unwrap_unchecked() };
		Some(unsafe { self.list.unlink(node) })
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BiList<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	/// Consume the list into an owning iterator. `O(1)`.
	/// ```
	/// # use bilist::BiList;
	/// let list = BiList::from(vec![1, 2, 3]);
	/// let drained: Vec<_> = list.into_iter().collect();
	/// assert_eq!(drained, [1, 2, 3]);
	/// ```
	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoIter { list: self }
	}
}

impl<'a, T> IntoIterator for &'a BiList<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut BiList<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/*
* =======================
* ===== Cursor bits =====
* =======================
*/

/// A forward cursor with in-place removal.
///
/// The position is either a live node or one of the two sentinels; it
/// starts at the head sentinel, before the first element. [`remove`]
/// repositions to the removed node's predecessor, so the next [`advance`]
/// lands on the element that followed the removed one. The walk continues
/// in place, it never restarts.
///
/// [`remove`]: CursorMut::remove
/// [`advance`]: CursorMut::advance
pub struct CursorMut<'a, T> {
	list: &'a mut BiList<T>,
	node: NonNull<Node<T>>,
}

impl<T> CursorMut<'_, T> {
	/// Move one step toward the back. `O(1)`.
	/// Returns `false` once the tail sentinel is reached; further calls
	/// keep returning `false`.
	pub fn advance(&mut self) -> bool {
		match unsafe { self.node.as_ref().next } {
			Some(next) => {
				self.node = next;
				self.node != self.list.tail
			}
			None => false,
		}
	}

	/// Move one step toward the front. `O(1)`.
	/// Returns `false` once the head sentinel is reached.
	pub fn retreat(&mut self) -> bool {
		match unsafe { self.node.as_ref().prev } {
			Some(prev) => {
				self.node = prev;
				self.node != self.list.head
			}
			None => false,
		}
	}

	/// Get a ref to the current element. `O(1)`.
	/// `None` when positioned on a sentinel.
	#[inline]
	pub fn current(&self) -> Option<&T> {
		if !self.is_live() {
			return None;
		}
		Some(unsafe { (*self.node.as_ptr()).elem.assume_init_ref() })
	}

	/// Get a mut ref to the current element. `O(1)`.
	#[inline]
	pub fn current_mut(&mut self) -> Option<&mut T> {
		if !self.is_live() {
			return None;
		}
		Some(unsafe { (*self.node.as_ptr()).elem.assume_init_mut() })
	}

	/// Remove the current element and return it. `O(1)`.
	/// The cursor moves to the removed node's predecessor (possibly the
	/// head sentinel), so the next [`advance`] reaches the element that
	/// followed the removed one. `None` when positioned on a sentinel.
	/// ```
	/// # use bilist::BiList;
	/// let mut list = BiList::from(vec![1, 2, 3]);
	/// let mut cursor = list.cursor_mut();
	///
	/// cursor.advance();
	/// assert_eq!(cursor.remove(), Some(1));
	///
	/// cursor.advance();
	/// assert_eq!(cursor.current(), Some(&2));
	/// ```
	///
	/// [`advance`]: CursorMut::advance
	pub fn remove(&mut self) -> Option<T> {
		if !self.is_live() {
			return None;
		}

		let prev = unsafe { self.node.as_ref().prev.unwrap_unchecked() };
		let elem = unsafe { self.list.unlink(self.node) };
		self.node = prev;
		Some(elem)
	}

	#[inline]
	fn is_live(&self) -> bool {
		self.node != self.list.head && self.node != self.list.tail
	}
}

/// Mirror of [`CursorMut`]: starts at the tail sentinel and [`advance`]
/// walks toward the front. [`remove`] repositions to the removed node's
/// successor, so the next [`advance`] lands on the element that preceded
/// the removed one.
///
/// [`advance`]: CursorBackMut::advance
/// [`remove`]: CursorBackMut::remove
pub struct CursorBackMut<'a, T> {
	list: &'a mut BiList<T>,
	node: NonNull<Node<T>>,
}

impl<T> CursorBackMut<'_, T> {
	/// Move one step toward the front. `O(1)`.
	/// Returns `false` once the head sentinel is reached.
	pub fn advance(&mut self) -> bool {
		match unsafe { self.node.as_ref().prev } {
			Some(prev) => {
				self.node = prev;
				self.node != self.list.head
			}
			None => false,
		}
	}

	/// Move one step toward the back. `O(1)`.
	/// Returns `false` once the tail sentinel is reached.
	pub fn retreat(&mut self) -> bool {
		match unsafe { self.node.as_ref().next } {
			Some(next) => {
				self.node = next;
				self.node != self.list.tail
			}
			None => false,
		}
	}

	/// Get a ref to the current element. `O(1)`.
	/// `None` when positioned on a sentinel.
	#[inline]
	pub fn current(&self) -> Option<&T> {
		if !self.is_live() {
			return None;
		}
		Some(unsafe { (*self.node.as_ptr()).elem.assume_init_ref() })
	}

	/// Get a mut ref to the current element. `O(1)`.
	#[inline]
	pub fn current_mut(&mut self) -> Option<&mut T> {
		if !self.is_live() {
			return None;
		}
		Some(unsafe { (*self.node.as_ptr()).elem.assume_init_mut() })
	}

	/// Remove the current element and return it. `O(1)`.
	/// The cursor moves to the removed node's successor (possibly the tail
	/// sentinel), so the next [`advance`] reaches the element that preceded
	/// the removed one. `None` when positioned on a sentinel.
	///
	/// [`advance`]: CursorBackMut::advance
	pub fn remove(&mut self) -> Option<T> {
		if !self.is_live() {
			return None;
		}

		let next = unsafe { self.node.as_ref().next.unwrap_unchecked() };
		let elem = unsafe { self.list.unlink(self.node) };
		self.node = next;
		Some(elem)
	}

	#[inline]
	fn is_live(&self) -> bool {
		self.node != self.list.head && self.node != self.list.tail
	}
}
