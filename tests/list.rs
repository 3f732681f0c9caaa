use std::cell::Cell;
use std::rc::Rc;

use bilist::{BiList, OutOfBounds};

#[test]
fn new_list_is_empty() {
	let list: BiList<i32> = BiList::new();
	assert!(list.is_empty());
	assert_eq!(list.len(), 0);
	assert_eq!(list.to_string(), "[]");
}

#[test]
fn push_back_appends_in_order() {
	let mut list = BiList::new();
	list.push_back(1);
	list.push_back(2);
	list.push_back(3);

	assert_eq!(list.len(), 3);
	assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[test]
fn insert_shifts_elements_back() {
	let mut list = BiList::from(vec![1, 3]);

	list.insert(1, 2).unwrap();
	assert_eq!(list.to_string(), "[1, 2, 3]");

	list.insert(0, 0).unwrap();
	assert_eq!(list.to_string(), "[0, 1, 2, 3]");
}

#[test]
fn insert_at_len_is_append() {
	let mut list = BiList::from(vec![1, 2]);
	list.insert(2, 3).unwrap();

	let mut appended = BiList::from(vec![1, 2]);
	appended.push_back(3);

	assert_eq!(list.to_string(), appended.to_string());
}

#[test]
fn insert_out_of_range_leaves_list_unmodified() {
	let mut list = BiList::from(vec![1, 2, 3]);

	assert_eq!(list.insert(4, 9), Err(OutOfBounds { index: 4, len: 3 }));
	assert_eq!(list.len(), 3);
	assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[test]
fn remove_at_returns_value_and_shifts_left() {
	let mut list = BiList::from(vec![1, 2, 3]);

	assert_eq!(list.remove_at(1), Ok(2));
	assert_eq!(list.get(1), Some(&3));
	assert_eq!(list.to_string(), "[1, 3]");
}

#[test]
fn remove_at_out_of_range_leaves_list_unmodified() {
	let mut list = BiList::from(vec![1, 2, 3]);

	assert_eq!(list.remove_at(3), Err(OutOfBounds { index: 3, len: 3 }));
	assert_eq!(list.to_string(), "[1, 2, 3]");

	let mut empty: BiList<i32> = BiList::new();
	assert!(empty.remove_at(0).is_err());
}

#[test]
fn get_returns_inserted_value() {
	let mut list = BiList::from(vec![1, 3]);
	list.insert(1, 2).unwrap();

	assert_eq!(list.get(1), Some(&2));
	assert_eq!(list.get(3), None);
}

#[test]
fn get_mut_allows_in_place_update() {
	let mut list = BiList::from(vec![1, 2, 3]);
	*list.get_mut(2).unwrap() = 30;
	assert_eq!(list.to_string(), "[1, 2, 30]");
}

#[test]
fn lookup_is_correct_in_both_halves() {
	// Indices past the midpoint walk from the tail; make sure both
	// directions land on the same elements.
	let list: BiList<usize> = (0..11).collect();

	for i in 0..11 {
		assert_eq!(list.get(i), Some(&i));
		assert_eq!(list[i], i);
	}
}

#[test]
fn index_of_and_contains() {
	let mut list = BiList::from(vec![10, 20, 30]);
	list.push_back(20);

	assert_eq!(list.index_of(&20), Some(1));
	assert_eq!(list.index_of(&40), None);
	assert!(list.contains(&30));
	assert!(!list.contains(&5));
}

#[test]
fn remove_item_takes_first_match_only() {
	let mut list = BiList::from(vec![1, 2, 3, 2]);

	assert_eq!(list.remove_item(&2), Some(2));
	assert_eq!(list.to_string(), "[1, 3, 2]");
	assert_eq!(list.remove_item(&7), None);
	assert_eq!(list.len(), 3);
}

#[test]
fn custom_equality_drives_search_operations() {
	let mut list: BiList<String> =
		BiList::with_eq(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
	list.push_back("Alpha".to_string());
	list.push_back("Beta".to_string());

	assert_eq!(list.index_of(&"BETA".to_string()), Some(1));
	assert!(list.contains(&"alpha".to_string()));
	assert_eq!(list.remove_item(&"ALPHA".to_string()), Some("Alpha".to_string()));
	assert_eq!(list.to_string(), "[Beta]");
}

#[test]
fn set_eq_retargets_search_equality() {
	let mut list = BiList::from(vec![10, 21, 32]);
	assert_eq!(list.index_of(&20), None);

	// Same tens digit counts as equal from here on.
	list.set_eq(|a: &i32, b: &i32| a / 10 == b / 10);
	assert_eq!(list.index_of(&20), Some(1));
	assert!(list.contains(&30));
	assert_eq!(list.remove_item(&15), Some(10));
	assert_eq!(list.to_string(), "[21, 32]");
}

#[test]
fn starts_with_compares_prefix_elementwise() {
	let list = BiList::from(vec![1, 2, 3]);
	assert!(list.starts_with(&[1, 2]));
	assert!(list.starts_with(&[1, 2, 3]));
	assert!(list.starts_with(&[]));
	assert!(!list.starts_with(&[1, 3]));
	assert!(!list.starts_with(&[1, 2, 3, 4]));

	let empty: BiList<i32> = BiList::new();
	assert!(empty.starts_with(&[]));
	assert!(!empty.starts_with(&[1]));
}

#[test]
fn starts_with_honors_equality_strategy() {
	let mut list: BiList<String> =
		BiList::with_eq(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
	list.push_back("Alpha".to_string());
	list.push_back("Beta".to_string());

	assert!(list.starts_with(&["ALPHA".to_string()]));
	assert!(!list.starts_with(&["Beta".to_string()]));
}

#[test]
fn clear_resets_and_list_stays_usable() {
	let mut list = BiList::from(vec![1, 2, 3]);
	list.clear();

	assert!(list.is_empty());
	assert_eq!(list.to_string(), "[]");

	list.push_back(7);
	assert_eq!(list.to_string(), "[7]");
}

#[test]
fn clear_hook_runs_once_per_teardown() {
	let hits = Rc::new(Cell::new(0));
	let seen = hits.clone();

	let mut list = BiList::from(vec![1, 2, 3]);
	list.set_clear_hook(move |_| seen.set(seen.get() + 1));

	list.clear();
	assert_eq!(hits.get(), 1);

	// The list is empty now; dropping it must not re-run the hook.
	drop(list);
	assert_eq!(hits.get(), 1);
}

#[test]
fn drop_of_populated_list_runs_clear_hook() {
	let hits = Rc::new(Cell::new(0));
	let seen = hits.clone();

	{
		let mut list = BiList::from(vec![1, 2, 3]);
		list.set_clear_hook(move |list| seen.set(seen.get() + list.len()));
	}

	assert_eq!(hits.get(), 3);
}

#[test]
fn clone_is_a_deep_copy() {
	let list = BiList::from(vec!["a".to_string(), "b".to_string()]);
	let mut copy = list.clone();

	copy.remove_at(0).unwrap();
	copy.get_mut(0).unwrap().push('!');

	assert_eq!(copy.to_string(), "[b!]");
	assert_eq!(list.to_string(), "[a, b]");
}

#[test]
fn clone_from_replaces_contents() {
	let source = BiList::from(vec![4, 5]);
	let mut dest = BiList::from(vec![1, 2, 3]);

	dest.clone_from(&source);
	assert_eq!(dest.to_string(), "[4, 5]");

	dest.push_back(6);
	assert_eq!(source.to_string(), "[4, 5]");
}

#[test]
fn forward_order_is_reverse_of_backward_order() {
	let list = BiList::from(vec![1, 2, 3, 4, 5]);

	let forward: Vec<_> = list.iter().copied().collect();
	let mut backward: Vec<_> = list.iter_back().copied().collect();
	backward.reverse();

	assert_eq!(forward, backward);

	let empty: BiList<i32> = BiList::new();
	assert_eq!(empty.iter().next(), None);
	assert_eq!(empty.iter_back().next(), None);
}

#[test]
fn iterators_are_double_ended() {
	let list = BiList::from(vec![1, 2, 3, 4]);

	let mut iter = list.iter();
	assert_eq!(iter.next(), Some(&1));
	assert_eq!(iter.next_back(), Some(&4));
	assert_eq!(iter.next(), Some(&2));
	assert_eq!(iter.next_back(), Some(&3));
	assert_eq!(iter.next(), None);
	assert_eq!(iter.next_back(), None);

	assert_eq!(list.iter_back().rev().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn iter_mut_updates_every_element() {
	let mut list = BiList::from(vec![1, 2, 3]);

	for elem in list.iter_mut() {
		*elem *= 10;
	}

	assert_eq!(list.to_string(), "[10, 20, 30]");
}

#[test]
fn into_iter_drains_front_and_back() {
	let list = BiList::from(vec![1, 2, 3]);
	assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

	let list = BiList::from(vec![1, 2, 3]);
	let mut iter = list.into_iter();
	assert_eq!(iter.next_back(), Some(3));
	assert_eq!(iter.next(), Some(1));
	assert_eq!(iter.next_back(), Some(2));
	assert_eq!(iter.next(), None);
}

#[test]
fn cursor_removes_while_advancing() {
	let mut list = BiList::from(vec![1, 2, 3, 4, 5, 6]);
	let mut cursor = list.cursor_mut();

	while cursor.advance() {
		if cursor.current().unwrap() % 2 == 0 {
			assert!(cursor.remove().is_some());
		}
	}

	assert_eq!(list.to_string(), "[1, 3, 5]");
	assert_eq!(list.len(), 3);
}

#[test]
fn cursor_removes_first_element_and_continues() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_mut();

	cursor.advance();
	assert_eq!(cursor.remove(), Some(1));
	// Repositioned before the surviving front; the next advance lands on 2.
	assert_eq!(cursor.current(), None);
	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&2));

	assert_eq!(list.to_string(), "[2, 3]");
}

#[test]
fn cursor_can_drain_the_whole_list() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_mut();

	let mut drained = Vec::new();
	while cursor.advance() {
		drained.push(cursor.remove().unwrap());
	}

	assert_eq!(drained, [1, 2, 3]);
	assert!(list.is_empty());
}

#[test]
fn cursor_remove_on_sentinel_is_none() {
	let mut list = BiList::from(vec![1]);
	let mut cursor = list.cursor_mut();

	assert_eq!(cursor.remove(), None);
	assert!(cursor.advance() || cursor.current().is_some());
	assert_eq!(cursor.remove(), Some(1));
	assert!(!cursor.advance());
	assert_eq!(cursor.remove(), None);
}

#[test]
fn backward_cursor_removes_while_advancing() {
	let mut list = BiList::from(vec![1, 2, 3, 4]);
	let mut cursor = list.cursor_back_mut();

	while cursor.advance() {
		if cursor.current().unwrap() % 2 == 1 {
			assert!(cursor.remove().is_some());
		}
	}

	assert_eq!(list.to_string(), "[2, 4]");
}

#[test]
fn backward_cursor_visits_back_to_front() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_back_mut();

	let mut seen = Vec::new();
	while cursor.advance() {
		seen.push(*cursor.current().unwrap());
	}

	assert_eq!(seen, [3, 2, 1]);
}

#[test]
fn cursor_retreat_steps_back_and_stops_at_front_sentinel() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_mut();

	cursor.advance();
	cursor.advance();
	assert_eq!(cursor.current(), Some(&2));

	assert!(cursor.retreat());
	assert_eq!(cursor.current(), Some(&1));

	// Off the front: head sentinel, no element, further retreats stay put.
	assert!(!cursor.retreat());
	assert_eq!(cursor.current(), None);
	assert!(!cursor.retreat());

	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&1));
}

#[test]
fn backward_cursor_retreat_steps_toward_back_sentinel() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_back_mut();

	cursor.advance();
	cursor.advance();
	assert_eq!(cursor.current(), Some(&2));

	assert!(cursor.retreat());
	assert_eq!(cursor.current(), Some(&3));

	// Off the back: tail sentinel, no element, further retreats stay put.
	assert!(!cursor.retreat());
	assert_eq!(cursor.current(), None);
	assert!(!cursor.retreat());

	assert!(cursor.advance());
	assert_eq!(cursor.current(), Some(&3));
}

#[test]
fn cursor_current_mut_edits_in_place() {
	let mut list = BiList::from(vec![1, 2, 3]);
	let mut cursor = list.cursor_mut();

	while cursor.advance() {
		*cursor.current_mut().unwrap() += 1;
	}

	assert_eq!(list.to_string(), "[2, 3, 4]");
}

#[test]
fn format_with_uses_custom_formatter() {
	let list = BiList::from(vec![1, 2, 3]);
	assert_eq!(list.format_with(|e| format!("#{e}")), "[#1, #2, #3]");

	let empty: BiList<i32> = BiList::new();
	assert_eq!(empty.format_with(|e| format!("{e}")), "[]");
}

#[test]
fn debug_matches_display_shape() {
	let list = BiList::from(vec!["a", "b"]);
	assert_eq!(format!("{:?}", list), "[\"a\", \"b\"]");
	assert_eq!(list.to_string(), "[a, b]");
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_operator_panics_out_of_range() {
	let list = BiList::from(vec![1]);
	let _ = list[3];
}

#[test]
fn worked_example_end_to_end() {
	let mut list = BiList::new();
	list.push_back(1);
	list.push_back(2);
	list.push_back(3);
	assert_eq!(list.to_string(), "[1, 2, 3]");

	assert_eq!(list.remove_at(1), Ok(2));
	assert_eq!(list.to_string(), "[1, 3]");
	assert_eq!(list.index_of(&3), Some(1));
	assert!(!list.contains(&5));
}

struct Tracked {
	drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
	fn drop(&mut self) {
		self.drops.set(self.drops.get() + 1);
	}
}

#[test]
fn every_element_is_dropped_exactly_once() {
	let drops = Rc::new(Cell::new(0));

	{
		let mut list = BiList::new();
		for _ in 0..5 {
			list.push_back(Tracked { drops: drops.clone() });
		}

		let removed = list.remove_at(2).unwrap();
		assert_eq!(drops.get(), 0);
		drop(removed);
		assert_eq!(drops.get(), 1);

		list.clear();
		assert_eq!(drops.get(), 5);

		list.push_back(Tracked { drops: drops.clone() });
	}

	assert_eq!(drops.get(), 6);
}

#[test]
fn into_iter_drops_unconsumed_rest() {
	let drops = Rc::new(Cell::new(0));

	let mut list = BiList::new();
	for _ in 0..4 {
		list.push_back(Tracked { drops: drops.clone() });
	}

	let mut iter = list.into_iter();
	drop(iter.next());
	assert_eq!(drops.get(), 1);

	drop(iter);
	assert_eq!(drops.get(), 4);
}

#[test]
fn matches_vec_model_through_mixed_ops() {
	let mut list = BiList::new();
	let mut model = Vec::new();
	let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

	for step in 0..200_usize {
		seed = seed
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		let roll = (seed >> 33) as usize;

		if roll % 3 == 0 && !model.is_empty() {
			let index = roll % model.len();
			assert_eq!(list.remove_at(index).unwrap(), model.remove(index));
		} else {
			let index = roll % (model.len() + 1);
			list.insert(index, step).unwrap();
			model.insert(index, step);
		}

		assert_eq!(list.len(), model.len());
	}

	assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);

	let mut backward: Vec<_> = list.iter_back().copied().collect();
	backward.reverse();
	assert_eq!(backward, model);
}
