use std::cell::Cell;

use crate::{Vec, alloc::Global, vec_in};

/// Bumps a shared counter when dropped.
struct DropCount<'a>(&'a Cell<usize>);

impl Drop for DropCount<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn dropping_the_vector_drops_every_element() {
    let drops = Cell::new(0);

    {
        let mut vec: Vec<DropCount> = Vec::new();
        for _ in 0..5 {
            vec.push(DropCount(&drops));
        }
    }

    assert_eq!(drops.get(), 5);
}

#[test]
fn clear_drops_all_elements() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::new();
    for _ in 0..4 {
        vec.push(DropCount(&drops));
    }

    vec.clear();
    assert_eq!(drops.get(), 4);
    assert!(vec.is_empty());
}

#[test]
fn truncate_drops_only_the_tail() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::new();
    for _ in 0..5 {
        vec.push(DropCount(&drops));
    }

    vec.truncate(2);
    assert_eq!(drops.get(), 3);
    assert_eq!(vec.len(), 2);
}

#[test]
fn pop_moves_the_element_out() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::new();
    vec.push(DropCount(&drops));

    let value = vec.pop().unwrap();
    assert_eq!(drops.get(), 0);

    drop(value);
    assert_eq!(drops.get(), 1);
}

#[test]
fn set_hands_the_old_element_to_the_caller() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::new();
    vec.push(DropCount(&drops));

    let old = vec.set(0, DropCount(&drops));
    assert_eq!(drops.get(), 0);

    drop(old);
    assert_eq!(drops.get(), 1);

    drop(vec);
    assert_eq!(drops.get(), 2);
}

#[test]
fn into_iter_drops_whatever_was_not_consumed() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::new();
    for _ in 0..5 {
        vec.push(DropCount(&drops));
    }

    let mut iter = vec.into_iter();
    drop(iter.next());
    assert_eq!(drops.get(), 1);

    drop(iter);
    assert_eq!(drops.get(), 5);
}

#[test]
fn growth_does_not_drop_or_duplicate() {
    let drops = Cell::new(0);

    let mut vec: Vec<DropCount> = Vec::with_capacity(2);
    for _ in 0..20 {
        vec.push(DropCount(&drops));
    }
    assert_eq!(drops.get(), 0);

    drop(vec);
    assert_eq!(drops.get(), 20);
}

#[test]
fn zero_sized_elements_never_allocate() {
    let mut vec: Vec<()> = Vec::with_capacity(100);
    assert_eq!(vec.capacity(), usize::MAX);

    for _ in 0..1000 {
        vec.push(());
    }
    assert_eq!(vec.len(), 1000);

    assert_eq!(vec.pop(), Some(()));
    assert_eq!(vec.len(), 999);

    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), usize::MAX);
}

#[test]
fn zero_sized_elements_iterate() {
    let vec = vec_in![in Global; (); 7];

    let mut count = 0;
    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 7);

    for () in &mut iter {
        count += 1;
    }
    assert_eq!(count, 7);
    assert_eq!(iter.len(), 0);
}

#[test]
fn zero_sized_elements_in_bulk_operations() {
    let vec = vec_in![in Global; (); 3];

    let mut out: Vec<()> = Vec::new();
    vec.clone_into(&mut out);
    assert_eq!(out.len(), 3);

    let mut sorted: Vec<()> = Vec::new();
    vec.sort_into(&mut sorted, |(), ()| core::cmp::Ordering::Equal);
    assert_eq!(sorted.len(), 3);
}
