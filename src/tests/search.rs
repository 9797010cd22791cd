use crate::{SearchMode, Vec, alloc::Global, vec_in};

#[test]
fn linear_search_finds_the_first_match() {
    let vec = vec_in![in Global; 3, 1, 4, 1, 5];

    assert_eq!(vec.search(&1, SearchMode::Linear), Some(1));
    assert_eq!(vec.search(&5, SearchMode::Linear), Some(4));
    assert_eq!(vec.search(&9, SearchMode::Linear), None);
}

#[test]
fn binary_search_on_a_sorted_vector() {
    let vec = vec_in![in Global; 1, 1, 3, 4, 5];

    let found = vec.search(&1, SearchMode::Binary).unwrap();
    assert_eq!(vec[found], 1);

    assert_eq!(vec.search(&4, SearchMode::Binary), Some(3));
    assert_eq!(vec.search(&2, SearchMode::Binary), None);
    assert_eq!(vec.search(&9, SearchMode::Binary), None);
}

/// Binary search must report the same found/not-found answer as a linear
/// scan on every ascending-sorted input.
#[test]
fn binary_agrees_with_linear_on_sorted_input() {
    for len in 0..=16 {
        let vec: Vec<i32> = Vec::from_iter_in((0..len).map(|i| i / 2), Global);

        for needle in -1..=len {
            let linear = vec.search(&needle, SearchMode::Linear);
            let binary = vec.search(&needle, SearchMode::Binary);

            assert_eq!(
                linear.is_some(),
                binary.is_some(),
                "len {len}, needle {needle}"
            );

            if let Some(index) = binary {
                assert_eq!(vec[index], needle);
            }
        }
    }
}

#[test]
fn binary_search_on_a_single_element() {
    let vec = vec_in![in Global; 7];

    assert_eq!(vec.search(&7, SearchMode::Binary), Some(0));
    assert_eq!(vec.search(&3, SearchMode::Binary), None);
    assert_eq!(vec.search(&9, SearchMode::Binary), None);
}

#[test]
fn search_on_an_empty_vector() {
    let vec: Vec<i32> = Vec::new();

    assert_eq!(vec.search(&1, SearchMode::Linear), None);
    assert_eq!(vec.search(&1, SearchMode::Binary), None);
}

#[test]
fn search_by_a_key_comparator() {
    let vec = vec_in![in Global; (1, "one"), (3, "three"), (5, "five")];

    let index = vec.search_by(SearchMode::Binary, |entry| entry.0.cmp(&3));
    assert_eq!(index, Some(1));

    let missing = vec.search_by(SearchMode::Binary, |entry| entry.0.cmp(&4));
    assert_eq!(missing, None);
}

#[test]
fn linear_search_needs_no_order() {
    let vec = vec_in![in Global; 9, 2, 7, 2];

    assert_eq!(vec.search(&7, SearchMode::Linear), Some(2));
    assert_eq!(vec.search(&2, SearchMode::Linear), Some(1));
}
