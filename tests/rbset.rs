use rbset::RbSet;
use rstest::rstest;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn init_logging() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn keys(set: &RbSet<i32>) -> Vec<i32> {
    set.iter().copied().collect()
}

fn textbook() -> RbSet<i32> {
    let mut set = RbSet::new();
    for key in [13, 8, 17, 1, 11, 15, 25, 6, 22, 27] {
        assert!(set.insert(key));
        set.check_invariants().unwrap();
    }
    set
}

#[test]
fn test_insert_yields_sorted_keys() {
    init_logging();
    let set = textbook();
    assert_eq!(keys(&set), vec![1, 6, 8, 11, 13, 15, 17, 22, 25, 27]);
    assert_eq!(set.len(), 10);
    // black root and no red-red edge are part of the check
    set.check_invariants().unwrap();
}

#[test]
fn test_remove_from_textbook_tree() {
    init_logging();
    let mut set = textbook();
    for key in [17, 22, 25] {
        assert!(set.remove(&key));
        set.check_invariants().unwrap();
    }
    assert_eq!(keys(&set), vec![1, 6, 8, 11, 13, 15, 27]);
    assert_eq!(set.len(), 7);
}

#[test]
fn test_remove_inner_node_from_textbook_tree() {
    let mut set = textbook();
    assert!(set.remove(&8));
    set.check_invariants().unwrap();
    assert_eq!(keys(&set), vec![1, 6, 11, 13, 15, 17, 22, 25, 27]);
}

#[test]
fn test_empty_tree_misses() {
    let mut set: RbSet<i32> = RbSet::new();
    assert!(!set.remove(&4));
    assert!(!set.contains(&4));
    assert_eq!(set.len(), 0);
}

#[test]
fn test_drain_one_by_one() {
    init_logging();
    let mut set = RbSet::new();
    for key in [0, -1, -2, -3, 1, 2, 3] {
        assert!(set.insert(key));
        set.check_invariants().unwrap();
    }
    assert!(set.remove(&-1));
    set.check_invariants().unwrap();
    for key in [0, -2, -3, 1, 2, 3] {
        assert!(set.remove(&key));
        set.check_invariants().unwrap();
    }
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.iter().count(), 0);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut set = RbSet::new();
    assert!(set.insert(56));
    assert!(!set.insert(56));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_cursor_removes_even_keys() {
    init_logging();
    let mut set: RbSet<i32> = (1..=10).collect();
    let mut cursor = set.cursor_mut();
    let mut seen = Vec::new();
    while let Some(&key) = cursor.next() {
        seen.push(key);
        if key % 2 == 0 {
            assert_eq!(cursor.remove_current(), Some(key));
        }
    }
    assert_eq!(seen, (1..=10).collect::<Vec<_>>());
    assert_eq!(keys(&set), vec![1, 3, 5, 7, 9]);
    assert_eq!(set.len(), 5);
    set.check_invariants().unwrap();
}

#[rstest]
#[case::ascending((0..64).collect())]
#[case::descending((0..64).rev().collect())]
#[case::zigzag((0..32).flat_map(|i| [i, 63 - i]).collect())]
fn test_insert_then_remove_all(#[case] order: Vec<i32>) {
    let mut set = RbSet::new();
    for &key in &order {
        assert!(set.insert(key));
        set.check_invariants().unwrap();
    }
    assert_eq!(keys(&set), (0..64).collect::<Vec<_>>());
    for key in &order {
        assert!(set.remove(key));
        set.check_invariants().unwrap();
    }
    assert!(set.is_empty());
}

#[rstest]
#[case(13, true)]
#[case(27, true)]
#[case(1, true)]
#[case(14, false)]
#[case(-5, false)]
fn test_contains(#[case] key: i32, #[case] expected: bool) {
    assert_eq!(textbook().contains(&key), expected);
}

#[test]
fn test_custom_comparator_decides_equality() {
    let mut set: RbSet<String, _> =
        RbSet::with_comparator(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
    assert!(set.insert("Apple".to_string()));
    assert!(!set.insert("APPLE".to_string()));
    assert!(set.insert("banana".to_string()));
    assert!(set.contains(&"apple".to_string()));
    assert!(set.remove(&"BANANA".to_string()));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Apple"]);
    set.check_invariants().unwrap();
}

#[test]
fn test_first_last_and_metrics() {
    let set = textbook();
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&27));
    assert_eq!(set.height(), 4);
    assert_eq!(set.depth(), 3);
}

#[test]
fn test_collect_extend_and_eq() {
    let mut a: RbSet<i32> = [5, 1, 5, 3].into_iter().collect();
    assert_eq!(a.len(), 3);
    a.extend(&[7, 1]);
    let b: RbSet<i32> = [1, 3, 5, 7].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.clone(), b);
    assert_eq!(format!("{a:?}"), "{1, 3, 5, 7}");
}
