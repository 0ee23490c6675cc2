use dsu::DisjointSet;

#[test]
fn fresh_elements_are_singletons() {
    let mut set = DisjointSet::new(5);
    assert_eq!(set.len(), 5);
    for a in 0..5 {
        for b in 0..5 {
            assert_eq!(set.connected(a, b), a == b);
        }
    }
}

#[test]
fn empty_structure() {
    let set = DisjointSet::new(0);
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn union_is_transitive() {
    let mut set = DisjointSet::new(6);
    set.union(0, 1);
    set.union(2, 3);
    assert!(set.connected(0, 1));
    assert!(!set.connected(1, 2));

    set.union(1, 2);
    assert!(set.connected(0, 3));
    assert!(!set.connected(0, 4));
}

#[test]
fn repeated_union_is_a_noop() {
    let mut set = DisjointSet::new(3);
    set.union(0, 1);
    set.union(0, 1);
    set.union(1, 0);
    assert!(set.connected(0, 1));
    assert!(!set.connected(0, 2));
}

#[test]
fn find_agrees_within_a_set() {
    let mut set = DisjointSet::new(8);
    for i in 0..7 {
        set.union(i, i + 1);
    }
    let root = set.find(0);
    for i in 1..8 {
        assert_eq!(set.find(i), root);
    }
}

#[test]
fn self_union_is_harmless() {
    let mut set = DisjointSet::new(2);
    set.union(1, 1);
    assert!(set.connected(1, 1));
    assert!(!set.connected(0, 1));
}
