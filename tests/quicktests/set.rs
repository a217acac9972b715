use treeset::TreeSet;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree set and a std `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes both hold the same elements in the same order.
fn do_ops<T>(ops: &[Op<T>], tree: &mut TreeSet<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(tree.remove(x), set.remove(x));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = TreeSet::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = TreeSet::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x) && tree.get(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = TreeSet::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && tree.get(x) == None)
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = TreeSet::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let deletes: HashSet<_> = deletes.into_iter().collect();
        let still_present: HashSet<_> = xs
            .into_iter()
            .filter(|x| !deletes.contains(x))
            .collect();

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }

    fn iteration_is_sorted_and_complete(xs: Vec<i8>) -> bool {
        let mut tree = TreeSet::new();
        for x in &xs {
            tree.insert(*x);
        }
        let expected: BTreeSet<_> = xs.into_iter().collect();

        tree.iter().eq(expected.iter())
            && tree.first() == expected.iter().next()
            && tree.last() == expected.iter().next_back()
    }
}
