//! K-way merging of sorted sequences
//!
//! Merges K individually sorted sequences into one sorted output by keeping
//! a heap of read cursors, one per sequence, ordered by their current head
//! element. Emitting an element costs a single down heapify pass through
//! [`crate::heap::replace_heap_by`], for O(M log K) total work where M is
//! the output size and K the number of sequences.

use crate::heap;

#[allow(dead_code)]
pub static COMPARE_COUNTER: crate::counter::GlobalCounter = crate::counter::GlobalCounter::new();

/// Merge the sorted sequences in `inputs` into `out`.
///
/// `is_less` orders the *selection heap*, not the sequences: it must be the
/// inverse of the ordering the inputs are sorted by. Sequences sorted
/// ascending need a "greater" predicate (see [`k_way_merge`] for that common
/// case), sequences sorted descending need a "less" one. The relative order
/// of equal elements drawn from different sequences is unspecified.
///
/// The sequences themselves are never written to; each is consumed through
/// a cursor sub-slice that is advanced as elements are emitted, so the
/// inputs remain intact after merging. Elements are cloned into `out` in
/// merged order. An empty `inputs` or all-empty sequences leave `out`
/// untouched.
pub fn k_way_merge_by<'a, T, I, O, F>(inputs: I, out: &mut O, mut is_less: F)
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a [T]>,
    O: Extend<T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut cursors: Vec<&[T]> = inputs.into_iter().collect();
    if cursors.is_empty() {
        return;
    }

    // Partition the non-empty cursors to the front so exhausted sequences
    // never enter the heap
    let mut live = 0;
    for index in 0..cursors.len() {
        if !cursors[index].is_empty() {
            cursors.swap(live, index);
            live += 1;
        }
    }
    cursors.truncate(live);
    if cursors.is_empty() {
        return;
    }

    // Logical heap size; the buffer keeps one extra trailing slot as scratch
    // space for the root replacement
    let mut len = cursors.len();
    let scratch = cursors[0];
    cursors.push(scratch);

    let mut by_head = |a: &&[T], b: &&[T]| {
        #[cfg(feature = "counters")]
        COMPARE_COUNTER.increase(1);

        is_less(&a[0], &b[0])
    };

    heap::make_heap_by(&mut cursors[..len], &mut by_head);

    while len > 0 {
        // The cursor holding the next output element sits at the root
        let head = cursors[0];
        out.extend(std::iter::once(head[0].clone()));

        let rest = &head[1..];
        if rest.is_empty() {
            // Sequence exhausted, shrink the heap over it
            heap::pop_heap_by(&mut cursors[..len], &mut by_head);
            len -= 1;
        } else {
            // The advanced cursor re-enters as the new root candidate
            heap::replace_heap_by(&mut cursors[..=len], rest, &mut by_head);
        }
    }
}

/// Merge sequences sorted ascending by the natural order of `T` into `out`
pub fn k_way_merge<'a, T, I, O>(inputs: I, out: &mut O)
where
    T: Ord + Clone + 'a,
    I: IntoIterator<Item = &'a [T]>,
    O: Extend<T>,
{
    // Ascending inputs select their next element through the inverted order
    k_way_merge_by(inputs, out, |a, b| b < a);
}
