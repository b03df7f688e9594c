//! Single pass binary heap root replacement
//!
//! A replacement updates the root of an existing heap with one down heapify
//! pass instead of a pop followed by a push, halving the work per update.
//! The heap occupies the prefix of a mutable slice whose last slot is
//! scratch space, so a buffer holding a heap of `n` elements needs `n + 1`
//! slots.
//!
//! All heaps are max-heaps with respect to an `is_less` predicate (a strict
//! weak ordering), with the root at index 0 and the children of node `i` at
//! `2 * i + 1` and `2 * i + 2`. The `_by` variants take the predicate, the
//! plain variants use the natural ascending order of `T`. Passing an
//! inverted predicate yields a min-heap.
//!
//! Preconditions (a well formed heap region, the trailing scratch slot) are
//! trusted rather than validated; misuse produces garbage ordering, not a
//! panic. Debug builds check the heap property with assertions.

/// Move the element at `pos` down the heap while a child is greater
fn sift_down_by<T, F: FnMut(&T, &T) -> bool>(heap: &mut [T], mut pos: usize, is_less: &mut F) {
    loop {
        let mut child = 2 * pos + 1;
        if child >= heap.len() {
            break;
        }

        // Pick the greater of the two children under `is_less`
        if child + 1 < heap.len() && is_less(&heap[child], &heap[child + 1]) {
            child += 1;
        }

        if !is_less(&heap[pos], &heap[child]) {
            break;
        }

        heap.swap(pos, child);
        pos = child;
    }
}

/// Rearrange `heap` to satisfy the heap property under `is_less`
pub fn make_heap_by<T, F: FnMut(&T, &T) -> bool>(heap: &mut [T], mut is_less: F) {
    // Bottom up heapify, everything past len / 2 is a leaf
    for pos in (0..heap.len() / 2).rev() {
        sift_down_by(heap, pos, &mut is_less);
    }
}

/// Rearrange `heap` into a max-heap ordered by the natural order of `T`
pub fn make_heap<T: Ord>(heap: &mut [T]) {
    make_heap_by(heap, T::lt);
}

/// Swap the root with the last element of `heap` and restore the heap
/// property over `heap[..len - 1]`.
///
/// The popped root is parked in the last slot, outside the shrunken heap.
/// Does nothing when `heap` has fewer than two elements.
pub fn pop_heap_by<T, F: FnMut(&T, &T) -> bool>(heap: &mut [T], mut is_less: F) {
    if heap.len() <= 1 {
        return;
    }

    let last = heap.len() - 1;
    heap.swap(0, last);
    sift_down_by(&mut heap[..last], 0, &mut is_less);
}

/// [`pop_heap_by`] with the natural order of `T`
pub fn pop_heap<T: Ord>(heap: &mut [T]) {
    pop_heap_by(heap, T::lt);
}

/// Replace the root of the heap in `buf[..len - 1]` with `value` using a
/// single down heapify pass.
///
/// `buf[..len - 1]` must already satisfy the heap property under `is_less`;
/// the final slot is scratch space and its previous content is overwritten.
/// After the call the non-scratch region holds the same heap with its old
/// root evicted into the scratch slot and `value` merged in. Semantically
/// this equals popping the root and pushing `value`, at the cost of one
/// heapify pass instead of two.
///
/// Does nothing when `buf` holds no real element (`buf.len() <= 1`).
pub fn replace_heap_by<T, F: FnMut(&T, &T) -> bool>(buf: &mut [T], value: T, mut is_less: F) {
    if buf.len() <= 1 {
        return;
    }
    debug_assert!(
        is_heap_by(&buf[..buf.len() - 1], &mut is_less),
        "Replace target does not satisfy the heap property"
    );

    let scratch = buf.len() - 1;
    buf[scratch] = value;
    buf.swap(0, scratch);
    sift_down_by(&mut buf[..scratch], 0, &mut is_less);
}

/// [`replace_heap_by`] with the natural order of `T`
pub fn replace_heap<T: Ord>(buf: &mut [T], value: T) {
    replace_heap_by(buf, value, T::lt);
}

/// Like [`replace_heap_by`], but skip the replacement entirely when the heap
/// would come out unchanged.
///
/// Pushing `value` and popping immediately pops `value` itself whenever the
/// root is less than `value`, so in that case the buffer is left untouched
/// and no heap work happens. Otherwise this delegates to [`replace_heap_by`].
/// The same buffer layout and preconditions apply.
pub fn pushpop_heap_by<T, F: FnMut(&T, &T) -> bool>(buf: &mut [T], value: T, mut is_less: F) {
    if buf.len() <= 1 {
        return;
    }
    if is_less(&buf[0], &value) {
        return;
    }

    replace_heap_by(buf, value, is_less);
}

/// [`pushpop_heap_by`] with the natural order of `T`
pub fn pushpop_heap<T: Ord>(buf: &mut [T], value: T) {
    pushpop_heap_by(buf, value, T::lt);
}

/// Whether `heap` satisfies the heap property under `is_less`
pub fn is_heap_by<T, F: FnMut(&T, &T) -> bool>(heap: &[T], mut is_less: F) -> bool {
    (1..heap.len()).all(|child| !is_less(&heap[(child - 1) / 2], &heap[child]))
}

/// Whether `heap` is a max-heap under the natural order of `T`
pub fn is_heap<T: Ord>(heap: &[T]) -> bool {
    is_heap_by(heap, T::lt)
}
