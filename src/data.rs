use std::{fmt, marker::PhantomData};

use rand::{distr::Distribution, rngs::StdRng};

/// A uniform data distribution set
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

/// A gaussian data distribution set, rounded to integers so that values
/// repeat across lists
#[derive(Debug)]
pub struct GaussianData;

/// A trait for generalizing input data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl Data<$type> for UniformData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                rand::distr::Uniform::new(<$type>::MIN, <$type>::MAX)
                    .unwrap()
                    .sample_iter(rng)
                    .take(size)
                    .collect()
            }
        }
    }
}

// Implement the Data trait for the default integer types
impl_for_integers!(u8, u16, u32, u64, u128);

/// Standard deviation used by [`GaussianData`], narrow enough to produce
/// duplicate values
const GAUSSIAN_STD_DEV: f64 = 100_000.0;

impl Data<i64> for GaussianData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<i64> {
        rand_distr::Normal::new(0.0, GAUSSIAN_STD_DEV)
            .unwrap()
            .sample_iter(rng)
            .map(|value: f64| value.round() as i64)
            .take(size)
            .collect()
    }
}

/// Split `values` into `lists` individually sorted lists of roughly equal
/// length, padding with empty lists when there are not enough values
pub fn into_sorted_lists<T: Ord>(values: Vec<T>, lists: usize) -> Vec<Vec<T>> {
    assert!(lists > 0, "Need at least one list");

    let chunk_len = values.len().div_ceil(lists).max(1);
    let mut result: Vec<Vec<T>> = Vec::with_capacity(lists);

    let mut rest = values;
    while result.len() + 1 < lists && rest.len() > chunk_len {
        let tail = rest.split_off(chunk_len);
        let mut chunk = rest;
        rest = tail;

        chunk.sort();
        result.push(chunk);
    }
    rest.sort();
    result.push(rest);

    result.resize_with(lists, Vec::new);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng as _;

    #[test]
    fn sorted_lists_cover_all_values() {
        let mut rng = StdRng::seed_from_u64(0x7c39_514e_02ab_6d88);
        let values = <UniformData<u32> as Data<u32>>::initialize(1_000, &mut rng);
        let mut expected = values.clone();
        expected.sort();

        let lists = into_sorted_lists(values, 7);
        assert_eq!(lists.len(), 7);
        assert!(lists.iter().all(|list| list.is_sorted()));

        let mut all: Vec<u32> = lists.into_iter().flatten().collect();
        all.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn more_lists_than_values_pads_with_empties() {
        let lists = into_sorted_lists(vec![3_u32, 1], 5);
        assert_eq!(lists.len(), 5);
        assert_eq!(lists.iter().map(Vec::len).sum::<usize>(), 2);
        assert!(lists.iter().all(|list| list.is_sorted()));
    }

    #[test]
    fn gaussian_values_repeat() {
        let mut rng = StdRng::seed_from_u64(0x7c39_514e_02ab_6d88);
        let mut values = GaussianData::initialize(10_000, &mut rng);
        values.sort();
        values.dedup();
        assert!(values.len() < 10_000, "Expected duplicate values");
    }
}
