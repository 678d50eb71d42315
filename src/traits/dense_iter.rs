// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

#[cfg(feature = "arrow")]
use minarrow::Bitmask;

/// Per-lane validity of a physical buffer.
pub trait Validity {
    fn is_valid(&self, idx: usize) -> bool;
}

/// Validity for buffers without a null mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllValid;

impl Validity for AllValid {
    #[inline(always)]
    fn is_valid(&self, _idx: usize) -> bool {
        true
    }
}

#[cfg(feature = "arrow")]
impl Validity for Bitmask {
    #[inline(always)]
    fn is_valid(&self, idx: usize) -> bool {
        self.get(idx)
    }
}

/// Iterator over the non-null lanes of a slice, yielding `(physical index, value)`.
///
/// Lanes are visited in index order and lazily, so a consumer that stops early
/// never reads the remaining lanes.
pub struct DenseIter<'a, T, M: Validity + ?Sized = AllValid> {
    slice: &'a [T],
    idx: usize,
    mask: Option<&'a M>,
    len: usize,
}

impl<'a, T: Copy> DenseIter<'a, T, AllValid> {
    #[inline(always)]
    pub fn dense(slice: &'a [T]) -> Self {
        Self::new(slice, None)
    }
}

impl<'a, T: Copy, M: Validity + ?Sized> DenseIter<'a, T, M> {
    #[inline(always)]
    pub fn new(slice: &'a [T], mask: Option<&'a M>) -> Self {
        let len = slice.len();
        Self {
            slice,
            idx: 0,
            mask,
            len,
        }
    }
}

impl<'a, T: Copy, M: Validity + ?Sized> Iterator for DenseIter<'a, T, M> {
    type Item = (usize, T);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self.mask {
            None => {
                if self.idx >= self.len {
                    None
                } else {
                    let i = self.idx;
                    self.idx += 1;
                    Some((i, self.slice[i]))
                }
            }
            Some(m) => {
                while self.idx < self.len {
                    let i = self.idx;
                    self.idx += 1;
                    if m.is_valid(i) {
                        return Some((i, self.slice[i]));
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvenLanes;

    impl Validity for EvenLanes {
        fn is_valid(&self, idx: usize) -> bool {
            idx % 2 == 0
        }
    }

    #[test]
    fn dense_yields_every_lane_with_index() {
        let got: Vec<_> = DenseIter::dense(&[3.0, 4.0, 5.0]).collect();
        assert_eq!(got, vec![(0, 3.0), (1, 4.0), (2, 5.0)]);
    }

    #[test]
    fn masked_skips_invalid_lanes_but_keeps_physical_index() {
        let got: Vec<_> = DenseIter::new(&[10, 11, 12, 13, 14], Some(&EvenLanes)).collect();
        assert_eq!(got, vec![(0, 10), (2, 12), (4, 14)]);
    }

    #[test]
    fn empty_slice() {
        assert_eq!(DenseIter::dense(&[] as &[f64]).count(), 0);
    }
}
