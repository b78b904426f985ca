//! Filtered views over the animated entries of a flag snapshot.
//!
//! Animated (scripted) vertices or geometries are driven by the user rather
//! than by the solver. An [`AnimationFilter`] borrows the snapshot of animation
//! flags for the duration of one assembly pass and visits the flagged entries
//! in order, each exactly once.

use alloc::vec::Vec;
use core::ops::Range;

/// Error raised when the items visited through a filter do not match its snapshot.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The item slice and the flag snapshot have different lengths.
    #[error("expected {expected} items to match the animation flags, got {got}.")]
    LengthMismatch {
        /// The length of the flag snapshot.
        expected: usize,
        /// The length of the visited items.
        got: usize,
    },
    /// A geometry offset table is not a non-decreasing list ending at the item count.
    #[error("invalid offsets: {0:?} does not partition the items.")]
    InvalidOffsets(Range<usize>),
}

/// A read-only view over the animated entries of a flag snapshot.
///
/// The snapshot is borrowed, so it cannot be rebuilt while the filter is alive.
#[derive(Clone, Debug)]
pub struct AnimationFilter<'a> {
    flags: &'a [bool],
    animated: Vec<usize>,
}

impl<'a> AnimationFilter<'a> {
    /// Builds the filter of the entries flagged `true` in `flags`.
    pub fn new(flags: &'a [bool]) -> Self {
        let animated: Vec<usize> = flags
            .iter()
            .enumerate()
            .filter_map(|(i, flagged)| flagged.then_some(i))
            .collect();

        log::debug!(
            "Animation filter: {} animated entries out of {}.",
            animated.len(),
            flags.len()
        );

        Self { flags, animated }
    }

    /// The number of animated entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.animated.len()
    }

    /// Is no entry animated?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.animated.is_empty()
    }

    /// The length of the underlying flag snapshot.
    #[inline]
    pub fn snapshot_len(&self) -> usize {
        self.flags.len()
    }

    /// Is the `i`-th entry animated? Out-of-range entries are not.
    #[inline]
    pub fn is_animated(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    /// The indices of the animated entries, increasing.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.animated
    }

    /// The indices of the entries left to the solver, increasing.
    pub fn free_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, flagged)| (!flagged).then_some(i))
    }

    fn check_len(&self, got: usize) -> Result<(), FilterError> {
        if got == self.flags.len() {
            Ok(())
        } else {
            Err(FilterError::LengthMismatch {
                expected: self.flags.len(),
                got,
            })
        }
    }

    /// Applies `action` to each animated item, in order.
    pub fn for_each<T>(
        &self,
        items: &[T],
        mut action: impl FnMut(usize, &T),
    ) -> Result<(), FilterError> {
        self.check_len(items.len())?;

        for &i in &self.animated {
            action(i, &items[i]);
        }

        Ok(())
    }

    /// Applies `action` to each animated item, in order, with mutable access.
    pub fn for_each_mut<T>(
        &self,
        items: &mut [T],
        mut action: impl FnMut(usize, &mut T),
    ) -> Result<(), FilterError> {
        self.check_len(items.len())?;

        for &i in &self.animated {
            action(i, &mut items[i]);
        }

        Ok(())
    }

    /// Applies `action` to the sub-slice of each animated geometry.
    ///
    /// Here the flags are per geometry and `offsets` (of length
    /// `snapshot_len() + 1`) delimits the items of each geometry: geometry `i`
    /// owns `items[offsets[i]..offsets[i + 1]]`.
    pub fn for_each_range<T>(
        &self,
        offsets: &[usize],
        items: &mut [T],
        mut action: impl FnMut(usize, &mut [T]),
    ) -> Result<(), FilterError> {
        self.check_len(offsets.len().saturating_sub(1))?;

        if offsets.first().copied() != Some(0) || offsets.last().copied() != Some(items.len()) {
            return Err(FilterError::InvalidOffsets(0..offsets.len()));
        }

        if let Some(w) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(FilterError::InvalidOffsets(w..w + 2));
        }

        for &i in &self.animated {
            action(i, &mut items[offsets[i]..offsets[i + 1]]);
        }

        Ok(())
    }

    /// Applies `action` to each animated item in parallel.
    ///
    /// Each invocation gets exclusive access to its own item.
    #[cfg(feature = "parallel")]
    pub fn par_for_each_mut<T: Send>(
        &self,
        items: &mut [T],
        action: impl Fn(usize, &mut T) + Sync + Send,
    ) -> Result<(), FilterError> {
        use rayon::prelude::*;

        self.check_len(items.len())?;

        items
            .par_iter_mut()
            .enumerate()
            .filter(|(i, _)| self.flags[*i])
            .for_each(|(i, item)| action(i, item));

        Ok(())
    }

    /// Expands the filter to a per-DOF mask, `dofs_per_entry` DOFs per entry.
    pub fn dof_mask(&self, dofs_per_entry: usize) -> Vec<bool> {
        self.flags
            .iter()
            .flat_map(|flagged| core::iter::repeat(*flagged).take(dofs_per_entry))
            .collect()
    }
}
