extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::{SaturatingSub, Unsigned};

/// Unsigned tally that never drops below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign + SaturatingSub;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign + SaturatingSub,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn increment(&mut self) {
        self.increment_by(T::one());
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.decrement_by(T::one());
    }

    #[inline]
    pub fn increment_by(&mut self, count: T) {
        self.0 += count;
    }

    #[inline]
    pub fn decrement_by(&mut self, count: T) {
        self.0 = self.0.saturating_sub(&count);
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign + SaturatingSub,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
