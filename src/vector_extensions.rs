//! Extensions for one dimensional axis arrays

use std::ops::Sub;

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::{cast, Num, NumCast};

pub trait VectorExtensions<T> {
    /// get the monotonic property of the vector
    fn monotonic_prop(&self) -> Monotonic;

    /// Get the index of the next lower value inside the vector.
    /// This is not guaranteed to return the index of an exact match.
    ///
    /// This will never return the last index of the vector.
    /// when x is out of bounds it will either return `0` or `self.len() - 2`
    /// depending on which side it is out of bounds
    ///
    /// # Warning
    /// this method requires the [`monotonic_prop`](VectorExtensions::monotonic_prop) to be
    /// `Monotonic::Rising { strict: true }`
    /// otherwise the behaviour is undefined
    fn get_lower_index(&self, x: T) -> usize;
}

/// Describes the monotonic property of a vector
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Monotonic {
    Rising { strict: bool },
    Falling { strict: bool },
    NotMonotonic,
}

impl<S, T> VectorExtensions<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: Num + PartialOrd + NumCast + Copy + Sub<Output = T>,
{
    fn monotonic_prop(&self) -> Monotonic {
        use Monotonic::*;
        if self.len() <= 1 {
            return NotMonotonic;
        }

        let (mut rising, mut falling, mut flat) = (false, false, false);
        for pair in self.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            if left < right {
                rising = true;
            } else if left > right {
                falling = true;
            } else if left == right {
                flat = true;
            } else {
                // NaN
                return NotMonotonic;
            }
        }
        match (rising, falling) {
            (true, true) => NotMonotonic,
            (false, true) => Falling { strict: !flat },
            _ => Rising {
                strict: rising && !flat,
            },
        }
    }

    fn get_lower_index(&self, x: T) -> usize {
        let len = self.len();
        if len < 2 {
            return 0;
        }
        let first = self[0];
        let last = self[len - 1];
        if x <= first {
            return 0;
        }
        if x >= last {
            return len - 2;
        }

        // guess the index assuming the values are linearly spaced,
        // then fall back to bisection around the guess
        let guess = cast::<T, f64>((x - first) / (last - first))
            .and_then(|frac| cast::<f64, usize>(frac * (len - 1) as f64))
            .unwrap_or(0)
            .min(len - 2);
        if self[guess] <= x && x < self[guess + 1] {
            return guess;
        }

        let (mut low, mut high) = if self[guess] <= x {
            (guess, len - 1)
        } else {
            (0, guess)
        };
        // invariant: self[low] <= x < self[high]
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if self[mid] <= x {
                low = mid;
            } else {
                high = mid;
            }
        }
        low
    }
}
