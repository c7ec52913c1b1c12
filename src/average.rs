use tracing::trace;

use crate::prelude::*;

/// Running integer sum along with the number of pushed values.
#[derive(Default)]
pub struct Average {
    sum: i64,
    count: usize,
}

impl Average {
    pub fn push(&mut self, value: i32) {
        self.count += 1;
        self.sum += i64::from(value);
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Divides the integer sum by the count in floating point.
    /// Fails on an empty accumulator instead of producing `NaN`.
    pub fn average(&self) -> Result<f32> {
        ensure!(self.count != 0, "cannot average an empty sequence");
        Ok(self.sum as f32 / self.count as f32)
    }
}

impl Extend<i32> for Average {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for Average {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut average = Self::default();
        average.extend(iter);
        average
    }
}

/// Arithmetic mean of the values.
pub fn average(values: &[i32]) -> Result<f32> {
    let average: Average = values.iter().copied().collect();
    trace!(count = average.count(), "averaging…");
    average.average()
}
