//! Fixed sample data shown by the report.

/// Byte capacity of the name buffer, terminator included.
pub const NAME_CAPACITY: usize = 20;

const NAME: &str = "Osama";

const _: () = assert!(NAME.len() < NAME_CAPACITY);

/// Values the report prints, with the scores it averages.
pub struct Sample {
    pub name: &'static str,

    /// Integer checked against 10 in the condition
    pub x: i32,

    /// Decimal checked against 10.0 in the condition
    pub y: f32,

    /// Single character
    pub c: char,

    pub scores: [i32; 5],
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            name: NAME,
            x: 42,
            y: 3.14,
            c: 'A',
            scores: [90, 85, 78, 92, 88],
        }
    }
}

impl Sample {
    /// Number of scores.
    pub const fn count(&self) -> usize {
        self.scores.len()
    }

    /// Whether `x` is greater than 10 and `y` is less than 10.
    pub fn is_condition_met(&self) -> bool {
        self.x > 10 && self.y < 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_ok() {
        assert_eq!(Sample::default().count(), 5);
    }

    #[test]
    fn name_fits_capacity_ok() {
        assert!(Sample::default().name.len() < NAME_CAPACITY);
    }

    #[test]
    fn condition_ok() {
        assert!(Sample::default().is_condition_met());
        assert!(!Sample { x: 5, ..Default::default() }.is_condition_met());
        assert!(!Sample { y: 15.0, ..Default::default() }.is_condition_met());
        assert!(!Sample { x: 10, ..Default::default() }.is_condition_met());
        assert!(!Sample { y: 10.0, ..Default::default() }.is_condition_met());
    }
}
