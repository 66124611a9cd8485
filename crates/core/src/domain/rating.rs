use super::DomainError;

/// A single 1–5 answer to a feedback question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    /// Forces an arbitrary client-supplied number into the 1–5 scale,
    /// rounding to the nearest whole rating.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }

        let clamped = value.clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Self(clamped.round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into a five-slot histogram.
    pub fn bucket(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}
