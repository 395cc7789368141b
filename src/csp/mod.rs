pub mod constraint;
pub mod problem;

use crate::error::CspError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueDomain {
    pub low: i8,
    pub high: i8,
}

impl ValueDomain {
    pub const BINARY: ValueDomain = ValueDomain { low: 0, high: 1 };
    pub const SPIN: ValueDomain = ValueDomain { low: -1, high: 1 };

    pub fn validate(self) -> Result<(), CspError> {
        if self.low >= self.high {
            return Err(CspError::InvalidDomain {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn values(self) -> [i8; 2] {
        [self.low, self.high]
    }

    pub fn is_high(self, value: i8) -> bool {
        value == self.high
    }

    pub fn flip(self, value: i8) -> i8 {
        if value == self.high {
            self.low
        } else {
            self.high
        }
    }
}
