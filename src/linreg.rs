use std::fmt;

/// Fitted line y = intercept + slope * x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {} + {}x", self.intercept, self.slope)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }

    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
