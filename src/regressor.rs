use serde::{Deserialize, Serialize};

use crate::dataerror::{DataError, DataResult};
use crate::linreg::LinReg;
use crate::MIN_OBSERVATIONS;

/// Raw observations as supplied by the caller. Each entry is expected to
/// hold an x at index 0 and a y at index 1; shorter entries stay in the
/// raw data but contribute nothing to the derived vectors.
pub type Observations = Vec<Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub pcc: f64,
    pub x: f64,
    pub y: f64,
}

/// Ordinary least squares over one predictor. Holds a query point and a
/// dataset; `predict` fits the line and evaluates it at the query point,
/// reporting Pearson's correlation coefficient as fit quality.
#[derive(Debug, Clone, Default)]
pub struct Regressor {
    x: f64,
    data: Observations,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    count: usize,
}

impl Regressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(x: f64, data: Observations) -> Self {
        let mut reg = Self::new();
        reg.set(x, Some(data));
        reg
    }

    /// Replace the query point and, when given, the whole dataset.
    /// The derived vectors are rebuilt from scratch; entries missing an
    /// x or a y still count towards `count` so `predict` can flag them.
    pub fn set(&mut self, x: f64, data: Option<Observations>) {
        self.x = x;

        if let Some(data) = data {
            self.count = data.len();
            self.x_values.clear();
            self.y_values.clear();
            for entry in &data {
                if let [x, y, ..] = entry[..] {
                    self.x_values.push(x);
                    self.y_values.push(y);
                }
            }
            self.data = data;
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Raw dataset length, malformed entries included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Fit the line and predict y at the stored query point.
    pub fn predict(&self) -> DataResult<FitResult> {
        if self.count < MIN_OBSERVATIONS {
            return Err(DataError::TooFewObservations);
        }
        if self.count != self.x_values.len() {
            return Err(DataError::UnequalObservations);
        }

        // The rounded slope feeds every later step, intercept and pcc
        // included, so rounding error propagates on purpose.
        let b = round5(self.slope());
        let a = round5(self.intercept(b));
        let model = LinReg::from_val(a, b);
        let y = round5(model.calculate(self.x));

        Ok(FitResult { pcc: round5(self.pcc(b)), x: self.x, y })
    }

    /// Regression coefficient: population covariance over population
    /// variance of x. Zero variance in x yields a non-finite slope.
    fn slope(&self) -> f64 {
        let n = self.count as f64;
        let mean_x = sum(&self.x_values) / n;
        let mean_y = sum(&self.y_values) / n;
        (self.sum_xy() / n - mean_x * mean_y) / self.variance(&self.x_values)
    }

    /// Intercept such that the line passes through the center of mass
    /// of the data points.
    fn intercept(&self, b: f64) -> f64 {
        let n = self.count as f64;
        sum(&self.y_values) / n - b * (sum(&self.x_values) / n)
    }

    /// Pearson's correlation coefficient derived from the slope `b`.
    /// Zero variance on either axis propagates as a non-finite value.
    fn pcc(&self, b: f64) -> f64 {
        b * (self.variance(&self.x_values).sqrt() / self.variance(&self.y_values).sqrt())
    }

    /// Population variance of one axis, dividing by the raw observation
    /// count rather than the derived vector length.
    fn variance(&self, v: &[f64]) -> f64 {
        let n = self.count as f64;
        square_sum(v) / n - (sum(v) / n).powi(2)
    }

    fn sum_xy(&self) -> f64 {
        self.x_values.iter().zip(&self.y_values).map(|(xi, yi)| xi * yi).sum()
    }
}

fn sum(v: &[f64]) -> f64 {
    v.iter().sum()
}

fn square_sum(v: &[f64]) -> f64 {
    v.iter().map(|value| value.powi(2)).sum()
}

/// Round to 5 decimal places, halves away from zero.
fn round5(v: f64) -> f64 {
    (v * 100_000.0).round() / 100_000.0
}
