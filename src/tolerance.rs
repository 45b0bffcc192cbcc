use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default tolerance used for every near-zero decision in the crate.
pub const EPS: f64 = 1e-6;

/// Three-way sign of a floating-point value, with values close to zero snapped to `Zero`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        sign as i8
    }
}

/// Numerical tolerance threaded through the intersection routines.
///
/// Most callers can use [`Tolerance::default`], which uses [`EPS`]. Test suites and
/// scenes with very large or very small coordinates may want a different value.
///
/// `eps` is always finite and non-negative, so a hit at `t > eps` is in front of the ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToleranceData")]
pub struct Tolerance {
    eps: f64,
}

#[derive(Deserialize)]
struct ToleranceData {
    #[serde(default = "default_eps")]
    eps: f64,
}

fn default_eps() -> f64 {
    EPS
}

impl TryFrom<ToleranceData> for Tolerance {
    type Error = ShapeError;

    fn try_from(data: ToleranceData) -> Result<Self, Self::Error> {
        Tolerance::new(data.eps)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl Tolerance {
    /// Rejects negative and non-finite values.
    pub fn new(eps: f64) -> Result<Self, ShapeError> {
        if !(eps.is_finite() && eps >= 0.0) {
            debug!(eps, "rejecting tolerance");
            return Err(ShapeError::InvalidTolerance(eps));
        }
        Ok(Self { eps })
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Classifies `value` as negative, zero or positive.
    ///
    /// Anything with an absolute value below `eps` counts as zero, so rounding noise
    /// in discriminants and dot products does not flip a hit into a miss or vice versa.
    /// NaN is never below `eps` and never negative, so it classifies as `Positive`.
    pub fn sign(&self, value: f64) -> Sign {
        if value.abs() < self.eps {
            Sign::Zero
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub fn is_zero(&self, value: f64) -> bool {
        self.sign(value) == Sign::Zero
    }
}

/// [`Tolerance::sign`] with the default [`EPS`].
pub fn classify_sign(value: f64) -> Sign {
    Tolerance::default().sign(value)
}
