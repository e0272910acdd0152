//! Parameter sweep generation.
//!
//! Used for step-size sweeps in the derivative experiment and for the input
//! grids of the cancellation tables.

use std::fmt;

use fl_core::Real;
use serde::Serialize;

use crate::error::{LabError, LabResult};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sweep {
    pub start: Real,
    pub end: Real,
    /// Number of points to generate, endpoints included
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl Sweep {
    pub fn new(
        start: Real,
        end: Real,
        num_points: usize,
        sweep_type: SweepType,
    ) -> LabResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(LabError::InvalidSweep {
                what: "bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(LabError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if start == end {
            return Err(LabError::InvalidSweep {
                what: "start and end values must be different",
            });
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(LabError::InvalidSweep {
                what: "logarithmic sweep needs positive bounds",
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Logarithmic sweep with one point per decade from `10^start_exp` to `10^end_exp`.
    pub fn decades(start_exp: i32, end_exp: i32) -> LabResult<Self> {
        let num_points = start_exp.abs_diff(end_exp) as usize + 1;
        Self::new(
            10f64.powi(start_exp),
            10f64.powi(end_exp),
            num_points,
            SweepType::Logarithmic,
        )
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        if self.num_points <= 1 {
            return vec![self.start];
        }
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<Real> {
        let last = self.num_points - 1;
        let delta = (self.end - self.start) / last as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[last] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<Real> {
        let last = self.num_points - 1;
        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / last as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| (log_start + i as Real * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[last] = self.end;
        points
    }
}

/// Powers of ten from `10^start_exp` to `10^end_exp`, one per decade.
pub fn decades(start_exp: i32, end_exp: i32) -> Vec<Real> {
    let step = if end_exp >= start_exp { 1 } else { -1 };
    let count = start_exp.abs_diff(end_exp) as i32 + 1;
    (0..count)
        .map(|i| 10f64.powi(start_exp + step * i))
        .collect()
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {:e} to {:e} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}
