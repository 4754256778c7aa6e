//! Domain model for an employment record.

use serde::{Deserialize, Serialize};

/// Hours assumed in a working year; used when annualizing hourly pay.
pub const ANNUAL_WORK_HOURS: u64 = 2000;

/// How a job pays out: an hourly rate or a fixed yearly salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Compensation {
    Hourly(f64),
    Salary(u64),
}

/// An employment record. The title is fixed at construction; compensation is
/// mutated in place by raises and by [`Job::convert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    /// Income for the given hours, truncated to a whole unit. Salaried jobs
    /// pay the same no matter how many hours are worked.
    pub fn calculate_income(&self, hours: u64) -> u64 {
        match self.compensation {
            Compensation::Hourly(rate) => (rate * hours as f64) as u64,
            Compensation::Salary(amount) => amount,
        }
    }

    /// Raise compensation by a fraction of its current value (0.1 is +10%).
    pub fn raise_by_percent(&mut self, percent: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate * (1.0 + percent)),
            Compensation::Salary(amount) => {
                Compensation::Salary((amount as f64 * (1.0 + percent)) as u64)
            }
        };
    }

    /// Raise compensation by a flat amount. Negative amounts are permitted
    /// and lower pay; there is no floor beyond the unsigned salary type.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate + amount),
            Compensation::Salary(current) => {
                Compensation::Salary((current as f64 + amount) as u64)
            }
        };
    }

    /// Convert hourly pay to a salary at [`ANNUAL_WORK_HOURS`] hours per year.
    /// Already-salaried jobs are left untouched; the transition is
    /// one-directional.
    pub fn convert(&mut self) {
        if let Compensation::Hourly(rate) = self.compensation {
            self.compensation = Compensation::Salary((rate * ANNUAL_WORK_HOURS as f64) as u64);
        }
    }
}
