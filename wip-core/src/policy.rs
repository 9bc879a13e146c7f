use serde::{Deserialize, Serialize};

use crate::error::{Result, WipError};
use crate::model::WipJob;

pub const DEFAULT_WARNING_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Fraction of the fee target at which a job starts to warn; e.g. 0.8
    /// means a job at 80% of its target (and not yet over it) is flagged.
    pub warning_ratio: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_ratio: DEFAULT_WARNING_RATIO,
        }
    }
}

impl Thresholds {
    /// Rejects ratios outside `(0, 1]`, NaN included.
    pub fn new(warning_ratio: f64) -> Result<Self> {
        if !(warning_ratio > 0.0 && warning_ratio <= 1.0) {
            return Err(WipError::Config(format!(
                "warning ratio must be within (0, 1], got {warning_ratio}"
            )));
        }
        Ok(Self { warning_ratio })
    }

    /// `None` means the default ratio.
    pub fn from_option(warning_ratio: Option<f64>) -> Result<Self> {
        warning_ratio.map(Self::new).unwrap_or_else(|| Ok(Self::default()))
    }

    /// Ready to invoice: a positive fee target that the WIP total has reached.
    pub fn target_met(&self, job: &WipJob) -> bool {
        job.fee_target > 0.0 && job.wip_amount >= job.fee_target
    }

    pub fn is_warning(&self, job: &WipJob) -> bool {
        job.fee_target > 0.0
            && job.wip_amount >= job.fee_target * self.warning_ratio
            && job.wip_amount < job.fee_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobStatus;

    fn job(wip: f64, target: f64) -> WipJob {
        WipJob {
            id: "j".into(),
            name: "j".into(),
            status: JobStatus::Active,
            hours_logged: 0.0,
            wip_amount: wip,
            open_balance_total: 0.0,
            fee_target: target,
            open_balances: None,
        }
    }

    #[test]
    fn target_met_needs_positive_target() {
        let t = Thresholds::default();
        assert!(t.target_met(&job(100.0, 100.0)));
        assert!(t.target_met(&job(150.0, 100.0)));
        assert!(!t.target_met(&job(99.0, 100.0)));
        assert!(!t.target_met(&job(10.0, 0.0)));
    }

    #[test]
    fn warning_band_is_below_target() {
        let t = Thresholds::default();
        assert!(t.is_warning(&job(80.0, 100.0)));
        assert!(t.is_warning(&job(99.9, 100.0)));
        assert!(!t.is_warning(&job(79.0, 100.0)));
        assert!(!t.is_warning(&job(100.0, 100.0)));
        assert!(!t.is_warning(&job(50.0, 0.0)));
    }

    #[test]
    fn constructor_rejects_out_of_range_ratios() {
        for bad in [-5.0, 0.0, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(Thresholds::new(bad), Err(WipError::Config(_))),
                "ratio {bad}"
            );
        }
        assert_eq!(Thresholds::new(1.0).unwrap().warning_ratio, 1.0);
        assert_eq!(Thresholds::from_option(None).unwrap(), Thresholds::default());
        assert!(Thresholds::from_option(Some(-0.1)).is_err());
    }

    #[test]
    fn custom_ratio() {
        let t = Thresholds::new(0.5).unwrap();
        assert!(t.is_warning(&job(50.0, 100.0)));
    }
}
