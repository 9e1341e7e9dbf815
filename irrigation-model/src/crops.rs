use serde::{Deserialize, Serialize};

/// Current average irrigation efficiency; pre-scales every gallons-per-pound
/// constant below.
pub const CURRENT_AVERAGE_EFFICIENCY: f64 = 0.6285;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CropKind {
    Corn,
    Sorghum,
    Wheat,
    Cotton,
    Peanuts,
}

impl CropKind {
    /// Pounds per bushel of yield. Only meaningful for the bushel-yield
    /// crops; Cotton and Peanuts report their yield in pounds already.
    pub fn lbs_per_bushel(&self) -> Option<f64> {
        match self {
            CropKind::Corn => Some(56.0),
            CropKind::Sorghum => Some(50.0),
            CropKind::Wheat => Some(60.0),
            CropKind::Cotton | CropKind::Peanuts => None,
        }
    }

    /// Gallons of water per pound of crop, scaled by the current average
    /// efficiency.
    pub fn gallons_per_lb(&self) -> f64 {
        let raw = match self {
            CropKind::Corn => 73.4398,
            CropKind::Sorghum => 143.1813,
            CropKind::Wheat => 268.7951,
            CropKind::Cotton => 653.0333,
            CropKind::Peanuts => 127.8593,
        };
        raw * CURRENT_AVERAGE_EFFICIENCY
    }
}

/// One planting of a single crop within a county. `yield_amount` is in
/// bushels for Corn/Sorghum/Wheat, lbs per acre for Cotton, and total lbs
/// for Peanuts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CropPlanting {
    pub kind: CropKind,
    pub acres_planted: f64,
    pub yield_amount: f64,
}

impl CropPlanting {
    pub fn new(kind: CropKind, acres_planted: f64, yield_amount: f64) -> Self {
        Self {
            kind,
            acres_planted,
            yield_amount,
        }
    }

    /// Raw water usage in gallons, before any irrigation-technique
    /// efficiency adjustment. Linear in the yield/acreage inputs.
    pub fn water_usage(&self) -> f64 {
        let gallons_per_lb = self.kind.gallons_per_lb();
        match self.kind.lbs_per_bushel() {
            Some(lbs_per_bushel) => self.yield_amount * lbs_per_bushel * gallons_per_lb,
            // Cotton yields lbs per acre; Peanuts yield total lbs.
            None if self.kind == CropKind::Cotton => {
                self.acres_planted * self.yield_amount * gallons_per_lb
            }
            None => self.yield_amount * gallons_per_lb,
        }
    }
}
