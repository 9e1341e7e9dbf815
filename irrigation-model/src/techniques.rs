use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Technique {
    CenterPivot,
    Sprinkler,
    Drip,
    Furrow,
}

pub const NUM_TECHNIQUES: usize = 4;

// Furrow efficiency curve coefficients, fitted against field data. The
// curve has a removable singularity at theta = FURROW_C; see
// `efficiency_factor`.
const FURROW_A: f64 = 2.92541;
const FURROW_B: f64 = 2.26544;
const FURROW_C: f64 = -0.557759;

impl Technique {
    /// All techniques in id order.
    pub const ALL: [Technique; NUM_TECHNIQUES] = [
        Technique::CenterPivot,
        Technique::Sprinkler,
        Technique::Drip,
        Technique::Furrow,
    ];

    /// Validates a raw technique id from an assignment vector. Ids outside
    /// 0..=3 are an input error, never clamped.
    pub fn from_id(id: u8) -> Result<Technique> {
        match id {
            0 => Ok(Technique::CenterPivot),
            1 => Ok(Technique::Sprinkler),
            2 => Ok(Technique::Drip),
            3 => Ok(Technique::Furrow),
            _ => Err(anyhow!(
                "Invalid technique id {} (valid ids are 0..={})",
                id,
                NUM_TECHNIQUES - 1
            )),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Technique::CenterPivot => 0,
            Technique::Sprinkler => 1,
            Technique::Drip => 2,
            Technique::Furrow => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Technique::CenterPivot => "Center Pivot Irrigation",
            Technique::Sprinkler => "Sprinkler Irrigation",
            Technique::Drip => "Drip Irrigation",
            Technique::Furrow => "Furrow Irrigation",
        }
    }

    /// Implementation and maintenance cost in USD per acre.
    pub fn cost_per_acre(&self) -> f64 {
        match self {
            Technique::CenterPivot => 17.0,
            Technique::Sprinkler => 23.31,
            Technique::Drip => 38.44519536,
            Technique::Furrow => 8.0,
        }
    }

    /// Dimensionless efficiency factor for a county's terrain gradient
    /// angle (degrees). Raw water demand is divided by this factor, so a
    /// higher factor means less water wasted.
    ///
    /// CenterPivot and Sprinkler are trigonometric in the angle (converted
    /// to radians); Drip is flat; Furrow evaluates its fitted curve on the
    /// raw degree value. At theta = FURROW_C the Furrow denominator is
    /// zero; the cubic term vanishes faster, so the curve extends
    /// continuously to its 0.25 offset there.
    pub fn efficiency_factor(&self, gradient_angle: f64) -> f64 {
        match self {
            Technique::CenterPivot => 0.6479 * (4.0 * gradient_angle).to_radians().cos(),
            Technique::Sprinkler => 0.75 * gradient_angle.to_radians().cos(),
            Technique::Drip => 0.9,
            Technique::Furrow => {
                let t = gradient_angle - FURROW_C;
                if t == 0.0 {
                    return 0.25;
                }
                (FURROW_A * t.powi(3)) / ((FURROW_B * t).exp() - 1.0) + 0.25
            }
        }
    }
}
