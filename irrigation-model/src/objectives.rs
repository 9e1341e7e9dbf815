use crate::assignment::Assignment;
use crate::county_map::CountyMap;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// The two objective values minimized by the external engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Objectives {
    /// f_w: total efficiency-adjusted water usage in gallons.
    pub water_usage: f64,
    /// f_c: total implementation cost in USD, scaled by the connectivity
    /// factor.
    pub technique_cost: f64,
}

/// Logistic penalty on deployment fragmentation: `n` is the total number of
/// connected components across all four techniques. Monotone non-decreasing
/// in `n` and bounded in the open interval (1, 2); many small clusters cost
/// more to maintain than a few consolidated ones.
pub fn connection_factor(num_components: usize) -> f64 {
    1.0 / (1.0 + (-(num_components as f64 - 24.5) / 5.0).exp()) + 1.0
}

fn validate(map: &CountyMap, assignment: &Assignment) -> Result<()> {
    if assignment.len() != map.num_counties() {
        return Err(anyhow!(
            "Assignment has {} entries but the map has {} counties",
            assignment.len(),
            map.num_counties()
        ));
    }
    for county in 0..assignment.len() {
        assignment.technique(county)?;
    }
    Ok(())
}

/// f_w: every planting's raw water usage divided by the efficiency factor
/// of its county's assigned technique at the county's gradient angle.
pub fn water_usage(map: &CountyMap, assignment: &Assignment) -> Result<f64> {
    let mut total = 0.0;
    for (i, county) in map.counties().iter().enumerate() {
        let technique = assignment.technique(i)?;
        let efficiency = technique.efficiency_factor(county.gradient_angle);
        for planting in &county.plantings {
            total += planting.water_usage() / efficiency;
        }
    }
    Ok(total)
}

/// f_c before the connectivity scaling: per-county cost per acre times total
/// acres planted, summed, then multiplied by the connection factor for the
/// supplied component count.
pub fn technique_cost(
    map: &CountyMap,
    assignment: &Assignment,
    num_components: usize,
) -> Result<f64> {
    let mut total = 0.0;
    for (i, county) in map.counties().iter().enumerate() {
        let technique = assignment.technique(i)?;
        total += technique.cost_per_acre() * county.total_acres();
    }
    Ok(total * connection_factor(num_components))
}

/// Evaluates one candidate assignment against the static map data. Pure:
/// identical inputs always produce bit-for-bit identical objectives, and
/// nothing is cached between calls, so a whole population can be evaluated
/// concurrently from a shared `&CountyMap`.
pub fn evaluate(map: &CountyMap, assignment: &Assignment) -> Result<Objectives> {
    validate(map, assignment)?;
    let num_components = map.total_components(assignment);
    Ok(Objectives {
        water_usage: water_usage(map, assignment)?,
        technique_cost: technique_cost(map, assignment, num_components)?,
    })
}
