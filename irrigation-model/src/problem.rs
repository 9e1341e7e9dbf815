use crate::assignment::Assignment;
use crate::county_map::CountyMap;
use crate::objectives::{evaluate, Objectives};
use crate::techniques::NUM_TECHNIQUES;
use anyhow::Result;
use irrigation_utils::pareto_frontier_indices;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// The optimization problem handed to an external multi-objective engine:
/// one integer variable per county over the technique id domain, two
/// objectives (water usage and cost), no constraints.
#[derive(Debug, Clone)]
pub struct TechniqueProblem {
    map: CountyMap,
}

impl TechniqueProblem {
    pub fn new(map: CountyMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &CountyMap {
        &self.map
    }

    pub fn num_variables(&self) -> usize {
        self.map.num_counties()
    }

    pub fn num_objectives(&self) -> usize {
        2
    }

    pub fn num_constraints(&self) -> usize {
        0
    }

    pub fn variable_domain(&self) -> RangeInclusive<u8> {
        0..=(NUM_TECHNIQUES as u8 - 1)
    }

    /// Evaluates one candidate. Pure with respect to the problem: safe to
    /// call concurrently for every individual of a population.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<Objectives> {
        evaluate(&self.map, assignment)
    }
}

/// Engine run parameters. The seed covers all of the engine's randomness;
/// the problem itself is deterministic.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct EngineConfig {
    pub population_size: usize,
    pub generations: usize,
    pub seed: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EvaluatedAssignment {
    pub assignment: Assignment,
    pub objectives: Objectives,
}

/// The external search procedure (NSGA-II or any other compliant
/// multi-objective metaheuristic). Implementations own population
/// initialization, selection, crossover, mutation, and termination, and
/// return the final generation's evaluated population.
pub trait OptimizationEngine {
    fn optimize(
        &mut self,
        problem: &TechniqueProblem,
        config: &EngineConfig,
    ) -> Result<Vec<EvaluatedAssignment>>;
}

/// Indices (ascending) of the population members not dominated in both
/// objectives by any other member.
pub fn pareto_efficient(population: &[EvaluatedAssignment]) -> Vec<usize> {
    let points: Vec<Vec<f64>> = population
        .iter()
        .map(|e| vec![e.objectives.water_usage, e.objectives.technique_cost])
        .collect();
    pareto_frontier_indices(&points)
}

/// Final result table: the Pareto-efficient rows of a population, sorted
/// ascending by technique cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<EvaluatedAssignment>,
}

impl ResultTable {
    pub fn from_population(population: &[EvaluatedAssignment]) -> Self {
        let mut rows: Vec<EvaluatedAssignment> = pareto_efficient(population)
            .into_iter()
            .map(|i| population[i].clone())
            .collect();
        rows.sort_by(|a, b| {
            a.objectives
                .technique_cost
                .total_cmp(&b.objectives.technique_cost)
        });
        Self { rows }
    }

    /// Delimited numeric text, one row per solution:
    /// `f_w<sep>f_c<sep>t_0<sep>...<sep>t_{n-1}`.
    pub fn to_delimited(&self, separator: &str) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let mut fields = vec![
                row.objectives.water_usage.to_string(),
                row.objectives.technique_cost.to_string(),
            ];
            fields.extend(
                row.assignment
                    .technique_ids
                    .iter()
                    .map(|id| id.to_string()),
            );
            out.push_str(&fields.join(separator));
            out.push('\n');
        }
        out
    }
}
