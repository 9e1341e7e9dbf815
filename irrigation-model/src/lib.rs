pub mod assignment;
pub mod county_map;
pub mod crops;
pub mod objectives;
pub mod problem;
pub mod techniques;

pub use assignment::Assignment;
pub use county_map::{County, CountyMap};
pub use crops::{CropKind, CropPlanting, CURRENT_AVERAGE_EFFICIENCY};
pub use objectives::{connection_factor, evaluate, Objectives};
pub use problem::{
    pareto_efficient, EngineConfig, EvaluatedAssignment, OptimizationEngine, ResultTable,
    TechniqueProblem,
};
pub use techniques::Technique;
