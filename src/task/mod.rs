//! Task records at the optimizer-service boundary.
//!
//! The backend service describes each run as a task: a problem, an algorithm
//! with its parameters, and (once finished) a result. This module carries the
//! closed variant types for those records — exhaustiveness-checked instead of
//! the free-form string discriminators the wire format suggests — plus the
//! human-readable description line shown above each plot.
//!
//! Wire tags match the service spellings (`"OneMax"`, `"OnePlusOneEA"`,
//! `"ACO"`, ...), so these types deserialize the service's JSON directly.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The optimization problem a task runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Problem {
    /// Maximize the number of set bits.
    OneMax {
        /// Genotype length n.
        bitstring_size: usize,
    },
    /// Maximize the length of the leading run of set bits.
    LeadingOnes {
        /// Genotype length n.
        bitstring_size: usize,
    },
    /// Euclidean traveling salesperson instance.
    #[serde(rename = "TSP")]
    Tsp {
        /// Display name of the instance, if it has one (e.g. "berlin52").
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tsp_name: Option<String>,
    },
}

impl Problem {
    /// Wire/display name of the problem kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::OneMax { .. } => "OneMax",
            Self::LeadingOnes { .. } => "LeadingOnes",
            Self::Tsp { .. } => "TSP",
        }
    }

    /// Whether the problem operates on bitstring genotypes.
    #[must_use]
    pub const fn is_bitstring(&self) -> bool {
        matches!(self, Self::OneMax { .. } | Self::LeadingOnes { .. })
    }
}

/// Cooling schedule for simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CoolingSchedule {
    /// Fixed temperature for the whole run.
    Static {
        /// The constant temperature.
        temperature: f64,
    },
    /// Temperature decays by a constant factor each iteration.
    Exponential {
        /// Per-iteration cooling factor c.
        cooling_rate: f64,
    },
}

/// The algorithm a task runs, with its rendered parameters.
///
/// Optimizer-internal knobs the service accepts but never renders (MMAS
/// `p_best`, `q`, nearest-neighbour lists, pheromone update strategy) stay on
/// the service side of the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Algorithm {
    /// The (1+1) evolutionary algorithm.
    OnePlusOneEA,
    /// Simulated annealing with a cooling schedule.
    SimulatedAnnealing {
        /// How the temperature evolves.
        cooling_schedule: CoolingSchedule,
    },
    /// Ant colony optimization.
    #[serde(rename = "ACO")]
    Aco {
        /// Pheromone influence exponent α.
        alpha: f64,
        /// Heuristic influence exponent β (only meaningful for TSP).
        beta: f64,
        /// Pheromone evaporation factor ρ.
        evap_factor: f64,
        /// Colony size.
        ants: u32,
    },
}

impl Algorithm {
    /// Short display name used in plot legends and descriptions.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::OnePlusOneEA => "(1+1) EA",
            Self::SimulatedAnnealing { .. } => "SA",
            Self::Aco { .. } => "ACO",
        }
    }
}

/// One optimization run as described by the backend service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Service-assigned identifier.
    pub id: String,
    /// The problem being solved.
    pub problem: Problem,
    /// The algorithm solving it.
    pub algorithm: Algorithm,
}

/// A finished run: the task plus its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// The task that produced this result.
    pub task: Task,
    /// Final fitness value reached.
    pub fitness: f64,
    /// Iterations consumed.
    pub iterations: u64,
    /// Final solution in its serialized form: a bitstring for OneMax and
    /// LeadingOnes, a comma-separated permutation for TSP.
    pub solution: String,
}

impl Task {
    /// One-line human-readable description of the task, e.g.
    /// `SA (c = 0.99) - OneMax (n = 100)` or
    /// `ACO (α=1 β=2 ρ=0.5 ants=20) - TSP (berlin52)`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut result = String::from(self.algorithm.display_name());

        match &self.algorithm {
            Algorithm::OnePlusOneEA => {}
            Algorithm::SimulatedAnnealing { cooling_schedule } => match cooling_schedule {
                CoolingSchedule::Static { temperature } => {
                    let _ = write!(result, " (Fixed T = {temperature})");
                }
                CoolingSchedule::Exponential { cooling_rate } => {
                    let _ = write!(result, " (c = {cooling_rate})");
                }
            },
            Algorithm::Aco {
                alpha,
                beta,
                evap_factor,
                ants,
            } => {
                // β only drives the distance heuristic, which exists for TSP.
                if matches!(self.problem, Problem::Tsp { .. }) {
                    let _ = write!(
                        result,
                        " (α={alpha} β={beta} ρ={evap_factor} ants={ants})"
                    );
                } else {
                    let _ = write!(result, " (α={alpha} ρ={evap_factor} ants={ants})");
                }
            }
        }

        result.push_str(" - ");
        result.push_str(self.problem.kind_name());

        match &self.problem {
            Problem::OneMax { bitstring_size } | Problem::LeadingOnes { bitstring_size } => {
                let _ = write!(result, " (n = {bitstring_size})");
            }
            Problem::Tsp { tsp_name } => {
                if let Some(name) = tsp_name {
                    let _ = write!(result, " ({name})");
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_one_plus_one_onemax() {
        let task = Task {
            id: "t1".to_string(),
            problem: Problem::OneMax {
                bitstring_size: 100,
            },
            algorithm: Algorithm::OnePlusOneEA,
        };
        assert_eq!(task.describe(), "(1+1) EA - OneMax (n = 100)");
    }

    #[test]
    fn test_describe_sa_static_schedule() {
        let task = Task {
            id: "t2".to_string(),
            problem: Problem::LeadingOnes { bitstring_size: 64 },
            algorithm: Algorithm::SimulatedAnnealing {
                cooling_schedule: CoolingSchedule::Static { temperature: 1.5 },
            },
        };
        assert_eq!(task.describe(), "SA (Fixed T = 1.5) - LeadingOnes (n = 64)");
    }

    #[test]
    fn test_describe_sa_exponential_schedule() {
        let task = Task {
            id: "t3".to_string(),
            problem: Problem::OneMax { bitstring_size: 32 },
            algorithm: Algorithm::SimulatedAnnealing {
                cooling_schedule: CoolingSchedule::Exponential { cooling_rate: 0.99 },
            },
        };
        assert_eq!(task.describe(), "SA (c = 0.99) - OneMax (n = 32)");
    }

    #[test]
    fn test_describe_aco_tsp_includes_beta() {
        let task = Task {
            id: "t4".to_string(),
            problem: Problem::Tsp {
                tsp_name: Some("berlin52".to_string()),
            },
            algorithm: Algorithm::Aco {
                alpha: 1.0,
                beta: 2.0,
                evap_factor: 0.5,
                ants: 20,
            },
        };
        assert_eq!(
            task.describe(),
            "ACO (α=1 β=2 ρ=0.5 ants=20) - TSP (berlin52)"
        );
    }

    #[test]
    fn test_describe_aco_bitstring_omits_beta() {
        let task = Task {
            id: "t5".to_string(),
            problem: Problem::OneMax {
                bitstring_size: 100,
            },
            algorithm: Algorithm::Aco {
                alpha: 1.0,
                beta: 2.0,
                evap_factor: 0.5,
                ants: 10,
            },
        };
        assert_eq!(
            task.describe(),
            "ACO (α=1 ρ=0.5 ants=10) - OneMax (n = 100)"
        );
    }

    #[test]
    fn test_describe_unnamed_tsp_has_no_parenthetical() {
        let task = Task {
            id: "t6".to_string(),
            problem: Problem::Tsp { tsp_name: None },
            algorithm: Algorithm::OnePlusOneEA,
        };
        assert_eq!(task.describe(), "(1+1) EA - TSP");
    }

    #[test]
    fn test_wire_tags_round_trip() {
        let json = r#"{
            "id": "a1b2",
            "problem": { "type": "TSP", "tsp_name": "bier127" },
            "algorithm": { "type": "ACO", "alpha": 1.0, "beta": 2.0, "evap_factor": 0.5, "ants": 25 }
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.algorithm.display_name(), "ACO");
        assert_eq!(task.problem.kind_name(), "TSP");

        let back = serde_json::to_string(&task).unwrap();
        assert!(back.contains(r#""type":"ACO""#));
        assert!(back.contains(r#""type":"TSP""#));
    }

    #[test]
    fn test_problem_is_bitstring() {
        assert!(Problem::OneMax { bitstring_size: 8 }.is_bitstring());
        assert!(Problem::LeadingOnes { bitstring_size: 8 }.is_bitstring());
        assert!(!Problem::Tsp { tsp_name: None }.is_bitstring());
    }
}
