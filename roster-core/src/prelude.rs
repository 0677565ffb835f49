//! This module reimports commonly used types.

pub use crate::models::problem::{
    Activity, CriterionShape, CriterionSource, Driver, DriverKind, ExternalDriverType, RulesConfig, SalaryRateBlock,
    SalarySettings, SatisfactionCriterion, TimeRange, TravelCompensation, TravelMatrix,
};
pub use crate::models::solution::{RunState, Solution, StateDelta};
pub use crate::models::{DriverInfo, ExternalTypeInfo, PenaltyInfo, Problem, Stats, TotalInfo};

pub use crate::operations::{
    AssignOperation, Feasibility, Infeasibility, Operation, OperationKind, SwapOperation, ToggleHotelOperation,
};

pub use crate::solver::{Solver, SolverBuilder, SolverResult, TelemetryMode};
pub use crate::solver::{create_builder_from_config, read_config};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Quota, Random};
