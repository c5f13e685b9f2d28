//! # Lot Sizing
//!
//! 單一物料、有限期間的最小成本批量規劃（Wagner-Whitin 經典模型與立即失銷模型）
//!
//! ```
//! use lotsizing::{solve, LotSizingProblem};
//! use rust_decimal::Decimal;
//!
//! let problem = LotSizingProblem::classical(
//!     vec![Decimal::from(10), Decimal::from(10)],
//!     Decimal::ONE,
//!     vec![Decimal::from(100), Decimal::from(100)],
//! );
//! let solution = solve(&problem).unwrap();
//! assert_eq!(solution.total_cost(), Decimal::from(110));
//! assert_eq!(solution.last_source_period, vec![1, 1]);
//! ```

pub use lotsizing_calc::{
    solve, CostTableBuilder, HoldingPrefix, LotSizingSolution, MarginalCostTable,
    PolicyExtractor, RecurrenceEngine, RecurrenceOutput, Solver,
};
pub use lotsizing_core::{
    CostModel, DatedOrder, HoldingRate, LostSale, LostSalesParams, LotSizingError,
    LotSizingProblem, PeriodCalendar, ReplenishmentOrder, ReplenishmentPlan, Result,
    SolverConfig, TableStrategy,
};
pub use lotsizing_optimizer::{ExhaustiveOptimizer, OptimizationResult, PlanEvaluator};
