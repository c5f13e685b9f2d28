//! # Lot Sizing Calculation Engine
//!
//! 核心批量計算引擎：邊際成本表、前向遞迴、補貨計劃回溯

pub mod cost_table;
pub mod numeric;
pub mod policy;
pub mod recurrence;
pub mod solver;

// Re-export 主要類型
pub use cost_table::{CostTableBuilder, MarginalCostTable};
pub use numeric::HoldingPrefix;
pub use policy::PolicyExtractor;
pub use recurrence::{RecurrenceEngine, RecurrenceOutput};
pub use solver::{solve, Solver};

use lotsizing_core::{CostModel, LotSizingProblem, ReplenishmentPlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 批量計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSizingSolution {
    /// 成本模型
    pub model: CostModel,

    /// 累積最小成本 C[0..=n]，C[0] = 0
    pub cumulative_cost: Vec<Decimal>,

    /// 各期最後補貨來源期 S[1..=n]（0 表示失銷）
    pub last_source_period: Vec<usize>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl LotSizingSolution {
    /// 計劃期數 n
    pub fn horizon(&self) -> usize {
        self.last_source_period.len()
    }

    /// 全期最小總成本 C[n]
    pub fn total_cost(&self) -> Decimal {
        self.cumulative_cost
            .last()
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 回溯補貨計劃
    pub fn extract_plan(
        &self,
        problem: &LotSizingProblem,
    ) -> lotsizing_core::Result<ReplenishmentPlan> {
        PolicyExtractor::extract(problem, &self.cumulative_cost, &self.last_source_period)
    }
}
