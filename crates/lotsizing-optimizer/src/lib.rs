//! # Lot Sizing Optimizer
//!
//! 對照用最佳化模組（窮舉列舉、計劃成本評估）

pub mod evaluation;
pub mod exhaustive;

// Re-export 主要類型
pub use evaluation::PlanEvaluator;
pub use exhaustive::{ExhaustiveOptimizer, MAX_EXHAUSTIVE_HORIZON};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 最佳化結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// 最小總成本
    pub total_cost: Decimal,

    /// 達成最小成本的下單期（1 起算，遞增）
    pub order_periods: Vec<usize>,

    /// 評估過的集合數
    pub evaluated: usize,
}
