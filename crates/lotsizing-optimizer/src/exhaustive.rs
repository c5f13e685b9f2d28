//! 窮舉最佳化
//!
//! 列舉所有 2ⁿ 種下單期集合並逐一計價，作為動態規劃的對照基準，僅適用於小規模問題。

use lotsizing_core::{CostModel, LotSizingError, LotSizingProblem, Result};
use rust_decimal::Decimal;

use crate::evaluation::PlanEvaluator;
use crate::OptimizationResult;

/// 窮舉上限期數
pub const MAX_EXHAUSTIVE_HORIZON: usize = 20;

/// 窮舉最佳化器
pub struct ExhaustiveOptimizer;

impl ExhaustiveOptimizer {
    /// 求全域最小成本與對應的下單期集合
    ///
    /// 經典模型沒有期初庫存，集合必須包含第 1 期。
    /// 成本相同時保留位元遮罩較小（較早列舉）的集合。
    pub fn optimize(problem: &LotSizingProblem) -> Result<OptimizationResult> {
        problem.validate()?;

        let n = problem.horizon();
        if n > MAX_EXHAUSTIVE_HORIZON {
            return Err(LotSizingError::HorizonTooLarge {
                horizon: n,
                limit: MAX_EXHAUSTIVE_HORIZON,
            });
        }

        let evaluator = PlanEvaluator::new(problem)?;
        let requires_first = problem.model() == CostModel::Classical && n > 0;

        let mut best: Option<(Decimal, Vec<usize>)> = None;
        let mut evaluated = 0usize;

        for mask in 0u32..(1u32 << n) {
            if requires_first && mask & 1 == 0 {
                continue;
            }

            let order_periods: Vec<usize> = (0..n)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| bit + 1)
                .collect();
            let cost = evaluator.cost_of_order_set(&order_periods)?;
            evaluated += 1;

            let improves = best
                .as_ref()
                .map(|(best_cost, _)| cost < *best_cost)
                .unwrap_or(true);
            if improves {
                best = Some((cost, order_periods));
            }
        }

        tracing::debug!("窮舉完成：{} 期，評估 {} 種集合", n, evaluated);

        let (total_cost, order_periods) = best.unwrap_or((Decimal::ZERO, Vec::new()));
        Ok(OptimizationResult {
            total_cost,
            order_periods,
            evaluated,
        })
    }
}
