//! 批量主計算器

use lotsizing_core::{LotSizingProblem, SolverConfig};

use crate::cost_table::CostTableBuilder;
use crate::recurrence::RecurrenceEngine;
use crate::LotSizingSolution;

/// 批量計算器
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// 創建新的批量計算器
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// 目前配置
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 主計算入口
    ///
    /// 每次呼叫都建立新的成本表與累積成本，不保留任何狀態。
    pub fn solve(&self, problem: &LotSizingProblem) -> lotsizing_core::Result<LotSizingSolution> {
        let horizon = problem.horizon();
        let model = problem.model();
        tracing::info!("開始批量計算：{} 期，模型 {:?}", horizon, model);

        let start_time = std::time::Instant::now();

        // Step 1: 輸入驗證（任何計算之前）
        tracing::debug!("Step 1: 輸入驗證");
        self.config.validate()?;
        problem.validate()?;

        // Step 2: 邊際成本表
        tracing::debug!(
            "Step 2: 建立邊際成本表（策略 {:?}，並行 {}）",
            self.config.table_strategy,
            self.config.is_parallel_for(horizon)
        );
        let table = CostTableBuilder::build(problem, &self.config)?;
        tracing::debug!("成本表格數: {}", table.cell_count());

        // Step 3: 前向遞迴
        tracing::debug!("Step 3: 前向遞迴");
        let output = RecurrenceEngine::run(problem, &table)?;

        let solution = LotSizingSolution {
            model,
            cumulative_cost: output.cumulative_cost,
            last_source_period: output.last_source_period,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("批量計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("總成本: {}", solution.total_cost());

        Ok(solution)
    }
}

/// 以預設配置求解
pub fn solve(problem: &LotSizingProblem) -> lotsizing_core::Result<LotSizingSolution> {
    Solver::default().solve(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotsizing_core::{CostModel, LotSizingError, TableStrategy};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn d(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    fn wagner_whitin() -> LotSizingProblem {
        LotSizingProblem::classical(
            d(&[69, 29, 36, 61, 61, 26, 34, 67, 45, 67, 79, 56]),
            Decimal::ONE,
            d(&[85, 102, 102, 101, 98, 114, 105, 86, 119, 110, 98, 114]),
        )
    }

    #[rstest]
    #[case(SolverConfig::new())]
    #[case(SolverConfig::new().with_table_strategy(TableStrategy::Naive))]
    #[case(SolverConfig::new().with_parallel_threshold(1))]
    #[case(SolverConfig::new().sequential())]
    fn test_every_configuration_agrees(#[case] config: SolverConfig) {
        let solution = Solver::new(config).solve(&wagner_whitin()).unwrap();

        assert_eq!(solution.model, CostModel::Classical);
        assert_eq!(solution.horizon(), 12);
        assert_eq!(solution.total_cost(), Decimal::from(864));
        assert!(solution.calculation_time_ms.is_some());
    }

    #[test]
    fn test_validation_happens_before_computation() {
        let problem =
            LotSizingProblem::lost_sales(d(&[1, 2]), d(&[1]), d(&[1, 1]), d(&[1, 1]), d(&[1, 1]));

        let err = solve(&problem).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err,
            LotSizingError::LengthMismatch {
                field: "holding_rate",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let solver = Solver::new(SolverConfig::new().with_parallel_threshold(0));
        assert!(matches!(
            solver.solve(&wagner_whitin()),
            Err(LotSizingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_solver_does_not_mutate_input() {
        let problem = wagner_whitin();
        let before = problem.clone();
        let first = solve(&problem).unwrap();
        let second = solve(&problem).unwrap();

        assert_eq!(problem, before);
        assert_eq!(first.cumulative_cost, second.cumulative_cost);
        assert_eq!(first.last_source_period, second.last_source_period);
    }
}
