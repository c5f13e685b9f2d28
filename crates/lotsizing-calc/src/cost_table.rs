//! 邊際成本表
//!
//! M[j][t]（0 ≤ j < t < n，皆 0 起算）為第 j 期下單、用來滿足第 t 期一單位需求的成本：
//! - 經典模型：H[t] - H[j]
//! - 失銷模型：min(r[t], c[j] + H[t] - H[j])
//!
//! 不含固定訂購成本與先前累積成本。

use lotsizing_core::{
    CostModel, LotSizingError, LotSizingProblem, Result, SolverConfig, TableStrategy,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::numeric::{add, HoldingPrefix};

/// 上三角邊際成本表
#[derive(Debug, Clone, PartialEq)]
pub struct MarginalCostTable {
    model: CostModel,
    horizon: usize,
    /// rows[j][t - j - 1] = M[j][t]
    rows: Vec<Vec<Decimal>>,
}

impl MarginalCostTable {
    /// 成本模型
    pub fn model(&self) -> CostModel {
        self.model
    }

    /// 期數 n
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// M[source][demand]；僅在 source < demand < n 時有定義
    pub fn get(&self, source: usize, demand: usize) -> Option<Decimal> {
        if source >= demand {
            return None;
        }
        self.rows
            .get(source)
            .and_then(|row| row.get(demand - source - 1))
            .copied()
    }

    /// 第 `source` 期下單時，後續各期的邊際成本
    pub fn row(&self, source: usize) -> &[Decimal] {
        self.rows.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 已定義的格數 n(n-1)/2
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// 邊際成本表建構器
pub struct CostTableBuilder;

impl CostTableBuilder {
    /// 依配置建表
    pub fn build(problem: &LotSizingProblem, config: &SolverConfig) -> Result<MarginalCostTable> {
        match config.table_strategy {
            TableStrategy::PrefixSum => {
                Self::build_prefix_sum(problem, config.is_parallel_for(problem.horizon()))
            }
            TableStrategy::Naive => Self::build_naive(problem),
        }
    }

    /// 前綴和建表：O(n) 前綴 + 每格 O(1)
    pub fn build_prefix_sum(
        problem: &LotSizingProblem,
        parallel: bool,
    ) -> Result<MarginalCostTable> {
        problem.validate()?;

        let n = problem.horizon();
        let prefix = HoldingPrefix::new(&problem.holding_rates())?;

        let build_row = |source: usize| -> Result<Vec<Decimal>> {
            (source + 1..n)
                .map(|demand| Self::cell(problem, source, demand, prefix.carry(source, demand)))
                .collect()
        };

        let rows = if parallel {
            tracing::debug!("並行建立邊際成本表：{} 列", n);
            (0..n).into_par_iter().map(build_row).collect::<Result<Vec<_>>>()?
        } else {
            (0..n).map(build_row).collect::<Result<Vec<_>>>()?
        };

        Ok(MarginalCostTable {
            model: problem.model(),
            horizon: n,
            rows,
        })
    }

    /// 參考建表：每格逐期累加持有費率（O(n³)）
    pub fn build_naive(problem: &LotSizingProblem) -> Result<MarginalCostTable> {
        problem.validate()?;

        let n = problem.horizon();
        let mut rows = Vec::with_capacity(n);

        for source in 0..n {
            let mut row = Vec::with_capacity(n - source - 1);
            for demand in source + 1..n {
                let mut carry = Decimal::ZERO;
                for period in source..demand {
                    carry = add(
                        carry,
                        problem.holding_rate.rate(period),
                        "naive table",
                        demand + 1,
                    )?;
                }
                row.push(Self::cell(problem, source, demand, carry)?);
            }
            rows.push(row);
        }

        Ok(MarginalCostTable {
            model: problem.model(),
            horizon: n,
            rows,
        })
    }

    /// 單格成本：經典模型為持有成本，失銷模型取失銷與生產持有的較小者
    fn cell(
        problem: &LotSizingProblem,
        source: usize,
        demand: usize,
        carry: Decimal,
    ) -> Result<Decimal> {
        match problem.unit_revenue(demand) {
            None => Ok(carry),
            Some(revenue) => {
                let produce = add(
                    problem.variable_cost(source),
                    carry,
                    "marginal table",
                    demand + 1,
                )?;
                Ok(revenue.min(produce))
            }
        }
    }
}

/// 檢查成本表是否對應到該問題
pub fn ensure_matches(table: &MarginalCostTable, problem: &LotSizingProblem) -> Result<()> {
    if table.horizon() != problem.horizon() {
        return Err(LotSizingError::TableDimensionMismatch {
            table: table.horizon(),
            horizon: problem.horizon(),
        });
    }
    if table.model() != problem.model() {
        return Err(LotSizingError::TableModelMismatch {
            table: table.model(),
            problem: problem.model(),
        });
    }
    Ok(())
}
