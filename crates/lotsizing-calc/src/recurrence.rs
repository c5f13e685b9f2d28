//! 前向遞迴
//!
//! 對 t = 1..n 求最小累積成本 C[t] 與達成最小值的來源期 S[t]。
//! 每個來源期 j 維護一個累計值 P(j, t)：
//! - P(t, t) = C[t-1] + K[t] + c[t]·d[t]（第 t 期新下單）
//! - P(j, t) = P(j, t-1) + M[j-1][t-1]·d[t]（延伸第 j 期訂單到第 t 期）
//! - P(0, t) = Σ r[k]·d[k]（僅失銷模型：從第 1 期起全部失銷）
//!
//! C[t] = min P(j, t)，平手時取最小的 j。

use lotsizing_core::{LotSizingError, LotSizingProblem, Result};
use rust_decimal::Decimal;

use crate::cost_table::{ensure_matches, MarginalCostTable};
use crate::numeric::{add, mul};

/// 遞迴輸出
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceOutput {
    /// C[0..=n]，C[0] = 0
    pub cumulative_cost: Vec<Decimal>,

    /// S[1..=n]（以 0 起算儲存），0 表示失銷
    pub last_source_period: Vec<usize>,
}

/// 前向遞迴引擎
pub struct RecurrenceEngine;

impl RecurrenceEngine {
    /// 執行前向遞迴（成本表須由同一問題建立）
    pub fn run(problem: &LotSizingProblem, table: &MarginalCostTable) -> Result<RecurrenceOutput> {
        problem.validate()?;
        ensure_matches(table, problem)?;

        let n = problem.horizon();
        let first_source = problem.model().first_source();

        let mut cumulative_cost = Vec::with_capacity(n + 1);
        cumulative_cost.push(Decimal::ZERO);
        let mut last_source_period = Vec::with_capacity(n);

        // running[j] = P(j, t)
        let mut running = vec![Decimal::ZERO; n + 1];

        for t in 1..=n {
            let demand = problem.demand[t - 1];

            for j in 1..t {
                let unit = table
                    .get(j - 1, t - 1)
                    .ok_or(LotSizingError::TableDimensionMismatch {
                        table: table.horizon(),
                        horizon: n,
                    })?;
                let extension = mul(unit, demand, "recurrence", t)?;
                running[j] = add(running[j], extension, "recurrence", t)?;
            }

            let variable = mul(problem.variable_cost(t - 1), demand, "recurrence", t)?;
            let own = add(
                cumulative_cost[t - 1],
                problem.fixed_ordering_cost[t - 1],
                "recurrence",
                t,
            )?;
            running[t] = add(own, variable, "recurrence", t)?;

            if let Some(revenue) = problem.unit_revenue(t - 1) {
                let lost = mul(revenue, demand, "recurrence", t)?;
                running[0] = add(running[0], lost, "recurrence", t)?;
            }

            let (source, cost) = Self::argmin(&running[..=t], first_source);
            tracing::trace!("第 {} 期：來源期 {}，累積成本 {}", t, source, cost);

            cumulative_cost.push(cost);
            last_source_period.push(source);
        }

        Ok(RecurrenceOutput {
            cumulative_cost,
            last_source_period,
        })
    }

    /// 從 `first` 起掃描候選，嚴格小於才替換，因此平手時保留最小索引
    fn argmin(candidates: &[Decimal], first: usize) -> (usize, Decimal) {
        let mut best = (first, candidates[first]);
        for (j, &cost) in candidates.iter().enumerate().skip(first + 1) {
            if cost < best.1 {
                best = (j, cost);
            }
        }
        best
    }
}
