//! 補貨計劃回溯
//!
//! 從 S[n] 往回走：來源期 s 的訂單涵蓋 s..=t，接著從 t = s-1 繼續；
//! s = 0 表示第 1..=t 期全部失銷。

use lotsizing_core::{
    LostSale, LotSizingError, LotSizingProblem, ReplenishmentOrder, ReplenishmentPlan, Result,
};
use rust_decimal::Decimal;

use crate::numeric::{add, HoldingPrefix};

/// 補貨計劃回溯器
pub struct PolicyExtractor;

impl PolicyExtractor {
    /// 由累積成本與來源期序列重建補貨計劃
    pub fn extract(
        problem: &LotSizingProblem,
        cumulative_cost: &[Decimal],
        last_source_period: &[usize],
    ) -> Result<ReplenishmentPlan> {
        problem.validate()?;

        let n = problem.horizon();
        if last_source_period.len() != n {
            return Err(LotSizingError::LengthMismatch {
                field: "last_source_period",
                expected: n,
                actual: last_source_period.len(),
            });
        }
        if cumulative_cost.len() != n + 1 {
            return Err(LotSizingError::LengthMismatch {
                field: "cumulative_cost",
                expected: n + 1,
                actual: cumulative_cost.len(),
            });
        }

        let prefix = HoldingPrefix::new(&problem.holding_rates())?;
        let first_source = problem.model().first_source();

        let mut orders = Vec::new();
        let mut lost_sales = Vec::new();
        let mut t = n;

        while t > 0 {
            let source = last_source_period[t - 1];
            if source > t || source < first_source {
                return Err(LotSizingError::InvalidSourcePeriod {
                    period: t,
                    source_period: source,
                });
            }

            if source == 0 {
                for period in 1..=t {
                    Self::record_lost(&mut lost_sales, period, problem.demand[period - 1]);
                }
                break;
            }

            // 下單期本身一定生產
            let mut quantity = problem.demand[source - 1];
            for period in source + 1..=t {
                let demand = problem.demand[period - 1];
                if Self::is_served(problem, &prefix, source, period)? {
                    quantity = add(quantity, demand, "policy", period)?;
                } else {
                    Self::record_lost(&mut lost_sales, period, demand);
                }
            }

            orders.push(ReplenishmentOrder::new(source, t, quantity));
            t = source - 1;
        }

        orders.reverse();
        lost_sales.sort_by_key(|l| l.period);

        Ok(ReplenishmentPlan {
            orders,
            lost_sales,
            total_cost: cumulative_cost[n],
        })
    }

    /// 第 `period` 期需求是否由第 `source` 期訂單滿足（皆 1 起算）
    ///
    /// 生產持有成本不高於單位收入時生產；經典模型一律滿足。
    fn is_served(
        problem: &LotSizingProblem,
        prefix: &HoldingPrefix,
        source: usize,
        period: usize,
    ) -> Result<bool> {
        match problem.unit_revenue(period - 1) {
            None => Ok(true),
            Some(revenue) => {
                let produce = add(
                    problem.variable_cost(source - 1),
                    prefix.carry(source - 1, period - 1),
                    "policy",
                    period,
                )?;
                Ok(produce <= revenue)
            }
        }
    }

    fn record_lost(lost_sales: &mut Vec<LostSale>, period: usize, quantity: Decimal) {
        if quantity > Decimal::ZERO {
            lost_sales.push(LostSale { period, quantity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_table::CostTableBuilder;
    use crate::recurrence::RecurrenceEngine;

    fn d(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    fn plan_for(problem: &LotSizingProblem) -> ReplenishmentPlan {
        let table = CostTableBuilder::build_prefix_sum(problem, false).unwrap();
        let output = RecurrenceEngine::run(problem, &table).unwrap();
        PolicyExtractor::extract(problem, &output.cumulative_cost, &output.last_source_period)
            .unwrap()
    }

    #[test]
    fn test_wagner_whitin_plan() {
        let problem = LotSizingProblem::classical(
            d(&[69, 29, 36, 61, 61, 26, 34, 67, 45, 67, 79, 56]),
            Decimal::ONE,
            d(&[85, 102, 102, 101, 98, 114, 105, 86, 119, 110, 98, 114]),
        );
        let plan = plan_for(&problem);

        // S[4] = 3：第 3 期下單涵蓋第 3、4 期
        assert_eq!(plan.order_periods(), vec![1, 3, 5, 8, 10, 11]);
        assert_eq!(plan.orders[0], ReplenishmentOrder::new(1, 2, Decimal::from(98)));
        assert_eq!(plan.orders[1], ReplenishmentOrder::new(3, 4, Decimal::from(97)));
        assert_eq!(plan.orders[2], ReplenishmentOrder::new(5, 7, Decimal::from(121)));
        assert_eq!(plan.orders[5], ReplenishmentOrder::new(11, 12, Decimal::from(135)));
        assert_eq!(plan.total_ordered(), Decimal::from(630));
        assert!(plan.lost_sales.is_empty());
        assert_eq!(plan.total_cost, Decimal::from(864));
    }

    #[test]
    fn test_lost_sales_plan() {
        let problem = LotSizingProblem::lost_sales(
            d(&[3000, 11750, 2000, 4000]),
            d(&[3, 3, 3, 3]),
            d(&[10, 10, 10, 10]),
            d(&[25000, 25000, 25000, 25000]),
            d(&[15, 21, 12, 18]),
        );
        let plan = plan_for(&problem);

        // 第 2 期生產 11750 + 4000；第 1、3 期失銷
        assert_eq!(
            plan.orders,
            vec![ReplenishmentOrder::new(2, 4, Decimal::from(15750))]
        );
        assert_eq!(
            plan.lost_sales,
            vec![
                LostSale {
                    period: 1,
                    quantity: Decimal::from(3000),
                },
                LostSale {
                    period: 3,
                    quantity: Decimal::from(2000),
                },
            ]
        );
        assert_eq!(plan.total_cost, Decimal::from(275500));
    }

    #[test]
    fn test_empty_horizon_plan() {
        let problem = LotSizingProblem::classical(Vec::new(), Decimal::ONE, Vec::new());
        let plan = PolicyExtractor::extract(&problem, &[Decimal::ZERO], &[]).unwrap();
        assert_eq!(plan, ReplenishmentPlan::empty());
    }

    #[test]
    fn test_invalid_sources_rejected() {
        let problem = LotSizingProblem::classical(d(&[1, 1]), Decimal::ONE, d(&[1, 1]));
        let costs = d(&[0, 1, 2]);

        assert_eq!(
            PolicyExtractor::extract(&problem, &costs, &[1, 0]),
            Err(LotSizingError::InvalidSourcePeriod {
                period: 2,
                source_period: 0,
            })
        );
        assert!(PolicyExtractor::extract(&problem, &costs, &[1, 3]).is_err());
        assert!(matches!(
            PolicyExtractor::extract(&problem, &costs, &[1]),
            Err(LotSizingError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_short_holding_rate_rejected() {
        let problem = LotSizingProblem::classical(d(&[1, 2, 3]), d(&[1]), d(&[1, 1, 1]));

        assert_eq!(
            PolicyExtractor::extract(&problem, &d(&[0, 1, 2, 3]), &[1, 1, 1]),
            Err(LotSizingError::LengthMismatch {
                field: "holding_rate",
                expected: 3,
                actual: 1,
            })
        );
    }
}
