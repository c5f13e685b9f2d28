//! 計劃成本評估
//!
//! 直接依輸入參數計算補貨集合或補貨計劃的總成本，不經過動態規劃。

use lotsizing_calc::numeric::{add, mul};
use lotsizing_calc::HoldingPrefix;
use lotsizing_core::{LotSizingError, LotSizingProblem, ReplenishmentPlan, Result};
use rust_decimal::Decimal;

/// 計劃成本評估器
pub struct PlanEvaluator<'a> {
    problem: &'a LotSizingProblem,
    prefix: HoldingPrefix,
}

impl<'a> PlanEvaluator<'a> {
    /// 創建評估器
    pub fn new(problem: &'a LotSizingProblem) -> Result<Self> {
        problem.validate()?;
        Ok(Self {
            problem,
            prefix: HoldingPrefix::new(&problem.holding_rates())?,
        })
    }

    /// 第 `source` 期下單、滿足第 `period` 期一單位需求的生產持有成本（皆 1 起算）
    fn produce_cost(&self, source: usize, period: usize) -> Result<Decimal> {
        add(
            self.problem.variable_cost(source - 1),
            self.prefix.carry(source - 1, period - 1),
            "evaluation",
            period,
        )
    }

    /// 補貨集合的總成本
    ///
    /// 每期需求由最近一次（含當期）下單供應；下單期本身一定生產，
    /// 其餘期別在失銷模型下取生產持有與失銷的較小者。
    /// 第一次下單之前的需求全部失銷（經典模型則不允許）。
    pub fn cost_of_order_set(&self, order_periods: &[usize]) -> Result<Decimal> {
        let n = self.problem.horizon();
        let mut is_order = vec![false; n + 1];
        for &period in order_periods {
            if period == 0 || period > n {
                return Err(LotSizingError::InvalidSourcePeriod {
                    period,
                    source_period: period,
                });
            }
            is_order[period] = true;
        }

        let mut total = Decimal::ZERO;
        let mut source: Option<usize> = None;

        for period in 1..=n {
            let demand = self.problem.demand[period - 1];
            let revenue = self.problem.unit_revenue(period - 1);

            let cost = if is_order[period] {
                source = Some(period);
                let variable = mul(
                    self.problem.variable_cost(period - 1),
                    demand,
                    "evaluation",
                    period,
                )?;
                add(self.problem.fixed_ordering_cost[period - 1], variable, "evaluation", period)?
            } else {
                let unit = match (source, revenue) {
                    (Some(s), Some(r)) => self.produce_cost(s, period)?.min(r),
                    (Some(s), None) => self.produce_cost(s, period)?,
                    (None, Some(r)) => r,
                    (None, None) => {
                        return Err(LotSizingError::InvalidSourcePeriod {
                            period,
                            source_period: 0,
                        })
                    }
                };
                mul(unit, demand, "evaluation", period)?
            };

            total = add(total, cost, "evaluation", period)?;
        }

        Ok(total)
    }

    /// 補貨計劃的總成本（依計劃所列的涵蓋範圍與失銷逐期計價）
    pub fn cost_of_plan(&self, plan: &ReplenishmentPlan) -> Result<Decimal> {
        let n = self.problem.horizon();
        let mut total = Decimal::ZERO;

        for period in 1..=n {
            let demand = self.problem.demand[period - 1];

            let cost = if let Some(lost) = plan.lost_sales.iter().find(|l| l.period == period) {
                let revenue = self.problem.unit_revenue(period - 1).ok_or(
                    LotSizingError::InvalidSourcePeriod {
                        period,
                        source_period: 0,
                    },
                )?;
                mul(revenue, lost.quantity, "evaluation", period)?
            } else if let Some(order) = plan.orders.iter().find(|o| o.covers(period)) {
                mul(self.produce_cost(order.period, period)?, demand, "evaluation", period)?
            } else if demand.is_zero() {
                Decimal::ZERO
            } else {
                return Err(LotSizingError::InvalidSourcePeriod {
                    period,
                    source_period: 0,
                });
            };

            total = add(total, cost, "evaluation", period)?;
        }

        for order in &plan.orders {
            if order.period == 0 || order.period > n {
                return Err(LotSizingError::InvalidSourcePeriod {
                    period: order.covers_through,
                    source_period: order.period,
                });
            }
            total = add(
                total,
                self.problem.fixed_ordering_cost[order.period - 1],
                "evaluation",
                order.period,
            )?;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotsizing_core::{LostSale, ReplenishmentOrder};

    fn d(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    fn lost_sales_problem() -> LotSizingProblem {
        LotSizingProblem::lost_sales(
            d(&[3000, 11750, 2000, 4000]),
            d(&[3, 3, 3, 3]),
            d(&[10, 10, 10, 10]),
            d(&[25000, 25000, 25000, 25000]),
            d(&[15, 21, 12, 18]),
        )
    }

    #[test]
    fn test_order_set_cost() {
        let problem = lost_sales_problem();
        let evaluator = PlanEvaluator::new(&problem).unwrap();

        assert_eq!(evaluator.cost_of_order_set(&[2]).unwrap(), Decimal::from(275500));
        // 不下單：全部失銷
        assert_eq!(
            evaluator.cost_of_order_set(&[]).unwrap(),
            Decimal::from(3000 * 15 + 11750 * 21 + 2000 * 12 + 4000 * 18)
        );
    }

    #[test]
    fn test_plan_cost() {
        let problem = lost_sales_problem();
        let evaluator = PlanEvaluator::new(&problem).unwrap();
        let plan = ReplenishmentPlan {
            orders: vec![ReplenishmentOrder::new(2, 4, Decimal::from(15750))],
            lost_sales: vec![
                LostSale {
                    period: 1,
                    quantity: Decimal::from(3000),
                },
                LostSale {
                    period: 3,
                    quantity: Decimal::from(2000),
                },
            ],
            total_cost: Decimal::from(275500),
        };

        assert_eq!(evaluator.cost_of_plan(&plan).unwrap(), Decimal::from(275500));
    }

    #[test]
    fn test_short_revenue_rejected() {
        let problem = LotSizingProblem::lost_sales(
            d(&[1, 2, 3]),
            d(&[1, 1, 1]),
            d(&[1, 1, 1]),
            d(&[1, 1, 1]),
            d(&[1]),
        );

        assert!(matches!(
            PlanEvaluator::new(&problem),
            Err(LotSizingError::LengthMismatch {
                field: "unit_revenue",
                expected: 3,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_classical_requires_initial_order() {
        let problem = LotSizingProblem::classical(d(&[5, 5]), Decimal::ONE, d(&[10, 10]));
        let evaluator = PlanEvaluator::new(&problem).unwrap();

        assert_eq!(evaluator.cost_of_order_set(&[1]).unwrap(), Decimal::from(15));
        assert_eq!(evaluator.cost_of_order_set(&[1, 2]).unwrap(), Decimal::from(20));
        assert!(evaluator.cost_of_order_set(&[2]).is_err());
        assert!(evaluator.cost_of_order_set(&[3]).is_err());
    }

    #[test]
    fn test_uncovered_plan_rejected() {
        let problem = LotSizingProblem::classical(d(&[5, 5]), Decimal::ONE, d(&[10, 10]));
        let evaluator = PlanEvaluator::new(&problem).unwrap();
        let plan = ReplenishmentPlan {
            orders: vec![ReplenishmentOrder::new(1, 1, Decimal::from(5))],
            lost_sales: Vec::new(),
            total_cost: Decimal::ZERO,
        };

        assert!(evaluator.cost_of_plan(&plan).is_err());
    }
}
