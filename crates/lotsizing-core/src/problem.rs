//! 批量問題輸入模型
//!
//! 所有序列皆以第 1 期起算，內部以 0 為起始索引儲存。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CostModel, LotSizingError, Result};

/// 單位持有成本率
///
/// 第 k 期的費率代表把一單位庫存從第 k 期帶到第 k+1 期的成本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingRate {
    /// 全期統一費率
    Uniform(Decimal),
    /// 逐期費率
    PerPeriod(Vec<Decimal>),
}

impl HoldingRate {
    /// 展開為逐期費率
    pub fn expand(&self, horizon: usize) -> Vec<Decimal> {
        match self {
            HoldingRate::Uniform(rate) => vec![*rate; horizon],
            HoldingRate::PerPeriod(rates) => rates.clone(),
        }
    }

    /// 取得第 `index` 期（0 起算）的費率
    pub fn rate(&self, index: usize) -> Decimal {
        match self {
            HoldingRate::Uniform(rate) => *rate,
            HoldingRate::PerPeriod(rates) => rates.get(index).copied().unwrap_or(Decimal::ZERO),
        }
    }
}

impl From<Decimal> for HoldingRate {
    fn from(rate: Decimal) -> Self {
        HoldingRate::Uniform(rate)
    }
}

impl From<Vec<Decimal>> for HoldingRate {
    fn from(rates: Vec<Decimal>) -> Self {
        HoldingRate::PerPeriod(rates)
    }
}

/// 立即失銷模型的額外參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostSalesParams {
    /// 單位變動訂購（生產）成本
    pub variable_ordering_cost: Vec<Decimal>,

    /// 未滿足需求每單位損失的收入
    pub unit_revenue: Vec<Decimal>,
}

/// 單一物料、有限期間的批量問題
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSizingProblem {
    /// 各期需求
    pub demand: Vec<Decimal>,

    /// 持有成本率
    pub holding_rate: HoldingRate,

    /// 各期固定訂購成本
    pub fixed_ordering_cost: Vec<Decimal>,

    /// 失銷參數（None 表示經典模型，需求必須全部滿足）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_sales: Option<LostSalesParams>,
}

impl LotSizingProblem {
    /// 創建經典（Wagner-Whitin）問題
    pub fn classical(
        demand: Vec<Decimal>,
        holding_rate: impl Into<HoldingRate>,
        fixed_ordering_cost: Vec<Decimal>,
    ) -> Self {
        Self {
            demand,
            holding_rate: holding_rate.into(),
            fixed_ordering_cost,
            lost_sales: None,
        }
    }

    /// 創建允許立即失銷的問題
    pub fn lost_sales(
        demand: Vec<Decimal>,
        holding_rate: impl Into<HoldingRate>,
        variable_ordering_cost: Vec<Decimal>,
        fixed_ordering_cost: Vec<Decimal>,
        unit_revenue: Vec<Decimal>,
    ) -> Self {
        Self {
            demand,
            holding_rate: holding_rate.into(),
            fixed_ordering_cost,
            lost_sales: Some(LostSalesParams {
                variable_ordering_cost,
                unit_revenue,
            }),
        }
    }

    /// 以浮點數輸入創建經典問題（拒絕 NaN / ∞）
    pub fn classical_f64(
        demand: &[f64],
        holding_rate: f64,
        fixed_ordering_cost: &[f64],
    ) -> Result<Self> {
        let rate = decimal_series("holding_rate", &[holding_rate])?;
        Ok(Self::classical(
            decimal_series("demand", demand)?,
            HoldingRate::Uniform(rate[0]),
            decimal_series("fixed_ordering_cost", fixed_ordering_cost)?,
        ))
    }

    /// 以浮點數輸入創建失銷問題（拒絕 NaN / ∞）
    pub fn lost_sales_f64(
        demand: &[f64],
        holding_rate: &[f64],
        variable_ordering_cost: &[f64],
        fixed_ordering_cost: &[f64],
        unit_revenue: &[f64],
    ) -> Result<Self> {
        Ok(Self::lost_sales(
            decimal_series("demand", demand)?,
            decimal_series("holding_rate", holding_rate)?,
            decimal_series("variable_ordering_cost", variable_ordering_cost)?,
            decimal_series("fixed_ordering_cost", fixed_ordering_cost)?,
            decimal_series("unit_revenue", unit_revenue)?,
        ))
    }

    /// 從 JSON 讀取問題
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LotSizingError::Parse(e.to_string()))
    }

    /// 計劃期數 n
    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// 成本模型
    pub fn model(&self) -> CostModel {
        if self.lost_sales.is_some() {
            CostModel::LostSales
        } else {
            CostModel::Classical
        }
    }

    /// 逐期持有成本率
    pub fn holding_rates(&self) -> Vec<Decimal> {
        self.holding_rate.expand(self.horizon())
    }

    /// 第 `index` 期（0 起算）的單位變動訂購成本；經典模型為零
    pub fn variable_cost(&self, index: usize) -> Decimal {
        self.lost_sales
            .as_ref()
            .and_then(|p| p.variable_ordering_cost.get(index).copied())
            .unwrap_or(Decimal::ZERO)
    }

    /// 第 `index` 期（0 起算）的單位收入；經典模型沒有失銷選項
    pub fn unit_revenue(&self, index: usize) -> Option<Decimal> {
        self.lost_sales
            .as_ref()
            .and_then(|p| p.unit_revenue.get(index).copied())
    }

    /// 驗證輸入：長度一致、數值非負
    pub fn validate(&self) -> Result<()> {
        let n = self.horizon();

        if let HoldingRate::PerPeriod(rates) = &self.holding_rate {
            check_length("holding_rate", rates, n)?;
        }
        check_length("fixed_ordering_cost", &self.fixed_ordering_cost, n)?;
        if let Some(params) = &self.lost_sales {
            check_length("variable_ordering_cost", &params.variable_ordering_cost, n)?;
            check_length("unit_revenue", &params.unit_revenue, n)?;
        }

        check_non_negative("demand", &self.demand)?;
        match &self.holding_rate {
            HoldingRate::Uniform(rate) => {
                // 第 0 期表示全期統一值
                if rate.is_sign_negative() && !rate.is_zero() {
                    return Err(LotSizingError::NegativeValue {
                        field: "holding_rate",
                        period: 0,
                        value: *rate,
                    });
                }
            }
            HoldingRate::PerPeriod(rates) => check_non_negative("holding_rate", rates)?,
        }
        check_non_negative("fixed_ordering_cost", &self.fixed_ordering_cost)?;
        if let Some(params) = &self.lost_sales {
            check_non_negative("variable_ordering_cost", &params.variable_ordering_cost)?;
            check_non_negative("unit_revenue", &params.unit_revenue)?;
        }

        Ok(())
    }
}

/// 將浮點序列轉為 Decimal，NaN 與 ∞ 視為驗證錯誤
pub fn decimal_series(field: &'static str, values: &[f64]) -> Result<Vec<Decimal>> {
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            if !value.is_finite() {
                return Err(LotSizingError::NonFiniteValue {
                    field,
                    period: idx + 1,
                });
            }
            Decimal::try_from(value).map_err(|_| LotSizingError::NumericOverflow {
                stage: field,
                period: idx + 1,
            })
        })
        .collect()
}

fn check_length(field: &'static str, values: &[Decimal], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(LotSizingError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, values: &[Decimal]) -> Result<()> {
    match values
        .iter()
        .position(|v| v.is_sign_negative() && !v.is_zero())
    {
        Some(idx) => Err(LotSizingError::NegativeValue {
            field,
            period: idx + 1,
            value: values[idx],
        }),
        None => Ok(()),
    }
}
