//! # Lot Sizing Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod plan;
pub mod problem;

// Re-export 主要類型
pub use calendar::PeriodCalendar;
pub use config::{CostModel, SolverConfig, TableStrategy};
pub use plan::{DatedOrder, LostSale, ReplenishmentOrder, ReplenishmentPlan};
pub use problem::{decimal_series, HoldingRate, LostSalesParams, LotSizingProblem};

use rust_decimal::Decimal;

/// 批量計算錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LotSizingError {
    #[error("序列長度不一致: {field} 長度為 {actual}，預期 {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("負值輸入: {field} 第 {period} 期為 {value}")]
    NegativeValue {
        field: &'static str,
        period: usize,
        value: Decimal,
    },

    #[error("非有限數值: {field} 第 {period} 期")]
    NonFiniteValue { field: &'static str, period: usize },

    #[error("成本表維度 {table} 與計劃期數 {horizon} 不符")]
    TableDimensionMismatch { table: usize, horizon: usize },

    #[error("成本表模型 {table:?} 與問題模型 {problem:?} 不符")]
    TableModelMismatch { table: CostModel, problem: CostModel },

    #[error("第 {period} 期的來源期 {source_period} 無效")]
    InvalidSourcePeriod { period: usize, source_period: usize },

    #[error("數值溢位: {stage} 第 {period} 期")]
    NumericOverflow { stage: &'static str, period: usize },

    #[error("計劃期數 {horizon} 超過窮舉上限 {limit}")]
    HorizonTooLarge { horizon: usize, limit: usize },

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("JSON 解析錯誤: {0}")]
    Parse(String),
}

impl LotSizingError {
    /// 是否屬於輸入驗證錯誤（在任何計算開始前回報）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::NegativeValue { .. }
                | Self::NonFiniteValue { .. }
                | Self::TableDimensionMismatch { .. }
                | Self::TableModelMismatch { .. }
                | Self::InvalidSourcePeriod { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LotSizingError>;
