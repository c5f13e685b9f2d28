//! 補貨計劃模型（批量計算結果）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PeriodCalendar, Result};

/// 補貨訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentOrder {
    /// 下單期（1 起算）
    pub period: usize,

    /// 涵蓋至第幾期（含）
    pub covers_through: usize,

    /// 訂購數量（涵蓋期間內實際滿足的需求）
    pub quantity: Decimal,
}

impl ReplenishmentOrder {
    /// 創建新的補貨訂單
    pub fn new(period: usize, covers_through: usize, quantity: Decimal) -> Self {
        Self {
            period,
            covers_through,
            quantity,
        }
    }

    /// 檢查是否涵蓋某期
    pub fn covers(&self, period: usize) -> bool {
        (self.period..=self.covers_through).contains(&period)
    }

    /// 涵蓋期數
    pub fn span(&self) -> usize {
        self.covers_through + 1 - self.period
    }
}

/// 失銷記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostSale {
    /// 期別（1 起算）
    pub period: usize,

    /// 放棄的需求數量
    pub quantity: Decimal,
}

/// 帶日期的補貨訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedOrder {
    pub period: usize,
    pub order_date: NaiveDate,
    /// 涵蓋期間的最後一天
    pub covers_until: NaiveDate,
    pub quantity: Decimal,
}

/// 補貨計劃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentPlan {
    /// 補貨訂單（依下單期遞增）
    pub orders: Vec<ReplenishmentOrder>,

    /// 失銷記錄（依期別遞增）
    pub lost_sales: Vec<LostSale>,

    /// 計劃總成本
    pub total_cost: Decimal,
}

impl ReplenishmentPlan {
    /// 創建空的補貨計劃
    pub fn empty() -> Self {
        Self {
            orders: Vec::new(),
            lost_sales: Vec::new(),
            total_cost: Decimal::ZERO,
        }
    }

    /// 下單期列表
    pub fn order_periods(&self) -> Vec<usize> {
        self.orders.iter().map(|o| o.period).collect()
    }

    /// 總訂購量
    pub fn total_ordered(&self) -> Decimal {
        self.orders.iter().map(|o| o.quantity).sum()
    }

    /// 總失銷量
    pub fn total_lost(&self) -> Decimal {
        self.lost_sales.iter().map(|l| l.quantity).sum()
    }

    /// 查詢某期需求的來源下單期（失銷或未涵蓋回傳 None）
    pub fn source_of(&self, period: usize) -> Option<usize> {
        if self.lost_sales.iter().any(|l| l.period == period) {
            return None;
        }
        self.orders
            .iter()
            .find(|o| o.covers(period))
            .map(|o| o.period)
    }

    /// 依期別日曆為訂單標上日期
    pub fn dated_orders(&self, calendar: &PeriodCalendar) -> Result<Vec<DatedOrder>> {
        self.orders
            .iter()
            .map(|order| {
                Ok(DatedOrder {
                    period: order.period,
                    order_date: calendar.period_start(order.period)?,
                    covers_until: calendar.period_end(order.covers_through)?,
                    quantity: order.quantity,
                })
            })
            .collect()
    }
}
