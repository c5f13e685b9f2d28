//! 期別日曆
//!
//! 將第 1..n 期對應到實際日期，用於為補貨計劃標上下單日。

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{LotSizingError, Result};

/// 期別日曆（每期固定天數）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCalendar {
    /// 第 1 期的起始日
    pub start_date: NaiveDate,

    /// 每期天數
    pub period_days: u32,
}

impl PeriodCalendar {
    /// 創建新的期別日曆
    pub fn new(start_date: NaiveDate, period_days: u32) -> Result<Self> {
        if period_days == 0 {
            return Err(LotSizingError::InvalidConfig(
                "period_days 必須大於 0".to_string(),
            ));
        }
        Ok(Self {
            start_date,
            period_days,
        })
    }

    /// 週期日曆（每期 7 天）
    pub fn weekly(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            period_days: 7,
        }
    }

    /// 第 `period` 期（1 起算）的起始日
    pub fn period_start(&self, period: usize) -> Result<NaiveDate> {
        let offset = period
            .checked_sub(1)
            .ok_or_else(|| LotSizingError::InvalidConfig("期別必須從 1 開始".to_string()))?;
        let days = (offset as u64)
            .checked_mul(u64::from(self.period_days))
            .ok_or(LotSizingError::NumericOverflow {
                stage: "calendar",
                period,
            })?;

        self.start_date
            .checked_add_days(Days::new(days))
            .ok_or(LotSizingError::NumericOverflow {
                stage: "calendar",
                period,
            })
    }

    /// 第 `period` 期的最後一天
    pub fn period_end(&self, period: usize) -> Result<NaiveDate> {
        let start = self.period_start(period)?;
        start
            .checked_add_days(Days::new(u64::from(self.period_days).saturating_sub(1)))
            .ok_or(LotSizingError::NumericOverflow {
                stage: "calendar",
                period,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_calendar() {
        let calendar = PeriodCalendar::weekly(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());

        assert_eq!(
            calendar.period_start(1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
        );
        assert_eq!(
            calendar.period_start(3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 17).unwrap()
        );
        assert_eq!(
            calendar.period_end(3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 23).unwrap()
        );
    }

    #[test]
    fn test_invalid_calendar() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(PeriodCalendar::new(start, 0).is_err());

        let calendar = PeriodCalendar::new(start, 1).unwrap();
        assert!(calendar.period_start(0).is_err());
    }
}
