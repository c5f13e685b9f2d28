//! 數值工具：持有成本前綴和與溢位檢查

use lotsizing_core::{LotSizingError, Result};
use rust_decimal::Decimal;

/// 加法（溢位時回報錯誤而非截斷）
pub fn add(a: Decimal, b: Decimal, stage: &'static str, period: usize) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or(LotSizingError::NumericOverflow { stage, period })
}

/// 乘法（溢位時回報錯誤而非截斷）
pub fn mul(a: Decimal, b: Decimal, stage: &'static str, period: usize) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or(LotSizingError::NumericOverflow { stage, period })
}

/// 累積持有成本 H[0..=n]
///
/// H[0] = 0，H[k] = H[k-1] + h[k-1]。
/// 從第 `from` 期（0 起算）帶到第 `to` 期的單位持有成本為 H[to] - H[from]。
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingPrefix {
    cumulative: Vec<Decimal>,
}

impl HoldingPrefix {
    /// 由逐期費率建立前綴和
    pub fn new(rates: &[Decimal]) -> Result<Self> {
        let mut cumulative = Vec::with_capacity(rates.len() + 1);
        cumulative.push(Decimal::ZERO);

        let mut total = Decimal::ZERO;
        for (idx, &rate) in rates.iter().enumerate() {
            total = add(total, rate, "holding prefix", idx + 1)?;
            cumulative.push(total);
        }

        Ok(Self { cumulative })
    }

    /// 期數 n
    pub fn horizon(&self) -> usize {
        self.cumulative.len() - 1
    }

    /// H[k]
    pub fn at(&self, k: usize) -> Decimal {
        self.cumulative[k]
    }

    /// 單位庫存從第 `from` 期帶到第 `to` 期（皆 0 起算，from <= to）的持有成本
    pub fn carry(&self, from: usize, to: usize) -> Decimal {
        self.cumulative[to] - self.cumulative[from]
    }
}
