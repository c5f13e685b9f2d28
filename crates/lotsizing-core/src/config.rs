//! 求解器配置模型

use serde::{Deserialize, Serialize};

use crate::{LotSizingError, Result};

/// 預設並行門檻（期數達到此值才並行建表）
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// 求解器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 邊際成本表建構策略
    pub table_strategy: TableStrategy,

    /// 並行建表門檻
    /// - Some(k): 期數 >= k 時以 rayon 逐列並行計算
    /// - None: 一律循序計算
    pub parallel_threshold: Option<usize>,
}

impl SolverConfig {
    /// 創建預設配置（前綴和建表，512 期以上並行）
    pub fn new() -> Self {
        Self {
            table_strategy: TableStrategy::PrefixSum,
            parallel_threshold: Some(DEFAULT_PARALLEL_THRESHOLD),
        }
    }

    /// 建構器模式：設置建表策略
    pub fn with_table_strategy(mut self, strategy: TableStrategy) -> Self {
        self.table_strategy = strategy;
        self
    }

    /// 建構器模式：設置並行門檻
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// 建構器模式：關閉並行建表
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = None;
        self
    }

    /// 給定期數時是否並行建表
    pub fn is_parallel_for(&self, horizon: usize) -> bool {
        self.parallel_threshold
            .map(|threshold| horizon >= threshold)
            .unwrap_or(false)
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == Some(0) {
            return Err(LotSizingError::InvalidConfig(
                "parallel_threshold 必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 從 JSON 讀取配置
    ///
    /// # 範例
    /// ```
    /// # use lotsizing_core::{SolverConfig, TableStrategy};
    /// let config = SolverConfig::from_json(
    ///     r#"{"table_strategy":"naive","parallel_threshold":null}"#,
    /// ).unwrap();
    /// assert_eq!(config.table_strategy, TableStrategy::Naive);
    /// assert!(!config.is_parallel_for(10_000));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LotSizingError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LotSizingError::Parse(e.to_string()))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 邊際成本表建構策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStrategy {
    /// 前綴和（O(n²)，正式路徑）
    PrefixSum,

    /// 逐期累加持有成本（參考實作，僅適用小規模）
    Naive,
}

/// 成本模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostModel {
    /// 經典模型（Wagner-Whitin）：需求必須全部滿足
    Classical,

    /// 立即失銷模型：未滿足需求損失單位收入
    LostSales,
}

impl CostModel {
    /// 候選來源期的最小索引（失銷模型允許 0 = 全部失銷）
    pub fn first_source(&self) -> usize {
        match self {
            CostModel::Classical => 1,
            CostModel::LostSales => 0,
        }
    }
}
