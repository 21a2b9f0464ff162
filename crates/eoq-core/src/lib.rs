//! # EOQ Core
//!
//! 經濟訂購量（EOQ）核心資料模型與類型定義

pub mod config;
pub mod metrics;
pub mod params;

// Re-export 主要類型
pub use config::EoqConfig;
pub use metrics::{CostCurvePoint, EoqResult};
pub use params::InventoryParameters;

/// EOQ 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EoqError {
    /// 持有成本為零（EOQ 公式的分母）
    #[error("holding cost cannot be zero")]
    DivisionByZero,

    /// 其他算術錯誤（負數開方、數值溢出等）
    #[error("calculation error: {0}")]
    ComputationError(String),
}

impl EoqError {
    /// 建立計算錯誤
    pub fn computation(cause: impl Into<String>) -> Self {
        Self::ComputationError(cause.into())
    }
}

pub type Result<T> = std::result::Result<T, EoqError>;
