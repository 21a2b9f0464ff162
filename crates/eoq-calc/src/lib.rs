//! # EOQ Calculation Engine
//!
//! EOQ 計算引擎：經濟訂購量、年成本、成本曲線與文字報表

pub mod calculator;
pub mod chart;
pub mod cost_curve;
pub mod report;

// Re-export 主要類型
pub use calculator::EoqCalculator;
pub use chart::{render_cost_curve, CostCurveChart};
pub use cost_curve::{CostCurve, CostCurveSampler};
pub use report::{format_amount, EoqReport};

/// 單次 EOQ 請求的計算結果
#[derive(Debug, Clone)]
pub struct EoqAnalysis {
    /// EOQ 與年成本
    pub result: eoq_core::EoqResult,

    /// 以 EOQ 為中心的成本曲線
    pub curve: CostCurve,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl EoqAnalysis {
    /// 建立報表
    pub fn report(
        &self,
        params: &eoq_core::InventoryParameters,
        config: &eoq_core::EoqConfig,
    ) -> EoqReport {
        EoqReport::new(params, &self.result, config)
    }

    /// 繪製成本曲線
    pub fn chart(&self, config: &eoq_core::EoqConfig) -> String {
        render_cost_curve(&self.curve, self.result.eoq, config)
    }
}
