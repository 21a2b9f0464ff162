//! EOQ 顯示與報表配置

use serde::{Deserialize, Serialize};

/// 預設貨幣前綴
pub const DEFAULT_CURRENCY: &str = "Rp";

/// 預設圖表寬度（字元）
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// EOQ 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EoqConfig {
    /// 是否以整數顯示結果
    /// - EOQ 取最接近整數
    /// - 每年訂購次數向上取整
    /// - 總成本不顯示小數
    ///
    /// 僅影響顯示；訂購成本永遠以整數訂購次數計算
    pub round_results: bool,

    /// 金額前綴
    pub currency: String,

    /// 成本曲線圖的長條寬度
    pub chart_width: usize,
}

impl EoqConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            round_results: true,
            currency: DEFAULT_CURRENCY.to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }

    /// 建構器模式：設置是否整數顯示
    pub fn with_round_results(mut self, round_results: bool) -> Self {
        self.round_results = round_results;
        self
    }

    /// 建構器模式：設置貨幣前綴
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// 建構器模式：設置圖表寬度（0 視為 1）
    pub fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width;
        self
    }

    /// 實際使用的圖表寬度
    pub fn effective_chart_width(&self) -> usize {
        self.chart_width.max(1)
    }
}

impl Default for EoqConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_config() {
        let config = EoqConfig::new();

        assert!(config.round_results);
        assert_eq!(config.currency, "Rp");
        assert_eq!(config.chart_width, 40);
    }

    #[test]
    fn test_config_builder() {
        let config = EoqConfig::new()
            .with_round_results(false)
            .with_currency("USD")
            .with_chart_width(0);

        assert!(!config.round_results);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.chart_width, 0);
        assert_eq!(config.effective_chart_width(), 1);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: EoqConfig = serde_json::from_str(r#"{"currency": "EUR"}"#).unwrap();

        assert!(config.round_results);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.chart_width, DEFAULT_CHART_WIDTH);
    }
}
