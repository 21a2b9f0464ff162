//! 文字報表：摘要、成本明細、建議

use std::fmt;

use eoq_core::{EoqConfig, EoqResult, InventoryParameters};
use rust_decimal::{Decimal, RoundingStrategy};

/// 格式化金額／數量：千分位逗號，四捨六入五成雙
pub fn format_amount(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded < Decimal::ZERO {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// EOQ 報表（已格式化的顯示字串）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EoqReport {
    /// EOQ 顯示值（不含單位）
    pub eoq_display: String,

    /// 每年訂購次數顯示值
    pub orders_display: String,

    /// 年總成本（含貨幣前綴）
    pub total_display: String,

    /// 訂購成本明細
    pub ordering_detail: String,

    /// 持有成本明細
    pub holding_detail: String,

    /// 建議文字
    pub recommendation: String,
}

impl EoqReport {
    /// 由計算結果建立報表
    pub fn new(params: &InventoryParameters, result: &EoqResult, config: &EoqConfig) -> Self {
        let currency = &config.currency;

        let eoq_display = format_amount(result.display_eoq(), result.display_decimals());
        let orders_display =
            format_amount(result.display_orders_per_year(), result.display_decimals());
        let total_display = format!(
            "{currency} {}",
            format_amount(result.total_cost, result.display_decimals())
        );

        let ordering_detail = format!(
            "Total ordering cost: {currency} {} ({} orders × {currency} {}/order)",
            format_amount(result.ordering_cost, 0),
            format_amount(result.order_count(), 0),
            format_amount(params.ordering_cost, 0),
        );
        let holding_detail = format!(
            "Total holding cost: {currency} {} (({eoq_display} units / 2) × {currency} {}/unit/year)",
            format_amount(result.holding_cost, 0),
            format_amount(params.holding_cost, 0),
        );

        let recommendation = format!(
            "Order about {eoq_display} units each time (~{orders_display} orders/year) \
             to keep total annual inventory cost at {total_display}."
        );

        Self {
            eoq_display,
            orders_display,
            total_display,
            ordering_detail,
            holding_detail,
            recommendation,
        }
    }
}

impl fmt::Display for EoqReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        writeln!(f, "  EOQ (optimal units per order): {} units", self.eoq_display)?;
        writeln!(f, "  Orders per year: {} orders", self.orders_display)?;
        writeln!(f, "  Total annual inventory cost: {}", self.total_display)?;
        writeln!(f)?;
        writeln!(f, "Cost details")?;
        writeln!(f, "  {}", self.ordering_detail)?;
        writeln!(f, "  {}", self.holding_detail)?;
        writeln!(f)?;
        writeln!(f, "Recommendation")?;
        write!(f, "  {}", self.recommendation)
    }
}
