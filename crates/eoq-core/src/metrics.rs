//! EOQ 計算結果模型

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 非整數顯示時保留的小數位數
const DISPLAY_DECIMALS: u32 = 2;

/// EOQ 計算結果（每次請求重新計算，計算後不可變）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EoqResult {
    /// 經濟訂購量（未取整）
    pub eoq: Decimal,

    /// 每年訂購次數（未取整）
    pub orders_per_year: Decimal,

    /// 年訂購成本 = ceil(每年訂購次數) × S
    pub ordering_cost: Decimal,

    /// 年持有成本 = (EOQ / 2) × H
    pub holding_cost: Decimal,

    /// 年總成本 = 訂購成本 + 持有成本
    pub total_cost: Decimal,

    /// 是否以整數顯示
    pub rounded_display: bool,
}

impl EoqResult {
    /// 實際下單次數（不允許部分訂單，向上取整）
    pub fn order_count(&self) -> Decimal {
        self.orders_per_year.ceil()
    }

    /// 顯示用 EOQ
    /// - 整數顯示：四捨六入五成雙取整
    /// - 否則保留兩位小數
    pub fn display_eoq(&self) -> Decimal {
        let decimals = if self.rounded_display { 0 } else { DISPLAY_DECIMALS };
        self.eoq
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
    }

    /// 顯示用每年訂購次數（整數顯示時向上取整）
    pub fn display_orders_per_year(&self) -> Decimal {
        if self.rounded_display {
            self.order_count()
        } else {
            self.orders_per_year
                .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointNearestEven)
        }
    }

    /// 金額顯示的小數位數
    pub fn display_decimals(&self) -> u32 {
        if self.rounded_display {
            0
        } else {
            DISPLAY_DECIMALS
        }
    }
}

/// 成本曲線取樣點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCurvePoint {
    /// 訂購量 q
    pub quantity: u64,

    /// (D / q) × S
    pub ordering_cost: Decimal,

    /// (q / 2) × H
    pub holding_cost: Decimal,

    /// 訂購成本 + 持有成本
    pub total_cost: Decimal,
}
