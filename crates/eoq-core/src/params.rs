//! 庫存參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// EOQ 輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryParameters {
    /// 年需求量 D（單位/年）
    pub annual_demand: Decimal,

    /// 每次訂購成本 S
    pub ordering_cost: Decimal,

    /// 每單位每年持有成本 H
    pub holding_cost: Decimal,
}

impl InventoryParameters {
    /// 創建新的庫存參數
    pub fn new(annual_demand: Decimal, ordering_cost: Decimal, holding_cost: Decimal) -> Self {
        Self {
            annual_demand,
            ordering_cost,
            holding_cost,
        }
    }

    /// 檢查持有成本是否為零（EOQ 無法計算）
    pub fn has_zero_holding_cost(&self) -> bool {
        self.holding_cost.is_zero()
    }

    /// 檢查是否有負數參數
    pub fn has_negative(&self) -> bool {
        [self.annual_demand, self.ordering_cost, self.holding_cost]
            .iter()
            .any(|value| *value < Decimal::ZERO)
    }
}

impl Default for InventoryParameters {
    /// 書店案例預設值：D=4800, S=100000, H=2000
    fn default() -> Self {
        Self::new(
            Decimal::from(4_800),
            Decimal::from(100_000),
            Decimal::from(2_000),
        )
    }
}
