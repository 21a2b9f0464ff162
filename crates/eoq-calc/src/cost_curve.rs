//! 成本曲線取樣
//!
//! 以 EOQ 為中心，在 [EOQ × 0.1, EOQ × 2] 範圍內取樣訂購量，
//! 計算各訂購量下的訂購成本、持有成本與總成本，供圖表使用

use std::iter::StepBy;
use std::ops::RangeInclusive;

use eoq_core::{CostCurvePoint, EoqError, InventoryParameters};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 最小訂購量 = EOQ / 10
const MIN_QUANTITY_DIVISOR: u32 = 10;

/// 最大訂購量 = EOQ × 2
const MAX_QUANTITY_FACTOR: u32 = 2;

/// 步長 = EOQ / 50（約 100 個取樣點）
const STEP_DIVISOR: u32 = 50;

/// 成本曲線計算器
pub struct CostCurveSampler;

impl CostCurveSampler {
    /// 建立以 EOQ 為中心的成本曲線
    ///
    /// - 最小訂購量至少為 1
    /// - 步長至少為 1
    /// - EOQ < 0.5 時上限提升至下限，保證至少一個取樣點
    pub fn sample(params: &InventoryParameters, eoq: Decimal) -> eoq_core::Result<CostCurve> {
        if eoq < Decimal::ZERO {
            return Err(EoqError::computation(format!(
                "EOQ must not be negative, got {eoq}"
            )));
        }

        let min_quantity = floor_to_u64(eoq / Decimal::from(MIN_QUANTITY_DIVISOR))?.max(1);
        let upper = eoq
            .checked_mul(Decimal::from(MAX_QUANTITY_FACTOR))
            .ok_or_else(|| EoqError::computation("overflow computing cost curve range"))?;
        let max_quantity = floor_to_u64(upper)?.max(min_quantity);
        let step = floor_to_u64(eoq / Decimal::from(STEP_DIVISOR))?.max(1);

        let curve = CostCurve {
            params: *params,
            min_quantity,
            max_quantity,
            step,
        };
        curve.check_bounds()?;

        tracing::debug!(
            "成本曲線範圍: {}..={}，步長 {}，取樣點 {}",
            min_quantity,
            max_quantity,
            step,
            curve.len()
        );

        Ok(curve)
    }
}

fn floor_to_u64(value: Decimal) -> eoq_core::Result<u64> {
    value.floor().to_u64().ok_or_else(|| {
        EoqError::computation(format!("cost curve quantity out of range: {value}"))
    })
}

/// 成本曲線（惰性計算，可重複迭代）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCurve {
    params: InventoryParameters,
    min_quantity: u64,
    max_quantity: u64,
    step: u64,
}

impl CostCurve {
    /// 最小訂購量
    pub fn min_quantity(&self) -> u64 {
        self.min_quantity
    }

    /// 最大訂購量（範圍上限，不一定是最後一個取樣點）
    pub fn max_quantity(&self) -> u64 {
        self.max_quantity
    }

    /// 取樣步長
    pub fn step(&self) -> u64 {
        self.step
    }

    /// 最後一個取樣點的訂購量
    pub fn last_quantity(&self) -> u64 {
        self.min_quantity + (self.max_quantity - self.min_quantity) / self.step * self.step
    }

    /// 取樣點數量
    pub fn len(&self) -> usize {
        let count = (self.max_quantity - self.min_quantity) / self.step + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// 永遠至少有一個取樣點
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 依訂購量遞增迭代取樣點
    pub fn iter(&self) -> CostCurveIter<'_> {
        let step = usize::try_from(self.step).unwrap_or(usize::MAX);
        CostCurveIter {
            curve: self,
            quantities: (self.min_quantity..=self.max_quantity).step_by(step),
        }
    }

    /// 計算指定訂購量的成本；溢出時返回 None
    pub fn point_at(&self, quantity: u64) -> Option<CostCurvePoint> {
        if quantity == 0 {
            return None;
        }

        let q = Decimal::from(quantity);
        let ordering_cost = self
            .params
            .annual_demand
            .checked_div(q)?
            .checked_mul(self.params.ordering_cost)?;
        let holding_cost = (q / Decimal::TWO).checked_mul(self.params.holding_cost)?;
        let total_cost = ordering_cost.checked_add(holding_cost)?;

        Some(CostCurvePoint {
            quantity,
            ordering_cost,
            holding_cost,
            total_cost,
        })
    }

    /// 檢查端點不會溢出
    /// 訂購成本在最小訂購量時最大，持有成本在最大訂購量時最大，
    /// 中間點的總成本不超過兩者之和
    fn check_bounds(&self) -> eoq_core::Result<()> {
        let overflow = || EoqError::computation("overflow computing cost curve");

        let first = self.point_at(self.min_quantity).ok_or_else(overflow)?;
        let last = self.point_at(self.last_quantity()).ok_or_else(overflow)?;
        first
            .ordering_cost
            .abs()
            .checked_add(last.holding_cost.abs())
            .ok_or_else(overflow)?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a CostCurve {
    type Item = CostCurvePoint;
    type IntoIter = CostCurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 成本曲線迭代器
#[derive(Debug, Clone)]
pub struct CostCurveIter<'a> {
    curve: &'a CostCurve,
    quantities: StepBy<RangeInclusive<u64>>,
}

impl Iterator for CostCurveIter<'_> {
    type Item = CostCurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let curve = self.curve;
        self.quantities.find_map(|quantity| curve.point_at(quantity))
    }
}
