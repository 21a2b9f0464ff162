//! EOQ 主計算器

use eoq_core::{EoqConfig, EoqError, EoqResult, InventoryParameters};
use rust_decimal::{Decimal, MathematicalOps};

use crate::cost_curve::CostCurveSampler;
use crate::EoqAnalysis;

/// EOQ 計算器
///
/// 每次請求獨立計算：呼叫方傳入參數，取得結果，不保留任何跨請求狀態
#[derive(Debug, Clone, Default)]
pub struct EoqCalculator {
    /// 顯示配置
    config: EoqConfig,
}

impl EoqCalculator {
    /// 創建新的 EOQ 計算器
    pub fn new(config: EoqConfig) -> Self {
        Self { config }
    }

    /// 取得配置
    pub fn config(&self) -> &EoqConfig {
        &self.config
    }

    /// 主計算入口：EOQ 指標 + 成本曲線
    pub fn calculate(&self, params: &InventoryParameters) -> eoq_core::Result<EoqAnalysis> {
        tracing::info!(
            "開始 EOQ 計算：D={}, S={}, H={}",
            params.annual_demand,
            params.ordering_cost,
            params.holding_cost
        );

        let start_time = std::time::Instant::now();

        // Step 1: EOQ 與成本
        let result = Self::compute(params, self.config.round_results)?;
        tracing::debug!(
            "EOQ = {}，每年訂購 {} 次（下單 {} 次）",
            result.eoq,
            result.orders_per_year,
            result.order_count()
        );

        // Step 2: 以 EOQ 為中心取樣成本曲線
        let curve = CostCurveSampler::sample(params, result.eoq)?;

        let analysis = EoqAnalysis {
            result,
            curve,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("EOQ 計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("年總成本: {}", analysis.result.total_cost);

        Ok(analysis)
    }

    /// 計算 EOQ 及年成本
    /// EOQ = sqrt(2 * D * S / H)
    ///
    /// - 訂購成本以向上取整的訂購次數計算（不允許部分訂單），與顯示設定無關
    /// - 持有成本使用未取整的 EOQ
    pub fn compute(
        params: &InventoryParameters,
        round_results: bool,
    ) -> eoq_core::Result<EoqResult> {
        if params.has_zero_holding_cost() {
            return Err(EoqError::DivisionByZero);
        }

        // 負數參數沒有實數解（即使 D、S 同為負數乘積為正）
        if params.has_negative() {
            return Err(EoqError::computation(format!(
                "math domain error: negative input has no real square root \
                 (D={}, S={}, H={})",
                params.annual_demand, params.ordering_cost, params.holding_cost
            )));
        }

        let numerator = Decimal::TWO
            .checked_mul(params.annual_demand)
            .and_then(|value| value.checked_mul(params.ordering_cost))
            .ok_or_else(|| EoqError::computation("overflow computing 2 * D * S"))?;

        let radicand = numerator
            .checked_div(params.holding_cost)
            .ok_or_else(|| EoqError::computation("overflow computing 2 * D * S / H"))?;

        let eoq = radicand.sqrt().ok_or_else(|| {
            EoqError::computation(format!(
                "math domain error: square root of negative value {radicand}"
            ))
        })?;

        // EOQ 為 0（D = 0 或 S = 0）時不做第二次除法
        let orders_per_year = if eoq.is_zero() {
            Decimal::ZERO
        } else {
            params
                .annual_demand
                .checked_div(eoq)
                .ok_or_else(|| EoqError::computation("overflow computing D / EOQ"))?
        };

        let ordering_cost = orders_per_year
            .ceil()
            .checked_mul(params.ordering_cost)
            .ok_or_else(|| EoqError::computation("overflow computing ordering cost"))?;

        // 平均庫存水位 × 持有成本
        let holding_cost = (eoq / Decimal::TWO)
            .checked_mul(params.holding_cost)
            .ok_or_else(|| EoqError::computation("overflow computing holding cost"))?;

        let total_cost = ordering_cost
            .checked_add(holding_cost)
            .ok_or_else(|| EoqError::computation("overflow computing total cost"))?;

        Ok(EoqResult {
            eoq,
            orders_per_year,
            ordering_cost,
            holding_cost,
            total_cost,
            rounded_display: round_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::prelude::ToPrimitive;

    fn params(d: i64, s: i64, h: i64) -> InventoryParameters {
        InventoryParameters::new(Decimal::from(d), Decimal::from(s), Decimal::from(h))
    }

    fn approx(value: Decimal, expected: f64, tolerance: f64) -> bool {
        (value.to_f64().unwrap() - expected).abs() <= tolerance
    }

    #[test]
    fn test_bookstore_case() {
        let result = EoqCalculator::compute(&params(4800, 100_000, 2000), true).unwrap();

        assert!(approx(result.eoq, 692.820_323, 1e-5));
        assert!(approx(result.orders_per_year, 6.928_203, 1e-5));
        assert_eq!(result.order_count(), Decimal::from(7));
        assert_eq!(result.ordering_cost, Decimal::from(700_000));
        assert!(approx(result.holding_cost, 692_820.323, 1e-2));
        assert!(approx(result.total_cost, 1_392_820.323, 1e-2));
        assert_eq!(result.total_cost, result.ordering_cost + result.holding_cost);
        assert!(result.rounded_display);
    }

    #[test]
    fn test_rounding_flag_does_not_change_costs() {
        let rounded = EoqCalculator::compute(&params(4800, 100_000, 2000), true).unwrap();
        let precise = EoqCalculator::compute(&params(4800, 100_000, 2000), false).unwrap();

        assert_eq!(rounded.eoq, precise.eoq);
        assert_eq!(rounded.ordering_cost, precise.ordering_cost);
        assert_eq!(rounded.holding_cost, precise.holding_cost);
        assert_eq!(rounded.total_cost, precise.total_cost);
        assert_eq!(rounded.display_eoq(), Decimal::from(693));
        assert_eq!(precise.display_eoq(), Decimal::new(69282, 2));
    }

    #[test]
    fn test_zero_holding_cost_is_division_by_zero() {
        let result = EoqCalculator::compute(&params(4800, 100_000, 0), true);
        assert!(matches!(result, Err(EoqError::DivisionByZero)));
    }

    #[test]
    fn test_zero_demand() {
        let result = EoqCalculator::compute(&params(0, 100_000, 2000), true).unwrap();

        assert!(result.eoq.is_zero());
        assert!(result.orders_per_year.is_zero());
        assert!(result.ordering_cost.is_zero());
        assert!(result.holding_cost.is_zero());
        assert!(result.total_cost.is_zero());
    }

    #[rstest]
    #[case(params(-4800, 100_000, 2000))]
    #[case(params(4800, -100_000, 2000))]
    #[case(params(4800, 100_000, -2000))]
    #[case(params(-4800, -100_000, 2000))]
    #[case(params(0, -100_000, 2000))]
    fn test_negative_input_is_computation_error(#[case] input: InventoryParameters) {
        let result = EoqCalculator::compute(&input, true);
        assert!(matches!(result, Err(EoqError::ComputationError(ref cause)) if cause.contains("square root")));
    }

    #[test]
    fn test_negative_input_error_names_values() {
        let err = EoqCalculator::compute(&params(-4800, -100_000, 2000), false).unwrap_err();
        assert!(err.to_string().contains("D=-4800, S=-100000, H=2000"));
    }

    #[test]
    fn test_tiny_radicand_underflows_to_zero() {
        // 2DS/H = 2e-34 超出 Decimal 的 28 位小數，EOQ 退化為 0
        let input = InventoryParameters::new(Decimal::new(1, 28), Decimal::ONE, Decimal::from(1_000_000));
        let result = EoqCalculator::compute(&input, true).unwrap();

        assert!(result.eoq.is_zero());
        assert!(result.orders_per_year.is_zero());
        assert!(result.total_cost.is_zero());
    }

    #[test]
    fn test_overflow_is_computation_error() {
        let input = InventoryParameters::new(Decimal::MAX, Decimal::MAX, Decimal::ONE);
        let result = EoqCalculator::compute(&input, true);
        assert!(matches!(result, Err(EoqError::ComputationError(_))));
    }

    #[rstest]
    #[case(params(1000, 100, 5), 200)]
    #[case(params(10_000, 50, 4), 500)]
    #[case(params(2, 1, 1), 2)]
    fn test_perfect_square_eoq(#[case] input: InventoryParameters, #[case] expected: i64) {
        let result = EoqCalculator::compute(&input, false).unwrap();
        assert_eq!(result.eoq, Decimal::from(expected));
    }

    #[test]
    fn test_exact_order_count_not_bumped() {
        // EOQ = 200，每年 5 次，剛好整數
        let result = EoqCalculator::compute(&params(1000, 100, 5), true).unwrap();

        assert_eq!(result.orders_per_year, Decimal::from(5));
        assert_eq!(result.ordering_cost, Decimal::from(500));
        assert_eq!(result.holding_cost, Decimal::from(500));
        assert_eq!(result.total_cost, Decimal::from(1000));
    }

    #[test]
    fn test_calculate_returns_curve_and_timing() {
        let calculator = EoqCalculator::new(EoqConfig::new().with_round_results(false));
        let analysis = calculator.calculate(&params(4800, 100_000, 2000)).unwrap();

        assert!(!analysis.result.rounded_display);
        assert!(analysis.calculation_time_ms.is_some());
        assert_eq!(analysis.curve.min_quantity(), 69);
        assert_eq!(analysis.curve.max_quantity(), 1385);
    }

    #[test]
    fn test_calculate_propagates_errors() {
        let calculator = EoqCalculator::default();
        let result = calculator.calculate(&params(4800, 100_000, 0));
        assert!(matches!(result, Err(EoqError::DivisionByZero)));
    }
}
