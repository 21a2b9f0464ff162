//! 成本曲線文字圖表

use std::fmt;

use eoq_core::{CostCurvePoint, EoqConfig};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::cost_curve::CostCurve;
use crate::report::format_amount;

const BAR: char = '█';

/// 找出訂購量最接近 EOQ 的取樣點（相同距離取較小訂購量）
pub fn nearest_point(curve: &CostCurve, eoq: Decimal) -> Option<CostCurvePoint> {
    curve
        .iter()
        .min_by_key(|point| (Decimal::from(point.quantity) - eoq).abs())
}

/// 繪製成本曲線表格
/// 每列：訂購量、訂購成本、持有成本、總成本、總成本長條；
/// 最接近 EOQ 的一列標記 EOQ
pub fn render_cost_curve(curve: &CostCurve, eoq: Decimal, config: &EoqConfig) -> String {
    CostCurveChart::new(curve, eoq, config).to_string()
}

/// 成本曲線圖表
#[derive(Debug, Clone)]
pub struct CostCurveChart<'a> {
    curve: &'a CostCurve,
    eoq: Decimal,
    currency: &'a str,
    width: usize,
}

impl<'a> CostCurveChart<'a> {
    /// 建立圖表
    pub fn new(curve: &'a CostCurve, eoq: Decimal, config: &'a EoqConfig) -> Self {
        Self {
            curve,
            eoq,
            currency: &config.currency,
            width: config.effective_chart_width(),
        }
    }
}

impl fmt::Display for CostCurveChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_total = self
            .curve
            .iter()
            .map(|point| point.total_cost)
            .max()
            .unwrap_or(Decimal::ZERO);
        let marker = nearest_point(self.curve, self.eoq).map(|point| point.quantity);
        let eoq_label = format_amount(self.eoq, 0);

        writeln!(f, "EOQ cost curve ({}), EOQ ≈ {eoq_label}", self.currency)?;
        writeln!(
            f,
            "{:>10}  {:>16}  {:>16}  {:>16}",
            "Quantity", "Ordering", "Holding", "Total"
        )?;

        for point in self.curve {
            let bar: String = std::iter::repeat(BAR)
                .take(bar_length(point.total_cost, max_total, self.width))
                .collect();
            write!(
                f,
                "{:>10}  {:>16}  {:>16}  {:>16}  {bar}",
                format_amount(Decimal::from(point.quantity), 0),
                format_amount(point.ordering_cost, 0),
                format_amount(point.holding_cost, 0),
                format_amount(point.total_cost, 0),
            )?;
            if marker == Some(point.quantity) {
                write!(f, " ◀ EOQ ≈ {eoq_label}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn bar_length(total: Decimal, max_total: Decimal, width: usize) -> usize {
    if max_total <= Decimal::ZERO || total <= Decimal::ZERO {
        return 0;
    }

    total
        .checked_div(max_total)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(width)))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|scaled| scaled.to_usize())
        .unwrap_or(0)
        .min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CostCurveSampler;
    use eoq_core::InventoryParameters;

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(Decimal::from(50), Decimal::from(100), 40), 20);
        assert_eq!(bar_length(Decimal::from(100), Decimal::from(100), 40), 40);
        assert_eq!(bar_length(Decimal::ZERO, Decimal::from(100), 40), 0);
        assert_eq!(bar_length(Decimal::from(5), Decimal::ZERO, 40), 0);
    }

    #[test]
    fn test_nearest_point_to_eoq() {
        let eoq = Decimal::new(69_282_032, 5);
        let curve = CostCurveSampler::sample(&InventoryParameters::default(), eoq).unwrap();

        let point = nearest_point(&curve, eoq).unwrap();
        assert_eq!(point.quantity, 693);
    }

    #[test]
    fn test_render_marks_single_row() {
        let eoq = Decimal::new(69_282_032, 5);
        let curve = CostCurveSampler::sample(&InventoryParameters::default(), eoq).unwrap();
        let chart = render_cost_curve(&curve, eoq, &EoqConfig::new());

        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), curve.len() + 2);
        assert!(lines[0].contains("EOQ ≈ 693"));

        let marked: Vec<&&str> = lines.iter().filter(|line| line.contains('◀')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].trim_start().starts_with("693"));

        // 最小訂購量處總成本最高，長條滿寬
        assert_eq!(lines[2].matches(BAR).count(), 40);
    }

    #[test]
    fn test_chart_display_matches_render() {
        let eoq = Decimal::from(100);
        let curve = CostCurveSampler::sample(&InventoryParameters::default(), eoq).unwrap();
        let config = EoqConfig::new().with_currency("USD").with_chart_width(0);

        let chart = CostCurveChart::new(&curve, eoq, &config);
        let text = chart.to_string();

        assert_eq!(text, render_cost_curve(&curve, eoq, &config));
        assert!(text.starts_with("EOQ cost curve (USD), EOQ ≈ 100\n"));
        assert!(text.ends_with('\n'));
        // 寬度 0 視為 1
        assert!(text.lines().skip(2).all(|line| line.matches(BAR).count() <= 1));
    }

    #[test]
    fn test_render_single_point_curve() {
        let params = InventoryParameters::new(Decimal::ZERO, Decimal::from(100), Decimal::from(4));
        let curve = CostCurveSampler::sample(&params, Decimal::ZERO).unwrap();
        let chart = render_cost_curve(&curve, Decimal::ZERO, &EoqConfig::new().with_chart_width(10));

        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains('◀'));
        assert_eq!(lines[2].matches(BAR).count(), 10);
    }
}
