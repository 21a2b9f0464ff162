//! 書店 EOQ 計算示例

use eoq_calc::EoqCalculator;
use eoq_core::{EoqConfig, InventoryParameters};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bookstore EOQ Example ===\n");

    // 步驟 1: 輸入參數
    let params = InventoryParameters::new(
        Decimal::from(4_800),
        Decimal::from(100_000),
        Decimal::from(2_000),
    );
    println!("[1] Parameters");
    println!("    Annual demand (D): {} units/year", params.annual_demand);
    println!("    Ordering cost (S): {} per order", params.ordering_cost);
    println!("    Holding cost  (H): {} per unit/year\n", params.holding_cost);

    // 步驟 2: 計算
    let config = EoqConfig::new().with_chart_width(30);
    let calculator = EoqCalculator::new(config.clone());
    let analysis = calculator.calculate(&params)?;
    println!(
        "[2] Calculated in {} ms\n",
        analysis.calculation_time_ms.unwrap_or_default()
    );

    // 步驟 3: 報表
    println!("[3] Report");
    println!("{}\n", analysis.report(&params, &config));

    // 步驟 4: 成本曲線
    println!("[4] Cost Curve");
    print!("{}", analysis.chart(&config));

    // 步驟 5: 持有成本為零時的錯誤
    let invalid = InventoryParameters::new(params.annual_demand, params.ordering_cost, Decimal::ZERO);
    if let Err(e) = calculator.calculate(&invalid) {
        println!("\n[5] H = 0 -> {e}");
    }

    Ok(())
}
