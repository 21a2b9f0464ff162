//! 命令列介面：輸入收集與結果顯示

use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::ArgAction;
use eoq_calc::{EoqAnalysis, EoqCalculator};
use eoq_core::{EoqConfig, InventoryParameters};
use rust_decimal::Decimal;

/// 解析非負數值
fn parse_non_negative(s: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(s.trim())
        .or_else(|_| Decimal::from_scientific(s.trim()))
        .map_err(|e| format!("invalid number '{s}': {e}"))?;

    if value < Decimal::ZERO {
        return Err(format!("value must not be negative, got {value}"));
    }

    Ok(value)
}

/// Economic Order Quantity calculator
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Annual demand (D), units per year
    #[arg(short = 'd', long, default_value = "4800", value_parser = parse_non_negative)]
    demand: Decimal,

    /// Ordering cost per order (S)
    #[arg(short = 's', long, default_value = "100000", value_parser = parse_non_negative)]
    ordering_cost: Decimal,

    /// Holding cost per unit per year (H)
    #[arg(short = 'H', long, default_value = "2000", value_parser = parse_non_negative)]
    holding_cost: Decimal,

    /// Show unrounded results (two decimal places)
    #[arg(long)]
    no_round: bool,

    /// Currency prefix for monetary values
    #[arg(long, default_value = eoq_core::config::DEFAULT_CURRENCY)]
    currency: String,

    /// Also print the sampled cost curve
    #[arg(long)]
    curve: bool,

    /// Bar width of the cost curve chart
    #[arg(long, default_value_t = eoq_core::config::DEFAULT_CHART_WIDTH)]
    chart_width: usize,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose)?;

        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let code = self.execute(&mut stdout.lock(), &mut stderr.lock())?;

        Ok(code)
    }

    /// 執行一次計算並輸出結果
    /// 計算錯誤：錯誤訊息寫入 `err`，`out` 不輸出任何內容，返回失敗狀態
    fn execute(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<ExitCode> {
        let params = self.parameters();
        let config = self.config();
        let calculator = EoqCalculator::new(config.clone());

        match calculator.calculate(&params) {
            Ok(analysis) => {
                self.print(out, &params, &config, &analysis)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                tracing::debug!("EOQ 計算失敗: {e:?}");
                writeln!(err, "error: {e}")?;
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn parameters(&self) -> InventoryParameters {
        InventoryParameters::new(self.demand, self.ordering_cost, self.holding_cost)
    }

    fn config(&self) -> EoqConfig {
        EoqConfig::new()
            .with_round_results(!self.no_round)
            .with_currency(self.currency.clone())
            .with_chart_width(self.chart_width)
    }

    fn print(
        &self,
        out: &mut impl Write,
        params: &InventoryParameters,
        config: &EoqConfig,
        analysis: &EoqAnalysis,
    ) -> io::Result<()> {
        writeln!(out, "{}", analysis.report(params, config))?;

        if self.curve {
            writeln!(out)?;
            write!(out, "{}", analysis.chart(config))?;
        }

        Ok(())
    }

    fn setup_logging(verbosity: u8) -> anyhow::Result<()> {
        use anyhow::Context;
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .context("failed to install log subscriber")
    }
}
