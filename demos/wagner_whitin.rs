//! Wagner-Whitin 經典批量範例

use lotsizing::{LotSizingProblem, PeriodCalendar, Solver, SolverConfig};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Wagner-Whitin 批量計算示例 ===\n");

    let demand = [69, 29, 36, 61, 61, 26, 34, 67, 45, 67, 79, 56];
    let ordering_cost = [85, 102, 102, 101, 98, 114, 105, 86, 119, 110, 98, 114];

    let problem = LotSizingProblem::classical(
        demand.iter().map(|&v| Decimal::from(v)).collect(),
        Decimal::ONE,
        ordering_cost.iter().map(|&v| Decimal::from(v)).collect(),
    );

    let solver = Solver::new(SolverConfig::new());
    let solution = solver.solve(&problem)?;

    println!("累積成本: {:?}", solution.cumulative_cost);
    println!("來源期: {:?}", solution.last_source_period);

    let plan = solution.extract_plan(&problem)?;
    let calendar =
        PeriodCalendar::weekly(chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default());

    println!("\n補貨計劃:");
    for order in plan.dated_orders(&calendar)? {
        println!(
            "  - 第 {} 期（{}）訂購 {}，涵蓋至 {}",
            order.period, order.order_date, order.quantity, order.covers_until
        );
    }
    println!("\n總成本: {}", plan.total_cost);

    Ok(())
}
