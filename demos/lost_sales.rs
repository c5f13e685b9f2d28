//! 立即失銷批量範例（從 JSON 讀取問題）

use lotsizing::{solve, LotSizingProblem};

const PROBLEM_JSON: &str = r#"{
    "demand": ["3000", "11750", "2000", "4000"],
    "holding_rate": { "per_period": ["3", "3", "3", "3"] },
    "fixed_ordering_cost": ["25000", "25000", "25000", "25000"],
    "lost_sales": {
        "variable_ordering_cost": ["10", "10", "10", "10"],
        "unit_revenue": ["15", "21", "12", "18"]
    }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 立即失銷批量計算示例 ===\n");

    let problem = LotSizingProblem::from_json(PROBLEM_JSON)?;
    let solution = solve(&problem)?;

    println!("累積成本: {:?}", solution.cumulative_cost);
    println!("來源期: {:?}", solution.last_source_period);

    let plan = solution.extract_plan(&problem)?;
    for order in &plan.orders {
        println!(
            "  - 第 {} 期生產 {}，涵蓋第 {}..={} 期",
            order.period, order.quantity, order.period, order.covers_through
        );
    }
    for lost in &plan.lost_sales {
        println!("  - 第 {} 期失銷 {}", lost.period, lost.quantity);
    }

    println!("\n{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
