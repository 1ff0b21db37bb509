use std::path::Path;

use weaver_core::BatchPlan;
use weaver_pipeline::{Loaded, Shortfall};

/// `truth-weaver plan`
pub fn execute(input: &Path, json: bool) -> anyhow::Result<()> {
    let plan = match weaver_pipeline::load_batches(input) {
        Loaded::Batches(plan) => plan,
        Loaded::Shortfall(Shortfall::Unreadable) => {
            anyhow::bail!("cannot read {}", input.display())
        }
        Loaded::Shortfall(_) => BatchPlan {
            batches: Vec::new(),
            dropped: Vec::new(),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan_json(&plan))?);
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}

fn plan_json(plan: &BatchPlan) -> serde_json::Value {
    let groups: Vec<serde_json::Value> = plan
        .batches
        .iter()
        .map(|b| {
            serde_json::json!({
                "group_id": b.group_id,
                "units": b.unit_ids(),
            })
        })
        .collect();
    serde_json::json!({
        "groups": groups,
        "dropped": plan.dropped,
    })
}

fn render_plan(plan: &BatchPlan) -> String {
    let mut out = String::new();
    if plan.batches.is_empty() {
        out.push_str("(no full groups)\n");
    }
    for batch in &plan.batches {
        out.push_str(&format!(
            "{}: {}\n",
            batch.group_id,
            batch.unit_ids().join(", ")
        ));
    }
    if !plan.dropped.is_empty() {
        out.push_str(&format!("dropped: {}\n", plan.dropped.join(", ")));
    }
    out
}
