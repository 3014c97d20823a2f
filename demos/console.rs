//! Example: Driving the batch protocol end to end.
//!
//! This example demonstrates how to:
//! - Parse a system configuration from TOML
//! - Build a scheduler with one simulated actuator per axis
//! - Feed command batches through a line queue
//! - Collect the protocol output, including the per-batch DONE
//!
//! Run with: `cargo run --example console`

use stepper_console::{config::parse_config, FmtReporter, LineQueue, Scheduler, SimActuator};

const CONFIG: &str = r#"
slow_zone_steps = 20

[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 50.0
slow_speed_steps_per_sec = 5.0

[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 50.0
slow_speed_steps_per_sec = 5.0

[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 50.0
slow_speed_steps_per_sec = 5.0
"#;

fn main() -> stepper_console::error::Result<()> {
    println!("=== Batch Console Example ===\n");

    let config = parse_config(CONFIG)?;
    let mut scheduler = Scheduler::from_config(&config, |_| SimActuator::new())?;

    println!(
        "{} axes configured, slow zone at {} steps\n",
        config.axis_count(),
        config.slow_zone_steps
    );

    // Each line is one batch: tuning and status lines acknowledge
    // immediately, the move batch holds its DONE until every axis settles
    let mut lines = LineQueue::new();
    lines.push("A 2 1000 T 2 2000 L 2 200");
    lines.push("ALL");
    lines.push("P 2 200 P 1 200 P 0 -200");

    let mut out = String::new();
    let mut reporter = FmtReporter::new(&mut out);

    let mut ticks = 0;
    while !lines.is_empty() || !scheduler.all_settled() || scheduler.tracker().is_awaiting() {
        scheduler.tick(&mut lines, &mut reporter);
        ticks += 1;
    }

    println!("Protocol output:");
    for line in out.lines() {
        println!("  {}", line);
    }
    println!();

    println!("All axes settled after {} ticks:", ticks);
    for axis in 0..config.axis_count() {
        let actuator = scheduler.actuator(axis).unwrap();
        println!(
            "  axis {}: position {} steps (target {})",
            axis,
            actuator.position().value(),
            actuator.target().value()
        );
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
