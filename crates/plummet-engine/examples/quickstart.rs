//! Plummet Quickstart: drop a body and watch both models bounce.
//!
//! Demonstrates:
//!   1. Building an engine from the default configuration
//!   2. Running synchronously with a progress closure
//!   3. Reading trajectories, metadata and run metrics
//!   4. Driving the same run through the background worker protocol
//!
//! Run with:
//!   cargo run --example quickstart

use std::time::Duration;

use plummet_core::{ModelVariant, SimulationParameters};
use plummet_engine::{CancelToken, Engine, EngineConfig, EngineWorker, Notification};

// ─── Scenario ───────────────────────────────────────────────────

const MASS_KG: f64 = 70.0;
const HEIGHT_M: f64 = 10.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // ─── Synchronous run ────────────────────────────────────────

    let engine = Engine::new(EngineConfig::default())?;
    let params = SimulationParameters::new(MASS_KG, HEIGHT_M);
    let mut on_progress = |percent: f64, t: f64| {
        println!("  progress {percent:5.1}%  t = {t:5.2} s");
    };
    let outcome = engine.run_with_metrics(&params, &CancelToken::new(), &mut on_progress)?;
    let result = outcome.result;

    let meta = &result.metadata;
    println!(
        "\nstopped at t = {:.2} s after {} samples ({} at {:.0} ticks/s)",
        meta.end_time,
        meta.total_points,
        outcome.metrics.integrator,
        outcome.metrics.ticks_per_second()
    );
    for variant in ModelVariant::ALL {
        let traj = result.trajectory(variant);
        let contact = traj
            .first_contact_index()
            .and_then(|i| traj.sample(i))
            .map(|s| format!("t = {:.2} s, v = {:.3} m/s", s.t, s.velocity))
            .unwrap_or_else(|| "never".to_owned());
        println!(
            "  {variant:>9}: {} bounces, at rest = {}, first contact {contact}",
            meta.bounces(variant),
            meta.stopped(variant),
        );
    }

    // ─── Worker protocol ────────────────────────────────────────

    let mut worker = EngineWorker::spawn(EngineConfig::default())?;
    worker.submit_json(format!(
        r#"{{"kind":"simulate","params":{{"mass":{MASS_KG},"height":{HEIGHT_M}}}}}"#
    ))?;
    loop {
        let note = worker.notifications().recv_timeout(Duration::from_secs(10))?;
        match &note {
            Notification::Complete { results } => {
                println!(
                    "\nworker complete: digest {:016x} (sync run {:016x})",
                    results.digest(),
                    result.digest()
                );
                break;
            }
            Notification::Error { message } => {
                println!("\nworker error: {message}");
                break;
            }
            other => println!("worker: {}", other.to_json()?),
        }
    }
    let report = worker.shutdown();
    println!("worker shut down in {} ms", report.total_ms);
    Ok(())
}
