//! CLI command implementations.

use std::path::Path;

use drapa_io::obj::{export_obj, ObjExportOptions};
use drapa_io::{Scenario, StateSnapshot};
use drapa_telemetry::sinks::TracingSink;
use drapa_telemetry::{EventBus, EventKind, SimulationEvent};
use drapa_types::DrapaResult;

/// Run a headless simulation from a scenario file.
pub fn simulate(scenario_path: &str, snapshot_path: Option<&str>) -> DrapaResult<()> {
    let scenario = Scenario::load(Path::new(scenario_path))?;
    let mut cloth = scenario.build_cloth()?;

    println!("drapa simulate");
    println!("──────────────");
    println!("Scenario:   {scenario_path}");
    println!(
        "Grid:       {}x{} @ {} ({} particles, {} springs)",
        cloth.width(),
        cloth.height(),
        cloth.grid().spacing(),
        cloth.particle_count(),
        cloth.springs().len(),
    );
    println!(
        "Run:        {} steps @ dt={:.5}s",
        scenario.run.steps, scenario.run.dt
    );
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink));

    let warmup_frames = scenario.cloth.warmup_frames;
    let mut total_wall = 0.0f64;
    let mut last_max_correction = 0.0f32;

    for frame in 0..scenario.run.steps {
        let sim_time = frame as f64 * scenario.run.dt as f64;
        bus.emit(SimulationEvent::new(frame, EventKind::StepBegin { sim_time }));

        for imp in scenario.impulses_at(frame) {
            let affected =
                cloth.radial_impulse(imp.center, imp.direction, imp.strength, imp.radius);
            bus.emit(SimulationEvent::new(
                frame,
                EventKind::ImpulseApplied { affected },
            ));
            tracing::info!(frame, affected, "impulse applied");
        }

        let stats = cloth.step(scenario.run.dt);
        total_wall += stats.wall_time;
        last_max_correction = stats.max_correction;

        bus.emit(SimulationEvent::new(
            frame,
            EventKind::StepEnd {
                wall_time: stats.wall_time,
                max_correction: stats.max_correction,
            },
        ));
        if warmup_frames > 0 && frame + 1 == warmup_frames {
            bus.emit(SimulationEvent::new(frame, EventKind::WarmupComplete));
        }
        bus.flush();
    }
    bus.finalize();

    let final_time = scenario.run.steps as f64 * scenario.run.dt as f64;
    let snapshot = StateSnapshot::capture(&cloth, final_time);
    let (min_y, max_y) = snapshot.y_range().unwrap_or((0.0, 0.0));

    println!("Steps:          {}", scenario.run.steps);
    println!("Wall time:      {:.3}s", total_wall);
    println!("Avg step:       {:.3}ms", total_wall / scenario.run.steps.max(1) as f64 * 1000.0);
    println!("Last max corr:  {:.6}", last_max_correction);
    println!("Y range:        [{:.4}, {:.4}]", min_y, max_y);

    if let Some(export) = &scenario.export {
        let opts = ObjExportOptions {
            uv_scale: export.uv_scale,
            mtl_name: export.mtl.clone(),
            texture: export.texture.clone(),
        };
        export_obj(&cloth, Path::new(&export.path), &opts)?;
        println!("OBJ written:    {}", export.path);
    }

    if let Some(path) = snapshot_path {
        std::fs::write(path, snapshot.to_bytes()?)?;
        println!("Snapshot:       {path}");
    }

    Ok(())
}

/// Validate a scenario file without running it.
pub fn validate(path: &str) -> DrapaResult<()> {
    println!("drapa validate");
    println!("──────────────");

    let scenario = Scenario::load(Path::new(path))?;
    // Grid parameters are only checked by construction; build and
    // discard so validation covers them too.
    scenario.build_cloth()?;

    println!(
        "OK: {}x{} grid, {} steps, {} impulse(s){}",
        scenario.grid.width,
        scenario.grid.height,
        scenario.run.steps,
        scenario.impulses.len(),
        if scenario.export.is_some() {
            ", export configured"
        } else {
            ""
        },
    );
    Ok(())
}

/// Inspect a binary state snapshot.
pub fn inspect(path: &str) -> DrapaResult<()> {
    println!("drapa inspect");
    println!("─────────────");

    let data = std::fs::read(path)?;
    let snapshot = StateSnapshot::from_bytes(&data)?;

    println!("Frame:       {}", snapshot.frame);
    println!("Sim time:    {:.4}s", snapshot.sim_time);
    println!("Particles:   {}", snapshot.particle_count);
    println!("Pinned:      {}", snapshot.pinned_count());
    if let Some((min_y, max_y)) = snapshot.y_range() {
        println!("Y range:     [{:.4}, {:.4}]", min_y, max_y);
    }

    Ok(())
}
