//! Current Mars time at a landed mission.
//!
//! ```text
//! cargo run --example marsnow                     # InSight, now
//! cargo run --example marsnow -- missions.toml Perseverance
//! RUST_LOG=debug cargo run --example marsnow      # show LMST → UTC refinement
//! ```

use chrono::Utc;
use marstime::{config, utc, LmstFormat, MarsTimeConverter, MissionConfig};

fn main() -> marstime::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mission = match (args.next(), args.next()) {
        (Some(path), Some(name)) => config::load_mission(path, &name)?,
        _ => MissionConfig::insight(),
    };
    let conv = MarsTimeConverter::new(&mission);

    let now = Utc::now();
    let sol = conv.get_sol(now)?;
    let span = conv.sol_span(sol)?;

    println!("{} ({})", mission.name(), mission.landing_site().unwrap_or("unknown site"));
    println!("UTC  : {}", utc::format_utc(&now));
    println!("LMST : {}", conv.utc_to_lmst(Some(now), LmstFormat::Date)?);
    println!("LTST : {}", conv.utc_to_ltst(Some(now), LmstFormat::Date)?);
    println!(
        "Sol {sol} runs from {} to {}",
        utc::format_utc(&span.start),
        utc::format_utc(&span.end)
    );
    println!();
    println!("{}", conv.report(now)?);
    Ok(())
}
