use anyhow::Result;
use hpr_zones::run_analysis;
use hpr_zones::utils::time_utils::today_utc;

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("🚀 HPR zone analysis starting ({})", today_utc());

    // B. Fit, project and classify
    let report = run_analysis()?;

    // C. Print
    println!("{report}");
    log::info!("✅ Analysis complete");
    Ok(())
}
