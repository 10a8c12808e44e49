use log::LevelFilter;
use simplelog::ColorChoice;
use simplelog::ConfigBuilder;
use simplelog::TermLogger;
use simplelog::TerminalMode;

/// Logs to stderr so stdout stays clean for the exported data.
pub fn init(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("wells")
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
