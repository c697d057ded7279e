//! Logger configuration for the Blueprint application.

/// Initializes the global logger; `verbose` raises the filter from info to
/// debug so loader and scaffolder traces become visible.
pub fn init_logger(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };

    env_logger::Builder::new().filter_level(level).init();
}
