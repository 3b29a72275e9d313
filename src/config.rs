//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{TrackerState, PRESET_COUNTERS};

fn default_presets() -> Vec<String> {
    PRESET_COUNTERS.iter().map(|p| p.to_string()).collect()
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "life-tracker")]
#[command(about = "A state-managed HTTP server for a tabletop life and counter tracker")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Start in commander mode (40 life, commander damage tracking)
    #[arg(short, long)]
    pub commander: bool,

    /// Starting life outside commander mode
    #[arg(short, long)]
    pub starting_life: Option<String>,

    /// Counters offered by the settings dropdown (comma separated)
    #[arg(long = "preset", value_delimiter = ',', default_values_t = default_presets())]
    pub presets: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the tracker the server starts with
    pub fn initial_tracker(&self) -> TrackerState {
        let tracker = TrackerState::new(self.commander);
        match &self.starting_life {
            Some(raw) => tracker.set_starting_value(raw),
            None => tracker,
        }
    }

    /// Preset names with blanks and duplicates removed
    pub fn presets(&self) -> Vec<String> {
        let mut presets: Vec<String> = Vec::new();
        for preset in self.presets.iter().map(|p| p.trim()) {
            if !preset.is_empty() && !presets.iter().any(|p| p == preset) {
                presets.push(preset.to_string());
            }
        }
        presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("life-tracker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.presets(), default_presets());
        assert_eq!(config.initial_tracker(), TrackerState::default());
    }

    #[test]
    fn starting_life_and_commander_flags() {
        let config = parse(&["--starting-life", "30"]);
        assert_eq!(config.initial_tracker().life, 30);

        let config = parse(&["--commander", "--starting-life", "30"]);
        assert_eq!(config.initial_tracker().life, 40);
    }

    #[test]
    fn preset_list_is_comma_separated() {
        let config = parse(&["--preset", "Poison, Treasure, ,Poison", "-v"]);
        assert_eq!(config.presets(), vec!["Poison".to_string(), "Treasure".to_string()]);
        assert_eq!(config.log_level(), "debug");
    }
}
