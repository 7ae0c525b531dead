use std::path::PathBuf;

use clap::Parser;
use gs_config::{ConfigError, GenScriptConfig};

/// Command-line flags for the `genscript` server binary.
#[derive(Debug, Parser)]
#[command(name = "genscript", version, about = "GenScript - AI idea generation API")]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Extra TOML config file, layered above ./genscript.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply flag overrides on top of loaded configuration and re-check it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a flag sets an out-of-range
    /// value such as `--port 0`.
    pub fn apply(&self, config: &mut GenScriptConfig) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::Cli;
    use gs_config::{ConfigError, GenScriptConfig};

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["genscript", "--host", "127.0.0.1", "--port", "9001"])
            .expect("cli should parse");
        let mut config = GenScriptConfig::default();
        cli.apply(&mut config).unwrap();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::try_parse_from(["genscript"]).expect("cli should parse");
        let mut config = GenScriptConfig::default();
        cli.apply(&mut config).unwrap();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8000");
        assert!(cli.config.is_none());
    }

    #[test]
    fn zero_port_flag_is_rejected() {
        let cli = Cli::try_parse_from(["genscript", "--port", "0"]).expect("cli should parse");
        let mut config = GenScriptConfig::default();
        let err = cli.apply(&mut config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "server.port"
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["genscript", "--quiet", "--verbose"]).is_err());
    }
}
