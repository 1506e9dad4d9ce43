//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use explainer::{AuthFailurePolicy, ExplainerConfig, USAGE_EXIT_CODE};
use std::path::PathBuf;

/// Explainer - turn a topic into a narration script and animation blueprint
#[derive(Parser, Debug)]
#[command(name = "explainer")]
#[command(about = "Turn a topic into a narration script and animation blueprint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Topic to explain
    #[arg(default_value = "How Web Sockets Work")]
    pub topic: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Never call the provider; answer both stages from canned mock data
    #[arg(long)]
    pub offline: bool,

    /// Directory the artifacts are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extra configuration file layered above the user configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to do when the provider rejects the API key
    #[arg(long, value_enum)]
    pub on_auth_failure: Option<AuthPolicyArg>,

    /// Emit JSON-formatted logs
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut ExplainerConfig) {
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(policy) = self.on_auth_failure {
            config.provider.on_auth_failure = policy.into();
        }
    }
}

/// Exit code for a command line clap could not turn into a [`Cli`].
///
/// `--help` and `--version` are reported through the same error type and exit
/// with zero.
pub fn parse_error_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() { USAGE_EXIT_CODE } else { 0 }
}

/// Authentication failure policy as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPolicyArg {
    /// Serve canned mock data
    FallbackToMock,
    /// Exit with the authentication failure
    Propagate,
}

impl From<AuthPolicyArg> for AuthFailurePolicy {
    fn from(arg: AuthPolicyArg) -> Self {
        match arg {
            AuthPolicyArg::FallbackToMock => AuthFailurePolicy::FallbackToMock,
            AuthPolicyArg::Propagate => AuthFailurePolicy::Propagate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn topic_defaults_to_web_sockets() {
        let cli = Cli::parse_from(["explainer"]);
        assert_eq!(cli.topic, "How Web Sockets Work");
        assert!(!cli.offline);
        assert!(cli.on_auth_failure.is_none());
    }

    #[test]
    fn flags_override_configuration() {
        let cli = Cli::parse_from([
            "explainer",
            "Photosynthesis",
            "--offline",
            "--output-dir",
            "out",
            "--on-auth-failure",
            "propagate",
            "-v",
        ]);
        assert_eq!(cli.topic, "Photosynthesis");
        assert!(cli.offline && cli.verbose);

        let mut config = ExplainerConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.provider.on_auth_failure, AuthFailurePolicy::Propagate);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["explainer", "--on-auth-failure", "retry"]).is_err());
        let cli = Cli::parse_from(["explainer", "--on-auth-failure", "fallback-to-mock"]);
        assert_eq!(cli.on_auth_failure, Some(AuthPolicyArg::FallbackToMock));
    }

    #[test]
    fn bad_flag_exits_with_usage_code() {
        let error = Cli::try_parse_from(["explainer", "--on-auth-failure", "retry"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&error), USAGE_EXIT_CODE);

        let error = Cli::try_parse_from(["explainer", "--no-such-flag"]).unwrap_err();
        assert_eq!(parse_error_exit_code(&error), USAGE_EXIT_CODE);
    }

    #[test]
    fn help_and_version_exit_successfully() {
        for flag in ["--help", "--version"] {
            let error = Cli::try_parse_from(["explainer", flag]).unwrap_err();
            assert_eq!(parse_error_exit_code(&error), 0, "{flag}");
        }
    }

    #[test]
    fn usage_code_is_not_a_config_failure() {
        let error = Cli::try_parse_from(["explainer", "--no-such-flag"]).unwrap_err();
        assert_ne!(
            parse_error_exit_code(&error),
            explainer::ErrorCategory::Config.exit_code()
        );
    }
}
