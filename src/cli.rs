use clap::Parser;
use std::ffi::OsString;

pub const DEFAULT_TEMPLATE: &str = "base";
pub const DEFAULT_TARGET: &str = ".";

#[derive(Parser, Debug)]
#[command(
    version,
    name = "claude-parallel",
    about = "Install Claude Parallel templates into a project directory"
)]
pub struct Cli {
    /// Template to install
    #[arg(
        value_name = "TEMPLATE",
        default_value = DEFAULT_TEMPLATE,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub template: OsString,

    /// Directory to install into (defaults to the current directory)
    #[arg(
        value_name = "TARGET",
        default_value = DEFAULT_TARGET,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub target: OsString,

    /// Anything past TARGET is accepted and ignored
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub extra: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_when_no_args() {
        let cli = Cli::try_parse_from(["claude-parallel"]).unwrap();
        assert_eq!(cli.template, "base");
        assert_eq!(cli.target, ".");
    }

    #[test]
    fn positionals_forwarded_in_order() {
        let cli = Cli::try_parse_from(["claude-parallel", "mytemplate", "/tmp/out"]).unwrap();
        assert_eq!(cli.template, "mytemplate");
        assert_eq!(cli.target, "/tmp/out");
    }

    #[test]
    fn template_only_keeps_default_target() {
        let cli = Cli::try_parse_from(["claude-parallel", "rust"]).unwrap();
        assert_eq!(cli.template, "rust");
        assert_eq!(cli.target, ".");
    }

    #[test]
    fn values_with_spaces_are_kept_verbatim() {
        let cli =
            Cli::try_parse_from(["claude-parallel", "my template", "/tmp/with space/$HOME"]).unwrap();
        assert_eq!(cli.template, "my template");
        assert_eq!(cli.target, "/tmp/with space/$HOME");
    }

    #[test]
    fn extra_args_are_accepted_and_dropped() {
        let cli = Cli::try_parse_from(["claude-parallel", "a", "b", "c", "--d"]).unwrap();
        assert_eq!(cli.template, "a");
        assert_eq!(cli.target, "b");
        assert_eq!(cli.extra, vec![OsString::from("c"), OsString::from("--d")]);
    }

    #[test]
    fn leading_dash_values_are_not_flags() {
        let cli = Cli::try_parse_from(["claude-parallel", "-x"]).unwrap();
        assert_eq!(cli.template, "-x");
        assert_eq!(cli.target, ".");

        let cli = Cli::try_parse_from(["claude-parallel", "--force", "-out"]).unwrap();
        assert_eq!(cli.template, "--force");
        assert_eq!(cli.target, "-out");
    }

    #[test]
    fn help_is_still_a_flag() {
        let err = Cli::try_parse_from(["claude-parallel", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_target_is_kept_as_bytes() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let target = OsString::from_vec(b"/tmp/out\xff".to_vec());
        let cli = Cli::try_parse_from([
            OsString::from("claude-parallel"),
            OsString::from("base"),
            target.clone(),
        ])
        .unwrap();
        assert_eq!(cli.template, "base");
        assert_eq!(cli.target.as_bytes(), b"/tmp/out\xff");
        assert_eq!(cli.target, target);
    }
}
