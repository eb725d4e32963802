use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck::Layout;
use crate::render::RenderPolicy;

#[derive(Parser)]
#[command(name = "pitchdeck")]
#[command(author, version, about)]
#[command(long_about = "A keyboard-driven pitch deck presenter.\n\n\
    Present a deck from a single YAML preset file or from a deck directory\n\
    holding one slide file per position.\n\n\
    Examples:\n  \
    pitchdeck startup-pitch.yaml          Launch presentation (fullscreen)\n  \
    pitchdeck my-deck/ --windowed         Launch a deck directory in a window\n  \
    pitchdeck new 3 \"Market Analysis\"     Scaffold slides/3/slide.yaml")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck file or deck directory to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Which slides are drawn each frame
    #[arg(long, value_enum, global = false)]
    pub render: Option<RenderArg>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new slide in a deck directory from a template
    New {
        /// Slide number (0-based folder name under slides/)
        number: usize,

        /// Slide title
        #[arg(default_value = "New Slide")]
        title: String,

        /// Slide layout
        #[arg(short, long, value_enum, default_value = "content")]
        layout: LayoutArg,

        /// Deck directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.render, idle.activity_ms)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Title,
    Content,
    Split,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Title => Layout::Title,
            LayoutArg::Content => Layout::Content,
            LayoutArg::Split => Layout::Split,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderArg {
    /// Lay out every slide each frame
    All,
    /// Only draw the visible slides
    Active,
}

impl From<RenderArg> for RenderPolicy {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::All => RenderPolicy::All,
            RenderArg::Active => RenderPolicy::ActiveOnly,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::New {
                number,
                title,
                layout,
                dir,
            }) => crate::commands::new::run(&dir, number, &title, layout.into()),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::app::run(
                        file,
                        self.windowed,
                        self.slide,
                        self.render.map(RenderPolicy::from),
                    )
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }

    /// Default log filter for the verbosity flags; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_present_flags() {
        let cli = Cli::try_parse_from([
            "pitchdeck",
            "deck.yaml",
            "--windowed",
            "--slide",
            "2",
            "--render",
            "active",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("deck.yaml")));
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(2));
        assert_eq!(cli.render.map(RenderPolicy::from), Some(RenderPolicy::ActiveOnly));
    }

    #[test]
    fn test_new_defaults() {
        let cli = Cli::try_parse_from(["pitchdeck", "new", "4"]).unwrap();
        match cli.command {
            Some(Commands::New {
                number,
                title,
                layout,
                dir,
            }) => {
                assert_eq!(number, 4);
                assert_eq!(title, "New Slide");
                assert_eq!(Layout::from(layout), Layout::Content);
                assert_eq!(dir, PathBuf::from("."));
            }
            _ => panic!("expected the new subcommand"),
        }
    }

    #[test]
    fn test_log_filter_from_flags() {
        let cli = Cli::try_parse_from(["pitchdeck", "-vv", "version"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
        let cli = Cli::try_parse_from(["pitchdeck", "--quiet", "-v", "version"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
        let cli = Cli::try_parse_from(["pitchdeck", "version"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
    }
}
