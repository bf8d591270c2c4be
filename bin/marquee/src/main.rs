//! Marquee CLI
//!
//! Renders landing theme documents from a content file and prints them.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Marquee.
#[derive(Parser)]
#[command(
    name = "marquee",
    version,
    about = "Render landing pages from structured content"
)]
struct Cli {
    /// Path to the content file (TOML or YAML)
    #[arg(short, long, default_value = "content.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Print the landing page
    Index,
    /// Print a generic content page
    Page {
        /// Page title
        #[arg(short, long)]
        title: String,
        /// Page description
        #[arg(short, long, default_value = "")]
        description: String,
        /// File holding the pre-rendered HTML body
        #[arg(short, long)]
        body: std::path::PathBuf,
    },
    /// Validate content against the theme
    Check {
        /// Fail when the landing defines no sections
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    marquee::init_tracing(cli.verbose);

    match cli.command {
        Commands::Index => {
            marquee::cmd::index::run(&cli.config)?;
        }
        Commands::Page {
            title,
            description,
            body,
        } => {
            marquee::cmd::page::run(&cli.config, &title, &description, &body)?;
        }
        Commands::Check { strict } => {
            marquee::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_index_command_parsing() {
        let args = ["marquee", "index"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("content.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Index));
    }

    #[test]
    fn test_cli_page_command_parsing() {
        let args = [
            "marquee",
            "page",
            "--title",
            "About",
            "--description",
            "Who we are",
            "--body",
            "about.html",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Page {
                title,
                description,
                body,
            } => {
                assert_eq!(title, "About");
                assert_eq!(description, "Who we are");
                assert_eq!(body, std::path::PathBuf::from("about.html"));
            }
            _ => panic!("Expected Page command"),
        }
    }

    #[test]
    fn test_cli_page_description_defaults_empty() {
        let args = ["marquee", "page", "-t", "About", "-b", "about.html"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Page { description, .. } => assert!(description.is_empty()),
            _ => panic!("Expected Page command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["marquee", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["marquee", "-vvv", "index"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["marquee", "--config", "site.yaml", "index"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.yaml"));
    }
}
