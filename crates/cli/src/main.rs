mod commands;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use folio_core::ThemePreference;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Personal blog and project portfolio toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site directory
    Init {
        /// Path to create site directory
        path: PathBuf,

        /// GitHub account that owns the listed projects
        #[arg(long)]
        github_username: Option<String>,

        /// Site title
        #[arg(long)]
        title: Option<String>,
    },

    /// Validate site.toml and project content
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// Print the star count of a GitHub repository
    Stars {
        /// Repository as owner/name
        repo: String,

        /// GitHub API base URL
        #[arg(long, default_value = folio_core::DEFAULT_API_BASE)]
        api_base: String,
    },

    /// List projects sorted by stars
    Projects {
        /// Path to site directory
        path: PathBuf,
    },

    /// Build the projects section
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show or change the persisted theme
    Theme {
        /// Theme to select (light, dark, eighties)
        theme: Option<ThemePreference>,

        /// Override the detected system appearance
        #[arg(long, value_enum)]
        system: Option<SystemAppearance>,

        /// Preferences file (default: ~/.folio/preferences.toml)
        #[arg(long)]
        storage: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SystemAppearance {
    Light,
    Dark,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            path,
            github_username,
            title,
        } => commands::init::run(path, github_username, title).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Stars { repo, api_base } => commands::stars::run(repo, api_base).await,
        Command::Projects { path } => commands::projects::run(path).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Theme {
            theme,
            system,
            storage,
        } => commands::theme::run(theme, system, storage),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}
