pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "venv-mgr",
    version,
    about = "A manager for named Python virtual environments and their packages",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum EnvCommands {
    /// Create a named virtual environment
    New {
        /// Environment name
        name: String,

        /// Interpreter used to build the environment (default: from config)
        #[arg(long)]
        python: Option<String>,
    },

    /// List named virtual environments
    List,

    /// Delete a named virtual environment
    Remove {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Environment name
        name: String,
    },

    /// Print the path of a named virtual environment
    Locate {
        /// Environment name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install packages (or a requirements file) into an environment
    Install {
        /// Target environment (default: the active environment)
        #[arg(short, long)]
        env: Option<String>,

        /// Packages to install; with none given, a requirements file in the
        /// current directory is used
        packages: Vec<String>,
    },

    /// Uninstall packages (or a requirements file) from an environment
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Target environment (default: the active environment)
        #[arg(short, long)]
        env: Option<String>,

        /// Packages to uninstall; with none given, a requirements file in
        /// the current directory is used
        packages: Vec<String>,
    },

    /// List packages installed in an environment
    List {
        /// Target environment (default: the active environment)
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Run a command from an environment's bin directory
    Run {
        /// Target environment (default: the active environment)
        #[arg(short, long)]
        env: Option<String>,

        /// Command to run
        command: String,

        /// Arguments to pass to the command
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Enter a shell with an environment activated
    Shell {
        /// Target environment (default: the active environment)
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Manage named virtual environments
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },

    /// Check environment and dependencies
    Doctor,
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    match cli.command {
        Commands::Install { env, packages } => commands::install::execute(env, packages).await,

        Commands::Uninstall { yes, env, packages } => {
            commands::uninstall::execute(yes, env, packages).await
        }

        Commands::List { env } => commands::list::execute(env).await,

        Commands::Run { env, command, args } => commands::run::execute(env, command, args).await,

        Commands::Shell { env } => commands::shell::execute(env).await,

        Commands::Env { command } => match command {
            EnvCommands::New { name, python } => commands::env::new(name, python).await,
            EnvCommands::List => commands::env::list().await,
            EnvCommands::Remove { yes, name } => commands::env::remove(yes, name).await,
            EnvCommands::Locate { name } => commands::env::locate(name).await,
        },

        Commands::Doctor => commands::doctor::execute().await,
    }
}
