//! Registry Console - terminal front end
//!
//! Browse and administer a package registry from the shell. Each list
//! command shows one page plus a "Showing X-Y of Z" summary.
//!
//! ```sh
//! # Second page of users, 50 per page
//! registry-console users --page 2 --page-size 50
//!
//! # Releases of a package, newest first
//! registry-console releases pkg_01HXYZ
//!
//! # Validate config without contacting the backend
//! registry-console check
//! ```

mod pages;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use registry_console::config::AppConfig;
use registry_console::shared::AppError;
use registry_console::{default_config_path, init_tracing, ConsoleClient};

/// Package registry admin console.
#[derive(Parser, Debug)]
#[command(name = "registry-console", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "REGISTRY_CONSOLE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the backend base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token for the backend. Never written to disk.
    #[arg(long, env = "REGISTRY_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page to show (1-based, clamped to the last page).
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page (defaults to the configured page size).
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Registry totals and recent releases.
    Dashboard,
    /// Users (paginated by the backend).
    Users {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        tenant: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Releases of one package (paginated by the backend).
    Releases {
        package_id: String,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Packages, optionally within one project.
    Packages {
        #[arg(long)]
        project: Option<String>,
        /// Filter by name, description or kind.
        #[arg(long)]
        search: Option<String>,
        /// Keep reading search queries from stdin.
        #[arg(short, long)]
        interactive: bool,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Projects.
    Projects {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Tenants.
    Tenants {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Roles and their permissions.
    Roles,
    /// Client-access credentials.
    Access {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Share links.
    ShareLinks {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Validate the configuration file and exit.
    Check,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match load_error {
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if matches!(cli.command, Command::Check) {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    if let Some(url) = cli.base_url {
        info!("CLI override: base_url = {}", url);
        config.api.base_url = url;
    }

    if let Command::Check = cli.command {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Backend     : {}", config.api.base_url);
        println!("   Timeout     : {}s", config.api.timeout_secs);
        println!("   Page size   : {}", config.pagination.default_page_size);
        println!("   Page sizes  : {:?}", config.pagination.page_size_options());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let client = ConsoleClient::from_config(&config.api, &config.retry, cli.token)?;
    let pagination = &config.pagination;

    match cli.command {
        Command::Dashboard => pages::dashboard(&client).await?,
        Command::Users {
            search,
            role,
            tenant,
            paging,
        } => pages::users(&client, pagination, paging, search, role, tenant).await?,
        Command::Releases { package_id, paging } => {
            pages::releases(&client, pagination, paging, package_id).await?
        }
        Command::Packages {
            project,
            search,
            interactive,
            paging,
        } => pages::packages(&client, pagination, paging, project, search, interactive).await?,
        Command::Projects { paging } => pages::projects(&client, pagination, paging).await?,
        Command::Tenants { paging } => pages::tenants(&client, pagination, paging).await?,
        Command::Roles => pages::roles(&client).await?,
        Command::Access { paging } => pages::client_access(&client, pagination, paging).await?,
        Command::ShareLinks { paging } => pages::share_links(&client, pagination, paging).await?,
        Command::Check => unreachable!("handled above"),
    }

    Ok(())
}
