use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use console_session::config::{load_config, schema_json};
use console_session::models::{MenuItem, UserProfile};
use console_session::session::{SessionStore, TracingNavigator};
use console_session::startup::build_session;
use console_session::utils::logger::init_logging;

/// Sign in to the admin console and inspect the session.
#[derive(Parser, Debug)]
#[command(name = "console-session", version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", default_value = "./config.yaml")]
    config: PathBuf,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    schema: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the resulting session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        /// Where to go after signing in
        #[arg(long)]
        redirect: Option<String>,
    },
    /// Re-authenticate with a token (the stored one by default)
    Refresh {
        #[arg(long)]
        token: Option<String>,
    },
    /// Print the menus of the current session
    Menus,
    /// Sign out
    Logout {
        #[arg(long)]
        redirect: Option<String>,
    },
}

#[derive(Serialize)]
struct SessionView {
    authenticated: bool,
    user: UserProfile,
    main_menu: Vec<MenuItem>,
    side_menu: Vec<MenuItem>,
    location: Option<String>,
}

fn view(store: &SessionStore, navigator: &TracingNavigator) -> SessionView {
    SessionView {
        authenticated: store.is_authenticated(),
        user: store.user_info(),
        main_menu: store.main_menu(),
        side_menu: store.side_menu(),
        location: navigator.current(),
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.schema {
        println!("{}", schema_json()?);
        return Ok(());
    }

    let config = load_config(&cli.config)?;
    init_logging(&config.logging)?;

    let navigator = Arc::new(TracingNavigator::new());
    let store = build_session(&config, navigator.clone())?;

    match cli.command {
        Some(Command::Login {
            username,
            password,
            redirect,
        }) => {
            let body = json!({ "username": username, "password": password });
            store.login(&body, redirect.as_deref()).await?;
        }
        Some(Command::Refresh { token }) => {
            let token = match token {
                Some(token) => token,
                None => store.token()?.ok_or("no stored session token, log in first")?,
            };
            store.refresh(&token).await?;
        }
        Some(Command::Menus) | None => match store.token()? {
            Some(token) => store.refresh(&token).await?,
            None => return Err("not signed in".into()),
        },
        Some(Command::Logout { redirect }) => {
            store.logout(redirect.as_deref())?;
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&view(&store, &navigator))?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
