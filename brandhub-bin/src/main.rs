use brandhub_common::BHAppContext;
use brandhub_core::AuthService;
use brandhub_error::{BHError, BHResult};
use brandhub_models::{
    constants::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE_NAME},
    domain::prelude::{Brand, LoginRequest, LoginResponse, Page, RegisterRequest},
};
use brandhub_storage::{BHCacheProvider, BHDbManager};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::{env::current_dir, fs, path::PathBuf};
use tracing::info;
use uuid::Uuid;

/// BrandHub - brand directory
///
/// Publishes brand listings (owners, contacts, statistics, products with prices and images)
/// and lets anyone browse the open ones. Every write is authenticated through a login session.
#[derive(Parser)]
#[command(name = "brandhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BrandHub", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'brandhub.toml' in the current working directory is used
    /// when present.
    #[arg(short, long, env = CONFIG_ENV_VAR, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the schema and exit
    Migrate,
    /// Manage users
    #[command(subcommand)]
    User(UserCommand),
    /// Manage brands
    #[command(subcommand)]
    Brand(BrandCommand),
}

#[derive(Subcommand)]
enum UserCommand {
    /// Register a new user
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
    },
}

#[derive(Args)]
struct Credentials {
    /// Email of the acting user
    #[arg(long, env = "BH_EMAIL")]
    email: String,
    #[arg(long, env = "BH_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand)]
enum BrandCommand {
    /// Create a brand from a JSON file
    Create {
        #[command(flatten)]
        auth: Credentials,
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a brand with the contents of a JSON file
    Update {
        #[command(flatten)]
        auth: Credentials,
        #[arg(long)]
        id: i32,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a brand
    Delete {
        #[command(flatten)]
        auth: Credentials,
        #[arg(long)]
        id: i32,
    },
    /// Print one brand, by id or by name
    Show {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<i32>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the id of the brand with this name, or null
    Id {
        #[arg(long)]
        name: String,
    },
    /// List open brands
    Open {
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List brands created by the acting user
    Mine {
        #[command(flatten)]
        auth: Credentials,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> BHResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| BHError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx = BHAppContext::init::<BHDbManager, BHCacheProvider>(
        config_path.to_string_lossy().to_string(),
    )
    .await?;

    let result = run(&ctx, cli.command).await;
    ctx.shutdown().await?;
    result
}

async fn run(ctx: &BHAppContext, command: Commands) -> BHResult<()> {
    match command {
        Commands::Migrate => {
            info!("Schema is up to date");
            Ok(())
        }
        Commands::User(UserCommand::Register {
            email,
            password,
            name,
            surname,
        }) => {
            let id = ctx
                .auth()
                .register(RegisterRequest {
                    email,
                    password,
                    name,
                    surname,
                })
                .await?;
            print_json(&serde_json::json!({ "id": id }))
        }
        Commands::Brand(command) => run_brand(ctx, command).await,
    }
}

async fn run_brand(ctx: &BHAppContext, command: BrandCommand) -> BHResult<()> {
    let brands = ctx.brands();
    match command {
        BrandCommand::Create { auth, file } => {
            let mut brand = read_brand(&file)?;
            let (email, token) = sign_in(ctx, auth).await?;
            let outcome = brands.create(&mut brand, &email).await;
            ctx.auth().logout(&token).await?;
            let id = outcome?;
            print_json(&serde_json::json!({ "id": id }))
        }
        BrandCommand::Update { auth, id, file } => {
            let brand = read_brand(&file)?;
            let (email, token) = sign_in(ctx, auth).await?;
            let outcome = brands.update(id, &brand, &email).await;
            ctx.auth().logout(&token).await?;
            outcome?;
            print_json(&serde_json::json!({ "id": id }))
        }
        BrandCommand::Delete { auth, id } => {
            let (email, token) = sign_in(ctx, auth).await?;
            let outcome = brands.delete(id, &email).await;
            ctx.auth().logout(&token).await?;
            outcome?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        BrandCommand::Show { id, name } => {
            let brand = match (id, name) {
                (Some(id), _) => brands.get_by_id(id).await?,
                (None, Some(name)) => brands.get_by_name(&name).await?,
                (None, None) => return Err(BHError::from("either --id or --name is required")),
            };
            print_json(&brand)
        }
        BrandCommand::Id { name } => print_json(&brands.get_id_by_name(&name).await?),
        BrandCommand::Open { offset, limit } => {
            let open = brands
                .list_open()
                .await?
                .into_iter()
                .map(Brand::into_public)
                .collect();
            print_json(&Page::new(offset, limit).slice(open))
        }
        BrandCommand::Mine { auth } => {
            let (email, token) = sign_in(ctx, auth).await?;
            let outcome = brands.list_by_creator(&email).await;
            ctx.auth().logout(&token).await?;
            print_json(&outcome?)
        }
    }
}

/// Log in and resolve the session back to its email, as a bearer-token client would.
async fn sign_in(ctx: &BHAppContext, auth: Credentials) -> BHResult<(String, Uuid)> {
    let session = ctx
        .auth()
        .login(LoginRequest {
            email: auth.email,
            password: auth.password,
        })
        .await?;
    let response = LoginResponse::from(&session);
    let token = AuthService::parse_token(&response.token)?;
    let session = ctx.auth().authenticate(&token).await?;
    Ok((session.email, token))
}

fn read_brand(file: &PathBuf) -> BHResult<Brand> {
    let raw = fs::read_to_string(file)
        .map_err(|e| BHError::from(format!("Failed to read {}: {e}", file.display())))?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> BHResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
