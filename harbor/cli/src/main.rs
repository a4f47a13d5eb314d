//! Harbor CLI - Command-line access to the Harbor registry API

use std::time::Duration;

use clap::{Parser, Subcommand};
use harbor_client::{
    Credentials, DEFAULT_TIMEOUT_SECS, Endpoint, HarborClient, HarborError, Params,
    RestMethod, Session, coerce_value,
};
use serde_json::Value;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "harbor", version)]
#[command(about = "Call the Harbor container registry API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API root, e.g. https://registry.example.com/api [env: HARBOR_URL]
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List operations
    Ops {
        /// Case-insensitive substring matched against id and path
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Show an operation's parameters
    Describe {
        /// Operation id, e.g. GetProjects
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Run an operation and print the JSON response
    Call {
        /// Operation id, e.g. GetProjects
        #[arg(value_name = "ID")]
        id: String,

        /// Parameter value (repeatable: -p projectId=1 -p pageSize=5)
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Extra query pair appended as given (repeatable)
        #[arg(long = "query", value_name = "NAME=VALUE", value_parser = parse_pair)]
        query: Vec<(String, String)>,

        /// JSON request body
        #[arg(long, value_name = "JSON")]
        body: Option<String>,

        /// Session id from `harbor login` [env: HARBOR_SESSION]
        #[arg(long, value_name = "ID")]
        session: Option<String>,
    },

    /// Log in and print the session id
    Login {
        /// Username or email [env: HARBOR_USERNAME]
        #[arg(long)]
        username: Option<String>,

        /// Password [env: HARBOR_PASSWORD]
        #[arg(long)]
        password: Option<String>,
    },

    /// End a session
    Logout {
        /// Session id [env: HARBOR_SESSION]
        #[arg(value_name = "SESSION")]
        session: Option<String>,
    },
}

/// Parses `name=value`. The value may itself contain `=`.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// An explicit flag wins over the environment.
fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(var).ok())
        .filter(|v| !v.trim().is_empty())
}

fn build_client(url: Option<String>, timeout: u64) -> CliResult<HarborClient> {
    let mut builder = HarborClient::builder().timeout(Duration::from_secs(timeout));
    if let Some(url) = flag_or_env(url, "HARBOR_URL") {
        builder = builder.domain(url);
    }
    Ok(builder.build()?)
}

fn matches_filter(endpoint: &Endpoint, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    endpoint.id.to_lowercase().contains(&filter) || endpoint.path.to_lowercase().contains(&filter)
}

fn print_ops(client: &HarborClient, filter: Option<&str>) {
    let endpoints: Vec<&Endpoint> = client
        .operations()
        .iter()
        .filter(|e| filter.is_none_or(|f| matches_filter(e, f)))
        .collect();
    let width = endpoints.iter().map(|e| e.id.len()).max().unwrap_or(0);
    for endpoint in endpoints {
        println!(
            "{:<width$}  {:<7} {}",
            endpoint.id,
            endpoint.method.to_string(),
            endpoint.path
        );
    }
}

/// How repeating a call affects the server.
fn method_effect(method: RestMethod) -> &'static str {
    if method.is_safe() {
        "read-only"
    } else if method.is_idempotent() {
        "idempotent write"
    } else {
        "non-idempotent write"
    }
}

fn print_description(endpoint: &Endpoint) {
    println!("{} {} {}", endpoint.id, endpoint.method, endpoint.path);
    println!("  {}", endpoint.description);
    println!("  ({})", method_effect(endpoint.method));
    if endpoint.params.is_empty() {
        println!("\nNo parameters.");
        return;
    }
    println!("\nParameters:");
    for param in &endpoint.params {
        let wire = if param.wire_name != param.name {
            format!(" (sent as {})", param.wire_name)
        } else {
            String::new()
        };
        let required = if param.required { "required" } else { "optional" };
        println!(
            "  {}{}: {} {}, {}",
            param.name, wire, param.location, param.kind, required
        );
        if !param.description.is_empty() {
            println!("      {}", param.description);
        }
    }
}

/// Turns command-line pairs into call parameters using the operation's kinds.
///
/// Names the operation does not know are passed as strings so the client can
/// report them.
fn build_params(
    endpoint: &Endpoint,
    pairs: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<String>,
) -> Result<Params, HarborError> {
    let mut params = Params::new();
    for (name, raw) in pairs {
        let value = match endpoint.param(&name) {
            Some(param) => coerce_value(param, &raw)?,
            None => Value::String(raw),
        };
        params.insert(name, value);
    }

    if let Some(raw) = body {
        let param = endpoint.body_param().ok_or_else(|| {
            HarborError::invalid_parameter("body", format!("{} takes no body", endpoint.id))
        })?;
        params.insert(param.name.clone(), coerce_value(param, &raw)?);
    }

    for (name, value) in query {
        params = params.query(name, value);
    }
    Ok(params)
}

async fn run(cli: Cli) -> CliResult<()> {
    let client = build_client(cli.url, cli.timeout)?;

    match cli.command {
        Commands::Ops { filter } => print_ops(&client, filter.as_deref()),

        Commands::Describe { id } => {
            let endpoint = client
                .endpoint(&id)
                .ok_or(HarborError::UnknownOperation { id })?;
            print_description(endpoint);
        }

        Commands::Call {
            id,
            params,
            query,
            body,
            session,
        } => {
            let endpoint = client
                .endpoint(&id)
                .ok_or_else(|| HarborError::UnknownOperation { id: id.clone() })?;
            let params = build_params(endpoint, params, query, body)?;

            let client = match flag_or_env(session, "HARBOR_SESSION") {
                Some(session) => client.with_session(&Session::new(session)),
                None => client,
            };

            let response = client.call(&id, params).await?;
            if !response.is_null() {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }

        Commands::Login { username, password } => {
            let username = flag_or_env(username, "HARBOR_USERNAME")
                .ok_or("No username: pass --username or set HARBOR_USERNAME")?;
            let password = flag_or_env(password, "HARBOR_PASSWORD")
                .ok_or("No password: pass --password or set HARBOR_PASSWORD")?;

            let session = client.login(&Credentials::new(username, password)).await?;
            println!("{}", session.id());
        }

        Commands::Logout { session } => {
            let session = flag_or_env(session, "HARBOR_SESSION")
                .ok_or("No session: pass SESSION or set HARBOR_SESSION")?;
            client.logout(&Session::new(session)).await?;
            tracing::info!("Logged out");
        }
    }

    Ok(())
}

/// Log target of this binary (`harbor`, from the `[[bin]]` name).
const CLI_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Filter directives for each `-v` level.
///
/// - 0: non-success statuses from Harbor
/// - 1: session events, logout confirmation, ignored parameters
/// - 2: adds reqwest connection handling
/// - 3+: trace for every crate
fn default_filter(verbose: u8) -> String {
    match verbose {
        0 => "warn".to_string(),
        1 => format!("warn,harbor_client=debug,{CLI_TARGET}=info"),
        2 => format!("warn,harbor_client=debug,{CLI_TARGET}=debug,reqwest=debug"),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose));

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
