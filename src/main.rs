use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use drankspel::{db::Db, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// libSQL server address, or a local file path prefixed with `file:`.
    #[clap(env)]
    url: String,

    /// libSQL authentication token (remote databases only).
    #[arg(env, default_value = "")]
    auth_token: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Allowed cross-origin value; `*` permits any origin.
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    cors_origin: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,drankspel=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let db = Db::new(args.url, args.auth_token).await?;
    let app = drankspel::router(AppState { db })
        .layer(cors_layer(&args.cors_origin)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origin: &str) -> color_eyre::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(if origin == "*" {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origin.parse::<HeaderValue>()?)
    })
}
