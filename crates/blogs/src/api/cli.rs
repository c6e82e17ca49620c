#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3003")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BLOGS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Lifetime of issued login tokens, in hours
    #[arg(long, env = "BLOGS_TOKEN_TTL_HOURS", default_value = "24")]
    pub token_ttl_hours: i64,
}
