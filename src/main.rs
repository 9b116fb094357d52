use bankbook::cli::{self, Cli};
use bankbook::config::config::Config;
use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "bankbook=info");
    }
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::init();

    if let Err(e) = cli::run(cli, &config).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
