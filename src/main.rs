use clap::Parser;
use timesrv::{
    app::App,
    init::{logging, settings::Settings},
};

/// Time service: current UTC time and caller IP as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = Settings::new(args.config_file)?;
    logging::setup(settings.log_level);
    settings.print();

    let address = settings.socket_addr()?;

    App::new().serve(address).await?;

    Ok(())
}
