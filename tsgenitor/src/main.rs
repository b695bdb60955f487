use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsgenitor::{ApiConfig, generate_file, generate_string};

#[derive(Parser, Debug)]
#[command(name = "tsgenitor")]
#[command(about = "Generates TypeScript request functions from a Swagger 2.0 document", long_about = None)]
struct Args {
    /// Swagger 2.0 document (YAML or JSON)
    input: PathBuf,

    /// Output file, the module is written to stdout if omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Include `in: header` parameters in the generated requests
    #[arg(long)]
    header_parameters: bool,

    /// Module the model classes are imported from
    #[arg(long, default_value = "./models")]
    models_module: String,

    /// Module providing the request runtime
    #[arg(long, default_value = "./runtime")]
    runtime_module: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ApiConfig::new_from_path(args.input.to_string_lossy())
        .with_header_parameters(args.header_parameters)
        .with_models_module(args.models_module)
        .with_runtime_module(args.runtime_module);

    match &args.output {
        Some(output) => generate_file(&config, output)?,
        None => print!("{}", generate_string(&config)?),
    }

    Ok(())
}
