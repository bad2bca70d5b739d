use anyhow::Result;
use clap::Parser;
use macveil_core::{dispatch_command, logs_enabled, render_text, Cli, MacveilConfig, OutputFormat};
use serde_json::{json, Value};

fn main() {
    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli.output_format
    };
    if let Err(err) = run(cli, format) {
        emit_error(format, &err);
        std::process::exit(1);
    }
}

fn run(cli: Cli, output_format: OutputFormat) -> Result<()> {
    let config = MacveilConfig::load(cli.config.as_deref())?;
    if logs_enabled() && config.logging.enabled {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
        )
        .init();
    }
    let (message, data) = dispatch_command(&config, cli.command)?;
    emit_success(output_format, message, data)
}

fn emit_success(format: OutputFormat, message: String, data: Value) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "status": "ok",
                "message": message,
                "data": data,
            });
            println!("{payload}");
        }
        OutputFormat::Text => println!("{}", render_text(&message, &data)),
    }
    Ok(())
}

fn emit_error(format: OutputFormat, err: &anyhow::Error) {
    let details: Vec<String> = err.chain().map(ToString::to_string).collect();
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "status": "error",
                "message": err.to_string(),
                "details": details,
                "data": Value::Null,
            });
            println!("{payload}");
        }
        OutputFormat::Text => {
            eprintln!("macveil: {err}");
            for cause in details.iter().skip(1) {
                eprintln!("  caused by: {cause}");
            }
        }
    }
}
