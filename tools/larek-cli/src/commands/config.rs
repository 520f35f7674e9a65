//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let api = &ctx.config.api;
    ctx.output.info("[api]");
    ctx.output.kv("origin", &api.origin);
    ctx.output.kv("api_path", &api.api_path);
    ctx.output.kv("cdn_path", &api.cdn_path);
    ctx.output.kv("timeout_ms", &api.timeout_ms.to_string());

    ctx.output.info("");
    ctx.output.kv("api url", &api.api_url());
    ctx.output.kv("cdn url", &api.cdn_url());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": path }));
        }
        Some(path) => println!("{}", path.display()),
        None if ctx.output.is_json() => {
            ctx.output.json(&serde_json::json!({ "path": null }));
        }
        None => ctx
            .output
            .info("No config file found; using defaults. Run `larek config init` to create one."),
    }
    Ok(())
}
