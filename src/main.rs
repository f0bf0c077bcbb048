use anyhow::{Result, anyhow, bail};
use clap::Parser;
use cuetool::commands::{CheckCommand, Cli, Commands, RewriteCommand};
use cuetool::{CueParser, LineEnding, TextFile, validate};
use log::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(cmd) => check(cmd).await,
        Commands::Rewrite(cmd) => rewrite(cmd).await,
    }
}

async fn check(cmd: CheckCommand) -> Result<()> {
    let text = tokio::fs::read_to_string(&cmd.input).await?;
    let (sheet, parse_error) = CueParser::with_file(&text, TextFile::new(&cmd.input)).parse();

    if let Some(parse_error) = parse_error {
        error!("{}: {}", parse_error.subject(), parse_error.problem());
        info!("  remedy: {}", parse_error.remedy());
        bail!("{} does not parse", cmd.input.display());
    }

    let violations = validate(&sheet.session);
    if violations.is_empty() {
        info!("{}: OK", cmd.input.display());
        return Ok(());
    }
    for violation in &violations {
        warn!("{}: {}", violation.subject(), violation.problem());
        info!("  remedy: {}", violation.remedy());
    }
    bail!(
        "{} problem(s) found in {}",
        violations.len(),
        cmd.input.display()
    )
}

async fn rewrite(cmd: RewriteCommand) -> Result<()> {
    let text = tokio::fs::read_to_string(&cmd.input).await?;
    let (mut sheet, parse_error) = CueParser::with_file(&text, TextFile::new(&cmd.input)).parse();

    if let Some(parse_error) = parse_error {
        error!("{}: {}", parse_error.subject(), parse_error.problem());
        bail!("{} does not parse", cmd.input.display());
    }

    if let Some(style) = &cmd.line_ending {
        let ending = LineEnding::parse_name(style)
            .ok_or_else(|| anyhow!("unknown line ending style: {style}"))?;
        if let Some(file) = sheet.file.as_mut() {
            file.set_line_ending(ending);
        }
    }

    let output = cmd.output.unwrap_or(cmd.input);
    tokio::fs::write(&output, sheet.render()).await?;
    info!("wrote {}", output.display());
    Ok(())
}
