use anyhow::Context;
use clap::Parser;
use labelkit::cli::{build_editor, describe_label, resolve_printer, Cli, Command, LabelArgs};
use labelkit::designer::font_manager;
use labelkit::{
    init_logging, Config, CupsDispatcher, LabelEditor, PrintService, BUILD_DATE, VERSION,
};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    debug!("labelkit {} (built {})", VERSION, BUILD_DATE);

    let cli = Cli::parse();
    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let service = PrintService::new(CupsDispatcher::new(
        config.preview_dir(),
        config.print.open_preview,
    ));

    match cli.command {
        Command::Printers => match service.list_printers().await {
            Ok(printers) => {
                for printer in printers {
                    println!("{}", printer);
                }
            }
            Err(e) => warn!("Failed to list printers: {}", e),
        },
        Command::Fonts => {
            for family in font_manager::list_font_families() {
                println!("{}", family);
            }
        }
        Command::Render { label, out } => {
            let editor = prepare(&label, &config)?;
            let captured = editor.capture()?;
            std::fs::write(&out, &captured.png)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("{}", out.display());
        }
        Command::Preview { label } => {
            let editor = prepare(&label, &config)?;
            println!("{}", service.preview(&editor).await?);
        }
        Command::Print { label, printer } => {
            let printer = resolve_printer(printer, &config)?;
            let editor = prepare(&label, &config)?;
            println!("{}", service.print(&editor, &printer).await?);
        }
    }

    Ok(())
}

fn prepare(args: &LabelArgs, config: &Config) -> anyhow::Result<LabelEditor> {
    let editor = build_editor(args, config)?;
    let units = args.units.unwrap_or(config.label.units);
    info!("Label {}", describe_label(&editor, units));
    Ok(editor)
}
