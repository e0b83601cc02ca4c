use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use clap::Subcommand;
use csb_core::blend;
use csb_core::document::parse_import;
use csb_core::wheel;
use csb_core::AppAction;
use csb_core::ExportKind;
use csb_core::RuntimeAction;
use csb_core::ThemeKey;
use csb_export::build_payload;
use csb_export::DryRunExportSink;
use csb_export::ExportRequest;
use csb_export::ExportSink;
use csb_export::FileExportSink;

mod logging;
mod session;
mod settings;
mod ui;

use logging::LogConfig;
use session::Session;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "csb", author, version, about = "CliftonStrengths soundboard and dominant themes wheel", long_about = None)]
struct Cli {
    /// Config file. Defaults to <config dir>/csb/config.toml when present.
    #[arg(long, global = true, env = "CSB_CONFIG")]
    config: Option<PathBuf>,
    /// Directory holding persisted state.
    #[arg(long, global = true, env = "CSB_DATA_DIR")]
    data_dir: Option<PathBuf>,
    /// Log at info level on stderr for one-shot commands.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal UI (default).
    Tui,
    /// Write the soundboard selection and levels as JSON.
    Export(OutputArgs),
    /// Replace the soundboard from a JSON export.
    Import { file: PathBuf },
    /// Write the dominant themes wheel as SVG.
    Snapshot(OutputArgs),
    /// Write reflection notes as a Markdown report.
    Report(OutputArgs),
    /// Print the blend narrative for two themes.
    Blend {
        a: ThemeKey,
        b: ThemeKey,
        /// Show the reflection view instead of the blend narrative.
        #[arg(long)]
        reflect: bool,
    },
    /// Print the wedge layout of the saved wheel.
    Layout {
        /// Emit SVG path data for every slot, filled or not.
        #[arg(long)]
        all_slots: bool,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output file. `-` writes to stdout.
    #[arg(long, short)]
    out: Option<PathBuf>,
    /// Render without writing.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);
    let settings = settings::load_settings(cli.config.as_deref(), cli.data_dir.as_deref())
        .context("failed to load settings")?;

    let tui_mode = matches!(command, Command::Tui);
    let log_file = logging::init_logging(LogConfig {
        verbose: cli.verbose,
        tui_mode,
        log_dir: &settings.data_dir,
    })?;
    tracing::info!(
        config = ?settings.source,
        data_dir = %settings.data_dir.display(),
        log_file = ?log_file,
        "starting csb"
    );

    match command {
        Command::Tui => {
            let session = Session::open(&settings)?;
            ui::run(session, &settings)
        }
        Command::Export(args) => export(&settings, ExportKind::SoundboardJson, args),
        Command::Snapshot(args) => export(&settings, ExportKind::WheelSnapshot, args),
        Command::Report(args) => export(&settings, ExportKind::NotesReport, args),
        Command::Import { file } => import(&settings, &file),
        Command::Blend { a, b, reflect } => print_blend(a, b, reflect),
        Command::Layout { all_slots } => print_layout(&settings, all_slots),
    }
}

fn export(settings: &Settings, kind: ExportKind, args: OutputArgs) -> Result<()> {
    let session = Session::open(settings)?;
    let payload = build_payload(&session.state, kind, Utc::now())
        .with_context(|| format!("cannot export {}", kind.label()))?;

    if args.out.as_deref() == Some(Path::new("-")) {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(payload.contents().as_bytes())?;
        return Ok(());
    }

    let target = args
        .out
        .unwrap_or_else(|| PathBuf::from(kind.default_file_name()));
    let request = ExportRequest {
        export_id: 1,
        kind,
        target,
    };
    let result = if args.dry_run {
        DryRunExportSink.write(&request, &payload)
    } else {
        FileExportSink.write(&request, &payload)
    };
    for line in &result.logs {
        println!("{line}");
    }
    if result.status == csb_export::ExportStatus::Failed {
        bail!("{} export failed", kind.label());
    }
    Ok(())
}

fn import(settings: &Settings, file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let imported =
        parse_import(&contents).with_context(|| format!("cannot import {}", file.display()))?;

    let mut session = Session::open(settings)?;
    session.dispatch(AppAction::Runtime(RuntimeAction::ApplyImport {
        source: file.display().to_string(),
        contents,
    }));
    if let Some(entry) = session.state.activity.last() {
        println!("{}", entry.message);
    }
    let names: Vec<String> = session
        .state
        .soundboard
        .selection
        .keys()
        .into_iter()
        .map(|key| format!("{} ({:.0})", key.name(), session.state.soundboard.level(key)))
        .collect();
    println!("Soundboard: {}", names.join(", "));
    tracing::debug!(skipped = imported.skipped, "import applied");
    Ok(())
}

fn print_blend(a: ThemeKey, b: ThemeKey, reflect: bool) -> Result<()> {
    if a == b {
        bail!("pick two different themes");
    }
    if reflect {
        let view = blend::reflect(a, b);
        println!("{}\n", view.title);
        println!("{}: {}", view.left.0, view.left.1);
        println!("{}: {}\n", view.right.0, view.right.1);
        for (idx, question) in view.questions.iter().enumerate() {
            println!("{}. {question}", idx + 1);
        }
    } else {
        print!("{}", blend::blend(a, b).to_plain_text());
    }
    Ok(())
}

fn print_layout(settings: &Settings, all_slots: bool) -> Result<()> {
    let session = Session::open(settings)?;
    let geometry = &session.state.wheel_geometry;
    let slots = session.state.wheel.selection.slots();
    let center = geometry.center();

    for slot in 0..geometry.slots {
        let key = slots.get(slot).copied().flatten();
        if key.is_none() && !all_slots {
            continue;
        }
        let (start, end) = geometry.slot_angles(slot);
        let name = key.map_or_else(|| "(empty)".to_string(), |key| key.trademarked_name());
        println!("#{:<2} {start:>6.1}..{end:>6.1}  {name}", slot + 1);
        let contour = wheel::wedge_contour(center, geometry.r_outer, geometry.r_inner, start, end);
        println!("    {}", contour.to_svg_path());
    }
    if !all_slots && session.state.wheel.selection.is_empty() {
        println!("No themes placed yet. Pass --all-slots to see the empty wheel.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["csb"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn blend_parses_theme_keys() {
        let cli = Cli::try_parse_from(["csb", "blend", "woo", "Focus", "--reflect"]).expect("parse");
        match cli.command {
            Some(Command::Blend { a, b, reflect }) => {
                assert_eq!((a, b, reflect), (ThemeKey::Woo, ThemeKey::Focus, true));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["csb", "blend", "woo", "nope"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "csb",
            "snapshot",
            "--out",
            "wheel.svg",
            "--data-dir",
            "/tmp/state",
            "-v",
        ])
        .expect("parse");
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/state")));
        match cli.command {
            Some(Command::Snapshot(args)) => {
                assert_eq!(args.out, Some(PathBuf::from("wheel.svg")));
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
