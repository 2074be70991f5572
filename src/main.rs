use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use argh::FromArgs;
use plotpad::processing::statistics::summary_report;
use plotpad::state::app_state::{AppState, Snapshot, VERSION};
use plotpad::state::settings::{OutputFormat, Settings};

#[derive(FromArgs, Debug, Default)]
/// Plot a list of numbers: parse it into labeled points and summarize it.
/// Values may be separated by commas and/or whitespace; anything that is
/// not a number is ignored.
struct Args {
    /// numbers to plot, e.g. `5, 12, 8` (put `--` before a leading negative number)
    #[argh(positional)]
    values: Vec<String>,

    /// read the number list from standard input
    #[argh(switch)]
    stdin: bool,

    /// use the sample series instead of any other input
    #[argh(switch)]
    sample: bool,

    /// print JSON instead of text
    #[argh(switch, short = 'j')]
    json: bool,

    /// path to a JSON settings file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// load the input from a saved project file
    #[argh(option, short = 'p')]
    project: Option<PathBuf>,

    /// save the resulting state as a project file
    #[argh(option, short = 's')]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Args = argh::from_env();
    tracing::debug!("plotpad {VERSION}");

    let settings = match &args.config {
        Some(path) => Settings::load(path).map_err(anyhow::Error::msg)?,
        None => Settings::default(),
    };

    let (state, output) = run(&args, &settings, read_stdin)?;
    print!("{output}");

    if let Some(path) = &args.save {
        state.save(path).map_err(anyhow::Error::msg)?;
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read standard input")?;
    Ok(input)
}

/// Build the state from the arguments and render it. `stdin` is only called
/// when the input comes from standard input.
fn run<F>(args: &Args, settings: &Settings, stdin: F) -> Result<(AppState, String)>
where
    F: FnOnce() -> Result<String>,
{
    let state = build_state(args, settings, stdin)?;
    let snapshot = state.snapshot();
    let format = output_format(args, settings);
    tracing::debug!(format = format.label(), points = snapshot.count, "rendering output");
    let output = render(&snapshot, format)?;
    Ok((state, output))
}

fn output_format(args: &Args, settings: &Settings) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else {
        settings.format
    }
}

fn build_state<F>(args: &Args, settings: &Settings, stdin: F) -> Result<AppState>
where
    F: FnOnce() -> Result<String>,
{
    let mut state = match &args.project {
        Some(path) => AppState::load(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to open project {}", path.display()))?,
        None => AppState::with_sample(&settings.sample_series),
    };

    if args.sample {
        state.reset_to_sample();
    } else if !args.values.is_empty() {
        state.set_input(args.values.join(" "));
    } else if args.stdin {
        state.set_input(stdin()?);
    }

    Ok(state)
}

fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(snapshot).context("Failed to serialize output")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = String::from("Series:\n");
            if snapshot.points.is_empty() {
                out.push_str("  (no values)\n");
            }
            for point in &snapshot.points {
                out.push_str(&format!("  {}: {}\n", point.label, point.value));
            }
            out.push_str(&summary_report(snapshot.summary.as_ref(), snapshot.count));
            Ok(out)
        }
    }
}
