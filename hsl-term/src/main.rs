use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hsl_term::board::{BoardConfig, run_cycle, run_loop};
use hsl_term::digitransit::{DigitransitClient, DigitransitConfig};
use hsl_term::render::{BoardRenderer, Style, TerminalScreen, banner};

/// HSL Term - terminal timetable for HSL (Helsingin Seudun Liikenne) stops.
#[derive(Debug, Parser)]
#[command(name = "hsl-term", version)]
struct Args {
    /// Stop name or number to show departures for (e.g. "Kamppi" or 1517)
    search: String,

    /// Refresh the boards every 30 seconds until interrupted
    #[arg(short = 'l', long = "loop")]
    loop_mode: bool,

    /// Banner color (ANSI color name, e.g. "cyan")
    #[arg(long, visible_alias = "bc")]
    banner_color: Option<String>,

    /// Banner background color (e.g. "on_blue")
    #[arg(long, visible_alias = "bbg")]
    banner_bg: Option<String>,

    /// Timetable color
    #[arg(long, visible_alias = "tc")]
    table_color: Option<String>,

    /// Timetable background color
    #[arg(long, visible_alias = "tbg")]
    table_bg: Option<String>,

    /// Number of upcoming departures to show per stop
    #[arg(long, default_value_t = 10)]
    departures: u16,

    /// Digitransit GraphQL endpoint
    #[arg(long, env = "HSL_TERM_API_URL")]
    api_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Parse a color pair, falling back to no colors on an unknown name.
fn style_or_plain(foreground: Option<&str>, background: Option<&str>) -> Style {
    Style::parse(foreground, background).unwrap_or_else(|e| {
        println!();
        println!("Something funny with your color selection ({e}), showing without colors.");
        println!("Check out the ANSI terminal color names.");
        println!();
        Style::plain()
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so the boards on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let banner_style = style_or_plain(args.banner_color.as_deref(), args.banner_bg.as_deref());
    print!("{}", banner(&banner_style));

    let renderer = BoardRenderer::new(style_or_plain(
        args.table_color.as_deref(),
        args.table_bg.as_deref(),
    ));

    // Create Digitransit client
    let mut client_config = match args.api_url {
        Some(url) => DigitransitConfig::new(url),
        None => DigitransitConfig::default(),
    };
    client_config = client_config
        .with_timeout(args.timeout)
        .with_departures(args.departures);
    debug!(endpoint = %client_config.endpoint, "using Digitransit endpoint");

    let client = match DigitransitClient::new(client_config) {
        Ok(client) => client,
        Err(e) => {
            println!("Error: failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let board_config = BoardConfig::default();

    if !args.loop_mode {
        return match run_cycle(&client, &board_config, &args.search, Utc::now()).await {
            Ok(outcome) => match renderer.render(&outcome) {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("Error: {e}");
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                println!("{}", renderer.render_error(&e));
                ExitCode::FAILURE
            }
        };
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl-C, run until killed");
            std::future::pending::<()>().await;
        }
    };

    let mut screen = TerminalScreen::stdout();
    let cycles = run_loop(
        &client,
        &board_config,
        &args.search,
        &renderer,
        &mut screen,
        shutdown,
    )
    .await;
    debug!(cycles, "stopped");
    ExitCode::SUCCESS
}
