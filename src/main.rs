// Sortty: terminal sorting-algorithm visualizer with trace playback

mod engine;
mod input;
mod trace;
mod ui;

use std::io;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use engine::{run_sort, AlgorithmKind, ALL_ALGORITHMS};
use input::{parse_values, Preset, SeededRng};
use ui::App;

const DEFAULT_SIZE: usize = 32;

struct CliOptions {
    algorithm: AlgorithmKind,
    size: usize,
    seed: u64,
    preset: Preset,
    explicit: Option<Vec<i64>>,
    json: bool,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <algorithm>", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    let names: Vec<&str> = ALL_ALGORITHMS.iter().map(|kind| kind.identifier()).collect();
    eprintln!("  {}", names.join(" "));
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N             number of generated elements (default {})", DEFAULT_SIZE);
    eprintln!("  --seed S             seed for the array generator");
    eprintln!("  --preset P           random | nearly-sorted | reversed (default random)");
    eprintln!("  --input a,b,c        explicit comma-separated values (overrides generation)");
    eprintln!("  --json               print the trace and stats as JSON and exit");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quick                       # visualize quick sort on a random array", program_name);
    eprintln!("  {} --preset reversed bubble    # worst case for bubble sort", program_name);
    eprintln!("  {} --input 5,3,1,4,2 --json merge", program_name);
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut size = DEFAULT_SIZE;
    let mut seed: Option<u64> = None;
    let mut preset = Preset::Random;
    let mut explicit = None;
    let mut json = false;
    let mut algorithm = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let value = args.get(i).ok_or("--size requires a value")?;
                size = value
                    .parse()
                    .map_err(|_| format!("invalid --size value '{}'", value))?;
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value '{}'", value))?,
                );
            }
            "--preset" => {
                i += 1;
                let value = args.get(i).ok_or("--preset requires a value")?;
                preset = Preset::from_arg(value)
                    .ok_or_else(|| format!("unknown preset '{}'", value))?;
            }
            "--input" => {
                i += 1;
                let value = args.get(i).ok_or("--input requires a value")?;
                explicit = Some(parse_values(value).map_err(|e| e.to_string())?);
            }
            "--json" => {
                json = true;
            }
            arg if arg.starts_with("--") => {
                return Err(format!("unknown option '{}'", arg));
            }
            arg => {
                if algorithm.is_some() {
                    return Err(format!("unexpected argument '{}'", arg));
                }
                algorithm = Some(arg.parse::<AlgorithmKind>().map_err(|e| e.to_string())?);
            }
        }
        i += 1;
    }

    let algorithm = algorithm.ok_or("no algorithm provided")?;

    // Fall back to a wall-clock seed so unseeded runs differ
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    });

    Ok(CliOptions {
        algorithm,
        size,
        seed,
        preset,
        explicit,
        json,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    let mut rng = SeededRng::new(options.seed);
    let array = match options.explicit {
        Some(values) => values,
        None => options.preset.generate(&mut rng, options.size),
    };

    if options.json {
        // Machine-readable mode: trace + stats on stdout, no TUI
        let result = match run_sort(&array, options.algorithm) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    eprintln!("Generating {} sort trace...", options.algorithm);
    let mut app = match App::new(array, options.algorithm, options.preset, rng) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    eprintln!(
        "Trace ready: {} snapshots, {} comparisons, {} swaps.",
        app.result.history.len(),
        app.result.stats.comparisons,
        app.result.stats.swaps
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
