use clap::{Parser, Subcommand};
use example_gallery::{config, load, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "example-gallery")]
#[command(about = "Load YAML code examples into a sorted gallery listing")]
#[command(long_about = "\
Load YAML code examples into a sorted gallery listing

Every *.yaml / *.yml file under the examples root becomes one gallery entry,
identified by its file name. Files without a string title (or legacy name)
and a string prompt are skipped.

Layout (defaults, see 'example-gallery gen-config'):

  repo/
  ├── snake-game.yaml              # id: snake-game
  ├── todo-app.yml                 # id: todo-app
  └── front-end/                   # --site-root
      ├── gallery.toml             # Optional config
      └── public/posters/
          └── snake-game.png       # Local poster → /posters/snake-game.png

Examples without a local poster use <cdn_base_url>/<id>.png.")]
#[command(version)]
struct Cli {
    /// Site root: holds gallery.toml and the public/ directory
    #[arg(long, default_value = ".", global = true)]
    site_root: PathBuf,

    /// Log skipped files and load details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sorted example listing
    List,
    /// Write the sorted examples as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Report skipped files and id mismatches; fails if anything was skipped
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List => {
            let report = load::load(&cli.site_root)?;
            output::print_list_output(&report.examples);
        }
        Command::Export { output: out_path } => {
            let report = load::load(&cli.site_root)?;
            let json = serde_json::to_string_pretty(&report.examples)?;
            match out_path {
                Some(path) => std::fs::write(&path, json + "\n")?,
                None => println!("{}", json),
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.site_root)?;
            let examples_root = config.examples_dir(&cli.site_root);
            println!("==> Checking {}", examples_root.display());
            let report = load::load_with_config(&cli.site_root, &config)?;
            output::print_check_output(&report, &examples_root);
            if !report.skipped.is_empty() {
                return Err(format!("{} example file(s) skipped", report.skipped.len()).into());
            }
            println!("==> Examples are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
