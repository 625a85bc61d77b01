use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info, warn};
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use sir_sim::{Environment, Metrics, Parameters, RunConfig, SirError, SirModel, report};

const TRAJECTORY_FILE: &str = "sir_trajectory.csv";
const REPORT_FILE: &str = "sir_model_report.txt";

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Command-line front end for the SIR epidemic simulator.
#[derive(Parser, Debug)]
#[command(
    name = "sir-cli",
    about = "Simulate an SIR epidemic and emit a trajectory CSV plus a text report"
)]
struct Cli {
    /// Optional path to a TOML or JSON run configuration; "-" reads JSON
    /// from stdin
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Infection rate per contact per day (beta)
    #[arg(long)]
    beta: Option<f64>,

    /// Recovery rate per day (gamma)
    #[arg(long)]
    gamma: Option<f64>,

    /// Total population size
    #[arg(long)]
    population: Option<u64>,

    /// Infected count on day 0
    #[arg(long)]
    initial_infected: Option<u64>,

    /// Simulation horizon in days
    #[arg(long)]
    days: Option<usize>,

    /// Directory for output artifacts; stdout when omitted
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over config-file values, which win over the defaults.
    fn apply_overrides(&self, parameters: &mut Parameters) {
        if let Some(beta) = self.beta {
            parameters.beta = beta;
        }
        if let Some(gamma) = self.gamma {
            parameters.gamma = gamma;
        }
        if let Some(population) = self.population {
            parameters.population = population;
        }
        if let Some(initial_infected) = self.initial_infected {
            parameters.initial_infected = initial_infected;
        }
        if let Some(days) = self.days {
            parameters.days = days;
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Logs go to stderr so stdout stays a clean data sink.
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("failed to build log config");
    log4rs::init_config(config).expect("failed to initialize logging");
}

fn run(cli: &Cli) -> Result<(), SirError> {
    let config = match &cli.config {
        Some(path) if path.as_os_str() == "-" => {
            info!("reading run config from stdin");
            RunConfig::from_stdin()?
        }
        Some(path) => {
            info!("loading run config from {}", path.display());
            RunConfig::from_file(path)?
        }
        None => RunConfig::default(),
    };

    let mut parameters = config.parameters;
    cli.apply_overrides(&mut parameters);
    let output_dir = cli.output_dir.clone().or(config.output.dir);

    debug!("parameters: {parameters:?}");
    let trajectory = SirModel::simulate(&parameters)?;
    let metrics = Metrics::from_trajectory(&parameters, &trajectory);
    info!(
        "R0 = {:.3}, peak {:.0} infected on day {}, attack rate {:.1}%",
        metrics.r0, metrics.peak_infected, metrics.peak_day, metrics.percent_infected
    );
    if metrics.r0 <= 1.0 {
        warn!("R0 <= 1: the epidemic fades without sustained growth");
    }

    let env = Environment::new(output_dir);

    // One CSV row per day, day 0 included.
    let rows: Vec<Vec<String>> = (0..trajectory.len())
        .map(|day| {
            vec![
                day.to_string(),
                trajectory.susceptible[day].to_string(),
                trajectory.infected[day].to_string(),
                trajectory.recovered[day].to_string(),
            ]
        })
        .collect();
    env.write_csv(
        TRAJECTORY_FILE,
        &["day", "susceptible", "infected", "recovered"],
        &rows,
    )?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let report = report::render(&parameters, &metrics, Some(&date));
    env.write(REPORT_FILE, report.as_bytes())?;

    if let Some(dir) = env.output_dir() {
        info!(
            "wrote {TRAJECTORY_FILE} and {REPORT_FILE} to {}",
            dir.display()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
