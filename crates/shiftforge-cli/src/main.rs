use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use shiftforge::{ConfigError, ShiftConfig, ShiftForgeError, ShiftSolution};
use shiftforge_io::IoError;
use shiftforge_test::sample::{generate_week, SampleSpec};

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_FILE: &str = "shiftforge.toml";

const JSON_FILE: &str = "solution.json";

#[derive(Parser)]
#[command(name = "shiftforge")]
#[command(version)]
#[command(about = "Builds a weekly shift schedule from staff, availability and demand tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one week and write Schedule.csv, Hours.csv and KPI.csv
    Solve {
        /// Directory of CSV tables or a workbook (.xlsx, .xls, .ods)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the output tables
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// TOML or YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Solver time budget in seconds
        #[arg(short, long)]
        time_limit: Option<u64>,

        /// Solver random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Extra holiday on top of Sundays (YYYY-MM-DD), repeatable
        #[arg(long = "holiday")]
        holidays: Vec<NaiveDate>,

        /// Show the backend's own log
        #[arg(short, long)]
        verbose: bool,

        /// Also write the solution as solution.json in the output directory
        #[arg(long)]
        json: bool,

        /// Skip the banner and progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a synthetic week of input tables
    Sample {
        /// Directory for the generated CSV tables
        #[arg(short, long)]
        output: PathBuf,

        /// Number of staff members
        #[arg(short, long, default_value_t = 30)]
        staff: usize,

        /// Generator seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Monday the week starts on (YYYY-MM-DD)
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Solve(#[from] ShiftForgeError),
}

fn load_config(path: Option<&Path>) -> Result<ShiftConfig, ConfigError> {
    match path {
        Some(path) => ShiftConfig::load(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => ShiftConfig::load(DEFAULT_CONFIG_FILE),
        None => Ok(ShiftConfig::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn solve(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    time_limit: Option<u64>,
    seed: Option<u64>,
    holidays: Vec<NaiveDate>,
    verbose: bool,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, CliError> {
    let mut config = load_config(config)?;
    if let Some(seconds) = time_limit {
        config = config.with_time_limit_seconds(seconds);
    }
    if let Some(seed) = seed {
        config = config.with_random_seed(seed);
    }
    for date in holidays {
        config = config.with_extra_holiday(date);
    }
    if verbose {
        config = config.with_verbose(true);
    }
    config.validate()?;

    if !quiet {
        shiftforge::console::init();
    }

    let week = shiftforge_io::read_input(input)?;
    let solution = shiftforge::solve(&week, &config)?;

    shiftforge_io::write_outputs(output, &solution)?;
    if json {
        shiftforge_io::write_json(&output.join(JSON_FILE), &solution)?;
    }

    print_summary(&solution, output);

    Ok(if solution.status.has_solution() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn print_summary(solution: &ShiftSolution, output: &Path) {
    let status = solution.status.label();
    let status = if solution.status.has_solution() {
        status.bright_green().bold().to_string()
    } else {
        status.bright_red().bold().to_string()
    };
    println!("{} {}", "Status:".bold(), status);

    if let Some(kpi) = &solution.kpi {
        println!("  objective        {:.2}", kpi.objective_value);
        println!("  labor cost       {:.0}", kpi.labor_cost);
        println!("  wishes granted   {}", kpi.wishes_granted);
        println!("  hours deviation  {:.2}", kpi.hours_deviation);
        println!("  assignments      {}", solution.schedule.len());
    }
    println!(
        "{} {}",
        "Tables written to".bold(),
        output.display().bright_cyan()
    );
}

fn sample(
    output: &Path,
    staff: usize,
    seed: u64,
    week_start: Option<NaiveDate>,
) -> Result<ExitCode, CliError> {
    let mut spec = SampleSpec::default().with_staff_count(staff).with_seed(seed);
    if let Some(day) = week_start {
        spec = spec.with_week_start(day);
    }
    let week = generate_week(&spec);
    shiftforge_io::write_input_dir(output, &week)?;

    println!(
        "{} {} staff, {} availability rows, {} required assignments -> {}",
        "Sample week:".bold(),
        week.staff.len(),
        week.availability.len(),
        week.total_required(),
        output.display().bright_cyan()
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            input,
            output,
            config,
            time_limit,
            seed,
            holidays,
            verbose,
            json,
            quiet,
        } => solve(
            &input,
            &output,
            config.as_deref(),
            time_limit,
            seed,
            holidays,
            verbose,
            json,
            quiet,
        ),
        Commands::Sample {
            output,
            staff,
            seed,
            week_start,
        } => sample(&output, staff, seed, week_start),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_arguments() {
        let cli = Cli::try_parse_from([
            "shiftforge",
            "solve",
            "--input",
            "week",
            "--time-limit",
            "60",
            "--holiday",
            "2025-05-28",
            "--holiday",
            "2025-05-29",
        ])
        .unwrap();
        match cli.command {
            Commands::Solve {
                output,
                time_limit,
                holidays,
                verbose,
                ..
            } => {
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(time_limit, Some(60));
                assert_eq!(holidays.len(), 2);
                assert!(!verbose);
            }
            Commands::Sample { .. } => panic!("expected solve"),
        }
    }

    #[test]
    fn test_bad_holiday_is_rejected() {
        let parsed =
            Cli::try_parse_from(["shiftforge", "solve", "-i", "week", "--holiday", "28/05/2025"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[solver]\ntime_limit_seconds = 12\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.solver.time_limit_seconds, 12);
    }

    #[test]
    fn test_sample_writes_tables() {
        let dir = TempDir::new().unwrap();
        sample(dir.path(), 5, 7, None).unwrap();

        let week = shiftforge_io::read_input(dir.path()).unwrap();
        assert_eq!(week.staff.len(), 5);
    }
}
