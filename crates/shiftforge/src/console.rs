//! Colorful console output for solve progress.
//!
//! Provides a custom `tracing` layer that formats model and solver events
//! with colors. Enabled by the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` directives are honored on top of `shiftforge_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "shiftforge_solver=info".parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ShiftConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____  _     _  __ _   _____
/ ___|| |__ (_)/ _| |_|  ___|__  _ __ __ _  ___
\___ \| '_ \| | |_| __| |_ / _ \| '__/ _` |/ _ \
 ___) | | | | |  _| |_|  _| (_) | | | (_| |  __/
|____/|_| |_|_|_|  \__|_|  \___/|_|  \__, |\___|
                                     |___/
"#;

    let version_line = format!(
        "               v{} - Weekly Shift Scheduler\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats `shiftforge_*` events with colors.
pub struct ShiftConsoleLayer;

impl<S: Subscriber> Layer<S> for ShiftConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("shiftforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    backend: Option<String>,
    status: Option<String>,
    error: Option<String>,
    staff: Option<u64>,
    slot_keys: Option<u64>,
    variables: Option<u64>,
    integer_variables: Option<u64>,
    constraints: Option<u64>,
    time_limit_secs: Option<u64>,
    assignments: Option<u64>,
    duration_ms: Option<u64>,
    objective: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "backend" => self.backend = value,
            "status" => self.status = value,
            "error" => self.error = value,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let value = Some(value);
        match field.name() {
            "staff" => self.staff = value,
            "slot_keys" => self.slot_keys = value,
            "variables" => self.variables = value,
            "integer_variables" => self.integer_variables = value,
            "constraints" => self.constraints = value,
            "time_limit_secs" => self.time_limit_secs = value,
            "assignments" => self.assignments = value,
            "duration_ms" => self.duration_ms = value,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "objective" {
            self.objective = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "model_built" => format_model_built(v),
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solve_failed" => format_solve_failed(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} {} {} staff ({}), slot keys ({}), variables ({}), constraints ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Model]".bright_cyan(),
        count(v.staff).bright_yellow(),
        count(v.slot_keys).bright_yellow(),
        count(v.variables).bright_yellow(),
        count(v.constraints).bright_yellow(),
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} started: integer variables ({}), time limit ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.backend.as_deref().unwrap_or("backend").white().bold(),
        count(v.integer_variables).bright_yellow(),
        format_duration_ms(v.time_limit_secs.unwrap_or(0) * 1000).yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("Undefined");
    let objective = v
        .objective
        .map(|o| format!("{o:.2}"))
        .unwrap_or_else(|| "N/A".to_string());

    let mut output = format!(
        "{} {} {} Solving ended: status ({}), time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format_status(status),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    );

    // Summary box
    let rule = "═".repeat(58);
    output.push_str("\n\n");
    output.push_str(&format!("╔{rule}╗").bright_cyan().to_string());
    output.push('\n');

    let headline = match status {
        "Optimal" => "OPTIMAL SCHEDULE FOUND",
        "Not Solved" => "FEASIBLE SCHEDULE (time limit reached)",
        "Infeasible" => "INFEASIBLE (demand cannot be covered)",
        "Unbounded" => "UNBOUNDED",
        _ => "NO SCHEDULE",
    };
    let padding = 58usize.saturating_sub(headline.len());
    let left_pad = padding / 2;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        format_status_text(status, headline),
        " ".repeat(padding - left_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{rule}╣").bright_cyan().to_string());
    output.push('\n');

    for (label, value) in [
        ("Objective:", objective),
        ("Assignments:", count(v.assignments)),
    ] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&format!("╚{rule}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_solve_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Solving failed after {}: {}",
        timestamp().bright_black(),
        "WARN".bright_red(),
        "[Solver]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.error.as_deref().unwrap_or("unknown error").bright_red(),
    )
}

fn format_status(status: &str) -> String {
    format_status_text(status, status)
}

fn format_status_text(status: &str, text: &str) -> String {
    match status {
        "Optimal" => text.bright_green().bold().to_string(),
        "Not Solved" => text.yellow().bold().to_string(),
        _ => text.bright_red().bold().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
