//! Colorful console output for search runs.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search start/end, evaluation)
//! - **DEBUG**: Finished root branches
//! - **TRACE**: Individual solutions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_FILTER: &str = "cubesearch_solver=info,cubesearch=info";

/// Initializes the search console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let title = format!("CubeSearch v{}", VERSION);
    let rule = "═".repeat(title.chars().count() + 4);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", rule.bright_cyan());
    let _ = writeln!(stdout, "  {}", title.bright_white().bold());
    let _ = writeln!(stdout, "{}", rule.bright_cyan());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("cubesearch_solver") && !target.starts_with("cubesearch::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    scramble: Option<String>,
    prefix: Option<String>,
    solution: Option<String>,
    policy: Option<String>,
    face: Option<String>,
    roots: Option<u64>,
    root: Option<u64>,
    depth: Option<u64>,
    threads: Option<u64>,
    groups: Option<u64>,
    mask: Option<u64>,
    solutions: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    checks: Option<u64>,
    candidates: Option<u64>,
    score: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    fused: Option<bool>,
}

impl EventVisitor {
    fn record_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "scramble" => self.scramble = Some(value),
            "prefix" => self.prefix = Some(value),
            "solution" => self.solution = Some(value),
            "policy" => self.policy = Some(value),
            "face" => self.face = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "roots" => self.roots = Some(value),
            "root" => self.root = Some(value),
            "depth" => self.depth = Some(value),
            "threads" => self.threads = Some(value),
            "groups" => self.groups = Some(value),
            "mask" => self.mask = Some(value),
            "solutions" => self.solutions = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "checks" => self.checks = Some(value),
            "candidates" => self.candidates = Some(value),
            "score" => self.score = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "fused" {
            self.fused = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "root_complete" => format_root_complete(v),
        "solution_found" => format_solution(v, level),
        "evaluation" => format_evaluation(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let scramble = v.scramble.as_deref().unwrap_or("");

    let mut output = format!(
        "{} {} Searching {} │ depth {} │ {} roots │ {} threads │ {} groups",
        format_elapsed(),
        "▶".bright_green().bold(),
        scramble.white().bold(),
        count(v.depth).bright_yellow(),
        count(v.roots).bright_yellow(),
        count(v.threads).bright_yellow(),
        count(v.groups).bright_yellow(),
    );
    if v.fused == Some(true) {
        output.push_str(&format!(" │ {}", "fused".bright_magenta()));
    }
    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let status = if solutions > 0 {
        "FOUND".bright_green().bold().to_string()
    } else {
        "NONE".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Search complete │ {} │ {} solutions │ {} nodes │ {} pruned │ {} nodes/s │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.solutions).bright_yellow(),
        count(v.nodes).white(),
        count(v.pruned).white(),
        count(v.speed).bright_magenta().bold(),
        status,
    );
    if let Some(checks) = v.checks {
        output.push_str(&format!(
            " │ {} checks",
            checks.to_formatted_string(&Locale::en).white()
        ));
    }
    output
}

fn format_root_complete(v: &EventVisitor) -> String {
    format!(
        "{} {} Root {:>6} {} │ {} solutions │ {} nodes",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.root).bright_black(),
        v.prefix.as_deref().unwrap_or("").white(),
        count(v.solutions).bright_yellow(),
        count(v.nodes).white(),
    )
}

fn format_solution(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} {} │ group {}",
        format_elapsed(),
        "✓".bright_green(),
        v.solution.as_deref().unwrap_or("").white(),
        count(v.mask).bright_black(),
    )
}

fn format_evaluation(v: &EventVisitor) -> String {
    format!(
        "{} {} Best of {} ({} policy, {} cross) │ {} │ score {}",
        format_elapsed(),
        "★".bright_yellow().bold(),
        count(v.candidates).white(),
        v.policy.as_deref().unwrap_or("best"),
        v.face.as_deref().unwrap_or("D"),
        v.solution.as_deref().unwrap_or("").bright_green().bold(),
        count(v.score).bright_magenta().bold(),
    )
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
