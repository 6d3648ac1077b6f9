//! Sterling CLI
//!
//! Command-line front end for the dashboard core:
//! - Sign in / out and inspect the session
//! - Navigate between dashboard sections
//! - Print dashboard stats and the appointment calendar
//!
//! Tab storage is kept in a file next to the durable store so consecutive
//! invocations behave like one browser tab; `close-tab` discards it.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sterling::calendar::{CalendarMonth, DAY_HEADERS};
use sterling::config::{generate_default_config, LoggingConfig};
use sterling::dashboard::{
    format_currency, AppointmentPeriod, AppointmentStats, RevenuePeriod, RevenueSeries,
};
use sterling::prelude::*;
use sterling::session::LoadingIndicator;
use sterling::{LoginOutcome, Session};

#[derive(Parser)]
#[command(name = "sterling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sterling Dental Clinic dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/sterling/config.toml or ./sterling.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in
    Login {
        /// Username (default: the remembered one)
        #[arg(short, long)]
        username: Option<String>,
        /// Password
        #[arg(short, long, env = "STERLING_PASSWORD", hide_env_values = true)]
        password: String,
        /// Remember the username for next time
        #[arg(short, long)]
        remember: bool,
    },

    /// Show session state
    Status,

    /// Sign out of this tab
    Logout,

    /// Show the remembered username
    Remembered,

    /// Discard tab storage, as closing the browser would
    CloseTab,

    /// Open a dashboard section
    Navigate {
        /// Section id (dashboard, appointments, patients, ...)
        section: String,
    },

    /// Print dashboard stats
    Stats {
        /// Appointment period (today, week, month)
        #[arg(long, default_value = "today")]
        period: String,
        /// Revenue period (6m, year, all)
        #[arg(long, default_value = "6m")]
        revenue: String,
    },

    /// Print the appointment calendar
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        /// Month (1-12)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Prints a one-line progress message while a login is pending
struct StderrSpinner;

impl LoadingIndicator for StderrSpinner {
    fn set_loading(&self, loading: bool) {
        if loading {
            eprintln!("Signing in...");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Stats { period, revenue } => {
            let period: AppointmentPeriod = period.parse().map_err(anyhow::Error::msg)?;
            let revenue: RevenuePeriod = revenue.parse().map_err(anyhow::Error::msg)?;
            print_stats(period, revenue);
        }

        Commands::Calendar { year, month } => {
            let today = Utc::now().date_naive();
            let view = match (year, month) {
                (None, None) => CalendarMonth::containing(today),
                (year, month) => CalendarMonth::new(
                    year.unwrap_or_else(|| chrono::Datelike::year(&today)),
                    month.unwrap_or(1),
                    today,
                )?,
            };
            print_calendar(&view);
        }

        Commands::CloseTab => {
            match std::fs::remove_file(config.storage.tab_path()) {
                Ok(()) => println!("Tab closed; session discarded"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => println!("No open tab"),
                Err(e) => return Err(e).context("removing tab storage"),
            }
        }

        Commands::Login {
            username,
            password,
            remember,
        } => {
            let mut app = open_tab(&config)?;
            let prefill = match app.boot(SystemClock.now()) {
                Route::Dashboard => {
                    println!("Already signed in");
                    return Ok(());
                }
                Route::Login(prefill) => prefill.clone(),
            };
            let username = username.unwrap_or(prefill.username);

            match app.submit_login(&username, &password, remember).await {
                LoginOutcome::Success { session, notice } => {
                    println!("{}", notice.message);
                    println!(
                        "Session valid until {}",
                        expiry_text(&session, app.session.policy().ttl)
                    );
                }
                LoginOutcome::Failure { error, notice, .. } => {
                    eprintln!("{}", notice.message);
                    tracing::debug!(error = %error, "Login failed");
                    std::process::exit(1);
                }
            }
        }

        Commands::Status => {
            let app = open_tab(&config)?;
            match app.session.check_existing_session(SystemClock.now()) {
                SessionStatus::Valid(session) => {
                    println!("Signed in since {}", session.login_time.to_rfc3339());
                    println!(
                        "Expires at {}",
                        expiry_text(&session, app.session.policy().ttl)
                    );
                }
                SessionStatus::Expired => println!("Session expired"),
                SessionStatus::None => println!("Not signed in"),
            }
        }

        Commands::Logout => {
            let mut app = open_tab(&config)?;
            app.logout()?;
            println!("Signed out");
        }

        Commands::Remembered => {
            let app = open_tab(&config)?;
            match app.session.load_remembered_user() {
                Some(user) => println!("{}", user.username),
                None => println!("No remembered user"),
            }
        }

        Commands::Navigate { section } => {
            let mut app = open_tab(&config)?;
            if app.boot(SystemClock.now()) != &Route::Dashboard {
                anyhow::bail!("Not signed in");
            }
            let section = app.show_section(&section)?;
            println!("{}", app.navigation.page_title());
            tracing::debug!(section = %section, "Section opened");
        }
    }

    Ok(())
}

/// Wire up the state of the "tab" kept under the data directory
fn open_tab(config: &Config) -> anyhow::Result<AppState> {
    let verifier = HttpCredentialVerifier::new(config.auth.client_config())?;
    let session = SessionManager::new(
        Rc::new(FileStore::open(config.storage.tab_path())?),
        Rc::new(FileStore::open(config.storage.durable_path())?),
        Rc::new(verifier),
        Rc::new(SystemClock),
    )
    .with_policy(config.session.policy())
    .with_loading_indicator(Rc::new(StderrSpinner));

    Ok(AppState::new(
        session,
        NavigationController::new(Rc::new(TracingLoader)),
        NoticeCenter::new(config.notices.durations()),
    ))
}

fn expiry_text(session: &Session, ttl: chrono::Duration) -> String {
    session
        .expires_at(ttl)
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "never".to_string())
}

fn print_stats(period: AppointmentPeriod, revenue: RevenuePeriod) {
    let stats = AppointmentStats::for_period(period);
    println!("Appointments ({:?}): {} total", period, stats.total());
    for (label, value) in stats.chart_slices() {
        println!("  {:<10} {:>5}", label, value);
    }

    let series = RevenueSeries::for_period(revenue);
    println!();
    println!("Revenue");
    println!("  This month  {}", format_currency(series.this_month));
    println!("  Last month  {}", format_currency(series.last_month));
    println!("  Average     {}", format_currency(series.average));
    for (label, value) in series.labels.iter().zip(&series.values) {
        println!("  {:<8} {:>12}", label, format_currency(*value));
    }
}

fn print_calendar(view: &CalendarMonth) {
    println!("{:^28}", view.title());
    println!(
        "{}",
        DAY_HEADERS
            .iter()
            .map(|d| format!("{:>4}", d))
            .collect::<String>()
    );

    for week in view.cells().chunks(7) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) if view.today == Some(*day) => format!("{:>3}*", day),
                Some(day) => format!("{:>4}", day),
                None => "    ".to_string(),
            })
            .collect();
        println!("{}", line);
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("sterling={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
