mod app;
mod calendar;
mod help;
mod locale;
mod picker;
mod showcase;
mod theme;
use crate::app::App;
use crate::calendar::parse_ymd;
use crate::showcase::Showcase;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use time::{Date, OffsetDateTime, Weekday};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "datepick=info";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        today: Option<Date>,
        week_start: Weekday,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut today = None;
        let mut week_start = Weekday::Sunday;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('w') | Arg::Long("week-start") => {
                    week_start = parser.value()?.parse_with(parse_weekday)?;
                }
                Arg::Short('t') | Arg::Long("today") => {
                    today = Some(parser.value()?.parse_with(parse_ymd)?);
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            today,
            week_start,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                today,
                week_start,
                log_file,
            } => {
                if let Some(path) = log_file {
                    init_logging(File::create(&path).with_context(|| {
                        format!("failed to open log file {}", path.display())
                    })?);
                }
                let today = match today {
                    Some(d) => d,
                    None => OffsetDateTime::now_local()
                        .context("failed to determine local date")?
                        .date(),
                };
                tracing::info!(%today, ?week_start, "Starting date picker examples");
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(Showcase::new(today, week_start)).run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: datepick [<options>]");
                println!();
                println!("Terminal date and date-range picker with availability rules");
                println!();
                println!("Options:");
                println!("  -w, --week-start <DAY>    First column of the calendar [default: sunday]");
                println!("  -t, --today <YYYY-MM-DD>  Date to treat as today [default: local date]");
                println!("  -l, --log-file <PATH>     Write logs to PATH (filtered by RUST_LOG)");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

// The terminal belongs to the UI, so logs only ever go to a file
fn init_logging(file: File) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown day of the week: {0:?}")]
struct UnknownWeekdayError(String);

fn parse_weekday(s: &str) -> Result<Weekday, UnknownWeekdayError> {
    let wd = match s.to_ascii_lowercase().as_str() {
        "sun" | "sunday" => Weekday::Sunday,
        "mon" | "monday" => Weekday::Monday,
        "tue" | "tuesday" => Weekday::Tuesday,
        "wed" | "wednesday" => Weekday::Wednesday,
        "thu" | "thursday" => Weekday::Thursday,
        "fri" | "friday" => Weekday::Friday,
        "sat" | "saturday" => Weekday::Saturday,
        _ => return Err(UnknownWeekdayError(s.to_owned())),
    };
    Ok(wd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run {
                today: None,
                week_start: Weekday::Sunday,
                log_file: None,
            }
        );
    }

    #[test]
    fn test_all_options() {
        assert_eq!(
            parse(&["--week-start", "Monday", "-t", "2024-03-06", "--log-file", "dp.log"]).unwrap(),
            Command::Run {
                today: Some(date!(2024 - 03 - 06)),
                week_start: Weekday::Monday,
                log_file: Some(PathBuf::from("dp.log")),
            }
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--week-start", "sat", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["--today", "March 6"]).is_err());
        assert!(parse(&["--week-start", "someday"]).is_err());
        assert!(parse(&["2024-03-06"]).is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("SUN"), Ok(Weekday::Sunday));
        assert_eq!(parse_weekday("thursday"), Ok(Weekday::Thursday));
        assert_eq!(
            parse_weekday("thurs"),
            Err(UnknownWeekdayError(String::from("thurs")))
        );
    }
}
