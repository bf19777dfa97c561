use crate::application::Config;
use crate::calendar;
use crate::domain::{CalendarDate, CalendarSystem, DateInput, DayRecord, Locale};
use crate::parsing::{day_records, to_day_record, try_parse_date};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::debug;
use serde_json::json;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "jcalendars")]
#[command(about = "Gregorian and jalaali calendar pages, conversions and day records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the day record of a date (YYYY-MM-DD, RFC 3339 or epoch millis)
    Parse {
        input: String,
        /// Calendar system of the input and the record
        #[arg(short = 't', long = "type")]
        calendar: Option<CalendarSystem>,
    },
    /// Print the Gregorian and jalaali records of a date
    Convert {
        input: String,
        /// Calendar system the input is written in
        #[arg(short, long)]
        from: Option<CalendarSystem>,
    },
    /// Print the month page containing a date
    Page {
        /// Any day of the month (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 't', long = "type")]
        calendar: Option<CalendarSystem>,
        /// Index of the weekday that starts each row, 0-6
        #[arg(short, long)]
        first_day: Option<u32>,
        /// Print day records instead of a grid
        #[arg(long)]
        json: bool,
    },
    /// Print the short weekday labels in row order
    Weekdays {
        #[arg(short = 't', long = "type")]
        calendar: Option<CalendarSystem>,
        #[arg(short, long)]
        first_day: Option<u32>,
    },
    /// Print every date from FROM to TO inclusive
    Range {
        from: String,
        to: String,
        #[arg(short = 't', long = "type")]
        calendar: Option<CalendarSystem>,
    },
    /// Print the titles of the months around a date
    Months {
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        past: u32,
        #[arg(short = 'n', long, default_value_t = 1)]
        future: u32,
        #[arg(short = 't', long = "type")]
        calendar: Option<CalendarSystem>,
    },
}

impl Cli {
    pub fn run(config: &Config) -> Result<()> {
        let cli = Self::parse();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.execute(config, &mut out)
    }

    pub fn execute<W: Write>(self, config: &Config, out: &mut W) -> Result<()> {
        debug!("Running {:?} with {:?}", self.command, config);
        let first_day = u32::from(config.first_day_of_week);

        match self.command {
            Some(Commands::Parse { input, calendar }) => {
                let system = calendar.unwrap_or(config.calendar);
                let date = parse_arg(system, &input)?;
                let record = to_day_record(system, &date).with_context(|| no_reading(&date, system))?;
                print_json(out, &record)?;
            }
            Some(Commands::Convert { input, from }) => {
                let system = from.unwrap_or(config.calendar);
                let date = parse_arg(system, &input)?;
                let (gregorian, jalaali) = day_records(CalendarSystem::Jalaali, &date)
                    .with_context(|| no_reading(&date, CalendarSystem::Jalaali))?;
                print_json(out, &json!({ "gregorian": gregorian, "jalaali": jalaali }))?;
            }
            Some(Commands::Page {
                date,
                calendar,
                first_day: first_day_arg,
                json,
            }) => {
                let system = calendar.unwrap_or(config.calendar);
                let anchor = date_or_today(system, date.as_deref())?;
                let first_day = first_day_arg.unwrap_or(first_day);
                if json {
                    let records = calendar::month_page(system, &anchor, first_day)
                        .iter()
                        .map(|day| to_day_record(system, day))
                        .collect::<Option<Vec<DayRecord>>>()
                        .with_context(|| no_reading(&anchor, system))?;
                    print_json(out, &records)?;
                } else {
                    write!(out, "{}", render_page(system, config.locale, &anchor, first_day)?)?;
                }
            }
            Some(Commands::Weekdays {
                calendar,
                first_day: first_day_arg,
            }) => {
                let system = calendar.unwrap_or(config.calendar);
                let labels = config.locale.weekday_labels();
                let names =
                    calendar::weekday_names(system, &labels, first_day_arg.unwrap_or(first_day));
                writeln!(out, "{}", names.join(" "))?;
            }
            Some(Commands::Range { from, to, calendar }) => {
                let system = calendar.unwrap_or(config.calendar);
                let from = parse_arg(system, &from)?;
                let to = parse_arg(system, &to)?;
                for day in calendar::days_between(system, &from, &to) {
                    writeln!(out, "{}", day.format())?;
                }
            }
            Some(Commands::Months {
                date,
                past,
                future,
                calendar,
            }) => {
                let system = calendar.unwrap_or(config.calendar);
                let anchor = date_or_today(system, date.as_deref())?;
                for month in calendar::visible_months(system, &anchor, past, future) {
                    if let Some(title) = calendar::month_title(system, config.locale, &month) {
                        writeln!(out, "{}", title)?;
                    }
                }
            }
            None => {
                let today = date_or_today(config.calendar, None)?;
                let page = render_page(config.calendar, config.locale, &today, first_day)?;
                write!(out, "{}", page)?;
            }
        }

        Ok(())
    }
}

fn parse_arg(system: CalendarSystem, arg: &str) -> Result<CalendarDate> {
    try_parse_date(system, DateInput::from_cli_arg(arg))
}

fn date_or_today(system: CalendarSystem, date: Option<&str>) -> Result<CalendarDate> {
    match date {
        Some(arg) => parse_arg(system, arg),
        None => try_parse_date(system, Local::now().into()).context("Failed to read today's date"),
    }
}

fn no_reading(date: &CalendarDate, system: CalendarSystem) -> String {
    format!("{} has no {} reading", date, system)
}

fn print_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Renders the month containing `any_day` as a titled week grid. Days of the
/// neighbouring months are left blank.
pub fn render_page(
    system: CalendarSystem,
    locale: Locale,
    any_day: &CalendarDate,
    first_day_of_week: u32,
) -> Result<String> {
    let anchor = any_day
        .in_system(system)
        .with_context(|| no_reading(any_day, system))?;
    let title = calendar::month_title(system, locale, &anchor)
        .with_context(|| no_reading(any_day, system))?;
    let labels = locale.weekday_labels();

    let mut lines = vec![title];
    let header: String = calendar::weekday_names(system, &labels, first_day_of_week)
        .iter()
        .map(|name| format!("{:>4}", name))
        .collect();
    lines.push(header);

    let page = calendar::month_page(system, &anchor, first_day_of_week);
    for week in page.chunks(7) {
        let row: String = week
            .iter()
            .map(|day| {
                if calendar::same_month(system, day, &anchor) {
                    format!("{:>4}", day.day())
                } else {
                    "    ".to_string()
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    Ok(rendered)
}
