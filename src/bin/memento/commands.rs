use std::fmt::Display;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Datelike, TimeZone};
use memento::{
    Clock, DriftReport, FixedTimeSource, LOCATION_DENIED_NOTICE, LocationPermission,
    ReflectionRequest, StaticReflection, Year, YearNavigator, YearView, format_clock,
    reflection_or_fallback, synchronize,
};
use tracing::info;

use crate::cli::{ClockArgs, DayArgs, StatsArgs, ViewArgs};
use crate::config::MementoConfig;
use crate::render;

/// Builds the view for the requested year, the CLI flag winning over the config.
fn year_view<Tz: TimeZone>(
    config: &MementoConfig,
    args: &ViewArgs,
    now: &DateTime<Tz>,
) -> Result<YearView> {
    let navigator = match args.year.or(config.year) {
        Some(year) => YearNavigator::new(Year::new(year)?),
        None => YearNavigator::starting_at(now)
            .context("the reference instant is outside the navigable years")?,
    };
    info!(year = %navigator.current(), method = %config.day_count, "rendering year");
    Ok(navigator.view(now, config.day_count)?)
}

pub fn grid<Tz: TimeZone>(
    config: &MementoConfig,
    args: &ViewArgs,
    now: &DateTime<Tz>,
) -> Result<String>
where
    Tz::Offset: Display,
{
    let view = year_view(config, args, now)?;
    let reflection = reflection_or_fallback(
        &StaticReflection(config.reflection.text.clone()),
        &ReflectionRequest::from(view.stats()),
    );

    Ok(format!(
        "{}\n{}\n\n{}\n\n{}\n\n{reflection}",
        render::header(view.stats()),
        format_clock(now),
        render::grid(view.days(), &config.display),
        render::legend(&config.display),
    ))
}

pub fn stats<Tz: TimeZone>(
    config: &MementoConfig,
    args: &StatsArgs,
    now: &DateTime<Tz>,
) -> Result<String> {
    let view = year_view(config, &args.view, now)?;
    let stats = view.stats();

    if args.json {
        return serde_json::to_string_pretty(stats).context("failed to serialize stats");
    }
    Ok(format!(
        "year:             {}\n\
         total days:       {}\n\
         days passed:      {}\n\
         days left:        {}\n\
         percent complete: {:.2}",
        stats.year(),
        stats.total_days(),
        stats.days_passed(),
        stats.days_left(),
        stats.percent_complete(),
    ))
}

pub fn day<Tz: TimeZone>(
    config: &MementoConfig,
    args: &DayArgs,
    now: &DateTime<Tz>,
) -> Result<String> {
    let view = year_view(config, &args.view, now)?;
    let year = view.stats().year();
    let day = view.day(args.day_number).ok_or_else(|| {
        anyhow!(
            "day {} is not in {year} (1..={})",
            args.day_number,
            view.stats().total_days()
        )
    })?;

    Ok(render::day_detail(day, year))
}

/// Clock line for `now` and the drift of `clock` against `--reference-time`.
pub fn clock<Tz, C>(args: &ClockArgs, now: &DateTime<Tz>, clock: &C) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    C: Clock + ?Sized,
{
    let permission = if args.deny_location {
        LocationPermission::Denied
    } else {
        LocationPermission::Granted
    };

    let report = match args.reference_time {
        Some(reference) => synchronize(permission, clock, &FixedTimeSource(reference.into())),
        // nothing to measure against
        None => DriftReport {
            drift_seconds: None,
            notice: args.deny_location.then_some(LOCATION_DENIED_NOTICE),
        },
    };

    let mut lines = vec![
        format!("{}  (day {} of {})", format_clock(now), now.ordinal(), now.year()),
        report.status_line(),
    ];
    lines.extend(report.notice.map(str::to_owned));
    lines.join("\n")
}
