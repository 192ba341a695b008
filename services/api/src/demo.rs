use crate::infra::{parse_date, parse_variant, synthetic_service};
use chrono::{Local, NaiveDate};
use clap::Args;
use strikehistory::error::AppError;
use strikehistory::workflows::strikes::domain::{
    DistanceFilter, IntensityFilter, SearchPeriod, StrikeEvent,
};
use strikehistory::workflows::strikes::report::{
    file_name, synthesize, ContractorIdentity, ReportContext, ReportVariant, RequesterIdentity,
};
use strikehistory::workflows::strikes::stats::{
    closest_approach, compute_stats, DistanceStats, DEFAULT_MAX_RADIUS_KM,
};

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Address or place label to search around
    #[arg(long)]
    pub(crate) address: String,
    /// Lookback window in days (7, 30, 90, or 365)
    #[arg(long, default_value_t = 30)]
    pub(crate) period_days: u32,
    /// Search radius in km (1, 3, 5, or 10)
    #[arg(long, default_value_t = 5)]
    pub(crate) distance_km: u32,
    /// Intensity floor (0, 30, 60, or 80)
    #[arg(long, default_value_t = 0)]
    pub(crate) intensity_floor: u32,
    /// Override the search date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Fixed RNG seed for reproducible synthetic data
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct DetailArgs {
    /// Day to expand (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: NaiveDate,
    /// Fixed RNG seed for reproducible synthetic data
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Report form: plain or certificate
    #[arg(long, default_value = "plain", value_parser = parse_variant)]
    pub(crate) variant: ReportVariant,
    /// Address the survey was run against
    #[arg(long)]
    pub(crate) address: String,
    /// Day the report covers (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: NaiveDate,
    /// Requester name (certificate variant)
    #[arg(long)]
    pub(crate) requester_name: Option<String>,
    /// Requester address (certificate variant; falls back to --address)
    #[arg(long)]
    pub(crate) requester_address: Option<String>,
    /// Contractor company name (certificate variant)
    #[arg(long)]
    pub(crate) company_name: Option<String>,
    /// Contractor license number (certificate variant)
    #[arg(long)]
    pub(crate) license_number: Option<String>,
    /// Contractor representative (certificate variant)
    #[arg(long)]
    pub(crate) representative: Option<String>,
    /// Write the report to its download filename in the working directory
    #[arg(long)]
    pub(crate) save: bool,
    /// Fixed RNG seed for reproducible synthetic data
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Address used for the demo search
    #[arg(long, default_value = "1-1-1 Marunouchi, Chiyoda, Tokyo")]
    pub(crate) address: String,
    /// Override the demo date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Fixed RNG seed for reproducible synthetic data
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        address,
        period_days,
        distance_km,
        intensity_floor,
        today,
        seed,
    } = args;

    let period = SearchPeriod::from_days(period_days)?;
    let distance = DistanceFilter::from_km(distance_km)?;
    let intensity = IntensityFilter::from_floor(intensity_floor)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let service = synthetic_service(seed);
    let days = service.search(&address, period, distance, intensity, today)?;

    println!(
        "{} | {} | {}",
        period.label(),
        distance.label(),
        intensity.label()
    );
    if days.is_empty() {
        println!("No strike days found near {address}.");
        return Ok(());
    }

    println!("{} day(s) with strike activity near {}", days.len(), address);
    for day in &days {
        println!("- {} ({} strike(s))", day.date, day.count);
        for event in &day.details {
            println!("    {}", event_line(event));
        }
    }

    Ok(())
}

pub(crate) fn run_detail(args: DetailArgs) -> Result<(), AppError> {
    let DetailArgs { date, seed } = args;

    let service = synthetic_service(seed);
    let events = service.expand(date);

    println!("24-hour strike detail for {date} ({} event(s))", events.len());
    for event in &events {
        println!("- {}", event_line(event));
    }

    let stats = compute_stats(&events, DEFAULT_MAX_RADIUS_KM);
    render_stats(&stats);
    match closest_approach(&events) {
        Some(km) => println!("Closest approach: {km:.2} km"),
        None => println!("Closest approach: none"),
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        variant,
        address,
        date,
        requester_name,
        requester_address,
        company_name,
        license_number,
        representative,
        save,
        seed,
    } = args;

    let service = synthetic_service(seed);
    let events = service.expand(date);

    let context = ReportContext {
        address,
        target_date: date,
        stats: compute_stats(&events, DEFAULT_MAX_RADIUS_KM),
        closest_km: closest_approach(&events),
        generated_at: Local::now().naive_local(),
        contractor: ContractorIdentity {
            company_name,
            license_number,
            representative,
        },
        requester: RequesterIdentity {
            name: requester_name,
            address: requester_address,
        },
    };

    let content = synthesize(&context, variant);
    println!("{content}");

    if save {
        let download_name = file_name(variant, date);
        std::fs::write(&download_name, &content)?;
        println!("\nSaved {download_name}");
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        address,
        today,
        seed,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = synthetic_service(seed);

    println!("Lightning strike history demo");
    let days = service.search(
        &address,
        SearchPeriod::Week,
        DistanceFilter::Within5Km,
        IntensityFilter::All,
        today,
    )?;
    println!(
        "- Search: {} day(s) with strike activity near {} in the past week",
        days.len(),
        address
    );

    let target_date = days.first().map(|day| day.date).unwrap_or(today);
    let events = service.expand(target_date);
    println!(
        "- Detail: {} event(s) drawn for {}",
        events.len(),
        target_date
    );

    let stats = compute_stats(&events, DEFAULT_MAX_RADIUS_KM);
    render_stats(&stats);

    let context = ReportContext {
        address,
        target_date,
        stats,
        closest_km: closest_approach(&events),
        generated_at: Local::now().naive_local(),
        contractor: ContractorIdentity::default(),
        requester: RequesterIdentity::default(),
    };

    println!("\n{}", synthesize(&context, ReportVariant::Plain));

    Ok(())
}

fn event_line(event: &StrikeEvent) -> String {
    format!(
        "{} | {:.2} km {} | intensity {} ({})",
        event.time.format("%H:%M:%S"),
        event.distance_km,
        event.direction.label(),
        event.intensity,
        event.band().label()
    )
}

fn render_stats(stats: &DistanceStats) {
    println!("Distance statistics:");
    for (ring, count) in stats.ring_counts() {
        println!("  - within {ring} km: {count}");
    }
    println!("  - total: {}", stats.total());
}
