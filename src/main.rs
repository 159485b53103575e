//! Motor Quotation CLI
//!
//! Rates vehicle schedules and single vehicles, and writes quotation documents.
//! Supports JSON output for API integration via --json flag.
//! Directory and page defaults come from the MOTOR_QUOTE_* environment
//! variables (see `motor_quotation::config`); command-line flags override them.

mod cli;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use cli::{Cli, Commands, CommercialArgs, PrivateArgs, QuoteArgs};
use motor_quotation::quotation::{
    format_kshs, format_optional_kshs, format_tonnage, QuoteTotals, RatedVehicle,
};
use motor_quotation::vehicle::{load_schedule, CoverType, UnitType};
use motor_quotation::{
    ClientDetails, CommercialRatingInput, PrivateRatingInput, QuotationDocument, QuoteConfig,
    QuoteSummary, ScheduleRater,
};

#[derive(Serialize)]
struct QuoteResponse<'a> {
    client: &'a ClientDetails,
    date: NaiveDate,
    summary: &'a QuoteSummary,
    totals: QuoteTotals,
    document: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = QuoteConfig::from_env();
    if let Some(dir) = &cli.tariff_dir {
        config = config.with_tariff_dir(dir);
    }

    let tariff = config.load_tariff().context("Failed to load tariff")?;
    let rater = ScheduleRater::from_tariff(&tariff);

    match cli.command {
        Commands::Quote(args) => run_quote(&rater, config, args, cli.json),
        Commands::Private(args) => run_private(&rater, args, cli.json),
        Commands::Commercial(args) => run_commercial(&rater, args, cli.json),
    }
}

fn run_quote(rater: &ScheduleRater, mut config: QuoteConfig, args: QuoteArgs, json: bool) -> Result<()> {
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(lines) = args.page_lines {
        config = config.with_page_lines(lines);
    }

    let client = args.client.to_client();
    if client.name.is_empty() {
        bail!("Client name must not be empty");
    }

    let vehicles = load_schedule(&args.vehicles)
        .with_context(|| format!("Failed to load vehicle schedule {}", args.vehicles.display()))?;
    if vehicles.is_empty() {
        bail!("Vehicle schedule {} has no vehicles", args.vehicles.display());
    }
    info!("Loaded {} vehicles from {}", vehicles.len(), args.vehicles.display());

    let summary = rater.rate_schedule(&vehicles);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let document = QuotationDocument::new(&config.branding, &client, date, &summary)
        .with_layout(config.layout());
    let path = document
        .write_to_dir(&config.output_dir)
        .with_context(|| format!("Failed to write quotation to {}", config.output_dir.display()))?;

    if json {
        let response = QuoteResponse {
            client: &client,
            date,
            summary: &summary,
            totals: summary.totals(),
            document: path,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let totals = summary.totals();
    println!("Quotation for {}", client.name);
    println!("==========================\n");
    println!("Vehicles: {} ({} private, {} commercial)",
        totals.vehicle_count, totals.private_count, totals.commercial_count);
    println!("Private total:    {}", format_kshs(totals.private_total));
    println!("Commercial total: {}", format_kshs(totals.commercial_total));
    println!("Grand total:      {}", format_kshs(totals.grand_total));
    println!("\nQuotation written to {}", path.display());
    Ok(())
}

fn run_private(rater: &ScheduleRater, args: PrivateArgs, json: bool) -> Result<()> {
    let input = PrivateRatingInput::new(args.make, args.model, args.sum_insured)
        .with_excess(args.excess)
        .with_pvt(args.pvt);
    input.validate()?;

    let result = rater.private_rater().rate(&input);
    if json {
        let rated = RatedVehicle::Private { input, result };
        println!("{}", serde_json::to_string_pretty(&rated)?);
        return Ok(());
    }

    println!("{} {} ({})", input.normalized_make(), input.normalized_model(), result.category.label());
    println!("  Sum Insured: {}", format_kshs(input.sum_insured));
    println!("  Premium:     {}", format_kshs(result.base_premium));
    println!("  Excess:      {}", format_kshs(result.excess_premium));
    println!("  PVT:         {}", format_kshs(result.pvt_premium));
    println!("  Total:       {}", format_kshs(result.total_premium));
    Ok(())
}

fn commercial_input(args: &CommercialArgs) -> Result<CommercialRatingInput> {
    let input = match args.cover {
        CoverType::Comprehensive => {
            let Some(sum_insured) = args.sum_insured else {
                bail!("--sum-insured is required for comprehensive cover");
            };
            CommercialRatingInput::comprehensive(args.subclass, sum_insured, args.tonnage)
        }
        CoverType::Tpo => {
            let unit_type = args.unit_type.unwrap_or(UnitType::SingleUnit);
            CommercialRatingInput::third_party_only(args.subclass, args.tonnage, unit_type)
        }
    }
    .with_excess(args.excess)
    .with_pvt(args.pvt);

    Ok(match args.pll_passengers {
        Some(passengers) if args.subclass.carries_passengers() => input.with_pll(passengers),
        Some(_) => bail!("Passenger legal liability does not apply to {}", args.subclass),
        None => input,
    })
}

fn run_commercial(rater: &ScheduleRater, args: CommercialArgs, json: bool) -> Result<()> {
    let input = commercial_input(&args)?;
    input.validate()?;

    let result = rater.commercial_rater().rate(&input);
    if json {
        let rated = RatedVehicle::Commercial { input, result };
        println!("{}", serde_json::to_string_pretty(&rated)?);
        return Ok(());
    }

    println!("{} {}", input.subclass, input.cover_type());
    println!("  Sum Insured: {}", format_optional_kshs(input.cover.sum_insured()));
    println!("  Tonnage:     {}", format_tonnage(input.cover.tonnage()));
    println!("  Premium:     {}", format_kshs(result.base_premium));
    println!("  Excess:      {}", format_kshs(result.excess_premium));
    println!("  PVT:         {}", format_kshs(result.pvt_premium));
    println!("  PLL:         {}", format_kshs(result.pll_premium));
    println!("  Total:       {}", format_kshs(result.total_premium));
    Ok(())
}
