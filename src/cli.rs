use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use motor_quotation::vehicle::{CoverType, Subclass, UnitType};
use motor_quotation::ClientDetails;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "motor-quote", version, about = "Motor insurance premium quotations")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Directory with high_risk_makes.csv and toyota_high_risk_models.csv"
    )]
    pub tariff_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rate a vehicle schedule and write the quotation document
    Quote(QuoteArgs),
    /// Rate a single private vehicle
    Private(PrivateArgs),
    /// Rate a single commercial vehicle
    Commercial(CommercialArgs),
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[arg(long, help = "Vehicle schedule CSV")]
    pub vehicles: PathBuf,
    #[command(flatten)]
    pub client: ClientArgs,
    #[arg(long, help = "Directory the quotation is written to")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, help = "Quotation date (YYYY-MM-DD), defaults to today")]
    pub date: Option<NaiveDate>,
    #[arg(long, help = "Lines per document page")]
    pub page_lines: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ClientArgs {
    #[arg(long = "client-name")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub occupation: String,
    #[arg(long, default_value = "")]
    pub producer: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub pin: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub policy_no: String,
}

impl ClientArgs {
    pub fn to_client(&self) -> ClientDetails {
        ClientDetails {
            name: self.name.trim().to_string(),
            address: self.address.clone(),
            occupation: self.occupation.clone(),
            producer: self.producer.clone(),
            location: self.location.clone(),
            pin: self.pin.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            policy_no: self.policy_no.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct PrivateArgs {
    #[arg(long)]
    pub make: String,
    #[arg(long)]
    pub model: String,
    #[arg(long)]
    pub sum_insured: f64,
    #[arg(long, default_value_t = false)]
    pub excess: bool,
    #[arg(long, default_value_t = false)]
    pub pvt: bool,
}

#[derive(Args, Debug)]
pub struct CommercialArgs {
    #[arg(long, help = "Own Goods, General Cartage, Institutional or PSV")]
    pub subclass: Subclass,
    #[arg(long, help = "Comprehensive or TPO")]
    pub cover: CoverType,
    #[arg(long, help = "Required for comprehensive cover")]
    pub sum_insured: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    pub tonnage: f64,
    #[arg(long, help = "Single Unit or Fleet (TPO only, defaults to Single Unit)")]
    pub unit_type: Option<UnitType>,
    #[arg(long, default_value_t = false)]
    pub excess: bool,
    #[arg(long, default_value_t = false)]
    pub pvt: bool,
    #[arg(long, help = "Add passenger legal liability for this many passengers")]
    pub pll_passengers: Option<u32>,
}
