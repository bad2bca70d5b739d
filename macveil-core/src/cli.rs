use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use macveil_evasion::SpoofPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "macveil",
    author,
    version,
    about = "Inspect, randomize and spoof network interface hardware addresses"
)]
pub struct Cli {
    /// Configuration file (defaults to /etc/macveil/config.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for command responses
    #[arg(
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Json,
        global = true
    )]
    pub output_format: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Current and permanent address of every non-loopback interface
    List,
    /// Addresses, link state and vendor of one interface
    Show(InterfaceArgs),
    /// Set an explicit address (interface must be down unless --cycle-link)
    Set(SetArgs),
    /// Restore the burned-in address
    Revert(RevertArgs),
    /// Replace the address according to a policy
    Spoof(SpoofArgs),
    #[command(subcommand)]
    Oui(OuiCommand),
}

#[derive(Args, Debug)]
pub struct InterfaceArgs {
    /// Interface name (e.g. eth0)
    #[arg(long)]
    pub interface: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[arg(long)]
    pub interface: String,

    /// New address, e.g. 02:11:22:33:44:55
    #[arg(long)]
    pub mac: String,

    /// Bring the link down for the change and restore its state afterwards
    #[arg(long)]
    pub cycle_link: bool,
}

#[derive(Args, Debug)]
pub struct RevertArgs {
    #[arg(long)]
    pub interface: String,

    #[arg(long)]
    pub cycle_link: bool,
}

#[derive(Args, Debug)]
pub struct SpoofArgs {
    #[arg(long)]
    pub interface: String,

    /// random | same-vendor | same-device-type | any-device-type | popular
    #[arg(long)]
    pub policy: SpoofPolicy,

    /// Clear the locally administered bit (random and same-vendor only).
    /// Without it same-vendor sets the bit, so the result keeps the vendor's
    /// prefix bytes but no longer resolves to that vendor.
    #[arg(long)]
    pub preserve_universal: bool,

    #[arg(long)]
    pub cycle_link: bool,
}

#[derive(Subcommand, Debug)]
pub enum OuiCommand {
    /// Vendor and device type owning an address
    Lookup(OuiLookupArgs),
    /// Vendors whose name contains a keyword
    Search(OuiSearchArgs),
    /// Vendors classified under a device type
    DeviceType(OuiDeviceTypeArgs),
    /// Prefixes flagged as popular
    Popular,
}

#[derive(Args, Debug)]
pub struct OuiLookupArgs {
    #[arg(long)]
    pub mac: String,
}

#[derive(Args, Debug)]
pub struct OuiSearchArgs {
    /// Case-insensitive substring; omit to list every vendor
    #[arg(long, default_value = "")]
    pub keyword: String,
}

#[derive(Args, Debug)]
pub struct OuiDeviceTypeArgs {
    #[arg(long = "device-type")]
    pub device_type: String,
}
