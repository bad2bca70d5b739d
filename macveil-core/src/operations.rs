use anyhow::{Context, Result};
use macveil_evasion::{KernelLinkOps, LinkOps, MacAddress, MacManager, OuiDatabase, Spoofer};
use serde_json::{json, Value};

use crate::cli::{
    Commands, InterfaceArgs, OuiCommand, OuiDeviceTypeArgs, OuiLookupArgs, OuiSearchArgs,
    RevertArgs, SetArgs, SpoofArgs,
};
use crate::config::MacveilConfig;

pub type HandlerResult = (String, Value);

/// Run one command against the live kernel.
pub fn dispatch_command(config: &MacveilConfig, command: Commands) -> Result<HandlerResult> {
    dispatch_with(KernelLinkOps, config, command)
}

/// Run one command through the given kernel seam.
pub fn dispatch_with<L: LinkOps>(
    ops: L,
    config: &MacveilConfig,
    command: Commands,
) -> Result<HandlerResult> {
    let db = OuiDatabase::builtin();
    match command {
        Commands::Oui(sub) => match sub {
            OuiCommand::Lookup(args) => handle_oui_lookup(&db, args),
            OuiCommand::Search(args) => handle_oui_search(&db, args),
            OuiCommand::DeviceType(args) => handle_oui_device_type(&db, args),
            OuiCommand::Popular => handle_oui_popular(&db),
        },
        Commands::List => handle_list(&MacManager::new(ops)),
        Commands::Show(args) => handle_show(&MacManager::new(ops), &db, args),
        Commands::Set(args) => {
            let manager = manager(ops, args.cycle_link || config.cycle_link);
            handle_set(&manager, args)
        }
        Commands::Revert(args) => {
            let manager = manager(ops, args.cycle_link || config.cycle_link);
            handle_revert(&manager, args)
        }
        Commands::Spoof(args) => {
            let manager = manager(ops, args.cycle_link || config.cycle_link);
            handle_spoof(&Spoofer::new(manager, db), config, args)
        }
    }
}

fn manager<L: LinkOps>(ops: L, cycle_link: bool) -> MacManager<L> {
    let mut manager = MacManager::new(ops);
    manager.set_cycle_link(cycle_link);
    manager
}

fn handle_list<L: LinkOps>(manager: &MacManager<L>) -> Result<HandlerResult> {
    let snapshot = manager.snapshot().context("collecting interface addresses")?;
    let message = format!("Found {} interface(s)", snapshot.len());
    Ok((message, json!({ "interfaces": snapshot })))
}

fn handle_show<L: LinkOps>(
    manager: &MacManager<L>,
    db: &OuiDatabase,
    args: InterfaceArgs,
) -> Result<HandlerResult> {
    let interface = args.interface;
    let up = manager
        .is_up(&interface)
        .with_context(|| format!("reading link state of {interface}"))?;
    let current = manager
        .current_address(&interface)
        .with_context(|| format!("reading current address of {interface}"))?;
    let permanent = match manager.permanent_address(&interface) {
        Ok(mac) => Some(mac),
        Err(e) => {
            log::warn!("Permanent address of {} unavailable: {}", interface, e);
            None
        }
    };
    let vendor = db.find_vendor(&current).ok().map(|v| v.name.clone());
    let device_type = db.find_device_type(&current).ok();

    let data = json!({
        "interface": interface,
        "up": up,
        "current": current,
        "permanent": permanent,
        "changed": permanent.map(|p| p != current),
        "locally_administered": current.is_local(),
        "vendor": vendor,
        "device_type": device_type,
    });
    Ok((format!("{interface}: {current}"), data))
}

fn handle_set<L: LinkOps>(manager: &MacManager<L>, args: SetArgs) -> Result<HandlerResult> {
    let SetArgs { interface, mac, .. } = args;
    let previous = manager
        .current_address(&interface)
        .with_context(|| format!("reading current address of {interface}"))?;

    manager
        .apply_address(&interface, &mac)
        .with_context(|| format!("setting MAC on {interface}"))?;

    let current = manager.current_address(&interface)?;
    let data = json!({
        "interface": interface,
        "previous": previous,
        "current": current,
    });
    Ok(("MAC set".to_string(), data))
}

fn handle_revert<L: LinkOps>(manager: &MacManager<L>, args: RevertArgs) -> Result<HandlerResult> {
    let interface = args.interface;
    let previous = manager
        .current_address(&interface)
        .with_context(|| format!("reading current address of {interface}"))?;
    let permanent = manager
        .revert(&interface)
        .with_context(|| format!("restoring permanent MAC on {interface}"))?;

    let data = json!({
        "interface": interface,
        "previous": previous,
        "current": permanent,
    });
    Ok(("MAC restored".to_string(), data))
}

fn handle_spoof<L: LinkOps>(
    spoofer: &Spoofer<L>,
    config: &MacveilConfig,
    args: SpoofArgs,
) -> Result<HandlerResult> {
    let policy = args
        .policy
        .with_preserve_universal(args.preserve_universal || config.preserve_universal);
    let outcome = spoofer
        .spoof(&args.interface, policy)
        .with_context(|| format!("applying {} policy to {}", policy, args.interface))?;

    let message = if outcome.verified() {
        format!("MAC spoofed ({policy})")
    } else {
        format!("MAC spoof requested ({policy}) but not confirmed")
    };
    let data = serde_json::to_value(&outcome)?;
    Ok((message, data))
}

fn handle_oui_lookup(db: &OuiDatabase, args: OuiLookupArgs) -> Result<HandlerResult> {
    let mac = MacAddress::parse(&args.mac)?;
    let vendor = db.find_vendor(&mac)?;
    let data = json!({
        "mac": mac,
        "vendor": vendor,
        "device_type": vendor.device_types.first(),
    });
    Ok((format!("{} belongs to {}", mac, vendor.name), data))
}

fn handle_oui_search(db: &OuiDatabase, args: OuiSearchArgs) -> Result<HandlerResult> {
    let vendors = db.find_vendors_by_keyword(&args.keyword);
    let message = format!("{} vendor(s) match '{}'", vendors.len(), args.keyword);
    Ok((message, json!({ "vendors": vendors })))
}

fn handle_oui_device_type(db: &OuiDatabase, args: OuiDeviceTypeArgs) -> Result<HandlerResult> {
    let vendors = db.find_vendors_by_device_type(&args.device_type);
    let message = format!("{} vendor(s) make {}", vendors.len(), args.device_type);
    Ok((message, json!({ "vendors": vendors })))
}

fn handle_oui_popular(db: &OuiDatabase) -> Result<HandlerResult> {
    let records = db.all_popular_ouis();
    let message = format!("{} popular prefix(es)", records.len());
    Ok((message, json!({ "ouis": records })))
}
