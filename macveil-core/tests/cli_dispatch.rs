use std::sync::Mutex;

use clap::Parser;
use macveil_core::{dispatch_command, dispatch_with, Cli, Commands, MacveilConfig, OutputFormat};
use macveil_evasion::{
    EvasionError, InterfaceInfo, LinkOps, MacAddress, Result, SpoofPolicy,
};

struct FakeLink {
    up: Mutex<bool>,
    current: Mutex<MacAddress>,
    permanent: MacAddress,
    root: bool,
}

impl FakeLink {
    fn new(root: bool) -> Self {
        let permanent = MacAddress::parse("00:1b:21:0a:0b:0c").unwrap();
        Self {
            up: Mutex::new(false),
            current: Mutex::new(permanent),
            permanent,
            root,
        }
    }

    fn check(&self, interface: &str) -> Result<()> {
        if interface == "eth0" {
            Ok(())
        } else {
            Err(EvasionError::InterfaceNotFound(interface.to_string()))
        }
    }
}

impl LinkOps for FakeLink {
    fn list_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        Ok(vec![self.interface_info("eth0")?])
    }

    fn interface_info(&self, interface: &str) -> Result<InterfaceInfo> {
        self.check(interface)?;
        Ok(InterfaceInfo {
            name: interface.to_string(),
            index: 2,
            up: *self.up.lock().unwrap(),
            loopback: false,
        })
    }

    fn current_address(&self, interface: &str) -> Result<MacAddress> {
        self.check(interface)?;
        Ok(*self.current.lock().unwrap())
    }

    fn permanent_address(&self, interface: &str) -> Result<MacAddress> {
        self.check(interface)?;
        Ok(self.permanent)
    }

    fn write_address(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        self.check(interface)?;
        *self.current.lock().unwrap() = *mac;
        Ok(())
    }

    fn set_link_up(&self, interface: &str, up: bool) -> Result<()> {
        self.check(interface)?;
        *self.up.lock().unwrap() = up;
        Ok(())
    }

    fn is_superuser(&self) -> Result<bool> {
        Ok(self.root)
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("macveil").chain(args.iter().copied())).unwrap()
}

#[test]
fn parses_spoof_arguments() {
    let cli = parse(&[
        "--output",
        "text",
        "spoof",
        "--interface",
        "eth0",
        "--policy",
        "same-vendor",
        "--preserve-universal",
    ]);
    assert_eq!(cli.output_format, OutputFormat::Text);
    match cli.command {
        Commands::Spoof(args) => {
            assert_eq!(args.interface, "eth0");
            assert_eq!(
                args.policy,
                SpoofPolicy::SameVendor {
                    preserve_universal: false
                }
            );
            assert!(args.preserve_universal);
            assert!(!args.cycle_link);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn rejects_unknown_policy() {
    let result = Cli::try_parse_from([
        "macveil",
        "spoof",
        "--interface",
        "eth0",
        "--policy",
        "chaos",
    ]);
    assert!(result.is_err());
}

#[test]
fn json_flag_is_global() {
    let cli = parse(&["oui", "popular", "--json"]);
    assert!(cli.json);
}

#[test]
fn oui_lookup_reports_vendor() {
    let cli = parse(&["oui", "lookup", "--mac", "00:00:00:12:34:56"]);
    let (message, data) = dispatch_command(&MacveilConfig::default(), cli.command).unwrap();
    assert!(message.contains("Xerox"));
    assert_eq!(data["vendor"]["name"], "Xerox");
    assert_eq!(data["device_type"], "printer");
}

#[test]
fn oui_lookup_of_local_address_fails() {
    let cli = parse(&["oui", "lookup", "--mac", "06:00:00:00:00:00"]);
    assert!(dispatch_command(&MacveilConfig::default(), cli.command).is_err());
}

#[test]
fn oui_search_without_keyword_lists_everything() {
    let all = dispatch_command(&MacveilConfig::default(), parse(&["oui", "search"]).command)
        .unwrap()
        .1;
    let none = dispatch_command(
        &MacveilConfig::default(),
        parse(&["oui", "search", "--keyword", "zzzz-not-a-vendor"]).command,
    )
    .unwrap()
    .1;
    assert!(!all["vendors"].as_array().unwrap().is_empty());
    assert!(none["vendors"].as_array().unwrap().is_empty());
}

#[test]
fn oui_device_type_and_popular() {
    let (_, printers) = dispatch_command(
        &MacveilConfig::default(),
        parse(&["oui", "device-type", "--device-type", "Printer"]).command,
    )
    .unwrap();
    assert!(printers["vendors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v["name"] == "Xerox"));

    let (_, popular) =
        dispatch_command(&MacveilConfig::default(), parse(&["oui", "popular"]).command).unwrap();
    assert!(popular["ouis"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["popular"] == true));
}

#[test]
fn set_then_revert_through_dispatch() {
    let config = MacveilConfig::default();
    let ops = FakeLink::new(true);

    let cli = parse(&["set", "--interface", "eth0", "--mac", "02:AA:BB:CC:DD:EE"]);
    let (_, data) = dispatch_with(&ops, &config, cli.command).unwrap();
    assert_eq!(data["previous"], "00:1b:21:0a:0b:0c");
    assert_eq!(data["current"], "02:aa:bb:cc:dd:ee");

    let cli = parse(&["list"]);
    let (_, data) = dispatch_with(&ops, &config, cli.command).unwrap();
    assert_eq!(data["interfaces"][0]["changed"], true);

    let cli = parse(&["revert", "--interface", "eth0"]);
    let (_, data) = dispatch_with(&ops, &config, cli.command).unwrap();
    assert_eq!(data["current"], "00:1b:21:0a:0b:0c");
}

#[test]
fn set_without_root_is_refused() {
    let ops = FakeLink::new(false);
    let cli = parse(&["set", "--interface", "eth0", "--mac", "not-a-mac"]);
    let err = dispatch_with(&ops, &MacveilConfig::default(), cli.command).unwrap_err();
    let root = err.downcast_ref::<EvasionError>().unwrap();
    assert!(matches!(root, EvasionError::InsufficientPrivilege(_)));
}

#[test]
fn set_without_root_is_refused_when_cycling() {
    let ops = FakeLink::new(false);
    let cli = parse(&[
        "set",
        "--interface",
        "eth0",
        "--mac",
        "garbage",
        "--cycle-link",
    ]);
    let err = dispatch_with(&ops, &MacveilConfig::default(), cli.command).unwrap_err();
    let root = err.downcast_ref::<EvasionError>().unwrap();
    assert!(matches!(root, EvasionError::InsufficientPrivilege(_)));
}

#[test]
fn config_enables_link_cycling() {
    let ops = FakeLink::new(true);
    ops.set_link_up("eth0", true).unwrap();

    let cli = parse(&["set", "--interface", "eth0", "--mac", "02:00:00:00:00:01"]);
    assert!(dispatch_with(&ops, &MacveilConfig::default(), cli.command).is_err());

    let config = MacveilConfig {
        cycle_link: true,
        ..MacveilConfig::default()
    };
    let cli = parse(&["set", "--interface", "eth0", "--mac", "02:00:00:00:00:01"]);
    dispatch_with(&ops, &config, cli.command).unwrap();
    assert!(*ops.up.lock().unwrap());
}

#[test]
fn spoof_applies_config_preserve_universal() {
    let ops = FakeLink::new(true);
    let config = MacveilConfig {
        preserve_universal: true,
        ..MacveilConfig::default()
    };
    let cli = parse(&["spoof", "--interface", "eth0", "--policy", "random"]);
    let (message, data) = dispatch_with(&ops, &config, cli.command).unwrap();
    assert!(message.contains("random"));
    assert_eq!(data["policy"]["preserve_universal"], true);

    let current: MacAddress = serde_json::from_value(data["current"].clone()).unwrap();
    assert!(!current.is_local());
}

#[test]
fn show_missing_interface_fails() {
    let ops = FakeLink::new(true);
    let cli = parse(&["show", "--interface", "wlan7"]);
    assert!(dispatch_with(&ops, &MacveilConfig::default(), cli.command).is_err());
}

#[test]
fn preserve_universal_help_explains_same_vendor_default() {
    use clap::CommandFactory;

    let command = Cli::command();
    let spoof = command.find_subcommand("spoof").unwrap();
    let arg = spoof
        .get_arguments()
        .find(|arg| arg.get_id() == "preserve_universal")
        .unwrap();
    let help = arg.get_help().unwrap().to_string();
    assert!(help.contains("no longer resolves to that vendor"));
}
