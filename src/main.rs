//! Muster - Entry Point
//!
//! Interactive tracker for a tabletop campaign game session: pick an army
//! from the campaign data, then track wounds, activations, and status
//! through the rounds. Sessions save to and restore from JSON snapshots.

use clap::Parser;
use muster::campaign::CampaignData;
use muster::core::config::TrackerConfig;
use muster::core::error::Result;
use muster::data::DataStore;
use muster::force::army::Army;
use muster::force::unit::StatusFlag;
use muster::tracker::session::Session;
use muster::tracker::snapshot::GameSnapshot;
use std::io::{self, Write};
use std::path::PathBuf;

/// Interactive game tracker for tabletop campaigns
#[derive(Parser, Debug)]
#[command(name = "muster")]
#[command(about = "Track wounds, activations, and morale through a game session")]
struct Args {
    /// Directory holding campaign.json and army exports
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Optional TOML config file (overrides --data-dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Army URL identifier to load immediately
    #[arg(long)]
    army: Option<String>,

    /// Snapshot file to restore on startup
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("muster=info")
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig {
            data_dir: args.data_dir.clone(),
            ..TrackerConfig::default()
        },
    };

    let store = DataStore::from_config(&config);
    let campaign = store.load_campaign()?;
    tracing::info!(
        "campaign loaded: {} armies, mission progress {}%",
        campaign.armies.len(),
        campaign.progress_percent()
    );

    println!("\n=== MUSTER ===");
    println!("Campaign game tracker");
    println!();
    print_help();

    let mut session = Session::new();
    let mut army: Option<Army> = None;

    let startup_army = args.army.or_else(|| config.default_army.clone());
    if let Some(url) = startup_army {
        army = load_army(&store, &url);
    }
    if let (Some(path), Some(current)) = (&args.snapshot, army.as_mut()) {
        match GameSnapshot::load(path) {
            Ok(snapshot) => {
                let restored = snapshot.restore(current, &mut session);
                println!("Restored {} units from {}", restored, path.display());
            }
            Err(error) => eprintln!("Could not restore snapshot: {}", error),
        }
    }

    loop {
        if let Some(current) = &army {
            display_status(current, &session);
        } else {
            println!("\nNo army loaded. Use `armies` and `load <url>`.");
        }

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "armies" => print_armies(&campaign),
            "load" => match rest.first() {
                Some(url) => army = load_army(&store, url),
                None => println!("Usage: load <army-url>"),
            },
            "units" => match &army {
                Some(current) => print_units(current),
                None => println!("Load an army first"),
            },
            "round" => {
                if let Some(current) = army.as_mut() {
                    session.next_round(current);
                    println!("Round {} started (+1 CP)", session.round);
                }
            }
            "back" => {
                session.previous_round();
                println!("Back to round {}", session.round);
            }
            "event" => {
                let event = session.roll_event(&mut rand::thread_rng());
                println!("Event: {} - {}", event.name, event.description);
            }
            "reset" => {
                if let Some(current) = army.as_mut() {
                    current.reset_health();
                    println!("All wounds and statuses cleared");
                }
            }
            "damage" | "heal" => {
                let amount = rest
                    .get(1)
                    .and_then(|value| value.parse::<u32>().ok())
                    .unwrap_or(1);
                match (army.as_mut(), rest.first()) {
                    (Some(current), Some(id)) => {
                        let applied = if command == "damage" {
                            current.apply_wounds(id, amount)
                        } else {
                            current.heal_wounds(id, amount)
                        };
                        match applied {
                            Some(applied) => println!("{} {} wounds", command, applied),
                            None => println!("Unknown unit: {}", id),
                        }
                    }
                    _ => println!("Usage: {} <unit-id> [amount]", command),
                }
            }
            "act" | "deact" => match (army.as_mut(), rest.first()) {
                (Some(current), Some(id)) => {
                    if current.set_activation(id, command == "act").is_none() {
                        println!("Unknown unit: {}", id);
                    }
                }
                _ => println!("Usage: {} <unit-id>", command),
            },
            "shaken" | "stunned" | "pinned" => match (army.as_mut(), rest.first()) {
                (Some(current), Some(id)) => {
                    let flag = match command {
                        "shaken" => StatusFlag::Shaken,
                        "stunned" => StatusFlag::Stunned,
                        _ => StatusFlag::Pinned,
                    };
                    let on = rest.get(1).map(|v| *v != "off").unwrap_or(true);
                    if current.set_status(id, flag, on).is_none() {
                        println!("Unknown unit: {}", id);
                    }
                }
                _ => println!("Usage: {} <unit-id> [off]", command),
            },
            "save" => match &army {
                Some(current) => {
                    let path = rest
                        .first()
                        .map(PathBuf::from)
                        .or_else(|| config.autosave.clone())
                        .unwrap_or_else(|| PathBuf::from("active_game.json"));
                    match GameSnapshot::capture(current, &session).save(&path) {
                        Ok(()) => println!("Saved to {}", path.display()),
                        Err(error) => eprintln!("Save failed: {}", error),
                    }
                }
                None => println!("Load an army first"),
            },
            "restore" => match (army.as_mut(), rest.first()) {
                (Some(current), Some(path)) => match GameSnapshot::load(&PathBuf::from(path)) {
                    Ok(snapshot) => {
                        let restored = snapshot.restore(current, &mut session);
                        println!("Restored {} units", restored);
                    }
                    Err(error) => eprintln!("Restore failed: {}", error),
                },
                _ => println!("Usage: restore <path>"),
            },
            other => println!("Unknown command: {} (try `help`)", other),
        }
    }

    Ok(())
}

fn load_army(store: &DataStore, url: &str) -> Option<Army> {
    match store.load_army(url) {
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("Skipped unit '{}': {}", failure.name, failure.error);
            }
            println!(
                "Loaded {} ({} pts / {} pts limit, {} units)",
                report.army.name,
                report.army.points_used,
                report.army.points_limit,
                report.army.units.len()
            );
            Some(report.army)
        }
        Err(error) => {
            eprintln!("Could not load army '{}': {}", url, error);
            None
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  armies                 - List campaign armies");
    println!("  load <url>             - Load an army by URL identifier");
    println!("  units                  - Show the roster with current state");
    println!("  damage <id> [n]        - Apply wounds to a unit");
    println!("  heal <id> [n]          - Heal wounds on a unit");
    println!("  act / deact <id>       - Toggle a unit's activation");
    println!("  shaken|stunned|pinned <id> [off] - Set a status flag");
    println!("  round / back           - Advance or rewind the round counter");
    println!("  event                  - Roll a random event");
    println!("  reset                  - Clear all wounds and statuses");
    println!("  save [path]            - Snapshot the session to JSON");
    println!("  restore <path>         - Restore a snapshot");
    println!("  quit                   - Exit");
}

fn print_armies(campaign: &CampaignData) {
    println!("Campaign armies:");
    for option in campaign.army_options() {
        println!("  {} - {} ({})", option.url, option.name, option.player);
    }
    println!("Leaderboard:");
    for (place, entry) in campaign.leaderboard().iter().enumerate() {
        println!(
            "  {}. {} - {} wins, {} objectives",
            place + 1,
            entry.army_name,
            entry.wins,
            entry.objectives
        );
    }
}

fn display_status(army: &Army, session: &Session) {
    println!(
        "\n[{}] Round {} | CP {} | {} / {} pts | {} activations",
        army.name,
        session.round,
        session.command_points,
        army.points_used,
        army.points_limit,
        army.activation_roster.len()
    );
}

fn print_units(army: &Army) {
    for unit in &army.units {
        let Some(state) = army.unit_state(&unit.selection_id) else {
            continue;
        };
        let mut markers = String::new();
        if state.activated {
            markers.push_str(" [activated]");
        }
        if state.destroyed {
            markers.push_str(" [destroyed]");
        }
        if state.status.shaken {
            markers.push_str(" [shaken]");
        }
        if state.status.stunned {
            markers.push_str(" [stunned]");
        }
        if state.status.pinned {
            markers.push_str(" [pinned]");
        }
        println!(
            "  {} {} Q{}+ D{}+ | {}/{} wounds{}",
            unit.selection_id,
            unit.display_name(),
            unit.quality,
            unit.defense,
            state.wounds,
            state.max_wounds,
            markers
        );
        for weapon in &unit.loadout {
            println!("      {}", weapon.label());
        }
    }
}
