use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use delver::build_info;
use delver::character::{create_hero, find_class, ClassTemplate};
use delver::content::ContentTables;
use delver::core::{Campaign, GameConfig, RngSource};
use delver::ui::{ConsoleUi, Frontend, TextOutput, Tone};

#[derive(Debug, Parser)]
#[command(name = "delver", disable_version_flag = true)]
#[command(about = "Delver - a turn-based dungeon crawler for the terminal")]
struct Args {
    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Hero name (asked interactively when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Starting class (asked interactively when omitted)
    #[arg(long)]
    class: Option<String>,

    /// Load content tables from a JSON file instead of the built-in set
    #[arg(long)]
    content: Option<PathBuf>,

    /// Write the built-in content tables as JSON and exit
    #[arg(long)]
    export_content: Option<PathBuf>,

    /// Trash enemies per area before its mid-boss
    #[arg(long)]
    quota: Option<u32>,

    /// Starting gold
    #[arg(long)]
    gold: Option<u32>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print version and build information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = Args::parse();

    if args.version {
        println!("delver {}", build_info::version_line());
        return Ok(());
    }

    if let Some(path) = &args.export_content {
        let json = ContentTables::builtin().to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing content tables to {}", path.display()))?;
        println!("Wrote content tables to {}", path.display());
        return Ok(());
    }

    let content = match &args.content {
        Some(path) => ContentTables::from_path(path)
            .with_context(|| format!("loading content tables from {}", path.display()))?,
        None => ContentTables::builtin(),
    };

    let mut config = GameConfig::default();
    if let Some(quota) = args.quota {
        config.trash_quota = quota;
    }
    if let Some(gold) = args.gold {
        config.starting_gold = gold;
    }

    let rng = match args.seed {
        Some(seed) => {
            info!("Seeded run: {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut ui = ConsoleUi::stdio();
    if args.no_color {
        ui = ui.plain();
    }
    ui.line(Tone::Title, "=== DELVER ===");

    let template = match &args.class {
        Some(name) => match find_class(&content.classes, name) {
            Some(template) => template.clone(),
            None => bail!(
                "unknown class '{}' (choose from: {})",
                name,
                class_names(&content.classes)
            ),
        },
        None => choose_class(&content.classes, &mut ui),
    };
    let name = match args.name {
        Some(name) => name,
        None => ask_name(&mut ui),
    };

    let hero = create_hero(&name, &template);
    let mut campaign = Campaign::new(hero, content, config, RngSource(rng));
    campaign.run(&mut ui);
    Ok(())
}

fn class_names(classes: &[ClassTemplate]) -> String {
    classes
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn choose_class(classes: &[ClassTemplate], ui: &mut impl Frontend) -> ClassTemplate {
    let options: Vec<String> = classes
        .iter()
        .map(|c| {
            format!(
                "{} - {} health, {} damage, {}% crit",
                c.name, c.health, c.base_damage, c.crit_chance
            )
        })
        .collect();
    let pick = ui.choose("Choose your class:", &options);
    classes[pick].clone()
}

fn ask_name(ui: &mut impl Frontend) -> String {
    let name = ui.read_text("What is your name, adventurer?");
    if name.is_empty() {
        "Adventurer".to_string()
    } else {
        name
    }
}
