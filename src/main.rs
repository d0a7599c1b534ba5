use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use twenty_one::config::SimulationConfig;
use twenty_one::game::Outcome;
use twenty_one::rng::GameRng;
use twenty_one::simulation::{
    play_game_record, summarize_trials_parallel, summarize_trials_parallel_with,
    summarize_trials_seeded, TrialSummary,
};
use twenty_one::strategy::StrategySpec;

#[derive(Parser)]
#[command(name = "twenty-one")]
#[command(about = "Twenty-One strategy simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v info, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and show how it went
    Play {
        /// Player strategy
        #[arg(short, long, default_value = "louis")]
        player: StrategySpec,

        /// House strategy
        #[arg(short = 'H', long, default_value = "stop_at(17)")]
        house: StrategySpec,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a batch of games and report the player's win rate
    Run {
        /// Number of games to simulate
        #[arg(short, long)]
        num_games: Option<u32>,

        /// Player strategy
        #[arg(short, long)]
        player: Option<StrategySpec>,

        /// House strategy
        #[arg(short = 'H', long)]
        house: Option<StrategySpec>,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file; flags given here take precedence
        #[arg(short, long)]
        config: Option<String>,

        /// Run on a single thread
        #[arg(long)]
        sequential: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two player strategies against the same house
    Compare {
        /// First player strategy
        player1: StrategySpec,

        /// Second player strategy
        player2: StrategySpec,

        /// House strategy
        #[arg(short = 'H', long, default_value = "stop_at(17)")]
        house: StrategySpec,

        /// Number of games per strategy
        #[arg(short, long, default_value = "10000")]
        num_games: u32,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Find the best stop_at limit against a house strategy
    Sweep {
        /// House strategy
        #[arg(short = 'H', long, default_value = "stop_at(17)")]
        house: StrategySpec,

        /// Number of games per limit
        #[arg(short, long, default_value = "10000")]
        num_games: u32,

        /// Smallest limit to try
        #[arg(long, default_value = "10")]
        min: u32,

        /// Largest limit to try
        #[arg(long, default_value = "21")]
        max: u32,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Play { player, house, seed } => {
            play_single(&player, &house, seed);
        }
        Commands::Run {
            num_games,
            player,
            house,
            seed,
            config,
            sequential,
            json,
        } => {
            let mut settings = match config {
                Some(path) => match SimulationConfig::from_file(&path) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("✗ Failed to load config '{}': {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => SimulationConfig::default(),
            };
            if let Some(n) = num_games {
                settings.trials = n;
            }
            if let Some(p) = player {
                settings.player = p;
            }
            if let Some(h) = house {
                settings.house = h;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            if sequential {
                settings.parallel = false;
            }
            run_simulation(&settings, json);
        }
        Commands::Compare {
            player1,
            player2,
            house,
            num_games,
            seed,
        } => {
            compare_strategies(&player1, &player2, &house, num_games, seed);
        }
        Commands::Sweep {
            house,
            num_games,
            min,
            max,
            seed,
        } => {
            if min > max {
                eprintln!("✗ --min ({}) must not exceed --max ({})", min, max);
                std::process::exit(1);
            }
            sweep_limits(&house, num_games, min, max, seed);
        }
    }
}

/// Pick a base seed, either the one given or a fresh random one
fn base_seed(seed: Option<u64>) -> u64 {
    GameRng::new(seed).seed()
}

fn play_single(player: &StrategySpec, house: &StrategySpec, seed: Option<u64>) {
    let mut rng = GameRng::new(seed);
    println!("\n=== Twenty-One (seed: {}) ===\n", rng.seed());
    println!("Player: {}", player);
    println!("House:  {}", house);
    println!();

    let game = play_game_record(house, player, &mut rng);

    println!("Player up-card {:>2}, final tally {:>2}", game.player_up, game.player_tally);
    println!("House  up-card {:>2}, final tally {:>2}", game.house_up, game.house_tally);
    println!();
    println!("Outcome: {}", game.outcome);
}

fn run_simulation(settings: &SimulationConfig, json: bool) {
    let seed = base_seed(settings.seed);

    if !json {
        println!("\n=== Twenty-One Simulator ===\n");
        println!("Player: {}", settings.player);
        println!("House:  {}", settings.house);
        println!("Games:  {}", settings.trials);
        println!("Seed:   {}", seed);
        println!();
    }

    let start = std::time::Instant::now();
    let summary = if settings.parallel {
        summarize_trials_parallel(&settings.player, &settings.house, settings.trials, seed)
    } else {
        summarize_trials_seeded(&settings.player, &settings.house, settings.trials, seed)
    };
    let elapsed = start.elapsed();

    if json {
        let report = serde_json::json!({
            "player": settings.player,
            "house": settings.house,
            "seed": seed,
            "summary": summary,
            "win_rate": summary.win_rate(),
            "standard_error": summary.standard_error(),
            "avg_player_tally": summary.avg_player_tally(),
            "avg_house_tally": summary.avg_house_tally(),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== Results ===\n");
    print!("{}", summary);
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        settings.trials as f64 / elapsed.as_secs_f64()
    );
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})") {
        pb.set_style(style);
    }
    pb
}

fn compare_strategies(
    player1: &StrategySpec,
    player2: &StrategySpec,
    house: &StrategySpec,
    num_games: u32,
    seed: Option<u64>,
) {
    let seed = base_seed(seed);

    println!("\n=== Strategy Comparison ===\n");
    println!("House: {}", house);
    println!("Games: {} per strategy (seed {})\n", num_games, seed);

    let start = std::time::Instant::now();
    let pb = progress_bar(num_games as u64 * 2);
    // Same seed for both so each strategy sees the same up-cards
    let results: Vec<TrialSummary> = [player1, player2]
        .iter()
        .map(|player| {
            summarize_trials_parallel_with(*player, house, num_games, seed, |_| pb.inc(1))
        })
        .collect();
    pb.finish_and_clear();
    let elapsed = start.elapsed();

    let (s1, s2) = (&results[0], &results[1]);
    let name1 = player1.to_string();
    let name2 = player2.to_string();

    println!("{:20} {:>26} {:>26}", "Metric", name1, name2);
    println!("{:-<74}", "");
    println!(
        "{:20} {:>25.2}% {:>25.2}%",
        "Win rate",
        s1.win_rate() * 100.0,
        s2.win_rate() * 100.0
    );
    println!(
        "{:20} {:>25.2}% {:>25.2}%",
        "Busted",
        s1.fraction(Outcome::UserBusted) * 100.0,
        s2.fraction(Outcome::UserBusted) * 100.0
    );
    println!(
        "{:20} {:>25.2}% {:>25.2}%",
        "House busted",
        s1.fraction(Outcome::HouseBusted) * 100.0,
        s2.fraction(Outcome::HouseBusted) * 100.0
    );

    println!();
    let diff = s1.win_rate() - s2.win_rate();
    if diff > 0.0 {
        println!("✓ {} has {:.2}% higher win rate", name1, diff * 100.0);
    } else if diff < 0.0 {
        println!("✓ {} has {:.2}% higher win rate", name2, -diff * 100.0);
    } else {
        println!("Both strategies have the same win rate");
    }

    println!("\nCompleted in {:.2?}", elapsed);
}

fn sweep_limits(house: &StrategySpec, num_games: u32, min: u32, max: u32, seed: Option<u64>) {
    let seed = base_seed(seed);
    let limits: Vec<u32> = (min..=max).collect();

    println!("\n=== stop_at Sweep ===\n");
    println!("House: {}", house);
    println!("Limits: {}..={}", min, max);
    println!("Games: {} per limit (seed {})\n", num_games, seed);

    let pb = progress_bar(limits.len() as u64 * num_games as u64);
    let results: Vec<(u32, TrialSummary)> = limits
        .par_iter()
        .map(|&limit| {
            let player = StrategySpec::StopAt(limit);
            let summary = summarize_trials_seeded(&player, house, num_games, seed);
            pb.inc(num_games as u64);
            (limit, summary)
        })
        .collect();
    pb.finish_and_clear();

    println!("{:>6} {:>10} {:>10}", "Limit", "Win rate", "Busted");
    let mut best: Option<&(u32, TrialSummary)> = None;
    for entry in &results {
        let (limit, summary) = entry;
        let bar = "█".repeat((summary.win_rate() * 50.0) as usize);
        println!(
            "{:>6} {:>9.2}% {:>9.2}% {}",
            limit,
            summary.win_rate() * 100.0,
            summary.fraction(Outcome::UserBusted) * 100.0,
            bar
        );
        if best.map_or(true, |(_, b)| summary.win_rate() > b.win_rate()) {
            best = Some(entry);
        }
    }

    if let Some((limit, summary)) = best {
        println!(
            "\n✓ Best: stop_at({}) wins {:.2}% ± {:.2}%",
            limit,
            summary.win_rate() * 100.0,
            summary.standard_error() * 100.0
        );
    }
}
