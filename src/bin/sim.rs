use std::time::Instant;

use cartel_rs::GameEvent;
use cartel_rs::cli::StatisticsAccumulator;
use cartel_rs::game::{Game, GameConfig, MAX_PLAYERS, MIN_PLAYERS, RoundOutcome};
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(name = "cartel-sim")]
#[command(about = "Cartel Simulator - Run scripted investment games and tally seat statistics")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 5)]
    num: u32,

    /// Number of seats per game (3-7)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Rounds played per game
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Silence console output
    #[arg(long)]
    quiet: bool,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Number of worker threads for parallel execution
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

fn main() {
    let args = Args::parse();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        eprintln!(
            "Error: --players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        );
        std::process::exit(1);
    }

    let mut stats = StatisticsAccumulator::new();

    if args.workers > 1 {
        run_parallel_simulations(&args, &mut stats);
    } else {
        run_sequential_simulations(&args, &mut stats);
    }

    if args.json {
        match serde_json::to_string_pretty(&stats.stats.report(args.players)) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize summary: {err}");
                std::process::exit(1);
            }
        }
    } else if !args.quiet {
        print_summary(&stats, args.players);
    }
}

fn count_turns(outcomes: &[RoundOutcome]) -> u64 {
    outcomes
        .iter()
        .flat_map(|outcome| outcome.events.iter())
        .filter(|event| matches!(event, GameEvent::CardPlayed { .. }))
        .count() as u64
}

fn run_one_game(args: &Args, game_idx: u32) -> Option<(Game, u64, std::time::Duration)> {
    let config = GameConfig {
        num_players: args.players,
        seed: args.seed + game_idx as u64,
    };

    let start = Instant::now();
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Error: {err}");
            return None;
        }
    };
    let outcomes = game.play(args.rounds);
    let duration = start.elapsed();

    Some((game, count_turns(&outcomes), duration))
}

fn run_sequential_simulations(args: &Args, stats: &mut StatisticsAccumulator) {
    for game_idx in 0..args.num {
        let Some((game, turns, duration)) = run_one_game(args, game_idx) else {
            std::process::exit(1);
        };

        stats.after(&game, turns, duration);

        if !args.quiet && !args.json {
            let last_n = 10;
            if game_idx < last_n || game_idx >= args.num.saturating_sub(last_n) {
                let scores: String = game
                    .scores()
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                println!(
                    "Game {:>4}: Scores=[{}], Winner=Seat {}, Turns={:>4}, Duration={:?}",
                    game_idx + 1,
                    scores,
                    game.winner(),
                    turns,
                    duration
                );
            } else if (game_idx + 1) % 100 == 0 {
                print!(".");
                use std::io::Write;
                let _ = std::io::stdout().flush();
            }
        }
    }
}

fn run_parallel_simulations(args: &Args, stats: &mut StatisticsAccumulator) {
    use std::sync::Arc;
    use std::thread;

    let args = Arc::new(args.clone());

    let mut handles = Vec::new();
    let games_per_worker = args.num as usize / args.workers;
    let remainder = args.num as usize % args.workers;

    for worker_id in 0..args.workers {
        let args_clone = Arc::clone(&args);

        let num_games = if worker_id < remainder {
            games_per_worker + 1
        } else {
            games_per_worker
        };

        let handle = thread::spawn(move || {
            let mut local_stats = StatisticsAccumulator::new();
            let start_idx = worker_id * games_per_worker + worker_id.min(remainder);

            for local_idx in 0..num_games {
                let game_idx = (start_idx + local_idx) as u32;
                if let Some((game, turns, duration)) = run_one_game(&args_clone, game_idx) {
                    local_stats.after(&game, turns, duration);
                }
            }

            local_stats
        });

        handles.push(handle);
    }

    for handle in handles {
        if let Ok(worker_stats) = handle.join() {
            stats.stats.merge(worker_stats.stats);
        }
    }
}

fn print_summary(stats: &StatisticsAccumulator, num_players: usize) {
    println!("\n{}", "=".repeat(80));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(80));

    println!("\nSeat Summary:");
    println!(
        "{:<10} {:<10} {:<12} {:<12}",
        "Seat", "Wins", "Win Rate", "Avg Score"
    );
    println!("{}", "-".repeat(50));

    for seat in 0..num_players {
        let wins = stats.stats.wins.get(&seat).copied().unwrap_or(0);
        println!(
            "{:<10} {:<10} {:<11.1}% {:<12.2}",
            format!("Seat {}", seat),
            wins,
            stats.stats.win_rate(seat),
            stats.stats.avg_score(seat)
        );
    }

    println!("\nGame Summary:");
    println!("  Total Games: {}", stats.stats.games);
    println!("  Avg Rounds: {:.2}", stats.stats.get_avg_rounds());
    println!("  Avg Turns: {:.2}", stats.stats.get_avg_turns());
    println!("  Avg Duration: {:.2?}", stats.stats.get_avg_duration());
}
