use clap::{Parser, ValueEnum};
use env_logger::Target;
use log::LevelFilter;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use xiangqi::config::Config;
use xiangqi::constants::PieceColor;
use xiangqi::tui;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Red,
    Black,
}

#[derive(Parser, Debug)]
#[clap(about = "Play Xiangqi in the terminal against a random mover")]
struct Arguments {
    /// Side played by the human
    #[clap(short, long, value_enum, default_value_t = Side::Red)]
    side: Side,

    /// Pause before the computer replies, in milliseconds
    #[clap(short, long, default_value_t = 1000)]
    delay: u64,

    /// Seed for the computer's random choices
    #[clap(long)]
    seed: Option<u64>,

    /// How many random draws the computer gets per turn
    #[clap(long, default_value_t = 64)]
    attempts: u32,

    #[clap(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    #[clap(long, default_value = "xiangqi.log")]
    log_file: PathBuf,
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&config.log_file)?;

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{:5}] {}: {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args(),
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = Arguments::parse();

    let human_color = match arguments.side {
        Side::Red => PieceColor::Red,
        Side::Black => PieceColor::Black,
    };
    let config = Config {
        human_color,
        ai_color: human_color.opponent(),
        ai_delay_ms: arguments.delay,
        max_ai_attempts: arguments.attempts,
        seed: arguments.seed,
        log_level: arguments.log_level,
        log_file: arguments.log_file,
    };

    init_logging(&config)?;
    tui::run(&config)?;
    Ok(())
}
