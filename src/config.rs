//! Configuration for a game against the computer.

use crate::constants::PieceColor;
use log::LevelFilter;
use std::path::PathBuf;

pub struct Config {
    // Sides
    pub human_color: PieceColor,
    pub ai_color: PieceColor,

    // Computer player
    pub ai_delay_ms: u64,
    pub max_ai_attempts: u32,
    pub seed: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_color: PieceColor::Red,
            ai_color: PieceColor::Black,
            ai_delay_ms: 1000,
            max_ai_attempts: 64,
            seed: None,
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("xiangqi.log"),
        }
    }
}
