use std::path::PathBuf;

use thiserror::Error;

use crate::{
    graph::Algorithm,
    maze::{DEFAULT_WALL_PROBABILITY, Juncture},
};

/// Environment variable consulted for the seed when `--seed` is not given.
pub const SEED_ENV: &str = "MAZEGRAPH_SEED";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {flag}: {reason}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("{name} {juncture} is outside the {width}x{height} maze")]
    OutOfBounds {
        name: &'static str,
        juncture: Juncture,
        width: u16,
        height: u16,
    },
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub wall_probability: f64,
    /// Seed for the maze generator; `None` draws from the OS.
    pub seed: Option<u64>,
    start: Option<Juncture>,
    end: Option<Juncture>,
    pub algorithms: Vec<Algorithm>,
    /// Directory the log file is written to.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: None,
            start: None,
            end: None,
            algorithms: Algorithm::ALL.to_vec(),
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub const USAGE: &'static str = "\
Usage: mazegraph [OPTIONS]

Options:
  --width <N>          maze width in cells (default 10)
  --height <N>         maze height in cells (default 10)
  --walls <P>          probability that a cell is a wall, 0 to 1 (default 0.3)
  --seed <N>           seed for the maze generator (or MAZEGRAPH_SEED)
  --start <X,Y>        start juncture (default 0,0)
  --end <X,Y>          end juncture (default bottom-right corner)
  --algorithm <NAME>   bfs, dfs, dijkstra or all (default all)
  --log-dir <DIR>      where mazegraph.log is written (default .)";

    const FLAGS: [&'static str; 8] = [
        "--width",
        "--height",
        "--walls",
        "--seed",
        "--start",
        "--end",
        "--algorithm",
        "--log-dir",
    ];

    /// Reads the process arguments, falling back to the environment for the seed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Config::from_args(std::env::args().skip(1))?;
        if config.seed.is_none() {
            if let Ok(value) = std::env::var(SEED_ENV) {
                config.seed = Some(parse_number(SEED_ENV, &value)?);
            }
        }
        Ok(config)
    }

    /// Parses command-line arguments, without the executable name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            let Some(&flag) = Config::FLAGS.iter().find(|&&flag| flag == arg) else {
                return Err(ConfigError::UnknownArgument(arg));
            };
            let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
            match flag {
                "--width" => config.width = parse_number(flag, &value)?,
                "--height" => config.height = parse_number(flag, &value)?,
                "--walls" => config.wall_probability = parse_probability(flag, &value)?,
                "--seed" => config.seed = Some(parse_number(flag, &value)?),
                "--start" => config.start = Some(parse_juncture(flag, &value)?),
                "--end" => config.end = Some(parse_juncture(flag, &value)?),
                "--algorithm" => config.algorithms = parse_algorithms(flag, &value)?,
                _ => config.log_dir = PathBuf::from(value),
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// The start juncture, `(0, 0)` unless configured.
    pub fn start(&self) -> Juncture {
        self.start.unwrap_or(Juncture::new(0, 0))
    }

    /// The end juncture, the bottom-right corner unless configured.
    pub fn end(&self) -> Juncture {
        self.end.unwrap_or(Juncture::new(
            self.width as i32 - 1,
            self.height as i32 - 1,
        ))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (flag, value) in [("--width", self.width), ("--height", self.height)] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    flag,
                    value: value.to_string(),
                    reason: "must be at least 1",
                });
            }
        }
        for (name, juncture) in [("start", self.start()), ("end", self.end())] {
            let in_bounds = juncture.x >= 0
                && juncture.y >= 0
                && juncture.x < self.width as i32
                && juncture.y < self.height as i32;
            if !in_bounds {
                return Err(ConfigError::OutOfBounds {
                    name,
                    juncture,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: value.to_string(),
        reason: "expected a non-negative integer in range",
    })
}

fn parse_probability(flag: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(ConfigError::InvalidValue {
            flag,
            value: value.to_string(),
            reason: "expected a number between 0 and 1",
        }),
    }
}

fn parse_juncture(flag: &'static str, value: &str) -> Result<Juncture, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        flag,
        value: value.to_string(),
        reason: "expected two integers separated by a comma",
    };
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Juncture::new(x, y))
}

fn parse_algorithms(flag: &'static str, value: &str) -> Result<Vec<Algorithm>, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "bfs" => Ok(vec![Algorithm::Bfs]),
        "dfs" => Ok(vec![Algorithm::Dfs]),
        "dijkstra" => Ok(vec![Algorithm::Dijkstra]),
        "all" => Ok(Algorithm::ALL.to_vec()),
        _ => Err(ConfigError::InvalidValue {
            flag,
            value: value.to_string(),
            reason: "expected bfs, dfs, dijkstra or all",
        }),
    }
}
