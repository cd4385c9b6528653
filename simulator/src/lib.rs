use commonware_utils::from_hex_formatted;
use roulette_execution::{
    EngineConfig, EngineError, RandomSpin, RouletteEngine, SeededSpin, SpinSource, TableLimits,
};
use roulette_types::{
    BetCategory, BetKind, BetSpec, InvalidSlot, PlayerSpec, DEFAULT_MAX_BETS_PER_ROUND,
    DEFAULT_MIN_BET, MAX_LEDGER_BETS, MAX_PLAYERS,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, str::FromStr};
use thiserror::Error;
use tracing::{info, warn, Level};

mod report;

pub use report::{KindStats, Report};

/// Configuration for a [Simulator] run.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Hex seed. When present every spin is replayable; otherwise spins use entropy.
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub limits: LimitsConfig,
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LimitsConfig {
    #[serde(default = "default_min_bet")]
    pub min_bet: u64,
    #[serde(default)]
    pub max_bet: Option<u64>,
    #[serde(default = "default_max_bets_per_round")]
    pub max_bets_per_round: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_bet: default_min_bet(),
            max_bet: None,
            max_bets_per_round: default_max_bets_per_round(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub id: String,
    pub balance: u64,
    #[serde(default)]
    pub bets: Vec<BetConfig>,
}

/// A bet placed every round, e.g. `{ type: split, value: 17, with: 20, amount: 5 }`.
#[derive(Debug, Deserialize, Serialize)]
pub struct BetConfig {
    #[serde(rename = "type")]
    pub kind: BetKind,
    #[serde(default)]
    pub value: Option<u8>,
    /// Second number of a split.
    #[serde(default)]
    pub with: Option<u8>,
    pub amount: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be hex: {value}")]
    InvalidHex { field: &'static str, value: String },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("{field} must be <= {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("max_bet ({max}) must be >= min_bet ({min})")]
    InvalidLimits { min: u64, max: u64 },
    #[error("at least one player is required")]
    NoPlayers,
    #[error("player {0} is listed more than once")]
    DuplicatePlayer(String),
    #[error("bet {index} of player {player} is invalid")]
    InvalidBet {
        player: String,
        index: usize,
        #[source]
        source: InvalidSlot,
    },
}

/// A seated player and the bets they repeat every round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePlayer {
    pub spec: PlayerSpec,
    pub bets: Vec<BetSpec>,
}

pub struct ValidatedConfig {
    pub seed: Option<Vec<u8>>,
    pub rounds: u64,
    pub log_level: Level,
    pub engine: EngineConfig,
    pub players: Vec<TablePlayer>,
}

fn default_rounds() -> u64 {
    1_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_min_bet() -> u64 {
    DEFAULT_MIN_BET
}

fn default_max_bets_per_round() -> usize {
    DEFAULT_MAX_BETS_PER_ROUND
}

fn parse_hex(field: &'static str, value: &str) -> Result<Vec<u8>, ConfigError> {
    from_hex_formatted(value).ok_or(ConfigError::InvalidHex {
        field,
        value: value.to_string(),
    })
}

impl Config {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "rounds",
                value: 0,
            });
        }
        if self.limits.min_bet == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "min_bet",
                value: 0,
            });
        }
        if self.limits.max_bets_per_round == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "max_bets_per_round",
                value: 0,
            });
        }
        if self.limits.max_bets_per_round > MAX_LEDGER_BETS {
            return Err(ConfigError::TooLarge {
                field: "max_bets_per_round",
                value: self.limits.max_bets_per_round,
                max: MAX_LEDGER_BETS,
            });
        }
        if let Some(max) = self.limits.max_bet {
            if max < self.limits.min_bet {
                return Err(ConfigError::InvalidLimits {
                    min: self.limits.min_bet,
                    max,
                });
            }
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooLarge {
                field: "players",
                value: self.players.len(),
                max: MAX_PLAYERS,
            });
        }

        let seed = self
            .seed
            .as_deref()
            .map(|seed| parse_hex("seed", seed))
            .transpose()?;

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        let mut seen = HashSet::new();
        let mut players = Vec::with_capacity(self.players.len());
        for player in self.players {
            if !seen.insert(player.id.clone()) {
                return Err(ConfigError::DuplicatePlayer(player.id));
            }
            let mut bets = Vec::with_capacity(player.bets.len());
            for (index, bet) in player.bets.iter().enumerate() {
                let category = BetCategory::from_parts(bet.kind, bet.value, bet.with)
                    .and_then(|category| category.validate().map(|_| category))
                    .map_err(|source| ConfigError::InvalidBet {
                        player: player.id.clone(),
                        index,
                        source,
                    })?;
                bets.push(BetSpec::new(category, bet.amount));
            }
            players.push(TablePlayer {
                spec: PlayerSpec::new(player.id, player.balance),
                bets,
            });
        }

        Ok(ValidatedConfig {
            seed,
            rounds: self.rounds,
            log_level,
            engine: EngineConfig {
                limits: TableLimits {
                    min_bet: self.limits.min_bet,
                    max_bet: self.limits.max_bet,
                    max_bets_per_round: self.limits.max_bets_per_round,
                },
            },
            players,
        })
    }
}

/// Plays a configured table for a number of rounds.
///
/// Each round every player places their configured bets in order, the wheel spins and
/// the ledger is reset. A bet the table refuses (usually because the player can no
/// longer cover it) is skipped for that round.
pub struct Simulator<S: SpinSource> {
    engine: RouletteEngine<S>,
    players: Vec<TablePlayer>,
    rounds: u64,
}

impl Simulator<Box<dyn SpinSource>> {
    /// Seeded configs spin from a replayable hash chain, unseeded ones from entropy.
    pub fn new(config: ValidatedConfig) -> Result<Self, EngineError> {
        let source: Box<dyn SpinSource> = match &config.seed {
            Some(seed) => Box::new(SeededSpin::new(seed.clone())),
            None => Box::new(RandomSpin::from_entropy()),
        };
        Self::with_source(config, source)
    }
}

impl<S: SpinSource> Simulator<S> {
    pub fn with_source(config: ValidatedConfig, source: S) -> Result<Self, EngineError> {
        let mut engine = RouletteEngine::with_config(config.engine, source);
        for player in &config.players {
            engine.register_player(player.spec.clone())?;
        }
        Ok(Self {
            engine,
            players: config.players,
            rounds: config.rounds,
        })
    }

    pub fn engine(&self) -> &RouletteEngine<S> {
        &self.engine
    }

    /// Play every configured round, stopping early once nobody can place a bet.
    pub fn run(&mut self) -> Report {
        let mut report = Report::new(self.engine.players());
        for round in 0..self.rounds {
            if !self.play_round(round, &mut report) {
                info!(round, "no bets placed, stopping");
                break;
            }
        }
        report.players = self.engine.players();
        info!(
            rounds = report.rounds,
            wagered = report.wagered,
            returned = report.returned,
            house_edge = report.house_edge(),
            "simulation complete"
        );
        report
    }

    /// Play one round. Returns false if no bet could be placed.
    pub fn play_round(&mut self, round: u64, report: &mut Report) -> bool {
        let mut placed = 0usize;
        for player in &self.players {
            let player_id = player.spec.player_id.as_str();
            for bet in &player.bets {
                match self.engine.place_bet(player_id, *bet) {
                    Ok(_) => placed += 1,
                    Err(err) => {
                        warn!(round, player = player_id, bet = %bet.category, ?err, "skipping bet");
                        report.skipped += 1;
                    }
                }
            }
        }
        if placed == 0 {
            return false;
        }

        self.engine.spin();
        if let Some(settlement) = self.engine.last_settlement() {
            report.record(settlement);
        }
        self.engine.reset_round();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_execution::mocks::{create_seed, ScriptedSpin};
    use roulette_execution::FixedSpin;

    const TABLE: &str = r#"
seed: "0x00112233"
rounds: 50
log_level: debug
limits:
  min_bet: 1
  max_bet: 100
players:
  - id: alice
    balance: 1000
    bets:
      - { type: red, amount: 10 }
      - { type: straight, value: 17, amount: 1 }
  - id: bob
    balance: 200
    bets:
      - { type: split, value: 0, with: 3, amount: 5 }
      - { type: dozen, value: 2, amount: 5 }
"#;

    fn parse(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_parse_and_validate() {
        let config = parse(TABLE).validate().unwrap();
        assert_eq!(config.seed, Some(vec![0x00, 0x11, 0x22, 0x33]));
        assert_eq!(config.rounds, 50);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.engine.limits.max_bet, Some(100));
        assert_eq!(
            config.engine.limits.max_bets_per_round,
            DEFAULT_MAX_BETS_PER_ROUND
        );
        assert_eq!(config.players.len(), 2);
        assert_eq!(
            config.players[1].bets[0].category,
            BetCategory::Split(0, 3)
        );
    }

    #[test]
    fn test_defaults() {
        let config = parse("players: [{ id: solo, balance: 5 }]").validate().unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.rounds, 1_000);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.engine, EngineConfig::default());
        assert!(config.players[0].bets.is_empty());
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            parse("seed: zz\nplayers: [{ id: a, balance: 1 }]").validate(),
            Err(ConfigError::InvalidHex { field: "seed", .. })
        ));
        assert!(matches!(
            parse("log_level: loud\nplayers: [{ id: a, balance: 1 }]").validate(),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
        assert!(matches!(
            parse("rounds: 0\nplayers: [{ id: a, balance: 1 }]").validate(),
            Err(ConfigError::InvalidNonZero { field: "rounds", .. })
        ));
        assert!(matches!(
            parse("limits: { min_bet: 10, max_bet: 5 }\nplayers: [{ id: a, balance: 1 }]")
                .validate(),
            Err(ConfigError::InvalidLimits { min: 10, max: 5 })
        ));
        assert!(matches!(
            parse("players: []").validate(),
            Err(ConfigError::NoPlayers)
        ));
        assert!(matches!(
            parse("players: [{ id: a, balance: 1 }, { id: a, balance: 2 }]").validate(),
            Err(ConfigError::DuplicatePlayer(id)) if id == "a"
        ));
        assert!(matches!(
            parse("players: [{ id: a, balance: 1, bets: [{ type: straight, value: 45, amount: 1 }] }]")
                .validate(),
            Err(ConfigError::InvalidBet { index: 0, .. })
        ));
        assert!(matches!(
            parse("players: [{ id: a, balance: 1, bets: [{ type: dozen, amount: 1 }] }]")
                .validate(),
            Err(ConfigError::InvalidBet {
                source: InvalidSlot::Missing { kind: BetKind::Dozen },
                ..
            })
        ));
    }

    #[test]
    fn test_table_size_bounds() {
        let limits = |n: usize| {
            format!("limits: {{ max_bets_per_round: {n} }}\nplayers: [{{ id: a, balance: 1 }}]")
        };
        let config = parse(&limits(MAX_LEDGER_BETS)).validate().unwrap();
        assert_eq!(config.engine.limits.max_bets_per_round, MAX_LEDGER_BETS);
        assert!(matches!(
            parse(&limits(MAX_LEDGER_BETS + 1)).validate(),
            Err(ConfigError::TooLarge {
                field: "max_bets_per_round",
                ..
            })
        ));

        let seats = |n: usize| {
            let players: Vec<String> = (0..n)
                .map(|i| format!("{{ id: p{i}, balance: 1 }}"))
                .collect();
            format!("players: [{}]", players.join(", "))
        };
        let config = parse(&seats(MAX_PLAYERS)).validate().unwrap();
        assert_eq!(config.players.len(), MAX_PLAYERS);
        assert!(Simulator::with_source(config, FixedSpin(0)).is_ok());
        assert!(matches!(
            parse(&seats(MAX_PLAYERS + 1)).validate(),
            Err(ConfigError::TooLarge {
                field: "players",
                value,
                max: MAX_PLAYERS,
            }) if value == MAX_PLAYERS + 1
        ));
    }

    #[test]
    fn test_reused_table_reports_each_round_once() {
        let yaml = "rounds: 3\nplayers: [{ id: a, balance: 100, bets: [{ type: red, amount: 10 }] }]";
        let config = parse(yaml).validate().unwrap();
        let mut simulator = Simulator::with_source(config, FixedSpin(1)).unwrap();
        let mut report = Report::new(simulator.engine().players());
        for round in 0..3 {
            assert!(simulator.play_round(round, &mut report));
        }

        let red = &report.kinds[&BetKind::Red];
        assert_eq!(red.bets, 3);
        assert_eq!(red.wins, 3);
        assert_eq!(report.wagered, 30);
        assert_eq!(report.returned, 60);
        assert_eq!(report.hits[1], 3);
    }

    #[test]
    fn test_seeded_runs_replay() {
        let first = Simulator::new(parse(TABLE).validate().unwrap())
            .unwrap()
            .run();
        let second = Simulator::new(parse(TABLE).validate().unwrap())
            .unwrap()
            .run();
        assert_eq!(first, second);
        assert_eq!(first.rounds, 50);
        assert_eq!(first.hits.iter().sum::<u64>(), 50);
    }

    #[test]
    fn test_whole_wheel_loses_one_per_round() {
        let bets: Vec<String> = (0..=36)
            .map(|n| format!("{{ type: straight, value: {n}, amount: 1 }}"))
            .collect();
        let yaml = format!(
            "rounds: 10\nplayers: [{{ id: a, balance: 100, bets: [{}] }}]",
            bets.join(", ")
        );
        let config = parse(&yaml).validate().unwrap();
        let report = Simulator::with_source(config, ScriptedSpin::new(vec![0, 7, 36]))
            .unwrap()
            .run();

        assert_eq!(report.rounds, 10);
        assert_eq!(report.players[0].balance, 90);
        assert_eq!(report.wagered, 370);
        assert_eq!(report.returned, 360);
        assert_eq!(report.hits[0], 4);
        assert_eq!(report.hits[7], 3);
        assert_eq!(report.hits[36], 3);
    }

    #[test]
    fn test_broke_players_skip_and_stop() {
        let yaml = "rounds: 100\nplayers: [{ id: a, balance: 25, bets: [{ type: red, amount: 10 }] }]";
        let config = parse(yaml).validate().unwrap();
        // Zero every spin: red always loses.
        let mut simulator = Simulator::with_source(config, FixedSpin(0)).unwrap();
        let report = simulator.run();

        assert_eq!(report.rounds, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.players[0].balance, 5);
        assert_eq!(simulator.engine().bets().len(), 0);
        assert_eq!(report.house_edge(), 1.0);
    }

    #[test]
    fn test_seed_fixture_drives_table() {
        let mut config = parse("rounds: 5\nplayers: [{ id: a, balance: 100, bets: [{ type: odd, amount: 1 }] }]")
            .validate()
            .unwrap();
        config.seed = Some(create_seed(3));
        let report = Simulator::new(config).unwrap().run();
        assert_eq!(report.rounds, 5);
        let kind = &report.kinds[&BetKind::Odd];
        assert_eq!(kind.bets, 5);
        assert_eq!(kind.wagered, 5);
        assert_eq!(kind.returned, 2 * kind.wins);
    }
}
