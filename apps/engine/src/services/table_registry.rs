//! Registry of concurrently running tables.
//!
//! Each table is an independent `Game` behind its own mutex, so actions on
//! different tables never contend. Actions on one table are serialized.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::engine::EngineConfig;
use crate::config::registry::RegistryConfig;
use crate::domain::game::Game;
use crate::domain::game_transition::{derive_transitions, GameTransition};
use crate::domain::seed_derivation::derive_table_seed;
use crate::domain::snapshot::{GameSnapshot, PlayerView};
use crate::domain::state::{Phase, Seat};
use crate::domain::tricks::PlayOutcome;
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub type TableId = u64;

/// One line of `list_tables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub table_id: TableId,
    pub phase: Phase,
    pub registered: usize,
    pub capacity: u8,
    pub round_number: u16,
}

pub struct TableRegistry {
    config: RegistryConfig,
    /// When set, table shuffles are reproducible from this seed.
    base_seed: Option<u64>,
    next_id: AtomicU64,
    tables: DashMap<TableId, Arc<Mutex<Game>>>,
    // Held while checking capacity and inserting so max_tables is never exceeded.
    create_lock: Mutex<()>,
}

impl TableRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            base_seed: None,
            next_id: AtomicU64::new(1),
            tables: DashMap::new(),
            create_lock: Mutex::new(()),
        }
    }

    /// Registry whose table seeds derive from `base_seed` and the table id.
    pub fn with_base_seed(config: RegistryConfig, base_seed: u64) -> Self {
        Self {
            base_seed: Some(base_seed),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Open a new table in Lobby.
    pub fn create_table(&self, engine: EngineConfig) -> Result<TableId, AppError> {
        let _guard = self.create_lock.lock();
        if self.tables.len() >= self.config.max_tables {
            return Err(AppError::RegistryFull {
                max_tables: self.config.max_tables,
            });
        }

        let table_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let seed = match self.base_seed {
            Some(base) => derive_table_seed(base, table_id),
            None => rand::rng().random(),
        };
        let game = Game::seeded(engine, seed)?;
        self.tables.insert(table_id, Arc::new(Mutex::new(game)));

        info!(
            table_id,
            seats = engine.seat_capacity,
            lives = engine.starting_lives,
            "Table created"
        );
        Ok(table_id)
    }

    pub fn remove_table(&self, table_id: TableId) -> Result<(), AppError> {
        if self.tables.remove(&table_id).is_none() {
            return Err(AppError::TableNotFound { table_id });
        }
        info!(table_id, "Table removed");
        Ok(())
    }

    /// All tables, ordered by id.
    pub fn list_tables(&self) -> Vec<TableSummary> {
        let mut summaries: Vec<TableSummary> = self
            .tables
            .iter()
            .map(|entry| {
                let game = entry.value().lock();
                let state = game.state();
                TableSummary {
                    table_id: *entry.key(),
                    phase: state.phase,
                    registered: state.seat_count(),
                    capacity: state.capacity,
                    round_number: state.round_no,
                }
            })
            .collect();
        summaries.sort_by_key(|s| s.table_id);
        summaries
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn register(&self, table_id: TableId, name: &str) -> Result<Seat, AppError> {
        self.with_game(table_id, |game| game.register(name))
    }

    pub fn start(&self, table_id: TableId) -> Result<Vec<GameTransition>, AppError> {
        self.act(table_id, |game| game.start())
            .map(|((), transitions)| transitions)
    }

    pub fn bid(
        &self,
        table_id: TableId,
        seat: Seat,
        value: u8,
    ) -> Result<Vec<GameTransition>, AppError> {
        self.act(table_id, |game| game.bid(seat, value))
            .map(|((), transitions)| transitions)
    }

    pub fn play(
        &self,
        table_id: TableId,
        seat: Seat,
        position: usize,
    ) -> Result<(PlayOutcome, Vec<GameTransition>), AppError> {
        self.act(table_id, |game| game.play(seat, position))
    }

    pub fn snapshot(&self, table_id: TableId) -> Result<GameSnapshot, AppError> {
        Ok(self.table(table_id)?.lock().snapshot())
    }

    /// View for one seat; `None` when the seat is not registered.
    pub fn player_view(
        &self,
        table_id: TableId,
        seat: Seat,
    ) -> Result<Option<PlayerView>, AppError> {
        Ok(self.table(table_id)?.lock().player_view(seat))
    }

    pub fn winners(&self, table_id: TableId) -> Result<Vec<Seat>, AppError> {
        Ok(self.table(table_id)?.lock().winners())
    }

    fn table(&self, table_id: TableId) -> Result<Arc<Mutex<Game>>, AppError> {
        self.tables
            .get(&table_id)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::TableNotFound { table_id })
    }

    fn with_game<T>(
        &self,
        table_id: TableId,
        f: impl FnOnce(&mut Game) -> Result<T, DomainError>,
    ) -> Result<T, AppError> {
        let table = self.table(table_id)?;
        let mut game = table.lock();
        Ok(f(&mut *game)?)
    }

    /// Run an action and report what changed between the snapshots around it.
    fn act<T>(
        &self,
        table_id: TableId,
        f: impl FnOnce(&mut Game) -> Result<T, DomainError>,
    ) -> Result<(T, Vec<GameTransition>), AppError> {
        self.with_game(table_id, |game| {
            let before = game.snapshot();
            let value = f(game)?;
            let transitions = derive_transitions(&before, &game.snapshot());
            Ok((value, transitions))
        })
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
