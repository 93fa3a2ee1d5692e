//! Turn sequencing for human and computer players.
//!
//! One bot turn is: wait out the thinking delay, ask the engine for a
//! decision, execute it on the live board (promotion included), advance the
//! turn, notify the observer, and if the next player is also a bot, start
//! another turn on a fresh worker.
//!
//! The thinking delay is a timer on the worker that can be interrupted
//! through `BotTurnHandle::interrupt`. An interrupted delay is logged and the
//! turn still completes. Concurrent turns are not serialized against each
//! other beyond the per-turn session lock.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::controller::move_service::MoveService;
use crate::engines::engine_trait::Engine;
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Side, TurnState};
use crate::game_state::game_status::{game_status, GameStatus};
use crate::game_state::player_config::PlayerConfig;
use crate::game_state::turn_manager::TurnManager;
use crate::move_generation::decision::Decision;
use crate::move_generation::legal_move_apply::execute_decision;
use crate::utils::game_record::GameRecord;

pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub thinking_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }
}

/// Post-move hook for a UI layer: refresh and check for a winner.
///
/// Called after the session lock is released, so an observer may query the
/// controller it is attached to.
pub trait MoveObserver: Send + Sync {
    fn on_move_applied(&self, board: &Board, decision: &Decision, status: GameStatus);
}

pub struct NullObserver;

impl MoveObserver for NullObserver {
    fn on_move_applied(&self, _board: &Board, _decision: &Decision, _status: GameStatus) {}
}

/// Live game state guarded by the controller.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub turns: TurnManager,
    pub record: GameRecord,
}

/// What one applied move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub decision: Decision,
    pub promoted: bool,
    pub status: GameStatus,
}

/// Result of a finished bot worker: its own report and the follow-up turn it
/// started, if the next player was also a bot.
pub struct BotTurnOutcome {
    pub report: TurnReport,
    pub next: Option<BotTurnHandle>,
}

pub struct BotTurnHandle {
    interrupt: mpsc::Sender<()>,
    worker: JoinHandle<CheckersResult<BotTurnOutcome>>,
}

impl BotTurnHandle {
    /// Cut the thinking delay short. The turn itself still runs.
    pub fn interrupt(&self) {
        let _ = self.interrupt.send(());
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    pub fn join(self) -> CheckersResult<BotTurnOutcome> {
        self.worker.join().map_err(|_| CheckersError::WorkerPanicked)?
    }

    /// Wait for this turn and every bot turn chained after it.
    pub fn join_all(self) -> CheckersResult<Vec<TurnReport>> {
        let mut reports = Vec::new();
        let mut pending = Some(self);
        while let Some(handle) = pending.take() {
            let outcome = handle.join()?;
            reports.push(outcome.report);
            pending = outcome.next;
        }
        Ok(reports)
    }
}

#[derive(Clone)]
pub struct GameController {
    session: Arc<Mutex<GameSession>>,
    engine: Arc<Mutex<Box<dyn Engine>>>,
    observer: Arc<dyn MoveObserver>,
    players: PlayerConfig,
    config: ControllerConfig,
    move_service: MoveService,
}

pub struct GameControllerBuilder {
    board: Board,
    first: Side,
    players: PlayerConfig,
    config: ControllerConfig,
    engine: Option<Box<dyn Engine>>,
    observer: Option<Arc<dyn MoveObserver>>,
}

impl Default for GameControllerBuilder {
    fn default() -> Self {
        Self {
            board: Board::standard(),
            first: Side::Red,
            players: PlayerConfig::default(),
            config: ControllerConfig::default(),
            engine: None,
            observer: None,
        }
    }
}

impl GameControllerBuilder {
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn first_to_move(mut self, side: Side) -> Self {
        self.first = side;
        self
    }

    pub fn players(mut self, players: PlayerConfig) -> Self {
        self.players = players;
        self
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine(mut self, engine: Box<dyn Engine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn observer(mut self, observer: Arc<dyn MoveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Fails with `MissingCollaborator` when no engine was supplied.
    pub fn build(self) -> CheckersResult<GameController> {
        let engine = self
            .engine
            .ok_or(CheckersError::MissingCollaborator("engine"))?;
        let record = GameRecord::new(&self.board);
        Ok(GameController {
            session: Arc::new(Mutex::new(GameSession {
                board: self.board,
                turns: TurnManager::new(self.first),
                record,
            })),
            engine: Arc::new(Mutex::new(engine)),
            observer: self.observer.unwrap_or_else(|| Arc::new(NullObserver)),
            players: self.players,
            config: self.config,
            move_service: MoveService::default(),
        })
    }
}

impl GameController {
    pub fn builder() -> GameControllerBuilder {
        GameControllerBuilder::default()
    }

    pub fn players(&self) -> PlayerConfig {
        self.players
    }

    pub fn move_service(&self) -> &MoveService {
        &self.move_service
    }

    pub fn board_snapshot(&self) -> CheckersResult<Board> {
        Ok(self.lock_session()?.board.copy())
    }

    pub fn current_turn(&self) -> CheckersResult<TurnState> {
        Ok(self.lock_session()?.turns.current())
    }

    pub fn record_snapshot(&self) -> CheckersResult<GameRecord> {
        Ok(self.lock_session()?.record.clone())
    }

    pub fn status(&self) -> CheckersResult<GameStatus> {
        let session = self.lock_session()?;
        Ok(game_status(&session.board, session.turns.current()))
    }

    pub fn is_bot_to_move(&self) -> CheckersResult<bool> {
        Ok(self.lock_session()?.turns.is_current_player_bot(&self.players))
    }

    /// Validate and apply a human decision. Does not start the bot.
    pub fn apply_human_move(&self, decision: Decision) -> CheckersResult<TurnReport> {
        let mut session = self.lock_session()?;
        let status = game_status(&session.board, session.turns.current());
        if status.is_over() {
            return Err(CheckersError::GameOver(status));
        }
        if session.turns.is_current_player_bot(&self.players) {
            return Err(CheckersError::IllegalMove(decision));
        }
        let turn = session.turns.current();
        self.move_service
            .validate_player_move(&decision, &session.board, turn)?;
        let (report, board) = self.finish_turn(&mut session, decision)?;
        drop(session);
        self.observer.on_move_applied(&board, &report.decision, report.status);
        Ok(report)
    }

    /// Apply a human decision and, if the bot is up next, start its turn.
    pub fn submit_human_move(&self, decision: Decision) -> CheckersResult<(TurnReport, Option<BotTurnHandle>)> {
        let report = self.apply_human_move(decision)?;
        let next = if !report.status.is_over() && self.is_bot_to_move()? {
            Some(self.spawn_bot_turn())
        } else {
            None
        };
        Ok((report, next))
    }

    /// One engine turn for the side to move, on the calling thread and
    /// without the thinking delay.
    pub fn play_bot_turn_now(&self) -> CheckersResult<TurnReport> {
        let mut session = self.lock_session()?;
        let turn = session.turns.current();
        let status = game_status(&session.board, turn);
        if status.is_over() {
            return Err(CheckersError::GameOver(status));
        }

        let decision = {
            let mut engine = self
                .engine
                .lock()
                .map_err(|_| CheckersError::WorkerPanicked)?;
            debug!(engine = engine.name(), side = turn.side().name(), "engine thinking");
            engine.choose_move(&session.board, turn)?
        };
        let (report, board) = self.finish_turn(&mut session, decision)?;
        drop(session);
        self.observer.on_move_applied(&board, &report.decision, report.status);
        Ok(report)
    }

    /// Run one bot turn on a new worker thread after the thinking delay.
    /// Errors are logged here and handed back through the handle.
    pub fn spawn_bot_turn(&self) -> BotTurnHandle {
        let (interrupt_tx, interrupt_rx) = mpsc::channel::<()>();
        let controller = self.clone();
        let worker = thread::spawn(move || {
            wait_thinking_delay(controller.config.thinking_delay, &interrupt_rx);
            let result = controller.run_bot_turn_body();
            if let Err(e) = &result {
                error!(error = %e, "bot turn failed");
            }
            result
        });
        BotTurnHandle {
            interrupt: interrupt_tx,
            worker,
        }
    }

    fn run_bot_turn_body(&self) -> CheckersResult<BotTurnOutcome> {
        let report = self.play_bot_turn_now()?;
        let next = if !report.status.is_over() && self.is_bot_to_move()? {
            Some(self.spawn_bot_turn())
        } else {
            None
        };
        Ok(BotTurnOutcome { report, next })
    }

    /// Apply, record, and advance. Returns the report and a copy of the
    /// resulting board for the observer, which runs after the lock is released.
    fn finish_turn(&self, session: &mut GameSession, decision: Decision) -> CheckersResult<(TurnReport, Board)> {
        let turn = session.turns.current();
        let promoted = execute_decision(&decision, &mut session.board, turn)?;
        session.record.push(turn.side(), decision, promoted);
        session.turns.switch_turn();

        let status = game_status(&session.board, session.turns.current());
        info!(
            side = turn.side().name(),
            %decision,
            promoted,
            ?status,
            "move applied"
        );
        if let GameStatus::Won(winner) = status {
            info!(winner = winner.name(), plies = session.record.len(), "game over");
        }

        let report = TurnReport {
            side: turn.side(),
            decision,
            promoted,
            status,
        };
        Ok((report, session.board.copy()))
    }

    fn lock_session(&self) -> CheckersResult<MutexGuard<'_, GameSession>> {
        self.session.lock().map_err(|_| CheckersError::WorkerPanicked)
    }
}

/// Block for `delay` unless interrupted. A dropped handle does not shorten
/// a finite delay; a delay too long to represent as a deadline ends once
/// nobody is left to interrupt it.
fn wait_thinking_delay(delay: Duration, interrupt: &mpsc::Receiver<()>) {
    let deadline = Instant::now().checked_add(delay);
    match interrupt.recv_timeout(delay) {
        Ok(()) => warn!("thinking delay interrupted, completing turn"),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => {
            if let Some(deadline) = deadline {
                thread::sleep(deadline.saturating_duration_since(Instant::now()));
            }
        }
    }
}
