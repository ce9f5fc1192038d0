use crate::bitset::CellSet;
use crate::codec::Codec;
use crate::wordlist::ROOT;
use crate::{Board, Error, Layouts, Path, ScoreTable, Solution, Solutions, Wordlist};

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Words shorter than this are never reported
pub const MIN_WORD_LENGTH: usize = 3;

/// Receives the results of a search, for instance to show them to a user.
pub trait Observer {
    /// Called for each path that spells a word, in the order they are found.
    /// A word can be reported more than once, with different paths.
    fn found(&mut self, path: &Path, word: &str);

    /// Called once when the search ends, with the deduplicated and sorted solutions.
    fn finished(&mut self, _report: &SolveReport, _solutions: &Solutions) {}
}

impl<F: FnMut(&Path, &str)> Observer for F {
    fn found(&mut self, path: &Path, word: &str) {
        self(path, word)
    }
}

impl Observer for () {
    fn found(&mut self, _path: &Path, _word: &str) {}
}

/// The state of the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolveState {
    /// No search has run since the last configure
    Idle = 0,
    Running = 1,
    /// The last search visited all cells
    Completed = 2,
    /// The last search was stopped, its solutions are incomplete
    Cancelled = 3,
}

impl From<u8> for SolveState {
    fn from(v: u8) -> Self {
        match v {
            1 => SolveState::Running,
            2 => SolveState::Completed,
            3 => SolveState::Cancelled,
            _ => SolveState::Idle,
        }
    }
}

/// Summary of a finished search
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveReport {
    /// `Completed` or `Cancelled`
    pub state: SolveState,
    /// Number of unique words found
    pub words: usize,
    /// Total points of the words found
    pub score: u32,
    /// Number of recursive steps taken by the search
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Stops a running search. Can be cloned and sent to other threads.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request the search to stop. The search returns after its current step.
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
struct Session {
    board: Option<Board>,
    solutions: Solutions,
    nodes: u64,
    elapsed: Option<Duration>,
}

/// Finds all words on a board.
///
/// The solver holds the wordlist and the known layouts, and the board and solutions of
/// the current session. A session starts with [`configure`](Solver::configure), which
/// selects the layout by the number of letters. [`start`](Solver::start) then searches the
/// board, and can be stopped from another thread with a [`StopHandle`].
///
/// # Basic usage
/// ```
/// # use std::sync::Arc;
/// # use boggle_solver::{Solver, SolveState, Wordlist, Error};
/// let wordlist = Wordlist::from_words(&["cat", "dog", "rod"])?;
/// let solver = Solver::new(Arc::new(wordlist));
/// solver.configure("catdwofoirdgnoas")?;
/// let report = solver.start()?;
/// assert_eq!(report.state, SolveState::Completed);
/// assert_eq!(solver.solutions().words(), vec!["cat", "dog", "rod"]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    wordlist: Arc<Wordlist>,
    layouts: Layouts,
    score_table: ScoreTable,
    min_word_length: usize,
    state: AtomicU8,
    stop: StopHandle,
    session: Mutex<Session>,
}

impl Solver {
    /// Create a solver for the standard [`Layouts`].
    /// Additional builder functions can be used to change the defaults:
    /// - [`with_layouts`](Solver::with_layouts)
    /// - [`with_score_table`](Solver::with_score_table)
    /// - [`with_min_word_length`](Solver::with_min_word_length)
    pub fn new(wordlist: Arc<Wordlist>) -> Solver {
        Solver {
            wordlist,
            layouts: Layouts::default(),
            score_table: ScoreTable::default(),
            min_word_length: MIN_WORD_LENGTH,
            state: AtomicU8::new(SolveState::Idle as u8),
            stop: StopHandle::default(),
            session: Mutex::new(Session::default()),
        }
    }

    /// Replace the known layouts
    pub fn with_layouts(mut self, layouts: Layouts) -> Solver {
        self.layouts = layouts;
        self
    }

    pub fn with_score_table(mut self, score_table: ScoreTable) -> Solver {
        self.score_table = score_table;
        self
    }

    /// Report words with at least `len` letters (at least 1)
    pub fn with_min_word_length(mut self, len: usize) -> Solver {
        self.min_word_length = len.max(1);
        self
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the letters of a new board, and clear the results of the previous search.
    /// The layout is selected by the number of letters.
    /// ## Errors
    /// - `InvalidCharacter` if `input` contains anything but letters.
    /// - `UnknownLayout` if no layout has as many tiles as `input` has letters.
    /// - `AlreadyRunning` if a search is active.
    ///
    /// The session is not changed if an error is returned.
    pub fn configure(&self, input: &str) -> Result<(), Error> {
        if self.state() == SolveState::Running {
            return Err(Error::AlreadyRunning);
        }
        let letters = Codec.encode(input)?;
        let layout = self.layouts.resolve(letters.len())?;
        let board = Board::new(layout, input)?;
        // state changes only while the session is locked
        let mut session = self.session();
        if self.state() == SolveState::Running {
            return Err(Error::AlreadyRunning);
        }
        debug!("configure {} board \"{}\"", board.layout().name(), input);
        *session = Session {
            board: Some(board),
            ..Session::default()
        };
        self.state.store(SolveState::Idle as u8, Ordering::SeqCst);
        Ok(())
    }

    /// Search the board, see [`start_with`](Solver::start_with).
    pub fn start(&self) -> Result<SolveReport, Error> {
        self.start_with(&mut ())
    }

    /// Search the board for all words, and report them to `observer`.
    ///
    /// The search runs on the calling thread until all paths are visited, or until
    /// it is stopped. A stopped search is not an error: its report has state
    /// `Cancelled`, and the solutions found so far are kept.
    ///
    /// A [`stop`](Solver::stop) issued once [`state`](Solver::state) returns `Running`
    /// always cancels the search. An earlier stop is cleared when the search starts.
    /// ## Errors
    /// - `AlreadyRunning` if a search is active.
    /// - `NotConfigured` if no board was configured.
    pub fn start_with(&self, observer: &mut dyn Observer) -> Result<SolveReport, Error> {
        let board = {
            let mut session = self.session();
            if self.state() == SolveState::Running {
                return Err(Error::AlreadyRunning);
            }
            let board = session.board.clone().ok_or(Error::NotConfigured)?;
            session.solutions.clear();
            session.nodes = 0;
            session.elapsed = None;
            // the stop flag is cleared before `Running` is visible
            self.stop.reset();
            self.state.store(SolveState::Running as u8, Ordering::SeqCst);
            board
        };
        debug!("start solving \"{}\"", board.input());

        let now = Instant::now();
        let mut search = Search {
            wordlist: &self.wordlist,
            board: &board,
            stop: &self.stop,
            min_word_length: self.min_word_length,
            path: Path::new(),
            visited: CellSet::new(),
            solutions: Solutions::new(),
            nodes: 0,
            observer,
        };
        let state = search.run();
        let Search {
            mut solutions,
            nodes,
            observer,
            ..
        } = search;
        let elapsed = now.elapsed();

        solutions.dedupe();
        solutions.sort();
        let report = SolveReport {
            state,
            words: solutions.len(),
            score: solutions.score(&self.score_table),
            nodes,
            elapsed,
        };
        match state {
            SolveState::Cancelled => debug!("cancelled: {:?}", report),
            _ => debug!("completed: {:?}", report),
        }
        observer.finished(&report, &solutions);
        let mut session = self.session();
        session.solutions = solutions;
        session.nodes = nodes;
        session.elapsed = Some(elapsed);
        self.state.store(state as u8, Ordering::SeqCst);
        Ok(report)
    }

    /// Request cancellation of the running search.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// A handle to stop the search from another thread
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> SolveState {
        SolveState::from(self.state.load(Ordering::SeqCst))
    }

    /// The solutions of the last search, longest words first.
    /// Empty while a search is running.
    pub fn solutions(&self) -> Solutions {
        self.session().solutions.clone()
    }

    /// Return solution `index` of the last search
    pub fn solution(&self, index: usize) -> Option<Solution> {
        self.session().solutions.get(index).cloned()
    }

    /// The word spelled by `path` on the current board
    pub fn word(&self, path: &Path) -> Option<String> {
        self.session().board.as_ref().map(|board| board.word(path))
    }

    /// Total points of the last search
    pub fn score(&self) -> u32 {
        self.session().solutions.score(&self.score_table)
    }

    /// Number of recursive steps taken by the last search
    pub fn nodes(&self) -> u64 {
        self.session().nodes
    }

    /// Duration of the last completed or cancelled search
    pub fn elapsed(&self) -> Option<Duration> {
        self.session().elapsed
    }

    /// The current board, if configured
    pub fn board(&self) -> Option<Board> {
        self.session().board.clone()
    }

    pub fn wordlist(&self) -> &Arc<Wordlist> {
        &self.wordlist
    }

    pub fn layouts(&self) -> &Layouts {
        &self.layouts
    }

    pub fn score_table(&self) -> &ScoreTable {
        &self.score_table
    }
}

/// The state of one depth-first search over a board.
struct Search<'a> {
    wordlist: &'a Wordlist,
    board: &'a Board,
    stop: &'a StopHandle,
    min_word_length: usize,
    path: Path,
    visited: CellSet,
    solutions: Solutions,
    nodes: u64,
    observer: &'a mut dyn Observer,
}

impl<'a> Search<'a> {
    #[cfg_attr(feature = "flame_it", flame)]
    fn run(&mut self) -> SolveState {
        let board = self.board;
        for cell in board.layout().playable() {
            self.visit(cell, ROOT);
        }
        if self.stop.is_stopped() {
            SolveState::Cancelled
        } else {
            SolveState::Completed
        }
    }

    /// Extend the path with `cell`, where `node` is the wordlist node for the path so far.
    fn visit(&mut self, cell: usize, node: usize) {
        if self.stop.is_stopped() {
            return;
        }
        let board = self.board;
        let node = match board
            .letter_at(cell)
            .and_then(|label| self.wordlist.child(node, label))
        {
            Some(node) => node,
            // no word starts with the path + cell
            None => return,
        };
        self.path.push(cell);
        self.visited.insert(cell as u8);

        if self.path.len() >= self.min_word_length
            && self.wordlist.is_terminal(node)
            && !self.solutions.contains_path(&self.path)
        {
            let word = board.word(&self.path);
            trace!("found {} at {}", word, self.path);
            self.observer.found(&self.path, &word);
            self.solutions.push(Solution::new(self.path, word));
        }

        for &next in board.layout().neighbor_indices(cell) {
            if !self.visited.contains(next as u8) {
                self.nodes += 1;
                self.visit(next, node);
            }
        }

        self.visited.remove(cell as u8);
        self.path.pop();
    }
}
