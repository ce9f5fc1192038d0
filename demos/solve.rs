use anyhow::Result;
use boggle_solver::{Board, Observer, Path, SolveReport, Solutions, Solver, Wordlist};
use rand::thread_rng;
use std::env;
use std::sync::Arc;
use std::time::Instant;

const WORDFILE: &str = "wordlists/words.txt";
const TEST_BOARD: &str = "catdwofoirdgnoas";

struct Printer;

impl Observer for Printer {
    fn found(&mut self, path: &Path, word: &str) {
        println!("  {:<12} {}", word, path);
    }

    fn finished(&mut self, report: &SolveReport, solutions: &Solutions) {
        println!(
            "{:?}: {} words, score {}, {} nodes in {:?}",
            report.state, report.words, report.score, report.nodes, report.elapsed
        );
        for solution in solutions.iter().take(10) {
            println!("  {}", solution);
        }
    }
}

/// Usage: `solve [LETTERS | --random TILES]`
fn main() -> Result<()> {
    env_logger::init();
    let t0 = Instant::now();
    let wordlist = Wordlist::from_file(WORDFILE)?;
    println!("Load {} took {:?}", wordlist, t0.elapsed());

    let solver = Solver::new(Arc::new(wordlist));
    let args: Vec<String> = env::args().skip(1).collect();
    let input = match args.as_slice() {
        [flag, tiles] if flag == "--random" => Board::random_input(&mut thread_rng(), tiles.parse()?),
        [letters] => letters.clone(),
        _ => TEST_BOARD.to_string(),
    };
    solver.configure(&input)?;
    if let Some(board) = solver.board() {
        println!("{} board:\n{}", board.layout().name(), board);
    }
    solver.start_with(&mut Printer)?;
    Ok(())
}
