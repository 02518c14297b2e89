//! Example: solving a Boggle board with `Trie::step`.
//!
//! The solver walks every path of adjacent cells, carrying the trie node it has
//! reached so far. A branch is abandoned as soon as the trie says no stored
//! word starts with the letters on the path.
//!
//! Run with: cargo run --example boggle [WORD_LIST]

use std::collections::BTreeSet;

use wordtrie::{build_trie_from_file, NodeRef, Trie, WordListOptions};

const BOARD: [&str; 4] = ["gizm", "uteo", "qsea", "rdnt"];

/// A square letter grid.
struct Board {
    size: usize,
    cells: Vec<char>,
}

impl Board {
    fn new(rows: &[&str]) -> Self {
        Board {
            size: rows.len(),
            cells: rows.iter().flat_map(|row| row.chars()).collect(),
        }
    }

    fn neighbours(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = ((cell / self.size) as isize, (cell % self.size) as isize);
        let size = self.size as isize;
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
            .filter(move |&(r, c)| (r, c) != (row, col) && (0..size).contains(&r) && (0..size).contains(&c))
            .map(move |(r, c)| (r * size + c) as usize)
    }

    /// Returns every word of at least `min_len` letters that can be traced on the board.
    fn solve(&self, trie: &Trie, min_len: usize) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut visited = vec![false; self.cells.len()];
        for cell in 0..self.cells.len() {
            self.search(trie, None, cell, &mut visited, min_len, &mut found);
        }
        found
    }

    fn search(
        &self,
        trie: &Trie,
        node: Option<NodeRef<'_>>,
        cell: usize,
        visited: &mut [bool],
        min_len: usize,
        found: &mut BTreeSet<String>,
    ) {
        let step = trie.step(node, self.cells[cell]);
        let Some(next) = step.node else {
            return;
        };
        if step.completes_word && next.depth() >= min_len {
            found.insert(next.reconstruct_word());
        }
        visited[cell] = true;
        for neighbour in self.neighbours(cell) {
            if !visited[neighbour] {
                self.search(trie, Some(next), neighbour, visited, min_len, found);
            }
        }
        visited[cell] = false;
    }
}

fn main() {
    let trie = match std::env::args().nth(1) {
        Some(path) => {
            let options = WordListOptions { skip_invalid: true };
            match build_trie_from_file(&path, &options) {
                Ok(trie) => trie,
                Err(e) => {
                    eprintln!("cannot load {path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => Trie::create([
            "geek", "quiz", "quest", "seat", "sent", "tea", "teas", "ten", "tend", "test", "zest",
            "zoo", "note", "neat", "eat", "sea", "tide",
        ])
        .expect("built-in word list is lowercase"),
    };
    println!("Dictionary: {trie:?}");

    let board = Board::new(&BOARD);
    println!("\nBoard:");
    for row in BOARD {
        println!("  {}", row.chars().map(|c| c.to_string()).collect::<Vec<_>>().join(" "));
    }

    let words = board.solve(&trie, 3);
    println!("\nFound {} words:", words.len());
    for word in &words {
        println!("  {word}");
    }
}
