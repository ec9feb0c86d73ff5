use std::io::{stdout, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Rewrites the current line of the terminal with the progress of a trace.
///
/// Progress is for display only, and so any error in writing to the terminal is ignored.
pub fn update(samples: usize, total: usize) {
    let fraction = match total {
        0 => 1.0,
        _ => samples as f64 / total as f64,
    };

    let mut stdout = stdout();
    let _ = stdout.queue(cursor::MoveToColumn(0));
    let _ = stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine));
    let _ = write!(stdout, "c Progress: {:>6.2}% ({samples}/{total})", fraction * 100.0);
    let _ = stdout.flush();
}

/// Ends the progress line.
pub fn finish() {
    println!();
}
