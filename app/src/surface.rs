//! Terminal rendering of frames.

use tristore_core::view::{Frame, Surface};

/// Surface that prints frames to stdout
///
/// Rows are numbered so `toggle <n>` can address them.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn present(&mut self, frame: &Frame) {
        println!();
        println!("== {} ==", frame.title);
        for (n, row) in frame.rows.iter().enumerate() {
            let mark = if row.completed { "✓" } else { " " };
            println!("{:>2} [{}] {}", n + 1, mark, row.text);
        }
        println!("Tasks left: {}", frame.unfinished);
        if !frame.draft.is_empty() {
            println!("New Todo: {}", frame.draft);
        }
    }
}
