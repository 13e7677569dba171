use crate::arena::Arena;
use crate::config::MOVE_PROMPT;
use std::env;
use std::io::{self, Write};

const ESC_SEQ: &str = "\x1B["; // ANSI terminal escape: ESC [
const BELL: char = '\x07';

// Writes frames of the arena to a terminal
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    ansi: bool, // Whether the terminal understands escape sequences
}

impl Renderer {
    /// Detects from `TERM` whether the screen can be cleared with ANSI codes
    pub fn new() -> Self {
        let ansi = match env::var("TERM") {
            Ok(term) => term != "dumb",
            Err(_) => false,
        };
        Renderer { ansi }
    }

    /// A renderer that never emits escape sequences
    pub fn plain() -> Self {
        Renderer { ansi: false }
    }

    /// Clears the screen and moves the cursor to the top left.
    /// Dumb terminals just get a line break.
    pub fn clear_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.ansi {
            write!(out, "{ESC_SEQ}2J{ESC_SEQ}H")?;
        } else {
            writeln!(out)?;
        }
        out.flush()
    }

    pub fn draw_frame<W: Write>(&self, out: &mut W, arena: &Arena) -> io::Result<()> {
        self.clear_screen(out)?;
        out.write_all(arena.display().as_bytes())?;
        out.flush()
    }

    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", MOVE_PROMPT)?;
        out.flush()
    }

    // Audible cue for a bad keystroke
    pub fn beep<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", BELL)?;
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
