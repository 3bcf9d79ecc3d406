//! Terminal output for plan views and edit confirmations.
//!
//! Views arrive as markdown from `pv_core::display`. In rich mode header
//! lines keep their hash marks so ids stay greppable, outcome lines are
//! coloured by their leading marker and everything else goes through
//! termimad's inline formatter. Plain mode writes the markdown untouched.

use std::{
    env,
    io::{self, IsTerminal, Write},
};

use anyhow::Result;
use termimad::{
    crossterm::style::{Attribute, Color},
    CompoundStyle, MadSkin,
};

/// Decides whether output should be styled.
///
/// `--no-color` and a non-empty `NO_COLOR` always win. Otherwise a
/// non-empty `FORCE_COLOR` enables styling even when stdout is not a
/// terminal.
pub fn color_enabled(no_color: bool) -> bool {
    let set = |name: &str| env::var_os(name).is_some_and(|v| !v.is_empty());

    if no_color || set("NO_COLOR") {
        return false;
    }
    set("FORCE_COLOR") || io::stdout().is_terminal()
}

pub struct TerminalRenderer {
    rich: bool,
    skin: MadSkin,
    success: CompoundStyle,
    failure: CompoundStyle,
    warning: CompoundStyle,
    preview: CompoundStyle,
}

impl TerminalRenderer {
    pub fn new(rich: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut preview = CompoundStyle::with_fg(Color::DarkGrey);
        preview.add_attr(Attribute::Italic);

        Self {
            rich,
            skin,
            success: CompoundStyle::with_fg(Color::Green),
            failure: CompoundStyle::with_fg(Color::Red),
            warning: CompoundStyle::with_fg(Color::Yellow),
            preview,
        }
    }

    /// Writes `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock(), markdown)
    }

    pub fn write_to(&self, out: &mut impl Write, markdown: &str) -> Result<()> {
        if !self.rich {
            out.write_all(markdown.as_bytes())?;
            return Ok(());
        }

        for line in markdown.lines() {
            match self.line_style(line) {
                Some(style) => writeln!(out, "{}", style.apply_to(line))?,
                None => writeln!(out, "{}", self.skin.inline(line))?,
            }
        }
        Ok(())
    }

    fn line_style(&self, line: &str) -> Option<&CompoundStyle> {
        let depth = line.bytes().take_while(|&b| b == b'#').count();
        if depth > 0 {
            let level = (depth - 1).min(self.skin.headers.len() - 1);
            return Some(&self.skin.headers[level].compound_style);
        }

        if line.starts_with('✅') {
            Some(&self.success)
        } else if line.starts_with('❌') {
            Some(&self.failure)
        } else if line.starts_with("⚠️") {
            Some(&self.warning)
        } else if line.starts_with("Would:") {
            Some(&self.preview)
        } else {
            None
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
