// Screen module
// Terminal presentation layer: renders the current artwork and drives the
// cursor from user navigation commands

use crate::assets::{resolve_image, resolve_text};
use crate::gallery::{ArtworkRecord, GalleryCursor};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

/// Minimum inner width of the framed artwork card
const MIN_CARD_WIDTH: usize = 40;

/// Navigation direction requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// One user command in the interactive loop or a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Navigate(Direction),
    First,
    Quit,
}

/// Parse a single interactive input line into a command
fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "n" | "next" => Some(Command::Navigate(Direction::Next)),
        "p" | "prev" | "previous" => Some(Command::Navigate(Direction::Previous)),
        "f" | "first" => Some(Command::First),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Parse one character of a `--script` argument
fn parse_step(step: char) -> Option<Command> {
    match step {
        'n' => Some(Command::Navigate(Direction::Next)),
        'p' => Some(Command::Navigate(Direction::Previous)),
        'f' => Some(Command::First),
        _ => None,
    }
}

/// Renders artwork frames to the terminal
pub struct Screen {
    /// Print metadata only, without the framed card
    plain: bool,
}

impl Screen {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    /// Render one artwork into a displayable block of text
    pub fn render(&self, artwork: &ArtworkRecord, position: usize, total: usize) -> String {
        let title = resolve_text(&artwork.title);
        let artist = resolve_text(&artwork.artist);
        let year = resolve_text(&artwork.year);

        if self.plain {
            return format!(
                "[{}/{}] {} by {} ({})\n",
                position + 1,
                total,
                title,
                artist,
                year
            );
        }

        let image_block = resolve_image(&artwork.image)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("[image: {}]", artwork.image.as_str()));

        let description = format!("{artist}  ({year})");
        let mut lines: Vec<String> = image_block.lines().map(str::to_owned).collect();
        lines.push(String::new());
        lines.push(title.to_owned());
        lines.push(description);

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_CARD_WIDTH);

        let mut card = String::new();
        let border = format!("+{}+\n", "-".repeat(width + 2));
        card.push_str(&border);
        for line in &lines {
            let padding = width - line.chars().count();
            card.push_str(&format!("| {}{} |\n", line, " ".repeat(padding)));
        }
        card.push_str(&border);
        card.push_str(&format!("  [{}/{}]\n", position + 1, total));
        card
    }

    /// Render the cursor's current artwork and print it to `out`
    fn show_current(&self, out: &mut impl Write, cursor: &GalleryCursor) -> Result<()> {
        let artwork = cursor.current().context("Nothing to display")?;
        let position = cursor.position().unwrap_or(0);
        let frame = self.render(artwork, position, cursor.len());
        out.write_all(frame.as_bytes())
            .context("Failed to write frame")?;
        Ok(())
    }
}

/// Apply one command to the cursor. Returns false when the loop should end.
fn apply(cursor: &mut GalleryCursor, command: Command) -> Result<bool> {
    match command {
        Command::Navigate(Direction::Next) => {
            cursor.next().context("Cannot navigate an empty gallery")?;
        }
        Command::Navigate(Direction::Previous) => {
            cursor
                .previous()
                .context("Cannot navigate an empty gallery")?;
        }
        Command::First => {
            cursor.first().context("Cannot navigate an empty gallery")?;
        }
        Command::Quit => return Ok(false),
    }
    debug!("Cursor moved to position {:?}", cursor.position());
    Ok(true)
}

/// Run the interactive navigation loop until quit or end of input
pub fn run(mut cursor: GalleryCursor, screen: &Screen) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    cursor.first().context("Cannot display an empty gallery")?;
    screen.show_current(&mut stdout, &cursor)?;
    print_help(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                warn!("Unknown command: {:?}", line.trim());
                print_help(&mut stdout)?;
            }
            continue;
        };
        if !apply(&mut cursor, command)? {
            break;
        }
        screen.show_current(&mut stdout, &cursor)?;
    }

    info!("Leaving the gallery");
    Ok(())
}

/// Apply a fixed command string non-interactively, rendering each frame
pub fn run_script(mut cursor: GalleryCursor, screen: &Screen, steps: &str) -> Result<()> {
    let mut stdout = io::stdout();

    cursor.first().context("Cannot display an empty gallery")?;
    screen.show_current(&mut stdout, &cursor)?;

    for step in steps.chars() {
        if step.is_whitespace() {
            continue;
        }
        let Some(command) = parse_step(step) else {
            bail!("Invalid script step {:?} (expected 'n', 'p' or 'f')", step);
        };
        apply(&mut cursor, command)?;
        screen.show_current(&mut stdout, &cursor)?;
    }
    Ok(())
}

/// Print the collection as an indexed listing
pub fn list(cursor: &GalleryCursor, out: &mut impl Write) -> Result<()> {
    for (index, artwork) in cursor.iter().enumerate() {
        writeln!(
            out,
            "{}: {} by {} ({})",
            index,
            resolve_text(&artwork.title),
            resolve_text(&artwork.artist),
            resolve_text(&artwork.year),
        )
        .context("Failed to write listing")?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "  n: next  p: previous  f: first  q: quit")
        .context("Failed to write help line")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::builtin_archive;

    #[test]
    fn plain_frame_shows_resolved_metadata_and_position() {
        let mut cursor = builtin_archive();
        let screen = Screen::new(true);

        let artwork = cursor.first().unwrap().clone();
        let frame = screen.render(&artwork, 0, cursor.len());
        assert_eq!(frame, "[1/3] The Starry Night by Vincent van Gogh (1889)\n");
    }

    #[test]
    fn framed_card_contains_image_block_and_description() {
        let mut cursor = builtin_archive();
        let screen = Screen::new(false);

        cursor.first().unwrap();
        let artwork = cursor.next().unwrap().clone();
        let frame = screen.render(&artwork, 1, cursor.len());

        assert!(frame.contains("The Great Wave off Kanagawa"));
        assert!(frame.contains("Katsushika Hokusai  (1831)"));
        assert!(frame.contains("[2/3]"));
        assert!(frame.starts_with("+-"));
    }

    #[test]
    fn unknown_image_reference_renders_visible_placeholder() {
        use crate::assets::{ImageRef, TextRef};
        use crate::gallery::ArtworkRecord;

        let screen = Screen::new(false);
        let artwork = ArtworkRecord::new(
            TextRef::new("artwork_title_0"),
            TextRef::new("artwork_artist_0"),
            TextRef::new("artwork_year_0"),
            ImageRef::new("background_missing"),
        );
        let frame = screen.render(&artwork, 0, 1);
        assert!(frame.contains("[image: background_missing]"));
    }

    #[test]
    fn interactive_lines_parse_to_commands() {
        assert_eq!(parse_command("n"), Some(Command::Navigate(Direction::Next)));
        assert_eq!(
            parse_command("  previous "),
            Some(Command::Navigate(Direction::Previous))
        );
        assert_eq!(parse_command("first"), Some(Command::First));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("sideways"), None);
    }

    #[test]
    fn listing_covers_the_whole_collection_in_order() {
        let cursor = builtin_archive();
        let mut out = Vec::new();
        list(&cursor, &mut out).unwrap();

        let listing = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("0: The Starry Night"));
        assert!(lines[2].starts_with("2: Girl with a Pearl Earring"));
    }
}
