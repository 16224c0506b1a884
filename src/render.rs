//! PostScript output.
//!
//! The page places cell `(column, row)` at `x = 1.5 * column`, `y = √3 * row`, lifting odd
//! columns by half a row, then scales the whole maze to fit a 500×700 point area. Each cell only
//! ever draws its north, north-west and north-east walls; the south side of the grid and the
//! lower diagonals of the outer columns are drawn separately as the border.

use std::io::{self, Write};

use crate::{maze::Direction, pipeline::Generation};

/// Tokens are wrapped once a line reaches this width.
const LINE_WIDTH: usize = 70;
/// Horizontal distance between column centers, plus the half-hexagon overhang.
const COLUMN_PITCH: f64 = 1.366_025_403_784_44;
/// Vertical distance between row centers.
const ROW_PITCH: f64 = 1.732_050_807_568_88;

const PROCEDURES: &str = "\
/M { dup 1 and 0 ne { exch .5 add exch } if
     1.5 mul exch
     1.73205080756888 mul
     newpath moveto } bind def
/N { gsave -.6 0.866025403784439 rmoveto
     .15 .0866025403784439 rlineto
     .9 0 rlineto
     .15 -.0866025403784439 rlineto
     -.15 -.0866025403784439 rlineto
     -.9 0 rlineto
     closepath fill grestore } bind def
/NW{ gsave -.45 .952627944162883 rmoveto
     0 -.173205080756888 rlineto
     -.45 -.779422863405995 rlineto
     -.15 -.0866025403784439 rlineto
     0 .173205080756888 rlineto
     .45 .779422863405995 rlineto
     closepath fill grestore } bind def
/NE{ gsave .45 .952627944162883 rmoveto
     0 -.173205080756888 rlineto
     .45 -.779422863405995 rlineto
     .15 -.0866025403784439 rlineto
     0 .173205080756888 rlineto
     -.45 .779422863405995 rlineto
     closepath fill grestore } bind def
/A { 0 1.73205080756888 rmoveto
     currentpoint newpath moveto } bind def
/B { N A } bind def
/C { NW A } bind def
/D { NW N A } bind def
/E { NE A } bind def
/F { N NE A } bind def
/G { NW NE A } bind def
/H { NW N NE A } bind def
";

/// Writes space-separated tokens, wrapping lines by an estimated width per token.
struct TokenWriter<'a, W: Write> {
    out: &'a mut W,
    used: usize,
}

impl<'a, W: Write> TokenWriter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        TokenWriter { out, used: 0 }
    }

    fn push(&mut self, token: &str, width: usize) -> io::Result<()> {
        write!(self.out, "{token}")?;
        self.used += width;
        if self.used >= LINE_WIDTH {
            self.used = 0;
            writeln!(self.out)
        } else {
            write!(self.out, " ")
        }
    }

    /// Moving to a cell and drawing walls takes about ten columns.
    fn wall(&mut self, token: &str) -> io::Result<()> {
        self.push(token, 10)
    }

    /// A single cell letter takes two columns.
    fn letter(&mut self, letter: char) -> io::Result<()> {
        self.push(letter.encode_utf8(&mut [0; 4]), 2)
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.used > 0 {
            self.used = 0;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Procedure name drawing the closed upper walls of a cell: `A` draws none, then one bit each
/// for north, north-west and north-east.
fn cell_letter(north: bool, north_west: bool, north_east: bool) -> char {
    let code = north as u8 | (north_west as u8) << 1 | (north_east as u8) << 2;
    (b'A' + code) as char
}

/// Renders `generation` as a one-page PostScript document.
pub fn write_postscript<W: Write>(out: &mut W, generation: &Generation) -> io::Result<()> {
    let maze = generation.maze();
    let (columns, rows) = (maze.columns() as i32, maze.rows() as i32);

    let x_scale = 500.0 / ((columns + 1) as f64 * COLUMN_PITCH);
    let y_scale = 700.0 / ((rows + 1) as f64 * ROW_PITCH);
    let scale = x_scale.min(y_scale);

    writeln!(out, "%!PS")?;
    writeln!(out, "/Times-Roman findfont 10 scalefont setfont")?;
    writeln!(out, "30 770 moveto (Maze produced by ) show")?;
    writeln!(out, "/Times-Italic findfont 10 scalefont setfont")?;
    writeln!(out, "({} ) show", env!("CARGO_PKG_NAME"))?;
    writeln!(out, "/Times-Roman findfont 10 scalefont setfont")?;
    writeln!(
        out,
        "30 755 moveto (Parameters: {columns}x{rows}, seed={}) show",
        generation.seed()
    )?;
    writeln!(out)?;
    writeln!(out, "30 40 translate")?;
    writeln!(out, "{scale} {scale} scale")?;
    writeln!(out, "1 1 translate")?;
    writeln!(out)?;
    write!(out, "{PROCEDURES}")?;

    writeln!(out, "\n% Outer walls:")?;
    let mut tokens = TokenWriter::new(out);
    // West border: the north-east walls of a phantom column -1, then column 0's north-west walls.
    for (start, wall) in [("-1 -1 M NE", "A NE"), ("0 0 M NW", "A NW")] {
        tokens.wall(start)?;
        for _ in 1..rows {
            tokens.wall(wall)?;
        }
    }
    // East border, likewise.
    let east = [
        (format!("0 {} M NE", columns - 1), "A NE"),
        (format!("{} {columns} M NW", -(columns & 1)), "A NW"),
    ];
    for (start, wall) in &east {
        tokens.wall(start)?;
        for _ in 1..rows {
            tokens.wall(wall)?;
        }
    }
    // South and north borders, with the diagonals odd columns stick out.
    for column in 0..columns {
        tokens.wall(&format!("-1 {column} M N"))?;
        tokens.wall(&format!("{} {column} M N", rows - 1))?;
        if column % 2 == 1 {
            tokens.wall(&format!("-1 {column} M NW"))?;
            if column < columns - 1 {
                tokens.wall(&format!("-1 {column} M NE"))?;
            }
            tokens.wall(&format!("{} {column} M NW", rows - 1))?;
            tokens.wall(&format!("{} {column} M NE", rows - 1))?;
        }
    }
    tokens.finish()?;

    writeln!(tokens.out, "\n% Inner walls:")?;
    for column in 0..maze.columns() {
        tokens.wall(&format!("0 {column} M"))?;
        for row in 0..maze.rows() {
            let exits = maze[(column, row)];
            tokens.letter(cell_letter(
                !exits.contains(Direction::North),
                !exits.contains(Direction::NorthWest),
                !exits.contains(Direction::NorthEast),
            ))?;
        }
    }
    tokens.finish()?;

    writeln!(out, "\n% Start and end of path:")?;
    for cell in [generation.start(), generation.end()] {
        let (column, row) = maze.grid().coords(cell);
        writeln!(out, "{row} {column} M currentpoint 0.3 0 360 arc fill")?;
    }
    writeln!(out, "\nshowpage")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::MazeConfig, pipeline::generate};

    fn render(columns: u32, rows: u32, seed: u64) -> String {
        let config = MazeConfig::new(columns, rows)
            .unwrap()
            .with_seed(Some(seed));
        let mut out = Vec::new();
        write_postscript(&mut out, &generate(&config)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cell_letters() {
        assert_eq!(cell_letter(false, false, false), 'A');
        assert_eq!(cell_letter(true, false, false), 'B');
        assert_eq!(cell_letter(false, true, false), 'C');
        assert_eq!(cell_letter(true, true, true), 'H');
    }

    #[test]
    fn test_document_structure() {
        let text = render(3, 4, 42);
        assert!(text.starts_with("%!PS\n"));
        assert!(text.contains("(Parameters: 3x4, seed=42) show"));
        assert!(text.trim_end().ends_with("showpage"));
        assert_eq!(text.matches("0.3 0 360 arc fill").count(), 2);
        assert!(text.lines().all(|line| line.len() < 120));
    }

    /// Cell letters of the inner wall section, column by column.
    fn inner_letters(text: &str) -> Vec<char> {
        let inner = text
            .split("% Inner walls:")
            .nth(1)
            .and_then(|rest| rest.split("% Start").next())
            .unwrap();
        inner
            .split_whitespace()
            .filter_map(|token| match token.as_bytes() {
                [c @ b'A'..=b'H'] => Some(*c as char),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_letter_per_cell() {
        let (columns, rows) = (5, 7);
        let text = render(columns, rows, 3);
        assert_eq!(inner_letters(&text).len(), (columns * rows) as usize);
    }

    #[test]
    fn test_top_row_north_walls_stay_closed() {
        // Nothing lies north of the top row, so its letters always include the north wall.
        let letters = inner_letters(&render(2, 2, 5));
        // Column-major: the second letter of each column is its top cell.
        for top in [letters[1], letters[3]] {
            let code = top as u8 - b'A';
            assert_eq!(code & 1, 1, "{top}");
        }
    }

    #[test]
    fn test_same_seed_renders_identically() {
        assert_eq!(render(6, 6, 11), render(6, 6, 11));
        assert_ne!(render(6, 6, 11), render(6, 6, 12));
    }
}
