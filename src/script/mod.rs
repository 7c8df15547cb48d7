//! Text command interface for batch drawing.
//!
//! Scripts are plain text, one whitespace-separated command per line. Items
//! are keyed by an id; drawing an id again replaces it.
//!
//! # Syntax
//!
//! ```text
//! resetCanvas W H                     - New W x H canvas, drops all items
//! saveCanvas NAME                     - Write NAME.bmp (or .png) to the output directory
//! setColor R G B                      - Pen color for items drawn afterwards
//! drawLine ID x0 y0 x1 y1 ALGO        - Naive | DDA | Bresenham
//! drawPolygon ID x0 y0 x1 y1 ... ALGO - DDA | Bresenham (Naive also accepted)
//! drawEllipse ID x0 y0 x1 y1          - Ellipse inside the box of two corners
//! drawCurve ID x0 y0 x1 y1 ... ALGO   - Bezier | B-spline
//! translate ID dx dy
//! rotate ID x y degrees
//! scale ID x y factor
//! clip ID x_min y_min x_max y_max ALGO - Cohen-Sutherland | Liang-Barsky
//! ```
//!
//! # Example
//!
//! ```rust
//! use rasterkit::script::{parse_command, Command};
//!
//! let command = parse_command("setColor 255 0 0", 1).unwrap();
//! assert!(matches!(command, Some(Command::SetColor(_))));
//! ```

mod session;

pub use session::{Item, Session, SessionConfig};

use std::str::FromStr;

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Pixel};
use crate::render::{CurveAlgorithm, LineAlgorithm, Primitive, PrimitiveKind};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resize the canvas and drop every item.
    ResetCanvas {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Render every item and write the image.
    SaveCanvas {
        /// File name without extension.
        name: String,
    },
    /// Change the pen color.
    SetColor(Rgba),
    /// Store (or replace) an item.
    Draw {
        /// Item id.
        id: String,
        /// What to draw.
        primitive: Primitive,
    },
    /// Shift an item.
    Translate {
        /// Item id.
        id: String,
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotate an item about a pivot.
    Rotate {
        /// Item id.
        id: String,
        /// Pivot.
        center: Pixel,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale an item about a pivot.
    Scale {
        /// Item id.
        id: String,
        /// Pivot.
        center: Pixel,
        /// Scale factor.
        factor: f64,
    },
    /// Clip a line item to a window.
    Clip {
        /// Item id.
        id: String,
        /// Clip window.
        window: ClipWindow,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
    },
}

/// Argument cursor over one script line.
struct Args<'a> {
    line: usize,
    command: &'a str,
    tokens: Vec<&'a str>,
}

impl Args<'_> {
    fn invalid(&self, message: impl Into<String>) -> Error {
        Error::InvalidCommand {
            line: self.line,
            message: format!("{}: {}", self.command, message.into()),
        }
    }

    fn expect_len(&self, len: usize) -> Result<()> {
        if self.tokens.len() == len {
            Ok(())
        } else {
            Err(self.invalid(format!(
                "expected {len} arguments, got {}",
                self.tokens.len()
            )))
        }
    }

    fn parse<T: FromStr>(&self, index: usize) -> Result<T> {
        let token = self
            .tokens
            .get(index)
            .ok_or_else(|| self.invalid(format!("missing argument {}", index + 1)))?;
        token
            .parse()
            .map_err(|_| self.invalid(format!("invalid argument `{token}`")))
    }

    fn id(&self) -> Result<String> {
        self.tokens
            .first()
            .map(|id| (*id).to_string())
            .ok_or_else(|| self.invalid("missing item id"))
    }

    fn pixel(&self, index: usize) -> Result<Pixel> {
        Ok(Pixel::new(self.parse(index)?, self.parse(index + 1)?))
    }

    /// Coordinate pairs between the id and the trailing algorithm tag.
    fn point_list(&self) -> Result<Vec<Pixel>> {
        let coords = self.tokens.len().saturating_sub(2);
        if coords == 0 || coords % 2 != 0 {
            return Err(self.invalid("expected x y coordinate pairs followed by an algorithm"));
        }
        (0..coords / 2).map(|i| self.pixel(1 + 2 * i)).collect()
    }

    fn algorithm<T: FromStr<Err = Error>>(&self, index: usize) -> Result<T> {
        let tag = self
            .tokens
            .get(index)
            .ok_or_else(|| self.invalid("missing algorithm"))?;
        tag.parse()
    }
}

/// Parse one script line.
///
/// Returns `Ok(None)` for blank lines. `line` is the 1-based line number used
/// in error messages.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for an unknown command name,
/// [`Error::UnsupportedAlgorithm`] for an unknown algorithm tag, and
/// [`Error::InvalidCommand`] for missing or malformed arguments.
pub fn parse_command(source: &str, line: usize) -> Result<Option<Command>> {
    let mut parts = source.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let args = Args {
        line,
        command,
        tokens: parts.collect(),
    };

    let parsed = match command {
        "resetCanvas" => {
            args.expect_len(2)?;
            Command::ResetCanvas {
                width: args.parse(0)?,
                height: args.parse(1)?,
            }
        }
        "saveCanvas" => {
            args.expect_len(1)?;
            Command::SaveCanvas { name: args.id()? }
        }
        "setColor" => {
            args.expect_len(3)?;
            Command::SetColor(Rgba::rgb(args.parse(0)?, args.parse(1)?, args.parse(2)?))
        }
        "drawLine" => {
            args.expect_len(6)?;
            let algorithm: LineAlgorithm = args.algorithm(5)?;
            Command::Draw {
                id: args.id()?,
                primitive: Primitive::new(
                    PrimitiveKind::Line(algorithm),
                    vec![args.pixel(1)?, args.pixel(3)?],
                ),
            }
        }
        "drawPolygon" => {
            let vertices = args.point_list()?;
            let algorithm: LineAlgorithm = args.algorithm(args.tokens.len() - 1)?;
            Command::Draw {
                id: args.id()?,
                primitive: Primitive::new(PrimitiveKind::Polygon(algorithm), vertices),
            }
        }
        "drawEllipse" => {
            args.expect_len(5)?;
            Command::Draw {
                id: args.id()?,
                primitive: Primitive::new(
                    PrimitiveKind::Ellipse,
                    vec![args.pixel(1)?, args.pixel(3)?],
                ),
            }
        }
        "drawCurve" => {
            let controls = args.point_list()?;
            let algorithm: CurveAlgorithm = args.algorithm(args.tokens.len() - 1)?;
            Command::Draw {
                id: args.id()?,
                primitive: Primitive::new(PrimitiveKind::Curve(algorithm), controls),
            }
        }
        "translate" => {
            args.expect_len(3)?;
            Command::Translate {
                id: args.id()?,
                dx: args.parse(1)?,
                dy: args.parse(2)?,
            }
        }
        "rotate" => {
            args.expect_len(4)?;
            Command::Rotate {
                id: args.id()?,
                center: args.pixel(1)?,
                degrees: args.parse(3)?,
            }
        }
        "scale" => {
            args.expect_len(4)?;
            Command::Scale {
                id: args.id()?,
                center: args.pixel(1)?,
                factor: args.parse(3)?,
            }
        }
        "clip" => {
            args.expect_len(6)?;
            Command::Clip {
                id: args.id()?,
                window: ClipWindow::new(
                    args.parse(1)?,
                    args.parse(2)?,
                    args.parse(3)?,
                    args.parse(4)?,
                ),
                algorithm: args.algorithm(5)?,
            }
        }
        other => return Err(Error::UnknownCommand(other.to_string())),
    };

    Ok(Some(parsed))
}
