//! Interpreter state for drawing scripts.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::clip::{clip, ClipAlgorithm};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipWindow, Pixel};
use crate::output::OutputFormat;
use crate::render::{Drawable, Primitive, PrimitiveKind};
use crate::script::{parse_command, Command};
use crate::transform;

/// Settings that stay fixed for the lifetime of a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory saved canvases are written to.
    pub output_dir: PathBuf,
    /// Image format of saved canvases.
    pub format: OutputFormat,
    /// Canvas width before the first `resetCanvas`.
    pub default_width: u32,
    /// Canvas height before the first `resetCanvas`.
    pub default_height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::Bmp,
            default_width: 1000,
            default_height: 1000,
        }
    }
}

impl SessionConfig {
    /// Config writing to `output_dir` with defaults otherwise.
    #[must_use]
    pub fn with_output_dir<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}

/// A stored item: a primitive and the pen color it was drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item id.
    pub id: String,
    /// Geometry and algorithm.
    pub primitive: Primitive,
    /// Pen color at the time the item was drawn.
    pub color: Rgba,
}

/// Canvas, pen and items of a running script.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    width: u32,
    height: u32,
    pen: Rgba,
    /// Items in the order they were first drawn.
    items: Vec<Item>,
}

impl Session {
    /// Create an empty session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            width: config.default_width,
            height: config.default_height,
            pen: Rgba::BLACK,
            items: Vec::new(),
            config,
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Current pen color.
    #[must_use]
    pub const fn pen(&self) -> Rgba {
        self.pen
    }

    /// Stored items in drawing order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Run every line of `script`, stopping at the first error.
    ///
    /// Returns the paths of all saved canvases.
    ///
    /// # Errors
    ///
    /// Returns the first parse or execution error.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<PathBuf>> {
        let mut saved = Vec::new();
        for (index, source) in script.lines().enumerate() {
            let Some(command) = parse_command(source, index + 1)? else {
                continue;
            };
            debug!(line = index + 1, ?command, "executing");
            if let Some(path) = self.execute(command)? {
                saved.push(path);
            }
        }
        Ok(saved)
    }

    /// Execute one command.
    ///
    /// Returns the written file for `saveCanvas`, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the command references an unknown item, does not
    /// apply to the item's primitive, or saving fails.
    pub fn execute(&mut self, command: Command) -> Result<Option<PathBuf>> {
        match command {
            Command::ResetCanvas { width, height } => {
                if width == 0 || height == 0 {
                    return Err(Error::InvalidDimensions { width, height });
                }
                self.width = width;
                self.height = height;
                self.items.clear();
            }
            Command::SaveCanvas { name } => return self.save(&name).map(Some),
            Command::SetColor(color) => self.pen = color,
            Command::Draw { id, primitive } => self.insert(id, primitive),
            Command::Translate { id, dx, dy } => {
                let item = self.item_mut(&id)?;
                item.primitive.points = transform::translate(&item.primitive.points, dx, dy);
            }
            Command::Rotate {
                id,
                center,
                degrees,
            } => {
                let item = self.item_mut(&id)?;
                if item.primitive.kind == PrimitiveKind::Ellipse {
                    return Err(Error::InvalidPrimitive(format!(
                        "ellipse {id} is axis-aligned and cannot be rotated"
                    )));
                }
                item.primitive.points =
                    transform::rotate(&item.primitive.points, center.x, center.y, degrees);
            }
            Command::Scale { id, center, factor } => {
                let item = self.item_mut(&id)?;
                item.primitive.points =
                    transform::scale(&item.primitive.points, center.x, center.y, factor);
            }
            Command::Clip {
                id,
                window,
                algorithm,
            } => self.clip_line(&id, &window, algorithm)?,
        }
        Ok(None)
    }

    /// Paint every item onto a fresh white framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are invalid.
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgba::WHITE);
        for item in &self.items {
            item.primitive.draw(&mut fb, item.color);
        }
        Ok(fb)
    }

    fn save(&self, name: &str) -> Result<PathBuf> {
        let fb = self.render()?;
        let path = self
            .config
            .output_dir
            .join(format!("{name}.{}", self.config.format.extension()));
        self.config.format.write_to_file(&fb, &path)?;
        info!(path = %path.display(), items = self.items.len(), "saved canvas");
        Ok(path)
    }

    fn insert(&mut self, id: String, primitive: Primitive) {
        let color = self.pen;
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.primitive = primitive;
                item.color = color;
            }
            None => self.items.push(Item {
                id,
                primitive,
                color,
            }),
        }
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))
    }

    fn clip_line(&mut self, id: &str, window: &ClipWindow, algorithm: ClipAlgorithm) -> Result<()> {
        let item = self.item_mut(id)?;
        let (p0, p1) = match (item.primitive.kind, item.primitive.points.as_slice()) {
            (PrimitiveKind::Line(_), &[p0, p1]) => (p0, p1),
            (kind, _) => {
                return Err(Error::InvalidPrimitive(format!(
                    "only lines can be clipped, {id} is a {}",
                    kind.name()
                )))
            }
        };

        let clipped: Vec<Pixel> = clip(p0, p1, window, algorithm);
        if clipped.is_empty() {
            warn!(id, %algorithm, "line lies outside the clip window, removing it");
            self.items.retain(|item| item.id != id);
        } else {
            item.primitive.points = clipped;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LineAlgorithm;

    fn session() -> Session {
        Session::new(SessionConfig::default())
    }

    fn run(session: &mut Session, script: &str) {
        session.run_script(script).unwrap();
    }

    #[test]
    fn test_defaults() {
        let s = session();
        assert_eq!((s.width(), s.height()), (1000, 1000));
        assert_eq!(s.pen(), Rgba::BLACK);
        assert!(s.items().is_empty());
    }

    #[test]
    fn test_reset_drops_items() {
        let mut s = session();
        run(&mut s, "drawLine a 0 0 5 5 DDA\nresetCanvas 20 10");
        assert!(s.items().is_empty());
        assert_eq!((s.width(), s.height()), (20, 10));
    }

    #[test]
    fn test_zero_sized_reset_is_rejected() {
        let mut s = session();
        assert!(matches!(
            s.run_script("resetCanvas 0 10"),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_items_keep_their_pen_color() {
        let mut s = session();
        run(
            &mut s,
            "setColor 255 0 0\ndrawLine a 0 0 5 5 DDA\nsetColor 0 0 255\ndrawEllipse b 0 0 4 4",
        );
        assert_eq!(s.item("a").unwrap().color, Rgba::RED);
        assert_eq!(s.item("b").unwrap().color, Rgba::BLUE);
    }

    #[test]
    fn test_redraw_replaces_in_place() {
        let mut s = session();
        run(
            &mut s,
            "drawLine a 0 0 5 5 DDA\ndrawLine b 0 0 1 1 DDA\ndrawLine a 1 1 2 2 Bresenham",
        );
        assert_eq!(s.items().len(), 2);
        assert_eq!(s.items()[0].id, "a");
        assert_eq!(
            s.items()[0].primitive.kind,
            PrimitiveKind::Line(LineAlgorithm::Bresenham)
        );
    }

    #[test]
    fn test_transforms_update_control_points() {
        let mut s = session();
        run(
            &mut s,
            "drawPolygon p 0 0 10 0 10 10 DDA\ntranslate p 5 5\nscale p 5 5 2\nrotate p 5 5 90",
        );
        // translate: (5,5) (15,5) (15,15); scale x2 about (5,5): (5,5) (25,5) (25,25)
        // rotate 90 about (5,5): (5,5) (5,25) (-15,25)
        assert_eq!(
            s.item("p").unwrap().primitive.points,
            vec![Pixel::new(5, 5), Pixel::new(5, 25), Pixel::new(-15, 25)]
        );
    }

    #[test]
    fn test_transforms_at_range_limits() {
        let mut s = session();
        run(&mut s, "drawLine a 0 0 2000000000 0 DDA\ntranslate a 2000000000 0");
        let saturated = vec![Pixel::new(2_000_000_000, 0), Pixel::new(i32::MAX, 0)];
        assert_eq!(s.item("a").unwrap().primitive.points, saturated);

        run(&mut s, "rotate a -2000000000 0 0\nscale a -2000000000 0 1");
        assert_eq!(s.item("a").unwrap().primitive.points, saturated);

        run(&mut s, "clip a 2100000000 -10 2147483647 10 Liang-Barsky");
        assert_eq!(
            s.item("a").unwrap().primitive.points,
            vec![Pixel::new(2_100_000_000, 0), Pixel::new(i32::MAX, 0)]
        );
    }

    #[test]
    fn test_rotating_ellipse_is_rejected() {
        let mut s = session();
        run(&mut s, "drawEllipse e 0 0 10 6");
        assert!(matches!(
            s.run_script("rotate e 0 0 45"),
            Err(Error::InvalidPrimitive(_))
        ));
    }

    #[test]
    fn test_clip_shortens_line() {
        let mut s = session();
        run(
            &mut s,
            "drawLine l -10 5 30 5 Bresenham\nclip l 0 0 20 10 Cohen-Sutherland",
        );
        assert_eq!(
            s.item("l").unwrap().primitive.points,
            vec![Pixel::new(0, 5), Pixel::new(20, 5)]
        );
    }

    #[test]
    fn test_clip_rejected_line_is_removed() {
        let mut s = session();
        run(&mut s, "drawLine l 50 50 60 60 DDA\nclip l 0 0 20 10 Liang-Barsky");
        assert!(s.item("l").is_none());
    }

    #[test]
    fn test_clip_non_line_is_rejected() {
        let mut s = session();
        run(&mut s, "drawCurve c 0 0 5 5 10 0 Bezier");
        assert!(matches!(
            s.run_script("clip c 0 0 1 1 Liang-Barsky"),
            Err(Error::InvalidPrimitive(_))
        ));
    }

    #[test]
    fn test_unknown_item() {
        let mut s = session();
        assert!(matches!(
            s.run_script("translate ghost 1 1"),
            Err(Error::UnknownItem(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_unknown_command_stops_processing() {
        let mut s = session();
        let result = s.run_script("drawLine a 0 0 1 1 DDA\nbogus\ndrawLine b 0 0 1 1 DDA");
        assert!(matches!(result, Err(Error::UnknownCommand(_))));
        assert!(s.item("a").is_some());
        assert!(s.item("b").is_none());
    }

    #[test]
    fn test_render_flips_y() {
        let mut s = session();
        run(
            &mut s,
            "resetCanvas 10 10\nsetColor 255 0 0\ndrawLine a 0 0 0 3 Bresenham",
        );
        let fb = s.render().unwrap();
        assert_eq!(fb.get_pixel(0, 9), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(0, 6), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(0, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_later_items_paint_over_earlier() {
        let mut s = session();
        run(
            &mut s,
            "resetCanvas 5 5\nsetColor 255 0 0\ndrawLine a 0 2 4 2 DDA\nsetColor 0 255 0\ndrawLine b 2 0 2 4 DDA",
        );
        let fb = s.render().unwrap();
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(0, 2), Some(Rgba::RED));
    }
}
