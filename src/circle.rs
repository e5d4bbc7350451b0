//! Circles, outlined or filled.
//!
//! Rasterized with the integer midpoint circle algorithm: one octant is
//! computed and mirrored eight ways. Fills are horizontal chords drawn
//! with [`Line`].

use core::iter::FusedIterator;

use crate::color::PixelColor;
use crate::drawable::Drawable;
use crate::geometry::Xy;
use crate::line::Line;
use crate::sink::PixelSink;

/// A circle around `start` with an integer radius.
///
/// The outline is drawn in the foreground color. If the fill color is not
/// transparent the interior is painted with it as well; the outline is
/// painted last so it always stays solid foreground.
///
/// A radius of zero draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle<C> {
    center: Xy,
    radius: u16,
    fg: C,
    bg: C,
}

impl<C: PixelColor> Circle<C> {
    /// Create a black, unfilled circle.
    #[must_use]
    pub const fn new(center: Xy, radius: u16) -> Self {
        Self { center, radius, fg: C::BLACK, bg: C::TRANSPARENT }
    }

    /// Set the outline color.
    #[must_use]
    pub fn color(self, fg: C) -> Self {
        Self { fg, ..self }
    }

    /// Set the fill color. Transparent means outline only.
    #[must_use]
    pub fn fill(self, bg: C) -> Self {
        Self { bg, ..self }
    }

    /// The radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> u16 {
        self.radius
    }

    /// The outline color.
    #[must_use]
    pub const fn foreground(&self) -> C {
        self.fg
    }

    /// The fill color, possibly transparent.
    #[must_use]
    pub const fn fill_color(&self) -> C {
        self.bg
    }

    /// Whether the interior gets painted.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.bg.is_transparent()
    }

    /// Copy of this circle moved by `offset`.
    ///
    /// The new center is clamped to the `i32` range.
    #[must_use]
    pub fn translate(self, offset: Xy) -> Self {
        Self { center: self.center.saturating_add(offset), ..self }
    }

    /// Midpoint walk over the second octant of this circle.
    #[must_use]
    pub fn octant(&self) -> OctantWalk {
        OctantWalk::new(self.radius)
    }

    /// Write `color` at `center + (dx, dy)`. Points outside the `i32`
    /// plane are skipped.
    fn plot(&self, sink: &mut dyn PixelSink<C>, dx: i32, dy: i32, color: C) {
        if let Some(at) = self.center.checked_offset(dx, dy) {
            sink.write(at, color);
        }
    }

    /// Horizontal chord from `(-half, row)` to `(half, row)` in the fill color.
    fn chord(&self, sink: &mut dyn PixelSink<C>, half: i32, row: i32) {
        let Some(y) = self.center.y.checked_add(row) else {
            return;
        };
        // Clamping keeps the representable part of the chord. With
        // half >= 1 the clamped ends never coincide.
        let left = Xy::new(self.center.x.saturating_sub(half), y);
        let right = Xy::new(self.center.x.saturating_add(half), y);
        Line::new(left, right).color(self.bg).render(sink);
    }

    fn render_fill(&self, sink: &mut dyn PixelSink<C>) {
        let r = i32::from(self.radius);

        self.chord(sink, r, 0);
        // Vertical extremes, in the foreground, ahead of the chords.
        self.plot(sink, 0, r, self.fg);
        self.plot(sink, 0, -r, self.fg);

        for (x, y) in self.octant() {
            self.chord(sink, x, y);
            self.chord(sink, x, -y);
            self.chord(sink, y, x);
            self.chord(sink, y, -x);
        }
    }

    fn render_outline(&self, sink: &mut dyn PixelSink<C>) {
        let r = i32::from(self.radius);
        let fg = self.fg;

        self.plot(sink, 0, r, fg);
        self.plot(sink, 0, -r, fg);
        self.plot(sink, r, 0, fg);
        self.plot(sink, -r, 0, fg);

        for (x, y) in self.octant() {
            self.plot(sink, x, y, fg);
            self.plot(sink, -x, y, fg);
            self.plot(sink, x, -y, fg);
            self.plot(sink, -x, -y, fg);
            // On the diagonal the swapped points are the same four.
            if x != y {
                self.plot(sink, y, x, fg);
                self.plot(sink, -y, x, fg);
                self.plot(sink, y, -x, fg);
                self.plot(sink, -y, -x, fg);
            }
        }
    }
}

impl<C: PixelColor> Drawable<C> for Circle<C> {
    fn start(&self) -> Xy {
        self.center
    }

    fn render(&self, sink: &mut dyn PixelSink<C>) {
        if self.radius < 1 {
            log::trace!("zero-radius circle at {:?}, nothing to render", self.center);
            return;
        }
        if self.is_filled() {
            self.render_fill(sink);
        }
        // Outline last, so no chord ever overdraws it.
        self.render_outline(sink);
    }
}

/// Midpoint iteration over one octant of a circle centered at the origin.
///
/// Starts at the top `(0, r)` and yields `(x, y)` pairs with `0 < x <= y`
/// moving clockwise towards the diagonal. The axis point itself is not
/// yielded. A final step that would cross the diagonal only mirrors a
/// pixel already produced and is dropped.
#[derive(Debug, Clone)]
pub struct OctantWalk {
    x: i32,
    y: i32,
    /// Decision value, `1 − r` initially.
    fx: i32,
    dd_fx: i32,
    dd_fy: i32,
}

impl OctantWalk {
    /// Walk for a circle of the given radius.
    #[must_use]
    pub fn new(radius: u16) -> Self {
        let r = i32::from(radius);
        Self { x: 0, y: r, fx: 1 - r, dd_fx: 1, dd_fy: -2 * r }
    }
}

impl Iterator for OctantWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }

        if self.fx >= 0 {
            self.y -= 1;
            self.dd_fy += 2;
            self.fx += self.dd_fy;
        }
        self.x += 1;
        self.dd_fx += 2;
        self.fx += self.dd_fx;

        if self.x > self.y {
            return None;
        }
        Some((self.x, self.y))
    }
}

impl FusedIterator for OctantWalk {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::color::Rgba;
    use crate::sink::PixelLog;

    fn log_of(circle: &Circle<Rgba>) -> PixelLog<Rgba> {
        let mut log = PixelLog::new();
        circle.render(&mut log);
        log
    }

    /// Final color per pixel, last write wins.
    fn image(log: &PixelLog<Rgba>) -> BTreeMap<Xy, Rgba> {
        log.writes().iter().copied().collect()
    }

    fn colored(image: &BTreeMap<Xy, Rgba>, color: Rgba) -> BTreeSet<Xy> {
        image.iter().filter(|(_, &c)| c == color).map(|(&p, _)| p).collect()
    }

    fn set(points: &[(i32, i32)]) -> BTreeSet<Xy> {
        points.iter().copied().map(Xy::from).collect()
    }

    #[test]
    fn test_circle_zero_radius_draws_nothing() {
        assert!(log_of(&Circle::new(Xy::new(5, 5), 0)).is_empty());
        assert!(log_of(&Circle::new(Xy::new(5, 5), 0).fill(Rgba::RED)).is_empty());
    }

    #[test]
    fn test_circle_radius_one_is_four_axis_points() {
        let log = log_of(&Circle::new(Xy::ORIGIN, 1).color(Rgba::BLACK));
        assert_eq!(
            log.writes(),
            &[
                (Xy::new(0, 1), Rgba::BLACK),
                (Xy::new(0, -1), Rgba::BLACK),
                (Xy::new(1, 0), Rgba::BLACK),
                (Xy::new(-1, 0), Rgba::BLACK),
            ]
        );
    }

    #[test]
    fn test_octant_walk() {
        assert_eq!(OctantWalk::new(0).count(), 0);
        assert_eq!(OctantWalk::new(1).count(), 0);
        assert_eq!(OctantWalk::new(2).collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(OctantWalk::new(3).collect::<Vec<_>>(), vec![(1, 3), (2, 2)]);
        assert_eq!(OctantWalk::new(4).collect::<Vec<_>>(), vec![(1, 4), (2, 3), (3, 3)]);
        assert_eq!(OctantWalk::new(5).collect::<Vec<_>>(), vec![(1, 5), (2, 5), (3, 4)]);
    }

    #[test]
    fn test_octant_walk_is_fused() {
        let mut walk = OctantWalk::new(2);
        assert_eq!(walk.next(), Some((1, 2)));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_circle_radius_three_outline() {
        let log = log_of(&Circle::new(Xy::new(10, 20), 3).color(Rgba::BLUE));
        let expected: BTreeSet<Xy> = set(&[
            (0, 3),
            (0, -3),
            (3, 0),
            (-3, 0),
            (1, 3),
            (-1, 3),
            (1, -3),
            (-1, -3),
            (3, 1),
            (-3, 1),
            (3, -1),
            (-3, -1),
            (2, 2),
            (-2, 2),
            (2, -2),
            (-2, -2),
        ])
        .into_iter()
        .map(|p| p + Xy::new(10, 20))
        .collect();

        assert_eq!(log.distinct(), expected);
        // No pixel written twice
        assert_eq!(log.len(), expected.len());
        assert!(log.writes().iter().all(|&(_, c)| c == Rgba::BLUE));
    }

    #[test]
    fn test_circle_outline_independent_of_fill() {
        let outline = Circle::new(Xy::ORIGIN, 3).color(Rgba::BLACK);
        let filled = outline.fill(Rgba::RED);

        let outline_image = image(&log_of(&outline));
        let filled_image = image(&log_of(&filled));

        assert_eq!(
            colored(&outline_image, Rgba::BLACK),
            colored(&filled_image, Rgba::BLACK)
        );
        assert_eq!(filled_image[&Xy::ORIGIN], Rgba::RED);
        assert_eq!(filled_image[&Xy::new(1, 2)], Rgba::RED);
        assert_eq!(filled_image[&Xy::new(0, 3)], Rgba::BLACK);
        assert_eq!(filled_image[&Xy::new(-3, 0)], Rgba::BLACK);
    }

    #[test]
    fn test_circle_fill_starts_with_diameter_then_extremes() {
        let log = log_of(&Circle::new(Xy::ORIGIN, 2).color(Rgba::BLACK).fill(Rgba::GREEN));
        let head: Vec<_> = log.writes().iter().take(7).copied().collect();
        assert_eq!(
            head,
            vec![
                (Xy::new(-2, 0), Rgba::GREEN),
                (Xy::new(-1, 0), Rgba::GREEN),
                (Xy::new(0, 0), Rgba::GREEN),
                (Xy::new(1, 0), Rgba::GREEN),
                (Xy::new(2, 0), Rgba::GREEN),
                (Xy::new(0, 2), Rgba::BLACK),
                (Xy::new(0, -2), Rgba::BLACK),
            ]
        );
    }

    #[test]
    fn test_circle_filled_radius_two_image() {
        let img = image(&log_of(&Circle::new(Xy::ORIGIN, 2).color(Rgba::BLACK).fill(Rgba::WHITE)));
        let outline = set(&[
            (0, 2),
            (0, -2),
            (2, 0),
            (-2, 0),
            (1, 2),
            (-1, 2),
            (1, -2),
            (-1, -2),
            (2, 1),
            (-2, 1),
            (2, -1),
            (-2, -1),
        ]);
        let interior = set(&[
            (0, 0),
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
        ]);
        assert_eq!(colored(&img, Rgba::BLACK), outline);
        assert_eq!(colored(&img, Rgba::WHITE), interior);
        assert_eq!(img.len(), outline.len() + interior.len());
    }

    #[test]
    fn test_circle_accessors() {
        let circle = Circle::new(Xy::new(1, 2), 7).color(Rgba::RED);
        assert_eq!(circle.start(), Xy::new(1, 2));
        assert_eq!(circle.radius(), 7);
        assert_eq!(circle.foreground(), Rgba::RED);
        assert_eq!(circle.fill_color(), Rgba::TRANSPARENT);
        assert!(!circle.is_filled());
        assert!(circle.fill(Rgba::BLUE).is_filled());
        assert_eq!(circle.translate(Xy::new(-1, -2)).start(), Xy::ORIGIN);
        assert_eq!(Circle::<Rgba>::new(Xy::ORIGIN, 1).foreground(), Rgba::BLACK);
    }

    #[test]
    fn test_circle_large_radius_does_not_overflow() {
        let log = log_of(&Circle::new(Xy::new(i32::MAX / 2, 0), u16::MAX));
        assert!(log.len() > 4 * usize::from(u16::MAX));
    }

    #[test]
    fn test_circle_at_coordinate_limit_skips_unrepresentable_points() {
        let log = log_of(&Circle::new(Xy::new(i32::MAX, 0), 1).color(Rgba::BLACK));
        assert_eq!(
            log.writes(),
            &[
                (Xy::new(i32::MAX, 1), Rgba::BLACK),
                (Xy::new(i32::MAX, -1), Rgba::BLACK),
                (Xy::new(i32::MAX - 1, 0), Rgba::BLACK),
            ]
        );

        // In the corner only the quarter with dx <= 0, dy >= 0 survives,
        // fill included.
        let corner = Xy::new(i32::MAX, i32::MIN);
        let at_origin = image(&log_of(&Circle::new(Xy::ORIGIN, 6).fill(Rgba::RED)));
        let expected: BTreeMap<Xy, Rgba> = at_origin
            .into_iter()
            .filter(|(p, _)| p.x <= 0 && p.y >= 0)
            .map(|(p, c)| (Xy::new(corner.x + p.x, corner.y + p.y), c))
            .collect();
        let at_corner = image(&log_of(&Circle::new(corner, 6).fill(Rgba::RED)));
        assert_eq!(at_corner, expected);
    }

    #[test]
    fn test_circle_translate_saturates() {
        let moved = Circle::<Rgba>::new(Xy::new(i32::MAX - 2, 0), 4).translate(Xy::new(10, -3));
        assert_eq!(moved.start(), Xy::new(i32::MAX, -3));
        // Left half of the 24-pixel outline plus the two vertical extremes
        let log = log_of(&moved);
        assert_eq!(log.len(), 13);
        assert!(log.distinct().contains(&Xy::new(i32::MAX, 1)));
        assert!(log.distinct().contains(&Xy::new(i32::MAX, -7)));
    }
}
