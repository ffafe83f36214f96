use super::Coordinate;

/// Iterator over the hexes on the straight line between two coordinates.
///
/// Created by [`Coordinate::line`] or [`Line::new`].
///
/// The line from `a` to `b` contains `a.distance_to(b) + 1` hexes. It always begins
/// with exactly `a` and ends with exactly `b`; each interior hex is the
/// [`Coordinate::round`]ed position of the continuous interpolation between them.
/// Consecutive hexes are always adjacent.
#[derive(Debug, Clone)]
pub struct Line {
    from: Coordinate,
    to: Coordinate,
    steps: i32,
    delta: (f64, f64, f64),
    front: i32,
    back: i32,
}

impl Line {
    /// Start tracing the line from `from` to `to`.
    pub fn new(from: Coordinate, to: Coordinate) -> Line {
        let steps = from.distance_to(to);
        // a zero-length line is just its origin; never divide by zero
        let delta = if steps == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let steps = f64::from(steps);
            (
                (f64::from(to.x()) - f64::from(from.x())) / steps,
                (f64::from(to.y()) - f64::from(from.y())) / steps,
                (f64::from(to.z()) - f64::from(from.z())) / steps,
            )
        };
        log::trace!("tracing line from {} to {} in {} steps", from, to, steps);

        Line {
            from,
            to,
            steps,
            delta,
            front: 0,
            back: steps,
        }
    }

    /// Number of single steps from one end of this line to the other.
    pub fn steps(&self) -> i32 {
        self.steps
    }

    /// The `i`th hex on this line, where `0` is the origin and `steps` is the destination.
    fn at(&self, i: i32) -> Coordinate {
        if i == 0 {
            return self.from;
        }
        if i == self.steps {
            return self.to;
        }

        let i = f64::from(i);
        Coordinate::round(
            f64::from(self.from.x()) + i * self.delta.0,
            f64::from(self.from.y()) + i * self.delta.1,
            f64::from(self.from.z()) + i * self.delta.2,
        )
    }
}

impl Iterator for Line {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }

        let next = self.at(self.front);
        self.front += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.back - self.front + 1).max(0) as usize;
        (size, Some(size))
    }
}

impl std::iter::ExactSizeIterator for Line {}

impl std::iter::DoubleEndedIterator for Line {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }

        let next = self.at(self.back);
        self.back -= 1;
        Some(next)
    }
}

impl std::iter::FusedIterator for Line {}

/// Write the line from `from` to `to` into `buffer`, replacing its previous contents.
///
/// This lets hot loops reuse one allocation across many traces.
pub fn line_into(from: Coordinate, to: Coordinate, buffer: &mut Vec<Coordinate>) {
    buffer.clear();
    buffer.extend(Line::new(from, to));
}
