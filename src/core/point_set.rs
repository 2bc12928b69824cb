use std::fmt;

use crate::core::point::{Point, POINT_COUNT};

/// A set of board points packed into the low 24 bits of a `u32`.
///
/// `Copy`, so "what if" edits (`with`/`without`) produce a fresh value and never touch the
/// caller's set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointSet(u32);

impl PointSet {
    pub const EMPTY: PointSet = PointSet(0);
    pub const FULL: PointSet = PointSet((1u32 << POINT_COUNT) - 1);

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.0 & mask_of(p) != 0
    }

    #[inline]
    pub fn with(self, p: Point) -> PointSet {
        PointSet(self.0 | mask_of(p))
    }

    #[inline]
    pub fn without(self, p: Point) -> PointSet {
        PointSet(self.0 & !mask_of(p))
    }

    #[inline]
    pub fn insert(&mut self, p: Point) {
        self.0 |= mask_of(p);
    }

    #[inline]
    pub fn union(self, other: PointSet) -> PointSet {
        PointSet(self.0 | other.0)
    }

    #[inline]
    pub fn difference(self, other: PointSet) -> PointSet {
        PointSet(self.0 & !other.0)
    }

    /// Every legal point not in `self`.
    #[inline]
    pub fn complement(self) -> PointSet {
        PointSet(!self.0 & Self::FULL.0)
    }

    #[inline]
    pub fn is_superset(self, other: PointSet) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_disjoint(self, other: PointSet) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending index order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

#[inline]
const fn mask_of(p: Point) -> u32 {
    1u32 << p.index()
}

pub struct Iter(u32);

impl Iterator for Iter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Point::from_index(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::EMPTY;
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|p| {
                let c = p.coord();
                (c.row, c.col)
            }))
            .finish()
    }
}
