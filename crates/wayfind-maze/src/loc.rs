use std::fmt;

/// A grid location: row index then column index, both growing down-right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The location one row up.
    #[inline]
    pub const fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    /// The location one row down.
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The location one column left.
    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    /// The location one column right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The four cardinal neighbours (up, right, down, left), bounds unchecked.
    #[inline]
    pub fn neighbors_4(self) -> [Loc; 4] {
        [self.up(), self.right(), self.down(), self.left()]
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan (L1) distance between two locations.
///
/// On a 4-connected unit-cost grid this never exceeds the true walking
/// distance, which makes it an admissible remaining-cost estimate.
#[inline]
pub fn manhattan(a: Loc, b: Loc) -> i64 {
    (i64::from(a.row) - i64::from(b.row)).abs() + (i64::from(a.col) - i64::from(b.col)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_move_one_cell() {
        let loc = Loc::new(3, 5);
        assert_eq!(loc.up(), Loc::new(2, 5));
        assert_eq!(loc.down(), Loc::new(4, 5));
        assert_eq!(loc.left(), Loc::new(3, 4));
        assert_eq!(loc.right(), Loc::new(3, 6));
    }

    #[test]
    fn neighbors_4_order() {
        let loc = Loc::new(1, 1);
        assert_eq!(
            loc.neighbors_4(),
            [
                Loc::new(0, 1),
                Loc::new(1, 2),
                Loc::new(2, 1),
                Loc::new(1, 0)
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Loc::new(0, 0), Loc::new(0, 0)), 0);
        assert_eq!(manhattan(Loc::new(1, 4), Loc::new(1, 6)), 2);
        assert_eq!(manhattan(Loc::new(3, 5), Loc::new(-7, -11)), 26);
        assert_eq!(manhattan(Loc::new(-7, -11), Loc::new(3, 5)), 26);
    }

    #[test]
    fn display_is_row_col() {
        assert_eq!(Loc::new(2, 9).to_string(), "(2, 9)");
    }
}
