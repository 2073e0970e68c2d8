use crate::GroupLaw;
use core::ops::Deref;
use elliptic_curve::subtle::{Choice, ConstantTimeEq};
use once_cell::sync::Lazy;

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 8;

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug, Default)]
pub struct LookupTable<Point> {
    points: [Point; LUT_SIZE],
}

impl<Point> LookupTable<Point>
where
    Point: GroupLaw,
{
    /// Compute a new lookup table from the given point.
    pub fn new(p: Point) -> Self {
        let mut points = [p; LUT_SIZE];

        for j in 0..(LUT_SIZE - 1) {
            points[j + 1] = p + points[j];
        }

        Self { points }
    }

    /// Given `-8 <= x <= 8`, returns `x * p` in constant time.
    ///
    /// # Panics
    ///
    /// If `x` is outside of `-8..=8`.
    pub fn select(&self, x: i8) -> Point {
        assert!((-8..=8).contains(&x), "window digit out of range");

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        // Get an array element in constant time
        let mut t = Point::identity();

        for j in 1..(LUT_SIZE + 1) {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.points[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        let neg = -t;
        t.conditional_assign(&neg, neg_mask);
        // Now t == x * p.

        t
    }
}

impl<Point: GroupLaw> From<&Point> for LookupTable<Point> {
    fn from(p: &Point) -> Self {
        Self::new(*p)
    }
}

/// Precomputed lookup tables of multiples of a group's generator.
///
/// Table `i` holds the multiples of `256^i * G`, so `N` tables cover scalars
/// of up to `2 * N` signed radix-16 digits. The tables are computed on first
/// use and shared read-only afterwards.
pub struct BasepointTable<Point, const N: usize> {
    tables: Lazy<[LookupTable<Point>; N]>,
}

impl<Point, const N: usize> BasepointTable<Point, N>
where
    Point: GroupLaw,
{
    /// Create a new [`BasepointTable`] which is lazily initialized on first use and can be bound
    /// to a `static`.
    ///
    /// Computed using [`GroupLaw::generator()`] as the base point.
    pub const fn new() -> Self {
        /// Inner function to initialize the table.
        fn init_table<Point, const N: usize>() -> [LookupTable<Point>; N]
        where
            Point: GroupLaw,
        {
            let mut generator = Point::generator();
            let mut res = [LookupTable::<Point>::default(); N];

            for table in res.iter_mut() {
                *table = LookupTable::new(generator);
                // We are storing tables spaced by two radix steps,
                // to decrease the size of the precomputed data.
                generator = generator.double_n(8);
            }

            res
        }

        Self {
            tables: Lazy::new(init_table),
        }
    }

    /// Computes `k * G` from the signed radix-16 digits of `k`.
    ///
    /// Odd digit positions are accumulated first and shifted up by four
    /// doublings, then the even positions are added. Every table is scanned
    /// for every digit regardless of its value.
    ///
    /// # Panics
    ///
    /// If there are more than `2 * N` digits, or a digit is outside `-8..=8`.
    pub fn mul(&self, digits: &[i8]) -> Point {
        assert!(digits.len() <= 2 * N, "too many digits for basepoint table");

        let mut acc = Point::identity();

        for i in (1..digits.len()).step_by(2) {
            acc = acc + self.tables[i / 2].select(digits[i]);
        }

        acc = acc.double_n(4);

        for i in (0..digits.len()).step_by(2) {
            acc = acc + self.tables[i / 2].select(digits[i]);
        }

        acc
    }
}

impl<Point, const N: usize> Deref for BasepointTable<Point, N> {
    type Target = [LookupTable<Point>; N];

    #[inline]
    fn deref(&self) -> &[LookupTable<Point>; N] {
        &self.tables
    }
}
