//! Value-producing reductions of an [OptionPair]
//!
//! Each reduction is gated on a presence state and yields `None` when the gate
//! is not met. The `flat_` forms take functions that already return an
//! [Option] and pass it through without nesting.

use crate::{
    pair::{OptionPair, Slots},
    presence::{Gate, Presence},
};

impl<T, R> OptionPair<T, R> {
    /// Combines both values with `f` when both are present.
    pub fn reduce<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T, R) -> U,
    {
        self.flat_reduce(|l, r| Some(f(l, r)))
    }

    /// Returns `default` when both slots are empty.
    pub fn reduce_if_both_empty<U>(self, default: U) -> Option<U> {
        self.flat_reduce_if_both_empty(Some(default))
    }

    /// Reduces the left value, gated by `gate`.
    pub fn reduce_left_gated<U, F>(self, gate: Gate, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.gated_left(gate).map(f)
    }

    /// Reduces the right value, gated by `gate`.
    pub fn reduce_right_gated<U, F>(self, gate: Gate, f: F) -> Option<U>
    where
        F: FnOnce(R) -> U,
    {
        self.gated_right(gate).map(f)
    }

    /// Reduces the left value whenever it is present.
    pub fn reduce_if_left_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.reduce_left_gated(Gate::Present, f)
    }

    /// Reduces the left value when it is the only value.
    pub fn reduce_if_only_left_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.reduce_left_gated(Gate::Only, f)
    }

    /// Reduces the right value whenever it is present.
    pub fn reduce_if_right_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(R) -> U,
    {
        self.reduce_right_gated(Gate::Present, f)
    }

    /// Reduces the right value when it is the only value.
    pub fn reduce_if_only_right_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(R) -> U,
    {
        self.reduce_right_gated(Gate::Only, f)
    }

    /// Combines both values with `f` when both are present, returning its
    /// result as is.
    pub fn flat_reduce<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T, R) -> Option<U>,
    {
        match self.into_slots() {
            Slots::Both(l, r) => f(l, r),
            Slots::Left(_) | Slots::Right(_) | Slots::Neither => None,
        }
    }

    /// Returns `default` when both slots are empty.
    pub fn flat_reduce_if_both_empty<U>(self, default: Option<U>) -> Option<U> {
        match self.presence() {
            Presence::BothEmpty => default,
            Presence::BothPresent | Presence::OnlyLeft | Presence::OnlyRight => None,
        }
    }

    /// Reduces the left value with an [Option]-returning `f`, gated by `gate`.
    pub fn flat_reduce_left_gated<U, F>(self, gate: Gate, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.gated_left(gate).and_then(f)
    }

    /// Reduces the right value with an [Option]-returning `f`, gated by `gate`.
    pub fn flat_reduce_right_gated<U, F>(self, gate: Gate, f: F) -> Option<U>
    where
        F: FnOnce(R) -> Option<U>,
    {
        self.gated_right(gate).and_then(f)
    }

    /// Flat-reduces the left value whenever it is present.
    pub fn flat_reduce_if_left_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_reduce_left_gated(Gate::Present, f)
    }

    /// Flat-reduces the left value when it is the only value.
    pub fn flat_reduce_if_only_left_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_reduce_left_gated(Gate::Only, f)
    }

    /// Flat-reduces the right value whenever it is present.
    pub fn flat_reduce_if_right_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(R) -> Option<U>,
    {
        self.flat_reduce_right_gated(Gate::Present, f)
    }

    /// Flat-reduces the right value when it is the only value.
    pub fn flat_reduce_if_only_right_present<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(R) -> Option<U>,
    {
        self.flat_reduce_right_gated(Gate::Only, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pair = OptionPair<i32, &'static str>;

    const BOTH: Pair = OptionPair::of(Some(5), Some("a"));
    const LEFT: Pair = OptionPair::of(Some(5), None);
    const RIGHT: Pair = OptionPair::of(None, Some("a"));
    const NEITHER: Pair = OptionPair::empty();

    #[test]
    fn reduce_needs_both() {
        let f = |l: i32, r: &str| l + r.len() as i32;
        assert_eq!(BOTH.reduce(f), Some(6));
        assert_eq!(LEFT.reduce(f), None);
        assert_eq!(RIGHT.reduce(f), None);
        assert_eq!(NEITHER.reduce(f), None);
    }

    #[test]
    fn reduce_if_both_empty() {
        assert_eq!(NEITHER.reduce_if_both_empty("fallback"), Some("fallback"));
        assert_eq!(LEFT.reduce_if_both_empty("fallback"), None);
        assert_eq!(NEITHER.flat_reduce_if_both_empty::<i32>(None), None);
        assert_eq!(BOTH.flat_reduce_if_both_empty(Some(1)), None);
    }

    #[test]
    fn reduce_single_sides() {
        let double = |l: i32| l * 2;
        assert_eq!(BOTH.reduce_if_left_present(double), Some(10));
        assert_eq!(LEFT.reduce_if_left_present(double), Some(10));
        assert_eq!(RIGHT.reduce_if_left_present(double), None);

        assert_eq!(BOTH.reduce_if_only_left_present(double), None);
        assert_eq!(LEFT.reduce_if_only_left_present(double), Some(10));

        assert_eq!(BOTH.reduce_if_right_present(str::len), Some(1));
        assert_eq!(RIGHT.reduce_if_right_present(str::len), Some(1));
        assert_eq!(LEFT.reduce_if_right_present(str::len), None);

        assert_eq!(BOTH.reduce_if_only_right_present(str::len), None);
        assert_eq!(RIGHT.reduce_if_only_right_present(str::len), Some(1));
        assert_eq!(NEITHER.reduce_if_only_right_present(str::len), None);
    }

    #[test]
    fn flat_reduce_does_not_nest() {
        let parse = |l: i32, r: &str| r.parse::<i32>().ok().map(|r| l + r);
        assert_eq!(BOTH.flat_reduce(parse), None);
        assert_eq!(OptionPair::of(Some(5), Some("7")).flat_reduce(parse), Some(12));
        assert_eq!(RIGHT.flat_reduce(parse), None);
    }

    #[test]
    fn flat_reduce_single_sides() {
        let positive = |l: i32| (l > 0).then_some(l);
        assert_eq!(BOTH.flat_reduce_if_left_present(positive), Some(5));
        let negative = OptionPair::<i32, ()>::of(Some(-1), None);
        assert_eq!(negative.flat_reduce_if_left_present(positive), None);
        assert_eq!(BOTH.flat_reduce_if_only_left_present(positive), None);
        assert_eq!(LEFT.flat_reduce_if_only_left_present(positive), Some(5));

        let first = |r: &'static str| r.chars().next();
        assert_eq!(BOTH.flat_reduce_if_right_present(first), Some('a'));
        assert_eq!(BOTH.flat_reduce_if_only_right_present(first), None);
        assert_eq!(RIGHT.flat_reduce_if_only_right_present(first), Some('a'));
        let blank = OptionPair::<(), &str>::of(None, Some(""));
        assert_eq!(blank.flat_reduce_if_right_present(first), None);
    }

    #[test]
    #[should_panic(expected = "reducer failed")]
    fn reducer_panics_propagate() {
        BOTH.reduce(|_, _| -> i32 { panic!("reducer failed") });
    }
}
