//! The [OptionPair] type: two independent optional slots handled jointly

use log::debug;

use crate::{
    error::PairError,
    presence::{Gate, Presence, Side},
};

/// Marker for the canonical both-empty pair.
///
/// Converts into an empty [OptionPair] of any type and compares equal to every
/// pair whose slots are both `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Empty;

/// An immutable pair of independent optional values, `left` and `right`.
///
/// Every transformation consumes the pair and hands back a new one (or the
/// same one, unchanged). Use [OptionPair::as_ref] to work on borrowed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionPair<T, R> {
    left: Option<T>,
    right: Option<R>,
}

/// The contents of an [OptionPair], tagged by presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slots<T, R> {
    /// Both slots hold a value
    Both(T, R),
    /// Only the left slot holds a value
    Left(T),
    /// Only the right slot holds a value
    Right(R),
    /// Neither slot holds a value
    Neither,
}

impl<T, R> Slots<T, R> {
    /// Returns the presence state of these contents.
    pub fn presence(&self) -> Presence {
        match self {
            Slots::Both(..) => Presence::BothPresent,
            Slots::Left(_) => Presence::OnlyLeft,
            Slots::Right(_) => Presence::OnlyRight,
            Slots::Neither => Presence::BothEmpty,
        }
    }
}

impl<T, R> From<Slots<T, R>> for OptionPair<T, R> {
    fn from(slots: Slots<T, R>) -> Self {
        match slots {
            Slots::Both(l, r) => Self::of(Some(l), Some(r)),
            Slots::Left(l) => Self::of(Some(l), None),
            Slots::Right(r) => Self::of(None, Some(r)),
            Slots::Neither => Self::empty(),
        }
    }
}

impl<T, R> OptionPair<T, R> {
    /// Creates a new [OptionPair] from its two slots.
    #[inline]
    pub const fn of(left: Option<T>, right: Option<R>) -> Self {
        Self { left, right }
    }

    /// Creates a new [OptionPair] from containers that may themselves be missing.
    ///
    /// An outer `None` means the container was not supplied at all and is
    /// rejected with [PairError::NullArgument], the left side checked first.
    pub fn try_of(left: Option<Option<T>>, right: Option<Option<R>>) -> Result<Self, PairError> {
        let left = left.ok_or(PairError::NullArgument(Side::Left))?;
        let right = right.ok_or(PairError::NullArgument(Side::Right))?;
        Ok(Self::of(left, right))
    }

    /// The canonical both-empty pair.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// Returns the left slot.
    pub fn left(&self) -> &Option<T> {
        &self.left
    }

    /// Returns the right slot.
    pub fn right(&self) -> &Option<R> {
        &self.right
    }

    /// Returns both slots in order, left first.
    pub fn get(&self) -> (&Option<T>, &Option<R>) {
        (&self.left, &self.right)
    }

    /// Consumes the pair, returning both slots in order.
    pub fn into_inner(self) -> (Option<T>, Option<R>) {
        (self.left, self.right)
    }

    /// Consumes the pair, returning the left slot.
    pub fn into_left(self) -> Option<T> {
        self.left
    }

    /// Consumes the pair, returning the right slot.
    pub fn into_right(self) -> Option<R> {
        self.right
    }

    /// Consumes the pair, returning its contents tagged by presence state.
    pub fn into_slots(self) -> Slots<T, R> {
        match (self.left, self.right) {
            (Some(l), Some(r)) => Slots::Both(l, r),
            (Some(l), None) => Slots::Left(l),
            (None, Some(r)) => Slots::Right(r),
            (None, None) => Slots::Neither,
        }
    }

    /// Converts from `&OptionPair<T, R>` to `OptionPair<&T, &R>`.
    pub fn as_ref(&self) -> OptionPair<&T, &R> {
        OptionPair::of(self.left.as_ref(), self.right.as_ref())
    }

    /// Converts from `&mut OptionPair<T, R>` to `OptionPair<&mut T, &mut R>`.
    pub fn as_mut(&mut self) -> OptionPair<&mut T, &mut R> {
        OptionPair::of(self.left.as_mut(), self.right.as_mut())
    }

    // ---- classification ----

    /// Classifies the pair into one of the four [Presence] states.
    #[inline]
    pub fn presence(&self) -> Presence {
        Presence::of(self.left.is_some(), self.right.is_some())
    }

    /// Returns true if both slots hold a value.
    pub fn is_both_present(&self) -> bool {
        self.presence().is_both_present()
    }

    /// Returns true if the left value is the only value.
    pub fn is_only_left_present(&self) -> bool {
        self.presence().is_only_left_present()
    }

    /// Returns true if the right value is the only value.
    pub fn is_only_right_present(&self) -> bool {
        self.presence().is_only_right_present()
    }

    /// Returns true if neither slot holds a value.
    pub fn is_both_empty(&self) -> bool {
        self.presence().is_both_empty()
    }

    /// Returns true if at least one slot holds a value.
    pub fn is_any_present(&self) -> bool {
        self.presence().is_any_present()
    }

    /// Returns true if at least one slot is empty.
    pub fn is_any_empty(&self) -> bool {
        self.presence().is_any_empty()
    }

    /// Returns true if the left slot holds a value.
    pub fn is_left_present(&self) -> bool {
        self.presence().is_left_present()
    }

    /// Returns true if the right slot holds a value.
    pub fn is_right_present(&self) -> bool {
        self.presence().is_right_present()
    }

    /// Returns true if the left slot is empty.
    pub fn is_left_empty(&self) -> bool {
        self.presence().is_left_empty()
    }

    /// Returns true if the right slot is empty.
    pub fn is_right_empty(&self) -> bool {
        self.presence().is_right_empty()
    }

    /// Returns true if the left slot is the only empty one.
    pub fn is_only_left_empty(&self) -> bool {
        self.presence().is_only_left_empty()
    }

    /// Returns true if the right slot is the only empty one.
    pub fn is_only_right_empty(&self) -> bool {
        self.presence().is_only_right_empty()
    }

    /// Whether `side` of this pair passes `gate`.
    pub fn admits(&self, gate: Gate, side: Side) -> bool {
        gate.admits(side, self.presence())
    }

    /// Takes the left value if it passes `gate`.
    pub fn gated_left(self, gate: Gate) -> Option<T> {
        if self.admits(gate, Side::Left) {
            self.left
        } else {
            None
        }
    }

    /// Takes the right value if it passes `gate`.
    pub fn gated_right(self, gate: Gate) -> Option<R> {
        if self.admits(gate, Side::Right) {
            self.right
        } else {
            None
        }
    }

    // ---- filtering ----

    /// Empties the left slot unless its value satisfies `predicate`.
    pub fn filter_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::of(self.left.filter(predicate), self.right)
    }

    /// Empties the right slot unless its value satisfies `predicate`.
    pub fn filter_right<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        Self::of(self.left, self.right.filter(predicate))
    }

    /// Tests both values jointly.
    ///
    /// Only a pair with both values present is tested. When the test fails
    /// the whole pair collapses to [Empty], not just one of its sides. Pairs
    /// in any other state are returned unchanged.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T, &R) -> bool,
    {
        let keep = match self.as_ref().into_slots() {
            Slots::Both(l, r) => predicate(l, r),
            Slots::Left(_) | Slots::Right(_) | Slots::Neither => true,
        };

        if keep {
            self
        } else {
            debug!("joint filter rejected both values, collapsing pair to empty");
            Self::empty()
        }
    }

    // ---- mapping ----

    /// Replaces a pair holding both values with the pair built by `f`.
    ///
    /// Any other pair becomes [Empty].
    pub fn map<U, D, F>(self, f: F) -> OptionPair<U, D>
    where
        F: FnOnce(T, R) -> OptionPair<U, D>,
    {
        match self.into_slots() {
            Slots::Both(l, r) => f(l, r),
            Slots::Left(_) | Slots::Right(_) | Slots::Neither => OptionPair::empty(),
        }
    }

    /// Returns `replacement` if both slots are empty, else `self`.
    pub fn map_if_both_empty(self, replacement: Self) -> Self {
        match self.presence() {
            Presence::BothEmpty => replacement,
            Presence::BothPresent | Presence::OnlyLeft | Presence::OnlyRight => self,
        }
    }

    /// Maps the left value, if present, leaving the right slot untouched.
    pub fn map_left<U, F>(self, f: F) -> OptionPair<U, R>
    where
        F: FnOnce(T) -> U,
    {
        OptionPair::of(self.left.map(f), self.right)
    }

    /// Maps the right value, if present, leaving the left slot untouched.
    pub fn map_right<U, F>(self, f: F) -> OptionPair<T, U>
    where
        F: FnOnce(R) -> U,
    {
        OptionPair::of(self.left, self.right.map(f))
    }

    /// Maps the left value when it is the only value of the pair.
    ///
    /// Otherwise the left slot is emptied, even if it held a value, and the
    /// right slot is kept.
    pub fn map_if_only_left_present<U, F>(self, f: F) -> OptionPair<U, R>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_slots() {
            Slots::Left(l) => OptionPair::of(Some(f(l)), None),
            Slots::Both(_, r) | Slots::Right(r) => OptionPair::of(None, Some(r)),
            Slots::Neither => OptionPair::empty(),
        }
    }

    /// Maps the right value when it is the only value of the pair.
    ///
    /// Otherwise the right slot is emptied, even if it held a value, and the
    /// left slot is kept.
    pub fn map_if_only_right_present<U, F>(self, f: F) -> OptionPair<T, U>
    where
        F: FnOnce(R) -> U,
    {
        match self.into_slots() {
            Slots::Right(r) => OptionPair::of(None, Some(f(r))),
            Slots::Both(l, _) | Slots::Left(l) => OptionPair::of(Some(l), None),
            Slots::Neither => OptionPair::empty(),
        }
    }

    // ---- side effects ----

    /// Runs `action` and returns the pair untouched.
    pub fn run<A: FnOnce()>(self, action: A) -> Self {
        action();
        self
    }

    #[inline]
    fn run_if<A: FnOnce()>(self, condition: bool, action: A) -> Self {
        if condition {
            action();
        }
        self
    }

    /// Runs `action` if the left slot holds a value.
    pub fn run_if_left_present<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_left_present();
        self.run_if(condition, action)
    }

    /// Runs `action` if the left value is the only value.
    pub fn run_if_only_left_present<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_only_left_present();
        self.run_if(condition, action)
    }

    /// Runs `action` if the right slot holds a value.
    pub fn run_if_right_present<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_right_present();
        self.run_if(condition, action)
    }

    /// Runs `action` if the right value is the only value.
    pub fn run_if_only_right_present<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_only_right_present();
        self.run_if(condition, action)
    }

    /// Runs `action` if the left slot is empty.
    pub fn run_if_left_empty<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_left_empty();
        self.run_if(condition, action)
    }

    /// Runs `action` when the right value is the only value of the pair.
    pub fn run_if_only_left_empty<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_only_left_empty();
        self.run_if(condition, action)
    }

    /// Runs `action` if the right slot is empty.
    pub fn run_if_right_empty<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_right_empty();
        self.run_if(condition, action)
    }

    /// Runs `action` when the left value is the only value of the pair.
    pub fn run_if_only_right_empty<A: FnOnce()>(self, action: A) -> Self {
        let condition = self.is_only_right_empty();
        self.run_if(condition, action)
    }

    /// Exchanges the two slots.
    pub fn swap(self) -> OptionPair<R, T> {
        OptionPair::of(self.right, self.left)
    }
}

impl<T> OptionPair<T, T> {
    /// Folds a pair of same-typed values into one:
    /// - if both are `None`, returns `None`
    /// - if one and only one has a value, returns that value in a `Some`
    /// - if both have values, applies the combining operation `op` with the two contained values
    #[inline]
    pub fn merge<F>(self, op: F) -> Option<T>
    where
        F: FnOnce(T, T) -> T,
    {
        match self.into_slots() {
            Slots::Neither => None,
            Slots::Right(r) => Some(r),
            Slots::Left(l) => Some(l),
            Slots::Both(l, r) => Some(op(l, r)),
        }
    }
}

impl<T> IntoIterator for OptionPair<T, T> {
    type Item = Option<T>;
    type IntoIter = std::array::IntoIter<Option<T>, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.left, self.right].into_iter()
    }
}

impl<T, R> Default for OptionPair<T, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, R> From<Empty> for OptionPair<T, R> {
    fn from(_: Empty) -> Self {
        Self::empty()
    }
}

impl<T, R> PartialEq<Empty> for OptionPair<T, R> {
    fn eq(&self, _: &Empty) -> bool {
        self.is_both_empty()
    }
}

impl<T, R> From<(Option<T>, Option<R>)> for OptionPair<T, R> {
    fn from((left, right): (Option<T>, Option<R>)) -> Self {
        Self::of(left, right)
    }
}

impl<T, R> From<OptionPair<T, R>> for (Option<T>, Option<R>) {
    fn from(pair: OptionPair<T, R>) -> Self {
        pair.into_inner()
    }
}
