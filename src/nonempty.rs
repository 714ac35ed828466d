//! Ordered sequence holding at least one element
//!
//! `NonEmptyVec<T>` is the error container of an `Invalid` validation. A
//! failed validation always carries at least one error, and keeping that fact
//! in the type means nothing downstream has to handle an empty error list.
//!
//! ```
//! use validated_config::NonEmptyVec;
//!
//! let errors = NonEmptyVec::new("'id' is missing", vec!["coucou is not an https URL"]);
//! assert_eq!(errors.head(), &"'id' is missing");
//! assert_eq!(errors.len(), 2);
//! ```

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// The first element is stored apart from the rest, so `head()` and `last()`
/// never return an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a sequence from its first element and the remaining ones.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a sequence holding exactly one element.
    ///
    /// ```
    /// use validated_config::NonEmptyVec;
    ///
    /// let one = NonEmptyVec::singleton(7);
    /// assert_eq!(one.len(), 1);
    /// assert_eq!(one.head(), one.last());
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to build a sequence from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// ```
    /// use validated_config::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// First element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Last element; the head when there is only one.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Transform every element, keeping order and length.
    ///
    /// ```
    /// use validated_config::NonEmptyVec;
    ///
    /// let lengths = NonEmptyVec::new("ab", vec!["cde"]).map(str::len);
    /// assert_eq!(lengths.into_vec(), vec![2, 3]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(f).collect())
    }

    /// Convert into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

// Concatenation, left operand first.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            i => &self.tail[i - 1],
        }
    }
}

// Serialized as a plain sequence.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// An empty sequence is rejected rather than turned into an invalid value.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmptyVec<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        NonEmptyVec::from_vec(vec)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}
