//! An eager, chainable container for filtering, mapping and folding an
//! ordered sequence.
//!
//! A `Stream` owns its elements outright. Borrowed input is cloned on the way
//! in and every accessor hands back an owned copy, so nothing outside the
//! stream can reach its storage. `filter` and `map` rewrite the stream in
//! place and return it again so calls can be chained:
//!
//! ```
//! use pipekit::Stream;
//!
//! let mut stream = Stream::new(&[1, 3, 5, 8, 10, 2, 3, 5]);
//! stream.filter(|a| a % 2 == 0).map(|a| a + 1);
//! assert_eq!(stream.to_vec(), vec![9, 11, 3]);
//! ```

mod error;

use num_traits::Zero;

pub use error::{Result, StreamError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stream<T> {
    contents: Vec<T>,
}

impl<T> Stream<T>
where
    T: PartialEq + Clone,
{
    /// Creates a stream holding a copy of `input`.
    pub fn new(input: &[T]) -> Self {
        Stream {
            contents: input.to_vec(),
        }
    }

    /// Returns a copy of the stream's contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.contents.clone()
    }

    /// Prunes the stream to the elements matching `predicate`.
    pub fn filter<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.contents.len();
        self.contents.retain(predicate);
        tracing::trace!(before, after = self.contents.len(), "filtered stream");
        self
    }

    /// Returns every element matching `predicate`, leaving the stream as is.
    pub fn find<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.contents
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn find_first<P>(&self, mut predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        match self.contents.iter().find(|item| predicate(item)) {
            Some(item) => Ok(item.clone()),
            None => {
                tracing::debug!(len = self.contents.len(), "no element matched");
                Err(StreamError::NotFound)
            }
        }
    }

    /// Like [`Stream::find_first`], but yields `T::default()` on a miss.
    pub fn find_first_or_default<P>(&self, predicate: P) -> T
    where
        P: FnMut(&T) -> bool,
        T: Default,
    {
        self.find_first(predicate).unwrap_or_default()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.contents.contains(value)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Replaces every element with `transform` applied to it. Positions are
    /// kept.
    pub fn map<F>(&mut self, transform: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        let contents = std::mem::take(&mut self.contents);
        self.contents = contents.into_iter().map(transform).collect();
        tracing::trace!(len = self.contents.len(), "mapped stream");
        self
    }

    /// Calls `action` with each element and its zero-based position, in
    /// order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, item) in self.contents.iter().enumerate() {
            action(index, item);
        }
    }

    /// Left fold starting from `T::default()`. An empty stream returns the
    /// default untouched.
    pub fn reduce<F>(&self, mut combine: F) -> T
    where
        F: FnMut(T, &T) -> T,
        T: Default,
    {
        self.contents
            .iter()
            .fold(T::default(), |acc, item| combine(acc, item))
    }

    pub fn sum(&self) -> T
    where
        T: Zero,
    {
        self.contents
            .iter()
            .fold(T::zero(), |acc, item| acc + item.clone())
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream {
            contents: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(contents: Vec<T>) -> Self {
        Stream { contents }
    }
}

impl<T> From<&[T]> for Stream<T>
where
    T: Clone,
{
    fn from(input: &[T]) -> Self {
        Stream {
            contents: input.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Stream {
            contents: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stream<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.contents.extend(iter);
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.into_iter()
    }
}
