use std::collections::hash_map::{self, HashMap};
use std::fmt;

/// A map of parameter names to their values.
///
/// Used for the defaults of a route, for the values extracted from a uri and
/// as input for url generation.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Params {
	inner: HashMap<String, String>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn exists(&self, key: impl AsRef<str>) -> bool {
		self.inner.contains_key(key.as_ref())
	}

	pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
		self.inner.get(key.as_ref()).map(String::as_str)
	}

	/// Inserts a value, returning the previous one if the key existed.
	pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
	where
		K: Into<String>,
		V: ToString,
	{
		self.inner.insert(key.into(), value.to_string())
	}

	pub fn remove(&mut self, key: impl AsRef<str>) -> Option<String> {
		self.inner.remove(key.as_ref())
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn iter(&self) -> Iter<'_> {
		Iter {
			inner: self.inner.iter(),
		}
	}

	/// Returns a new map containing `self` overwritten by `other`.
	///
	/// On a key collision the value from `other` wins.
	pub fn merge(&self, other: &Params) -> Params {
		let mut merged = self.clone();
		merged.extend(other.iter());
		merged
	}
}

impl fmt::Debug for Params {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// sorted so that logs are stable
		let mut entries: Vec<_> = self.inner.iter().collect();
		entries.sort();
		f.debug_map().entries(entries).finish()
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();
		params.extend(iter);
		params
	}
}

impl<K, V> Extend<(K, V)> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn from(list: [(K, V); N]) -> Self {
		list.into_iter().collect()
	}
}

impl<'a> IntoIterator for &'a Params {
	type Item = (&'a str, &'a str);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Iter<'a> {
		self.iter()
	}
}

/// An iterator over the entries of `Params`, in no particular order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
	inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
