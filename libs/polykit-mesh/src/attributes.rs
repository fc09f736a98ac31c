//! # Attribute Data
//!
//! Named tuple arrays attached to mesh points or cells.
//!
//! Filters carry attributes through to generated geometry with the
//! copy-allocate/copy-data pattern: the output set is created empty with
//! the input's structure ([`AttributeSet::empty_like`]), then one tuple is
//! appended per generated point or cell ([`AttributeSet::copy_tuple`]).

/// A named array of f64 tuples, one tuple per point or cell.
///
/// # Example
///
/// ```rust
/// use polykit_mesh::AttributeArray;
///
/// let mut temperature = AttributeArray::new("temperature", 1);
/// temperature.push_tuple(&[291.5]);
/// temperature.push_tuple(&[293.0]);
/// assert_eq!(temperature.len(), 2);
/// assert_eq!(temperature.tuple(1), &[293.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArray {
    name: String,
    components: usize,
    values: Vec<f64>,
}

impl AttributeArray {
    /// Creates an empty array with the given tuple width.
    pub fn new(name: impl Into<String>, components: usize) -> Self {
        Self {
            name: name.into(),
            components,
            values: Vec::new(),
        }
    }

    /// Creates an array from flat values (`len` must be a multiple of
    /// `components`).
    pub fn from_values(name: impl Into<String>, components: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len() % components, 0);
        Self {
            name: name.into(),
            components,
            values,
        }
    }

    /// Returns the array name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of components per tuple.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the number of tuples.
    pub fn len(&self) -> usize {
        self.values.len() / self.components
    }

    /// Returns true if the array holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends one tuple.
    pub fn push_tuple(&mut self, tuple: &[f64]) {
        debug_assert_eq!(tuple.len(), self.components);
        self.values.extend_from_slice(tuple);
    }

    /// Returns the tuple at the given index.
    pub fn tuple(&self, index: usize) -> &[f64] {
        let start = index * self.components;
        &self.values[start..start + self.components]
    }
}

/// A collection of attribute arrays sharing one tuple count.
///
/// Mesh point data and cell data are each one `AttributeSet`; every array
/// in a set is indexed by the same point or global cell id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    arrays: Vec<AttributeArray>,
}

impl AttributeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the set holds no arrays.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Returns the number of arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Adds an array to the set.
    pub fn add_array(&mut self, array: AttributeArray) {
        self.arrays.push(array);
    }

    /// Returns the array with the given name, if present.
    pub fn array(&self, name: &str) -> Option<&AttributeArray> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    /// Returns all arrays.
    pub fn arrays(&self) -> &[AttributeArray] {
        &self.arrays
    }

    /// Creates a set with the same arrays (names and tuple widths) but no
    /// tuples; the copy-allocate half of attribute propagation.
    pub fn empty_like(&self) -> Self {
        Self {
            arrays: self
                .arrays
                .iter()
                .map(|a| AttributeArray::new(a.name(), a.components()))
                .collect(),
        }
    }

    /// Appends the tuple at `index` of every source array to the matching
    /// array of this set. The receiver must have been created with
    /// [`empty_like`](Self::empty_like) on the source.
    pub fn copy_tuple(&mut self, source: &AttributeSet, index: usize) {
        debug_assert_eq!(self.arrays.len(), source.arrays.len());
        for (dst, src) in self.arrays.iter_mut().zip(&source.arrays) {
            dst.push_tuple(src.tuple(index));
        }
    }
}
