//! Packed string column with auto-growing storage.

/// A column of byte strings stored back to back.
///
/// Row `i` occupies `chars[offsets[i - 1]..offsets[i]]` (with an implicit
/// zero start for the first row). There are no terminators and no null
/// bookkeeping; the offsets vector alone delimits rows.
///
/// # Example
///
/// ```
/// use stringfn_columns::StrColumn;
///
/// let mut col = StrColumn::new();
/// col.push_str("Hello");
/// col.push_str("World");
/// assert_eq!(col.len(), 2);
/// assert_eq!(col.value(1), b"World");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrColumn {
    chars: Vec<u8>,
    offsets: Vec<usize>,
}

impl StrColumn {
    /// Creates an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty column with `bytes` of character capacity reserved.
    pub fn with_byte_capacity(bytes: usize) -> Self {
        StrColumn {
            chars: Vec::with_capacity(bytes),
            offsets: Vec::new(),
        }
    }

    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Total number of character bytes across all rows.
    pub fn char_bytes(&self) -> usize {
        self.chars.len()
    }

    /// Byte range of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn value(&self, i: usize) -> &[u8] {
        let start = if i == 0 { 0 } else { self.offsets[i - 1] };
        &self.chars[start..self.offsets[i]]
    }

    /// Row `i` as `&str`, if it is valid UTF-8.
    pub fn str_value(&self, i: usize) -> Option<&str> {
        std::str::from_utf8(self.value(i)).ok()
    }

    /// Appends one row.
    pub fn push(&mut self, value: &[u8]) {
        self.chars.extend_from_slice(value);
        self.offsets.push(self.chars.len());
    }

    /// Appends one row from a string slice.
    pub fn push_str(&mut self, value: &str) {
        self.push(value.as_bytes());
    }

    /// Appends a segment of the row currently being built.
    ///
    /// Segments accumulate in the character buffer until [`commit_row`]
    /// seals them into a row.
    ///
    /// [`commit_row`]: StrColumn::commit_row
    pub fn append_segment(&mut self, segment: &[u8]) {
        self.chars.extend_from_slice(segment);
    }

    /// Seals all uncommitted segment bytes into one row.
    pub fn commit_row(&mut self) {
        self.offsets.push(self.chars.len());
    }

    /// Reserves space for at least `bytes` additional character bytes.
    pub fn reserve_bytes(&mut self, bytes: usize) {
        self.chars.reserve(bytes);
    }

    /// Reserves space for at least `rows` additional rows.
    pub fn reserve_rows(&mut self, rows: usize) {
        self.offsets.reserve(rows);
    }

    /// Iterates over all rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.len()).map(move |i| self.value(i))
    }
}

impl<'a> FromIterator<&'a [u8]> for StrColumn {
    fn from_iter<T: IntoIterator<Item = &'a [u8]>>(iter: T) -> Self {
        let mut col = StrColumn::new();
        for value in iter {
            col.push(value);
        }
        col
    }
}

impl<'a> FromIterator<&'a str> for StrColumn {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut col = StrColumn::new();
        for value in iter {
            col.push_str(value);
        }
        col
    }
}
