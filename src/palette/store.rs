use crate::palette::ColorRecord;

/// Recoverable palette store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No record with the given id.
    NotFound(String),
    /// Insertion index past the end of the store.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no color with id {id:?}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "insert index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Ordered sequence of color records. Insertion order is display order.
///
/// Mutated only through `insert_at` and `rename`; callers must treat
/// every `Err` as "abort the mutation", never as ignorable.
#[derive(Debug, Default)]
pub struct PaletteStore {
    records: Vec<ColorRecord>,
}

impl PaletteStore {
    /// Populate a store from a list of hex strings.
    ///
    /// Entries that fail normalization are skipped and returned so the
    /// caller can report them; a bad seed entry is never fatal.
    pub fn seed<S: AsRef<str>>(hex_list: &[S]) -> (Self, Vec<String>) {
        let mut records = Vec::with_capacity(hex_list.len());
        let mut skipped = Vec::new();
        for raw in hex_list {
            match ColorRecord::create(raw.as_ref()) {
                Ok(record) => records.push(record),
                Err(_) => skipped.push(raw.as_ref().to_string()),
            }
        }
        (Self { records }, skipped)
    }

    /// Insert `record` at `index`, shifting later records right.
    /// `index == len()` appends.
    pub fn insert_at(&mut self, index: usize, record: ColorRecord) -> Result<(), PaletteError> {
        if index > self.records.len() {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.records.insert(index, record);
        Ok(())
    }

    /// Linear scan for the record with the given id.
    pub fn find_index_by_id(&self, id: &str) -> Result<usize, PaletteError> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| PaletteError::NotFound(id.to_string()))
    }

    /// Store the trimmed `new_name` on the record with the given id.
    ///
    /// A cleared name is stored as the empty string, not reset to
    /// `None`, so the display-placeholder state round-trips.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<(), PaletteError> {
        let index = self.find_index_by_id(id)?;
        self.records[index].name = Some(new_name.trim().to_string());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ColorRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
