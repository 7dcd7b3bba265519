use crate::{StorageError, StorageResult};
use escola_codec::StudentCodec;
use escola_model::{Student, StudentId};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// Repository for whole-document student persistence.
///
/// Saves are upserts keyed by the student's identity: the codec assigns a
/// fresh id on first save, subsequent saves of the same student replace
/// the stored document. Documents are held as the byte form produced by
/// the codec's format delegate; decoding happens on every read.
pub struct StudentRepository {
    codec: StudentCodec,
    documents: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl StudentRepository {
    /// Creates an empty repository over the given codec.
    pub fn new(codec: StudentCodec) -> Self {
        Self {
            codec,
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Saves a student, assigning an identity first when absent.
    ///
    /// Returns the identity the document was stored under. Codec
    /// validation failures (unset course or contact) propagate as save
    /// failures and leave the store untouched.
    pub fn save(&self, student: &mut Student) -> StorageResult<StudentId> {
        let id = self.codec.generate_id_if_absent(student);
        let bytes = self.codec.encode_to_bytes(student)?;

        let mut documents = self.documents.write().map_err(|_| StorageError::LockPoisoned)?;
        let replaced = documents.insert(id.to_string(), bytes).is_some();
        debug!("saved student {} (replaced: {})", id, replaced);
        Ok(id)
    }

    /// Looks a student up by identity.
    pub fn find_by_id(&self, id: &StudentId) -> StorageResult<Option<Student>> {
        let documents = self.documents.read().map_err(|_| StorageError::LockPoisoned)?;
        match documents.get(&id.to_string()) {
            Some(bytes) => Ok(Some(self.codec.decode_from_bytes(bytes)?)),
            None => Ok(None),
        }
    }

    /// Decodes every stored document, in id order.
    pub fn find_all(&self) -> StorageResult<Vec<Student>> {
        let documents = self.documents.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut students = Vec::with_capacity(documents.len());
        for bytes in documents.values() {
            students.push(self.codec.decode_from_bytes(bytes)?);
        }
        Ok(students)
    }

    /// Case-insensitive substring search on the student name.
    pub fn search_by_name(&self, query: &str) -> StorageResult<Vec<Student>> {
        let needle = query.to_lowercase();
        let matches: Vec<Student> = self
            .find_all()?
            .into_iter()
            .filter(|student| student.name.to_lowercase().contains(&needle))
            .collect();
        debug!("name search {:?} matched {} students", query, matches.len());
        Ok(matches)
    }
}

impl Default for StudentRepository {
    fn default() -> Self {
        Self::new(StudentCodec::default())
    }
}
