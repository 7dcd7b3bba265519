use crate::{CodecError, CodecResult, Document, DocumentFormat, JsonFormat};
use chrono::{DateTime, Utc};
use escola_model::{Contact, Course, Grade, Skill, Student, StudentId};
use serde_json::{json, Value};
use tracing::warn;

/// Codec between [`Student`] and the store's document shape.
///
/// Wire format (field-exact, legacy keys):
/// - `_id`: canonical id string, omitted while unassigned
/// - `nome`: string
/// - `data_nascimento`: RFC 3339 date-time string
/// - `curso`: `{ "nome" }` (required on encode, tolerated absent on decode)
/// - `habilidades`: `[ { "nome", "nivel" } ]`, omitted when unrecorded
/// - `notas`: `[ number ]`, grade values flattened to raw numbers, omitted
///   when unrecorded
/// - `contato`: `{ "endereco", "coordinates": [lon, lat], "type" }`
///   (required on encode, tolerated absent on decode)
///
/// The codec is stateless apart from the injected [`DocumentFormat`] and is
/// safe to share across threads as long as no single `Student` is mutated
/// concurrently.
pub struct StudentCodec {
    format: Box<dyn DocumentFormat>,
}

impl StudentCodec {
    /// Creates a codec over the given document/byte-stream format.
    pub fn new(format: Box<dyn DocumentFormat>) -> Self {
        Self { format }
    }

    // ── Entity ⇄ document ────────────────────────────────────────

    /// Maps a student to its document representation.
    ///
    /// Fails with [`CodecError::MissingField`] when `course` or `contact`
    /// is unset; both are required for a persistable record. `skills` and
    /// `grades` keep their tri-state: an unrecorded list omits the field,
    /// a recorded empty list emits an empty sequence.
    pub fn encode(&self, student: &Student) -> CodecResult<Document> {
        let course = student
            .course
            .as_ref()
            .ok_or(CodecError::MissingField { field: "curso" })?;
        let contact = student
            .contact
            .as_ref()
            .ok_or(CodecError::MissingField { field: "contato" })?;

        let mut document = Document::new();
        if let Some(id) = &student.id {
            document.insert("_id".into(), Value::String(id.to_string()));
        }
        document.insert("nome".into(), Value::String(student.name.clone()));
        document.insert(
            "data_nascimento".into(),
            Value::String(student.birth_date.to_rfc3339()),
        );
        document.insert("curso".into(), json!({ "nome": course.name }));

        if let Some(skills) = &student.skills {
            let skills: Vec<Value> = skills
                .iter()
                .map(|skill| json!({ "nome": skill.name, "nivel": skill.level }))
                .collect();
            document.insert("habilidades".into(), Value::Array(skills));
        }
        if let Some(grades) = &student.grades {
            let values: Vec<Value> = grades.iter().map(|grade| json!(grade.value)).collect();
            document.insert("notas".into(), Value::Array(values));
        }

        document.insert(
            "contato".into(),
            json!({
                "endereco": contact.address,
                "coordinates": contact.coordinates,
                "type": contact.geometry,
            }),
        );
        Ok(document)
    }

    /// Maps a document back to a student.
    ///
    /// `nome` and `data_nascimento` are required; every nested section is
    /// optional and leaves the corresponding field unset when absent. All
    /// typed reads fail with a tagged [`CodecError`] on mismatch.
    pub fn decode(&self, document: &Document) -> CodecResult<Student> {
        let id: Option<StudentId> = match document.get("_id") {
            Some(value) => Some(expect_str(value, "_id")?.parse()?),
            None => None,
        };
        let name = expect_str(require(document, "nome", "nome")?, "nome")?.to_string();
        let raw_date = expect_str(
            require(document, "data_nascimento", "data_nascimento")?,
            "data_nascimento",
        )?;
        let birth_date = DateTime::parse_from_rfc3339(raw_date)?.with_timezone(&Utc);

        let mut student = Student::new(name, birth_date);
        student.id = id;

        if let Some(value) = document.get("curso") {
            student.course = Some(decode_course(value)?);
        }
        if let Some(value) = document.get("notas") {
            student.grades = decode_grades(value, &student.name)?;
        }
        if let Some(value) = document.get("habilidades") {
            student.skills = Some(decode_skills(value)?);
        }
        if let Some(value) = document.get("contato") {
            student.contact = Some(decode_contact(value)?);
        }
        Ok(student)
    }

    // ── Byte-stream entry points ─────────────────────────────────

    /// Encodes a student and renders the document through the format
    /// delegate.
    pub fn encode_to_bytes(&self, student: &Student) -> CodecResult<Vec<u8>> {
        let document = self.encode(student)?;
        self.format.to_bytes(&document)
    }

    /// Reads a document through the format delegate and decodes it.
    pub fn decode_from_bytes(&self, bytes: &[u8]) -> CodecResult<Student> {
        let document = self.format.from_bytes(bytes)?;
        self.decode(&document)
    }

    // ── Identity hooks ───────────────────────────────────────────

    /// True iff the student already carries an identity.
    pub fn has_id(&self, student: &Student) -> bool {
        student.id.is_some()
    }

    /// Assigns a fresh id in place when absent and returns the id.
    ///
    /// Idempotent: a student that already has an id is returned unchanged.
    pub fn generate_id_if_absent(&self, student: &mut Student) -> StudentId {
        match student.id {
            Some(id) => id,
            None => {
                let id = StudentId::new();
                student.id = Some(id);
                id
            }
        }
    }

    /// Returns the identity as the document-native value (the canonical id
    /// string), for use as a store filter key.
    ///
    /// Fails with [`CodecError::MissingId`] when no identity was assigned.
    pub fn extract_id(&self, student: &Student) -> CodecResult<Value> {
        match student.id {
            Some(id) => Ok(Value::String(id.to_string())),
            None => Err(CodecError::MissingId),
        }
    }
}

impl Default for StudentCodec {
    fn default() -> Self {
        Self::new(Box::new(JsonFormat))
    }
}

// ── Typed field readers ──────────────────────────────────────────
// `key` is the lookup key inside its document, `field` the dotted path
// reported in error tags.

fn require<'a>(document: &'a Document, key: &str, field: &'static str) -> CodecResult<&'a Value> {
    document.get(key).ok_or(CodecError::MissingField { field })
}

fn expect_str<'a>(value: &'a Value, field: &'static str) -> CodecResult<&'a str> {
    value.as_str().ok_or(CodecError::TypeMismatch {
        field,
        expected: "a string",
    })
}

fn expect_object<'a>(value: &'a Value, field: &'static str) -> CodecResult<&'a Document> {
    value.as_object().ok_or(CodecError::TypeMismatch {
        field,
        expected: "a nested document",
    })
}

fn expect_array<'a>(value: &'a Value, field: &'static str) -> CodecResult<&'a Vec<Value>> {
    match value {
        Value::Array(values) => Ok(values),
        _ => Err(CodecError::TypeMismatch {
            field,
            expected: "a sequence",
        }),
    }
}

fn expect_f64(value: &Value, field: &'static str) -> CodecResult<f64> {
    value.as_f64().ok_or(CodecError::TypeMismatch {
        field,
        expected: "a number",
    })
}

// ── Nested sections ──────────────────────────────────────────────

fn decode_course(value: &Value) -> CodecResult<Course> {
    let curso = expect_object(value, "curso")?;
    let name = expect_str(require(curso, "nome", "curso.nome")?, "curso.nome")?;
    Ok(Course::new(name))
}

/// An empty `notas` sequence decodes to unrecorded grades rather than an
/// empty list, matching every document round-tripped by the legacy reader.
fn decode_grades(value: &Value, student_name: &str) -> CodecResult<Option<Vec<Grade>>> {
    let values = expect_array(value, "notas")?;
    if values.is_empty() {
        warn!(
            "student {:?}: empty notas sequence, grades left unrecorded",
            student_name
        );
        return Ok(None);
    }
    let mut grades = Vec::with_capacity(values.len());
    for value in values {
        grades.push(Grade::new(expect_f64(value, "notas")?));
    }
    Ok(Some(grades))
}

fn decode_skills(value: &Value) -> CodecResult<Vec<Skill>> {
    let entries = expect_array(value, "habilidades")?;
    let mut skills = Vec::with_capacity(entries.len());
    for entry in entries {
        let skill = expect_object(entry, "habilidades")?;
        let name = expect_str(
            require(skill, "nome", "habilidades.nome")?,
            "habilidades.nome",
        )?;
        let level = expect_str(
            require(skill, "nivel", "habilidades.nivel")?,
            "habilidades.nivel",
        )?;
        skills.push(Skill::new(name, level));
    }
    Ok(skills)
}

/// The address lives under `endereco`; the geometry discriminator is fixed
/// and not read back.
fn decode_contact(value: &Value) -> CodecResult<Contact> {
    let contato = expect_object(value, "contato")?;
    let address = expect_str(
        require(contato, "endereco", "contato.endereco")?,
        "contato.endereco",
    )?;
    let raw = expect_array(
        require(contato, "coordinates", "contato.coordinates")?,
        "contato.coordinates",
    )?;
    if raw.len() != 2 {
        return Err(CodecError::TypeMismatch {
            field: "contato.coordinates",
            expected: "a sequence of two numbers",
        });
    }
    let longitude = expect_f64(&raw[0], "contato.coordinates")?;
    let latitude = expect_f64(&raw[1], "contato.coordinates")?;
    Ok(Contact::new(address, [longitude, latitude]))
}
