//! Admin form validation.
//!
//! Validators never fail: each returns a [`ValidationResult`] carrying the
//! human-readable messages for the field, and the aggregate check simply
//! concatenates them in a fixed field order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::model::{Arcana, CardNumber, RawMeaning, RawRecord, RawSymbols, parse_leading_int};

//
// ─── LIMITS / PATTERNS ─────────────────────────────────────────────────────────
//

pub const MAX_KEYWORDS: usize = 10;
pub const MAX_SYMBOLS: usize = 15;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_URL_LENGTH: usize = 2000;
pub const MIN_CARD_NUMBER: i64 = 0;
pub const MAX_CARD_NUMBER: i64 = 22;
/// Cards in a full tarot deck.
pub const DECK_SIZE: usize = 78;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("Invalid regex"));
static CARD_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s0-9]+$").expect("Invalid regex"));

/// Form field names understood by [`validate_submission`].
pub mod fields {
    pub const NOMBRE: &str = "nombre";
    pub const IMAGEM: &str = "imagem";
    pub const ARCANO: &str = "arcano";
    pub const NUMERO: &str = "numero";
    pub const PALO: &str = "palo";
    pub const VALOR: &str = "valor";
    pub const SIGNIFICADO_DIRECTO: &str = "significado_directo";
    pub const SIGNIFICADO_INVERTIDO: &str = "significado_invertido";
    pub const SIMBOLOS_PRINCIPALES: &str = "simbolos_principales";
    pub const KEYWORDS: &str = "keywords";
}

//
// ─── RESULT TYPE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Appends `other`'s messages; validity is recomputed from the list.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join("; "))
    }
}

//
// ─── FIELD VALIDATORS ──────────────────────────────────────────────────────────
//

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[must_use]
pub fn validate_name(name: Option<&str>) -> ValidationResult {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return ValidationResult::from_errors(vec!["El nombre es requerido".into()]);
    };

    let trimmed = name.trim();
    let mut errors = Vec::new();
    if char_len(trimmed) < MIN_NAME_LENGTH {
        errors.push(format!(
            "El nombre debe tener al menos {MIN_NAME_LENGTH} caracteres"
        ));
    }
    if char_len(trimmed) > MAX_NAME_LENGTH {
        errors.push(format!(
            "El nombre no puede exceder {MAX_NAME_LENGTH} caracteres"
        ));
    }
    if !CARD_NAME_PATTERN.is_match(trimmed) {
        errors.push("El nombre contiene caracteres no válidos".into());
    }
    ValidationResult::from_errors(errors)
}

#[must_use]
pub fn validate_image_url(url: Option<&str>, required: bool) -> ValidationResult {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return if required {
            ValidationResult::from_errors(vec!["La URL de imagen es requerida".into()])
        } else {
            ValidationResult::valid()
        };
    };

    let trimmed = url.trim();
    let mut errors = Vec::new();
    if char_len(trimmed) > MAX_URL_LENGTH {
        errors.push(format!("La URL no puede exceder {MAX_URL_LENGTH} caracteres"));
    }
    if !URL_PATTERN.is_match(trimmed) {
        errors.push("La URL debe comenzar con http:// o https://".into());
    }
    ValidationResult::from_errors(errors)
}

/// A list-valued form field: either the raw comma-separated text or
/// already-split items.
#[derive(Debug, Clone, Copy)]
pub enum ListField<'a> {
    Delimited(&'a str),
    Items(&'a [String]),
}

impl ListField<'_> {
    fn normalized(self) -> Vec<String> {
        match self {
            ListField::Delimited(raw) => split_delimited(raw),
            ListField::Items(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

fn validate_list(field: ListField<'_>, max: usize, message: String) -> ValidationResult {
    if field.normalized().len() > max {
        return ValidationResult::from_errors(vec![message]);
    }
    ValidationResult::valid()
}

#[must_use]
pub fn validate_keywords(field: ListField<'_>) -> ValidationResult {
    validate_list(
        field,
        MAX_KEYWORDS,
        format!("Máximo {MAX_KEYWORDS} keywords permitidas"),
    )
}

#[must_use]
pub fn validate_symbols(field: ListField<'_>) -> ValidationResult {
    validate_list(
        field,
        MAX_SYMBOLS,
        format!("Máximo {MAX_SYMBOLS} símbolos permitidos"),
    )
}

/// Major-arcana number. Absent or blank is accepted.
#[must_use]
pub fn validate_number(numero: Option<&str>) -> ValidationResult {
    let Some(raw) = numero.filter(|n| !n.trim().is_empty()) else {
        return ValidationResult::valid();
    };

    match parse_leading_int(raw) {
        None => ValidationResult::from_errors(vec![
            "El número debe ser un valor numérico válido".into(),
        ]),
        Some(n) if !(MIN_CARD_NUMBER..=MAX_CARD_NUMBER).contains(&n) => {
            ValidationResult::from_errors(vec![format!(
                "El número debe estar entre {MIN_CARD_NUMBER} y {MAX_CARD_NUMBER}"
            )])
        }
        Some(_) => ValidationResult::valid(),
    }
}

/// Number as required by a major-arcana form: absent or blank is rejected
/// as not numeric.
fn validate_required_number(numero: Option<&str>) -> ValidationResult {
    match numero {
        Some(raw) if !raw.trim().is_empty() => validate_number(Some(raw)),
        _ => ValidationResult::from_errors(vec![
            "El número debe ser un valor numérico válido".into(),
        ]),
    }
}

#[must_use]
pub fn validate_description(text: Option<&str>, required: bool) -> ValidationResult {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return if required {
            ValidationResult::from_errors(vec!["La descripción es requerida".into()])
        } else {
            ValidationResult::valid()
        };
    };

    let trimmed = text.trim();
    let mut errors = Vec::new();
    if required && trimmed.is_empty() {
        errors.push("La descripción no puede estar vacía".into());
    }
    if char_len(trimmed) > MAX_DESCRIPTION_LENGTH {
        errors.push(format!(
            "La descripción no puede exceder {MAX_DESCRIPTION_LENGTH} caracteres"
        ));
    }
    ValidationResult::from_errors(errors)
}

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

/// Flat field-name to value map, as posted by the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(BTreeMap<String, String>);

impl Submission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_owned(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn arcana(&self) -> Arcana {
        Arcana::from_discriminant(self.get(fields::ARCANO).map(str::trim))
    }

    /// Converts an accepted submission into the document shape written
    /// upstream. Run [`validate_submission`] first.
    #[must_use]
    pub fn to_record(&self) -> RawRecord {
        let text = |field: &str| {
            self.get(field)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        let arcana = self.arcana();

        let numero = match arcana {
            Arcana::Major => text(fields::NUMERO).map(|raw| {
                parse_leading_int(&raw).map_or(CardNumber::Text(raw), CardNumber::Number)
            }),
            Arcana::Minor => None,
        };
        let (palo, valor) = match arcana {
            Arcana::Minor => (text(fields::PALO), text(fields::VALOR)),
            Arcana::Major => (None, None),
        };

        RawRecord {
            nombre: text(fields::NOMBRE),
            arcano: Some(arcana.as_str().to_owned()),
            imagem: text(fields::IMAGEM),
            numero,
            palo,
            valor,
            significado: Some(RawMeaning {
                directo: text(fields::SIGNIFICADO_DIRECTO),
                invertido: text(fields::SIGNIFICADO_INVERTIDO),
            }),
            simbolos: Some(RawSymbols {
                principales: Some(parse_delimited_field(
                    self.get(fields::SIMBOLOS_PRINCIPALES),
                    MAX_SYMBOLS,
                )),
                interpretacion: None,
            }),
            keywords: Some(parse_delimited_field(
                self.get(fields::KEYWORDS),
                MAX_KEYWORDS,
            )),
            ..RawRecord::default()
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Validates a whole admin form.
///
/// Order of messages: name, image URL, number (major arcana only), upright
/// meaning, reversed meaning, symbols, keywords.
///
/// The arcana is read with [`Submission::arcana`], the same rule
/// [`Submission::to_record`] uses, so every form that would be stored as a
/// major card has its number checked. On that path the number is required.
#[must_use]
pub fn validate_submission(submission: &Submission) -> ValidationResult {
    let mut result = validate_name(submission.get(fields::NOMBRE));
    result.merge(validate_image_url(submission.get(fields::IMAGEM), false));

    if submission.arcana() == Arcana::Major {
        result.merge(validate_required_number(submission.get(fields::NUMERO)));
    }

    result.merge(validate_description(
        submission.get(fields::SIGNIFICADO_DIRECTO),
        true,
    ));
    result.merge(validate_description(
        submission.get(fields::SIGNIFICADO_INVERTIDO),
        true,
    ));
    result.merge(validate_symbols(ListField::Delimited(
        submission.get(fields::SIMBOLOS_PRINCIPALES).unwrap_or_default(),
    )));
    result.merge(validate_keywords(ListField::Delimited(
        submission.get(fields::KEYWORDS).unwrap_or_default(),
    )));
    result
}

//
// ─── TEXT HELPERS ──────────────────────────────────────────────────────────────
//

/// Escapes `< > " ' /` as HTML entities. `&` is left alone, so this is not
/// a general-purpose HTML escaper.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }
    out
}

/// Splits on commas, trims each item and drops the empty ones.
#[must_use]
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// [`split_delimited`] capped at `max_items` entries.
#[must_use]
pub fn parse_delimited_field(value: Option<&str>, max_items: usize) -> Vec<String> {
    let mut items = value.map(split_delimited).unwrap_or_default();
    items.truncate(max_items);
    items
}

//
// ─── DRAW COUNT ────────────────────────────────────────────────────────────────
//

/// Outcome of checking a requested draw size. `value` is always usable:
/// the parsed count when valid, the nearest allowed bound otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCountCheck {
    pub is_valid: bool,
    pub message: String,
    pub value: usize,
}

impl DrawCountCheck {
    fn rejected(message: impl Into<String>, value: usize) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            value,
        }
    }
}

#[must_use]
pub fn validate_draw_count(raw: &str, available: usize) -> DrawCountCheck {
    let Some(parsed) = parse_leading_int(raw) else {
        return DrawCountCheck::rejected("Debe ser un número válido", 1);
    };
    let Ok(count) = usize::try_from(parsed) else {
        return DrawCountCheck::rejected("Mínimo 1 carta", 1);
    };
    if count < 1 {
        return DrawCountCheck::rejected("Mínimo 1 carta", 1);
    }
    if count > available {
        return DrawCountCheck::rejected(
            format!("Máximo {available} cartas disponibles"),
            available,
        );
    }
    if count > DECK_SIZE {
        return DrawCountCheck::rejected(format!("Máximo {DECK_SIZE} cartas"), DECK_SIZE);
    }
    DrawCountCheck {
        is_valid: true,
        message: String::new(),
        value: count,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
