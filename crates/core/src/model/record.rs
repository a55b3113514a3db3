//! Loosely-typed card document as delivered by the upstream store.
//!
//! Every field is optional and decoding never fails on a type mismatch:
//! a value of the wrong shape is coerced when that is unambiguous and
//! dropped otherwise.

use serde::{Deserialize, Serialize};

use crate::model::{arcana::Arcana, number::CardNumber};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMeaning {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub directo: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub invertido: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSymbols {
    #[serde(deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub principales: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub interpretacion: Option<String>,
}

/// Raw card document. Historical spellings are kept as separate fields so
/// a document carrying several of them still decodes; accessors pick the
/// first non-empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub arcano: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub imagem: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub numero: Option<CardNumber>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub palo: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub suit: Option<String>,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub valor: Option<String>,
    #[serde(deserialize_with = "lenient::nested", skip_serializing_if = "Option::is_none")]
    pub significado: Option<RawMeaning>,
    #[serde(deserialize_with = "lenient::nested", skip_serializing_if = "Option::is_none")]
    pub simbolos: Option<RawSymbols>,
    #[serde(deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl RawRecord {
    /// Decodes a JSON document. Non-object values yield an empty record.
    #[must_use]
    pub fn from_json_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// First non-empty of `nombre`, `name`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        first_present(&[&self.nombre, &self.name])
    }

    /// First non-empty of `imagem`, `imagen`, `image_url`.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        first_present(&[&self.imagem, &self.imagen, &self.image_url])
    }

    /// First non-empty of `palo`, `suit`.
    #[must_use]
    pub fn suit_name(&self) -> Option<&str> {
        first_present(&[&self.palo, &self.suit])
    }

    #[must_use]
    pub fn rank(&self) -> Option<&str> {
        first_present(&[&self.valor])
    }

    #[must_use]
    pub fn arcana(&self) -> Arcana {
        Arcana::from_discriminant(self.arcano.as_deref())
    }
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::model::number::CardNumber;
    use crate::validation::split_delimited;

    pub(super) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub(super) fn number<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<CardNumber>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => Some(
                n.as_i64()
                    .map_or_else(|| CardNumber::Text(n.to_string()), CardNumber::Number),
            ),
            Some(Value::String(s)) => Some(CardNumber::Text(s)),
            _ => None,
        })
    }

    /// Arrays keep their string (and numeric) items; a plain string is
    /// read as a comma-separated list.
    pub(super) fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Some(Value::String(s)) => Some(split_delimited(&s)),
            _ => None,
        })
    }

    pub(super) fn nested<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
            _ => None,
        })
    }
}
