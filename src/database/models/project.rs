use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A portfolio project as it travels over the wire.
///
/// Optional text fields that hold no value (`None` or empty) are omitted
/// from serialized output entirely, as is an empty `tag` list. On input a
/// missing key, an explicit `null` and `""` all mean "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "is_unset")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "is_unset")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "tag_list", skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "is_unset")]
    pub git_url: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "is_unset")]
    pub preview_url: Option<String>,
}

/// Writable fields accepted by create. Any `id` in the payload is ignored;
/// the store assigns it. Only a JSON object decodes; arrays are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tag: Vec<String>,
    pub git_url: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewProjectFields {
    title: String,
    #[serde(default, deserialize_with = "optional_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "tag_list")]
    tag: Vec<String>,
    #[serde(default, deserialize_with = "optional_text")]
    git_url: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    preview_url: Option<String>,
}

impl TryFrom<Map<String, Value>> for NewProject {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: NewProjectFields = serde_json::from_value(Value::Object(object))?;
        Ok(NewProject {
            title: fields.title,
            description: fields.description,
            image: fields.image,
            tag: fields.tag,
            git_url: fields.git_url,
            preview_url: fields.preview_url,
        })
    }
}

impl NewProject {
    /// Attach the store-assigned id
    pub fn with_id(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            tag: self.tag,
            git_url: self.git_url,
            preview_url: self.preview_url,
        }
    }
}

/// Collapse empty text to "not set"
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_text(Option::<String>::deserialize(deserializer)?))
}

fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
