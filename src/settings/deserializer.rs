use serde::Deserialize;

use crate::utils::to_bool;

/// Accept either a TOML boolean or a string such as `"yes"` / `"off"`
pub fn deserialize_loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseBool {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    Ok(match LooseBool::deserialize(deserializer)? {
        LooseBool::Bool(b) => b,
        LooseBool::Int(i) => i != 0,
        LooseBool::Str(s) => to_bool(&s),
    })
}
