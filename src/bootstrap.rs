//! The contributor list and page settings, embedded in the HTML head by
//! the server and read back during hydration.

use serde::{Deserialize, Serialize};

use crate::contributor::{validate_contributors, Contributor, DataError};
use crate::page::PageSettings;

/// Id of the `<script type="application/json">` element carrying the payload.
pub const BOOTSTRAP_ELEMENT_ID: &str = "contributors-data";

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("element #contributors-data not found")]
    Missing,

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid contributor data: {0}")]
    Data(#[from] DataError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bootstrap {
    pub contributors: Vec<Contributor>,
    #[serde(default)]
    pub settings: PageSettings,
}

impl Bootstrap {
    /// Serialise for inlining into a `<script>` element.
    ///
    /// `<`, `>` and `&` only occur inside JSON strings, so they are written as
    /// `\u` escapes. No contributor name can then close the element or open a
    /// comment that would swallow the real `</script>`.
    ///
    /// # Errors
    ///
    /// Propagates serialisation failures from `serde_json`.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }

    /// Parse and validate a payload.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or duplicate contributor ids.
    pub fn from_json(json: &str) -> Result<Self, BootstrapError> {
        let bootstrap: Self = serde_json::from_str(json)?;
        validate_contributors(&bootstrap.contributors)?;
        Ok(bootstrap)
    }

    /// Read the payload the server rendered into the page.
    ///
    /// # Errors
    ///
    /// Fails when the element is absent or its content does not parse.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, BootstrapError> {
        let json = document
            .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .ok_or(BootstrapError::Missing)?;

        Self::from_json(&json)
    }
}
