//! Configuration shared by every builder of a [`FormWow`](crate::FormWow).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::HelperSpec;

/// Name of the built-in row decorator.
pub const FORM_WOW_ROW: &str = "form_wow_row";

/// How `FormBuilder::row` treats the fields inside its block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// Fields render raw inside one shared row; their errors are summarised
    /// on that row.
    #[default]
    Wrap,
    /// Fields keep their own rows without inline errors; their errors are
    /// summarised on the parent row.
    Summary,
}

/// Defaults consulted when a call site omits the corresponding option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormWowConfig {
    /// Text placed in the label of required fields.
    pub required_symbol: String,
    /// Name of the row decorator new builders bind to.
    pub default_decorator: String,
    /// Class every row container carries.
    pub default_row_class: String,
    /// Grouping mode used by `FormBuilder::row`.
    pub grouping_mode: GroupingMode,
    /// Wrap invalid raw fields in `<div class="field_with_errors">`.
    pub wrap_field_errors: bool,
    /// Extra decorated field kinds registered when the environment is built.
    pub custom_helpers: Vec<HelperSpec>,
}

impl Default for FormWowConfig {
    fn default() -> Self {
        Self {
            required_symbol: "*".to_string(),
            default_decorator: FORM_WOW_ROW.to_string(),
            default_row_class: "row".to_string(),
            grouping_mode: GroupingMode::Wrap,
            wrap_field_errors: true,
            custom_helpers: Vec::new(),
        }
    }
}

impl FormWowConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the required symbol.
    #[must_use]
    pub fn required_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.required_symbol = symbol.into();
        self
    }

    /// Sets the default decorator name.
    #[must_use]
    pub fn default_decorator(mut self, name: impl Into<String>) -> Self {
        self.default_decorator = name.into();
        self
    }

    /// Sets the default row class.
    #[must_use]
    pub fn default_row_class(mut self, class: impl Into<String>) -> Self {
        self.default_row_class = class.into();
        self
    }

    /// Sets the grouping mode.
    #[must_use]
    pub fn grouping_mode(mut self, mode: GroupingMode) -> Self {
        self.grouping_mode = mode;
        self
    }

    /// Stops wrapping invalid fields in `field_with_errors`; the row already
    /// marks them.
    #[must_use]
    pub fn nuke_field_with_errors(mut self) -> Self {
        self.wrap_field_errors = false;
        self
    }

    /// Adds a custom decorated field kind.
    #[must_use]
    pub fn custom_helper(mut self, spec: HelperSpec) -> Self {
        self.custom_helpers.push(spec);
        self
    }
}
