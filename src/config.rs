//! Holiday table labels.
//!
//! The forecasting side matches holidays by label, so the defaults are the
//! exact strings it expects. Overrides can be read from JSON:
//!
//! ```json
//! { "school": "school_holiday", "state": "state_holiday" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::HolidayKind;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayLabels {
    pub school: String,
    pub state: String,
}

impl Default for HolidayLabels {
    fn default() -> Self {
        Self {
            school: "school_holiday".to_string(),
            state: "state_holiday".to_string(),
        }
    }
}

impl HolidayLabels {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn label(&self, kind: HolidayKind) -> &str {
        match kind {
            HolidayKind::School => &self.school,
            HolidayKind::State => &self.state,
        }
    }
}
