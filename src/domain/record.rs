use serde::{Deserialize, Serialize};

/// The plain data form of a calendar day handed to widget code.
///
/// `month` is 1-based and `timestamp` is always the UTC midnight of the day
/// described by `year`/`month`/`day` in the record's calendar system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub timestamp: i64,
    pub date_string: String,
}
