//! Canonical column names of the combined frame.
//!
//! The cost workbook's own header names (`Channel`, `Line Of
//! Business`, `Cost per Contact`, `Language`) are used verbatim as
//! join and display keys.

/// Month label column.
pub const MONTH: &str = "Month";

/// Contact channel column.
pub const CHANNEL: &str = "Channel";

/// Line-of-business column on the volume side.
pub const LOB: &str = "LOB";

/// Line-of-business column as named in the cost workbook.
pub const LINE_OF_BUSINESS: &str = "Line Of Business";

/// Forecast volume column.
pub const VOLUME: &str = "Volume";

/// Cost rate column as named in the cost workbook.
pub const COST_PER_CONTACT: &str = "Cost per Contact";

/// Language column as named in the cost workbook.
pub const LANGUAGE: &str = "Language";

/// Derived total cost column.
pub const TOTAL_COST: &str = "Total Cost";
