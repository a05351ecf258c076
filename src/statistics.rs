//! Statistics presentation types and their defaults
//!
//! Stored as plain integers so the persisted blob stays compatible with the
//! web frontend.

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeError;

/// Chart used on the statistics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChartType {
    #[default]
    Pie,
    Bar,
}

impl ChartType {
    pub const ALL: [ChartType; 2] = [ChartType::Pie, ChartType::Bar];

    pub fn type_id(&self) -> u8 {
        match self {
            ChartType::Pie => 0,
            ChartType::Bar => 1,
        }
    }
}

impl From<ChartType> for u8 {
    fn from(value: ChartType) -> Self {
        value.type_id()
    }
}

impl TryFrom<u8> for ChartType {
    type Error = UnknownTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_id() == value)
            .ok_or(UnknownTypeError {
                kind: "chart",
                value,
            })
    }
}

/// What the statistics chart aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChartDataType {
    ExpenseByAccount,
    #[default]
    ExpenseByPrimaryCategory,
    ExpenseBySecondaryCategory,
    IncomeByAccount,
    IncomeByPrimaryCategory,
    IncomeBySecondaryCategory,
    AccountTotalAssets,
    AccountTotalLiabilities,
}

impl ChartDataType {
    pub const ALL: [ChartDataType; 8] = [
        ChartDataType::ExpenseByAccount,
        ChartDataType::ExpenseByPrimaryCategory,
        ChartDataType::ExpenseBySecondaryCategory,
        ChartDataType::IncomeByAccount,
        ChartDataType::IncomeByPrimaryCategory,
        ChartDataType::IncomeBySecondaryCategory,
        ChartDataType::AccountTotalAssets,
        ChartDataType::AccountTotalLiabilities,
    ];

    pub fn type_id(&self) -> u8 {
        match self {
            ChartDataType::ExpenseByAccount => 0,
            ChartDataType::ExpenseByPrimaryCategory => 1,
            ChartDataType::ExpenseBySecondaryCategory => 2,
            ChartDataType::IncomeByAccount => 3,
            ChartDataType::IncomeByPrimaryCategory => 4,
            ChartDataType::IncomeBySecondaryCategory => 5,
            ChartDataType::AccountTotalAssets => 6,
            ChartDataType::AccountTotalLiabilities => 7,
        }
    }
}

impl From<ChartDataType> for u8 {
    fn from(value: ChartDataType) -> Self {
        value.type_id()
    }
}

impl TryFrom<u8> for ChartDataType {
    type Error = UnknownTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_id() == value)
            .ok_or(UnknownTypeError {
                kind: "chart data",
                value,
            })
    }
}

/// Preset date ranges offered by the statistics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum DateRangeType {
    All,
    Today,
    Yesterday,
    LastSevenDays,
    LastThirtyDays,
    ThisWeek,
    LastWeek,
    #[default]
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    Custom,
}

impl DateRangeType {
    pub const ALL: [DateRangeType; 12] = [
        DateRangeType::All,
        DateRangeType::Today,
        DateRangeType::Yesterday,
        DateRangeType::LastSevenDays,
        DateRangeType::LastThirtyDays,
        DateRangeType::ThisWeek,
        DateRangeType::LastWeek,
        DateRangeType::ThisMonth,
        DateRangeType::LastMonth,
        DateRangeType::ThisYear,
        DateRangeType::LastYear,
        DateRangeType::Custom,
    ];

    pub fn type_id(&self) -> u8 {
        match self {
            DateRangeType::All => 0,
            DateRangeType::Today => 1,
            DateRangeType::Yesterday => 2,
            DateRangeType::LastSevenDays => 3,
            DateRangeType::LastThirtyDays => 4,
            DateRangeType::ThisWeek => 5,
            DateRangeType::LastWeek => 6,
            DateRangeType::ThisMonth => 7,
            DateRangeType::LastMonth => 8,
            DateRangeType::ThisYear => 9,
            DateRangeType::LastYear => 10,
            DateRangeType::Custom => 255,
        }
    }
}

impl From<DateRangeType> for u8 {
    fn from(value: DateRangeType) -> Self {
        value.type_id()
    }
}

impl TryFrom<u8> for DateRangeType {
    type Error = UnknownTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_id() == value)
            .ok_or(UnknownTypeError {
                kind: "date range",
                value,
            })
    }
}

/// Ordering of chart items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum SortingType {
    #[default]
    Amount,
    DisplayOrder,
    Name,
}

impl SortingType {
    pub const ALL: [SortingType; 3] = [
        SortingType::Amount,
        SortingType::DisplayOrder,
        SortingType::Name,
    ];

    pub fn type_id(&self) -> u8 {
        match self {
            SortingType::Amount => 0,
            SortingType::DisplayOrder => 1,
            SortingType::Name => 2,
        }
    }
}

impl From<SortingType> for u8 {
    fn from(value: SortingType) -> Self {
        value.type_id()
    }
}

impl TryFrom<u8> for SortingType {
    type Error = UnknownTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_id() == value)
            .ok_or(UnknownTypeError {
                kind: "sorting",
                value,
            })
    }
}

pub const DEFAULT_CHART_TYPE: ChartType = ChartType::Pie;
pub const DEFAULT_CHART_DATA_TYPE: ChartDataType = ChartDataType::ExpenseByPrimaryCategory;
pub const DEFAULT_DATA_RANGE_TYPE: DateRangeType = DateRangeType::ThisMonth;
pub const DEFAULT_SORTING_TYPE: SortingType = SortingType::Amount;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        assert_eq!(ChartType::default(), DEFAULT_CHART_TYPE);
        assert_eq!(ChartDataType::default(), DEFAULT_CHART_DATA_TYPE);
        assert_eq!(DateRangeType::default(), DEFAULT_DATA_RANGE_TYPE);
        assert_eq!(SortingType::default(), DEFAULT_SORTING_TYPE);
    }

    #[test]
    fn test_serialized_as_integers() {
        assert_eq!(serde_json::to_string(&DateRangeType::Custom).unwrap(), "255");
        assert_eq!(serde_json::to_string(&ChartType::Bar).unwrap(), "1");
        let parsed: ChartDataType = serde_json::from_str("6").unwrap();
        assert_eq!(parsed, ChartDataType::AccountTotalAssets);
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert_eq!(
            SortingType::try_from(9),
            Err(UnknownTypeError {
                kind: "sorting",
                value: 9
            })
        );
        assert!(serde_json::from_str::<DateRangeType>("11").is_err());
        assert!(serde_json::from_str::<ChartType>("\"pie\"").is_err());
    }

    #[test]
    fn test_type_ids_unique() {
        for (i, a) in DateRangeType::ALL.iter().enumerate() {
            for b in &DateRangeType::ALL[i + 1..] {
                assert_ne!(a.type_id(), b.type_id());
            }
        }
    }
}
