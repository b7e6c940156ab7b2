pub mod compare;
pub mod dataset;
pub mod history;
pub mod rank;
pub mod record;

pub use compare::{
    BaselinePolicy, CompareOptions, ComparisonResult, MonthWindow, PriceChange, compare,
};
pub use dataset::TradeDataset;
pub use history::{HistoryPoint, history_for};
pub use rank::{RankOptions, RankedEntry, SortDirection, SortKey, rank};
pub use record::{GroupKey, RawTradeRecord, TransactionRecord};
