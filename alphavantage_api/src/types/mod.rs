mod daily;
pub use self::daily::{DailyBar, DailySeries};

mod meta;
pub use self::meta::MetaData;
