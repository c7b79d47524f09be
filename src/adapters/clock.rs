use crate::ports::Clock;
use chrono::{Local, NaiveDate};

/// システム時計（ローカルタイムゾーンの今日）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日付の時計
///
/// テストや`LIBRARY_TODAY`による日付の上書きで使用する。
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
