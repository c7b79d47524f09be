use chrono::NaiveDate;

/// 現在日付の提供元
///
/// 返却期限と延滞日数の計算に使う「今日」を差し替え可能にする。
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
