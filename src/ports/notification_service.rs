use crate::domain::{Book, Member, Money};
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 通知は参考情報であり、失敗しても貸出・返却の確定は取り消されない。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 貸出完了を会員に通知する
    async fn notify_checkout(&self, member: &Member, book: &Book, due_date: NaiveDate)
    -> Result<()>;

    /// 返却完了を会員に通知する（延滞料金を含む）
    async fn notify_return(&self, member: &Member, book: &Book, late_fee: Money) -> Result<()>;
}
