use crate::domain::{BookStateError, Isbn, MemberEmail, UnknownCategory};
use chrono::NaiveDate;
use thiserror::Error;

/// 図書館アプリケーション層のエラー
///
/// 業務上想定される「断り」（貸出不可・上限到達など）はエラーではなく
/// `CheckoutOutcome` / `ReturnOutcome` で返す。ここに並ぶのは呼び出し側の
/// 契約違反やデータ不整合、外部I/Oの失敗。
#[derive(Debug, Error)]
pub enum LibraryError {
    /// 書籍が存在しない
    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(MemberEmail),

    /// 会員種別に対応するルールがない
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// 検索種別が不正
    #[error("Invalid search type: {0}")]
    InvalidSearchKind(String),

    /// レポート種別が不正
    #[error("Invalid report type: {0}")]
    InvalidReportKind(String),

    /// 返却期限が日付の表現範囲を超える
    #[error("Due date out of range: {today} + {loan_period_days} days")]
    DueDateOutOfRange {
        today: NaiveDate,
        loan_period_days: u32,
    },

    /// 書籍の状態遷移が不正
    #[error(transparent)]
    InvalidBookState(#[from] BookStateError),

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    BookRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberRepositoryのエラー
    #[error("Member repository error")]
    MemberRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
