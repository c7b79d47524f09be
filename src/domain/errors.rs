use thiserror::Error;

use super::Isbn;

/// 未知の会員種別
///
/// 登録されていない種別を既定のポリシーに倒さず、明示的に拒否するためのエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown membership category: {0}")]
pub struct UnknownCategory(pub String);

/// 書籍の状態遷移エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookStateError {
    /// 貸出中の書籍を再度貸し出そうとした
    #[error("Book {0} is already checked out")]
    AlreadyCheckedOut(Isbn),
    /// 貸出されていない書籍を返却しようとした
    #[error("Book {0} is not checked out")]
    NotCheckedOut(Isbn),
}
