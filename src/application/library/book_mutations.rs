use crate::domain::{self, Book, Loan, MemberEmail};
use crate::ports::BookRepository;
use chrono::NaiveDate;

use super::errors::{LibraryError, Result};

/// 書籍を貸出状態にして保存する
///
/// 状態遷移はドメイン層の純粋関数に任せ、ここでは永続化だけを行う。
pub(super) async fn check_out(
    books: &dyn BookRepository,
    book: Book,
    borrower: MemberEmail,
    due_date: NaiveDate,
) -> Result<Book> {
    let book = domain::book::check_out(book, borrower, due_date)?;

    books
        .save(book.clone())
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    Ok(book)
}

/// 書籍を返却状態（AVAILABLE、借り手・期限なし）にして保存する
///
/// # 戻り値
/// 保存後の書籍と、消去した貸出情報
pub(super) async fn return_to_shelf(books: &dyn BookRepository, book: Book) -> Result<(Book, Loan)> {
    let (book, loan) = domain::book::return_to_shelf(book)?;

    books
        .save(book.clone())
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    Ok((book, loan))
}
