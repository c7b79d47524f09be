use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookStateError, BookStatus, Isbn, MemberEmail};

/// 貸出情報
///
/// 借り手と返却期限は常に組で存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub borrower: MemberEmail,
    pub due_date: NaiveDate,
}

/// 書籍エンティティ
///
/// 不変条件：状態（AVAILABLE / CHECKED_OUT）と借り手・返却期限の有無は常に一致する。
/// `loan`の有無から状態を導出することで、この不変条件を型で保証する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub loan: Option<Loan>,
}

impl Book {
    /// 貸出可能な状態の書籍を作成
    pub fn new(isbn: Isbn, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            loan: None,
        }
    }

    pub fn status(&self) -> BookStatus {
        match self.loan {
            Some(_) => BookStatus::CheckedOut,
            None => BookStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    pub fn borrower(&self) -> Option<&MemberEmail> {
        self.loan.as_ref().map(|loan| &loan.borrower)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.loan.as_ref().map(|loan| loan.due_date)
    }
}

/// 純粋関数：書籍を貸し出す
///
/// 状態をCHECKED_OUTにし、借り手と返却期限を設定した新しいBookを返す。
pub fn check_out(
    book: Book,
    borrower: MemberEmail,
    due_date: NaiveDate,
) -> Result<Book, BookStateError> {
    if !book.is_available() {
        return Err(BookStateError::AlreadyCheckedOut(book.isbn));
    }

    Ok(Book {
        loan: Some(Loan { borrower, due_date }),
        ..book
    })
}

/// 純粋関数：書籍を返却する
///
/// 状態をAVAILABLEに戻し、借り手と返却期限を消去した新しいBookと、
/// 消去した貸出情報を返す。
pub fn return_to_shelf(book: Book) -> Result<(Book, Loan), BookStateError> {
    match book.loan {
        Some(loan) => Ok((Book { loan: None, ..book }, loan)),
        None => Err(BookStateError::NotCheckedOut(book.isbn)),
    }
}

/// 純粋関数：延滞日数
///
/// 今日が返却期限より後なら、その日数差（エポック日の差）。それ以外は0。
pub fn days_late(due_date: NaiveDate, today: NaiveDate) -> u32 {
    if today <= due_date {
        return 0;
    }
    let days = today.signed_duration_since(due_date).num_days();
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// 純粋関数：延滞判定（返却期限が今日より前）
pub fn is_overdue(book: &Book, today: NaiveDate) -> bool {
    book.due_date().is_some_and(|due_date| due_date < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book() -> Book {
        Book::new(Isbn::new("978-0-13-468599-1"), "The Rust Book", "Klabnik")
    }

    #[test]
    fn test_new_book_is_available() {
        let book = sample_book();
        assert_eq!(book.status(), BookStatus::Available);
        assert!(book.borrower().is_none());
        assert!(book.due_date().is_none());
    }

    // TDD: check_out() のテスト
    #[test]
    fn test_check_out_sets_borrower_and_due_date() {
        let borrower = MemberEmail::new("alice@example.com");
        let due = date(2026, 11, 1);

        let book = check_out(sample_book(), borrower.clone(), due).unwrap();

        assert_eq!(book.status(), BookStatus::CheckedOut);
        assert_eq!(book.borrower(), Some(&borrower));
        assert_eq!(book.due_date(), Some(due));
    }

    #[test]
    fn test_check_out_fails_when_already_checked_out() {
        let due = date(2026, 11, 1);
        let book = check_out(sample_book(), MemberEmail::new("a@example.com"), due).unwrap();

        let result = check_out(book, MemberEmail::new("b@example.com"), due);

        assert_eq!(
            result.unwrap_err(),
            BookStateError::AlreadyCheckedOut(Isbn::new("978-0-13-468599-1"))
        );
    }

    // TDD: return_to_shelf() のテスト
    #[test]
    fn test_return_to_shelf_clears_loan() {
        let borrower = MemberEmail::new("alice@example.com");
        let due = date(2026, 11, 1);
        let book = check_out(sample_book(), borrower.clone(), due).unwrap();

        let (book, loan) = return_to_shelf(book).unwrap();

        assert_eq!(book.status(), BookStatus::Available);
        assert!(book.borrower().is_none());
        assert!(book.due_date().is_none());
        assert_eq!(loan.borrower, borrower);
        assert_eq!(loan.due_date, due);
    }

    #[test]
    fn test_return_to_shelf_fails_when_available() {
        let result = return_to_shelf(sample_book());
        assert!(matches!(result, Err(BookStateError::NotCheckedOut(_))));
    }

    // TDD: days_late() のテスト
    #[test]
    fn test_days_late_zero_on_due_date() {
        let due = date(2026, 10, 18);
        assert_eq!(days_late(due, due), 0);
    }

    #[test]
    fn test_days_late_zero_before_due_date() {
        assert_eq!(days_late(date(2026, 10, 20), date(2026, 10, 18)), 0);
    }

    #[test]
    fn test_days_late_counts_calendar_days() {
        assert_eq!(days_late(date(2026, 10, 13), date(2026, 10, 18)), 5);
        // 月またぎ
        assert_eq!(days_late(date(2026, 9, 28), date(2026, 10, 3)), 5);
    }

    #[test]
    fn test_is_overdue_only_when_due_date_strictly_before_today() {
        let today = date(2026, 10, 18);
        let borrower = MemberEmail::new("alice@example.com");

        let due_today = check_out(sample_book(), borrower.clone(), today).unwrap();
        let due_yesterday = check_out(sample_book(), borrower, date(2026, 10, 17)).unwrap();

        assert!(!is_overdue(&sample_book(), today));
        assert!(!is_overdue(&due_today, today));
        assert!(is_overdue(&due_yesterday, today));
    }
}
