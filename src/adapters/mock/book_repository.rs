use crate::domain::{Book, BookStatus, Isbn, book};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// BookRepositoryのインメモリ実装
///
/// ISBN順に保持するため、検索結果は常にISBN昇順で返る。
/// テストとデモ用の配線で使用する。
pub struct BookRepository {
    books: Mutex<BTreeMap<Isbn, Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    /// 書籍を登録（同じISBNは置き換え）
    pub fn add_book(&self, book: Book) {
        self.books().insert(book.isbn.clone(), book);
    }

    /// 保存されている書籍を直接参照する
    pub fn get(&self, isbn: &Isbn) -> Option<Book> {
        self.books().get(isbn).cloned()
    }

    fn books(&self) -> MutexGuard<'_, BTreeMap<Isbn, Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.books()
            .values()
            .filter(|&book| predicate(book))
            .cloned()
            .collect()
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        Ok(self.get(isbn))
    }

    async fn save(&self, book: Book) -> Result<()> {
        self.add_book(book);
        Ok(())
    }

    async fn count_by_status(&self, status: BookStatus) -> Result<u64> {
        let count = self
            .books()
            .values()
            .filter(|book| book.status() == status)
            .count();
        Ok(count as u64)
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Book>> {
        Ok(self.filter(|book| contains_ignore_case(&book.title, title)))
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        Ok(self.filter(|book| contains_ignore_case(&book.author, author)))
    }

    async fn find_due_before(&self, date: NaiveDate) -> Result<Vec<Book>> {
        Ok(self.filter(|b| book::is_overdue(b, date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Loan, MemberEmail};

    fn repository() -> BookRepository {
        let repo = BookRepository::new();
        repo.add_book(Book::new(Isbn::new("3"), "The Rust Programming Language", "Steve Klabnik"));
        repo.add_book(Book::new(Isbn::new("1"), "Programming Rust", "Jim Blandy"));
        repo.add_book(Book::new(Isbn::new("2"), "Dune", "Frank Herbert"));
        repo
    }

    #[tokio::test]
    async fn test_find_by_title_is_case_insensitive_partial_match() {
        let repo = repository();

        let books = repo.find_by_title_containing("rust").await.unwrap();

        let isbns: Vec<_> = books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_find_by_author_is_case_insensitive_partial_match() {
        let repo = repository();

        let books = repo.find_by_author("HERBERT").await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_count_by_status_and_find_due_before() {
        let repo = repository();
        let due = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        repo.add_book(Book {
            loan: Some(Loan {
                borrower: MemberEmail::new("alice@example.com"),
                due_date: due,
            }),
            ..Book::new(Isbn::new("4"), "Emma", "Jane Austen")
        });

        assert_eq!(repo.count_by_status(BookStatus::Available).await.unwrap(), 3);
        assert_eq!(repo.count_by_status(BookStatus::CheckedOut).await.unwrap(), 1);

        let on_due_date = repo.find_due_before(due).await.unwrap();
        assert!(on_due_date.is_empty());

        let day_after = repo.find_due_before(due.succ_opt().unwrap()).await.unwrap();
        assert_eq!(day_after.len(), 1);
        assert_eq!(day_after[0].isbn, Isbn::new("4"));
    }
}
