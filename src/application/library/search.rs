use crate::domain::{Book, Isbn};
use crate::ports::BookRepository;
use std::str::FromStr;

use super::errors::{LibraryError, Result};
use super::library_service::ServiceDependencies;

/// 検索種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// タイトルの部分一致（大文字小文字を区別しない）
    Title,
    /// 著者名の部分一致（大文字小文字を区別しない）
    Author,
    /// ISBNの完全一致
    Isbn,
}

impl FromStr for SearchKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(SearchKind::Title),
            "author" => Ok(SearchKind::Author),
            "isbn" => Ok(SearchKind::Isbn),
            _ => Err(LibraryError::InvalidSearchKind(s.to_string())),
        }
    }
}

/// 書籍を検索する
///
/// 検索種別に応じてリポジトリの検索をそのまま呼び出す。
/// 結果の順序はリポジトリが返した順序のまま。ISBN検索の結果は0件か1件。
///
/// # エラー
/// - InvalidSearchKind: `title` / `author` / `isbn` 以外の種別
pub async fn search_books(deps: &ServiceDependencies, term: &str, kind: &str) -> Result<Vec<Book>> {
    let kind = kind.parse::<SearchKind>()?;
    search_books_by(deps, term, kind).await
}

/// 型付きの検索種別で書籍を検索する
pub async fn search_books_by(
    deps: &ServiceDependencies,
    term: &str,
    kind: SearchKind,
) -> Result<Vec<Book>> {
    let books = &deps.book_repository;

    let result = match kind {
        SearchKind::Title => books.find_by_title_containing(term).await,
        SearchKind::Author => books.find_by_author(term).await,
        SearchKind::Isbn => books
            .find_by_isbn(&Isbn::new(term))
            .await
            .map(|book| book.into_iter().collect()),
    };

    result.map_err(LibraryError::BookRepositoryError)
}
