use crate::domain::{Book, BookStatus, Isbn};
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 書籍レコードの所有者はストレージ側。コアは1回の操作の間だけ
/// レコードを受け取り、変更後に`save`で引き渡す。
/// 検索系は見つからない場合に空の結果を返し、エラーにしない。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// ISBNで書籍を取得する（完全一致）
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// 書籍を保存する（新規・更新の両方）
    ///
    /// 1レコード単位のアトミックな書き込みを前提とする。
    async fn save(&self, book: Book) -> Result<()>;

    /// 指定した状態の書籍数を数える
    async fn count_by_status(&self, status: BookStatus) -> Result<u64>;

    /// タイトルの部分一致（大文字小文字を区別しない）で検索する
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Book>>;

    /// 著者名の部分一致（大文字小文字を区別しない）で検索する
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>>;

    /// 返却期限が指定日より前の書籍を検索する
    ///
    /// 延滞レポートで使用される。
    async fn find_due_before(&self, date: NaiveDate) -> Result<Vec<Book>>;
}
