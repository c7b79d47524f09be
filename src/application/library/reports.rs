use crate::domain::{Book, BookStatus};
use crate::ports::{BookRepository, Clock, MemberRepository};
use std::str::FromStr;

use super::errors::{LibraryError, Result};
use super::library_service::ServiceDependencies;

const OVERDUE_REPORT_HEADER: &str = "OVERDUE BOOKS REPORT";
const OVERDUE_REPORT_SEPARATOR: &str = "====================";

/// レポート種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// 延滞中の書籍一覧
    Overdue,
    /// 貸出可能な書籍数
    Available,
    /// 会員総数
    Members,
}

impl FromStr for ReportKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "overdue" => Ok(ReportKind::Overdue),
            "available" => Ok(ReportKind::Available),
            "members" => Ok(ReportKind::Members),
            _ => Err(LibraryError::InvalidReportKind(s.to_string())),
        }
    }
}

/// レポートを生成する
///
/// レポートは永続化せず、呼び出しのたびに現在のストレージの状態から作る。
///
/// # エラー
/// - InvalidReportKind: `overdue` / `available` / `members` 以外の種別
pub async fn generate_report(deps: &ServiceDependencies, kind: &str) -> Result<String> {
    let kind = kind.parse::<ReportKind>()?;
    generate_report_of(deps, kind).await
}

/// 型付きのレポート種別でレポートを生成する
pub async fn generate_report_of(deps: &ServiceDependencies, kind: ReportKind) -> Result<String> {
    match kind {
        ReportKind::Overdue => overdue_report(deps).await,
        ReportKind::Available => availability_report(deps).await,
        ReportKind::Members => member_report(deps).await,
    }
}

async fn availability_report(deps: &ServiceDependencies) -> Result<String> {
    let available = deps
        .book_repository
        .count_by_status(BookStatus::Available)
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    Ok(format!("Available books: {}", available))
}

async fn member_report(deps: &ServiceDependencies) -> Result<String> {
    let total = deps
        .member_repository
        .count()
        .await
        .map_err(LibraryError::MemberRepositoryError)?;

    Ok(format!("Total members: {}", total))
}

async fn overdue_report(deps: &ServiceDependencies) -> Result<String> {
    let overdue_books = deps
        .book_repository
        .find_due_before(deps.clock.today())
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    Ok(format_overdue_report(&overdue_books))
}

/// 延滞レポートの本文を組み立てる
///
/// ヘッダー行、区切り行、書籍ごとに1行。順序は引数の順序のまま。
/// 貸出情報のない書籍は延滞しえないため出力しない。
pub fn format_overdue_report(books: &[Book]) -> String {
    let mut report = format!("{OVERDUE_REPORT_HEADER}\n{OVERDUE_REPORT_SEPARATOR}\n");

    for book in books {
        let Some(loan) = &book.loan else {
            continue;
        };
        report.push_str(&format!(
            "{} by {} - Due: {} - Checked out by: {}\n",
            book.title, book.author, loan.due_date, loan.borrower
        ));
    }

    report
}
