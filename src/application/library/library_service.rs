use crate::domain::{Money, PolicyRegistry, book, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::book_mutations;
use super::errors::{LibraryError, Result};
use super::member_mutations;
use super::outcomes::{CheckoutOutcome, DeclineReason, ReturnOutcome};

/// サービスの依存関係
///
/// 図書館の貸出・返却・検索・レポートのすべての操作が共有する。
/// 起動時に一度構築し、各操作関数に参照で渡す。隠れたシングルトンは持たない。
///
/// - ストレージ・通知・時計はポート（トレイトオブジェクト）
/// - 会員種別ごとのルールは`PolicyRegistry`の値として保持
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub member_repository: Arc<dyn MemberRepository>,
    pub notification_service: Arc<dyn NotificationService>,
    pub clock: Arc<dyn Clock>,
    pub policies: PolicyRegistry,
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍と会員が存在すること（存在しなければエラー）
/// - 書籍が貸出可能であること（でなければ断り）
/// - 会員の貸出冊数が種別ごとの上限未満であること（でなければ断り）
/// - 返却期限は今日 + 種別ごとの貸出期間（日付の範囲を超えればエラー）
///
/// # 一貫性保証
///
/// 書籍の保存と会員の保存は独立した2回の書き込みで、どちらかが失敗すれば
/// エラーを返し通知は行わない。通知は両方の保存が完了した後にのみ行い、
/// 通知の失敗は記録するだけで結果には影響しない。
///
/// 同じ書籍への同時貸出は、読み込みから保存までの間で競合しうる。
/// このレイヤーではロックを取らない。
pub async fn checkout_book(deps: &ServiceDependencies, cmd: CheckoutBook) -> Result<CheckoutOutcome> {
    // 1. 書籍の取得
    let book = deps
        .book_repository
        .find_by_isbn(&cmd.isbn)
        .await
        .map_err(LibraryError::BookRepositoryError)?
        .ok_or_else(|| LibraryError::BookNotFound(cmd.isbn.clone()))?;

    // 2. 会員の取得
    let member = deps
        .member_repository
        .find_by_email(&cmd.member_email)
        .await
        .map_err(LibraryError::MemberRepositoryError)?
        .ok_or_else(|| LibraryError::MemberNotFound(cmd.member_email.clone()))?;

    // 3. 貸出可能性の確認
    if !book.is_available() {
        tracing::debug!(isbn = %book.isbn, "Checkout declined: book is not available");
        return Ok(CheckoutOutcome::Declined(DeclineReason::BookNotAvailable));
    }

    // 4. 会員種別のポリシーを解決
    let policy = deps.policies.checkout_policy(member.category)?;

    // 5. 貸出上限の確認
    if !policy.can_checkout(&member) {
        tracing::debug!(
            member = %member.email,
            books_checked_out = member.books_checked_out,
            max_books = policy.max_books(),
            "Checkout declined: member has reached checkout limit"
        );
        return Ok(CheckoutOutcome::Declined(DeclineReason::CheckoutLimitReached));
    }

    // 6. 書籍を貸出状態にして保存
    let today = deps.clock.today();
    let due_date = policy
        .due_date_from(today)
        .ok_or(LibraryError::DueDateOutOfRange {
            today,
            loan_period_days: policy.loan_period_days(),
        })?;
    let book = book_mutations::check_out(
        deps.book_repository.as_ref(),
        book,
        member.email.clone(),
        due_date,
    )
    .await?;

    // 7. 会員の貸出冊数を増やして保存
    let member =
        member_mutations::increment_checkout_count(deps.member_repository.as_ref(), member).await?;

    tracing::info!(
        isbn = %book.isbn,
        member = %member.email,
        %due_date,
        "Book checked out"
    );

    // 8. 通知（失敗しても確定済みの貸出は取り消さない）
    if let Err(e) = deps
        .notification_service
        .notify_checkout(&member, &book, due_date)
        .await
    {
        tracing::warn!(isbn = %book.isbn, member = %member.email, "Checkout notification failed: {}", e);
    }

    Ok(CheckoutOutcome::CheckedOut { due_date })
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在すること（存在しなければエラー）
/// - 書籍が貸出中であること（でなければ断り）
/// - 借り手の会員が存在すること（存在しなければデータ不整合としてエラー）
/// - 今日が返却期限より後なら、延滞日数 × 会員種別の料金を課す
///
/// # 一貫性保証
///
/// `checkout_book()`と同じ。保存が2回とも完了してから通知する。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ReturnOutcome> {
    // 1. 書籍の取得
    let book = deps
        .book_repository
        .find_by_isbn(&cmd.isbn)
        .await
        .map_err(LibraryError::BookRepositoryError)?
        .ok_or_else(|| LibraryError::BookNotFound(cmd.isbn.clone()))?;

    // 2. 貸出中であることの確認
    let Some(loan) = book.loan.clone() else {
        tracing::debug!(isbn = %book.isbn, "Return declined: book is not checked out");
        return Ok(ReturnOutcome::Declined(DeclineReason::BookNotCheckedOut));
    };

    // 3. 借り手の取得
    let member = deps
        .member_repository
        .find_by_email(&loan.borrower)
        .await
        .map_err(LibraryError::MemberRepositoryError)?
        .ok_or_else(|| LibraryError::MemberNotFound(loan.borrower.clone()))?;

    // 4-5. 延滞日数と延滞料金
    let days_late = book::days_late(loan.due_date, deps.clock.today());
    let late_fee = if days_late > 0 {
        deps.policies
            .fee_schedule(member.category)?
            .calculate_fee(days_late)
    } else {
        Money::ZERO
    };

    // 6. 書籍を返却状態にして保存
    let (book, _) = book_mutations::return_to_shelf(deps.book_repository.as_ref(), book).await?;

    // 7. 会員の貸出冊数を減らして保存
    let member =
        member_mutations::decrement_checkout_count(deps.member_repository.as_ref(), member).await?;

    tracing::info!(
        isbn = %book.isbn,
        member = %member.email,
        days_late,
        %late_fee,
        "Book returned"
    );

    // 8. 通知（失敗しても確定済みの返却は取り消さない）
    if let Err(e) = deps
        .notification_service
        .notify_return(&member, &book, late_fee)
        .await
    {
        tracing::warn!(isbn = %book.isbn, member = %member.email, "Return notification failed: {}", e);
    }

    Ok(ReturnOutcome::Returned { late_fee })
}
