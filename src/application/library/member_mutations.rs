use crate::domain::{self, Member};
use crate::ports::MemberRepository;

use super::errors::{LibraryError, Result};

/// 会員の貸出冊数を1増やして保存する
pub(super) async fn increment_checkout_count(
    members: &dyn MemberRepository,
    member: Member,
) -> Result<Member> {
    let member = domain::member::increment_checkout_count(member);

    members
        .save(member.clone())
        .await
        .map_err(LibraryError::MemberRepositoryError)?;

    Ok(member)
}

/// 会員の貸出冊数を1減らして保存する
///
/// 冊数が既に0の場合は0のまま保存し、警告を記録する。
pub(super) async fn decrement_checkout_count(
    members: &dyn MemberRepository,
    member: Member,
) -> Result<Member> {
    if member.books_checked_out == 0 {
        tracing::warn!(
            member = %member.email,
            "Checkout count already zero on return; keeping it at zero"
        );
    }

    let member = domain::member::decrement_checkout_count(member);

    members
        .save(member.clone())
        .await
        .map_err(LibraryError::MemberRepositoryError)?;

    Ok(member)
}
