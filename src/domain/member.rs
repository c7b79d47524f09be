use serde::{Deserialize, Serialize};

use super::{MemberEmail, MembershipCategory};

/// 会員エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub email: MemberEmail,
    pub name: String,
    pub category: MembershipCategory,
    /// 現在借りている冊数
    pub books_checked_out: u32,
}

impl Member {
    pub fn new(email: MemberEmail, name: impl Into<String>, category: MembershipCategory) -> Self {
        Self {
            email,
            name: name.into(),
            category,
            books_checked_out: 0,
        }
    }
}

/// 純粋関数：貸出冊数を1増やす
pub fn increment_checkout_count(member: Member) -> Member {
    Member {
        books_checked_out: member.books_checked_out.saturating_add(1),
        ..member
    }
}

/// 純粋関数：貸出冊数を1減らす
///
/// 冊数は負にならない。0の場合は0のまま。
pub fn decrement_checkout_count(member: Member) -> Member {
    Member {
        books_checked_out: member.books_checked_out.saturating_sub(1),
        ..member
    }
}
