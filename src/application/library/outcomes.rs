use crate::domain::Money;
use chrono::NaiveDate;
use std::fmt;

/// 業務ルールによる「断り」の理由
///
/// エラーではなく、正常な否定結果として呼び出し側に返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// 書籍が貸出可能でない
    BookNotAvailable,
    /// 会員が貸出上限に達している
    CheckoutLimitReached,
    /// 書籍が貸出中でない
    BookNotCheckedOut,
}

impl DeclineReason {
    pub fn message(&self) -> &'static str {
        match self {
            DeclineReason::BookNotAvailable => "Book is not available",
            DeclineReason::CheckoutLimitReached => "Member has reached checkout limit",
            DeclineReason::BookNotCheckedOut => "Book is not checked out",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 貸出の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    CheckedOut { due_date: NaiveDate },
    Declined(DeclineReason),
}

impl CheckoutOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutOutcome::CheckedOut { .. })
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutOutcome::CheckedOut { due_date } => {
                write!(f, "Book checked out successfully. Due date: {}", due_date)
            }
            CheckoutOutcome::Declined(reason) => reason.fmt(f),
        }
    }
}

/// 返却の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 返却完了。延滞がなければ`late_fee`は0
    Returned { late_fee: Money },
    Declined(DeclineReason),
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }

    pub fn late_fee(&self) -> Option<Money> {
        match self {
            ReturnOutcome::Returned { late_fee } => Some(*late_fee),
            ReturnOutcome::Declined(_) => None,
        }
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { late_fee } if !late_fee.is_zero() => {
                write!(f, "Book returned. Late fee: ${}", late_fee)
            }
            ReturnOutcome::Returned { .. } => f.write_str("Book returned successfully"),
            ReturnOutcome::Declined(reason) => reason.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_outcome_messages() {
        let due_date = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(
            CheckoutOutcome::CheckedOut { due_date }.to_string(),
            "Book checked out successfully. Due date: 2026-11-01"
        );
        assert_eq!(
            CheckoutOutcome::Declined(DeclineReason::BookNotAvailable).to_string(),
            "Book is not available"
        );
        assert_eq!(
            CheckoutOutcome::Declined(DeclineReason::CheckoutLimitReached).to_string(),
            "Member has reached checkout limit"
        );
    }

    #[test]
    fn test_return_outcome_messages() {
        assert_eq!(
            ReturnOutcome::Returned {
                late_fee: Money::from_cents(250)
            }
            .to_string(),
            "Book returned. Late fee: $2.50"
        );
        assert_eq!(
            ReturnOutcome::Returned {
                late_fee: Money::ZERO
            }
            .to_string(),
            "Book returned successfully"
        );
        assert_eq!(
            ReturnOutcome::Declined(DeclineReason::BookNotCheckedOut).to_string(),
            "Book is not checked out"
        );
    }
}
