use crate::domain::{Book, Isbn, Member, MemberEmail, Money};
use crate::ports::notification_service::{
    NotificationService as NotificationServiceTrait, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 記録された通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    Checkout {
        member: MemberEmail,
        isbn: Isbn,
        due_date: NaiveDate,
        /// 通知時点の会員の貸出冊数
        books_checked_out: u32,
    },
    Return {
        member: MemberEmail,
        isbn: Isbn,
        late_fee: Money,
        books_checked_out: u32,
    },
}

/// Mock implementation of NotificationService
///
/// Records every notification it receives instead of delivering it.
/// Can be switched into a failing mode to exercise best-effort delivery.
pub struct NotificationService {
    sent: Mutex<Vec<SentNotification>>,
    failing: AtomicBool,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// A notifier whose every call fails (after recording it)
    pub fn failing() -> Self {
        let service = Self::new();
        service.failing.store(true, Ordering::SeqCst);
        service
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent_guard().clone()
    }

    fn sent_guard(&self) -> MutexGuard<'_, Vec<SentNotification>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, notification: SentNotification) -> Result<()> {
        self.sent_guard().push(notification);
        if self.failing.load(Ordering::SeqCst) {
            return Err("notification transport unavailable".into());
        }
        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify_checkout(&self, member: &Member, book: &Book, due_date: NaiveDate) -> Result<()> {
        self.record(SentNotification::Checkout {
            member: member.email.clone(),
            isbn: book.isbn.clone(),
            due_date,
            books_checked_out: member.books_checked_out,
        })
    }

    async fn notify_return(&self, member: &Member, book: &Book, late_fee: Money) -> Result<()> {
        self.record(SentNotification::Return {
            member: member.email.clone(),
            isbn: book.isbn.clone(),
            late_fee,
            books_checked_out: member.books_checked_out,
        })
    }
}
