use crate::domain::{Book, Member, Money};
use crate::ports::notification_service::{
    NotificationService as NotificationServiceTrait, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// 送信するメールの内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// 貸出完了メールを組み立てる
pub fn checkout_email(member: &Member, book: &Book, due_date: NaiveDate) -> EmailMessage {
    EmailMessage {
        to: member.email.to_string(),
        subject: "Book checked out".to_string(),
        body: format!(
            "You have checked out {} by {}. Please return it by {}.",
            book.title, book.author, due_date
        ),
    }
}

/// 返却完了メールを組み立てる
///
/// 延滞料金がある場合のみ料金の行を含める。
pub fn return_email(member: &Member, book: &Book, late_fee: Money) -> EmailMessage {
    let mut body = format!("You have returned {}.", book.title);
    if !late_fee.is_zero() {
        body.push_str(&format!(" A late fee of ${} has been charged.", late_fee));
    }

    EmailMessage {
        to: member.email.to_string(),
        subject: "Book returned".to_string(),
        body,
    }
}

/// メール通知サービス
///
/// メールの宛先・件名・本文を組み立て、ログに出力する。
/// 実際のメール送信（SMTPなど）はこのクレートの範囲外。
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotificationService;

impl EmailNotificationService {
    pub fn new() -> Self {
        Self
    }

    fn send(&self, message: EmailMessage) {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Sending email: {}",
            message.body
        );
    }
}

#[async_trait]
impl NotificationServiceTrait for EmailNotificationService {
    async fn notify_checkout(&self, member: &Member, book: &Book, due_date: NaiveDate) -> Result<()> {
        self.send(checkout_email(member, book, due_date));
        Ok(())
    }

    async fn notify_return(&self, member: &Member, book: &Book, late_fee: Money) -> Result<()> {
        self.send(return_email(member, book, late_fee));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Isbn, MemberEmail, MembershipCategory};

    fn member() -> Member {
        Member::new(
            MemberEmail::new("alice@example.com"),
            "Alice",
            MembershipCategory::Student,
        )
    }

    fn book() -> Book {
        Book::new(Isbn::new("978-0441013593"), "Dune", "Frank Herbert")
    }

    #[test]
    fn test_checkout_email() {
        let due_date = NaiveDate::from_ymd_opt(2026, 11, 8).unwrap();

        let message = checkout_email(&member(), &book(), due_date);

        assert_eq!(message.to, "alice@example.com");
        assert_eq!(message.subject, "Book checked out");
        assert_eq!(
            message.body,
            "You have checked out Dune by Frank Herbert. Please return it by 2026-11-08."
        );
    }

    #[test]
    fn test_return_email_without_fee() {
        let message = return_email(&member(), &book(), Money::ZERO);

        assert_eq!(message.subject, "Book returned");
        assert_eq!(message.body, "You have returned Dune.");
    }

    #[test]
    fn test_return_email_with_fee() {
        let message = return_email(&member(), &book(), Money::from_cents(125));

        assert_eq!(
            message.body,
            "You have returned Dune. A late fee of $1.25 has been charged."
        );
    }

    #[tokio::test]
    async fn test_email_notifications_always_succeed() {
        let service = EmailNotificationService::new();
        let due_date = NaiveDate::from_ymd_opt(2026, 11, 8).unwrap();

        assert!(service.notify_checkout(&member(), &book(), due_date).await.is_ok());
        assert!(
            service
                .notify_return(&member(), &book(), Money::from_cents(50))
                .await
                .is_ok()
        );
    }
}
