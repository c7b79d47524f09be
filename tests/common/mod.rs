#![allow(dead_code)]

use chrono::NaiveDate;
use library_lending::adapters::clock::FixedClock;
use library_lending::adapters::mock::{BookRepository, MemberRepository, NotificationService};
use library_lending::application::library::ServiceDependencies;
use library_lending::domain::*;
use std::sync::Arc;

/// テストで使う「今日」
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - chrono::Duration::days(days)
}

/// インメモリアダプターと、テスト側から状態を確認するための参照
pub struct TestLibrary {
    pub deps: ServiceDependencies,
    pub books: Arc<BookRepository>,
    pub members: Arc<MemberRepository>,
    pub notifications: Arc<NotificationService>,
}

impl TestLibrary {
    pub fn new() -> Self {
        Self::with(PolicyRegistry::standard(), NotificationService::new())
    }

    pub fn with(policies: PolicyRegistry, notifications: NotificationService) -> Self {
        let books = Arc::new(BookRepository::new());
        let members = Arc::new(MemberRepository::new());
        let notifications = Arc::new(notifications);

        let deps = ServiceDependencies {
            book_repository: books.clone(),
            member_repository: members.clone(),
            notification_service: notifications.clone(),
            clock: Arc::new(FixedClock(today())),
            policies,
        };

        Self {
            deps,
            books,
            members,
            notifications,
        }
    }

    pub fn add_book(&self, isbn: &str, title: &str, author: &str) -> Isbn {
        let isbn = Isbn::new(isbn);
        self.books.add_book(Book::new(isbn.clone(), title, author));
        isbn
    }

    /// 貸出中の書籍を登録
    pub fn add_checked_out_book(&self, isbn: &str, borrower: &MemberEmail, due_date: NaiveDate) -> Isbn {
        let isbn = Isbn::new(isbn);
        self.books.add_book(Book {
            loan: Some(Loan {
                borrower: borrower.clone(),
                due_date,
            }),
            ..Book::new(isbn.clone(), format!("Book {}", isbn), "Some Author")
        });
        isbn
    }

    pub fn add_member(
        &self,
        email: &str,
        category: MembershipCategory,
        books_checked_out: u32,
    ) -> MemberEmail {
        let email = MemberEmail::new(email);
        self.members.add_member(Member {
            books_checked_out,
            ..Member::new(email.clone(), "Test Member", category)
        });
        email
    }

    pub fn book(&self, isbn: &Isbn) -> Book {
        self.books.get(isbn).expect("book should exist")
    }

    pub fn member(&self, email: &MemberEmail) -> Member {
        self.members.get(email).expect("member should exist")
    }
}
