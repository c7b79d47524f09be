pub mod book_repository;
pub mod clock;
pub mod member_repository;
pub mod notification_service;

pub use book_repository::BookRepository;
pub use clock::Clock;
pub use member_repository::MemberRepository;
pub use notification_service::NotificationService;
