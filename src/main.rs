use library_lending::{
    adapters::{
        email::EmailNotificationService,
        mock::{BookRepository as MockBookRepository, MemberRepository as MockMemberRepository},
    },
    application::library::{
        ServiceDependencies, checkout_book, generate_report, return_book, search_books,
    },
    config::Config,
    domain::{
        Book, Isbn, Member, MemberEmail, MembershipCategory, PolicyRegistry,
        commands::{CheckoutBook, ReturnBook},
    },
    ports::Clock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let clock = config.clock();
    tracing::info!(today = %clock.today(), "Starting library lending demo");

    // Initialize adapters
    let book_repository = Arc::new(MockBookRepository::new());
    let member_repository = Arc::new(MockMemberRepository::new());
    seed(&book_repository, &member_repository);

    let deps = ServiceDependencies {
        book_repository,
        member_repository,
        notification_service: Arc::new(EmailNotificationService::new()),
        clock,
        policies: PolicyRegistry::standard(),
    };

    let isbn = Isbn::new("978-1718503106");
    let outcome = checkout_book(
        &deps,
        CheckoutBook {
            isbn: isbn.clone(),
            member_email: MemberEmail::new("student@example.com"),
        },
    )
    .await?;
    tracing::info!("Checkout: {}", outcome);

    let found = search_books(&deps, "rust", "title").await?;
    tracing::info!("Search results: {}", serde_json::to_string(&found)?);

    for kind in ["available", "members", "overdue"] {
        let report = generate_report(&deps, kind).await?;
        tracing::info!("Report {}:\n{}", kind, report);
    }

    let outcome = return_book(&deps, ReturnBook { isbn }).await?;
    tracing::info!("Return: {}", outcome);

    Ok(())
}

/// デモ用の蔵書と会員
fn seed(books: &MockBookRepository, members: &MockMemberRepository) {
    books.add_book(Book::new(
        Isbn::new("978-1718503106"),
        "The Rust Programming Language",
        "Steve Klabnik",
    ));
    books.add_book(Book::new(
        Isbn::new("978-1492052593"),
        "Programming Rust",
        "Jim Blandy",
    ));
    books.add_book(Book::new(
        Isbn::new("978-0441013593"),
        "Dune",
        "Frank Herbert",
    ));

    members.add_member(Member::new(
        MemberEmail::new("regular@example.com"),
        "Riley Regular",
        MembershipCategory::Regular,
    ));
    members.add_member(Member::new(
        MemberEmail::new("premium@example.com"),
        "Parker Premium",
        MembershipCategory::Premium,
    ));
    members.add_member(Member::new(
        MemberEmail::new("student@example.com"),
        "Sam Student",
        MembershipCategory::Student,
    ));
}
