mod book_mutations;
mod errors;
mod library_service;
mod member_mutations;
mod outcomes;
mod reports;
mod search;

pub use errors::{LibraryError, Result};
pub use library_service::{ServiceDependencies, checkout_book, return_book};
pub use outcomes::{CheckoutOutcome, DeclineReason, ReturnOutcome};
pub use reports::{ReportKind, format_overdue_report, generate_report, generate_report_of};
pub use search::{SearchKind, search_books, search_books_by};
