use serde::{Deserialize, Serialize};

use super::{Isbn, MemberEmail};

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutBook {
    pub isbn: Isbn,
    pub member_email: MemberEmail,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub isbn: Isbn,
}
