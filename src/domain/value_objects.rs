use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownCategory;

/// ISBN - 書籍の識別子（一意）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 会員のメールアドレス - 会員の識別子（一意）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberEmail(String);

impl MemberEmail {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 金額（セント単位）
///
/// 延滞料金は1日あたり0.25単位の倍数になるため、浮動小数点ではなく
/// 整数のセントで保持する。表示は小数点以下2桁（例: `2.50`）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// 金額を整数倍する（上限で飽和）
    pub fn times(self, factor: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(factor)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// 会員種別
///
/// 貸出ルールと延滞料金を決定する分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipCategory {
    Regular,
    Premium,
    Student,
}

impl MembershipCategory {
    pub const ALL: [MembershipCategory; 3] = [
        MembershipCategory::Regular,
        MembershipCategory::Premium,
        MembershipCategory::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipCategory::Regular => "REGULAR",
            MembershipCategory::Premium => "PREMIUM",
            MembershipCategory::Student => "STUDENT",
        }
    }
}

impl fmt::Display for MembershipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipCategory {
    type Err = UnknownCategory;

    /// 大文字小文字を区別せずに解釈する。未知の値は既定値に倒さずエラーにする。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Ok(MembershipCategory::Regular),
            "PREMIUM" => Ok(MembershipCategory::Premium),
            "STUDENT" => Ok(MembershipCategory::Student),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// 書籍の貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    CheckedOut,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "AVAILABLE",
            BookStatus::CheckedOut => "CHECKED_OUT",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
