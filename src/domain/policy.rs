use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Member, MembershipCategory, Money, UnknownCategory};

/// 貸出ポリシー（会員種別ごと）
///
/// 不変・状態なし。会員ごとには永続化せず、種別から導出する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    max_books: u32,
    loan_period_days: u32,
}

impl CheckoutPolicy {
    pub const REGULAR: CheckoutPolicy = CheckoutPolicy::new(3, 14);
    pub const PREMIUM: CheckoutPolicy = CheckoutPolicy::new(10, 30);
    pub const STUDENT: CheckoutPolicy = CheckoutPolicy::new(5, 21);

    pub const fn new(max_books: u32, loan_period_days: u32) -> Self {
        Self {
            max_books,
            loan_period_days,
        }
    }

    /// 同時に借りられる最大冊数
    pub fn max_books(&self) -> u32 {
        self.max_books
    }

    /// 貸出期間（日数）
    pub fn loan_period_days(&self) -> u32 {
        self.loan_period_days
    }

    /// 現在の貸出冊数が上限未満なら貸出可能
    pub fn can_checkout(&self, member: &Member) -> bool {
        member.books_checked_out < self.max_books
    }

    /// 今日から貸出期間を加えた返却期限
    ///
    /// 日付の表現範囲を超える場合は`None`。
    pub fn due_date_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(u64::from(self.loan_period_days)))
    }
}

/// 延滞料金の計算方式（会員種別ごと）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeSchedule {
    /// 1日あたり定額
    PerDay { daily_rate: Money },
    /// 延滞料金なし
    Waived,
}

impl FeeSchedule {
    pub const REGULAR: FeeSchedule = FeeSchedule::PerDay {
        daily_rate: Money::from_cents(50),
    };
    pub const PREMIUM: FeeSchedule = FeeSchedule::Waived;
    pub const STUDENT: FeeSchedule = FeeSchedule::PerDay {
        daily_rate: Money::from_cents(25),
    };

    /// 延滞日数から料金を計算する
    ///
    /// `PerDay`は日数に比例、`Waived`は常に0。
    pub fn calculate_fee(&self, days_late: u32) -> Money {
        match self {
            FeeSchedule::PerDay { daily_rate } => daily_rate.times(days_late),
            FeeSchedule::Waived => Money::ZERO,
        }
    }
}

/// 会員種別に対応するルールの組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRules {
    pub checkout_policy: CheckoutPolicy,
    pub fee_schedule: FeeSchedule,
}

impl MembershipRules {
    /// 図書館の標準ルール
    pub const fn standard(category: MembershipCategory) -> Self {
        match category {
            MembershipCategory::Regular => Self {
                checkout_policy: CheckoutPolicy::REGULAR,
                fee_schedule: FeeSchedule::REGULAR,
            },
            MembershipCategory::Premium => Self {
                checkout_policy: CheckoutPolicy::PREMIUM,
                fee_schedule: FeeSchedule::PREMIUM,
            },
            MembershipCategory::Student => Self {
                checkout_policy: CheckoutPolicy::STUDENT,
                fee_schedule: FeeSchedule::STUDENT,
            },
        }
    }
}

/// 会員種別からポリシーと料金方式を引くレジストリ
///
/// 起動時に一度だけ構築し、サービスに明示的に渡す。
/// 登録されていない種別は既定値に倒さず`UnknownCategory`で拒否する。
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    rules: HashMap<MembershipCategory, MembershipRules>,
}

impl PolicyRegistry {
    /// 空のレジストリ
    pub fn empty() -> Self {
        Self::default()
    }

    /// すべての種別に標準ルールを登録したレジストリ
    pub fn standard() -> Self {
        MembershipCategory::ALL
            .into_iter()
            .fold(Self::empty(), |registry, category| {
                registry.with(category, MembershipRules::standard(category))
            })
    }

    /// 種別のルールを登録（既存は置き換え）
    pub fn with(mut self, category: MembershipCategory, rules: MembershipRules) -> Self {
        self.rules.insert(category, rules);
        self
    }

    pub fn rules_for(
        &self,
        category: MembershipCategory,
    ) -> Result<MembershipRules, UnknownCategory> {
        self.rules
            .get(&category)
            .copied()
            .ok_or_else(|| UnknownCategory(category.to_string()))
    }

    pub fn checkout_policy(
        &self,
        category: MembershipCategory,
    ) -> Result<CheckoutPolicy, UnknownCategory> {
        self.rules_for(category).map(|rules| rules.checkout_policy)
    }

    pub fn fee_schedule(&self, category: MembershipCategory) -> Result<FeeSchedule, UnknownCategory> {
        self.rules_for(category).map(|rules| rules.fee_schedule)
    }
}
